//! Book catalog endpoints

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{AuthorQuery, Book, BookDeleted, BookList, BookNameQuery, CreateBook},
};

use super::{ApiForm, ApiQuery};

/// Redirect to the API documentation
#[utoipa::path(
    get,
    path = "/",
    tag = "Documentação",
    responses(
        (status = 302, description = "Redirect to the documentation page")
    )
)]
pub async fn home(State(state): State<crate::AppState>) -> impl IntoResponse {
    (
        StatusCode::FOUND,
        [(header::LOCATION, state.config.docs.path.clone())],
    )
}

/// Add a new book to the catalog
#[utoipa::path(
    post,
    path = "/adicionar_livro",
    tag = "Livros",
    request_body(content = CreateBook, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Book stored", body = Book),
        (status = 409, description = "A book with the same name already exists", body = crate::error::ErrorResponse),
        (status = 400, description = "The book could not be stored", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid field values", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    ApiForm(data): ApiForm<CreateBook>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.add(data).await?;
    Ok(Json(book))
}

/// List every stored book
#[utoipa::path(
    get,
    path = "/lista_livros",
    tag = "Livros",
    responses(
        (status = 200, description = "All books, possibly none", body = BookList)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<BookList>> {
    let produtos = state.services.books.list().await?;
    Ok(Json(BookList { produtos }))
}

/// Find a book by its name
#[utoipa::path(
    get,
    path = "/busca_livro",
    tag = "Livros",
    params(BookNameQuery),
    responses(
        (status = 200, description = "Book found", body = Book),
        (status = 404, description = "No book with this name", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    ApiQuery(query): ApiQuery<BookNameQuery>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_name(&query.name).await?;
    Ok(Json(book))
}

/// Find a book by its author
#[utoipa::path(
    get,
    path = "/busca_autor",
    tag = "Livros",
    params(AuthorQuery),
    responses(
        (status = 200, description = "First book of the author", body = Book),
        (status = 404, description = "No book by this author", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book_by_author(
    State(state): State<crate::AppState>,
    ApiQuery(query): ApiQuery<AuthorQuery>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_author(&query.author).await?;
    Ok(Json(book))
}

/// Delete a book by its name
#[utoipa::path(
    delete,
    path = "/deletar_livro",
    tag = "Livros",
    params(BookNameQuery),
    responses(
        (status = 200, description = "Book removed", body = BookDeleted),
        (status = 404, description = "No book with this name", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    ApiQuery(query): ApiQuery<BookNameQuery>,
) -> AppResult<Json<BookDeleted>> {
    let deleted = state.services.books.delete_by_name(&query.name).await?;
    Ok(Json(deleted))
}
