//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Minha Estante",
        version = "1.0.0",
        description = "Catalog of books with their reading status"
    ),
    paths(
        books::home,
        books::add_book,
        books::list_books,
        books::get_book,
        books::get_book_by_author,
        books::delete_book,
        health::health_check,
        health::readiness_check,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::BookList,
            crate::models::book::BookDeleted,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "Documentação", description = "Seleção de documentação"),
        (name = "Livros", description = "Adição, visualização e remoção de livros à base de dados"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router(docs_path: &str) -> Router {
    Router::new().merge(SwaggerUi::new(docs_path.to_string()).url("/api-docs/openapi.json", ApiDoc::openapi()))
}
