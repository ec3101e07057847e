//! API handlers for Estante HTTP endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    extract::{FromRequest, FromRequestParts},
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// `axum::Form` whose rejection is reported as an [`AppError`]
#[derive(FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct ApiForm<T>(pub T);

/// `axum::extract::Query` whose rejection is reported as an [`AppError`]
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let docs_path = state.config.docs.path.clone();

    let routes = Router::new()
        .route("/", get(books::home))
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/adicionar_livro", post(books::add_book))
        .route("/lista_livros", get(books::list_books))
        .route("/busca_livro", get(books::get_book))
        .route("/busca_autor", get(books::get_book_by_author))
        .route("/deletar_livro", delete(books::delete_book))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router(&docs_path))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
