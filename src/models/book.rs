//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Stored book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Identifier assigned by the database
    pub id: i32,
    /// Title, unique across the catalog
    pub name: String,
    pub author: String,
    pub genre: String,
    /// Short reading status code
    pub status: String,
}

/// Form submitted to add a book
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    #[schema(example = "Dune")]
    pub name: String,
    #[validate(length(max = 100, message = "Author must be at most 100 characters"))]
    #[schema(example = "Frank Herbert")]
    pub author: String,
    #[validate(length(max = 100, message = "Genre must be at most 100 characters"))]
    #[schema(example = "Sci-Fi")]
    pub genre: String,
    #[validate(length(max = 5, message = "Status must be at most 5 characters"))]
    #[schema(example = "read")]
    pub status: String,
}

/// Lookup by book name
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookNameQuery {
    /// Exact book name
    pub name: String,
}

/// Lookup by author
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct AuthorQuery {
    /// Exact author name
    pub author: String,
}

/// Every stored book
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookList {
    pub produtos: Vec<Book>,
}

/// Confirmation returned after a deletion
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookDeleted {
    pub message: String,
    /// Name of the removed book
    pub id: String,
}
