//! Books service

use std::borrow::Cow;
use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookDeleted, CreateBook},
    repository::{BookStore, StoreError},
};

const DUPLICATE_NAME: &str = "Livro de mesmo nome já salvo na base de dados!";
const SAVE_FAILED: &str = "Não foi possível salvar novo livro!";
const BOOK_NOT_FOUND: &str = "Livro não encontrado na base de dados!";
const AUTHOR_NOT_FOUND: &str = "Livro do autor não encontrado na base de dados!";
const DELETE_NOT_FOUND: &str = "Produto não encontrado na base de dados!";
const DELETED: &str = "Produto removido";

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BookStore>,
}

impl BooksService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// Add a new book
    pub async fn add(&self, book: CreateBook) -> AppResult<Book> {
        book.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        match self.store.create(&book).await {
            Ok(created) => Ok(created),
            Err(StoreError::Duplicate) => Err(AppError::Conflict(DUPLICATE_NAME.to_string())),
            Err(StoreError::Storage(e)) => {
                tracing::warn!("Failed to store book {:?}: {}", book.name, e);
                Err(AppError::BadRequest(SAVE_FAILED.to_string()))
            }
        }
    }

    /// List every book
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.store.list_all().await?)
    }

    /// Get a book by its exact name
    pub async fn get_by_name(&self, name: &str) -> AppResult<Book> {
        self.store
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))
    }

    /// Get the first book written by an author
    pub async fn get_by_author(&self, author: &str) -> AppResult<Book> {
        self.store
            .find_by_author(author)
            .await?
            .ok_or_else(|| AppError::NotFound(AUTHOR_NOT_FOUND.to_string()))
    }

    /// Delete a book by name.
    ///
    /// Clients escape the name before it is query-encoded, so it is
    /// percent-decoded twice more after extraction.
    pub async fn delete_by_name(&self, raw_name: &str) -> AppResult<BookDeleted> {
        let name = decode_twice(raw_name);
        tracing::debug!(name = %name, "Deleting book");

        match self.store.delete_by_name(&name).await? {
            0 => Err(AppError::NotFound(DELETE_NOT_FOUND.to_string())),
            _ => Ok(BookDeleted {
                message: DELETED.to_string(),
                id: name,
            }),
        }
    }

    /// Whether the store answers
    pub async fn ready(&self) -> AppResult<()> {
        Ok(self.store.ping().await?)
    }
}

fn percent_decode(input: &str) -> Cow<'_, str> {
    match urlencoding::decode_binary(input.as_bytes()) {
        Cow::Borrowed(_) => Cow::Borrowed(input),
        Cow::Owned(bytes) => Cow::Owned(String::from_utf8_lossy(&bytes).into_owned()),
    }
}

pub(crate) fn decode_twice(input: &str) -> String {
    percent_decode(&percent_decode(input)).into_owned()
}
