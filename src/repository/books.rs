//! Books repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use thiserror::Error;

use crate::models::book::{Book, CreateBook};

/// Failure of a store write
#[derive(Error, Debug)]
pub enum StoreError {
    /// The name is already taken by another book
    #[error("a book with this name is already stored")]
    Duplicate,

    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Persistent collection of books.
///
/// Name uniqueness is enforced by the storage itself: `create` always
/// attempts the insert and reports [`StoreError::Duplicate`] only when the
/// constraint rejects it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Insert a new book and return it with its assigned id
    async fn create(&self, book: &CreateBook) -> Result<Book, StoreError>;

    /// Every stored book, ordered by id
    async fn list_all(&self) -> Result<Vec<Book>, sqlx::Error>;

    /// Exact match on name
    async fn find_by_name(&self, name: &str) -> Result<Option<Book>, sqlx::Error>;

    /// Exact match on author; the book with the lowest id wins
    async fn find_by_author(&self, author: &str) -> Result<Option<Book>, sqlx::Error>;

    /// Remove the book with this name, returning how many rows went away
    async fn delete_by_name(&self, name: &str) -> Result<u64, sqlx::Error>;

    /// Round-trip to the database
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Create the books table when it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS books (
                id SERIAL PRIMARY KEY,
                name VARCHAR(100) NOT NULL UNIQUE,
                author VARCHAR(100) NOT NULL,
                genre VARCHAR(100) NOT NULL,
                status VARCHAR(5) NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn create(&self, book: &CreateBook) -> Result<Book, StoreError> {
        let result = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (name, author, genre, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, author, genre, status
            "#,
        )
        .bind(&book.name)
        .bind(&book.author)
        .bind(&book.genre)
        .bind(&book.status)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(created) => {
                tracing::info!(id = created.id, name = %created.name, "Book stored");
                Ok(created)
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                tracing::debug!(name = %book.name, "Book name already stored");
                Err(StoreError::Duplicate)
            }
            Err(e) => Err(StoreError::Storage(e)),
        }
    }

    async fn list_all(&self) -> Result<Vec<Book>, sqlx::Error> {
        sqlx::query_as::<_, Book>("SELECT id, name, author, genre, status FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Book>, sqlx::Error> {
        sqlx::query_as::<_, Book>(
            "SELECT id, name, author, genre, status FROM books WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_by_author(&self, author: &str) -> Result<Option<Book>, sqlx::Error> {
        sqlx::query_as::<_, Book>(
            "SELECT id, name, author, genre, status FROM books WHERE author = $1 ORDER BY id LIMIT 1",
        )
        .bind(author)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE name = $1")
            .bind(name)
            .execute(&self.pool)
            .await?;

        tracing::debug!(name, removed = result.rows_affected(), "Delete by name");
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
