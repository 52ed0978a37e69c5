//!
//! # Book Repository
//!
//! Mediates all reads and writes to the `books` table, exposing a narrow CRUD
//! contract to the route handlers so they never touch SQL directly. Every
//! operation can fail with a store-access error, surfaced as `AppError`.

use crate::error::AppError;
use crate::models::{Book, BookInput};
use sqlx::PgPool;

const BOOK_COLUMNS: &str = "id, title, author, language, category, published_year";

/// Repository for the `books` table, cloned cheaply around the `PgPool`.
#[derive(Clone)]
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns all books in store-native order (no defined sort).
    pub async fn get_books(&self) -> Result<Vec<Book>, AppError> {
        let books = sqlx::query_as::<_, Book>(&format!("SELECT {} FROM books", BOOK_COLUMNS))
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    /// Returns the book with the given identifier, or `None` if absent.
    pub async fn get_book_by_id(&self, id: i32) -> Result<Option<Book>, AppError> {
        let book = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books WHERE id = $1",
            BOOK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    /// Returns all books with an exact (case-sensitive) author match.
    pub async fn get_books_by_author(&self, author: &str) -> Result<Vec<Book>, AppError> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books WHERE author = $1",
            BOOK_COLUMNS
        ))
        .bind(author)
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    /// Returns all books with an exact category match.
    pub async fn get_books_by_category(&self, category: &str) -> Result<Vec<Book>, AppError> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books WHERE category = $1",
            BOOK_COLUMNS
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    /// Persists a new book. The store assigns the identifier; the stored book
    /// is returned.
    pub async fn create_book(&self, input: &BookInput) -> Result<Book, AppError> {
        let book = sqlx::query_as::<_, Book>(&format!(
            "INSERT INTO books (title, author, language, category, published_year) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {}",
            BOOK_COLUMNS
        ))
        .bind(&input.title)
        .bind(&input.author)
        .bind(&input.language)
        .bind(&input.category)
        .bind(input.published_year)
        .fetch_one(&self.pool)
        .await?;
        Ok(book)
    }

    /// Replaces all fields of the book matching `book.id`.
    pub async fn update_book(&self, book: &Book) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE books \
             SET title = $1, author = $2, language = $3, category = $4, published_year = $5 \
             WHERE id = $6",
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.language)
        .bind(&book.category)
        .bind(book.published_year)
        .bind(book.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Removes the book if present; silently succeeds if absent.
    pub async fn delete_book(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Existence check for a book identifier.
    pub async fn book_exists(&self, id: i32) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM books WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}
