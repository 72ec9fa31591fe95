//! Book service - book-related business logic.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Book, CreateBook};
use crate::errors::{AppError, AppResult};
use crate::infra::BookRepository;

/// Book service trait for dependency injection.
#[async_trait]
pub trait BookService: Send + Sync {
    /// Create a book from a validated, normalized payload
    async fn create_book(&self, payload: CreateBook) -> AppResult<Book>;

    /// Get active book by ID (excludes soft-deleted)
    async fn get_book(&self, id: Uuid) -> AppResult<Book>;

    /// Soft delete book (sets deleted_at timestamp)
    async fn delete_book(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of BookService.
pub struct BookManager {
    books: Arc<dyn BookRepository>,
}

impl BookManager {
    /// Create new book service instance
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }
}

#[async_trait]
impl BookService for BookManager {
    async fn create_book(&self, payload: CreateBook) -> AppResult<Book> {
        self.books.create(payload).await
    }

    async fn get_book(&self, id: Uuid) -> AppResult<Book> {
        self.books
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("no book exists with this bookId"))
    }

    async fn delete_book(&self, id: Uuid) -> AppResult<()> {
        self.books.delete(id).await
    }
}
