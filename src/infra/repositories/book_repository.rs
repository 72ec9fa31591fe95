//! Book repository implementation with soft delete support.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::book::{self, ActiveModel, Entity as BookEntity};
use crate::domain::{Book, CreateBook};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Book repository trait for dependency injection.
///
/// `find_by_id` excludes soft-deleted records; the uniqueness lookups
/// (`find_by_title`, `find_by_isbn`) include them so a deleted book still
/// blocks re-registration of its title or ISBN.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find active book by ID (excludes soft-deleted)
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Book>>;

    /// Find book by exact title, including soft-deleted
    async fn find_by_title(&self, title: &str) -> AppResult<Option<Book>>;

    /// Find book by normalized ISBN, including soft-deleted
    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>>;

    /// Create a new book
    async fn create(&self, book: CreateBook) -> AppResult<Book>;

    /// Soft delete book by ID (sets deleted_at timestamp)
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of BookRepository backed by SeaORM
pub struct BookStore {
    db: DatabaseConnection,
}

impl BookStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for BookStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        let result = BookEntity::find_by_id(id)
            .filter(book::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Book::from))
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Book>> {
        let result = BookEntity::find()
            .filter(book::Column::Title.eq(title))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Book::from))
    }

    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        let result = BookEntity::find()
            .filter(book::Column::Isbn.eq(isbn))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Book::from))
    }

    async fn create(&self, new_book: CreateBook) -> AppResult<Book> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(new_book.title),
            excerpt: Set(new_book.excerpt),
            user_id: Set(new_book.user_id),
            isbn: Set(new_book.isbn),
            category: Set(new_book.category),
            subcategory: Set(new_book.subcategory),
            released_at: Set(new_book.released_at),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Book::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        // Soft delete: set deleted_at timestamp
        let book = BookEntity::find_by_id(id)
            .filter(book::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found("no book exists with this bookId"))?;

        let mut active: ActiveModel = book.into();
        let now = Utc::now();
        active.deleted_at = Set(Some(now));
        active.updated_at = Set(now);

        active.update(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }
}
