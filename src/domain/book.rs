//! Book domain entity and related types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Book domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub user_id: Uuid,
    pub isbn: String,
    pub category: String,
    pub subcategory: String,
    pub released_at: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft delete timestamp (None = active, Some = deleted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Book {
    /// Check if book is soft deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Normalized book submission payload, produced by the book validation
/// middleware. The ISBN is already stripped of separators and the
/// referenced user is known to exist.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    /// Book title, unique across books
    #[schema(example = "The Great Gatsby")]
    pub title: String,
    /// Short excerpt
    #[schema(example = "A story of wealth and loss.")]
    pub excerpt: String,
    /// Identifier of the submitting user
    pub user_id: Uuid,
    /// ISBN-13 without separators, unique across books
    #[serde(rename = "ISBN")]
    #[schema(example = "9780140449136")]
    pub isbn: String,
    /// Category from the allowed vocabulary
    #[schema(example = "fiction")]
    pub category: String,
    /// Subcategory from the allowed vocabulary
    #[schema(example = "novel")]
    pub subcategory: String,
    /// Release date
    pub released_at: NaiveDate,
}

/// Book response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    /// Unique book identifier
    pub id: Uuid,
    /// Book title
    #[schema(example = "The Great Gatsby")]
    pub title: String,
    /// Short excerpt
    pub excerpt: String,
    /// Identifier of the submitting user
    pub user_id: Uuid,
    /// ISBN-13 without separators
    #[serde(rename = "ISBN")]
    #[schema(example = "9780140449136")]
    pub isbn: String,
    /// Category
    #[schema(example = "fiction")]
    pub category: String,
    /// Subcategory
    #[schema(example = "novel")]
    pub subcategory: String,
    /// Release date
    pub released_at: NaiveDate,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            excerpt: book.excerpt,
            user_id: book.user_id,
            isbn: book.isbn,
            category: book.category,
            subcategory: book.subcategory,
            released_at: book.released_at,
            created_at: book.created_at,
        }
    }
}
