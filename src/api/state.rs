//! Application state - Dependency injection container.
//!
//! Provides centralized access to services, repositories and infrastructure.
//! The repositories are exposed directly because the validation middleware
//! performs its duplicate-existence checks against them.

use std::sync::Arc;

use crate::infra::{BookRepository, Database, UserRepository};
use crate::services::{AuthService, BookService, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Book service
    pub book_service: Arc<dyn BookService>,
    /// User repository (duplicate checks in validation middleware)
    pub users: Arc<dyn UserRepository>,
    /// Book repository (duplicate checks in validation middleware)
    pub books: Arc<dyn BookRepository>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: crate::config::Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);

        Self {
            auth_service: container.auth(),
            book_service: container.books_service(),
            users: container.users(),
            books: container.books(),
            database,
        }
    }

    /// Create application state with manually injected services.
    ///
    /// Used by tests to substitute in-memory repository fakes.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        book_service: Arc<dyn BookService>,
        users: Arc<dyn UserRepository>,
        books: Arc<dyn BookRepository>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            book_service,
            users,
            books,
            database,
        }
    }
}
