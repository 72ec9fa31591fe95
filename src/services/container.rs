//! Service Container - Centralized service access.
//!
//! Wires repositories into services from a single database connection and
//! hands both out behind trait objects.

use std::sync::Arc;

use super::{AuthService, Authenticator, BookManager, BookService};
use crate::config::Config;
use crate::infra::{BookRepository, BookStore, UserRepository, UserStore};

/// Concrete service container
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    book_service: Arc<dyn BookService>,
    users: Arc<dyn UserRepository>,
    books: Arc<dyn BookRepository>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        book_service: Arc<dyn BookService>,
        users: Arc<dyn UserRepository>,
        books: Arc<dyn BookRepository>,
    ) -> Self {
        Self {
            auth_service,
            book_service,
            users,
            books,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(UserStore::new(db.clone()));
        let books: Arc<dyn BookRepository> = Arc::new(BookStore::new(db));
        let auth_service = Arc::new(Authenticator::new(users.clone(), config));
        let book_service = Arc::new(BookManager::new(books.clone()));

        Self {
            auth_service,
            book_service,
            users,
            books,
        }
    }

    /// Get authentication service
    pub fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    /// Get book service
    pub fn books_service(&self) -> Arc<dyn BookService> {
        self.book_service.clone()
    }

    /// Get user repository (used by the validation middleware)
    pub fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    /// Get book repository (used by the validation middleware)
    pub fn books(&self) -> Arc<dyn BookRepository> {
        self.books.clone()
    }
}
