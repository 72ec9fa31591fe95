//! Books API - users, books, and the validation middleware in front of them.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and payloads
//! - **validation**: Pure format validators and normalizers
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **api**: HTTP handlers, validation middleware, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;
pub mod validation;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Address, Book, CreateBook, CreateUser, Password, User};
pub use errors::{AppError, AppResult, FieldErrors};
