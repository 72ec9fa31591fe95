//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{book_handler, user_handler};
use crate::domain::{Address, BookResponse, CreateBook, CreateUser, UserResponse};
use crate::services::TokenResponse;

/// OpenAPI documentation for the Books API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Books API",
        version = "0.1.0",
        description = "Books management API with request validation middleware",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::register,
        user_handler::login,
        // Book endpoints
        book_handler::create_book,
        book_handler::get_book,
        book_handler::delete_book,
    ),
    components(
        schemas(
            // Domain types
            Address,
            CreateUser,
            UserResponse,
            CreateBook,
            BookResponse,
            // Auth types
            user_handler::LoginRequest,
            TokenResponse,
        )
    ),
    tags(
        (name = "Users", description = "User registration and login"),
        (name = "Books", description = "Book management operations")
    )
)]
pub struct ApiDoc;
