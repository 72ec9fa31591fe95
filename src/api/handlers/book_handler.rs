//! Book handlers: creation, retrieval and deletion.

use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};
use uuid::Uuid;

use crate::api::AppState;
use crate::domain::{BookResponse, CreateBook};
use crate::errors::{AppError, AppResult};
use crate::types::{ApiResponse, Created};

/// Create a new book.
///
/// Only reachable through the book validation middleware; the normalized
/// payload (ISBN stripped of separators, referenced user verified) arrives
/// via extensions.
#[utoipa::path(
    post,
    path = "/books",
    tag = "Books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created successfully", body = BookResponse),
        (status = 400, description = "Missing or malformed fields"),
        (status = 404, description = "Referenced user does not exist"),
        (status = 409, description = "Title or ISBN already registered")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Extension(payload): Extension<CreateBook>,
) -> AppResult<Created<BookResponse>> {
    let book = state.book_service.create_book(payload).await?;

    Ok(Created(BookResponse::from(book)))
}

/// Get a book by id
#[utoipa::path(
    get,
    path = "/books/{bookId}",
    tag = "Books",
    params(("bookId" = String, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book found", body = BookResponse),
        (status = 400, description = "Malformed book id"),
        (status = 404, description = "No active book with this id")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<ApiResponse<BookResponse>>> {
    let id = parse_book_id(&book_id)?;
    let book = state.book_service.get_book(id).await?;

    Ok(Json(ApiResponse::success(BookResponse::from(book))))
}

/// Soft delete a book by id
#[utoipa::path(
    delete,
    path = "/books/{bookId}",
    tag = "Books",
    params(("bookId" = String, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 400, description = "Malformed book id"),
        (status = 404, description = "No active book with this id")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = parse_book_id(&book_id)?;
    state.book_service.delete_book(id).await?;

    Ok(Json(ApiResponse::message("book deleted successfully")))
}

/// Path ids arrive as strings so a malformed value maps to 400, not 404
fn parse_book_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::bad_request("invalid bookId"))
}
