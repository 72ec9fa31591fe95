//! Book submission validation middleware.
//!
//! Runs ahead of the create-book handler: empty-body rejection, mandatory
//! presence, per-field format checks (including UUID syntax for the
//! referenced user), normalization, referenced-user existence, and duplicate
//! title/ISBN lookups. The handler receives the normalized [`CreateBook`]
//! payload through the request extensions.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use chrono::NaiveDate;
use serde_json::{Map, Value};
use uuid::Uuid;

use super::payload::{read_object_body, string_field, with_payload, Field};
use crate::api::AppState;
use crate::domain::CreateBook;
use crate::errors::{AppError, FieldErrors};
use crate::validation::{
    collapse_whitespace, is_valid_book_title, is_valid_category, is_valid_excerpt, is_valid_isbn,
    is_valid_release_date, is_valid_subcategory, normalize_isbn,
};

const MANDATORY_FIELDS: &[&str] = &[
    "title",
    "excerpt",
    "userId",
    "ISBN",
    "category",
    "subcategory",
    "releasedAt",
];

pub async fn validate_book(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (parts, body) = read_object_body(request, "can't create book with empty details").await?;

    // Mandatory presence, before any format concern
    let mut missing = FieldErrors::new();
    for field in MANDATORY_FIELDS {
        if matches!(string_field(&body, field), Field::Missing) {
            let message = if *field == "releasedAt" {
                "releasedAt date is mandatory".to_string()
            } else {
                format!("{} is mandatory", field)
            };
            missing.push(format!("{}Error", field), message);
        }
    }
    if !missing.is_empty() {
        return Err(AppError::Validation(missing));
    }

    // Field formats
    let mut invalid = FieldErrors::new();
    let title = checked(&body, "title", is_valid_book_title, "invalid title format", &mut invalid);
    let excerpt = checked(
        &body,
        "excerpt",
        is_valid_excerpt,
        "invalid excerpt format",
        &mut invalid,
    );
    let user_id = checked_user_id(&body, &mut invalid);
    let isbn = checked(&body, "ISBN", is_valid_isbn, "invalid ISBN format", &mut invalid);
    let category = checked(
        &body,
        "category",
        is_valid_category,
        "invalid category format",
        &mut invalid,
    );
    let subcategory = checked(
        &body,
        "subcategory",
        is_valid_subcategory,
        "invalid subcategory format",
        &mut invalid,
    );
    let released_at = checked_release_date(&body, &mut invalid);
    if !invalid.is_empty() {
        return Err(AppError::Validation(invalid));
    }

    // All checks passed above, the unwraps cannot fire
    let title = collapse_whitespace(title.unwrap());
    let excerpt = collapse_whitespace(excerpt.unwrap());
    let user_id = user_id.unwrap();
    let isbn = normalize_isbn(isbn.unwrap());
    let category = collapse_whitespace(category.unwrap()).to_lowercase();
    let subcategory = collapse_whitespace(subcategory.unwrap()).to_lowercase();
    let released_at = released_at.unwrap();

    // Referenced user must exist
    if state.users.find_by_id(user_id).await?.is_none() {
        return Err(AppError::not_found("user not exists with this userId"));
    }

    // Duplicate lookups against the persisted books
    let mut duplicate = FieldErrors::new();
    if state.books.find_by_title(&title).await?.is_some() {
        duplicate.push("titleError", "This title is already registered");
    }
    if state.books.find_by_isbn(&isbn).await?.is_some() {
        duplicate.push("ISBNError", "This ISBN is already registered");
    }
    if !duplicate.is_empty() {
        return Err(AppError::Conflict(duplicate));
    }

    let payload = CreateBook {
        title,
        excerpt,
        user_id,
        isbn,
        category,
        subcategory,
        released_at,
    };

    Ok(next.run(with_payload(parts, payload)).await)
}

/// Validate a mandatory field's format, recording a failure in the bag.
fn checked<'a>(
    body: &'a Map<String, Value>,
    key: &str,
    valid: fn(&str) -> bool,
    message: &str,
    invalid: &mut FieldErrors,
) -> Option<&'a str> {
    match string_field(body, key) {
        Field::Str(s) if valid(s) => Some(s),
        _ => {
            invalid.push(format!("{}Error", key), message);
            None
        }
    }
}

/// The referenced user id must be syntactically a UUID.
fn checked_user_id(body: &Map<String, Value>, invalid: &mut FieldErrors) -> Option<Uuid> {
    if let Field::Str(s) = string_field(body, "userId") {
        if let Ok(id) = Uuid::parse_str(s.trim()) {
            return Some(id);
        }
    }
    invalid.push("userIdError", "invalid userId");
    None
}

/// The release date must match YYYY-MM-DD and be a real calendar date.
fn checked_release_date(body: &Map<String, Value>, invalid: &mut FieldErrors) -> Option<NaiveDate> {
    if let Field::Str(s) = string_field(body, "releasedAt") {
        if is_valid_release_date(s) {
            // the shape was just checked, parsing cannot fail
            return NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok();
        }
    }
    invalid.push(
        "releasedAtError",
        "invalid releasedAt date format, write it in this format YYYY-MM-DD",
    );
    None
}
