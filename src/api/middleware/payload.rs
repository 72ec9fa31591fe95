//! Shared request-body plumbing for the validation middleware.

use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::request::Parts;
use serde_json::{Map, Value};

use crate::errors::AppError;

/// Upper bound on buffered request bodies.
const BODY_LIMIT: usize = 1024 * 1024;

/// A scalar field as found in the request body.
pub(super) enum Field<'a> {
    /// Absent, null, or a blank string
    Missing,
    /// Present but not a JSON string
    NotAString,
    /// Present string value (not yet validated)
    Str(&'a str),
}

/// Buffer the request body and parse it as a non-empty JSON object.
///
/// Returns the request parts (for rebuilding the request after validation)
/// together with the parsed object.
pub(super) async fn read_object_body(
    request: Request,
    empty_message: &str,
) -> Result<(Parts, Map<String, Value>), AppError> {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, BODY_LIMIT)
        .await
        .map_err(|e| AppError::bad_request(format!("failed to read request body: {}", e)))?;

    if bytes.is_empty() {
        return Err(AppError::bad_request(empty_message));
    }

    let value: Value = serde_json::from_slice(&bytes)
        .map_err(|_| AppError::bad_request("request body is not valid JSON"))?;

    let Value::Object(map) = value else {
        return Err(AppError::bad_request("request body must be a JSON object"));
    };

    if map.is_empty() {
        return Err(AppError::bad_request(empty_message));
    }

    Ok((parts, map))
}

/// Classify a body field for the presence and format passes.
pub(super) fn string_field<'a>(body: &'a Map<String, Value>, key: &str) -> Field<'a> {
    match body.get(key) {
        None | Some(Value::Null) => Field::Missing,
        Some(Value::String(s)) if s.trim().is_empty() => Field::Missing,
        Some(Value::String(s)) => Field::Str(s),
        Some(_) => Field::NotAString,
    }
}

/// Rebuild the request with an empty body, carrying the validated payload
/// in its extensions.
pub(super) fn with_payload<T>(parts: Parts, payload: T) -> Request
where
    T: Clone + Send + Sync + 'static,
{
    let mut request = Request::from_parts(parts, Body::empty());
    request.extensions_mut().insert(payload);
    request
}
