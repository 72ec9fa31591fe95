//! User registration validation middleware.
//!
//! Runs ahead of the register handler and performs, in strict order:
//! empty-body rejection, mandatory-field presence checks, per-field format
//! checks, normalization, and duplicate lookups against the user store.
//! The handler receives the normalized [`CreateUser`] payload through the
//! request extensions; any failure terminates the request with a structured
//! error response.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::{Map, Value};

use super::payload::{read_object_body, string_field, with_payload, Field};
use crate::api::AppState;
use crate::domain::{Address, CreateUser};
use crate::errors::{AppError, FieldErrors};
use crate::validation::{
    collapse_whitespace, is_valid_city, is_valid_email, is_valid_name, is_valid_password,
    is_valid_phone, is_valid_pincode, is_valid_street, is_valid_title, normalize_email,
    reduce_phone, trim_and_uppercase,
};

const MANDATORY_FIELDS: &[&str] = &["title", "name", "phone", "email", "password"];

pub async fn validate_user(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (parts, body) = read_object_body(request, "can't create data with empty body").await?;

    // Mandatory presence, before any format concern
    let mut missing = FieldErrors::new();
    for field in MANDATORY_FIELDS {
        if matches!(string_field(&body, field), Field::Missing) {
            missing.push(
                format!("{}Error", field),
                format!("mandatory {} is missing", field),
            );
        }
    }
    if !missing.is_empty() {
        return Err(AppError::Validation(missing));
    }

    // Field formats; address sub-fields only when an address was supplied
    let mut invalid = FieldErrors::new();
    let title = checked(&body, "title", is_valid_title, &mut invalid);
    let name = checked(&body, "name", is_valid_name, &mut invalid);
    let phone = checked(&body, "phone", is_valid_phone, &mut invalid);
    let email = checked(&body, "email", is_valid_email, &mut invalid);
    let password = checked(&body, "password", is_valid_password, &mut invalid);
    let address = checked_address(&body, &mut invalid);
    if !invalid.is_empty() {
        return Err(AppError::Validation(invalid));
    }

    // All checks passed above, the unwraps cannot fire
    let title = collapse_whitespace(title.unwrap());
    let name = trim_and_uppercase(name.unwrap());
    let phone = collapse_whitespace(phone.unwrap());
    let email = normalize_email(email.unwrap());
    let password = password.unwrap().to_string();

    // Duplicate lookups against the persisted users
    let mut duplicate = FieldErrors::new();
    if state.users.find_by_email(&email).await?.is_some() {
        duplicate.push(
            "emailError",
            format!("this {} is already registered", email),
        );
    }
    let reduced = reduce_phone(&phone);
    if state.users.find_by_phone_suffix(&reduced).await?.is_some() {
        duplicate.push(
            "phoneError",
            format!("this {} is already registered", phone),
        );
    }
    if !duplicate.is_empty() {
        return Err(AppError::Conflict(duplicate));
    }

    let payload = CreateUser {
        title,
        name,
        phone,
        email,
        password,
        address,
    };

    Ok(next.run(with_payload(parts, payload)).await)
}

/// Validate a mandatory field's format, recording a failure in the bag.
fn checked<'a>(
    body: &'a Map<String, Value>,
    key: &str,
    valid: fn(&str) -> bool,
    invalid: &mut FieldErrors,
) -> Option<&'a str> {
    match string_field(body, key) {
        Field::Str(s) if valid(s) => Some(s),
        _ => {
            invalid.push(format!("{}Error", key), format!("{} is invalid", key));
            None
        }
    }
}

/// Validate the optional address object and its present sub-fields.
///
/// The address is only dereferenced when actually supplied; a missing
/// address yields no errors and no payload.
fn checked_address(body: &Map<String, Value>, invalid: &mut FieldErrors) -> Option<Address> {
    let address = match body.get("address") {
        None | Some(Value::Null) => return None,
        Some(Value::Object(map)) => map,
        Some(_) => {
            invalid.push("addressError", "address is invalid");
            return None;
        }
    };

    let street = address_part(address, "street", is_valid_street, invalid);
    let city = address_part(address, "city", is_valid_city, invalid);
    let pincode = address_part(address, "pincode", is_valid_pincode, invalid);

    let normalized = Address {
        street: street.map(collapse_whitespace),
        city: city.map(collapse_whitespace),
        pincode: pincode.map(collapse_whitespace),
    };
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Validate an optional address sub-field when present.
fn address_part<'a>(
    address: &'a Map<String, Value>,
    key: &str,
    valid: fn(&str) -> bool,
    invalid: &mut FieldErrors,
) -> Option<&'a str> {
    match string_field(address, key) {
        Field::Missing => None,
        Field::Str(s) if valid(s) => Some(s),
        _ => {
            invalid.push(format!("{}Error", key), format!("{} is invalid", key));
            None
        }
    }
}
