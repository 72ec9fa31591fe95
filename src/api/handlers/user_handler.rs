//! User handlers: registration and login.

use axum::{extract::State, http::StatusCode, response::Json, Extension};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CreateUser, UserResponse};
use crate::errors::AppResult;
use crate::services::TokenResponse;
use crate::types::ApiResponse;

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User email address
    #[validate(email(message = "email is invalid"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password
    #[validate(length(min = 1, message = "password is mandatory"))]
    #[schema(example = "Secret123")]
    pub password: String,
}

/// Register a new user.
///
/// The request only reaches this handler after the user validation
/// middleware accepted it; the normalized payload arrives via extensions.
#[utoipa::path(
    post,
    path = "/register",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User registered successfully", body = UserResponse),
        (status = 400, description = "Missing or malformed fields"),
        (status = 409, description = "Email or phone already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Extension(payload): Extension<CreateUser>,
) -> AppResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    let user = state.auth_service.register(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(UserResponse::from(user))),
    ))
}

/// Login and get JWT token
#[utoipa::path(
    post,
    path = "/login",
    tag = "Users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Malformed credentials"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<TokenResponse>>> {
    let token = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(ApiResponse::success(token)))
}
