use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Standard API response wrapper: `{"status": true, ...}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            status: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Created response helper (common pattern for POST endpoints)
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(ApiResponse::success(self.0))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_response_shape() {
        let response = ApiResponse::success("data");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], true);
        assert_eq!(json["data"], "data");
        assert!(json.get("message").is_none());
    }

    #[test]
    fn message_response_shape() {
        let response = ApiResponse::message("book deleted successfully");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], true);
        assert_eq!(json["message"], "book deleted successfully");
        assert!(json.get("data").is_none());
    }
}
