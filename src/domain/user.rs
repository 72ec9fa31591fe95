//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Postal address attached to a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    /// Street line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// City name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Six-digit postal code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
}

impl Address {
    /// True when no component is present
    pub fn is_empty(&self) -> bool {
        self.street.is_none() && self.city.is_none() && self.pincode.is_none()
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub title: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Normalized registration payload, produced by the user validation
/// middleware. Every field already carries its canonical form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUser {
    /// Honorific title
    #[schema(example = "Mr")]
    pub title: String,
    /// Display name, uppercased
    #[schema(example = "JOHN DOE")]
    pub name: String,
    /// Phone number, unique across users
    #[schema(example = "+91-9876543210")]
    pub phone: String,
    /// Email address, lowercased, unique across users
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Raw password (hashed before storage)
    #[schema(example = "Secret123", min_length = 8)]
    pub password: String,
    /// Optional postal address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Insertable user record: the registration payload with the password
/// already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub title: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password_hash: String,
    pub address: Option<Address>,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Honorific title
    #[schema(example = "Mr")]
    pub title: String,
    /// Display name
    #[schema(example = "JOHN DOE")]
    pub name: String,
    /// Phone number
    #[schema(example = "+91-9876543210")]
    pub phone: String,
    /// Email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Postal address, when supplied at registration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            title: user.title,
            name: user.name,
            phone: user.phone,
            email: user.email,
            address: user.address,
            created_at: user.created_at,
        }
    }
}
