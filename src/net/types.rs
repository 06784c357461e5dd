//! Wire types for the authentication endpoints.

use serde::{Deserialize, Serialize};

/// Resolved identity tied to the current token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Login handle.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Assigned role (e.g. `"manager"`, `"tenant"`).
    pub role: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Account status (e.g. `"active"`, `"blocked"`).
    pub status: String,
}

impl User {
    /// Display string the dashboards render: first + last name when present,
    /// falling back to the username.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.to_owned(),
            (None, Some(last)) => last.to_owned(),
            (None, None) => self.username.clone(),
        }
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub secret: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub secret: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Success body shared by the login and register endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Error body returned by the API on non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
