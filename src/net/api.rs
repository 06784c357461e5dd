//! REST API client for the authentication endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Bearer injection happens in exactly one place (`with_bearer`) so the
//! Authorization header stays a visible, testable step rather than a patch
//! on a shared global transport. Status handling maps onto the session
//! error taxonomy: transport errors and 5xx become `Network`, explicit 4xx
//! rejections become `InvalidCredentials` carrying the server's message, and
//! a success status with an unparsable body becomes `MalformedResponse`.

use reqwest::{RequestBuilder, StatusCode};

use super::types::{AuthResponse, ErrorBody, LoginRequest, RegisterRequest, User};
use crate::error::AuthError;

const ME_PATH: &str = "/api/auth/me";
const LOGIN_PATH: &str = "/api/auth/login";
const REGISTER_PATH: &str = "/api/auth/register";

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the API at `base_url`. No timeout is configured
    /// at this layer; transport defaults apply.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attach the bearer credential to an outgoing request. The single
    /// injection point for the token; nothing else in the application
    /// touches the Authorization header.
    fn with_bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", format!("Bearer {token}"))
    }

    /// `GET /api/auth/me` — resolve the identity behind a token.
    /// Any non-success status means the credential is invalid or expired.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` on transport failure, rejection, or an
    /// unparsable success body.
    pub async fn me(&self, token: &str) -> Result<User, AuthError> {
        let request = Self::with_bearer(self.http.get(self.url(ME_PATH)), token);
        let response = request.send().await.map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| AuthError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(AuthError::InvalidCredentials(error_message(status, &body)));
        }

        serde_json::from_str(&body).map_err(|e| AuthError::MalformedResponse(e.to_string()))
    }

    /// `POST /api/auth/login` — exchange credentials for a token and user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` with the server's message on
    /// rejection, `Network` on transport or server failure.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AuthError> {
        self.post_auth(LOGIN_PATH, request).await
    }

    /// `POST /api/auth/register` — create an account; same response shape
    /// as login.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::login`].
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AuthError> {
        self.post_auth(REGISTER_PATH, request).await
    }

    async fn post_auth<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<AuthResponse, AuthError> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| AuthError::Network(e.to_string()))?;

        if status.is_client_error() {
            return Err(AuthError::InvalidCredentials(error_message(status, &text)));
        }
        if !status.is_success() {
            return Err(AuthError::Network(format!("{status}: {text}")));
        }

        serde_json::from_str(&text).map_err(|e| AuthError::MalformedResponse(e.to_string()))
    }
}

/// Extract a human-readable message from a non-success response body.
/// Prefers the structured `{"message": ...}` shape, then the raw body,
/// then the status line.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status.to_string()
    } else {
        trimmed.to_owned()
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
