//! Error taxonomy for the session layer.
//!
//! All variants are recoverable: `initialize` and the invalidation path
//! absorb them into the unauthenticated state, while login/register surface
//! them to the caller for inline display next to the form.

/// Failures from the authentication endpoints and their transport.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Transport-level failure (DNS, connect, TLS, mid-body disconnect).
    #[error("network failure: {0}")]
    Network(String),
    /// Explicit rejection by the remote endpoint; carries the server's
    /// human-readable message.
    #[error("{0}")]
    InvalidCredentials(String),
    /// Success status with an unparsable body.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// A previously valid token was later rejected by the server.
    #[error("session invalidated by the server")]
    InvalidatedSession,
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
