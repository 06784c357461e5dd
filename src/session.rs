//! Session lifecycle — the single source of truth for "who is logged in".
//!
//! DESIGN
//! ======
//! One `SessionManager` is constructed at the composition root and passed
//! down explicitly; there is no ambient global session. It is the only
//! writer of both the in-memory [`Session`] and the persisted credential,
//! and every outgoing API call reads the token through `bearer_token()` so
//! header injection stays centralized.
//!
//! The single-threaded host event loop serializes all mutations. In-flight
//! login calls are not cancelled when superseded; the session reflects
//! whichever call resolves last (accepted race, not a last-write policy).

use crate::error::AuthError;
use crate::guard::NavigationCommand;
use crate::net::api::ApiClient;
use crate::net::types::{AuthResponse, LoginRequest, RegisterRequest, User};
use crate::store::CredentialStore;

/// Whether the startup credential check has completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingState {
    Initializing,
    Ready,
}

/// In-memory record of the current credential and resolved identity.
///
/// Fields are private so the invariant holds by construction: `user` is
/// populated iff `token` is present and was last validated successfully.
/// Only the [`SessionManager`] mutates a `Session`.
#[derive(Debug, Clone)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
    loading: LoadingState,
}

impl Session {
    fn new() -> Self {
        Self { token: None, user: None, loading: LoadingState::Initializing }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn loading(&self) -> LoadingState {
        self.loading
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
impl Session {
    pub(crate) fn initializing() -> Self {
        Self::new()
    }

    pub(crate) fn ready_unauthenticated() -> Self {
        Self { token: None, user: None, loading: LoadingState::Ready }
    }

    pub(crate) fn ready_authenticated(user: User, token: &str) -> Self {
        Self { token: Some(token.to_owned()), user: Some(user), loading: LoadingState::Ready }
    }
}

// =============================================================================
// SESSION MANAGER
// =============================================================================

pub struct SessionManager<S: CredentialStore> {
    api: ApiClient,
    store: S,
    session: Session,
}

impl<S: CredentialStore> SessionManager<S> {
    #[must_use]
    pub fn new(api: ApiClient, store: S) -> Self {
        Self { api, store, session: Session::new() }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current bearer credential for outgoing API calls.
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        self.session.token()
    }

    /// Startup credential check, invoked once. Never fails outward: a
    /// missing, rejected, or unreachable credential all degrade to an
    /// unauthenticated `Ready` session, and a rejected token is removed
    /// from the store.
    pub async fn initialize(&mut self) {
        if let Some(token) = self.store.load() {
            match self.api.me(&token).await {
                Ok(user) => {
                    self.session.token = Some(token);
                    self.session.user = Some(user);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "persisted credential rejected — clearing");
                    self.clear_credential();
                }
            }
        }
        self.session.loading = LoadingState::Ready;
    }

    /// Authenticate against the remote login endpoint.
    ///
    /// On success the returned token is persisted and the session holds both
    /// token and user. On failure nothing is written and the session stays
    /// unauthenticated.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` carrying a message suitable for inline display
    /// next to the login form.
    pub async fn login(&mut self, identifier: &str, secret: &str) -> Result<User, AuthError> {
        let request = LoginRequest {
            identifier: normalize_identifier(identifier),
            secret: secret.to_owned(),
        };
        let response = self.api.login(&request).await?;
        tracing::info!(username = %response.user.username, "logged in");
        Ok(self.establish(response))
    }

    /// Create an account and establish a session. Registration implies
    /// login: on success the session is authenticated as the new user.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::login`].
    pub async fn register(&mut self, registration: RegisterRequest) -> Result<User, AuthError> {
        let response = self.api.register(&registration).await?;
        tracing::info!(username = %response.user.username, "registered");
        Ok(self.establish(response))
    }

    /// Clear the session and the persisted credential. Purely local, always
    /// succeeds; any remote invalidation is the host's best-effort concern
    /// and must not block this. Returns the navigation command to the
    /// public login route for the host to execute.
    pub fn logout(&mut self) -> NavigationCommand {
        self.clear_credential();
        tracing::info!("logged out");
        NavigationCommand::to_login()
    }

    /// Invalidation path for a previously valid token later rejected by the
    /// server (a protected call answered with an authorization failure).
    /// Equivalent to a failed startup check: clears the store and the
    /// session. Returns the error for the data layer to propagate.
    pub fn invalidate(&mut self) -> AuthError {
        tracing::warn!("session invalidated by the server — clearing credential");
        self.clear_credential();
        AuthError::InvalidatedSession
    }

    /// Commit a successful auth response: persist the token, then populate
    /// token and user together so the session invariant holds.
    fn establish(&mut self, response: AuthResponse) -> User {
        if let Err(e) = self.store.save(&response.token) {
            tracing::warn!(error = %e, "failed to persist credential");
        }
        self.session.token = Some(response.token);
        self.session.user = Some(response.user.clone());
        response.user
    }

    fn clear_credential(&mut self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "failed to clear persisted credential");
        }
        self.session.token = None;
        self.session.user = None;
    }
}

/// Trim surrounding whitespace; email-shaped identifiers are lowercased.
#[must_use]
pub fn normalize_identifier(identifier: &str) -> String {
    let trimmed = identifier.trim();
    if trimmed.contains('@') {
        trimmed.to_ascii_lowercase()
    } else {
        trimmed.to_owned()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
