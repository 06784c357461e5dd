//! Route gating driven by session state.
//!
//! DESIGN
//! ======
//! The guard is a pure decision function: it never navigates by itself.
//! A `Redirect` decision carries a [`NavigationCommand`] that the host
//! pushes onto its [`NavigationQueue`] and drains in its after-update hook,
//! so navigation state is never mutated inside a render pass. The guard is
//! re-evaluated on every change to the session or the current route.

use std::collections::VecDeque;

use crate::session::{LoadingState, Session};

/// Route of the public login view, target of every forced redirect.
pub const LOGIN_ROUTE: &str = "/login";

/// Routes reachable without authentication.
pub const PUBLIC_ROUTES: &[&str] = &["/login", "/register", "/password-recovery"];

/// Deferred navigation, executed by the host after the current render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationCommand {
    pub to: String,
}

impl NavigationCommand {
    #[must_use]
    pub fn to_login() -> Self {
        Self { to: LOGIN_ROUTE.to_owned() }
    }
}

/// Per-navigation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Initial credential check still running — render a loading placeholder.
    Loading,
    /// Render the requested view.
    Render,
    /// Render a blocking overlay now; execute the command after this render.
    Redirect(NavigationCommand),
}

// =============================================================================
// ROUTE GUARD
// =============================================================================

pub struct RouteGuard {
    public_routes: Vec<String>,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteGuard {
    /// Guard with the standard allow-list: login, register, password recovery.
    #[must_use]
    pub fn new() -> Self {
        Self::with_public_routes(PUBLIC_ROUTES.iter().copied())
    }

    /// Guard with a custom allow-list of unauthenticated routes.
    pub fn with_public_routes<I, R>(routes: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            public_routes: routes.into_iter().map(|r| normalize_route(&r.into())).collect(),
        }
    }

    /// Evaluate the requested route against the current session.
    #[must_use]
    pub fn evaluate(&self, session: &Session, route: &str) -> GuardDecision {
        if session.loading() == LoadingState::Initializing {
            return GuardDecision::Loading;
        }
        let path = normalize_route(route);
        if self.is_public(&path) || session.is_authenticated() {
            return GuardDecision::Render;
        }
        GuardDecision::Redirect(NavigationCommand::to_login())
    }

    fn is_public(&self, path: &str) -> bool {
        self.public_routes.iter().any(|route| route == path)
    }
}

/// Strip the query/fragment and any trailing slash, so `/login/?next=x`
/// matches the `/login` allow-list entry.
fn normalize_route(route: &str) -> String {
    let path = route.split(['?', '#']).next().unwrap_or(route);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else {
        trimmed.to_owned()
    }
}

// =============================================================================
// NAVIGATION QUEUE
// =============================================================================

/// FIFO buffer of deferred navigations. The host drains it in its
/// after-update hook, at least one scheduling tick after the render that
/// queued them.
#[derive(Debug, Default)]
pub struct NavigationQueue {
    pending: VecDeque<NavigationCommand>,
}

impl NavigationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: NavigationCommand) {
        self.pending.push_back(command);
    }

    /// Take every pending command, oldest first, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<NavigationCommand> {
        self.pending.drain(..).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
