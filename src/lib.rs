//! # hearth-client
//!
//! Session core for the Hearth property-management application: owns the
//! bearer credential, talks to the remote authentication API, persists the
//! token across restarts, and gates client-side routes on authentication
//! state.
//!
//! The UI layer (pages, components, router bindings) lives elsewhere. This
//! crate is the piece every outgoing API call and every navigation passes
//! through: the [`session::SessionManager`] is the only writer of both the
//! in-memory session and the persisted credential, and the
//! [`guard::RouteGuard`] decides per navigation whether a view renders,
//! waits, or redirects to login.

pub mod config;
pub mod error;
pub mod guard;
pub mod net;
pub mod session;
pub mod store;
