//! HTTP transport and wire types for the remote authentication API.

pub mod api;
pub mod types;
