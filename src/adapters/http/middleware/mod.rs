//! HTTP middleware for the research proxy.

mod auth;

pub use auth::{require_bearer, AuthToken};
