//! Shared bearer token middleware.
//!
//! The proxy is guarded by a single shared credential. Requests must present
//! it as `Authorization: Bearer <token>`; anything else is rejected before
//! the handler runs.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use secrecy::{ExposeSecret, Secret};

/// Middleware state: the expected shared token.
pub type AuthToken = Arc<Secret<String>>;

/// Rejects requests whose bearer token is missing or wrong.
pub async fn require_bearer(
    State(expected): State<AuthToken>,
    request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) if token == expected.expose_secret() => next.run(request).await,
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "error": "Unauthorized" })),
        )
            .into_response(),
    }
}
