//! HTTP routes for the research endpoint.

use axum::{routing::post, Router};

use super::handlers::{research_company, ResearchHandlers};

/// Creates the research router.
pub fn research_routes(handlers: ResearchHandlers) -> Router {
    Router::new()
        .route("/", post(research_company))
        .with_state(handlers)
}
