//! HTTP surface of the research proxy.

pub mod middleware;
pub mod research;

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::get,
    Json, Router,
};
use http::Request;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use middleware::{require_bearer, AuthToken};
use research::{research_routes, ResearchHandlers};

/// Request id generator backed by UUID v4.
#[derive(Debug, Clone, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = uuid::Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// GET /health - Liveness probe, unauthenticated.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::POST, Method::GET])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

/// Builds the proxy's full router: authenticated research endpoint, open
/// health probe, and the trace/request-id/timeout/CORS layer stack.
pub fn router(handlers: ResearchHandlers, auth_token: AuthToken, config: &ServerConfig) -> Router {
    let research = research_routes(handlers).layer(from_fn_with_state(auth_token, require_bearer));

    Router::new()
        .nest("/api/research", research)
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(cors_layer(config))
}
