//! Integration tests for the research proxy's HTTP surface: auth, request
//! validation, and backend error mapping, driven through the full router
//! with a stub backend.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use secrecy::Secret;
use serde_json::{json, Value};
use tower::ServiceExt;

use strategy_suite::adapters::http::middleware::AuthToken;
use strategy_suite::adapters::http::research::ResearchHandlers;
use strategy_suite::adapters::http::router;
use strategy_suite::config::ServerConfig;
use strategy_suite::ports::{ResearchBackend, ResearchBackendError};

const TOKEN: &str = "test-token";

enum StubBehavior {
    Success(Value),
    Upstream,
    Parse,
    Network,
}

struct StubBackend(StubBehavior);

#[async_trait]
impl ResearchBackend for StubBackend {
    async fn research(&self, _company_name: &str) -> Result<Value, ResearchBackendError> {
        match &self.0 {
            StubBehavior::Success(value) => Ok(value.clone()),
            StubBehavior::Upstream => Err(ResearchBackendError::Upstream {
                status: 500,
                body: "upstream detail".to_string(),
            }),
            StubBehavior::Parse => Err(ResearchBackendError::Parse("no JSON object".to_string())),
            StubBehavior::Network => {
                Err(ResearchBackendError::Network("connection refused".to_string()))
            }
        }
    }
}

fn app(behavior: StubBehavior) -> Router {
    let handlers = ResearchHandlers::new(Arc::new(StubBackend(behavior)));
    let token: AuthToken = Arc::new(Secret::new(TOKEN.to_string()));
    router(handlers, token, &ServerConfig::default())
}

fn post_research(token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/research")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_probe_is_open() {
    let response = app(StubBehavior::Network)
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn missing_bearer_token_is_unauthorized() {
    let response = app(StubBehavior::Success(json!({})))
        .oneshot(post_research(None, r#"{"companyName":"Acme"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, json!({ "error": "Unauthorized" }));
}

#[tokio::test]
async fn wrong_bearer_token_is_unauthorized() {
    let response = app(StubBehavior::Success(json!({})))
        .oneshot(post_research(Some("wrong"), r#"{"companyName":"Acme"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let response = app(StubBehavior::Success(json!({})))
        .oneshot(post_research(Some(TOKEN), "not json {"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Invalid JSON body" })
    );
}

#[tokio::test]
async fn blank_company_name_is_bad_request() {
    let response = app(StubBehavior::Success(json!({})))
        .oneshot(post_research(Some(TOKEN), r#"{"companyName":"   "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Invalid company name" })
    );
}

#[tokio::test]
async fn oversized_company_name_is_bad_request() {
    let long_name = "x".repeat(201);
    let body = json!({ "companyName": long_name }).to_string();
    let response = app(StubBehavior::Success(json!({})))
        .oneshot(post_research(Some(TOKEN), &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn successful_research_relays_backend_json() {
    let profile = json!({
        "name": "Acme Corporation",
        "industry": "Manufacturing",
        "keyProducts": ["Anvils"]
    });
    let response = app(StubBehavior::Success(profile.clone()))
        .oneshot(post_research(Some(TOKEN), r#"{"companyName":"Acme"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, profile);
}

#[tokio::test]
async fn upstream_failure_maps_to_bad_gateway_without_leaking_details() {
    let response = app(StubBehavior::Upstream)
        .oneshot(post_research(Some(TOKEN), r#"{"companyName":"Acme"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body, json!({ "error": "Upstream research call failed" }));
}

#[tokio::test]
async fn unparseable_reply_maps_to_bad_gateway() {
    let response = app(StubBehavior::Parse)
        .oneshot(post_research(Some(TOKEN), r#"{"companyName":"Acme"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn network_failure_maps_to_internal_error() {
    let response = app(StubBehavior::Network)
        .oneshot(post_research(Some(TOKEN), r#"{"companyName":"Acme"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, json!({ "error": "Internal error" }));
}
