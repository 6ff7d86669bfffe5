//! HTTP handlers for the research endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::ports::{ResearchBackend, ResearchBackendError};

use super::dto::{ErrorResponse, ResearchRequest, MAX_COMPANY_NAME_LEN};

/// Handler state: the upstream research backend.
#[derive(Clone)]
pub struct ResearchHandlers {
    backend: Arc<dyn ResearchBackend>,
}

impl ResearchHandlers {
    pub fn new(backend: Arc<dyn ResearchBackend>) -> Self {
        Self { backend }
    }
}

/// POST /api/research - Research a company via the backend.
pub async fn research_company(
    State(handlers): State<ResearchHandlers>,
    body: Result<Json<ResearchRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = body else {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse::invalid_body())).into_response();
    };

    if req.company_name.trim().is_empty() || req.company_name.len() > MAX_COMPANY_NAME_LEN {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::invalid_company_name()),
        )
            .into_response();
    }

    match handlers.backend.research(&req.company_name).await {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(err) => handle_backend_error(err),
    }
}

fn handle_backend_error(error: ResearchBackendError) -> Response {
    match error {
        ResearchBackendError::Upstream { status, body } => {
            tracing::error!(status, body = %body, "research upstream returned an error");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::upstream_failed()),
            )
                .into_response()
        }
        ResearchBackendError::Parse(reason) => {
            tracing::error!(reason = %reason, "research reply could not be parsed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::unparseable_reply()),
            )
                .into_response()
        }
        ResearchBackendError::Network(reason) => {
            tracing::error!(reason = %reason, "research backend unreachable");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
    }
}
