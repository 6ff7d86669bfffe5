//! HTTP DTOs for the research endpoint.

use serde::{Deserialize, Serialize};

/// Longest accepted company name.
pub const MAX_COMPANY_NAME_LEN: usize = 200;

/// Request to research a company.
#[derive(Debug, Clone, Deserialize)]
pub struct ResearchRequest {
    #[serde(rename = "companyName")]
    pub company_name: String,
}

/// Error payload returned by the proxy. Carries a caller-safe message only;
/// upstream bodies and secrets stay in the server logs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn invalid_body() -> Self {
        Self::new("Invalid JSON body")
    }

    pub fn invalid_company_name() -> Self {
        Self::new("Invalid company name")
    }

    pub fn upstream_failed() -> Self {
        Self::new("Upstream research call failed")
    }

    pub fn unparseable_reply() -> Self {
        Self::new("Failed to parse research response")
    }

    pub fn internal() -> Self {
        Self::new("Internal error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_from_camel_case_wire() {
        let req: ResearchRequest =
            serde_json::from_str(r#"{"companyName":"Acme"}"#).unwrap();
        assert_eq!(req.company_name, "Acme");
    }

    #[test]
    fn request_rejects_missing_field() {
        assert!(serde_json::from_str::<ResearchRequest>("{}").is_err());
    }

    #[test]
    fn error_response_serializes_single_field() {
        let json = serde_json::to_string(&ErrorResponse::internal()).unwrap();
        assert_eq!(json, r#"{"error":"Internal error"}"#);
    }
}
