//! Research Backend Port - The proxy's upstream knowledge source.
//!
//! The proxy service hands a company name to a backend and relays the
//! resulting profile JSON verbatim. Error variants map one-to-one onto the
//! proxy's HTTP error taxonomy.

use async_trait::async_trait;
use thiserror::Error;

/// Errors a research backend can produce.
#[derive(Debug, Error)]
pub enum ResearchBackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream returned status {status}")]
    Upstream { status: u16, body: String },

    #[error("Failed to parse upstream response: {0}")]
    Parse(String),
}

/// Port for the proxy's upstream research source.
#[async_trait]
pub trait ResearchBackend: Send + Sync {
    /// Researches a company, returning the raw profile JSON object.
    async fn research(&self, company_name: &str)
        -> Result<serde_json::Value, ResearchBackendError>;
}
