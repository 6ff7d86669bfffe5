//! Company Research Port - Best-effort factual company lookup.
//!
//! This is the only place the analysis core touches external services. The
//! consumed contract is deliberately forgiving: `lookup` never fails, it
//! degrades to whatever fields were resolved.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::profile::CompanyProfile;

/// Errors internal to research adapters. They never cross the `lookup`
/// boundary; `try_lookup` exposes them so adapters can be composed.
#[derive(Debug, Clone, Error)]
pub enum ResearchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Research source returned status {0}")]
    Status(u16),

    #[error("Failed to parse research response: {0}")]
    Parse(String),
}

/// One entity-search candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyCandidate {
    pub name: String,
    pub description: String,
    pub url: String,
}

/// Port for researching company facts from public sources.
#[async_trait]
pub trait CompanyResearch: Send + Sync {
    /// Attempts a lookup, surfacing adapter failures for composition.
    async fn try_lookup(&self, company_name: &str) -> Result<CompanyProfile, ResearchError>;

    /// Looks up a company, never failing: on any error the profile carries
    /// the requested name and empty fields.
    async fn lookup(&self, company_name: &str) -> CompanyProfile {
        match self.try_lookup(company_name).await {
            Ok(profile) => profile,
            Err(err) => {
                tracing::warn!(company = company_name, error = %err, "research lookup degraded to empty profile");
                CompanyProfile::named(company_name)
            }
        }
    }

    /// Searches for matching company entities. Adapters without a search
    /// capability return no candidates.
    async fn search(&self, _query: &str) -> Vec<CompanyCandidate> {
        Vec::new()
    }
}
