//! Failover Research - Primary source with automatic fallback.
//!
//! Tries the primary research source (normally the proxy) and falls back to
//! the secondary (normally the wiki adapter) when it fails.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::profile::CompanyProfile;
use crate::ports::{CompanyCandidate, CompanyResearch, ResearchError};

/// Research source with a fallback.
pub struct FailoverResearch {
    primary: Arc<dyn CompanyResearch>,
    fallback: Arc<dyn CompanyResearch>,
}

impl FailoverResearch {
    /// Creates a failover pair.
    pub fn new(primary: Arc<dyn CompanyResearch>, fallback: Arc<dyn CompanyResearch>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl CompanyResearch for FailoverResearch {
    async fn try_lookup(&self, company_name: &str) -> Result<CompanyProfile, ResearchError> {
        match self.primary.try_lookup(company_name).await {
            Ok(profile) => Ok(profile),
            Err(err) => {
                tracing::warn!(
                    company = company_name,
                    error = %err,
                    "primary research failed, falling back"
                );
                self.fallback.try_lookup(company_name).await
            }
        }
    }

    async fn search(&self, query: &str) -> Vec<CompanyCandidate> {
        let candidates = self.primary.search(query).await;
        if candidates.is_empty() {
            self.fallback.search(query).await
        } else {
            candidates
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::research::FixtureResearch;

    #[tokio::test]
    async fn uses_primary_when_it_succeeds() {
        let primary = Arc::new(FixtureResearch::returning(CompanyProfile::named("Primary")));
        let fallback = Arc::new(FixtureResearch::returning(CompanyProfile::named("Fallback")));
        let research = FailoverResearch::new(primary, fallback);

        let profile = research.try_lookup("Acme").await.unwrap();
        assert_eq!(profile.name, "Primary");
    }

    #[tokio::test]
    async fn falls_back_when_primary_fails() {
        let primary = Arc::new(FixtureResearch::failing());
        let fallback = Arc::new(FixtureResearch::returning(CompanyProfile::named("Fallback")));
        let research = FailoverResearch::new(primary, fallback);

        let profile = research.try_lookup("Acme").await.unwrap();
        assert_eq!(profile.name, "Fallback");
    }

    #[tokio::test]
    async fn lookup_never_fails_even_when_both_fail() {
        let research = FailoverResearch::new(
            Arc::new(FixtureResearch::failing()),
            Arc::new(FixtureResearch::failing()),
        );

        let profile = research.lookup("Acme").await;
        assert_eq!(profile.name, "Acme");
        assert_eq!(profile.industry, "");
    }
}
