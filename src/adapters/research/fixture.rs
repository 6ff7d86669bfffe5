//! Fixture Research - Canned lookup results for tests and local development.

use async_trait::async_trait;

use crate::domain::profile::CompanyProfile;
use crate::ports::{CompanyResearch, ResearchError};

/// Research source returning a fixed profile, or failing on demand.
pub struct FixtureResearch {
    profile: Option<CompanyProfile>,
}

impl FixtureResearch {
    /// Always returns the given profile.
    pub fn returning(profile: CompanyProfile) -> Self {
        Self {
            profile: Some(profile),
        }
    }

    /// Always fails, for exercising degradation paths.
    pub fn failing() -> Self {
        Self { profile: None }
    }
}

#[async_trait]
impl CompanyResearch for FixtureResearch {
    async fn try_lookup(&self, _company_name: &str) -> Result<CompanyProfile, ResearchError> {
        match &self.profile {
            Some(profile) => Ok(profile.clone()),
            None => Err(ResearchError::Network(
                "fixture configured to fail".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returning_yields_the_fixture() {
        let fixture = FixtureResearch::returning(CompanyProfile::named("Canned"));
        assert_eq!(fixture.try_lookup("anything").await.unwrap().name, "Canned");
    }

    #[tokio::test]
    async fn failing_degrades_through_lookup() {
        let fixture = FixtureResearch::failing();
        assert!(fixture.try_lookup("Acme").await.is_err());

        let profile = fixture.lookup("Acme").await;
        assert_eq!(profile.name, "Acme");
    }

    #[tokio::test]
    async fn default_search_returns_no_candidates() {
        let fixture = FixtureResearch::failing();
        assert!(fixture.search("Acme").await.is_empty());
    }
}
