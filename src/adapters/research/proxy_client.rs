//! Proxy Research Client - Looks companies up via the research proxy.
//!
//! Sends the company name with a shared bearer credential and normalizes the
//! returned profile JSON field by field: whatever resolved is kept, the rest
//! defaults to empty, and closed-set fields outside their sets are discarded.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

use crate::domain::profile::{BusinessModel, CompanyProfile, CompanySize, PrimaryMarket};
use crate::ports::{CompanyResearch, ResearchError};

/// Configuration for the proxy research client.
#[derive(Debug, Clone)]
pub struct ProxyResearchConfig {
    /// Full URL of the proxy's research endpoint.
    pub endpoint: String,
    /// Shared bearer credential, if the proxy requires one.
    auth_token: Option<Secret<String>>,
    /// Request timeout.
    pub timeout: Duration,
}

impl ProxyResearchConfig {
    /// Creates a configuration for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            auth_token: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the bearer credential.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(Secret::new(token.into()));
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Research client backed by the proxy service.
pub struct ProxyResearch {
    config: ProxyResearchConfig,
    client: Client,
}

impl ProxyResearch {
    /// Creates a client with the given configuration.
    pub fn new(config: ProxyResearchConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");
        Self { config, client }
    }

    async fn fetch(&self, company_name: &str) -> Result<serde_json::Value, ResearchError> {
        let mut request = self
            .client
            .post(&self.config.endpoint)
            .json(&serde_json::json!({ "companyName": company_name }));

        if let Some(token) = &self.config.auth_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request
            .send()
            .await
            .map_err(|e| ResearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResearchError::Status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| ResearchError::Parse(e.to_string()))
    }
}

#[async_trait]
impl CompanyResearch for ProxyResearch {
    async fn try_lookup(&self, company_name: &str) -> Result<CompanyProfile, ResearchError> {
        let value = self.fetch(company_name).await?;
        Ok(normalize_profile(&value, company_name))
    }
}

fn str_field(value: &serde_json::Value, field: &str) -> String {
    value
        .get(field)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

fn list_field(value: &serde_json::Value, field: &str) -> Vec<String> {
    value
        .get(field)
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Normalizes raw profile JSON into a `CompanyProfile`, field by field.
pub(crate) fn normalize_profile(value: &serde_json::Value, company_name: &str) -> CompanyProfile {
    let name = str_field(value, "name");
    CompanyProfile {
        name: if name.is_empty() {
            company_name.to_string()
        } else {
            name
        },
        industry: str_field(value, "industry"),
        primary_market: PrimaryMarket::from_wire(&str_field(value, "primaryMarket")),
        business_model: BusinessModel::from_wire(&str_field(value, "businessModel")),
        size: CompanySize::from_wire(&str_field(value, "size")),
        revenue: str_field(value, "revenue"),
        description: str_field(value, "description"),
        founded_year: str_field(value, "foundedYear"),
        headquarters: str_field(value, "headquarters"),
        website: str_field(value, "website"),
        key_products: list_field(value, "keyProducts"),
        mission_statement: str_field(value, "missionStatement"),
        vision_statement: str_field(value, "visionStatement"),
        core_values: list_field(value, "coreValues"),
        key_executives: list_field(value, "keyExecutives"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_keeps_resolved_fields_and_defaults_the_rest() {
        let value = json!({
            "name": "Acme Corporation",
            "industry": "Manufacturing",
            "keyProducts": ["Anvils", "Rockets"]
        });
        let profile = normalize_profile(&value, "Acme");

        assert_eq!(profile.name, "Acme Corporation");
        assert_eq!(profile.industry, "Manufacturing");
        assert_eq!(profile.key_products, vec!["Anvils", "Rockets"]);
        assert_eq!(profile.revenue, "");
        assert!(profile.size.is_none());
    }

    #[test]
    fn normalize_discards_out_of_set_enum_values() {
        let value = json!({
            "size": "humongous",
            "primaryMarket": "europe",
            "businessModel": "b2b"
        });
        let profile = normalize_profile(&value, "Acme");

        assert!(profile.size.is_none());
        assert!(profile.primary_market.is_none());
        assert_eq!(profile.business_model, Some(BusinessModel::B2b));
    }

    #[test]
    fn normalize_falls_back_to_requested_name() {
        let profile = normalize_profile(&json!({}), "Acme");
        assert_eq!(profile.name, "Acme");
    }

    #[test]
    fn normalize_tolerates_wrong_field_types() {
        let value = json!({
            "name": 42,
            "keyProducts": "not-a-list",
            "coreValues": [1, "Integrity", true]
        });
        let profile = normalize_profile(&value, "Acme");

        assert_eq!(profile.name, "Acme");
        assert!(profile.key_products.is_empty());
        assert_eq!(profile.core_values, vec!["Integrity"]);
    }

    #[test]
    fn config_builder_works() {
        let config = ProxyResearchConfig::new("https://proxy.example/api/research")
            .with_auth_token("shared-secret")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.endpoint, "https://proxy.example/api/research");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.auth_token.is_some());
    }
}
