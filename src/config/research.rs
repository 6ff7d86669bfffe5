//! Research backend configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the Claude research backend.
#[derive(Debug, Clone, Deserialize)]
pub struct ResearchConfig {
    /// Anthropic API key
    pub anthropic_api_key: Secret<String>,

    /// Model used for research calls
    #[serde(default = "default_model")]
    pub model: String,

    /// Anthropic API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upstream request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ResearchConfig {
    /// The Anthropic API key.
    pub fn api_key(&self) -> &Secret<String> {
        &self.anthropic_api_key
    }

    /// The upstream timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate research configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.anthropic_api_key.expose_secret().is_empty() {
            return Err(ValidationError::EmptyApiKey);
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidResearchBaseUrl);
        }
        Ok(())
    }
}

fn default_model() -> String {
    "claude-sonnet-4-5-20250929".to_string()
}

fn default_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(key: &str, base_url: &str) -> ResearchConfig {
        ResearchConfig {
            anthropic_api_key: Secret::new(key.to_string()),
            model: default_model(),
            base_url: base_url.to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }

    #[test]
    fn validate_rejects_empty_api_key() {
        assert!(config("", "https://api.anthropic.com").validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        assert!(config("sk-ant-xxx", "ftp://example.com").validate().is_err());
    }

    #[test]
    fn validate_accepts_sane_config() {
        let config = config("sk-ant-xxx", "https://api.anthropic.com");
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }
}
