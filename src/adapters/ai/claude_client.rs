//! Claude Research Client - The proxy's upstream knowledge source.
//!
//! Asks Claude for a factual company profile and extracts the JSON object
//! from its reply. The API key stays server-side; errors surface as typed
//! backend errors and never leak upstream details to proxy callers.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{ResearchBackend, ResearchBackendError};

/// Anthropic API version header value.
const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// Configuration for the Claude research client.
#[derive(Debug, Clone)]
pub struct ClaudeConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClaudeConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "claude-sonnet-4-5-20250929".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Claude-backed research source.
pub struct ClaudeResearcher {
    config: ClaudeConfig,
    client: Client,
}

impl ClaudeResearcher {
    /// Creates a new client with the given configuration.
    pub fn new(config: ClaudeConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");
        Self { config, client }
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url)
    }

    fn research_prompt(company_name: &str) -> String {
        format!(
            r#"Research the company "{company_name}" and return accurate, factual information.
If you cannot find reliable information for a field, return an empty string or empty array - never make up data.

Return ONLY valid JSON (no markdown, no explanation) in this exact format:

{{
  "name": "Official company name",
  "description": "2-3 sentence factual description of what the company does, its market position, and main activities",
  "industry": "Primary industry (e.g., Technology, Healthcare, Retail, Financial Services, etc.)",
  "foundedYear": "YYYY or empty string if unknown",
  "headquarters": "City, Country",
  "website": "https://... or empty string if unknown",
  "size": "startup | small | medium | large | enterprise",
  "revenue": "e.g. $10M, $500M, $2.1B - or empty string if unknown",
  "primaryMarket": "united-states | australia | global | other",
  "businessModel": "b2b | b2c | saas | e-commerce | other",
  "missionStatement": "The company's actual mission statement if publicly known, otherwise empty string",
  "visionStatement": "The company's actual vision statement if publicly known, otherwise empty string",
  "keyProducts": ["Product/Service 1", "Product/Service 2", "Product/Service 3"],
  "coreValues": ["Value 1", "Value 2", "Value 3"],
  "keyExecutives": ["Full Name - Title", "Full Name - Title"]
}}

Rules for size: startup = 1-10 employees, small = 11-50, medium = 51-200, large = 201-1000, enterprise = 1000+.
Rules for primaryMarket: use "global" if the company operates in multiple continents, otherwise pick the most relevant one.
Rules for businessModel: pick the dominant model. Use "other" only if none of the options fit."#
        )
    }
}

#[async_trait]
impl ResearchBackend for ClaudeResearcher {
    async fn research(
        &self,
        company_name: &str,
    ) -> Result<serde_json::Value, ResearchBackendError> {
        let request = MessagesRequest {
            model: self.config.model.clone(),
            max_tokens: 1024,
            messages: vec![Message {
                role: "user".to_string(),
                content: Self::research_prompt(company_name),
            }],
        };

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", self.config.api_key())
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ResearchBackendError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ResearchBackendError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let message: MessagesResponse = response
            .json()
            .await
            .map_err(|e| ResearchBackendError::Parse(e.to_string()))?;

        let text: String = message
            .content
            .into_iter()
            .filter_map(|block| {
                if block.block_type == "text" {
                    block.text
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        let json_block = extract_json_block(&text).ok_or_else(|| {
            ResearchBackendError::Parse("no JSON object in model reply".to_string())
        })?;

        serde_json::from_str(json_block).map_err(|e| ResearchBackendError::Parse(e.to_string()))
    }
}

/// Slices the first `{` through the last `}`, tolerating markdown fences or
/// prose around the object.
fn extract_json_block(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

// ----- Anthropic API Types -----

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_works() {
        let config = ClaudeConfig::new("test-key")
            .with_model("claude-opus-4-20250514")
            .with_base_url("https://custom.api.com")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.model, "claude-opus-4-20250514");
        assert_eq!(config.base_url, "https://custom.api.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn prompt_embeds_the_company_name() {
        let prompt = ClaudeResearcher::research_prompt("Atlassian");
        assert!(prompt.contains("\"Atlassian\""));
        assert!(prompt.contains("keyProducts"));
    }

    #[test]
    fn extract_json_block_handles_plain_object() {
        let text = r#"{"name":"Acme"}"#;
        assert_eq!(extract_json_block(text), Some(r#"{"name":"Acme"}"#));
    }

    #[test]
    fn extract_json_block_strips_surrounding_prose() {
        let text = "Here you go:\n```json\n{\"name\":\"Acme\"}\n```\nLet me know!";
        assert_eq!(extract_json_block(text), Some("{\"name\":\"Acme\"}"));
    }

    #[test]
    fn extract_json_block_spans_nested_objects() {
        let text = r#"{"a":{"b":1}} trailing"#;
        assert_eq!(extract_json_block(text), Some(r#"{"a":{"b":1}}"#));
    }

    #[test]
    fn extract_json_block_rejects_text_without_object() {
        assert_eq!(extract_json_block("no json here"), None);
        assert_eq!(extract_json_block("} backwards {"), None);
    }
}
