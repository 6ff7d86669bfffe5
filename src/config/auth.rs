//! Proxy authentication configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// Authentication configuration: the single shared bearer credential.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared token callers must present as `Authorization: Bearer <token>`
    pub token: Secret<String>,
}

impl AuthConfig {
    /// The expected bearer token value.
    pub fn token(&self) -> &Secret<String> {
        &self.token
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.token.expose_secret().is_empty() {
            return Err(ValidationError::EmptyAuthToken);
        }
        Ok(())
    }
}
