//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `STRATEGY_SUITE` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use strategy_suite::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Proxy listening on {}", config.server.socket_addr());
//! ```

mod auth;
mod error;
mod research;
mod server;

pub use auth::AuthConfig;
pub use error::{ConfigError, ValidationError};
pub use research::ResearchConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration for the research proxy.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Shared bearer credential callers must present
    pub auth: AuthConfig,

    /// Claude research backend configuration
    pub research: ResearchConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads variables with the
    /// `STRATEGY_SUITE` prefix:
    ///
    /// - `STRATEGY_SUITE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `STRATEGY_SUITE__AUTH__TOKEN=...` -> `auth.token = ...`
    /// - `STRATEGY_SUITE__RESEARCH__ANTHROPIC_API_KEY=...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STRATEGY_SUITE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.auth.validate()?;
        self.research.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("STRATEGY_SUITE__AUTH__TOKEN", "shared-secret");
        env::set_var(
            "STRATEGY_SUITE__RESEARCH__ANTHROPIC_API_KEY",
            "sk-ant-xxx",
        );
    }

    fn clear_env() {
        env::remove_var("STRATEGY_SUITE__AUTH__TOKEN");
        env::remove_var("STRATEGY_SUITE__RESEARCH__ANTHROPIC_API_KEY");
        env::remove_var("STRATEGY_SUITE__SERVER__PORT");
        env::remove_var("STRATEGY_SUITE__SERVER__ENVIRONMENT");
    }

    #[test]
    fn load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.research.model, "claude-sonnet-4-5-20250929");
    }

    #[test]
    fn server_defaults_apply() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(!config.is_production());
    }

    #[test]
    fn custom_server_port_overrides_default() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("STRATEGY_SUITE__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 3000);
    }

    #[test]
    fn production_environment_is_detected() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("STRATEGY_SUITE__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }
}
