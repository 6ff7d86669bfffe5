//! Research proxy server entrypoint.
//!
//! Serves the company research endpoint behind the shared bearer token,
//! keeping the Anthropic API key server-side.

use std::sync::Arc;

use secrecy::ExposeSecret;
use tracing_subscriber::EnvFilter;

use strategy_suite::adapters::ai::{ClaudeConfig, ClaudeResearcher};
use strategy_suite::adapters::http::{research::ResearchHandlers, router};
use strategy_suite::config::AppConfig;
use strategy_suite::ports::ResearchBackend;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let claude_config = ClaudeConfig::new(config.research.api_key().expose_secret().clone())
        .with_model(config.research.model.clone())
        .with_base_url(config.research.base_url.clone())
        .with_timeout(config.research.timeout());
    let backend: Arc<dyn ResearchBackend> = Arc::new(ClaudeResearcher::new(claude_config));

    let handlers = ResearchHandlers::new(backend);
    let auth_token = Arc::new(config.auth.token().clone());
    let app = router(handlers, auth_token, &config.server);

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "research proxy listening");
    axum::serve(listener, app).await?;

    Ok(())
}
