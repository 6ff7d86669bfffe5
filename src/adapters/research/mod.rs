//! Company research adapters.

mod failover;
mod fixture;
mod proxy_client;
mod wiki;

pub use failover::FailoverResearch;
pub use fixture::FixtureResearch;
pub use proxy_client::{ProxyResearch, ProxyResearchConfig};
pub use wiki::WikiResearch;
