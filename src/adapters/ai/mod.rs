//! AI adapters backing the research proxy.

mod claude_client;

pub use claude_client::{ClaudeConfig, ClaudeResearcher};
