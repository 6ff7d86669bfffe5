//! Application layer - session orchestration over the domain store.

mod session;

pub use session::{AnalysisSession, ResearchStatus, ResearchTicket, SessionError};
