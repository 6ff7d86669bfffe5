//! HTTP surface for the research endpoint.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ResearchHandlers;
pub use routes::research_routes;
