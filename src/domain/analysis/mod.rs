//! Analysis records and pure scoring services.
//!
//! - `factor` - GUT-rated factors shared by PESTEL and Porter screens
//! - `scoring` - GUT score, severity bands, impact levels, product risk
//! - `pestel` - PESTEL sets and the per-product PESTEL map
//! - `porters` - Porter's Six Forces record
//! - `swot` - Internal issues, SWOT quadrants, and the auto-populate rule
//! - `segments` - Customer segments

mod factor;
mod pestel;
mod porters;
pub mod scoring;
mod segments;
mod swot;

pub use factor::RatedFactor;
pub use pestel::{CategoryFactors, PestelSet, ProductPestels};
pub use porters::{ForceAssessment, PortersForces};
pub use scoring::{gut_score, product_risk_score, ImpactLevel, ProductRiskLevel, ScoreBand};
pub use segments::{CustomerSegment, GrowthPotential};
pub use swot::{InternalIssues, SwotSet};
