//! Bootstrap PESTEL content for a freshly researched company.

use crate::domain::analysis::{CategoryFactors, PestelSet, RatedFactor};
use crate::domain::foundation::AxisRating::{High, Low, Moderate, VeryHigh};

/// Generates the starter company PESTEL: six categories, two pre-rated
/// factors each, descriptions left for the user to fill in. The industry
/// string is embedded in the regulatory factor's name; ratings are fixed.
///
/// Used only when bootstrapping after a research lookup; always replaces the
/// entire existing company PESTEL.
pub fn company_pestel(_company_name: &str, industry: &str) -> PestelSet {
    PestelSet {
        political: CategoryFactors::with_factors(vec![
            RatedFactor::new(
                format!("Government regulations in {}", industry),
                High,
                Moderate,
                Moderate,
            ),
            RatedFactor::new("Political stability in key markets", Moderate, Low, High),
        ]),
        economic: CategoryFactors::with_factors(vec![
            RatedFactor::new("Economic growth in target markets", High, High, Moderate),
            RatedFactor::new("Interest rate fluctuations", Moderate, Moderate, High),
        ]),
        social: CategoryFactors::with_factors(vec![
            RatedFactor::new("Changing consumer preferences", High, High, High),
            RatedFactor::new("Demographic shifts", Moderate, Low, High),
        ]),
        technological: CategoryFactors::with_factors(vec![
            RatedFactor::new("AI and automation adoption", VeryHigh, VeryHigh, VeryHigh),
            RatedFactor::new("Cybersecurity threats", High, VeryHigh, High),
        ]),
        environmental: CategoryFactors::with_factors(vec![
            RatedFactor::new("Climate change regulations", High, High, VeryHigh),
            RatedFactor::new("Sustainability requirements", High, Moderate, High),
        ]),
        legal: CategoryFactors::with_factors(vec![
            RatedFactor::new("Data protection laws (GDPR, CCPA)", VeryHigh, VeryHigh, High),
            RatedFactor::new("Industry-specific regulations", High, High, Moderate),
        ]),
    }
}
