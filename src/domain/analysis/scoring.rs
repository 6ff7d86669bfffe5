//! GUT scoring and the severity classifications derived from it.
//!
//! Three independent bucket schemes live here. `ScoreBand` drives factor
//! color coding, `ImpactLevel` drives the impact narrative, and
//! `ProductRiskLevel` classifies the 0-5 product risk score. Their
//! boundaries differ and must not be conflated.

use serde::{Deserialize, Serialize};

use super::{PestelSet, RatedFactor};

/// Maximum GUT score for a single factor (5 x 5 x 5).
pub const MAX_GUT_SCORE: u32 = 125;

/// GUT threshold at or above which a PESTEL factor counts as a threat.
pub const THREAT_THRESHOLD: u32 = 40;

/// Computes the GUT score: gravity x urgency x tendency, in [1, 125].
pub fn gut_score(factor: &RatedFactor) -> u32 {
    factor.gravity.value() as u32 * factor.urgency.value() as u32 * factor.tendency.value() as u32
}

/// Severity band for factor color coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Critical,
    High,
    Medium,
    Low,
}

impl ScoreBand {
    /// Classifies a GUT score. Inclusive lower bounds, highest first.
    pub fn for_score(score: u32) -> ScoreBand {
        if score >= 80 {
            ScoreBand::Critical
        } else if score >= 40 {
            ScoreBand::High
        } else if score >= 20 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }

    /// Returns the style class used by the presentation layer.
    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreBand::Critical => "gut-score-critical",
            ScoreBand::High => "gut-score-high",
            ScoreBand::Medium => "gut-score-medium",
            ScoreBand::Low => "gut-score-low",
        }
    }
}

/// Impact narrative level. Uses a different boundary set than [`ScoreBand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImpactLevel {
    VeryHigh,
    High,
    ModerateHigh,
    Moderate,
    Low,
    VeryLow,
}

impl ImpactLevel {
    /// Classifies a GUT score. Inclusive lower bounds, highest first.
    pub fn for_score(score: u32) -> ImpactLevel {
        if score >= 80 {
            ImpactLevel::VeryHigh
        } else if score >= 60 {
            ImpactLevel::High
        } else if score >= 40 {
            ImpactLevel::ModerateHigh
        } else if score >= 20 {
            ImpactLevel::Moderate
        } else if score >= 10 {
            ImpactLevel::Low
        } else {
            ImpactLevel::VeryLow
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ImpactLevel::VeryHigh => "Very High Impact",
            ImpactLevel::High => "High Impact",
            ImpactLevel::ModerateHigh => "Moderate to High Impact",
            ImpactLevel::Moderate => "Moderate Impact",
            ImpactLevel::Low => "Low Impact",
            ImpactLevel::VeryLow => "Very Low Impact",
        }
    }
}

/// Computes the 0-5 risk score for a product's PESTEL copy.
///
/// Total GUT score over the maximum possible, scaled to 5 and rounded to the
/// nearest integer. Zero factors score 0.
pub fn product_risk_score(pestel: &PestelSet) -> u8 {
    let count = pestel.factor_count();
    if count == 0 {
        return 0;
    }
    let total: u32 = pestel
        .iter()
        .flat_map(|(_, data)| data.factors.iter())
        .map(gut_score)
        .sum();
    let max_possible = count as u32 * MAX_GUT_SCORE;
    ((total as f64 / max_possible as f64) * 5.0).round() as u8
}

/// Risk classification for the 0-5 product risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductRiskLevel {
    High,
    Medium,
    Low,
    NoAnalysis,
}

impl ProductRiskLevel {
    /// Classifies a product risk score.
    pub fn for_score(score: u8) -> ProductRiskLevel {
        // >=3 and >=2 intentionally share the same label.
        if score >= 4 {
            ProductRiskLevel::High
        } else if score >= 3 {
            ProductRiskLevel::Medium
        } else if score >= 2 {
            ProductRiskLevel::Medium
        } else if score >= 1 {
            ProductRiskLevel::Low
        } else {
            ProductRiskLevel::NoAnalysis
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ProductRiskLevel::High => "High Risk",
            ProductRiskLevel::Medium => "Medium Risk",
            ProductRiskLevel::Low => "Low Risk",
            ProductRiskLevel::NoAnalysis => "No Analysis Yet",
        }
    }

    /// Returns the style class used by the presentation layer.
    pub fn css_class(&self) -> &'static str {
        match self {
            ProductRiskLevel::High => "risk-high",
            ProductRiskLevel::Medium => "risk-medium",
            ProductRiskLevel::Low => "risk-low",
            ProductRiskLevel::NoAnalysis => "risk-none",
        }
    }
}
