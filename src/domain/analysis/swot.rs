//! Internal issues, SWOT quadrants, and the auto-populate derivation.

use serde::{Deserialize, Serialize};

use super::scoring::{gut_score, THREAT_THRESHOLD};
use super::PestelSet;

/// Internally-sourced strengths and weaknesses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternalIssues {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Placeholder opportunities used when no PESTEL factor falls below the
/// threat threshold.
const FALLBACK_OPPORTUNITIES: [&str; 3] = [
    "Market expansion potential",
    "Emerging technology adoption",
    "Strategic partnerships",
];

/// Placeholder threats used when no PESTEL factor reaches the threat
/// threshold.
const FALLBACK_THREATS: [&str; 3] = [
    "Increasing competition",
    "Regulatory changes",
    "Economic uncertainty",
];

/// The four SWOT quadrants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwotSet {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

impl SwotSet {
    /// Derives a SWOT set from internal issues and the company PESTEL.
    ///
    /// Strengths and weaknesses are copied verbatim. Every PESTEL factor is
    /// classified by GUT score: at or above the threat threshold it becomes a
    /// threat, below it an opportunity, formatted as
    /// `"<name> (<category>, GUT: <score>)"`. An empty derived quadrant is
    /// replaced by its fixed placeholder list, each quadrant independently.
    pub fn auto_populate(issues: &InternalIssues, pestel: &PestelSet) -> SwotSet {
        let mut opportunities = Vec::new();
        let mut threats = Vec::new();

        for (category, data) in pestel.iter() {
            for factor in &data.factors {
                let score = gut_score(factor);
                let entry = format!("{} ({}, GUT: {})", factor.name, category.key(), score);
                if score >= THREAT_THRESHOLD {
                    threats.push(entry);
                } else {
                    opportunities.push(entry);
                }
            }
        }

        if opportunities.is_empty() {
            opportunities = FALLBACK_OPPORTUNITIES.map(String::from).to_vec();
        }
        if threats.is_empty() {
            threats = FALLBACK_THREATS.map(String::from).to_vec();
        }

        SwotSet {
            strengths: issues.strengths.clone(),
            weaknesses: issues.weaknesses.clone(),
            opportunities,
            threats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::RatedFactor;
    use crate::domain::foundation::AxisRating;

    fn issues() -> InternalIssues {
        InternalIssues {
            strengths: vec!["A".to_string()],
            weaknesses: vec!["B".to_string()],
        }
    }

    #[test]
    fn auto_populate_splits_factors_at_threshold() {
        let mut pestel = PestelSet::default();
        // 5 * 3 * 3 = 45, a threat
        pestel.political.factors.push(RatedFactor::new(
            "Government regulations",
            AxisRating::VeryHigh,
            AxisRating::Moderate,
            AxisRating::Moderate,
        ));
        // 3 * 2 * 2 = 12, an opportunity
        pestel.social.factors.push(RatedFactor::new(
            "Demographic shifts",
            AxisRating::Moderate,
            AxisRating::Low,
            AxisRating::Low,
        ));

        let swot = SwotSet::auto_populate(&issues(), &pestel);

        assert_eq!(swot.strengths, vec!["A"]);
        assert_eq!(swot.weaknesses, vec!["B"]);
        assert_eq!(
            swot.threats,
            vec!["Government regulations (political, GUT: 45)"]
        );
        assert_eq!(
            swot.opportunities,
            vec!["Demographic shifts (social, GUT: 12)"]
        );
    }

    #[test]
    fn score_exactly_forty_is_a_threat() {
        let mut pestel = PestelSet::default();
        // 5 * 4 * 2 = 40
        pestel.economic.factors.push(RatedFactor::new(
            "Interest rate fluctuations",
            AxisRating::VeryHigh,
            AxisRating::High,
            AxisRating::Low,
        ));

        let swot = SwotSet::auto_populate(&InternalIssues::default(), &pestel);
        assert_eq!(
            swot.threats,
            vec!["Interest rate fluctuations (economic, GUT: 40)"]
        );
    }

    #[test]
    fn empty_quadrants_get_independent_placeholders() {
        // no factors at all: both quadrants fall back
        let swot = SwotSet::auto_populate(&InternalIssues::default(), &PestelSet::default());
        assert_eq!(swot.opportunities.len(), 3);
        assert_eq!(swot.threats.len(), 3);
        assert_eq!(swot.opportunities[0], "Market expansion potential");
        assert_eq!(swot.threats[0], "Increasing competition");
    }

    #[test]
    fn only_the_empty_quadrant_is_replaced() {
        let mut pestel = PestelSet::default();
        // everything scores high, so opportunities would be empty
        pestel.technological.factors.push(RatedFactor::new(
            "AI and automation adoption",
            AxisRating::VeryHigh,
            AxisRating::VeryHigh,
            AxisRating::VeryHigh,
        ));

        let swot = SwotSet::auto_populate(&InternalIssues::default(), &pestel);
        assert_eq!(
            swot.threats,
            vec!["AI and automation adoption (technological, GUT: 125)"]
        );
        assert_eq!(swot.opportunities.len(), 3);
        assert_eq!(swot.opportunities[1], "Emerging technology adoption");
    }

    #[test]
    fn auto_populate_overwrites_nothing_in_inputs() {
        let issues = issues();
        let pestel = PestelSet::default();
        let _ = SwotSet::auto_populate(&issues, &pestel);
        assert_eq!(issues.strengths, vec!["A"]);
    }
}
