//! Default Porter's Six Forces content keyed by industry and market.

use once_cell::sync::Lazy;

use crate::domain::analysis::{ForceAssessment, PortersForces};
use crate::domain::foundation::AxisRating::{High, Low, Moderate, VeryHigh};
use crate::domain::foundation::{AxisRating, Force};

fn assess(description: &str, g: AxisRating, u: AxisRating, t: AxisRating) -> ForceAssessment {
    ForceAssessment::new(description, g, u, t)
}

fn generic_baseline() -> PortersForces {
    PortersForces {
        threat_of_new_entrants: assess(
            "Moderate - Capital requirements can be high, but digital disruption lowers barriers.",
            Moderate, Moderate, Moderate,
        ),
        bargaining_power_of_buyers: assess(
            "High - Buyers have many choices and access to information.",
            High, High, Moderate,
        ),
        bargaining_power_of_suppliers: assess(
            "Moderate - Depends on uniqueness of components and services.",
            Moderate, Moderate, Moderate,
        ),
        threat_of_substitutes: assess(
            "High - Technology evolves rapidly, leading to new substitutes.",
            High, High, High,
        ),
        rivalry_among_competitors: assess(
            "Very High - Intense competition, frequent innovation, price wars.",
            VeryHigh, VeryHigh, High,
        ),
        threat_of_new_complementors: assess(
            "High - Complementary products and services (apps, accessories) enhance value.",
            High, Moderate, High,
        ),
    }
}

fn healthcare_baseline() -> PortersForces {
    PortersForces {
        threat_of_new_entrants: assess(
            "Low - High regulatory hurdles, capital intensity, and specialized knowledge required.",
            Low, Low, Low,
        ),
        bargaining_power_of_buyers: assess(
            "Moderate - Patients often rely on insurers and providers, but consumer choice is growing.",
            Moderate, Moderate, Moderate,
        ),
        bargaining_power_of_suppliers: assess(
            "High - Specialized medical equipment and pharmaceutical suppliers have strong power.",
            High, High, Moderate,
        ),
        threat_of_substitutes: assess(
            "Low to Moderate - Alternatives exist, but direct substitutes for critical care are limited.",
            Low, Moderate, Low,
        ),
        rivalry_among_competitors: assess(
            "Moderate to High - Competition among hospitals, clinics, and pharma, often localized.",
            High, High, Moderate,
        ),
        threat_of_new_complementors: assess(
            "Moderate - Telemedicine platforms, health tech apps, and diagnostic tools enhance services.",
            Moderate, Moderate, High,
        ),
    }
}

fn finance_baseline() -> PortersForces {
    PortersForces {
        threat_of_new_entrants: assess(
            "Moderate to High - Fintech startups lower barriers, but regulatory burden stays high for banking.",
            High, High, Moderate,
        ),
        bargaining_power_of_buyers: assess(
            "High - Customers switch providers easily given low switching costs and digital options.",
            High, High, High,
        ),
        bargaining_power_of_suppliers: assess(
            "Moderate - Technology providers, data services, and interbank networks hold some power.",
            Moderate, Moderate, Moderate,
        ),
        threat_of_substitutes: assess(
            "High - Cryptocurrencies, peer-to-peer lending, and alternative investment platforms.",
            High, VeryHigh, High,
        ),
        rivalry_among_competitors: assess(
            "Very High - Intense competition among banks, investment firms, and fintechs.",
            VeryHigh, VeryHigh, VeryHigh,
        ),
        threat_of_new_complementors: assess(
            "High - Payment gateways, planning software, and data analytics tools are crucial.",
            High, High, High,
        ),
    }
}

fn retail_baseline() -> PortersForces {
    PortersForces {
        threat_of_new_entrants: assess(
            "High - Low barriers for online retail; physical retail still needs significant capital.",
            High, High, High,
        ),
        bargaining_power_of_buyers: assess(
            "Very High - Consumers have vast choices, price transparency, and low switching costs.",
            VeryHigh, VeryHigh, High,
        ),
        bargaining_power_of_suppliers: assess(
            "Moderate - Large retailers hold significant power, but unique brands command higher prices.",
            Moderate, Moderate, Moderate,
        ),
        threat_of_substitutes: assess(
            "High - E-commerce, direct-to-consumer brands, and sharing economy models.",
            High, High, High,
        ),
        rivalry_among_competitors: assess(
            "Very High - Intense price competition and rapid trend changes.",
            VeryHigh, VeryHigh, VeryHigh,
        ),
        threat_of_new_complementors: assess(
            "High - Payment solutions, logistics providers, and marketing platforms are essential.",
            High, High, High,
        ),
    }
}

/// Industry keyword to baseline table, checked in order.
static INDUSTRY_BASELINES: Lazy<Vec<(&'static str, PortersForces)>> = Lazy::new(|| {
    vec![
        ("healthcare", healthcare_baseline()),
        ("finance", finance_baseline()),
        ("retail", retail_baseline()),
    ]
});

/// Generates default Porter's Forces content for an industry and market.
///
/// Starts from a generic baseline; a recognized industry keyword swaps in
/// that industry's table; a recognized (market, industry) pair appends a
/// market note to the new-entrants and rivalry descriptions without touching
/// the numeric ratings. Total and deterministic; always six forces.
pub fn porters_defaults(industry: &str, market: &str) -> PortersForces {
    let industry_lc = industry.to_lowercase();
    let market_lc = market.to_lowercase();

    let mut forces = generic_baseline();
    for (keyword, baseline) in INDUSTRY_BASELINES.iter() {
        if industry_lc.contains(keyword) {
            forces = baseline.clone();
            break;
        }
    }

    if market_lc.contains("australia") {
        if industry_lc.contains("finance") {
            forces
                .force_mut(Force::ThreatOfNewEntrants)
                .description
                .push_str(" (Australia: Strong regulatory oversight, but fintech growth is notable).");
            forces
                .force_mut(Force::RivalryAmongCompetitors)
                .description
                .push_str(" (Australia: Dominated by major banks, with rising competition from smaller players).");
        }
    } else if market_lc.contains("united-states") && industry_lc.contains("technology") {
        forces
            .force_mut(Force::ThreatOfNewEntrants)
            .description
            .push_str(" (USA: High innovation, but strong incumbents).");
        forces
            .force_mut(Force::RivalryAmongCompetitors)
            .description
            .push_str(" (USA: Global tech giants lead to fierce competition).");
    }

    forces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_is_deterministic() {
        let a = porters_defaults("Finance", "australia");
        let b = porters_defaults("Finance", "australia");
        assert_eq!(a, b);
    }

    #[test]
    fn output_always_has_six_forces() {
        for industry in ["", "Technology", "Healthcare", "Finance", "Retail", "Mining"] {
            let forces = porters_defaults(industry, "global");
            assert_eq!(forces.iter().count(), 6);
        }
    }

    #[test]
    fn unknown_industry_uses_generic_baseline() {
        let forces = porters_defaults("Aerospace", "");
        assert_eq!(
            forces.rivalry_among_competitors.gravity,
            VeryHigh
        );
        assert_eq!(forces.threat_of_new_entrants.gravity, Moderate);
    }

    #[test]
    fn industry_match_is_case_insensitive_substring() {
        let exact = porters_defaults("healthcare", "");
        let embedded = porters_defaults("Digital Healthcare Services", "");
        assert_eq!(exact, embedded);
        assert_eq!(exact.threat_of_new_entrants.gravity, Low);
    }

    #[test]
    fn healthcare_rates_supplier_power_higher_than_finance_and_retail() {
        let healthcare = porters_defaults("Healthcare", "");
        let finance = porters_defaults("Finance", "");
        let retail = porters_defaults("Retail", "");

        assert!(
            healthcare.bargaining_power_of_suppliers.gravity
                > finance.bargaining_power_of_suppliers.gravity
        );
        assert!(
            healthcare.bargaining_power_of_suppliers.gravity
                > retail.bargaining_power_of_suppliers.gravity
        );
    }

    #[test]
    fn finance_and_retail_rate_rivalry_and_entrants_higher_than_healthcare() {
        let healthcare = porters_defaults("Healthcare", "");
        let finance = porters_defaults("Finance", "");
        let retail = porters_defaults("Retail", "");

        assert!(
            finance.rivalry_among_competitors.gravity
                > healthcare.rivalry_among_competitors.gravity
        );
        assert!(
            retail.rivalry_among_competitors.gravity
                > healthcare.rivalry_among_competitors.gravity
        );
        assert!(finance.threat_of_new_entrants.gravity > healthcare.threat_of_new_entrants.gravity);
        assert!(retail.threat_of_new_entrants.gravity > healthcare.threat_of_new_entrants.gravity);
    }

    #[test]
    fn australian_finance_gets_market_notes_without_rating_changes() {
        let base = porters_defaults("Finance", "global");
        let australian = porters_defaults("Finance", "australia");

        assert!(australian
            .threat_of_new_entrants
            .description
            .contains("Australia"));
        assert!(australian
            .rivalry_among_competitors
            .description
            .contains("Australia"));
        assert_eq!(
            australian.threat_of_new_entrants.gravity,
            base.threat_of_new_entrants.gravity
        );
        // untouched forces keep identical descriptions
        assert_eq!(
            australian.bargaining_power_of_buyers,
            base.bargaining_power_of_buyers
        );
    }

    #[test]
    fn us_technology_gets_market_notes() {
        let forces = porters_defaults("Technology", "united-states");
        assert!(forces.threat_of_new_entrants.description.contains("USA"));
        assert!(forces
            .rivalry_among_competitors
            .description
            .contains("USA"));
    }

    #[test]
    fn market_note_requires_matching_industry() {
        let forces = porters_defaults("Retail", "australia");
        assert!(!forces.threat_of_new_entrants.description.contains("Australia"));

        let forces = porters_defaults("Finance", "united-states");
        assert!(!forces.threat_of_new_entrants.description.contains("USA"));
    }
}
