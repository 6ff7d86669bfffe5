//! Force enum representing Porter's Six Forces.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six competitive forces (Porter's Five plus complementor power).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Force {
    ThreatOfNewEntrants,
    BargainingPowerOfBuyers,
    BargainingPowerOfSuppliers,
    ThreatOfSubstitutes,
    RivalryAmongCompetitors,
    ThreatOfNewComplementors,
}

impl Force {
    /// Returns all forces in canonical order.
    pub fn all() -> &'static [Force] {
        &[
            Force::ThreatOfNewEntrants,
            Force::BargainingPowerOfBuyers,
            Force::BargainingPowerOfSuppliers,
            Force::ThreatOfSubstitutes,
            Force::RivalryAmongCompetitors,
            Force::ThreatOfNewComplementors,
        ]
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Force::ThreatOfNewEntrants => "Threat of New Entrants",
            Force::BargainingPowerOfBuyers => "Bargaining Power of Buyers",
            Force::BargainingPowerOfSuppliers => "Bargaining Power of Suppliers",
            Force::ThreatOfSubstitutes => "Threat of Substitute Products or Services",
            Force::RivalryAmongCompetitors => "Rivalry Among Existing Competitors",
            Force::ThreatOfNewComplementors => "Relative Power of New Complementors",
        }
    }
}

impl fmt::Display for Force {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_six_forces() {
        assert_eq!(Force::all().len(), 6);
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Force::ThreatOfNewEntrants).unwrap();
        assert_eq!(json, "\"threat_of_new_entrants\"");
    }

    #[test]
    fn display_name_is_human_readable() {
        assert_eq!(
            Force::RivalryAmongCompetitors.display_name(),
            "Rivalry Among Existing Competitors"
        );
    }
}
