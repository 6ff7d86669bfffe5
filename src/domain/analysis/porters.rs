//! Porter's Six Forces record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AxisRating, Force};

/// One force's assessment: a description plus the three GUT axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceAssessment {
    #[serde(default)]
    pub description: String,
    pub gravity: AxisRating,
    pub urgency: AxisRating,
    pub tendency: AxisRating,
}

impl ForceAssessment {
    /// Creates an assessment.
    pub fn new(
        description: impl Into<String>,
        gravity: AxisRating,
        urgency: AxisRating,
        tendency: AxisRating,
    ) -> Self {
        Self {
            description: description.into(),
            gravity,
            urgency,
            tendency,
        }
    }

    /// Computes this force's GUT score.
    pub fn score(&self) -> u32 {
        self.gravity.value() as u32 * self.urgency.value() as u32 * self.tendency.value() as u32
    }
}

impl Default for ForceAssessment {
    fn default() -> Self {
        Self::new(
            "",
            AxisRating::Moderate,
            AxisRating::Moderate,
            AxisRating::Moderate,
        )
    }
}

/// The complete six-force competitive assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortersForces {
    pub threat_of_new_entrants: ForceAssessment,
    pub bargaining_power_of_buyers: ForceAssessment,
    pub bargaining_power_of_suppliers: ForceAssessment,
    pub threat_of_substitutes: ForceAssessment,
    pub rivalry_among_competitors: ForceAssessment,
    pub threat_of_new_complementors: ForceAssessment,
}

impl PortersForces {
    /// Returns the assessment for a force.
    pub fn force(&self, force: Force) -> &ForceAssessment {
        match force {
            Force::ThreatOfNewEntrants => &self.threat_of_new_entrants,
            Force::BargainingPowerOfBuyers => &self.bargaining_power_of_buyers,
            Force::BargainingPowerOfSuppliers => &self.bargaining_power_of_suppliers,
            Force::ThreatOfSubstitutes => &self.threat_of_substitutes,
            Force::RivalryAmongCompetitors => &self.rivalry_among_competitors,
            Force::ThreatOfNewComplementors => &self.threat_of_new_complementors,
        }
    }

    /// Returns the assessment for a force, mutably.
    pub fn force_mut(&mut self, force: Force) -> &mut ForceAssessment {
        match force {
            Force::ThreatOfNewEntrants => &mut self.threat_of_new_entrants,
            Force::BargainingPowerOfBuyers => &mut self.bargaining_power_of_buyers,
            Force::BargainingPowerOfSuppliers => &mut self.bargaining_power_of_suppliers,
            Force::ThreatOfSubstitutes => &mut self.threat_of_substitutes,
            Force::RivalryAmongCompetitors => &mut self.rivalry_among_competitors,
            Force::ThreatOfNewComplementors => &mut self.threat_of_new_complementors,
        }
    }

    /// Iterates forces in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Force, &ForceAssessment)> {
        Force::all().iter().map(move |&f| (f, self.force(f)))
    }
}
