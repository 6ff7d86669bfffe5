//! Customer segments.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Growth outlook for a customer segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthPotential {
    Low,
    #[default]
    Medium,
    High,
}

impl GrowthPotential {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            GrowthPotential::Low => "Low",
            GrowthPotential::Medium => "Medium",
            GrowthPotential::High => "High",
        }
    }
}

impl fmt::Display for GrowthPotential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A named customer segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerSegment {
    pub name: String,
    pub description: String,
    pub demographics: String,
    pub needs: String,
    pub size: String,
    pub revenue_contribution: String,
    pub growth_potential: GrowthPotential,
}

impl CustomerSegment {
    /// Creates a segment with the given name, trimmed.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            ..Default::default()
        }
    }

    /// Validates the segment before it is saved.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(())
    }
}
