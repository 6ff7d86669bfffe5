//! GUT-rated factor shared by PESTEL categories and Porter's forces.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AxisRating, ValidationError};

/// A named factor rated on the three GUT axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatedFactor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub gravity: AxisRating,
    pub urgency: AxisRating,
    pub tendency: AxisRating,
}

impl RatedFactor {
    /// Creates a factor with an empty description.
    pub fn new(
        name: impl Into<String>,
        gravity: AxisRating,
        urgency: AxisRating,
        tendency: AxisRating,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            gravity,
            urgency,
            tendency,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Validates user-entered factor data.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(())
    }
}
