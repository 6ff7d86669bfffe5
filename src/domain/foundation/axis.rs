//! Axis rating value object for GUT scoring (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// One GUT axis rating (gravity, urgency, or tendency): 1 to 5.
///
/// Serializes as a bare integer so persisted factors read naturally.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum AxisRating {
    VeryLow = 1,
    Low = 2,
    #[default]
    Moderate = 3,
    High = 4,
    VeryHigh = 5,
}

impl AxisRating {
    /// Creates an AxisRating from an integer, returning error if out of range.
    pub fn try_from_i32(value: i32) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(AxisRating::VeryLow),
            2 => Ok(AxisRating::Low),
            3 => Ok(AxisRating::Moderate),
            4 => Ok(AxisRating::High),
            5 => Ok(AxisRating::VeryHigh),
            _ => Err(ValidationError::out_of_range("rating", 1, 5, value)),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            AxisRating::VeryLow => "Very Low",
            AxisRating::Low => "Low",
            AxisRating::Moderate => "Moderate",
            AxisRating::High => "High",
            AxisRating::VeryHigh => "Very High",
        }
    }
}

impl TryFrom<u8> for AxisRating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        AxisRating::try_from_i32(value as i32)
    }
}

impl From<AxisRating> for u8 {
    fn from(rating: AxisRating) -> u8 {
        rating.value()
    }
}

impl fmt::Display for AxisRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
