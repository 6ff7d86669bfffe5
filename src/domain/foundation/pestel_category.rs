//! PestelCategory enum representing the six macro-environment categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six PESTEL categories. A PESTEL set always carries exactly these six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PestelCategory {
    Political,
    Economic,
    Social,
    Technological,
    Environmental,
    Legal,
}

impl PestelCategory {
    /// Returns all categories in canonical order.
    pub fn all() -> &'static [PestelCategory] {
        &[
            PestelCategory::Political,
            PestelCategory::Economic,
            PestelCategory::Social,
            PestelCategory::Technological,
            PestelCategory::Environmental,
            PestelCategory::Legal,
        ]
    }

    /// Returns the lowercase key used in persisted records and derived text.
    pub fn key(&self) -> &'static str {
        match self {
            PestelCategory::Political => "political",
            PestelCategory::Economic => "economic",
            PestelCategory::Social => "social",
            PestelCategory::Technological => "technological",
            PestelCategory::Environmental => "environmental",
            PestelCategory::Legal => "legal",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            PestelCategory::Political => "Political",
            PestelCategory::Economic => "Economic",
            PestelCategory::Social => "Social",
            PestelCategory::Technological => "Technological",
            PestelCategory::Environmental => "Environmental",
            PestelCategory::Legal => "Legal",
        }
    }
}

impl fmt::Display for PestelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_six_categories() {
        assert_eq!(PestelCategory::all().len(), 6);
    }

    #[test]
    fn key_is_lowercase() {
        assert_eq!(PestelCategory::Political.key(), "political");
        assert_eq!(PestelCategory::Legal.key(), "legal");
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&PestelCategory::Technological).unwrap();
        assert_eq!(json, "\"technological\"");
    }

    #[test]
    fn display_matches_key() {
        assert_eq!(format!("{}", PestelCategory::Economic), "economic");
    }
}
