//! Phase enum representing the seven worksheet phases.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven analysis phases in worksheet order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    #[default]
    CompanyInfo,
    Pestel,
    Porter,
    InternalIssues,
    Swot,
    Customer,
    Integration,
}

impl Phase {
    /// Returns all phases in canonical order.
    pub fn all() -> &'static [Phase] {
        &[
            Phase::CompanyInfo,
            Phase::Pestel,
            Phase::Porter,
            Phase::InternalIssues,
            Phase::Swot,
            Phase::Customer,
            Phase::Integration,
        ]
    }

    /// Returns the 0-based index of this phase in the canonical order.
    pub fn order_index(&self) -> usize {
        Self::all()
            .iter()
            .position(|p| p == self)
            .expect("Phase must be in all() array")
    }

    /// Returns the next phase in order, if any.
    pub fn next(&self) -> Option<Phase> {
        Self::all().get(self.order_index() + 1).copied()
    }

    /// Returns the previous phase in order, if any.
    pub fn previous(&self) -> Option<Phase> {
        let idx = self.order_index();
        if idx == 0 {
            None
        } else {
            Self::all().get(idx - 1).copied()
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::CompanyInfo => "Company Info",
            Phase::Pestel => "PESTEL Analysis",
            Phase::Porter => "Porter's Six Forces",
            Phase::InternalIssues => "Internal Issues",
            Phase::Swot => "SWOT Analysis",
            Phase::Customer => "Customer Segmentation",
            Phase::Integration => "Integration & Insights",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_seven_phases() {
        assert_eq!(Phase::all().len(), 7);
    }

    #[test]
    fn default_is_company_info() {
        assert_eq!(Phase::default(), Phase::CompanyInfo);
    }

    #[test]
    fn next_walks_forward() {
        assert_eq!(Phase::CompanyInfo.next(), Some(Phase::Pestel));
        assert_eq!(Phase::Integration.next(), None);
    }

    #[test]
    fn previous_walks_backward() {
        assert_eq!(Phase::Pestel.previous(), Some(Phase::CompanyInfo));
        assert_eq!(Phase::CompanyInfo.previous(), None);
    }

    #[test]
    fn serializes_as_kebab_case() {
        let json = serde_json::to_string(&Phase::InternalIssues).unwrap();
        assert_eq!(json, "\"internal-issues\"");
    }
}
