//! Researched company profile and its closed-set fields.
//!
//! Enumerated fields (`size`, `primary_market`, `business_model`) are
//! validated against fixed closed sets at the research boundary: any wire
//! value outside the set is discarded rather than stored verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Company size bracket by headcount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanySize {
    Startup,
    Small,
    Medium,
    Large,
    Enterprise,
}

impl CompanySize {
    /// Parses a wire value, discarding anything outside the closed set.
    pub fn from_wire(raw: &str) -> Option<CompanySize> {
        match raw {
            "startup" => Some(CompanySize::Startup),
            "small" => Some(CompanySize::Small),
            "medium" => Some(CompanySize::Medium),
            "large" => Some(CompanySize::Large),
            "enterprise" => Some(CompanySize::Enterprise),
            _ => None,
        }
    }

    /// Buckets an employee count into a size bracket.
    pub fn from_employee_count(employees: u64) -> CompanySize {
        if employees >= 1000 {
            CompanySize::Enterprise
        } else if employees >= 201 {
            CompanySize::Large
        } else if employees >= 51 {
            CompanySize::Medium
        } else if employees >= 11 {
            CompanySize::Small
        } else {
            CompanySize::Startup
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::Startup => "startup",
            CompanySize::Small => "small",
            CompanySize::Medium => "medium",
            CompanySize::Large => "large",
            CompanySize::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Primary market the company operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrimaryMarket {
    Australia,
    UnitedStates,
    Global,
    Other,
}

impl PrimaryMarket {
    /// Parses a wire value, discarding anything outside the closed set.
    pub fn from_wire(raw: &str) -> Option<PrimaryMarket> {
        match raw {
            "australia" => Some(PrimaryMarket::Australia),
            "united-states" => Some(PrimaryMarket::UnitedStates),
            "global" => Some(PrimaryMarket::Global),
            "other" => Some(PrimaryMarket::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryMarket::Australia => "australia",
            PrimaryMarket::UnitedStates => "united-states",
            PrimaryMarket::Global => "global",
            PrimaryMarket::Other => "other",
        }
    }
}

impl fmt::Display for PrimaryMarket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Dominant business model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessModel {
    #[serde(rename = "b2b")]
    B2b,
    #[serde(rename = "b2c")]
    B2c,
    #[serde(rename = "saas")]
    Saas,
    #[serde(rename = "e-commerce")]
    ECommerce,
    #[serde(rename = "other")]
    Other,
}

impl BusinessModel {
    /// Parses a wire value, discarding anything outside the closed set.
    pub fn from_wire(raw: &str) -> Option<BusinessModel> {
        match raw {
            "b2b" => Some(BusinessModel::B2b),
            "b2c" => Some(BusinessModel::B2c),
            "saas" => Some(BusinessModel::Saas),
            "e-commerce" => Some(BusinessModel::ECommerce),
            "other" => Some(BusinessModel::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessModel::B2b => "b2b",
            BusinessModel::B2c => "b2c",
            BusinessModel::Saas => "saas",
            BusinessModel::ECommerce => "e-commerce",
            BusinessModel::Other => "other",
        }
    }
}

impl fmt::Display for BusinessModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Best-effort factual company profile.
///
/// Every field is optional in practice: a failed or partial lookup leaves
/// fields at their empty defaults, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    pub name: String,
    pub industry: String,
    pub primary_market: Option<PrimaryMarket>,
    pub business_model: Option<BusinessModel>,
    pub size: Option<CompanySize>,
    pub revenue: String,
    pub description: String,
    pub founded_year: String,
    pub headquarters: String,
    pub website: String,
    pub key_products: Vec<String>,
    pub mission_statement: String,
    pub vision_statement: String,
    pub core_values: Vec<String>,
    pub key_executives: Vec<String>,
}

impl CompanyProfile {
    /// Creates an otherwise-empty profile carrying just the company name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The market string used by the Porter defaults generator.
    pub fn market_key(&self) -> &str {
        self.primary_market.map(|m| m.as_str()).unwrap_or("")
    }
}
