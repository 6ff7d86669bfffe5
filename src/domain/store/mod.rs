//! The analysis state store and its propagation rules.
//!
//! `AnalysisStore` holds every named, independently-evolving record of one
//! analysis session. It is an explicit, passed-by-reference object: callers
//! own it and mutate it through named update methods, and those methods are
//! the only place the derivation rules fire (product added, industry changed,
//! research committed).

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{
    CustomerSegment, InternalIssues, PestelSet, PortersForces, ProductPestels, SwotSet,
};
use crate::domain::foundation::{Phase, ValidationError};
use crate::domain::generators::{company_pestel, competitors, porters_defaults};
use crate::domain::profile::{CompanyProfile, PrimaryMarket};

/// Which PESTEL analysis is currently shown: the company-wide set or one
/// product's copy.
///
/// Persists as a bare string, with `"company"` standing for the company-wide
/// scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PestelScope {
    #[default]
    Company,
    Product(String),
}

impl From<String> for PestelScope {
    fn from(raw: String) -> Self {
        if raw == "company" {
            PestelScope::Company
        } else {
            PestelScope::Product(raw)
        }
    }
}

impl From<PestelScope> for String {
    fn from(scope: PestelScope) -> String {
        match scope {
            PestelScope::Company => "company".to_string(),
            PestelScope::Product(name) => name,
        }
    }
}

/// Everything a completed research lookup replaces, as one logical unit.
///
/// Partial application must never be observable: the presentation layer sees
/// either the old records or all of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchOutcome {
    pub profile: CompanyProfile,
    pub company_pestel: PestelSet,
    pub competitors: Vec<String>,
    pub porters_forces: PortersForces,
    pub product_pestels: ProductPestels,
}

impl ResearchOutcome {
    /// Derives the full outcome from a researched profile: bootstrap company
    /// PESTEL, Porter defaults, competitor list, and one PESTEL copy per key
    /// product.
    pub fn derive(profile: CompanyProfile) -> ResearchOutcome {
        let pestel = company_pestel(&profile.name, &profile.industry);
        let forces = porters_defaults(&profile.industry, profile.market_key());
        let rivals = competitors(&profile.name);

        let mut product_pestels = ProductPestels::new();
        for product in &profile.key_products {
            product_pestels.insert(product.clone(), pestel.deep_clone_expanded());
        }

        ResearchOutcome {
            profile,
            company_pestel: pestel,
            competitors: rivals,
            porters_forces: forces,
            product_pestels,
        }
    }
}

/// The named records of one analysis session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisStore {
    profile: CompanyProfile,
    company_pestel: PestelSet,
    product_pestels: ProductPestels,
    selected_scope: PestelScope,
    competitors: Vec<String>,
    porters_forces: PortersForces,
    internal_issues: InternalIssues,
    swot: SwotSet,
    customer_segments: Vec<CustomerSegment>,
    current_phase: Phase,
}

impl AnalysisStore {
    /// Creates an empty store with all records at their defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reassembles a store from independently rehydrated records.
    #[allow(clippy::too_many_arguments)]
    pub fn from_records(
        profile: CompanyProfile,
        company_pestel: PestelSet,
        product_pestels: ProductPestels,
        selected_scope: PestelScope,
        competitors: Vec<String>,
        porters_forces: PortersForces,
        internal_issues: InternalIssues,
        swot: SwotSet,
        customer_segments: Vec<CustomerSegment>,
        current_phase: Phase,
    ) -> Self {
        Self {
            profile,
            company_pestel,
            product_pestels,
            selected_scope,
            competitors,
            porters_forces,
            internal_issues,
            swot,
            customer_segments,
            current_phase,
        }
    }

    pub fn profile(&self) -> &CompanyProfile {
        &self.profile
    }

    pub fn company_pestel(&self) -> &PestelSet {
        &self.company_pestel
    }

    pub fn company_pestel_mut(&mut self) -> &mut PestelSet {
        &mut self.company_pestel
    }

    pub fn product_pestels(&self) -> &ProductPestels {
        &self.product_pestels
    }

    pub fn product_pestel_mut(&mut self, product: &str) -> Option<&mut PestelSet> {
        self.product_pestels.get_mut(product)
    }

    pub fn selected_scope(&self) -> &PestelScope {
        &self.selected_scope
    }

    pub fn competitors(&self) -> &[String] {
        &self.competitors
    }

    pub fn porters_forces(&self) -> &PortersForces {
        &self.porters_forces
    }

    pub fn porters_forces_mut(&mut self) -> &mut PortersForces {
        &mut self.porters_forces
    }

    pub fn internal_issues(&self) -> &InternalIssues {
        &self.internal_issues
    }

    pub fn internal_issues_mut(&mut self) -> &mut InternalIssues {
        &mut self.internal_issues
    }

    pub fn swot(&self) -> &SwotSet {
        &self.swot
    }

    pub fn swot_mut(&mut self) -> &mut SwotSet {
        &mut self.swot
    }

    pub fn customer_segments(&self) -> &[CustomerSegment] {
        &self.customer_segments
    }

    pub fn current_phase(&self) -> Phase {
        self.current_phase
    }

    /// Sets the company name without touching any derived record.
    pub fn set_company_name(&mut self, name: impl Into<String>) {
        self.profile.name = name.into();
    }

    /// Sets the industry. A changed value regenerates the Porter defaults,
    /// discarding user edits to the forces.
    pub fn set_industry(&mut self, industry: impl Into<String>) {
        let industry = industry.into();
        if self.profile.industry == industry {
            return;
        }
        self.profile.industry = industry;
        self.regenerate_porters();
    }

    /// Sets the primary market. A changed value regenerates the Porter
    /// defaults, discarding user edits to the forces.
    pub fn set_primary_market(&mut self, market: Option<PrimaryMarket>) {
        if self.profile.primary_market == market {
            return;
        }
        self.profile.primary_market = market;
        self.regenerate_porters();
    }

    fn regenerate_porters(&mut self) {
        // only once either driver field carries a value
        if self.profile.industry.is_empty() && self.profile.primary_market.is_none() {
            return;
        }
        self.porters_forces =
            porters_defaults(&self.profile.industry, self.profile.market_key());
    }

    /// Registers a key product. A newly registered name gets a PESTEL copy
    /// deep-cloned from the current company set, all categories expanded.
    /// Returns whether the product was newly added.
    pub fn add_product(&mut self, name: &str) -> Result<bool, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("product"));
        }
        if self.profile.key_products.iter().any(|p| p == name) {
            return Ok(false);
        }
        self.profile.key_products.push(name.to_string());
        if !self.product_pestels.contains(name) {
            self.product_pestels
                .insert(name, self.company_pestel.deep_clone_expanded());
        }
        Ok(true)
    }

    /// Removes a key product and its PESTEL copy. Removing an absent name is
    /// a no-op; removing the currently selected product resets the scope to
    /// the company-wide analysis.
    pub fn remove_product(&mut self, name: &str) {
        self.profile.key_products.retain(|p| p != name);
        self.product_pestels.remove(name);
        if matches!(&self.selected_scope, PestelScope::Product(selected) if selected == name) {
            self.selected_scope = PestelScope::Company;
        }
    }

    /// Selects which PESTEL analysis is shown.
    pub fn select_scope(&mut self, scope: PestelScope) {
        self.selected_scope = scope;
    }

    /// Sets the competitor list.
    pub fn set_competitors(&mut self, competitors: Vec<String>) {
        self.competitors = competitors;
    }

    /// Overwrites the SWOT set from internal issues and the company PESTEL.
    pub fn auto_populate_swot(&mut self) {
        self.swot = SwotSet::auto_populate(&self.internal_issues, &self.company_pestel);
    }

    /// Replaces the SWOT set with manually edited content.
    pub fn set_swot(&mut self, swot: SwotSet) {
        self.swot = swot;
    }

    /// Adds a customer segment. Names are unique; a duplicate is rejected and
    /// the prior state is left intact.
    pub fn add_segment(&mut self, segment: CustomerSegment) -> Result<(), ValidationError> {
        segment.validate()?;
        if self.customer_segments.iter().any(|s| s.name == segment.name) {
            return Err(ValidationError::invalid_format(
                "name",
                "segment name already exists",
            ));
        }
        self.customer_segments.push(segment);
        Ok(())
    }

    /// Replaces a segment by name. The replacement is validated first.
    pub fn update_segment(
        &mut self,
        name: &str,
        segment: CustomerSegment,
    ) -> Result<(), ValidationError> {
        segment.validate()?;
        match self.customer_segments.iter_mut().find(|s| s.name == name) {
            Some(slot) => {
                *slot = segment;
                Ok(())
            }
            None => Err(ValidationError::invalid_format(
                "name",
                "no such segment",
            )),
        }
    }

    /// Removes a segment by name. Returns whether one was removed.
    pub fn remove_segment(&mut self, name: &str) -> bool {
        let before = self.customer_segments.len();
        self.customer_segments.retain(|s| s.name != name);
        self.customer_segments.len() != before
    }

    /// Moves the worksheet to a phase.
    pub fn set_phase(&mut self, phase: Phase) {
        self.current_phase = phase;
    }

    /// Applies a completed research lookup as one atomic replacement of the
    /// profile, company PESTEL, competitors, Porter's Forces, and the full
    /// product-PESTEL map. A selected product scope that no longer exists
    /// resets to the company-wide scope.
    pub fn commit_research(&mut self, outcome: ResearchOutcome) {
        self.profile = outcome.profile;
        self.company_pestel = outcome.company_pestel;
        self.competitors = outcome.competitors;
        self.porters_forces = outcome.porters_forces;
        self.product_pestels = outcome.product_pestels;

        if matches!(&self.selected_scope, PestelScope::Product(name) if !self.product_pestels.contains(name))
        {
            self.selected_scope = PestelScope::Company;
        }
    }
}
