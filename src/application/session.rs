//! Analysis session - wires the store to persistence and research.
//!
//! The session owns one `AnalysisStore`, persists each named record under
//! its stable key after every mutation, and orchestrates the asynchronous
//! research workflow. Research completions are keyed: a lookup started
//! before a newer one resolves is discarded rather than merged, so the
//! store only ever reflects the latest search.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::domain::analysis::{CustomerSegment, InternalIssues, PestelSet, PortersForces, SwotSet};
use crate::domain::foundation::{Phase, ValidationError};
use crate::domain::profile::{CompanyProfile, PrimaryMarket};
use crate::domain::store::{AnalysisStore, PestelScope, ResearchOutcome};
use crate::ports::{keys, CompanyResearch, StateStorage, StateStorageError};

/// Errors surfaced by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StateStorageError),
}

/// Key identifying one research invocation. Only the latest ticket's
/// completion may commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResearchTicket(u64);

/// How a research invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResearchStatus {
    /// The lookup resolved and its outcome replaced the analysis records.
    Committed,
    /// A newer search superseded this one; its result was discarded.
    Superseded,
    /// Every research source failed; prior state is untouched.
    Failed,
}

/// One user's analysis session.
pub struct AnalysisSession {
    store: AnalysisStore,
    storage: Arc<dyn StateStorage>,
    research: Arc<dyn CompanyResearch>,
    research_generation: u64,
}

impl AnalysisSession {
    /// Creates a session with a fresh store.
    pub fn new(storage: Arc<dyn StateStorage>, research: Arc<dyn CompanyResearch>) -> Self {
        Self {
            store: AnalysisStore::new(),
            storage,
            research,
            research_generation: 0,
        }
    }

    /// Rehydrates a session from storage. Each record loads independently;
    /// an absent, unreadable, or unparseable record falls back to its
    /// default.
    pub async fn hydrate(
        storage: Arc<dyn StateStorage>,
        research: Arc<dyn CompanyResearch>,
    ) -> Self {
        let store = AnalysisStore::from_records(
            load_record(storage.as_ref(), keys::COMPANY_PROFILE).await,
            load_record(storage.as_ref(), keys::COMPANY_PESTEL).await,
            load_record(storage.as_ref(), keys::PRODUCT_PESTELS).await,
            load_record(storage.as_ref(), keys::SELECTED_SCOPE).await,
            load_record(storage.as_ref(), keys::COMPETITORS).await,
            load_record(storage.as_ref(), keys::PORTERS_FORCES).await,
            load_record(storage.as_ref(), keys::INTERNAL_ISSUES).await,
            load_record(storage.as_ref(), keys::SWOT).await,
            load_record(storage.as_ref(), keys::CUSTOMER_SEGMENTS).await,
            load_record(storage.as_ref(), keys::CURRENT_PHASE).await,
        );

        Self {
            store,
            storage,
            research,
            research_generation: 0,
        }
    }

    /// Read access to the analysis records.
    pub fn store(&self) -> &AnalysisStore {
        &self.store
    }

    /// The research port, for entity search passthrough.
    pub fn research(&self) -> &Arc<dyn CompanyResearch> {
        &self.research
    }

    async fn save_record<T: Serialize>(&self, key: &str, record: &T) -> Result<(), SessionError> {
        let value =
            serde_json::to_value(record).map_err(|e| StateStorageError::SerializationFailed {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
        self.storage.save(key, &value).await?;
        Ok(())
    }

    async fn save_profile_records(&self) -> Result<(), SessionError> {
        self.save_record(keys::COMPANY_PROFILE, self.store.profile())
            .await
    }

    /// Sets the company name.
    pub async fn set_company_name(&mut self, name: &str) -> Result<(), SessionError> {
        self.store.set_company_name(name);
        self.save_profile_records().await
    }

    /// Sets the industry; a changed value regenerates the Porter defaults.
    pub async fn set_industry(&mut self, industry: &str) -> Result<(), SessionError> {
        self.store.set_industry(industry);
        self.save_profile_records().await?;
        self.save_record(keys::PORTERS_FORCES, self.store.porters_forces())
            .await
    }

    /// Sets the primary market; a changed value regenerates the Porter
    /// defaults.
    pub async fn set_primary_market(
        &mut self,
        market: Option<PrimaryMarket>,
    ) -> Result<(), SessionError> {
        self.store.set_primary_market(market);
        self.save_profile_records().await?;
        self.save_record(keys::PORTERS_FORCES, self.store.porters_forces())
            .await
    }

    /// Registers a key product, cloning the company PESTEL for it.
    pub async fn add_product(&mut self, name: &str) -> Result<bool, SessionError> {
        let added = self.store.add_product(name)?;
        if added {
            self.save_profile_records().await?;
            self.save_record(keys::PRODUCT_PESTELS, self.store.product_pestels())
                .await?;
        }
        Ok(added)
    }

    /// Removes a key product and its PESTEL copy.
    pub async fn remove_product(&mut self, name: &str) -> Result<(), SessionError> {
        self.store.remove_product(name);
        self.save_profile_records().await?;
        self.save_record(keys::PRODUCT_PESTELS, self.store.product_pestels())
            .await?;
        self.save_record(keys::SELECTED_SCOPE, self.store.selected_scope())
            .await
    }

    /// Selects which PESTEL analysis is shown.
    pub async fn select_scope(&mut self, scope: PestelScope) -> Result<(), SessionError> {
        self.store.select_scope(scope);
        self.save_record(keys::SELECTED_SCOPE, self.store.selected_scope())
            .await
    }

    /// Edits the company PESTEL in place.
    pub async fn update_company_pestel<F>(&mut self, edit: F) -> Result<(), SessionError>
    where
        F: FnOnce(&mut PestelSet),
    {
        edit(self.store.company_pestel_mut());
        self.save_record(keys::COMPANY_PESTEL, self.store.company_pestel())
            .await
    }

    /// Edits one product's PESTEL in place. Returns false when the product
    /// has no PESTEL entry.
    pub async fn update_product_pestel<F>(
        &mut self,
        product: &str,
        edit: F,
    ) -> Result<bool, SessionError>
    where
        F: FnOnce(&mut PestelSet),
    {
        let edited = match self.store.product_pestel_mut(product) {
            Some(pestel) => {
                edit(pestel);
                true
            }
            None => false,
        };
        if edited {
            self.save_record(keys::PRODUCT_PESTELS, self.store.product_pestels())
                .await?;
        }
        Ok(edited)
    }

    /// Edits the Porter's Forces in place.
    pub async fn update_porters_forces<F>(&mut self, edit: F) -> Result<(), SessionError>
    where
        F: FnOnce(&mut PortersForces),
    {
        edit(self.store.porters_forces_mut());
        self.save_record(keys::PORTERS_FORCES, self.store.porters_forces())
            .await
    }

    /// Replaces the internal issues lists.
    pub async fn set_internal_issues(
        &mut self,
        issues: InternalIssues,
    ) -> Result<(), SessionError> {
        *self.store.internal_issues_mut() = issues;
        self.save_record(keys::INTERNAL_ISSUES, self.store.internal_issues())
            .await
    }

    /// Overwrites the SWOT set from internal issues and the company PESTEL.
    pub async fn auto_populate_swot(&mut self) -> Result<(), SessionError> {
        self.store.auto_populate_swot();
        self.save_record(keys::SWOT, self.store.swot()).await
    }

    /// Replaces the SWOT set with manually edited content.
    pub async fn set_swot(&mut self, swot: SwotSet) -> Result<(), SessionError> {
        self.store.set_swot(swot);
        self.save_record(keys::SWOT, self.store.swot()).await
    }

    /// Adds a customer segment.
    pub async fn add_segment(&mut self, segment: CustomerSegment) -> Result<(), SessionError> {
        self.store.add_segment(segment)?;
        self.save_record(keys::CUSTOMER_SEGMENTS, &self.store.customer_segments())
            .await
    }

    /// Replaces a customer segment by name.
    pub async fn update_segment(
        &mut self,
        name: &str,
        segment: CustomerSegment,
    ) -> Result<(), SessionError> {
        self.store.update_segment(name, segment)?;
        self.save_record(keys::CUSTOMER_SEGMENTS, &self.store.customer_segments())
            .await
    }

    /// Removes a customer segment by name.
    pub async fn remove_segment(&mut self, name: &str) -> Result<bool, SessionError> {
        let removed = self.store.remove_segment(name);
        if removed {
            self.save_record(keys::CUSTOMER_SEGMENTS, &self.store.customer_segments())
                .await?;
        }
        Ok(removed)
    }

    /// Moves the worksheet to a phase.
    pub async fn set_phase(&mut self, phase: Phase) -> Result<(), SessionError> {
        self.store.set_phase(phase);
        self.save_record(keys::CURRENT_PHASE, &self.store.current_phase())
            .await
    }

    /// Starts a research invocation: validates the name and issues a ticket
    /// that supersedes all earlier ones.
    pub fn begin_research(&mut self, name: &str) -> Result<ResearchTicket, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("company name"));
        }
        self.research_generation += 1;
        Ok(ResearchTicket(self.research_generation))
    }

    /// Applies a completed research lookup. A stale ticket (superseded by a
    /// newer `begin_research`) is discarded and leaves the store untouched;
    /// returns whether the outcome was committed.
    pub async fn complete_research(
        &mut self,
        ticket: ResearchTicket,
        profile: CompanyProfile,
    ) -> Result<bool, SessionError> {
        if ticket.0 != self.research_generation {
            tracing::debug!(
                ticket = ticket.0,
                current = self.research_generation,
                "discarding stale research completion"
            );
            return Ok(false);
        }

        self.store.commit_research(ResearchOutcome::derive(profile));

        self.save_profile_records().await?;
        self.save_record(keys::COMPANY_PESTEL, self.store.company_pestel())
            .await?;
        self.save_record(keys::PRODUCT_PESTELS, self.store.product_pestels())
            .await?;
        self.save_record(keys::COMPETITORS, &self.store.competitors())
            .await?;
        self.save_record(keys::PORTERS_FORCES, self.store.porters_forces())
            .await?;
        self.save_record(keys::SELECTED_SCOPE, self.store.selected_scope())
            .await?;
        Ok(true)
    }

    /// Researches a company end to end: issue a ticket, look the name up,
    /// and commit unless a newer search superseded this one. A lookup whose
    /// every source failed leaves prior state untouched and reports
    /// `Failed`; partial results commit normally.
    pub async fn research_company(&mut self, name: &str) -> Result<ResearchStatus, SessionError> {
        let trimmed = name.trim().to_string();
        let ticket = self.begin_research(&trimmed)?;

        let research = Arc::clone(&self.research);
        match research.try_lookup(&trimmed).await {
            Ok(profile) => {
                if self.complete_research(ticket, profile).await? {
                    Ok(ResearchStatus::Committed)
                } else {
                    Ok(ResearchStatus::Superseded)
                }
            }
            Err(err) => {
                tracing::warn!(company = %trimmed, error = %err, "research failed, state untouched");
                Ok(ResearchStatus::Failed)
            }
        }
    }
}

async fn load_record<T: DeserializeOwned + Default>(storage: &dyn StateStorage, key: &str) -> T {
    match storage.load(key).await {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(key, error = %err, "stored record unparseable, using default");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(err) => {
            tracing::warn!(key, error = %err, "failed to load record, using default");
            T::default()
        }
    }
}
