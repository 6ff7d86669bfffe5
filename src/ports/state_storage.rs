//! State Storage Port - String-keyed JSON persistence for analysis records.
//!
//! Each named record is stored independently under a stable key and
//! rehydrated verbatim at startup. Callers substitute the record's default
//! when a key is absent or its value no longer parses.

use async_trait::async_trait;

/// Stable storage keys, one per named record.
pub mod keys {
    pub const COMPANY_PROFILE: &str = "company-profile";
    pub const COMPANY_PESTEL: &str = "company-pestel";
    pub const PRODUCT_PESTELS: &str = "product-pestels";
    pub const SELECTED_SCOPE: &str = "selected-scope";
    pub const COMPETITORS: &str = "competitors";
    pub const PORTERS_FORCES: &str = "porters-forces";
    pub const INTERNAL_ISSUES: &str = "internal-issues";
    pub const SWOT: &str = "swot";
    pub const CUSTOMER_SEGMENTS: &str = "customer-segments";
    pub const CURRENT_PHASE: &str = "current-phase";

    /// Every record key, in persistence order.
    pub const ALL: &[&str] = &[
        COMPANY_PROFILE,
        COMPANY_PESTEL,
        PRODUCT_PESTELS,
        SELECTED_SCOPE,
        COMPETITORS,
        PORTERS_FORCES,
        INTERNAL_ISSUES,
        SWOT,
        CUSTOMER_SEGMENTS,
        CURRENT_PHASE,
    ];
}

/// Errors that can occur during state storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StateStorageError {
    #[error("Failed to serialize record '{key}': {reason}")]
    SerializationFailed { key: String, reason: String },

    #[error("Failed to deserialize record '{key}': {reason}")]
    DeserializationFailed { key: String, reason: String },

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting and loading named analysis records.
#[async_trait]
pub trait StateStorage: Send + Sync {
    /// Saves a record under its key, overwriting any prior value.
    async fn save(&self, key: &str, value: &serde_json::Value) -> Result<(), StateStorageError>;

    /// Loads a record; `None` when the key has never been saved.
    async fn load(&self, key: &str) -> Result<Option<serde_json::Value>, StateStorageError>;

    /// Checks whether a record exists.
    async fn exists(&self, key: &str) -> Result<bool, StateStorageError>;

    /// Deletes a record. Deleting an absent key is a no-op.
    async fn delete(&self, key: &str) -> Result<(), StateStorageError>;
}
