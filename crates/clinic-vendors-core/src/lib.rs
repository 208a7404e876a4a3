//! Clinic Vendors Core Library
//!
//! Vendor directory for a clinic's expense entry and accounting screens:
//! fuzzy autocomplete over vendor names and per-clinic deduplication.
//!
//! # Architecture
//!
//! ```text
//!        typed vendor name (expense form)
//!                     │
//!              ┌──────▼──────┐
//!              │  normalize  │  lowercase, strip symbols, collapse spaces
//!              └──────┬──────┘
//!          ┌──────────┼─────────────────────┐
//!          │          │                     │
//!          ▼          ▼                     ▼
//!       suggest     list                create_or_get
//!   (edit distance  (substring,     (exact normalized match,
//!    ≥ 0.75, top 5)  alphabetical)   per-clinic lock + unique index)
//!          │          │                     │
//!          └──────────┴──────────┬──────────┘
//!                                ▼
//!                      VendorStore (memory / SQLite)
//! ```
//!
//! # Core Principle
//!
//! **At most one vendor per normalized name per clinic.** Creating a vendor
//! that already exists returns the existing record.
//!
//! # Modules
//!
//! - [`matcher`]: Normalization, edit distance, suggestion ranking
//! - [`models`]: Domain types (Vendor, ScoredVendor)
//! - [`store`]: Storage trait and in-memory store
//! - [`db`]: SQLite-backed store
//! - [`service`]: Vendor directory operations
//! - [`seed`]: Demo vendor data
//! - [`export`]: Directory export (JSON/CSV)

pub mod db;
pub mod export;
pub mod matcher;
pub mod models;
pub mod seed;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use export::VendorDirectoryExport;
pub use matcher::{edit_distance, normalize, similarity, MAX_SUGGESTIONS, SUGGESTION_THRESHOLD};
pub use models::{ScoredVendor, Vendor};
pub use service::{VendorError, VendorResult, VendorService};
pub use store::{MemoryVendorStore, StoreError, StoreResult, VendorStore};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum ClinicVendorsError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<StoreError> for ClinicVendorsError {
    fn from(e: StoreError) -> Self {
        ClinicVendorsError::DatabaseError(e.to_string())
    }
}

impl From<VendorError> for ClinicVendorsError {
    fn from(e: VendorError) -> Self {
        match e {
            VendorError::Validation(msg) => ClinicVendorsError::InvalidInput(msg),
            VendorError::StorageUnavailable(e) => e.into(),
        }
    }
}

impl From<serde_json::Error> for ClinicVendorsError {
    fn from(e: serde_json::Error) -> Self {
        ClinicVendorsError::SerializationError(e.to_string())
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create a database at the given path.
#[uniffi::export]
pub fn open_database(path: String) -> Result<Arc<ClinicVendorsCore>, ClinicVendorsError> {
    let db = Database::open(&path)?;
    Ok(ClinicVendorsCore::wrap(db))
}

/// Create an in-memory database (for testing).
#[uniffi::export]
pub fn open_database_in_memory() -> Result<Arc<ClinicVendorsCore>, ClinicVendorsError> {
    let db = Database::open_in_memory()?;
    Ok(ClinicVendorsCore::wrap(db))
}

/// Create an in-memory database seeded with demo vendors for one clinic.
#[uniffi::export]
pub fn open_database_with_demo_seed(
    clinic_id: String,
) -> Result<Arc<ClinicVendorsCore>, ClinicVendorsError> {
    let db = Database::open_in_memory()?;
    db.seed_vendors(&seed::demo_vendors(&clinic_id))?;
    Ok(ClinicVendorsCore::wrap(db))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe vendor directory for FFI.
#[derive(uniffi::Object)]
pub struct ClinicVendorsCore {
    service: VendorService<Mutex<Database>>,
}

impl ClinicVendorsCore {
    fn wrap(db: Database) -> Arc<Self> {
        Arc::new(Self {
            service: VendorService::new(Mutex::new(db)),
        })
    }
}

#[uniffi::export]
impl ClinicVendorsCore {
    /// List vendors alphabetically, optionally filtered by substring.
    pub fn list_vendors(
        &self,
        clinic_id: String,
        query: Option<String>,
    ) -> Result<Vec<FfiVendor>, ClinicVendorsError> {
        let vendors = self.service.list_vendors(&clinic_id, query.as_deref())?;
        Ok(vendors.into_iter().map(|v| v.into()).collect())
    }

    /// Autocomplete suggestions for a typed vendor name.
    pub fn suggest_vendors(
        &self,
        clinic_id: String,
        input: String,
    ) -> Result<Vec<FfiVendor>, ClinicVendorsError> {
        let vendors = self.service.suggest_vendors(&clinic_id, &input)?;
        Ok(vendors.into_iter().map(|v| v.into()).collect())
    }

    /// Create a vendor, or return the existing one with the same normalized name.
    pub fn create_vendor(
        &self,
        clinic_id: String,
        name: String,
    ) -> Result<FfiVendor, ClinicVendorsError> {
        let vendor = self.service.create_vendor(&clinic_id, &name)?;
        Ok(vendor.into())
    }

    /// Get a vendor by ID.
    pub fn get_vendor(
        &self,
        clinic_id: String,
        vendor_id: String,
    ) -> Result<Option<FfiVendor>, ClinicVendorsError> {
        let vendor = self.service.get_vendor(&clinic_id, &vendor_id)?;
        Ok(vendor.map(|v| v.into()))
    }

    /// Export the clinic's vendor directory as JSON.
    pub fn export_directory_json(&self, clinic_id: String) -> Result<String, ClinicVendorsError> {
        let export = self.service.export_directory(&clinic_id)?;
        Ok(export.to_json()?)
    }

    /// Export the clinic's vendor directory as CSV.
    pub fn export_directory_csv(&self, clinic_id: String) -> Result<String, ClinicVendorsError> {
        let export = self.service.export_directory(&clinic_id)?;
        Ok(export.to_csv())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe vendor.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiVendor {
    pub id: String,
    pub clinic_id: String,
    pub name: String,
    pub normalized_name: String,
    pub created_at: String,
}

impl From<Vendor> for FfiVendor {
    fn from(vendor: Vendor) -> Self {
        Self {
            id: vendor.id,
            clinic_id: vendor.clinic_id,
            name: vendor.name,
            normalized_name: vendor.normalized_name,
            created_at: vendor.created_at,
        }
    }
}
