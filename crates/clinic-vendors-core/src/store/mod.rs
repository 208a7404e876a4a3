//! Storage collaborator for vendor records.

mod memory;

pub use memory::*;

use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::models::Vendor;

/// Storage errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Vendor already exists in clinic {clinic_id}: {normalized_name}")]
    Duplicate {
        clinic_id: String,
        normalized_name: String,
    },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence for vendor records, partitioned by clinic.
///
/// Implementations must reject an insert whose `(clinic_id, normalized_name)`
/// already exists with [`StoreError::Duplicate`].
pub trait VendorStore {
    /// All vendors of a clinic, in insertion order.
    fn fetch_all(&self, clinic_id: &str) -> StoreResult<Vec<Vendor>>;

    /// Persist a new vendor and return it.
    fn insert(&self, vendor: Vendor) -> StoreResult<Vendor>;

    /// Find a clinic vendor by exact normalized name.
    fn find_by_normalized_name(
        &self,
        clinic_id: &str,
        normalized_name: &str,
    ) -> StoreResult<Option<Vendor>> {
        Ok(self
            .fetch_all(clinic_id)?
            .into_iter()
            .find(|v| v.normalized_name == normalized_name))
    }

    /// Find a clinic vendor by id.
    fn find_by_id(&self, clinic_id: &str, id: &str) -> StoreResult<Option<Vendor>> {
        Ok(self.fetch_all(clinic_id)?.into_iter().find(|v| v.id == id))
    }
}

/// Share a store that is not `Sync` itself (e.g. a SQLite connection).
impl<S: VendorStore> VendorStore for Mutex<S> {
    fn fetch_all(&self, clinic_id: &str) -> StoreResult<Vec<Vendor>> {
        self.lock()?.fetch_all(clinic_id)
    }

    fn insert(&self, vendor: Vendor) -> StoreResult<Vendor> {
        self.lock()?.insert(vendor)
    }

    fn find_by_normalized_name(
        &self,
        clinic_id: &str,
        normalized_name: &str,
    ) -> StoreResult<Option<Vendor>> {
        self.lock()?
            .find_by_normalized_name(clinic_id, normalized_name)
    }

    fn find_by_id(&self, clinic_id: &str, id: &str) -> StoreResult<Option<Vendor>> {
        self.lock()?.find_by_id(clinic_id, id)
    }
}

/// Let independent services share one store.
impl<S: VendorStore + ?Sized> VendorStore for Arc<S> {
    fn fetch_all(&self, clinic_id: &str) -> StoreResult<Vec<Vendor>> {
        (**self).fetch_all(clinic_id)
    }

    fn insert(&self, vendor: Vendor) -> StoreResult<Vendor> {
        (**self).insert(vendor)
    }

    fn find_by_normalized_name(
        &self,
        clinic_id: &str,
        normalized_name: &str,
    ) -> StoreResult<Option<Vendor>> {
        (**self).find_by_normalized_name(clinic_id, normalized_name)
    }

    fn find_by_id(&self, clinic_id: &str, id: &str) -> StoreResult<Option<Vendor>> {
        (**self).find_by_id(clinic_id, id)
    }
}

impl<T> From<std::sync::PoisonError<T>> for StoreError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        StoreError::Unavailable(format!("Lock poisoned: {}", e))
    }
}
