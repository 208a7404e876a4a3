//! Vendor directory operations for expense entry and accounting screens.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

use crate::export::VendorDirectoryExport;
use crate::matcher::{filter_by_substring, normalize, rank_suggestions};
use crate::models::{ScoredVendor, Vendor};
use crate::store::{StoreError, VendorStore};

/// Vendor operation errors.
#[derive(Error, Debug)]
pub enum VendorError {
    #[error("Invalid vendor input: {0}")]
    Validation(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] StoreError),
}

pub type VendorResult<T> = Result<T, VendorError>;

/// Vendor directory over a [`VendorStore`].
///
/// Reads go straight to the store. [`create_vendor`](Self::create_vendor)
/// holds a per-clinic lock across its check and insert, and additionally
/// relies on the store rejecting duplicates. Lock map entries live only while
/// a create for that clinic is in flight.
pub struct VendorService<S> {
    store: S,
    clinic_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<S: VendorStore> VendorService<S> {
    /// Create a service over an already initialized (and seeded) store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            clinic_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Get the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// List a clinic's vendors alphabetically, optionally filtered by substring.
    pub fn list_vendors(&self, clinic_id: &str, query: Option<&str>) -> VendorResult<Vec<Vendor>> {
        let vendors = self.store.fetch_all(clinic_id)?;
        let listed = filter_by_substring(vendors, query);
        tracing::debug!(clinic_id, ?query, count = listed.len(), "Listed vendors");
        Ok(listed)
    }

    /// Autocomplete suggestions for free-text input, best first, at most five.
    pub fn suggest_vendors(&self, clinic_id: &str, input: &str) -> VendorResult<Vec<Vendor>> {
        Ok(self
            .suggest_scored(clinic_id, input)?
            .into_iter()
            .map(|s| s.vendor)
            .collect())
    }

    /// Same as [`suggest_vendors`](Self::suggest_vendors), keeping the scores.
    pub fn suggest_scored(&self, clinic_id: &str, input: &str) -> VendorResult<Vec<ScoredVendor>> {
        let vendors = self.store.fetch_all(clinic_id)?;
        let ranked = rank_suggestions(&vendors, input);
        tracing::debug!(
            clinic_id,
            candidates = vendors.len(),
            suggested = ranked.len(),
            "Ranked vendor suggestions"
        );
        Ok(ranked)
    }

    /// Return the clinic's vendor with the same normalized name, or create one.
    ///
    /// An existing match is returned untouched.
    pub fn create_vendor(&self, clinic_id: &str, name: &str) -> VendorResult<Vendor> {
        if clinic_id.trim().is_empty() {
            return Err(VendorError::Validation("clinic id cannot be empty".into()));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(VendorError::Validation("vendor name cannot be empty".into()));
        }
        let normalized = normalize(name);
        if normalized.is_empty() {
            return Err(VendorError::Validation(format!(
                "vendor name has no letters or digits: {:?}",
                name
            )));
        }

        let lock = self.clinic_lock(clinic_id);
        let result = {
            let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
            self.get_or_insert(clinic_id, name, &normalized)
        };
        self.release_clinic_lock(clinic_id, lock);
        result
    }

    fn get_or_insert(&self, clinic_id: &str, name: &str, normalized: &str) -> VendorResult<Vendor> {
        if let Some(existing) = self.store.find_by_normalized_name(clinic_id, normalized)? {
            tracing::debug!(clinic_id, vendor_id = %existing.id, "Vendor already exists");
            return Ok(existing);
        }

        match self.store.insert(Vendor::new(clinic_id, name)) {
            Ok(vendor) => {
                tracing::info!(clinic_id, vendor_id = %vendor.id, name = %vendor.name, "Created vendor");
                Ok(vendor)
            }
            Err(StoreError::Duplicate { .. }) => {
                // Another writer on the same store got there first
                tracing::warn!(clinic_id, normalized_name = %normalized, "Lost vendor insert race");
                self.store
                    .find_by_normalized_name(clinic_id, normalized)?
                    .ok_or_else(|| {
                        StoreError::Unavailable(format!(
                            "duplicate reported but no vendor found for {:?}",
                            normalized
                        ))
                        .into()
                    })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Look up a clinic vendor by id.
    pub fn get_vendor(&self, clinic_id: &str, id: &str) -> VendorResult<Option<Vendor>> {
        Ok(self.store.find_by_id(clinic_id, id)?)
    }

    /// Exact normalized-name lookup, without creating anything.
    pub fn find_vendor_by_name(&self, clinic_id: &str, name: &str) -> VendorResult<Option<Vendor>> {
        let normalized = normalize(name);
        if normalized.is_empty() {
            return Ok(None);
        }
        Ok(self.store.find_by_normalized_name(clinic_id, &normalized)?)
    }

    /// Snapshot of a clinic's vendor directory for accounting export.
    pub fn export_directory(&self, clinic_id: &str) -> VendorResult<VendorDirectoryExport> {
        let vendors = self.list_vendors(clinic_id, None)?;
        Ok(VendorDirectoryExport::new(clinic_id, vendors))
    }

    fn clinic_lock(&self, clinic_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self
            .clinic_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        locks.entry(clinic_id.to_string()).or_default().clone()
    }

    /// Drop the clinic's map entry once no other caller holds or waits on it.
    fn release_clinic_lock(&self, clinic_id: &str, lock: Arc<Mutex<()>>) {
        let mut locks = self
            .clinic_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        // Clones are only handed out under the map lock: one for the map, one here
        if Arc::strong_count(&lock) == 2 {
            locks.remove(clinic_id);
        }
    }

    #[cfg(test)]
    fn clinic_lock_count(&self) -> usize {
        self.clinic_locks
            .lock()
            .map(|locks| locks.len())
            .unwrap_or_else(|e| e.into_inner().len())
    }
}
