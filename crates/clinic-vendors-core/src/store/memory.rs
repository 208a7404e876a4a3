//! In-memory vendor store.

use std::sync::RwLock;

use super::{StoreError, StoreResult, VendorStore};
use crate::models::Vendor;

/// Vendor store backed by a `Vec`, for tests and offline demos.
///
/// Uniqueness of `(clinic_id, normalized_name)` is checked under the write
/// lock, so concurrent inserts of the same name cannot both succeed.
#[derive(Debug, Default)]
pub struct MemoryVendorStore {
    vendors: RwLock<Vec<Vendor>>,
}

impl MemoryVendorStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `vendors`.
    ///
    /// Seed entries colliding with an earlier entry are dropped.
    pub fn with_vendors(vendors: impl IntoIterator<Item = Vendor>) -> Self {
        let store = Self::new();
        for vendor in vendors {
            match store.insert(vendor) {
                Ok(_) | Err(StoreError::Duplicate { .. }) => {}
                Err(e) => tracing::warn!(error = %e, "Failed to seed vendor"),
            }
        }
        store
    }

    /// Total number of vendors across all clinics.
    pub fn len(&self) -> usize {
        self.vendors
            .read()
            .map(|v| v.len())
            .unwrap_or_else(|e| e.into_inner().len())
    }

    /// Whether the store holds no vendors.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl VendorStore for MemoryVendorStore {
    fn fetch_all(&self, clinic_id: &str) -> StoreResult<Vec<Vendor>> {
        let vendors = self.vendors.read()?;
        Ok(vendors
            .iter()
            .filter(|v| v.belongs_to(clinic_id))
            .cloned()
            .collect())
    }

    fn insert(&self, vendor: Vendor) -> StoreResult<Vendor> {
        let mut vendors = self.vendors.write()?;

        let exists = vendors.iter().any(|v| {
            v.belongs_to(&vendor.clinic_id) && v.normalized_name == vendor.normalized_name
        });
        if exists {
            return Err(StoreError::Duplicate {
                clinic_id: vendor.clinic_id,
                normalized_name: vendor.normalized_name,
            });
        }

        vendors.push(vendor.clone());
        Ok(vendor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_fetch() {
        let store = MemoryVendorStore::new();
        let vendor = store.insert(Vendor::new("A", "Acme")).unwrap();

        let fetched = store.fetch_all("A").unwrap();
        assert_eq!(fetched, vec![vendor]);
        assert!(store.fetch_all("B").unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_rejected() {
        let store = MemoryVendorStore::new();
        store.insert(Vendor::new("A", "Acme Inc.")).unwrap();

        let result = store.insert(Vendor::new("A", "ACME inc"));
        assert!(matches!(result, Err(StoreError::Duplicate { .. })));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_same_name_other_clinic() {
        let store = MemoryVendorStore::new();
        store.insert(Vendor::new("A", "Acme")).unwrap();
        store.insert(Vendor::new("B", "Acme")).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_insertion_order() {
        let store = MemoryVendorStore::with_vendors(vec![
            Vendor::new("A", "Zeta"),
            Vendor::new("A", "Alpha"),
            Vendor::new("A", "Mid"),
        ]);

        let names: Vec<String> = store
            .fetch_all("A")
            .unwrap()
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_seed_drops_duplicates() {
        let store = MemoryVendorStore::with_vendors(vec![
            Vendor::new("A", "Acme"),
            Vendor::new("A", "acme."),
        ]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.fetch_all("A").unwrap()[0].name, "Acme");
    }

    #[test]
    fn test_len_survives_poisoned_lock() {
        let store = MemoryVendorStore::new();
        store.insert(Vendor::new("A", "Acme")).unwrap();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = store.vendors.write().unwrap();
            panic!("writer panicked");
        }));
        assert!(result.is_err());

        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
        assert!(matches!(
            store.fetch_all("A"),
            Err(StoreError::Unavailable(_))
        ));
    }

    #[test]
    fn test_default_lookups() {
        let store = MemoryVendorStore::new();
        let vendor = store.insert(Vendor::new("A", "Acme Labs")).unwrap();

        let by_name = store.find_by_normalized_name("A", "acme labs").unwrap();
        assert_eq!(by_name.as_ref().map(|v| &v.id), Some(&vendor.id));
        assert!(store.find_by_normalized_name("B", "acme labs").unwrap().is_none());

        let by_id = store.find_by_id("A", &vendor.id).unwrap();
        assert_eq!(by_id, Some(vendor.clone()));
        assert!(store.find_by_id("B", &vendor.id).unwrap().is_none());
    }
}
