//! Vendor directory models.

use serde::{Deserialize, Serialize};

use crate::matcher::normalize;

/// A vendor (supplier, utility, landlord...) that a clinic records expenses against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vendor {
    /// Unique identifier (UUID v4), assigned at creation
    pub id: String,
    /// Owning clinic; all lookups and uniqueness are scoped to it
    pub clinic_id: String,
    /// Display name as entered, trimmed
    pub name: String,
    /// Canonical form of `name` used for equality and similarity
    pub normalized_name: String,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

impl Vendor {
    /// Create a new vendor, deriving the normalized name from `name`.
    pub fn new(clinic_id: impl Into<String>, name: &str) -> Self {
        let name = name.trim().to_string();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            clinic_id: clinic_id.into(),
            normalized_name: normalize(&name),
            name,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Check whether this vendor belongs to the given clinic.
    pub fn belongs_to(&self, clinic_id: &str) -> bool {
        self.clinic_id == clinic_id
    }

    /// Case-insensitive substring match on display or normalized name.
    pub fn contains(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.normalized_name.contains(&query)
    }
}

/// A vendor together with its similarity to an autocomplete input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredVendor {
    /// The matched vendor
    pub vendor: Vendor,
    /// Similarity score (0.0 - 1.0)
    pub similarity: f64,
}
