//! Vendor directory export for accounting hand-off.

use serde::{Deserialize, Serialize};

use crate::models::Vendor;

/// A clinic's vendor directory at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorDirectoryExport {
    /// Clinic the vendors belong to
    pub clinic_id: String,
    /// Export timestamp
    pub exported_at: String,
    /// Number of vendors exported
    pub vendor_count: usize,
    /// Vendors, alphabetical by name
    pub vendors: Vec<Vendor>,
}

impl VendorDirectoryExport {
    /// Build an export from an already ordered vendor list.
    pub fn new(clinic_id: &str, vendors: Vec<Vendor>) -> Self {
        Self {
            clinic_id: clinic_id.to_string(),
            exported_at: chrono::Utc::now().to_rfc3339(),
            vendor_count: vendors.len(),
            vendors,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        // Header
        csv.push_str("id,clinic_id,name,normalized_name,created_at\n");

        for vendor in &self.vendors {
            csv.push_str(&format!(
                "{},{},{},{},{}\n",
                escape_csv(&vendor.id),
                escape_csv(&vendor.clinic_id),
                escape_csv(&vendor.name),
                escape_csv(&vendor.normalized_name),
                escape_csv(&vendor.created_at),
            ));
        }

        csv
    }
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
