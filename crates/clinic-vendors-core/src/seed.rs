//! Demo vendor data for new or offline clinics.

use crate::models::Vendor;

/// Default vendor names offered to a freshly created clinic.
const DEMO_VENDOR_NAMES: &[&str] = &[
    // Supplies
    "Medical Supplies Co.",
    "Pharma Distributors Ltd",
    "Dental Equipment Inc.",
    "Lab Consumables",
    // Utilities
    "Electricity Company",
    "City Water Utility",
    "Telecom Services",
    // Facilities
    "Office Supplies Store",
    "Cleaning Services",
    "Building Maintenance",
    "Property Rental Agency",
];

/// Build the demo vendor set for a clinic, in seeding order.
pub fn demo_vendors(clinic_id: &str) -> Vec<Vendor> {
    DEMO_VENDOR_NAMES
        .iter()
        .map(|name| Vendor::new(clinic_id, name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_vendors_scoped() {
        let vendors = demo_vendors("clinic-1");
        assert_eq!(vendors.len(), DEMO_VENDOR_NAMES.len());
        assert!(vendors.iter().all(|v| v.clinic_id == "clinic-1"));
    }

    #[test]
    fn test_demo_names_unique_when_normalized() {
        let vendors = demo_vendors("clinic-1");
        let normalized: HashSet<&str> = vendors.iter().map(|v| v.normalized_name.as_str()).collect();
        assert_eq!(normalized.len(), vendors.len());
    }
}
