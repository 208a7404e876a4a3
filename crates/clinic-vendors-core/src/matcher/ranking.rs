//! Autocomplete ranking and list filtering over a clinic's vendors.
//!
//! Two deliberately different notions of "matching" live here:
//! - [`rank_suggestions`]: fuzzy, edit-distance based (typeahead)
//! - [`filter_by_substring`]: plain case-insensitive containment (filtered list)

use std::cmp::Ordering;

use crate::models::{ScoredVendor, Vendor};

use super::{normalize, similarity, MAX_SUGGESTIONS, SUGGESTION_THRESHOLD};

/// Rank `vendors` against free-text `input`.
///
/// Empty input (after normalization) returns the first [`MAX_SUGGESTIONS`]
/// vendors unscored (similarity reported as 0.0). Otherwise keeps vendors
/// scoring at least [`SUGGESTION_THRESHOLD`], best first; equal scores keep
/// their input order.
pub fn rank_suggestions(vendors: &[Vendor], input: &str) -> Vec<ScoredVendor> {
    let query = normalize(input);

    if query.is_empty() {
        return vendors
            .iter()
            .take(MAX_SUGGESTIONS)
            .map(|v| ScoredVendor {
                vendor: v.clone(),
                similarity: 0.0,
            })
            .collect();
    }

    let mut scored: Vec<ScoredVendor> = vendors
        .iter()
        .map(|v| ScoredVendor {
            similarity: similarity(&query, &v.normalized_name),
            vendor: v.clone(),
        })
        .filter(|s| s.similarity >= SUGGESTION_THRESHOLD)
        .collect();

    // Stable sort: ties keep store order
    scored.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    scored.truncate(MAX_SUGGESTIONS);

    scored
}

/// Keep vendors whose name or normalized name contains `query`, sorted by name.
///
/// `None` or an empty query keeps everything.
pub fn filter_by_substring(vendors: Vec<Vendor>, query: Option<&str>) -> Vec<Vendor> {
    let mut matched: Vec<Vendor> = match query.filter(|q| !q.is_empty()) {
        Some(q) => vendors.into_iter().filter(|v| v.contains(q)).collect(),
        None => vendors,
    };

    matched.sort_by(|a, b| compare_names(&a.name, &b.name));
    matched
}

/// Alphabetical ordering that ignores case first, then falls back to the raw
/// string so the order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
