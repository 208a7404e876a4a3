//! Vendor name matching.
//!
//! Pipeline: Normalization → Edit-distance similarity → Threshold + ranking

mod normalizer;
mod ranking;
mod similarity;

pub use normalizer::*;
pub use ranking::*;
pub use similarity::*;

/// Minimum similarity for a vendor to be offered as an autocomplete suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Maximum number of autocomplete suggestions.
pub const MAX_SUGGESTIONS: usize = 5;
