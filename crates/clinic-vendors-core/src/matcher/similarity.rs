//! Edit-distance similarity scoring.

use strsim::{levenshtein, normalized_levenshtein};

/// Levenshtein distance between `a` and `b`, counted in chars.
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein(a, b)
}

/// Similarity in [0, 1]: `(max_len - distance) / max_len`, with `max_len`
/// the char count of the longer string.
///
/// Two empty strings are identical (1.0).
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}
