//! Vendor name normalizer.
//!
//! Handles:
//! - Case folding (lowercase)
//! - Punctuation/symbol stripping (letters, digits and whitespace survive)
//! - Whitespace collapsing and trimming

/// Normalize a free-text vendor name to its canonical form.
///
/// `"  Medical   Supplies Co. "` becomes `"medical supplies co"`.
/// Symbols are stripped before whitespace is collapsed so `"a - b"` yields
/// `"a b"`, which keeps the function idempotent.
pub fn normalize(name: &str) -> String {
    let stripped: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_space_punctuation() {
        assert_eq!(normalize("Medical Supplies Co."), "medical supplies co");
        assert_eq!(normalize("medical   supplies co"), "medical supplies co");
        assert_eq!(normalize("MEDICAL\tSUPPLIES\nCO!"), "medical supplies co");
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n "), "");
        assert_eq!(normalize("...!!!"), "");
    }

    #[test]
    fn test_symbol_between_spaces() {
        assert_eq!(normalize("Smith & Sons"), "smith sons");
        assert_eq!(normalize("A - B"), "a b");
    }

    #[test]
    fn test_digits_preserved() {
        assert_eq!(normalize("3M Health-Care #2"), "3m healthcare 2");
    }

    #[test]
    fn test_unicode_letters_preserved() {
        assert_eq!(normalize("Pharmacie Étoile"), "pharmacie étoile");
    }

    #[test]
    fn test_idempotent() {
        for input in ["Medical Supplies Co.", "  a  -  b ", "O'Brien & Co", ""] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", input);
        }
    }
}
