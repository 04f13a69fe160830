//! Rule-based parsing of mailing-address tails
//!
//! An address tail is whatever follows the street line: `CITY STATE ZIP`,
//! `ZIP APO AE`, `POSTCODE CITY COUNTRY`, or something malformed. Parsing
//! happens in two steps:
//!
//! 1. [`FormatDetector`] tags the whitespace-split tokens with a
//!    [`FormatTag`] using an ordered list of rules.
//! 2. [`ComponentExtractor`] applies the tag's extraction rule and returns
//!    an [`AddressComponents`] record.
//!
//! Neither step fails. Unrecognised input comes back tagged `Unknown` with
//! best-effort fields, and absent or blank input comes back tagged `Empty`.
//!
//! # Example
//!
//! ```rust
//! use addrtail_core::{parse_address_tail, FormatTag};
//!
//! let record = parse_address_tail(Some("RALEIGH NC 27601"));
//! assert_eq!(record.format, FormatTag::UsStandard);
//! assert_eq!(record.city, "RALEIGH");
//! assert_eq!(record.state, "NC");
//! assert_eq!(record.zipcode, "27601");
//! assert_eq!(record.country, "USA");
//!
//! let record = parse_address_tail(None);
//! assert_eq!(record.format, FormatTag::Empty);
//! ```

#![warn(missing_docs)]

pub mod components;
pub mod detector;
pub mod error;
pub mod extractor;
pub mod format;
pub mod patterns;
pub mod tokens;

pub use components::{AddressComponents, DOMESTIC_COUNTRY, FIELD_NAMES};
pub use detector::{DetectionRule, FormatDetector, RULES};
pub use error::{CoreError, Result};
pub use extractor::ComponentExtractor;
pub use format::FormatTag;
pub use tokens::{tokenize, TokenSequence};

/// Classify a raw address tail without extracting components
pub fn classify(raw: Option<&str>) -> FormatTag {
    match raw.map(tokenize) {
        Some(tokens) if !tokens.is_empty() => FormatDetector::detect(&tokens),
        _ => FormatTag::Empty,
    }
}

/// Parse a raw address tail into components.
///
/// Absent or whitespace-only input short-circuits to an `Empty` record
/// without running detection.
pub fn parse_address_tail(raw: Option<&str>) -> AddressComponents {
    let tokens = match raw.map(tokenize) {
        Some(tokens) if !tokens.is_empty() => tokens,
        _ => return AddressComponents::empty(),
    };

    let tag = FormatDetector::detect(&tokens);
    ComponentExtractor::extract(&tokens, tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_empty() {
        assert_eq!(parse_address_tail(None), AddressComponents::empty());
        assert_eq!(parse_address_tail(Some("")), AddressComponents::empty());
        assert_eq!(parse_address_tail(Some(" \t ")), AddressComponents::empty());
        assert_eq!(classify(Some("   ")), FormatTag::Empty);
    }

    #[test]
    fn test_classify_matches_parse() {
        for raw in ["RALEIGH NC 27601", "09774 DPO AE", "75008 PARIS FRANCE", "RETURNED"] {
            assert_eq!(classify(Some(raw)), parse_address_tail(Some(raw)).format);
        }
    }

    #[test]
    fn test_module_exports() {
        let _ = FormatDetector;
        let _ = ComponentExtractor;
        assert_eq!(FIELD_NAMES.len(), 5);
        assert_eq!(RULES.len(), 3);
    }
}
