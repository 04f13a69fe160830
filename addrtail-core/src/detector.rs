//! Format detection
//!
//! Detection is an ordered table of predicates. Patterns overlap (a
//! five-digit first token followed by two short tokens looks both military
//! and international), so the first matching rule decides and the order of
//! [`RULES`] is part of the contract.

use crate::format::FormatTag;
use crate::patterns::{
    is_military_post_office, is_numeric, is_zip, is_zip_allowing_trailing_hyphen,
};

/// Predicate over a token slice
pub type RulePredicate = fn(&[&str]) -> bool;

/// A named detection rule
#[derive(Debug, Clone, Copy)]
pub struct DetectionRule {
    /// Tag assigned when the predicate holds
    pub tag: FormatTag,
    /// Short human-readable statement of the rule
    pub summary: &'static str,
    predicate: RulePredicate,
}

impl DetectionRule {
    /// Evaluate the rule against a token slice
    pub fn matches(&self, tokens: &[&str]) -> bool {
        (self.predicate)(tokens)
    }
}

/// Detection rules in priority order
pub const RULES: [DetectionRule; 3] = [
    DetectionRule {
        tag: FormatTag::UsMilitary,
        summary: "3 tokens: ZIP, APO/FPO/DPO, 2-letter region",
        predicate: is_us_military,
    },
    DetectionRule {
        tag: FormatTag::International,
        summary: "3+ tokens: numeric postcode first, non-numeric country of 3+ chars last",
        predicate: is_international,
    },
    DetectionRule {
        tag: FormatTag::UsStandard,
        summary: "last token is a ZIP, ignoring one trailing hyphen",
        predicate: is_us_standard,
    },
];

fn is_us_military(tokens: &[&str]) -> bool {
    match tokens {
        [zip, post_office, region] => {
            is_zip(zip) && is_military_post_office(post_office) && region.chars().count() == 2
        }
        _ => false,
    }
}

fn is_international(tokens: &[&str]) -> bool {
    match tokens {
        [postcode, _, .., country] => {
            is_numeric(postcode) && !is_numeric(country) && country.chars().count() > 2
        }
        _ => false,
    }
}

fn is_us_standard(tokens: &[&str]) -> bool {
    tokens
        .last()
        .is_some_and(|last| is_zip_allowing_trailing_hyphen(last))
}

/// Classifies token sequences into format tags
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatDetector;

impl FormatDetector {
    /// Detect the layout of a tokenized address tail.
    ///
    /// Never fails. Blank input should be tagged `Empty` by the caller
    /// before reaching this point; an empty slice here yields `Unknown`.
    pub fn detect(tokens: &[&str]) -> FormatTag {
        RULES
            .iter()
            .find(|rule| rule.matches(tokens))
            .map(|rule| rule.tag)
            .unwrap_or(FormatTag::Unknown)
    }

    /// Every rule that holds for `tokens`, in priority order.
    ///
    /// Useful for reviewing inputs that straddle two layouts; the first
    /// entry is what [`detect`](Self::detect) reports.
    pub fn matching_rules(tokens: &[&str]) -> Vec<&'static DetectionRule> {
        RULES.iter().filter(|rule| rule.matches(tokens)).collect()
    }
}
