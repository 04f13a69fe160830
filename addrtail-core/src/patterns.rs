//! Token-level patterns shared by detection and extraction
//!
//! Digits are ASCII `0-9` throughout; fullwidth or other Unicode digits do
//! not count as postal-code characters.

use regex::Regex;
use std::sync::OnceLock;

static ZIP_PATTERN: OnceLock<Regex> = OnceLock::new();
static EXTENDED_SEPARATOR: OnceLock<Regex> = OnceLock::new();

/// Military post office designators, compared case-insensitively
pub const MILITARY_POST_OFFICES: [&str; 3] = ["APO", "FPO", "DPO"];

fn zip_regex() -> &'static Regex {
    ZIP_PATTERN.get_or_init(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("valid ZIP pattern"))
}

fn extended_separator_regex() -> &'static Regex {
    EXTENDED_SEPARATOR
        .get_or_init(|| Regex::new(r"^[0-9]+-[0-9]+").expect("valid separator pattern"))
}

/// `DDDDD` or `DDDDD-DDDD`
pub fn is_zip(token: &str) -> bool {
    zip_regex().is_match(token)
}

/// Like [`is_zip`], after removing at most one trailing hyphen
pub fn is_zip_allowing_trailing_hyphen(token: &str) -> bool {
    is_zip(token.strip_suffix('-').unwrap_or(token))
}

/// Non-empty and made only of ASCII digits
pub fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// First character is an ASCII digit
pub fn starts_with_digit(token: &str) -> bool {
    token.bytes().next().is_some_and(|b| b.is_ascii_digit())
}

/// Case-insensitive APO/FPO/DPO check
pub fn is_military_post_office(token: &str) -> bool {
    MILITARY_POST_OFFICES
        .iter()
        .any(|code| code.eq_ignore_ascii_case(token))
}

/// Remove a stray trailing hyphen from a zipcode-like token.
///
/// Tokens that begin with `digits-digits` keep their hyphen, since it is
/// the separator of an extended ZIP rather than an artifact.
pub fn strip_trailing_hyphen(token: &str) -> &str {
    match token.strip_suffix('-') {
        Some(stripped) if !extended_separator_regex().is_match(token) => stripped,
        _ => token,
    }
}
