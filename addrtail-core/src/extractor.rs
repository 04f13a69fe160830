//! Component extraction
//!
//! Each format tag has one extraction rule. Extraction is total: tokens
//! that do not fit the tag's expected shape still produce a record, with
//! blanks where nothing could be assigned.

use crate::components::{AddressComponents, DOMESTIC_COUNTRY};
use crate::format::FormatTag;
use crate::patterns::{starts_with_digit, strip_trailing_hyphen};

/// Splits token sequences into address components
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentExtractor;

impl ComponentExtractor {
    /// Extract components from `tokens` under the rules of `tag`
    pub fn extract(tokens: &[&str], tag: FormatTag) -> AddressComponents {
        match tag {
            FormatTag::Empty => AddressComponents::empty(),
            FormatTag::UsStandard => extract_us_standard(tokens),
            FormatTag::UsMilitary => extract_us_military(tokens),
            FormatTag::International => extract_international(tokens),
            FormatTag::Unknown => extract_unknown(tokens),
        }
    }
}

fn join(tokens: &[&str]) -> String {
    tokens.join(" ")
}

fn extract_us_standard(tokens: &[&str]) -> AddressComponents {
    let (city, state, zipcode) = match tokens {
        [] => (String::new(), "", ""),
        [zipcode] => (String::new(), "", *zipcode),
        [state, zipcode] => (String::new(), *state, *zipcode),
        [city @ .., state, zipcode] => (join(city), *state, *zipcode),
    };

    AddressComponents {
        city,
        state: state.to_string(),
        zipcode: strip_trailing_hyphen(zipcode).to_string(),
        country: DOMESTIC_COUNTRY.to_string(),
        format: FormatTag::UsStandard,
    }
}

fn extract_us_military(tokens: &[&str]) -> AddressComponents {
    let token = |i: usize| tokens.get(i).map(|t| t.to_string()).unwrap_or_default();

    AddressComponents {
        city: token(1),
        state: token(2),
        zipcode: token(0),
        country: DOMESTIC_COUNTRY.to_string(),
        format: FormatTag::UsMilitary,
    }
}

fn extract_international(tokens: &[&str]) -> AddressComponents {
    let mut record = AddressComponents::blank(FormatTag::International);

    match tokens {
        [] => {}
        [only] => {
            record.zipcode = only.to_string();
            record.country = only.to_string();
        }
        [postcode, city @ .., country] => {
            record.zipcode = postcode.to_string();
            record.city = join(city);
            record.country = country.to_string();
        }
    }

    record
}

fn extract_unknown(tokens: &[&str]) -> AddressComponents {
    let mut record = AddressComponents::blank(FormatTag::Unknown);

    match tokens {
        [] | [_] => {}
        [head @ .., last] if !starts_with_digit(last) => {
            record.country = last.to_string();
            if tokens.len() > 2 {
                record.city = join(head);
            }
        }
        [head @ .., last] => {
            record.zipcode = strip_trailing_hyphen(last).to_string();
            record.city = join(head);
            record.country = DOMESTIC_COUNTRY.to_string();
        }
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str, tag: FormatTag) -> AddressComponents {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        ComponentExtractor::extract(&tokens, tag)
    }

    #[test]
    fn test_empty_ignores_tokens() {
        let record = extract("RALEIGH NC 27601", FormatTag::Empty);
        assert_eq!(record, AddressComponents::empty());
    }

    #[test]
    fn test_us_standard_three_or_more_tokens() {
        let record = extract("ROCKY MOUNT NC 27804", FormatTag::UsStandard);
        assert_eq!(record.city, "ROCKY MOUNT");
        assert_eq!(record.state, "NC");
        assert_eq!(record.zipcode, "27804");
        assert_eq!(record.country, "USA");
    }

    #[test]
    fn test_us_standard_two_tokens() {
        let record = extract("NC 27601", FormatTag::UsStandard);
        assert_eq!(record.city, "");
        assert_eq!(record.state, "NC");
        assert_eq!(record.zipcode, "27601");
    }

    #[test]
    fn test_us_standard_one_token() {
        let record = extract("27601-", FormatTag::UsStandard);
        assert_eq!(record.city, "");
        assert_eq!(record.state, "");
        assert_eq!(record.zipcode, "27601");
        assert_eq!(record.country, "USA");
    }

    #[test]
    fn test_us_standard_hyphen_rules() {
        assert_eq!(
            extract("TARBORO NC 27886-", FormatTag::UsStandard).zipcode,
            "27886"
        );
        assert_eq!(
            extract("TARBORO NC 27886-1234", FormatTag::UsStandard).zipcode,
            "27886-1234"
        );
    }

    #[test]
    fn test_us_standard_no_tokens() {
        let record = extract("", FormatTag::UsStandard);
        assert_eq!(record.zipcode, "");
        assert_eq!(record.city, "");
        assert_eq!(record.country, "USA");
        assert_eq!(record.format, FormatTag::UsStandard);
    }

    #[test]
    fn test_us_military() {
        let record = extract("09774 DPO AE", FormatTag::UsMilitary);
        assert_eq!(record.zipcode, "09774");
        assert_eq!(record.city, "DPO");
        assert_eq!(record.state, "AE");
        assert_eq!(record.country, "USA");
    }

    #[test]
    fn test_us_military_short_input_is_sparse() {
        let record = extract("09774", FormatTag::UsMilitary);
        assert_eq!(record.zipcode, "09774");
        assert_eq!(record.city, "");
        assert_eq!(record.state, "");
    }

    #[test]
    fn test_international() {
        let record = extract("75008 PARIS FRANCE", FormatTag::International);
        assert_eq!(record.zipcode, "75008");
        assert_eq!(record.city, "PARIS");
        assert_eq!(record.country, "FRANCE");
        assert_eq!(record.state, "");
    }

    #[test]
    fn test_international_multi_word_city() {
        let record = extract("10115 BERLIN MITTE GERMANY", FormatTag::International);
        assert_eq!(record.city, "BERLIN MITTE");
    }

    #[test]
    fn test_international_two_tokens_has_no_city() {
        let record = extract("75008 FRANCE", FormatTag::International);
        assert_eq!(record.zipcode, "75008");
        assert_eq!(record.city, "");
        assert_eq!(record.country, "FRANCE");
    }

    #[test]
    fn test_unknown_country_branch() {
        let record = extract("LONDON SW1A ENGLAND", FormatTag::Unknown);
        assert_eq!(record.city, "LONDON SW1A");
        assert_eq!(record.country, "ENGLAND");
        assert_eq!(record.zipcode, "");
        assert_eq!(record.state, "");
    }

    #[test]
    fn test_unknown_country_branch_two_tokens_has_no_city() {
        let record = extract("PARIS FRANCE", FormatTag::Unknown);
        assert_eq!(record.city, "");
        assert_eq!(record.country, "FRANCE");
    }

    #[test]
    fn test_unknown_numeric_branch() {
        let record = extract("RALEIGH NC 2760-", FormatTag::Unknown);
        assert_eq!(record.city, "RALEIGH NC");
        assert_eq!(record.zipcode, "2760");
        assert_eq!(record.country, "USA");
        assert_eq!(record.state, "");
    }

    #[test]
    fn test_unknown_single_token_is_blank() {
        let record = extract("RETURNED", FormatTag::Unknown);
        assert!(record.is_blank());
        assert_eq!(record.format, FormatTag::Unknown);
    }
}
