//! Property tests for detection and extraction

use addrtail_core::{
    classify, parse_address_tail, tokenize, ComponentExtractor, FormatDetector, FormatTag,
};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[A-Z]{1,12}"
}

fn us_state() -> impl Strategy<Value = String> {
    "[A-Z]{2}"
}

fn zip() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{5}", "[0-9]{5}-[0-9]{4}"]
}

proptest! {
    #[test]
    fn parsing_is_deterministic(raw in "\\PC{0,40}") {
        let first = parse_address_tail(Some(&raw));
        let second = parse_address_tail(Some(&raw));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_string_gets_exactly_one_tag(raw in "\\PC{0,40}") {
        let record = parse_address_tail(Some(&raw));
        prop_assert!(FormatTag::ALL.contains(&record.format));
        prop_assert_eq!(record.format, classify(Some(&raw)));
        if raw.trim().is_empty() {
            prop_assert_eq!(record.format, FormatTag::Empty);
        } else {
            prop_assert_ne!(record.format, FormatTag::Empty);
        }
    }

    #[test]
    fn extraction_matches_detection(raw in "[0-9A-Za-z -]{0,40}") {
        let tokens = tokenize(&raw);
        prop_assume!(!tokens.is_empty());
        let tag = FormatDetector::detect(&tokens);
        prop_assert_eq!(ComponentExtractor::extract(&tokens, tag).format, tag);
    }

    #[test]
    fn non_us_formats_never_have_state(raw in "[0-9A-Z -]{0,40}") {
        let record = parse_address_tail(Some(&raw));
        if !record.format.is_domestic() {
            prop_assert_eq!(record.state.as_str(), "");
        }
        if record.format.is_domestic() {
            prop_assert_eq!(record.country.as_str(), "USA");
        }
    }

    #[test]
    fn well_formed_us_standard_round_trips(
        city in prop::collection::vec(word(), 0..=2),
        state in us_state(),
        zip in zip(),
    ) {
        let mut tokens = city.clone();
        tokens.push(state.clone());
        tokens.push(zip.clone());
        let raw = tokens.join(" ");

        let record = parse_address_tail(Some(&raw));
        prop_assert_eq!(record.format, FormatTag::UsStandard);

        let rebuilt = [record.city.as_str(), record.state.as_str(), record.zipcode.as_str()]
            .into_iter()
            .filter(|field| !field.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(rebuilt, raw);
    }

    #[test]
    fn military_addresses_are_detected(zip in zip(), office in "(APO|FPO|DPO|apo|fpo|dpo)", region in "(AA|AE|AP)") {
        let raw = format!("{zip} {office} {region}");
        let record = parse_address_tail(Some(&raw));
        prop_assert_eq!(record.format, FormatTag::UsMilitary);
        prop_assert_eq!(record.zipcode, zip);
        prop_assert_eq!(record.city, office);
        prop_assert_eq!(record.state, region);
    }
}
