use super::region_code::RegionCode;
use crate::{COUNTRY_REGISTRY, search::search};

#[test]
fn matches_accent_folded_names() {
    let results = search(COUNTRY_REGISTRY.all(), "cote");
    assert!(results.iter().any(| c | c.iso_code == RegionCode::ci()));

    let results = search(COUNTRY_REGISTRY.all(), "CÔTE");
    assert!(results.iter().any(| c | c.iso_code == RegionCode::ci()));

    let results = search(COUNTRY_REGISTRY.all(), "sao tome");
    assert!(results.iter().any(| c | c.iso_code == "st"));
}

#[test]
fn is_case_insensitive() {
    let upper = search(COUNTRY_REGISTRY.all(), "KENYA");
    let lower = search(COUNTRY_REGISTRY.all(), "kenya");
    assert!(!upper.is_empty());
    assert_eq!(upper, lower);
}

#[test]
fn matches_dialing_codes_and_iso_codes() {
    let by_digits = search(COUNTRY_REGISTRY.all(), "254");
    assert!(by_digits.iter().any(| c | c.iso_code == RegionCode::ke()));

    let by_full_code = search(COUNTRY_REGISTRY.all(), "+254");
    assert!(by_full_code.iter().any(| c | c.iso_code == RegionCode::ke()));

    let by_iso = search(COUNTRY_REGISTRY.all(), "ke");
    assert!(by_iso.iter().any(| c | c.iso_code == RegionCode::ke()));
}

#[test]
fn no_match_is_an_empty_result() {
    assert!(search(COUNTRY_REGISTRY.all(), "zzzzzz").is_empty());
}

#[test]
fn empty_query_matches_everything() {
    let results = search(COUNTRY_REGISTRY.all(), "");
    assert_eq!(results.len(), COUNTRY_REGISTRY.count());
}

#[test]
fn searches_any_country_slice() {
    let east_africa = COUNTRY_REGISTRY.limited_to(&["ke", "ug", "tz"]);
    let results = search(&east_africa, "kenya");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].iso_code, RegionCode::ke());
}
