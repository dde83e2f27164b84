use std::borrow::Cow;

use super::{init_logging, region_code::RegionCode};
use crate::extractor::extract;

#[test]
fn splits_code_and_remainder() {
    let (country, remainder) = extract("+254712345678");
    let country = country.expect("Kenya should match");
    assert_eq!(country.iso_code, RegionCode::ke());
    assert_eq!(remainder, "712345678");
}

#[test]
fn round_trips_through_full_number() {
    let original = "+254712345678";
    let (country, remainder) = extract(original);
    let country = country.expect("Kenya should match");
    assert_eq!(country.full_number(&remainder), original);
}

#[test]
fn shared_codes_resolve_to_the_preferred_region() {
    let (country, remainder) = extract("+12025551234");
    assert_eq!(country.map(| c | c.iso_code), Some(RegionCode::us()));
    assert_eq!(remainder, "2025551234");

    let (country, _) = extract("+447911123456");
    assert_eq!(country.map(| c | c.iso_code), Some(RegionCode::gb()));

    let (country, _) = extract("+79161234567");
    assert_eq!(country.map(| c | c.iso_code), Some(RegionCode::ru()));

    let (country, _) = extract("+61412345678");
    assert_eq!(country.map(| c | c.iso_code), Some(RegionCode::au()));

    let (country, _) = extract("+358501234567");
    assert_eq!(country.map(| c | c.iso_code), Some(RegionCode::fi()));

    let (country, _) = extract("+262692123456");
    assert_eq!(country.map(| c | c.iso_code), Some(RegionCode::re()));

    let (country, _) = extract("+590690123456");
    assert_eq!(country.map(| c | c.iso_code), Some(RegionCode::gp()));
}

#[test]
fn longest_matching_code_wins_over_a_shorter_one() {
    // "+1242..." matches both "+1" and the Bahamas' "+1242"; the longer
    // code must win before any preference logic runs.
    let (country, remainder) = extract("+12425551234");
    assert_eq!(country.map(| c | c.iso_code), Some(RegionCode::bs()));
    assert_eq!(remainder, "5551234");
}

#[test]
fn no_match_returns_the_input_unchanged() {
    init_logging();
    let (country, remainder) = extract("+9991234567");
    assert!(country.is_none());
    assert_eq!(remainder, "+9991234567");

    let (country, remainder) = extract("712345678");
    assert!(country.is_none());
    assert_eq!(remainder, "712345678");

    let (country, remainder) = extract("");
    assert!(country.is_none());
    assert_eq!(remainder, "");
}

#[test]
fn ascii_input_borrows_the_remainder() {
    let (_, remainder) = extract("+254712345678");
    assert!(matches!(remainder, Cow::Borrowed(_)));
}

#[test]
fn wide_decimal_digits_are_normalized_before_matching() {
    let (country, remainder) = extract("+２５４712345678");
    assert_eq!(country.map(| c | c.iso_code), Some(RegionCode::ke()));
    assert_eq!(remainder, "712345678");
}
