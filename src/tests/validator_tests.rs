use super::init_logging;
use crate::{
    GenericRangeValidator, LengthCheckError, PhoneNumberValidator, TableDrivenValidator,
    validator::{check_phone_number, is_valid_phone_number},
};

#[test]
fn accepts_numbers_within_the_country_range() {
    assert!(is_valid_phone_number("+254712345678"));
    assert!(is_valid_phone_number("+12025551234"));
    assert!(is_valid_phone_number("+447911123456"));
    assert!(is_valid_phone_number("+79161234567"));
}

#[test]
fn rejects_numbers_outside_the_country_range() {
    // Kenya expects twelve digits in total.
    assert!(!is_valid_phone_number("+25471234567"));
    assert!(!is_valid_phone_number("+2547123456789"));
    assert_eq!(
        check_phone_number("+25471234567"),
        Err(LengthCheckError::TooShort)
    );
    assert_eq!(
        check_phone_number("+2547123456789"),
        Err(LengthCheckError::TooLong)
    );
}

#[test]
fn rejects_malformed_input_without_panicking() {
    init_logging();
    assert!(!is_valid_phone_number(""));
    assert!(!is_valid_phone_number("+"));
    assert!(!is_valid_phone_number("254712345678"));
    assert!(!is_valid_phone_number("+254 712345678"));
    assert!(!is_valid_phone_number("+2547a2345678"));

    assert_eq!(check_phone_number(""), Err(LengthCheckError::MissingPlusPrefix));
    assert_eq!(check_phone_number("+"), Err(LengthCheckError::NoDigits));
    assert_eq!(
        check_phone_number("254712345678"),
        Err(LengthCheckError::MissingPlusPrefix)
    );
    assert_eq!(
        check_phone_number("+254-712-345-678"),
        Err(LengthCheckError::NonDigitCharacter)
    );
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert!(is_valid_phone_number("  +254712345678  "));
}

#[test]
fn wide_decimal_digits_are_normalized() {
    assert!(is_valid_phone_number("+２５４712345678"));
}

#[test]
fn unmatched_dialing_code_uses_the_generic_range() {
    // No country's dialing code is a prefix of "+999...".
    assert!(is_valid_phone_number("+9991234"));
    assert!(is_valid_phone_number("+999123456789012"));
    assert_eq!(check_phone_number("+999123"), Err(LengthCheckError::TooShort));
    assert_eq!(
        check_phone_number("+9991234567890123"),
        Err(LengthCheckError::TooLong)
    );
}

#[test]
fn country_without_a_range_entry_uses_the_generic_range() {
    // Vatican City matches "+379" but carries no explicit length entry.
    assert!(is_valid_phone_number("+3791234"));
    assert_eq!(check_phone_number("+379123"), Err(LengthCheckError::TooShort));
}

#[test]
fn validator_implementations_are_interchangeable_but_not_identical() {
    let table: &dyn PhoneNumberValidator = &TableDrivenValidator;
    let generic: &dyn PhoneNumberValidator = &GenericRangeValidator;

    // Both accept a well-formed Kenyan number.
    assert!(table.is_valid_phone_number("+254712345678"));
    assert!(generic.is_valid_phone_number("+254712345678"));

    // Ten digits is too short for Kenya but fine for the generic rule.
    assert!(!table.is_valid_phone_number("+2547123456"));
    assert!(generic.is_valid_phone_number("+2547123456"));

    // Neither tolerates a missing plus.
    assert!(!table.is_valid_phone_number("2547123456"));
    assert!(!generic.is_valid_phone_number("2547123456"));
}
