// Copyright (C) 2026 The phone-input-core Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod length_rules;

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::{extractor, interfaces::PhoneNumberValidator, regex_util::RegexFullMatch};
use length_rules::{GENERIC_MAX_DIGITS, GENERIC_MIN_DIGITS, length_range_for};

/// Possible outcomes when a full number fails the length check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LengthCheckError {
    /// The number does not carry the leading "+" the text contract requires.
    #[error("The number does not start with a plus sign")]
    MissingPlusPrefix,
    /// Nothing follows the "+".
    #[error("The number contains no digits")]
    NoDigits,
    /// Something other than an ASCII digit follows the "+".
    #[error("The number contains a character that is not a digit")]
    NonDigitCharacter,
    /// The number is shorter than all valid numbers for this region.
    #[error("The number is shorter than all valid numbers for this region")]
    TooShort,
    /// The number is longer than all valid numbers for this region.
    #[error("The number is longer than all valid numbers for this region")]
    TooLong,
}

struct ValidationRegExps {
    /// The literal text contract for a full number: a "+" followed by ASCII
    /// digits and nothing else.
    full_number_pattern: Regex,
}

static REG_EXPS: LazyLock<ValidationRegExps> = LazyLock::new(|| ValidationRegExps {
    full_number_pattern: Regex::new(r"\+[0-9]+").expect("Invalid constant pattern!"),
});

/// Checks a full international number against the matched country's digit
/// count range and reports why it fails, if it does.
///
/// The check is a table-driven digit-count bucket, not numbering-plan
/// validation: no carrier or line-type data is consulted, and short-code or
/// premium numbers outside the tabulated ranges will be misclassified.
/// Countries without an explicit range entry use the generic 7..=15 rule, as
/// does any input whose dialing code matches no country at all.
pub fn check_phone_number(full_number: &str) -> Result<(), LengthCheckError> {
    let trimmed = full_number.trim();
    let normalized = dec_from_char::normalize_decimals(trimmed);
    let normalized: &str = &normalized;

    if !normalized.starts_with('+') {
        return Err(LengthCheckError::MissingPlusPrefix);
    }
    if normalized.len() == 1 {
        return Err(LengthCheckError::NoDigits);
    }
    if !REG_EXPS.full_number_pattern.full_match(normalized) {
        return Err(LengthCheckError::NonDigitCharacter);
    }

    let digit_count = normalized.len() - 1;
    let (country, _) = extractor::extract(normalized);
    let (min, max) = country
        .and_then(| country | length_range_for(country.iso_code))
        .unwrap_or((GENERIC_MIN_DIGITS, GENERIC_MAX_DIGITS));

    if digit_count < min {
        return Err(LengthCheckError::TooShort);
    }
    if digit_count > max {
        return Err(LengthCheckError::TooLong);
    }
    Ok(())
}

/// Boolean form of [`check_phone_number`]; malformed input is reported as
/// `false`, never as a panic or error.
pub fn is_valid_phone_number(full_number: &str) -> bool {
    check_phone_number(full_number).is_ok()
}

/// The reference, table-driven length validator. Portable and deterministic;
/// conformance tests run against this implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct TableDrivenValidator;

impl PhoneNumberValidator for TableDrivenValidator {
    fn is_valid_phone_number(&self, full_number: &str) -> bool {
        is_valid_phone_number(full_number)
    }
}

/// Country-agnostic validator applying only the generic 7..=15 digit rule.
/// Stands in where per-country tables are unwanted, e.g. as the behavioral
/// floor for a platform-native implementation of
/// [`PhoneNumberValidator`].
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericRangeValidator;

impl PhoneNumberValidator for GenericRangeValidator {
    fn is_valid_phone_number(&self, full_number: &str) -> bool {
        let trimmed = full_number.trim();
        let normalized = dec_from_char::normalize_decimals(trimmed);
        let normalized: &str = &normalized;
        if !REG_EXPS.full_number_pattern.full_match(normalized) {
            return false;
        }
        let digit_count = normalized.len() - 1;
        (GENERIC_MIN_DIGITS..=GENERIC_MAX_DIGITS).contains(&digit_count)
    }
}
