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

use dec_from_char::DecimalExtended;
use log::trace;
use thiserror::Error;

use super::grouping_patterns::grouping_for;
use crate::registry::{COUNTRY_REGISTRY, Country};

#[derive(Debug, PartialEq, Error)]
pub(crate) enum FormatterError {
    #[error("input contains a character that is not an ASCII digit: {0:?}")]
    NonDigitInput(char),
}

/// Formatted text together with the caret-offset tables a rich text field
/// needs to reposition its cursor after a reformat.
///
/// Offsets are character offsets. `raw_to_formatted` has one entry per raw
/// digit plus a final sentinel equal to the formatted text length;
/// `formatted_to_raw` has one entry per formatted character plus a final
/// sentinel equal to the raw length. A separator character maps to the raw
/// index of the digit that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedFormat {
    pub text: String,
    pub raw_to_formatted: Vec<usize>,
    pub formatted_to_raw: Vec<usize>,
}

/// Incremental digit-grouping formatter for one input session.
///
/// Owns the buffer of digits typed so far and re-renders the grouped display
/// string on every [`input_digit`](Self::input_digit). The per-country group
/// sizes and the dataset entry are snapshotted at construction; the buffer is
/// the only mutable state, so one instance belongs to exactly one input field
/// and must not be shared across threads without external synchronization.
pub struct AsYouTypeFormatter {
    country: &'static Country,
    pattern: &'static [usize],
    digits: String,
    display: String,
}

impl AsYouTypeFormatter {
    /// Creates a formatter for a region. Unknown codes get the default
    /// grouping pattern and the default registry entry, per the crate's
    /// fail-soft policy.
    pub fn new(iso_code: &str) -> Self {
        Self {
            country: COUNTRY_REGISTRY.find_by_code(iso_code),
            pattern: grouping_for(iso_code),
            digits: String::new(),
            display: String::new(),
        }
    }

    pub fn for_country(country: &'static Country) -> Self {
        Self {
            country,
            pattern: grouping_for(country.iso_code),
            digits: String::new(),
            display: String::new(),
        }
    }

    /// Appends one typed digit and returns the re-rendered display string.
    /// Non-ASCII decimal digits (e.g. full-width `６`) are normalized before
    /// being appended; anything that is not a decimal digit is ignored.
    pub fn input_digit(&mut self, c: char) -> &str {
        if !c.is_decimal_utf8() {
            trace!("Ignoring non-digit input {:?}", c);
            return &self.display;
        }
        let mut buf = [0u8; 4];
        let normalized = dec_from_char::normalize_decimals(c.encode_utf8(&mut buf));
        self.digits.push_str(&normalized);
        self.display = render_grouped(&self.digits, self.pattern);
        &self.display
    }

    /// Feeds every character of `digits` through
    /// [`input_digit`](Self::input_digit) and returns the final display.
    pub fn input_digits(&mut self, digits: &str) -> &str {
        for c in digits.chars() {
            self.input_digit(c);
        }
        &self.display
    }

    /// Resets the session buffer to empty.
    pub fn clear(&mut self) {
        self.digits.clear();
        self.display.clear();
    }

    /// The raw digits accumulated so far.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The grouped display string for the current buffer; empty buffer
    /// renders as the empty string.
    pub fn formatted(&self) -> &str {
        &self.display
    }

    pub fn country(&self) -> &'static Country {
        self.country
    }

    /// Current display prefixed with the country's dialing code, e.g.
    /// `"+254 712 345 678"`.
    pub fn formatted_with_dialing_code(&self) -> String {
        if self.display.is_empty() {
            return self.country.dialing_code.to_owned();
        }
        fast_cat::concat_str!(self.country.dialing_code, " ", &self.display)
    }

    /// Formats an externally owned raw digit string and derives the
    /// caret-offset tables described on [`MappedFormat`]. `raw` is expected
    /// to contain ASCII digits only; any other input degrades to an identity
    /// mapping over the original text instead of propagating an error.
    pub fn format_with_mapping(&self, raw: &str) -> MappedFormat {
        match try_format_with_mapping(raw, self.pattern) {
            Ok(mapped) => mapped,
            Err(err) => {
                trace!("Degrading to identity mapping: {}", err);
                identity_mapping(raw)
            }
        }
    }
}

/// Walks the group-size list left to right, emitting a single space between
/// groups and the digits beyond the last group as one ungrouped run. Never
/// drops or reorders a digit.
fn render_grouped(digits: &str, pattern: &[usize]) -> String {
    let mut out = String::with_capacity(digits.len() + pattern.len());
    let mut rest = digits;
    for &size in pattern {
        if rest.is_empty() {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        let take = size.min(rest.len());
        out.push_str(&rest[..take]);
        rest = &rest[take..];
    }
    if !rest.is_empty() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(rest);
    }
    out
}

fn try_format_with_mapping(
    raw: &str,
    pattern: &[usize],
) -> Result<MappedFormat, FormatterError> {
    if let Some(bad) = raw.chars().find(| c | !c.is_ascii_digit()) {
        return Err(FormatterError::NonDigitInput(bad));
    }

    let mut text = String::with_capacity(raw.len() + raw.len() / 3 + 1);
    let mut raw_to_formatted = Vec::with_capacity(raw.len() + 1);
    let mut formatted_to_raw = Vec::with_capacity(raw.len() + raw.len() / 3 + 2);

    let mut raw_index = 0;
    let mut group_iter = pattern.iter();
    let mut left_in_group = group_iter.next().copied().unwrap_or(usize::MAX);
    for digit in raw.chars() {
        if left_in_group == 0 {
            // A separator repositions the caret onto the digit after it.
            text.push(' ');
            formatted_to_raw.push(raw_index);
            left_in_group = group_iter.next().copied().unwrap_or(usize::MAX);
        }
        raw_to_formatted.push(text.len());
        formatted_to_raw.push(raw_index);
        text.push(digit);
        raw_index += 1;
        left_in_group = left_in_group.saturating_sub(1);
    }

    // Cursor-at-end sentinels.
    raw_to_formatted.push(text.len());
    formatted_to_raw.push(raw.len());

    Ok(MappedFormat { text, raw_to_formatted, formatted_to_raw })
}

fn identity_mapping(raw: &str) -> MappedFormat {
    let char_len = raw.chars().count();
    MappedFormat {
        text: raw.to_owned(),
        raw_to_formatted: (0..=char_len).collect(),
        formatted_to_raw: (0..=char_len).collect(),
    }
}
