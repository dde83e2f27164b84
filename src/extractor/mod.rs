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

use std::borrow::Cow;

use log::warn;

use crate::{
    registry::{COUNTRY_REGISTRY, Country, preferred_region_for},
    string_util::strip_cow_prefix,
};

/// Splits a full international number into its country and subscriber
/// remainder.
///
/// Candidates are all countries whose dialing code is a string prefix of the
/// input; the longest code wins, and a code shared by several countries is
/// resolved through the preferred-region table (so "+1..." yields "us", not
/// an arbitrary NANPA member). Without a tie-break the choice would depend
/// on dataset order, since dialing codes are not a prefix-free code.
///
/// Non-ASCII decimal digits are normalized before matching. When no dialing
/// code matches, the input comes back unchanged with no country; the
/// function never fails.
pub fn extract(full_number: &str) -> (Option<&'static Country>, Cow<'_, str>) {
    let normalized = dec_from_char::normalize_decimals(full_number);
    let normalized: Cow<'_, str> = if normalized == full_number {
        Cow::Borrowed(full_number)
    } else {
        Cow::Owned(normalized.into())
    };

    let candidates: Vec<&'static Country> = COUNTRY_REGISTRY
        .all()
        .iter()
        .filter(| country | normalized.starts_with(country.dialing_code))
        .copied()
        .collect();
    if candidates.is_empty() {
        return (None, normalized);
    }

    let longest = candidates
        .iter()
        .map(| country | country.dialing_code.len())
        .max()
        .unwrap_or(0);
    let mut tied = candidates
        .iter()
        .filter(| country | country.dialing_code.len() == longest);

    let first = match tied.next() {
        Some(country) => *country,
        None => return (None, normalized),
    };
    let mut winner = first;
    if tied.clone().next().is_some() {
        let shared_code = first.dialing_code;
        winner = match preferred_region_for(shared_code)
            .and_then(| iso | {
                if first.iso_code == iso {
                    return Some(first);
                }
                tied.find(| country | country.iso_code == iso).copied()
            }) {
            Some(preferred) => preferred,
            None => {
                warn!(
                    "No preferred region among candidates for shared dialing code {:?}, \
                     using the first candidate",
                    shared_code
                );
                first
            }
        };
    }

    let iso_match = Some(winner);
    match strip_cow_prefix(normalized, winner.dialing_code) {
        Some(remainder) => (iso_match, remainder),
        // The prefix check above guarantees the strip succeeds; degrade to
        // "no match" rather than asserting.
        None => (None, Cow::Borrowed(full_number)),
    }
}
