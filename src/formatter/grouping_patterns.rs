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

/// Group sizes applied to subscriber digits when a country has no explicit
/// pattern of its own.
pub(crate) const DEFAULT_GROUPING: &[usize] = &[3, 3, 4];

/// Per-country digit-grouping patterns, keyed by lowercase ISO alpha-2 code.
/// A pattern lists the sizes of the leading digit groups; digits beyond the
/// last group are rendered as one ungrouped run.
pub(crate) const GROUPING_PATTERNS: &[(&str, &[usize])] = &[
    ("ae", &[2, 3, 4]),
    ("ar", &[2, 4, 4]),
    ("au", &[3, 3, 3]),
    ("bd", &[4, 6]),
    ("be", &[3, 2, 2, 2]),
    ("br", &[2, 5, 4]),
    ("ca", &[3, 3, 4]),
    ("ch", &[2, 3, 2, 2]),
    ("cn", &[3, 4, 4]),
    ("cz", &[3, 3, 3]),
    ("de", &[3, 4, 4]),
    ("dk", &[2, 2, 2, 2]),
    ("eg", &[2, 4, 4]),
    ("es", &[3, 3, 3]),
    ("fi", &[2, 3, 2, 2]),
    ("fr", &[1, 2, 2, 2, 2]),
    ("gb", &[4, 6]),
    ("gh", &[2, 3, 4]),
    ("gr", &[3, 3, 4]),
    ("hk", &[4, 4]),
    ("id", &[3, 4, 4]),
    ("ie", &[2, 3, 4]),
    ("il", &[2, 3, 4]),
    ("in", &[5, 5]),
    ("it", &[3, 3, 4]),
    ("jp", &[2, 4, 4]),
    ("ke", &[3, 3, 3]),
    ("kr", &[2, 4, 4]),
    ("mx", &[2, 4, 4]),
    ("my", &[2, 4, 4]),
    ("ng", &[3, 3, 4]),
    ("nl", &[2, 4, 4]),
    ("no", &[3, 2, 3]),
    ("nz", &[2, 3, 4]),
    ("ph", &[3, 3, 4]),
    ("pk", &[3, 7]),
    ("pl", &[3, 3, 3]),
    ("pt", &[3, 3, 3]),
    ("ru", &[3, 3, 2, 2]),
    ("sa", &[2, 3, 4]),
    ("se", &[2, 3, 2, 2]),
    ("sg", &[4, 4]),
    ("th", &[2, 3, 4]),
    ("tr", &[3, 3, 2, 2]),
    ("tz", &[3, 3, 3]),
    ("ua", &[2, 3, 2, 2]),
    ("ug", &[3, 3, 3]),
    ("us", &[3, 3, 4]),
    ("vn", &[3, 3, 3]),
    ("za", &[2, 3, 4]),
];

/// Grouping pattern for a region, falling back to [`DEFAULT_GROUPING`] for
/// codes without an explicit entry. Lookup is case-insensitive.
pub(crate) fn grouping_for(iso_code: &str) -> &'static [usize] {
    let iso_code = iso_code.trim().to_lowercase();
    GROUPING_PATTERNS
        .iter()
        .find(| (code, _) | *code == iso_code)
        .map(| (_, pattern) | *pattern)
        .unwrap_or(DEFAULT_GROUPING)
}
