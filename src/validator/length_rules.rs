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

/// Digit-count bounds applied when a country has no explicit entry. The ITU
/// allows up to 15 digits; the lower bound keeps obvious fragments out.
pub(crate) const GENERIC_MIN_DIGITS: usize = 7;
pub(crate) const GENERIC_MAX_DIGITS: usize = 15;

/// Inclusive total digit-count ranges (dialing-code digits plus subscriber
/// digits), keyed by lowercase ISO alpha-2 code. The values are heuristic
/// buckets, not numbering-plan data; countries absent here fall back to the
/// generic range.
pub(crate) const LENGTH_RULES: &[(&str, usize, usize)] = &[
    // NANPA: "+1" plus a fixed ten-digit national number.
    ("ag", 11, 11),
    ("ai", 11, 11),
    ("as", 11, 11),
    ("bb", 11, 11),
    ("bm", 11, 11),
    ("bs", 11, 11),
    ("ca", 11, 11),
    ("dm", 11, 11),
    ("do", 11, 11),
    ("gd", 11, 11),
    ("gu", 11, 11),
    ("jm", 11, 11),
    ("kn", 11, 11),
    ("ky", 11, 11),
    ("lc", 11, 11),
    ("mp", 11, 11),
    ("ms", 11, 11),
    ("pr", 11, 11),
    ("sx", 11, 11),
    ("tc", 11, 11),
    ("tt", 11, 11),
    ("us", 11, 11),
    ("vc", 11, 11),
    ("vg", 11, 11),
    ("vi", 11, 11),
    // Rest of the world.
    ("ae", 12, 12),
    ("ar", 12, 13),
    ("at", 10, 13),
    ("au", 10, 11),
    ("bd", 12, 13),
    ("be", 10, 11),
    ("br", 12, 13),
    ("bw", 10, 11),
    ("ch", 11, 11),
    ("ci", 12, 13),
    ("cl", 11, 11),
    ("cm", 12, 12),
    ("cn", 12, 13),
    ("co", 12, 12),
    ("cz", 12, 12),
    ("de", 9, 13),
    ("dk", 10, 10),
    ("eg", 11, 12),
    ("es", 11, 11),
    ("et", 12, 12),
    ("fi", 9, 13),
    ("fr", 11, 11),
    ("gb", 11, 12),
    ("gh", 12, 12),
    ("gp", 12, 12),
    ("gr", 12, 12),
    ("hk", 11, 11),
    ("hr", 11, 12),
    ("hu", 10, 11),
    ("id", 11, 14),
    ("ie", 11, 12),
    ("il", 11, 12),
    ("in", 12, 12),
    ("it", 11, 13),
    ("jp", 11, 12),
    ("ke", 12, 12),
    ("kr", 12, 13),
    ("kw", 11, 11),
    ("kz", 11, 11),
    ("lk", 11, 11),
    ("ls", 11, 11),
    ("ma", 11, 11),
    ("mg", 12, 12),
    ("mu", 10, 11),
    ("mw", 10, 12),
    ("mx", 12, 13),
    ("my", 11, 12),
    ("mz", 12, 12),
    ("na", 12, 12),
    ("ng", 11, 13),
    ("nl", 11, 11),
    ("no", 10, 10),
    ("nz", 10, 12),
    ("pe", 11, 11),
    ("ph", 12, 12),
    ("pk", 12, 12),
    ("pl", 11, 11),
    ("pt", 12, 12),
    ("qa", 11, 11),
    ("re", 12, 12),
    ("ro", 11, 11),
    ("rs", 10, 12),
    ("ru", 11, 11),
    ("rw", 12, 12),
    ("sa", 12, 12),
    ("sd", 12, 12),
    ("se", 10, 12),
    ("sg", 10, 10),
    ("sk", 12, 12),
    ("sn", 12, 12),
    ("sz", 11, 11),
    ("th", 11, 12),
    ("tn", 11, 11),
    ("tr", 12, 12),
    ("tw", 11, 12),
    ("tz", 12, 12),
    ("ua", 12, 12),
    ("ug", 12, 12),
    ("uy", 11, 11),
    ("uz", 12, 12),
    ("ve", 12, 12),
    ("vn", 11, 12),
    ("yt", 12, 12),
    ("za", 11, 11),
    ("zm", 12, 12),
    ("zw", 12, 12),
];

pub(crate) fn length_range_for(iso_code: &str) -> Option<(usize, usize)> {
    LENGTH_RULES
        .iter()
        .find(| (code, _, _) | *code == iso_code)
        .map(| (_, min, max) | (*min, *max))
}
