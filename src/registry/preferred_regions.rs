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

/// Dialing codes are not a prefix-free code: several countries can share one
/// code exactly. Note regions under NANPA share the dialing code "+1" and
/// Russia and Kazakhstan share "+7". Under this map, "+1" is mapped to "us"
/// and "+7" is mapped to "ru"; the mapped region wins whenever a shared code
/// has to be resolved to a single country.
pub(crate) const PREFERRED_REGIONS: &[(&str, &str)] = &[
    ("+1", "us"),
    ("+7", "ru"),
    ("+44", "gb"),
    ("+47", "no"),
    ("+61", "au"),
    ("+262", "re"),
    ("+358", "fi"),
    ("+590", "gp"),
];

pub(crate) fn preferred_region_for(dialing_code: &str) -> Option<&'static str> {
    PREFERRED_REGIONS
        .iter()
        .find(| (code, _) | *code == dialing_code)
        .map(| (_, region) | *region)
}
