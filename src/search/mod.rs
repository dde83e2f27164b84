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

use crate::{registry::Country, string_util::fold_for_search};

/// Filters `countries` to those matching `query`: a case-insensitive
/// substring of the accent-folded display name ("cote" matches
/// "Côte D'ivoire"), of the dialing code, or of the ISO code. No match is an
/// empty result, not an error.
pub fn search(countries: &[&'static Country], query: &str) -> Vec<&'static Country> {
    let query = query.trim();
    let folded_query = fold_for_search(query);
    let lower_query = query.to_lowercase();

    countries
        .iter()
        .filter(| country | {
            fold_for_search(country.display_name).contains(&folded_query)
                || country.dialing_code.contains(query)
                || country.iso_code.contains(&lower_query)
        })
        .copied()
        .collect()
}
