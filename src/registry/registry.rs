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

use std::collections::{HashMap, HashSet};

use log::warn;

use super::{country::Country, dataset, preferred_regions::preferred_region_for};
use crate::i18n::RegionCode;

/// Indexed view over the compiled-in country dataset.
///
/// Built once behind [`super::COUNTRY_REGISTRY`] and shared by reference
/// afterwards; all lookups are reads against immutable tables, so the
/// registry is safe for unsynchronized concurrent use.
pub struct CountryRegistry {
    /// All countries, sorted ascending by display name. Ordering is ordinal
    /// (byte-wise), not locale collation, which keeps iteration order
    /// deterministic across hosts.
    countries: Vec<&'static Country>,

    /// A mapping from a lowercase ISO alpha-2 code to its dataset entry.
    by_iso: HashMap<&'static str, &'static Country>,

    /// The entry unresolvable lookups fall back to ("us").
    default_country: &'static Country,
}

impl CountryRegistry {
    pub(super) fn new() -> Self {
        let mut countries: Vec<&'static Country> = dataset::COUNTRIES.iter().collect();
        countries.sort_by_key(| country | country.display_name);

        let mut by_iso = HashMap::with_capacity(countries.len());
        for country in &countries {
            by_iso.insert(country.iso_code, *country);
        }

        let default_country = match by_iso.get(RegionCode::get_default()) {
            Some(country) => *country,
            None => {
                let err_message = format!(
                    "Compiled-in dataset is missing the default region {:?}",
                    RegionCode::get_default()
                );
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
        };

        Self { countries, by_iso, default_country }
    }

    /// All countries, ascending by display name.
    pub fn all(&self) -> &[&'static Country] {
        &self.countries
    }

    pub fn count(&self) -> usize {
        self.countries.len()
    }

    /// Case-insensitive lookup by ISO alpha-2 code. An empty or unknown code
    /// resolves to the default ("us") entry rather than failing, so the UI
    /// layer can feed the host's locale hint through unchecked.
    pub fn find_by_code(&self, code: &str) -> &'static Country {
        let code = code.trim().to_lowercase();
        if code.is_empty() {
            return self.default_country;
        }
        match self.by_iso.get(code.as_str()) {
            Some(country) => country,
            None => {
                warn!("Unknown region code {:?}, falling back to default", code);
                self.default_country
            }
        }
    }

    /// Exact dialing-code lookup. For a code shared by several countries the
    /// preferred-region table decides; `None` when no country uses the code.
    pub fn find_by_dialing_code(&self, dialing_code: &str) -> Option<&'static Country> {
        let mut candidates = self
            .countries
            .iter()
            .filter(| country | country.dialing_code == dialing_code)
            .copied();

        let first = candidates.next()?;
        if let Some(preferred) = preferred_region_for(dialing_code) {
            if first.iso_code == preferred {
                return Some(first);
            }
            if let Some(winner) = candidates.find(| country | country.iso_code == preferred) {
                return Some(winner);
            }
        }
        Some(first)
    }

    /// Restricts the dataset to the countries matched by `selectors`. Each
    /// selector is normalized (non-alphanumerics stripped, lowercased) and
    /// then interpreted by shape: all digits match the dialing code as a
    /// substring, up to two letters match an ISO code exactly, anything
    /// longer matches the display name case-insensitively. Results are
    /// unioned, de-duplicated and sorted by display name.
    pub fn limited_to(&self, selectors: &[&str]) -> Vec<&'static Country> {
        let mut seen = HashSet::new();
        let mut matched = Vec::new();

        for selector in selectors {
            let normalized: String = selector
                .trim()
                .chars()
                .filter(| c | c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase();
            if normalized.is_empty() {
                continue;
            }

            let is_digits = normalized.chars().all(| c | c.is_ascii_digit());
            for country in &self.countries {
                let hit = if is_digits {
                    country.dialing_digits().contains(&normalized)
                } else if normalized.chars().count() <= 2 {
                    country.iso_code == normalized
                } else {
                    country.display_name.to_lowercase().contains(&normalized)
                };
                if hit && seen.insert(country.iso_code) {
                    matched.push(*country);
                }
            }
        }

        matched.sort_by_key(| country | country.display_name);
        matched
    }

    /// Reorders `countries` so that entries named in `priority_codes` come
    /// first, in exactly the order the codes were given; the rest follow
    /// alphabetically. Widgets use this to pin a caller's favorite countries
    /// to the top of the picker.
    pub fn sort_with_priority(
        &self,
        countries: &[&'static Country],
        priority_codes: &[&str],
    ) -> Vec<&'static Country> {
        let mut seen = HashSet::new();
        let mut sorted = Vec::with_capacity(countries.len());

        for code in priority_codes {
            let code = code.trim().to_lowercase();
            if let Some(country) = countries.iter().find(| c | c.iso_code == code) {
                if seen.insert(country.iso_code) {
                    sorted.push(*country);
                }
            }
        }

        let mut rest: Vec<&'static Country> = countries
            .iter()
            .filter(| country | !seen.contains(country.iso_code))
            .copied()
            .collect();
        rest.sort_by_key(| country | country.display_name);

        sorted.extend(rest);
        sorted
    }
}
