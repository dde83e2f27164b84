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

/// One entry of the country reference dataset.
///
/// All fields are `'static` string slices into the compiled-in dataset, so a
/// `Country` is a cheap `Copy` handle that can be passed around freely.
///
/// Invariants (enforced by the dataset tests):
/// - `iso_code` is exactly two lowercase ASCII letters and unique;
/// - `dialing_code` always starts with `+` followed by ASCII digits;
/// - `display_name` is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, lowercase, e.g. "ke".
    pub iso_code: &'static str,
    /// International calling prefix with the leading "+", e.g. "+254".
    pub dialing_code: &'static str,
    /// Catalog display name. The host may substitute a localized name
    /// resolved by `iso_code`; this field is the English default.
    pub display_name: &'static str,
    /// Opaque flag asset reference, resolved and rendered by the UI layer.
    pub flag_asset: &'static str,
}

impl Country {
    pub(crate) const fn new(
        iso_code: &'static str,
        dialing_code: &'static str,
        display_name: &'static str,
        flag_asset: &'static str,
    ) -> Self {
        Self { iso_code, dialing_code, display_name, flag_asset }
    }

    /// The dialing code without its leading "+".
    pub fn dialing_digits(&self) -> &'static str {
        // The dataset invariant guarantees the "+" is present.
        self.dialing_code.strip_prefix('+').unwrap_or(self.dialing_code)
    }

    /// Assembles a full international number from a subscriber part,
    /// e.g. `"712345678"` for Kenya becomes `"+254712345678"`.
    pub fn full_number(&self, subscriber: &str) -> String {
        fast_cat::concat_str!(self.dialing_code, subscriber)
    }
}
