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

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Strips prefix of given string Cow. Returns option with `Some` if
/// prefix found and stripped.
///
/// Calls `drain` if string is owned and returns slice if string is borrowed
pub fn strip_cow_prefix<'a>(cow: Cow<'a, str>, prefix: &str) -> Option<Cow<'a, str>> {
    match cow {
        Cow::Borrowed(s) => s.strip_prefix(prefix).map(| s | Cow::Borrowed(s)),
        Cow::Owned(mut s) => {
            if s.starts_with(prefix) {
                s.drain(0..prefix.len());
                return Some(Cow::Owned(s));
            }
            None
        }
    }
}

/// Lowercases `s` and strips combining diacritical marks after NFD
/// decomposition, so "Côte" folds to "cote". Applied to display names
/// before substring comparison.
pub fn fold_for_search(s: &str) -> String {
    s.nfd()
        .filter(| c | !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::string_util::{fold_for_search, strip_cow_prefix};

    #[test]
    fn test_usage() {
        let str_to_strip = Cow::Owned("+254712:rest".to_owned());
        let stripped = strip_cow_prefix(str_to_strip, "+254");
        assert_eq!(stripped, Some(Cow::Owned("712:rest".to_owned())));

        let str_to_strip = Cow::Owned("712+254".to_owned());
        let stripped = strip_cow_prefix(str_to_strip, "+254");
        assert_eq!(stripped, None)
    }

    #[test]
    fn test_borrowed_strip_keeps_slice() {
        let stripped = strip_cow_prefix(Cow::Borrowed("+441234"), "+44");
        assert_eq!(stripped, Some(Cow::Borrowed("1234")));
    }

    #[test]
    fn test_fold_for_search() {
        assert_eq!(fold_for_search("Côte D'ivoire"), "cote d'ivoire");
        assert_eq!(fold_for_search("São Tomé"), "sao tome");
        assert_eq!(fold_for_search("KENYA"), "kenya");
        // already folded strings pass through unchanged
        assert_eq!(fold_for_search("kenya"), "kenya");
    }
}
