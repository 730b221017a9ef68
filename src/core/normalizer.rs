// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/normalizer.rs
//!
//! Key name normalisation and aliasing
//!
//! Platforms report keys in several spellings ("ArrowUp", "Escape", " ")
//! while people write combos as "up", "esc" or "space". This module brings
//! both sides into one comparable form:
//! - `kebab_case` / `canonicalize`: lowercase kebab-case spelling
//! - `aliases_of`: every name a canonical key answers to
//! - `canonical_of`: the reverse lookup, alias to canonical key
//!
//! The alias table is a plain constant slice, so lookups need no
//! initialisation and are safe from any number of threads.

use regex::Regex;
use std::sync::LazyLock;

/// Alias token to canonical key value
///
/// Each alias has exactly one canonical value; a canonical value may have
/// several aliases (`space` and `spacebar` both name `" "`). Canonical keys
/// are not listed against themselves: `aliases_of` adds the identity entry.
pub const ALIAS_TABLE: &[(&str, &str)] = &[
    ("ctrl", "control"),
    ("slash", "/"),
    ("space", " "),
    ("spacebar", " "),
    ("cmd", "meta"),
    ("esc", "escape"),
    ("up", "arrow-up"),
    ("down", "arrow-down"),
    ("left", "arrow-left"),
    ("right", "arrow-right"),
    ("period", "."),
    ("equal", "="),
    ("minus", "-"),
    ("underscore", "_"),
];

#[allow(clippy::expect_used)]
static CAMEL_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-z])([A-Z])").expect("camel case boundary pattern should be valid regex")
});

#[allow(clippy::expect_used)]
static WORD_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[_\s]+").expect("word separator pattern should be valid regex")
});

/// Converts a key name to lowercase kebab-case
///
/// - A lowercase-then-uppercase boundary gains a hyphen ("arrowUp" → "arrow-up")
/// - Each run of underscores or whitespace becomes one hyphen
/// - The result is lowercased
///
/// A key that is exactly `" "` or `"_"` is a literal key value, not a word,
/// and is returned unchanged.
///
/// # Example
/// ```
/// use key_combo_matcher::core::normalizer::kebab_case;
///
/// assert_eq!(kebab_case("ArrowUp"), "arrow-up");
/// assert_eq!(kebab_case(" "), " ");
/// ```
pub fn kebab_case(subject: &str) -> String {
    if subject == " " || subject == "_" {
        return subject.to_string();
    }

    let split = CAMEL_BOUNDARY.replace_all(subject, "$1-$2");
    WORD_SEPARATOR.replace_all(&split, "-").to_lowercase()
}

/// Canonical comparable form of a raw key name
///
/// Empty input yields an empty string, which callers treat as "no key".
pub fn canonicalize(raw_key: &str) -> String {
    if raw_key.is_empty() {
        return String::new();
    }
    kebab_case(raw_key)
}

/// Every name the canonical key `key` can be referred to by
///
/// Returns the aliases whose canonical value is `key`, in table order,
/// followed by `key` itself. Empty only when `key` is empty.
pub fn aliases_of(key: &str) -> Vec<String> {
    if key.is_empty() {
        return Vec::new();
    }

    let mut aliases: Vec<String> = ALIAS_TABLE
        .iter()
        .filter(|(alias, canonical)| *canonical == key && *alias != key)
        .map(|(alias, _)| alias.to_string())
        .collect();
    aliases.push(key.to_string());
    aliases
}

/// Whether `token` is one of the names of the canonical key `key`
///
/// Equivalent to `aliases_of(key).contains(token)` without allocating.
pub fn answers_to(key: &str, token: &str) -> bool {
    if key.is_empty() {
        return false;
    }

    token == key
        || ALIAS_TABLE
            .iter()
            .any(|(alias, canonical)| *alias == token && *canonical == key)
}

/// Resolves an alias to its canonical key; other names map to themselves
pub fn canonical_of(token: &str) -> &str {
    ALIAS_TABLE
        .iter()
        .find(|(alias, _)| *alias == token)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(token)
}
