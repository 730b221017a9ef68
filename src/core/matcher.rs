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

//! src/core/matcher.rs
//!
//! Decides whether a key press satisfies a combo request
//!
//! # Matching rules
//! 1. An empty request matches any key press.
//! 2. A single token matches when it is one of the names of the pressed
//!    key; held modifiers are not inspected.
//! 3. Otherwise every requested system modifier must be held, and the
//!    first non-modifier token must name the pressed key.
//!
//! Modifier checks are "at least": unrequested modifiers may also be held.
//! When several non-modifier tokens are requested only the first one is
//! tested; `ComboMatcher::strict` rejects such requests up front instead.
//!
//! Matching is total. Bad input produces `false`, never an error.

use tracing::trace;

use crate::core::normalizer::{answers_to, canonicalize};
use crate::core::parser::{parse_combo, DEFAULT_DELIMITER};
use crate::core::types::{ComboRequest, InputEvent};
use crate::core::validator::validate_request;

/// Whether `event` satisfies `request`
///
/// # Example
/// ```
/// use key_combo_matcher::{is_satisfied, ComboRequest, InputEvent};
///
/// let request = ComboRequest::from_tokens(["ctrl", "k"]);
/// assert!(is_satisfied(&request, &InputEvent::new("K").with_ctrl()));
/// assert!(!is_satisfied(&request, &InputEvent::new("K")));
/// ```
pub fn is_satisfied(request: &ComboRequest, event: &InputEvent) -> bool {
    if request.is_empty() {
        trace!("empty request matches any key");
        return true;
    }

    let pressed = canonicalize(&event.key);

    if let [token] = request.tokens() {
        if answers_to(&pressed, token) {
            trace!(%token, key = %pressed, "single token matched pressed key");
            return true;
        }
    }

    let selected = request.system_modifiers();
    if selected.is_empty() {
        trace!(request = %request, key = %pressed, "no match");
        return false;
    }

    if let Some(released) = selected.iter().find(|m| !m.is_held(event)) {
        trace!(modifier = %released, "requested modifier not held");
        return false;
    }

    let matched = request
        .literal()
        .is_some_and(|literal| answers_to(&pressed, literal));
    trace!(request = %request, key = %pressed, matched, "modifier combination checked");
    matched
}

/// Combo matcher with parsing settings
///
/// Wraps [`is_satisfied`] for callers holding raw combo strings.
#[derive(Clone, Debug)]
pub struct ComboMatcher {
    delimiter: char,
    strict: bool,
}

impl ComboMatcher {
    /// Matcher with the default `+` delimiter and lenient validation
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            strict: false,
        }
    }

    /// Use `delimiter` to split combo strings
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Reject requests that fail validation instead of matching leniently
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Parse a raw combo string with this matcher's delimiter
    pub fn parse(&self, raw: &str) -> ComboRequest {
        parse_combo(raw, self.delimiter)
    }

    /// Whether `event` satisfies the raw combo string `raw`
    ///
    /// In strict mode a request that fails validation never matches.
    pub fn matches(&self, raw: &str, event: &InputEvent) -> bool {
        let request = self.parse(raw);
        self.matches_request(&request, event)
    }

    /// Whether `event` satisfies an already parsed request
    pub fn matches_request(&self, request: &ComboRequest, event: &InputEvent) -> bool {
        if self.strict {
            if let Err(e) = validate_request(request) {
                trace!(error = %e, "strict matcher rejected request");
                return false;
            }
        }
        is_satisfied(request, event)
    }
}

impl Default for ComboMatcher {
    fn default() -> Self {
        Self::new()
    }
}
