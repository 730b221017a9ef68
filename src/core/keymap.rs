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

//! src/core/keymap.rs
//!
//! Ordered table of bindings dispatched against input events

use tracing::{debug, warn};

use crate::core::conflict::{Conflict, ConflictDetector};
use crate::core::matcher::ComboMatcher;
use crate::core::types::{Binding, InputEvent};
use crate::core::validator::{validate_request, ValidationError};

/// Bindings in declaration order, plus the matcher settings used to parse
/// and match them
#[derive(Clone, Debug, Default)]
pub struct Keymap {
    matcher: ComboMatcher,
    bindings: Vec<Binding>,
}

impl Keymap {
    pub fn new(matcher: ComboMatcher) -> Self {
        Self {
            matcher,
            bindings: Vec::new(),
        }
    }

    pub fn matcher(&self) -> &ComboMatcher {
        &self.matcher
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Parses `combo` with the keymap's delimiter and appends the binding
    ///
    /// A strict keymap validates the request first and refuses bindings
    /// that would never fire as written or would ignore a literal key.
    pub fn bind(&mut self, combo: &str, action: &str) -> Result<&Binding, ValidationError> {
        let request = self.matcher.parse(combo);
        if self.matcher.is_strict() {
            validate_request(&request)?;
        }

        debug!(combo, %request, action, "binding added");
        let index = self.bindings.len();
        self.bindings.push(Binding::new(request, action));
        Ok(&self.bindings[index])
    }

    /// All bindings satisfied by `event`, in declaration order
    pub fn dispatch(&self, event: &InputEvent) -> Vec<&Binding> {
        let fired: Vec<&Binding> = self
            .bindings
            .iter()
            .filter(|b| self.matcher.matches_request(&b.request, event))
            .collect();

        debug!(key = %event.key, fired = fired.len(), "event dispatched");
        fired
    }

    /// First binding satisfied by `event`
    pub fn first_match(&self, event: &InputEvent) -> Option<&Binding> {
        self.bindings
            .iter()
            .find(|b| self.matcher.matches_request(&b.request, event))
    }

    /// Bindings whose requests can never fire, in declaration order
    pub fn never_firing(&self) -> Vec<&Binding> {
        self.bindings
            .iter()
            .filter(|b| b.key_combo().is_none())
            .collect()
    }

    /// Bindings whose requests share a signature
    pub fn conflicts(&self) -> Vec<Conflict> {
        let mut detector = ConflictDetector::new();
        for binding in &self.bindings {
            detector.add_binding(binding.clone());
        }

        for binding in detector.never_firing() {
            warn!(combo = %binding.request, action = %binding.action, "binding never fires");
        }

        let conflicts = detector.find_conflicts();
        for conflict in &conflicts {
            warn!(
                combo = %conflict.key_combo,
                bindings = conflict.conflicting_bindings.len(),
                "conflicting bindings"
            );
        }
        conflicts
    }
}
