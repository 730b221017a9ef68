//! Binding conflict detection
//!
//! Two bindings conflict when their requests fire on exactly the same
//! events, i.e. their normalized [`KeyCombo`] signatures are equal. This
//! folds together spellings a reader might not notice are the same:
//! - `cmd+s`, `super+s` and `meta+s`
//! - `esc` and `escape`, `space` and `spacebar`
//! - `shift+ctrl+k` and `ctrl+shift+k`
//!
//! Requests that can never fire (`k+k`, `ctrl+shift`) have no signature and
//! are kept aside instead of being reported as conflicts.
//!
//! # Performance
//! - Add binding: O(1) average case
//! - Check conflict: O(1) average case
//! - List all conflicts: O(n) where n = number of unique signatures

use std::collections::HashMap;

use crate::core::types::{Binding, KeyCombo};

/// Detects binding conflicts using HashMap-based indexing.
///
/// Keys are KeyCombos and values are all bindings with that signature. A
/// conflict exists when any value holds more than one binding. Conflicts
/// are reported in the order their signature was first seen.
pub struct ConflictDetector {
    /// Maps KeyCombo to all bindings with that signature.
    bindings: HashMap<KeyCombo, Vec<Binding>>,

    /// Signatures in first-seen order
    order: Vec<KeyCombo>,

    /// Bindings whose request never fires
    never_firing: Vec<Binding>,
}

/// Represents a detected conflict between bindings.
#[derive(Clone, Debug, PartialEq)]
pub struct Conflict {
    /// The shared signature
    pub key_combo: KeyCombo,

    /// All bindings with this signature (always 2 or more)
    pub conflicting_bindings: Vec<Binding>,
}

impl ConflictDetector {
    /// Creates a new empty conflict detector.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            order: Vec::new(),
            never_firing: Vec::new(),
        }
    }

    /// Adds a binding to the detector.
    pub fn add_binding(&mut self, binding: Binding) {
        let Some(key_combo) = binding.key_combo() else {
            self.never_firing.push(binding);
            return;
        };
        if !self.bindings.contains_key(&key_combo) {
            self.order.push(key_combo.clone());
        }
        self.bindings.entry(key_combo).or_default().push(binding);
    }

    /// Finds all conflicts (signatures with 2 or more bindings).
    pub fn find_conflicts(&self) -> Vec<Conflict> {
        self.order
            .iter()
            .filter_map(|key_combo| {
                self.bindings
                    .get(key_combo)
                    .filter(|bindings| bindings.len() > 1)
                    .map(|bindings| Conflict {
                        key_combo: key_combo.clone(),
                        conflicting_bindings: bindings.clone(),
                    })
            })
            .collect()
    }

    /// Returns true if this KeyCombo has 2 or more bindings.
    pub fn has_conflict(&self, key_combo: &KeyCombo) -> bool {
        self.bindings
            .get(key_combo)
            .is_some_and(|bindings| bindings.len() > 1)
    }

    /// Bindings that can never fire, in the order they were added.
    pub fn never_firing(&self) -> &[Binding] {
        &self.never_firing
    }

    /// Returns the total number of bindings added, including ones that
    /// never fire.
    pub fn total_bindings(&self) -> usize {
        self.bindings.values().map(|v| v.len()).sum::<usize>() + self.never_firing.len()
    }
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self::new()
    }
}
