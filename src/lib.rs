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

//! Key Combo Matcher
//!
//! Declarative key-combination matching: decide whether a live key press
//! satisfies a combo written as text ("ctrl+shift+k", "cmd+s", "esc"), and
//! find the nearest ancestor node that binds a handler without escaping a
//! boundary.
//!
//! # Features
//!
//! - **Normalisation:** "ArrowUp", "arrowUp" and "arrow_up" compare equal
//! - **Aliases:** "esc" matches "Escape", "space" matches " ", "cmd" is meta
//! - **At-least modifiers:** requested modifiers must be held, others may be
//! - **Keymaps:** JSON-declared bindings with conflict detection
//! - **Ancestor resolution:** boundary-limited walk over any tree
//!
//! # Architecture
//!
//! - **`core`:** Matching logic (types, normaliser, parser, matcher,
//!   validation, conflicts, keymaps)
//! - **`tree`:** Ancestor binding resolution and an arena-backed tree
//! - **`config`:** Keymap files
//!
//! Matching and tree walks are pure, synchronous and total: bad input gives
//! `false` or `None`, never an error or a panic.
//!
//! # Examples
//!
//! ## Matching a combo string
//!
//! ```
//! use key_combo_matcher::{ComboMatcher, InputEvent};
//!
//! let matcher = ComboMatcher::new();
//! let event = InputEvent::new("S").with_meta();
//!
//! assert!(matcher.matches("cmd+s", &event));
//! assert!(matcher.matches("super+s", &event));
//! assert!(!matcher.matches("ctrl+s", &event));
//! ```
//!
//! ## Dispatching through a keymap
//!
//! ```
//! use key_combo_matcher::{ComboMatcher, InputEvent, Keymap};
//!
//! let mut keymap = Keymap::new(ComboMatcher::new());
//! keymap.bind("ctrl+s", "save")?;
//! keymap.bind("esc", "close")?;
//!
//! let fired = keymap.dispatch(&InputEvent::new("Escape"));
//! assert_eq!(fired[0].action, "close");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod core;
pub mod tree;

// Re-export commonly used types for convenience
pub use self::core::{
    is_satisfied, Binding, ComboMatcher, ComboRequest, InputEvent, KeyCombo, Keymap, Modifier,
    SystemModifier,
};
pub use tree::{find_bound_ancestor, TreeNode};
