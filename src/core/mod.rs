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

//! src/core/mod.rs
//!
//! Key-combination matching
//!
//! This module contains the data structures and algorithms for deciding
//! whether a key press satisfies a user-authored combo, including:
//! - Type definitions for events, requests and signatures
//! - Key name normalisation and the alias table
//! - Combo string parsing
//! - The matcher itself
//! - Optional strict validation, conflict detection and keymaps
//!
//! Everything here is pure and synchronous, so it can be unit tested
//! without any windowing system or event loop.

pub mod conflict;
pub mod keymap;
pub mod matcher;
pub mod normalizer;
pub mod parser;
pub mod types;
pub mod validator;

pub use conflict::{Conflict, ConflictDetector};
pub use keymap::Keymap;
pub use matcher::{is_satisfied, ComboMatcher};
pub use types::*;
pub use validator::{validate_request, ValidationError};

#[cfg(test)]
mod tests;
