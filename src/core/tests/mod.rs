//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Matcher tests (empty, single-token and modifier paths)
//! - Parser tests (delimited and dotted forms)
//! - Conflict detection and keymap tests
//! - Validation tests
//! - Type tests (ComboRequest, KeyCombo, InputEvent)
//! - Property tests

#[cfg(test)]
mod keymap_tests;
