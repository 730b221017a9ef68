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

//! Strict combo request validation
//!
//! The matcher itself accepts anything. This module is for callers who want
//! malformed combos reported when they are declared rather than silently
//! never firing:
//! - More than one literal key after modifiers are removed ("ctrl+k+j")
//! - Several tokens that are all modifiers ("ctrl+shift")
//! - Several tokens with no modifier among them ("k+k")
//! - Tokens containing control characters

use thiserror::Error;

use crate::core::types::ComboRequest;

/// Validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// More than one non-modifier token; only the first would ever be tested
    #[error("Combo names more than one literal key: {}", .0.join(", "))]
    MultipleLiteralKeys(Vec<String>),

    /// Several modifiers and no key; the modifier path needs a literal
    #[error("Combo '{0}' names modifiers but no key")]
    MissingKey(String),

    /// Several tokens and no modifier; only a single bare key is matched
    #[error("Combo '{0}' names several keys without a modifier")]
    MissingModifier(String),

    /// Token contains characters no key name can have
    #[error("Invalid key token '{}'", .0.escape_debug())]
    InvalidToken(String),
}

/// Validates a single token
pub fn validate_token(token: &str) -> Result<(), ValidationError> {
    if token.chars().any(char::is_control) {
        return Err(ValidationError::InvalidToken(token.to_string()));
    }
    Ok(())
}

/// Validates a complete request
///
/// Performs all checks:
/// - Token characters
/// - At most one literal key alongside modifiers
/// - A request of several tokens has both a modifier and a key
pub fn validate_request(request: &ComboRequest) -> Result<(), ValidationError> {
    for token in request.tokens() {
        validate_token(token)?;
    }

    // Repeating the same literal is harmless
    let mut literals = request.residual_tokens();
    let mut seen = Vec::with_capacity(literals.len());
    literals.retain(|t| {
        let first = !seen.contains(t);
        seen.push(*t);
        first
    });
    if literals.len() > 1 {
        return Err(ValidationError::MultipleLiteralKeys(
            literals.into_iter().map(str::to_string).collect(),
        ));
    }

    if request.len() > 1 {
        if literals.is_empty() {
            return Err(ValidationError::MissingKey(request.to_string()));
        }
        if request.system_modifiers().is_empty() {
            return Err(ValidationError::MissingModifier(request.to_string()));
        }
    }

    Ok(())
}
