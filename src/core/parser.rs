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

//! src/core/parser.rs
//!
//! Combo string parser
//!
//! Turns a user-authored combo string into a [`ComboRequest`]. Two surface
//! forms are supported:
//! - Delimited: `"ctrl+shift+k"` with a configurable delimiter (default `+`)
//! - Dotted attribute path: `"keydown[form].ctrl.k"`, where only the part
//!   after the last `]` names keys and `.` separates them
//!
//! # Architecture
//! The tokenizer uses nom combinators. Runs of delimiters collapse, and
//! leading or trailing delimiters are ignored, so no token is ever empty.
//! Parsing is total: any input yields a request (possibly empty), never an
//! error.

use nom::{
    bytes::complete::take_till1,
    character::complete::char,
    multi::{many0, many1, separated_list0},
    sequence::delimited,
    IResult, Parser,
};

use crate::core::types::ComboRequest;

/// Default token delimiter for combo strings
pub const DEFAULT_DELIMITER: char = '+';

/// Split `input` into non-empty segments separated by `delimiter`
///
/// Returns the segments and any unconsumed input (always empty for `&str`
/// input, since every character is either a delimiter or part of a segment).
pub fn split_segments(input: &str, delimiter: char) -> IResult<&str, Vec<&str>> {
    delimited(
        many0(char(delimiter)),
        separated_list0(
            many1(char(delimiter)),
            take_till1(move |c: char| c == delimiter),
        ),
        many0(char(delimiter)),
    )
    .parse(input)
}

/// Parse a delimited combo string
///
/// Each segment is canonicalized (lowercase kebab-case). A segment that is a
/// single space is kept: it names the space key.
///
/// # Example
/// ```
/// use key_combo_matcher::core::parser::parse_combo;
///
/// let request = parse_combo("Ctrl+Shift+K", '+');
/// assert_eq!(request.tokens(), ["ctrl", "shift", "k"]);
/// ```
pub fn parse_combo(raw: &str, delimiter: char) -> ComboRequest {
    match split_segments(raw, delimiter) {
        Ok((_, segments)) => ComboRequest::from_tokens(segments),
        Err(_) => ComboRequest::default(),
    }
}

/// Parse the dotted attribute-path form
///
/// Only the text after the last `]` is considered; it is split on `.`.
/// Absent or empty input yields an empty request.
///
/// # Example
/// ```
/// use key_combo_matcher::core::parser::parse_dotted_key;
///
/// let request = parse_dotted_key("keydown[data.field].ctrl.k");
/// assert_eq!(request.tokens(), ["ctrl", "k"]);
/// ```
pub fn parse_dotted_key(raw: &str) -> ComboRequest {
    let tail = match raw.rsplit_once(']') {
        Some((_, tail)) => tail,
        None => raw,
    };
    parse_combo(tail, '.')
}
