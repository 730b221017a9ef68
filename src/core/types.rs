//! src/core/types.rs
//!
//! Core type definitions for key-combination matching
//!
//! This module defines the fundamental types used throughout the crate:
//! - `SystemModifier`: The six modifier tokens a combo may request
//! - `Modifier`: The four modifier flags an input event reports
//! - `InputEvent`: An immutable snapshot of a single key press
//! - `ComboRequest`: The ordered tokens of a user-authored combo string
//! - `KeyCombo`: A normalized signature used for conflict detection

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::normalizer::{canonical_of, canonicalize};

/// Modifier tokens recognised in a combo request
///
/// The declaration order is the order in which requested modifiers are
/// reported by [`ComboRequest::system_modifiers`]. `Cmd` and `Super` stay
/// distinct tokens here but read the meta flag of an event.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemModifier {
    Ctrl,
    Shift,
    Alt,
    Meta,
    Cmd,
    Super,
}

impl SystemModifier {
    /// Every system modifier, in recognition order
    pub const ALL: [SystemModifier; 6] = [
        SystemModifier::Ctrl,
        SystemModifier::Shift,
        SystemModifier::Alt,
        SystemModifier::Meta,
        SystemModifier::Cmd,
        SystemModifier::Super,
    ];

    /// Token spelling of this modifier
    pub fn as_str(self) -> &'static str {
        match self {
            SystemModifier::Ctrl => "ctrl",
            SystemModifier::Shift => "shift",
            SystemModifier::Alt => "alt",
            SystemModifier::Meta => "meta",
            SystemModifier::Cmd => "cmd",
            SystemModifier::Super => "super",
        }
    }

    /// Recognise a (canonicalized) token as a system modifier
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == token)
    }

    /// The event flag this modifier reads. `cmd` and `super` fold to meta.
    pub fn flag(self) -> Modifier {
        match self {
            SystemModifier::Ctrl => Modifier::Ctrl,
            SystemModifier::Shift => Modifier::Shift,
            SystemModifier::Alt => Modifier::Alt,
            SystemModifier::Meta | SystemModifier::Cmd | SystemModifier::Super => Modifier::Meta,
        }
    }

    /// Whether the event reports this modifier as held
    pub fn is_held(self, event: &InputEvent) -> bool {
        event.is_pressed(self.flag())
    }
}

impl fmt::Display for SystemModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modifier flags carried by an input event
///
/// Ordering is used to sort the modifiers of a [`KeyCombo`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Modifier {
    /// Control key
    Ctrl,
    /// Shift key
    Shift,
    /// Alt/Option key
    Alt,
    /// Meta/Command/Super key
    Meta,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Ctrl => write!(f, "CTRL"),
            Modifier::Shift => write!(f, "SHIFT"),
            Modifier::Alt => write!(f, "ALT"),
            Modifier::Meta => write!(f, "META"),
        }
    }
}

/// Snapshot of a single key press
///
/// Serialises with the field names keyboard events use on the web
/// (`key`, `ctrlKey`, `shiftKey`, `altKey`, `metaKey`) so recorded events
/// can be replayed from JSON.
///
/// # Example
/// ```
/// use key_combo_matcher::InputEvent;
///
/// let event = InputEvent::new("k").with_ctrl();
/// assert!(event.ctrl_key);
/// assert!(!event.shift_key);
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputEvent {
    /// Literal key value as reported by the platform (e.g. "k", "ArrowUp", " ")
    pub key: String,
    pub ctrl_key: bool,
    pub shift_key: bool,
    pub alt_key: bool,
    pub meta_key: bool,
}

impl InputEvent {
    /// Creates an event for `key` with no modifiers held
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt_key = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta_key = true;
        self
    }

    /// Reads the flag for `modifier`
    pub fn is_pressed(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Ctrl => self.ctrl_key,
            Modifier::Shift => self.shift_key,
            Modifier::Alt => self.alt_key,
            Modifier::Meta => self.meta_key,
        }
    }
}

/// Ordered tokens of a user-authored combo string
///
/// Tokens are stored canonicalized (lowercase kebab-case), including when
/// the request is deserialized. Duplicates are kept.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(from = "RawComboRequest")]
pub struct ComboRequest {
    tokens: Vec<String>,
}

/// Serialized form of a request, canonicalized on the way in
#[derive(Deserialize)]
struct RawComboRequest {
    tokens: Vec<String>,
}

impl From<RawComboRequest> for ComboRequest {
    fn from(raw: RawComboRequest) -> Self {
        Self::from_tokens(raw.tokens)
    }
}

impl ComboRequest {
    /// Builds a request from raw tokens, canonicalizing each one
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(|t| canonicalize(t.as_ref()))
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Requested system modifiers, in [`SystemModifier::ALL`] order
    ///
    /// Each modifier is reported once however many times it was requested.
    pub fn system_modifiers(&self) -> Vec<SystemModifier> {
        SystemModifier::ALL
            .into_iter()
            .filter(|m| self.tokens.iter().any(|t| t == m.as_str()))
            .collect()
    }

    /// Tokens left once system modifiers are removed, in request order
    pub fn residual_tokens(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .map(String::as_str)
            .filter(|t| SystemModifier::from_token(t).is_none())
            .collect()
    }

    /// The literal key the modifier path tests: the first residual token
    pub fn literal(&self) -> Option<&str> {
        self.residual_tokens().into_iter().next()
    }
}

impl fmt::Display for ComboRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join("+"))
    }
}

/// Normalized signature of a combo request
///
/// Requests with the same signature fire on the same canonical key press,
/// which is what conflict detection keys on. Modifiers are folded to the
/// event flag they read (`cmd`/`super` become meta), sorted and
/// de-duplicated; the literal key is folded to its canonical spelling.
///
/// # Example
/// ```
/// use key_combo_matcher::{ComboRequest, KeyCombo};
///
/// let a = KeyCombo::from_request(&ComboRequest::from_tokens(["cmd", "esc"]));
/// let b = KeyCombo::from_request(&ComboRequest::from_tokens(["escape", "meta"]));
/// assert_eq!(a, b);
///
/// // Two tokens and no modifier: can never fire
/// assert_eq!(KeyCombo::from_request(&ComboRequest::from_tokens(["k", "k"])), None);
/// ```
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct KeyCombo {
    /// Event flags that must be held
    pub modifiers: Vec<Modifier>,

    /// Canonical literal key, absent for modifier-only or empty requests
    pub key: Option<String>,
}

impl KeyCombo {
    /// Create a new KeyCombo with normalized data
    pub fn new(mut modifiers: Vec<Modifier>, key: Option<&str>) -> Self {
        modifiers.sort();
        modifiers.dedup();

        Self {
            modifiers,
            key: key.map(|k| canonical_of(&canonicalize(k)).to_string()),
        }
    }

    /// Computes the signature of a request, or `None` if it can never fire
    ///
    /// The signature follows the path the matcher takes:
    /// - no tokens: no modifiers and no key, firing on every press
    /// - one token: that token as a literal key, even when it names a
    ///   modifier (`cmd` keys on `meta`, `super` stays `super`)
    /// - several tokens: the requested modifier flags plus the first
    ///   residual token. Without a modifier or a residual token the request
    ///   never fires.
    pub fn from_request(request: &ComboRequest) -> Option<Self> {
        match request.tokens() {
            [] => Some(Self::new(Vec::new(), None)),
            [token] => Some(Self::new(Vec::new(), Some(token.as_str()))),
            _ => {
                let modifiers: Vec<Modifier> = request
                    .system_modifiers()
                    .into_iter()
                    .map(SystemModifier::flag)
                    .collect();
                let literal = request.literal()?;
                if modifiers.is_empty() {
                    return None;
                }
                Some(Self::new(modifiers, Some(literal)))
            }
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.modifiers.iter().map(|m| m.to_string()).collect();
        if let Some(key) = &self.key {
            parts.push(match key.as_str() {
                " " => "space".to_string(),
                other => other.to_string(),
            });
        }

        if parts.is_empty() {
            write!(f, "<any key>")
        } else {
            write!(f, "{}", parts.join("+"))
        }
    }
}

/// A combo request bound to a named action
///
/// # Example
/// ```
/// use key_combo_matcher::{Binding, ComboRequest};
///
/// let binding = Binding::new(ComboRequest::from_tokens(["ctrl", "s"]), "save");
/// assert_eq!(binding.to_string(), "ctrl+s → save");
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Binding {
    /// The request that triggers this binding
    pub request: ComboRequest,

    /// Action name reported when the binding fires (e.g. "save", "search")
    pub action: String,
}

impl Binding {
    pub fn new(request: ComboRequest, action: impl Into<String>) -> Self {
        Self {
            request,
            action: action.into(),
        }
    }

    /// Normalized signature of this binding's request, `None` if it never
    /// fires
    pub fn key_combo(&self) -> Option<KeyCombo> {
        KeyCombo::from_request(&self.request)
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.request, self.action)
    }
}
