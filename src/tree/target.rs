//! Event target resolution
//!
//! A node can redirect the events raised beneath it by carrying a target
//! attribute. The value is either a component id (a plain decimal number)
//! or a free-form selector naming some other node.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::tree::document::NodeRef;

#[allow(clippy::expect_used)]
static COMPONENT_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9][0-9]*)$").expect("component id pattern should be valid regex")
});

/// Whether `value` is a component id: `0`, or digits without a leading zero
pub fn is_cid(value: &str) -> bool {
    COMPONENT_ID.is_match(value)
}

/// Where events beneath a node are sent
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Target {
    /// A component, by numeric id
    Component(u64),
    /// Anything else, passed through verbatim
    Selector(String),
}

impl Target {
    /// Classifies a target attribute value
    ///
    /// Ids too large for `u64` are kept as selectors.
    pub fn parse(value: &str) -> Self {
        if is_cid(value) {
            if let Ok(cid) = value.parse() {
                return Target::Component(cid);
            }
        }
        Target::Selector(value.to_string())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Component(cid) => write!(f, "component {}", cid),
            Target::Selector(selector) => write!(f, "selector {}", selector),
        }
    }
}

/// Target of the nearest enabled node carrying `attribute`, from `start`
/// upwards, stopping at `boundary` or a container root
pub fn resolve_target<'a>(
    start: NodeRef<'a>,
    attribute: &str,
    boundary: Option<NodeRef<'a>>,
) -> Option<Target> {
    let node = start.closest_binding(attribute, boundary)?;
    node.attribute(attribute).map(Target::parse)
}
