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

//! src/tree/mod.rs
//!
//! Boundary-limited ancestor binding resolution
//!
//! Finds the nearest node, starting from a given node and walking up
//! through its ancestors, that carries a marker and is not disabled. The
//! walk stops without a result when it reaches:
//! - the top of the tree (no parent)
//! - a caller-supplied boundary node
//! - a container root, the top-level node of a logical document
//!
//! The start node is always tested first, so it can match even when it is
//! itself the boundary. Boundary and container-root nodes reached by
//! ascending are never tested.
//!
//! The walk only needs [`TreeNode`], so it works over any tree
//! representation. [`document`] provides an arena-backed one.

pub mod document;
pub mod target;

pub use document::{Document, NodeId, NodeRef, TreeError};
pub use target::{is_cid, Target};

use tracing::trace;

/// Read-only view of a node in a tree
///
/// Implementations are cheap handles (references or ids); the walk clones
/// nothing but the handles returned by [`TreeNode::parent`].
pub trait TreeNode: Sized {
    /// The parent node, or `None` at the top of the tree
    fn parent(&self) -> Option<Self>;

    /// Disabled nodes never satisfy a search, even when marked
    fn is_disabled(&self) -> bool;

    /// Whether this node is the root of a logical document or component
    fn is_container_root(&self) -> bool;

    /// Node identity, not structural equality
    fn is_same_node(&self, other: &Self) -> bool;
}

/// Nearest enabled node satisfying `has_marker`, from `start` upwards
///
/// `is_boundary` is consulted for every ancestor reached; the first one it
/// accepts ends the search. Each node is visited at most once, so the walk
/// is bounded by the depth of `start`.
pub fn closest_bound<N, M, B>(start: N, has_marker: M, is_boundary: B) -> Option<N>
where
    N: TreeNode,
    M: Fn(&N) -> bool,
    B: Fn(&N) -> bool,
{
    let mut current = start;
    loop {
        if has_marker(&current) && !current.is_disabled() {
            return Some(current);
        }

        let parent = current.parent()?;
        if is_boundary(&parent) {
            trace!("ancestor walk stopped at boundary");
            return None;
        }
        if parent.is_container_root() {
            trace!("ancestor walk stopped at container root");
            return None;
        }
        current = parent;
    }
}

/// [`closest_bound`] with an optional boundary node compared by identity
///
/// # Example
/// ```
/// use key_combo_matcher::tree::{find_bound_ancestor, Document};
///
/// let mut doc = Document::new();
/// let root = doc.add_root("main");
/// let form = doc.append_child(root, "form")?;
/// let input = doc.append_child(form, "input")?;
/// doc.set_attribute(form, "data-keydown", "ctrl+s")?;
///
/// let start = doc.node(input).ok_or("missing node")?;
/// let found = find_bound_ancestor(start, |n| n.has_attribute("data-keydown"), None);
/// assert_eq!(found.map(|n| n.id()), Some(form));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn find_bound_ancestor<N, M>(start: N, has_marker: M, boundary: Option<&N>) -> Option<N>
where
    N: TreeNode,
    M: Fn(&N) -> bool,
{
    closest_bound(start, has_marker, |node| {
        boundary.is_some_and(|b| b.is_same_node(node))
    })
}

#[cfg(test)]
mod tests;
