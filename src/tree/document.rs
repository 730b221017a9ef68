//! Arena-backed node tree
//!
//! A small element tree (tag, attributes, disabled flag, parent link) for
//! driving ancestor resolution without a real UI toolkit. Nodes are owned
//! by the [`Document`]; callers hold [`NodeId`]s and borrow [`NodeRef`]
//! handles to read them.

use std::collections::BTreeMap;
use std::fmt;
use std::ptr;

use thiserror::Error;

use crate::tree::{closest_bound, TreeNode};

/// Attribute marking a container root unless the document says otherwise
pub const DEFAULT_ROOT_ATTRIBUTE: &str = "data-view-root";

/// Errors from building a document
#[derive(Debug, Error, PartialEq)]
pub enum TreeError {
    /// The id does not belong to this document
    #[error("Unknown node id {0}")]
    UnknownNode(usize),
}

/// Index of a node within its document
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
struct NodeData {
    tag: String,
    parent: Option<NodeId>,
    attributes: BTreeMap<String, String>,
    disabled: bool,
}

/// Owner of a node tree
#[derive(Debug)]
pub struct Document {
    nodes: Vec<NodeData>,
    root_attribute: String,
}

impl Document {
    /// Empty document using [`DEFAULT_ROOT_ATTRIBUTE`] for container roots
    pub fn new() -> Self {
        Self::with_root_attribute(DEFAULT_ROOT_ATTRIBUTE)
    }

    /// Empty document whose container roots carry `attribute`
    pub fn with_root_attribute(attribute: &str) -> Self {
        Self {
            nodes: Vec::new(),
            root_attribute: attribute.to_string(),
        }
    }

    pub fn root_attribute(&self) -> &str {
        &self.root_attribute
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a parentless node
    pub fn add_root(&mut self, tag: &str) -> NodeId {
        self.push(tag, None)
    }

    /// Adds a node under `parent`
    pub fn append_child(&mut self, parent: NodeId, tag: &str) -> Result<NodeId, TreeError> {
        self.data(parent)?;
        Ok(self.push(tag, Some(parent)))
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), TreeError> {
        self.data_mut(id)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<(), TreeError> {
        self.data_mut(id)?.attributes.remove(name);
        Ok(())
    }

    pub fn set_disabled(&mut self, id: NodeId, disabled: bool) -> Result<(), TreeError> {
        self.data_mut(id)?.disabled = disabled;
        Ok(())
    }

    /// Marks `id` as a container root
    pub fn mark_container_root(&mut self, id: NodeId) -> Result<(), TreeError> {
        let attribute = self.root_attribute.clone();
        self.set_attribute(id, &attribute, "")
    }

    /// Handle for reading `id`, if it belongs to this document
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.nodes.get(id.0).map(|_| NodeRef { doc: self, id })
    }

    fn push(&mut self, tag: &str, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            tag: tag.to_string(),
            parent,
            attributes: BTreeMap::new(),
            disabled: false,
        });
        id
    }

    fn data(&self, id: NodeId) -> Result<&NodeData, TreeError> {
        self.nodes.get(id.0).ok_or(TreeError::UnknownNode(id.0))
    }

    fn data_mut(&mut self, id: NodeId) -> Result<&mut NodeData, TreeError> {
        self.nodes.get_mut(id.0).ok_or(TreeError::UnknownNode(id.0))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed handle to a node of a [`Document`]
#[derive(Clone, Copy, Debug)]
pub struct NodeRef<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tag(&self) -> &'a str {
        self.data().map(|d| d.tag.as_str()).unwrap_or_default()
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.data()?.attributes.get(name).map(String::as_str)
    }

    /// Nearest enabled node carrying `attribute`, from this node upwards,
    /// stopping at `boundary` or a container root
    pub fn closest_binding(&self, attribute: &str, boundary: Option<NodeRef<'a>>) -> Option<NodeRef<'a>> {
        closest_bound(
            *self,
            |node| node.has_attribute(attribute),
            |node| boundary.is_some_and(|b| b.is_same_node(node)),
        )
    }

    fn data(&self) -> Option<&'a NodeData> {
        self.doc.nodes.get(self.id.0)
    }
}

impl TreeNode for NodeRef<'_> {
    fn parent(&self) -> Option<Self> {
        let parent = self.data()?.parent?;
        self.doc.node(parent)
    }

    fn is_disabled(&self) -> bool {
        self.data().is_some_and(|d| d.disabled)
    }

    fn is_container_root(&self) -> bool {
        self.has_attribute(&self.doc.root_attribute)
    }

    fn is_same_node(&self, other: &Self) -> bool {
        ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_child_to_unknown_parent() {
        let mut doc = Document::new();
        assert_eq!(
            doc.append_child(NodeId(3), "div"),
            Err(TreeError::UnknownNode(3))
        );
    }

    #[test]
    fn test_attributes_round_trip() {
        let mut doc = Document::new();
        let root = doc.add_root("div");
        doc.set_attribute(root, "data-click", "open").unwrap();

        let node = doc.node(root).unwrap();
        assert_eq!(node.tag(), "div");
        assert_eq!(node.attribute("data-click"), Some("open"));

        doc.remove_attribute(root, "data-click").unwrap();
        assert!(!doc.node(root).unwrap().has_attribute("data-click"));
    }

    #[test]
    fn test_identity_is_per_document() {
        let mut a = Document::new();
        let mut b = Document::new();
        let a_root = a.add_root("div");
        let b_root = b.add_root("div");

        let a_node = a.node(a_root).unwrap();
        let b_node = b.node(b_root).unwrap();
        assert_eq!(a_root, b_root);
        assert!(!a_node.is_same_node(&b_node));
        assert!(a_node.is_same_node(&a.node(a_root).unwrap()));
    }

    #[test]
    fn test_custom_root_attribute() {
        let mut doc = Document::with_root_attribute("data-component");
        let root = doc.add_root("section");
        doc.mark_container_root(root).unwrap();

        let node = doc.node(root).unwrap();
        assert!(node.has_attribute("data-component"));
        assert!(node.is_container_root());
    }
}
