use std::cell::Cell;

use crate::tree::{closest_bound, find_bound_ancestor, Document, NodeId, TreeNode};

const BINDING: &str = "data-keydown";

struct Fixture {
    doc: Document,
    html: NodeId,
    view: NodeId,
    form: NodeId,
    fieldset: NodeId,
    input: NodeId,
}

/// html > view(root) > form > fieldset > input
fn fixture() -> Fixture {
    let mut doc = Document::new();
    let html = doc.add_root("html");
    let view = doc.append_child(html, "div").unwrap();
    let form = doc.append_child(view, "form").unwrap();
    let fieldset = doc.append_child(form, "fieldset").unwrap();
    let input = doc.append_child(fieldset, "input").unwrap();
    doc.mark_container_root(view).unwrap();

    Fixture { doc, html, view, form, fieldset, input }
}

fn resolve(f: &Fixture, start: NodeId, boundary: Option<NodeId>) -> Option<NodeId> {
    let start = f.doc.node(start).unwrap();
    let boundary = boundary.map(|b| f.doc.node(b).unwrap());
    start.closest_binding(BINDING, boundary).map(|n| n.id())
}

#[test]
fn test_start_node_matches_itself() {
    let mut f = fixture();
    f.doc.set_attribute(f.input, BINDING, "enter").unwrap();
    assert_eq!(resolve(&f, f.input, None), Some(f.input));
}

#[test]
fn test_start_node_matches_even_when_it_is_the_boundary() {
    let mut f = fixture();
    f.doc.set_attribute(f.input, BINDING, "enter").unwrap();
    assert_eq!(resolve(&f, f.input, Some(f.input)), Some(f.input));
}

#[test]
fn test_nearest_marked_ancestor_wins() {
    let mut f = fixture();
    f.doc.set_attribute(f.form, BINDING, "ctrl+s").unwrap();
    f.doc.set_attribute(f.fieldset, BINDING, "esc").unwrap();
    assert_eq!(resolve(&f, f.input, None), Some(f.fieldset));
}

#[test]
fn test_disabled_nodes_are_skipped() {
    let mut f = fixture();
    f.doc.set_attribute(f.form, BINDING, "ctrl+s").unwrap();
    f.doc.set_attribute(f.fieldset, BINDING, "esc").unwrap();
    f.doc.set_disabled(f.fieldset, true).unwrap();
    assert_eq!(resolve(&f, f.input, None), Some(f.form));
}

#[test]
fn test_disabled_start_node_is_skipped() {
    let mut f = fixture();
    f.doc.set_attribute(f.input, BINDING, "enter").unwrap();
    f.doc.set_disabled(f.input, true).unwrap();
    assert_eq!(resolve(&f, f.input, None), None);
}

#[test]
fn test_boundary_stops_search_without_testing_it() {
    let mut f = fixture();
    f.doc.set_attribute(f.fieldset, BINDING, "esc").unwrap();
    f.doc.set_attribute(f.form, BINDING, "ctrl+s").unwrap();
    assert_eq!(resolve(&f, f.input, Some(f.fieldset)), None);
}

#[test]
fn test_boundary_below_match_is_exclusive() {
    let mut f = fixture();
    f.doc.set_attribute(f.form, BINDING, "ctrl+s").unwrap();
    assert_eq!(resolve(&f, f.input, Some(f.form)), None);
    assert_eq!(resolve(&f, f.input, Some(f.view)), Some(f.form));
}

#[test]
fn test_container_root_is_not_escaped() {
    let mut f = fixture();
    f.doc.set_attribute(f.view, BINDING, "esc").unwrap();
    f.doc.set_attribute(f.html, BINDING, "esc").unwrap();
    assert_eq!(resolve(&f, f.input, None), None);
}

#[test]
fn test_marked_container_root_matches_as_start() {
    let mut f = fixture();
    f.doc.set_attribute(f.view, BINDING, "esc").unwrap();
    assert_eq!(resolve(&f, f.view, None), Some(f.view));
}

#[test]
fn test_top_of_tree_ends_search() {
    let f = fixture();
    assert_eq!(resolve(&f, f.input, None), None);
    assert_eq!(resolve(&f, f.html, None), None);
}

#[test]
fn test_unrelated_boundary_is_ignored() {
    let mut f = fixture();
    let sibling = f.doc.append_child(f.view, "aside").unwrap();
    f.doc.set_attribute(f.form, BINDING, "ctrl+s").unwrap();
    assert_eq!(resolve(&f, f.input, Some(sibling)), Some(f.form));
}

#[test]
fn test_find_bound_ancestor_with_custom_marker() {
    let mut f = fixture();
    f.doc.set_attribute(f.form, "data-submit", "save").unwrap();

    let start = f.doc.node(f.input).unwrap();
    let found = find_bound_ancestor(start, |n| n.attribute("data-submit") == Some("save"), None);
    assert_eq!(found.map(|n| n.id()), Some(f.form));
}

/// Minimal tree: node `i` has parent `parents[i]`
#[derive(Clone, Copy)]
struct Chain<'a> {
    parents: &'a [Option<usize>],
    roots: &'a [usize],
    disabled: &'a [usize],
    index: usize,
}

impl TreeNode for Chain<'_> {
    fn parent(&self) -> Option<Self> {
        let index = self.parents.get(self.index).copied().flatten()?;
        Some(Chain { index, ..*self })
    }

    fn is_disabled(&self) -> bool {
        self.disabled.contains(&self.index)
    }

    fn is_container_root(&self) -> bool {
        self.roots.contains(&self.index)
    }

    fn is_same_node(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

#[test]
fn test_walk_visits_each_node_once() {
    // 0 <- 1 <- 2 <- 3 <- 4
    let parents = [None, Some(0), Some(1), Some(2), Some(3)];
    let start = Chain { parents: &parents, roots: &[], disabled: &[], index: 4 };

    let visits = Cell::new(0);
    let found = closest_bound(
        start,
        |_| {
            visits.set(visits.get() + 1);
            false
        },
        |_| false,
    );

    assert!(found.is_none());
    assert_eq!(visits.get(), 5);
}

#[test]
fn test_predicates_are_independent() {
    let parents = [None, Some(0), Some(1), Some(2)];
    let start = Chain { parents: &parents, roots: &[1], disabled: &[2], index: 3 };

    // Disabled node 2 is passed over, container root 1 stops the walk
    let found = closest_bound(start, |n| n.index <= 2, |_| false);
    assert!(found.is_none());

    // Boundary predicate alone, without identity
    let start = Chain { parents: &parents, roots: &[], disabled: &[], index: 3 };
    let found = closest_bound(start, |n| n.index == 0, |n| n.index == 1);
    assert!(found.is_none());

    let found = closest_bound(start, |n| n.index == 0, |_| false);
    assert_eq!(found.map(|n| n.index), Some(0));
}
