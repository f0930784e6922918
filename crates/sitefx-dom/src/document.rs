#![forbid(unsafe_code)]

//! Element arena and document-order queries.
//!
//! Elements live in an append-only arena; a [`NodeId`] stays valid for the
//! document's lifetime. The tree starts as `html > body` and grows by
//! creating detached elements and attaching them with [`Document::append_child`]
//! or [`Document::prepend_child`].
//!
//! # Invariants
//!
//! 1. Node ids are unique and never reused.
//! 2. An element has at most one parent; attaching detaches from any previous
//!    parent first.
//! 3. [`Document::descendants`] yields pre-order (document order), excluding
//!    the root of the walk itself.
//! 4. Focus only ever points at an attached, focusable element (enforced by
//!    [`Document::focus`]).

use std::collections::BTreeMap;

/// Unique identifier for an element in the arena.
pub type NodeId = usize;

/// One element: tag, attributes, classes, and inline style properties.
#[derive(Debug, Clone, Default)]
struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// The element tree a behavior layer operates on.
///
/// Mirrors the small slice of DOM semantics the controllers need: attribute
/// and class mutation, ancestor/descendant queries, and a single focused
/// element. Construction starts with an `html` root and a `body` child.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Element>,
    root: NodeId,
    body: NodeId,
    active: Option<NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document containing only `html > body`.
    #[must_use]
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: 0,
            body: 0,
            active: None,
        };
        let root = doc.create_element("html");
        let body = doc.create_element("body");
        doc.root = root;
        doc.body = body;
        doc.append_child(root, body);
        doc
    }

    /// The `html` root element.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The `body` element.
    #[inline]
    #[must_use]
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Create a detached element with the given tag.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Element {
            tag: tag.to_owned(),
            ..Element::default()
        });
        id
    }

    /// Attach `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
    }

    /// Attach `child` as the first child of `parent`.
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.insert(0, child);
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(prev) = self.nodes[child].parent.take() {
            self.nodes[prev].children.retain(|&c| c != child);
        }
    }

    /// Tag name of an element.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> &str {
        &self.nodes[id].tag
    }

    /// Parent of an element, if attached.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    /// Children of an element in document order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    /// True when the element is reachable from the `html` root.
    #[must_use]
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut cur = id;
        loop {
            if cur == self.root {
                return true;
            }
            match self.nodes[cur].parent {
                Some(p) => cur = p,
                None => return false,
            }
        }
    }

    /// Inclusive ancestor test: true when `node` is `ancestor` or below it.
    #[must_use]
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cur = node;
        loop {
            if cur == ancestor {
                return true;
            }
            match self.nodes[cur].parent {
                Some(p) => cur = p,
                None => return false,
            }
        }
    }

    /// Nearest inclusive ancestor matching `pred`.
    #[must_use]
    pub fn closest<F>(&self, start: NodeId, pred: F) -> Option<NodeId>
    where
        F: Fn(&Self, NodeId) -> bool,
    {
        let mut cur = Some(start);
        while let Some(id) = cur {
            if pred(self, id) {
                return Some(id);
            }
            cur = self.nodes[id].parent;
        }
        None
    }

    /// Pre-order walk of everything below `root` (excluding `root` itself).
    #[must_use]
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[root].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id].children.iter().rev().copied());
        }
        out
    }

    /// All descendants of `root` with the given tag, in document order.
    #[must_use]
    pub fn all_by_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| self.tag(id) == tag)
            .collect()
    }

    /// First descendant of `root` with the given tag.
    #[must_use]
    pub fn first_by_tag(&self, root: NodeId, tag: &str) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|&id| self.tag(id) == tag)
    }

    /// All descendants of `root` carrying the given class, in document order.
    #[must_use]
    pub fn all_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| self.class_contains(id, class))
            .collect()
    }

    /// First descendant of `root` carrying the given class.
    #[must_use]
    pub fn first_by_class(&self, root: NodeId, class: &str) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|&id| self.class_contains(id, class))
    }

    /// Attribute value, if set.
    #[must_use]
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes[id].attributes.get(name).map(String::as_str)
    }

    /// True when the attribute is present (any value).
    #[must_use]
    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.nodes[id].attributes.contains_key(name)
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        self.nodes[id]
            .attributes
            .insert(name.to_owned(), value.to_owned());
    }

    /// Remove an attribute if present.
    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        self.nodes[id].attributes.remove(name);
    }

    /// True when the element's class list contains `class`.
    #[must_use]
    pub fn class_contains(&self, id: NodeId, class: &str) -> bool {
        self.nodes[id].classes.iter().any(|c| c == class)
    }

    /// Add a class if absent.
    pub fn class_add(&mut self, id: NodeId, class: &str) {
        if !self.class_contains(id, class) {
            self.nodes[id].classes.push(class.to_owned());
        }
    }

    /// Remove a class if present.
    pub fn class_remove(&mut self, id: NodeId, class: &str) {
        self.nodes[id].classes.retain(|c| c != class);
    }

    /// Force a class on or off (`classList.toggle(name, force)`).
    pub fn class_set(&mut self, id: NodeId, class: &str, on: bool) {
        if on {
            self.class_add(id, class);
        } else {
            self.class_remove(id, class);
        }
    }

    /// Inline style property value, if set.
    #[must_use]
    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.nodes[id].styles.get(property).map(String::as_str)
    }

    /// Set an inline style property.
    pub fn style_set(&mut self, id: NodeId, property: &str, value: &str) {
        self.nodes[id]
            .styles
            .insert(property.to_owned(), value.to_owned());
    }

    /// The element currently holding focus, if any.
    #[inline]
    #[must_use]
    pub fn active_element(&self) -> Option<NodeId> {
        self.active
    }

    /// Move focus to `id`. No-op unless the element is attached and focusable.
    pub fn focus(&mut self, id: NodeId) {
        if crate::focus::is_focusable(self, id) {
            self.active = Some(id);
        }
    }

    /// Clear focus.
    pub fn blur(&mut self) {
        self.active = None;
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_document_is_html_body() {
        let doc = Document::new();
        assert_eq!(doc.tag(doc.root()), "html");
        assert_eq!(doc.tag(doc.body()), "body");
        assert_eq!(doc.parent(doc.body()), Some(doc.root()));
        assert_eq!(doc.active_element(), None);
    }

    #[test]
    fn append_and_prepend_order() {
        let mut doc = Document::new();
        let body = doc.body();
        let a = doc.create_element("div");
        let b = doc.create_element("div");
        let c = doc.create_element("div");
        doc.append_child(body, a);
        doc.append_child(body, b);
        doc.prepend_child(body, c);
        assert_eq!(doc.children(body), &[c, a, b]);
    }

    #[test]
    fn reattach_moves_element() {
        let mut doc = Document::new();
        let body = doc.body();
        let a = doc.create_element("div");
        let b = doc.create_element("div");
        doc.append_child(body, a);
        doc.append_child(body, b);
        doc.append_child(b, a);
        assert_eq!(doc.children(body), &[b]);
        assert_eq!(doc.parent(a), Some(b));
    }

    #[test]
    fn descendants_pre_order() {
        let mut doc = Document::new();
        let body = doc.body();
        let nav = doc.create_element("nav");
        let ul = doc.create_element("ul");
        let li = doc.create_element("li");
        let a = doc.create_element("a");
        doc.append_child(body, nav);
        doc.append_child(nav, ul);
        doc.append_child(ul, li);
        doc.append_child(li, a);
        assert_eq!(doc.descendants(nav), vec![ul, li, a]);
        assert_eq!(doc.first_by_tag(nav, "a"), Some(a));
    }

    #[test]
    fn contains_is_inclusive() {
        let mut doc = Document::new();
        let body = doc.body();
        let div = doc.create_element("div");
        doc.append_child(body, div);
        assert!(doc.contains(div, div));
        assert!(doc.contains(body, div));
        assert!(!doc.contains(div, body));
    }

    #[test]
    fn detached_elements_are_not_attached() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        assert!(!doc.is_attached(div));
        let body = doc.body();
        doc.append_child(body, div);
        assert!(doc.is_attached(div));
    }

    #[test]
    fn class_set_forces_state() {
        let mut doc = Document::new();
        let body = doc.body();
        doc.class_set(body, "is-ready", true);
        doc.class_set(body, "is-ready", true);
        assert!(doc.class_contains(body, "is-ready"));
        doc.class_set(body, "is-ready", false);
        assert!(!doc.class_contains(body, "is-ready"));
    }

    #[test]
    fn class_add_is_idempotent() {
        let mut doc = Document::new();
        let body = doc.body();
        doc.class_add(body, "x");
        doc.class_add(body, "x");
        doc.class_remove(body, "x");
        assert!(!doc.class_contains(body, "x"));
    }

    #[test]
    fn attributes_round_trip() {
        let mut doc = Document::new();
        let body = doc.body();
        assert_eq!(doc.attr(body, "id"), None);
        doc.set_attr(body, "id", "main");
        assert_eq!(doc.attr(body, "id"), Some("main"));
        assert!(doc.has_attr(body, "id"));
        doc.remove_attr(body, "id");
        assert!(!doc.has_attr(body, "id"));
    }

    #[test]
    fn closest_walks_ancestors() {
        let mut doc = Document::new();
        let body = doc.body();
        let a = doc.create_element("a");
        let span = doc.create_element("span");
        doc.append_child(body, a);
        doc.append_child(a, span);
        assert_eq!(doc.closest(span, |d, n| d.tag(n) == "a"), Some(a));
        assert_eq!(doc.closest(span, |d, n| d.tag(n) == "nav"), None);
    }

    #[test]
    fn focus_rejects_non_focusable() {
        let mut doc = Document::new();
        let body = doc.body();
        let div = doc.create_element("div");
        doc.append_child(body, div);
        doc.focus(div);
        assert_eq!(doc.active_element(), None);

        let a = doc.create_element("a");
        doc.set_attr(a, "href", "index.html");
        doc.append_child(body, a);
        doc.focus(a);
        assert_eq!(doc.active_element(), Some(a));
        doc.blur();
        assert_eq!(doc.active_element(), None);
    }

    #[test]
    fn focus_rejects_detached() {
        let mut doc = Document::new();
        let a = doc.create_element("a");
        doc.set_attr(a, "href", "index.html");
        doc.focus(a);
        assert_eq!(doc.active_element(), None);
    }

    /// Recursive pre-order, as the oracle for `descendants`.
    fn walk(doc: &Document, id: NodeId, out: &mut Vec<NodeId>) {
        for &c in doc.children(id) {
            out.push(c);
            walk(doc, c, out);
        }
    }

    proptest! {
        /// Random attach sequences keep every parent/child link consistent,
        /// every node reachable from the root, ids stable, and `descendants`
        /// equal to the recursive pre-order.
        #[test]
        fn tree_links_stay_consistent(
            ops in proptest::collection::vec((0usize..64, any::<bool>()), 1..64),
        ) {
            let mut doc = Document::new();
            let mut ids = vec![doc.body()];
            for (i, (parent_pick, prepend)) in ops.into_iter().enumerate() {
                let parent = ids[parent_pick % ids.len()];
                let child = doc.create_element("div");
                doc.set_attr(child, "data-n", &i.to_string());
                if prepend {
                    doc.prepend_child(parent, child);
                } else {
                    doc.append_child(parent, child);
                }
                ids.push(child);
            }

            let root = doc.root();
            for (i, &id) in ids.iter().enumerate() {
                for &c in doc.children(id) {
                    prop_assert_eq!(doc.parent(c), Some(id));
                }
                prop_assert!(doc.is_attached(id));
                prop_assert!(doc.contains(root, id));
                if i > 0 {
                    prop_assert_eq!(doc.attr(id, "data-n"), Some(&*(i - 1).to_string()));
                }
            }

            let mut expected = Vec::new();
            walk(&doc, root, &mut expected);
            prop_assert_eq!(doc.descendants(root), expected);
        }
    }
}
