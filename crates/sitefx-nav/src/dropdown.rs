#![forbid(unsafe_code)]

//! Nested disclosure groups inside the link list.
//!
//! Membership is fixed at bind time. At most one group is open at any moment:
//! [`DropdownRegistry::open`] is the only path that opens a group, and it
//! closes every sibling first.

use sitefx_dom::{Document, NodeId};
use tracing::trace;

/// One disclosure group: a container with an anchor trigger.
#[derive(Debug)]
struct DropdownGroup {
    container: NodeId,
    trigger: NodeId,
    open: bool,
}

/// The fixed set of dropdown groups discovered at bind time.
#[derive(Debug, Default)]
pub struct DropdownRegistry {
    groups: Vec<DropdownGroup>,
}

impl DropdownRegistry {
    /// Enumerate dropdown containers under `list` and initialize their
    /// triggers' accessibility attributes. Containers without an anchor are
    /// skipped (nothing could ever open them).
    pub fn discover(doc: &mut Document, list: NodeId, dropdown_class: &str) -> Self {
        let mut groups = Vec::new();
        for container in doc.all_by_class(list, dropdown_class) {
            let Some(trigger) = doc.first_by_tag(container, "a") else {
                continue;
            };
            doc.set_attr(trigger, "aria-haspopup", "true");
            doc.set_attr(trigger, "aria-expanded", "false");
            groups.push(DropdownGroup {
                container,
                trigger,
                open: false,
            });
        }
        Self { groups }
    }

    /// Number of registered groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when no groups were discovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// True when the group at `idx` is open.
    #[must_use]
    pub fn is_open(&self, idx: usize) -> bool {
        self.groups.get(idx).is_some_and(|g| g.open)
    }

    /// How many groups are currently open (0 or 1 by invariant).
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.groups.iter().filter(|g| g.open).count()
    }

    /// The group whose trigger contains `target`, if any.
    #[must_use]
    pub fn group_for_trigger(&self, doc: &Document, target: NodeId) -> Option<usize> {
        self.groups
            .iter()
            .position(|g| doc.contains(g.trigger, target))
    }

    /// Open the group at `idx`, closing every other group first.
    pub fn open(&mut self, doc: &mut Document, idx: usize) {
        self.close_all_except(doc, Some(idx));
        self.set_open(doc, idx, true);
        trace!(group = idx, "dropdown opened");
    }

    /// Close the group at `idx`.
    pub fn close(&mut self, doc: &mut Document, idx: usize) {
        self.set_open(doc, idx, false);
    }

    /// Close every group.
    pub fn close_all(&mut self, doc: &mut Document) {
        self.close_all_except(doc, None);
    }

    /// Close every group other than the optional exception.
    pub fn close_all_except(&mut self, doc: &mut Document, except: Option<usize>) {
        for idx in 0..self.groups.len() {
            if Some(idx) != except {
                self.set_open(doc, idx, false);
            }
        }
    }

    fn set_open(&mut self, doc: &mut Document, idx: usize, open: bool) {
        let Some(group) = self.groups.get_mut(idx) else {
            return;
        };
        group.open = open;
        doc.class_set(group.container, "is-open", open);
        doc.set_attr(
            group.trigger,
            "aria-expanded",
            if open { "true" } else { "false" },
        );
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Build a list with `n` dropdown groups; returns (doc, list, triggers).
    fn fixture(n: usize) -> (Document, NodeId, Vec<NodeId>) {
        let mut doc = Document::new();
        let body = doc.body();
        let ul = doc.create_element("ul");
        doc.append_child(body, ul);
        let mut triggers = Vec::new();
        for i in 0..n {
            let li = doc.create_element("li");
            doc.class_add(li, "dropdown");
            doc.append_child(ul, li);
            let a = doc.create_element("a");
            doc.set_attr(a, "href", &format!("group{i}/index.html"));
            doc.append_child(li, a);
            triggers.push(a);
        }
        (doc, ul, triggers)
    }

    #[test]
    fn discover_initializes_aria() {
        let (mut doc, ul, triggers) = fixture(2);
        let registry = DropdownRegistry::discover(&mut doc, ul, "dropdown");
        assert_eq!(registry.len(), 2);
        for t in triggers {
            assert_eq!(doc.attr(t, "aria-haspopup"), Some("true"));
            assert_eq!(doc.attr(t, "aria-expanded"), Some("false"));
        }
    }

    #[test]
    fn discover_skips_triggerless_containers() {
        let mut doc = Document::new();
        let body = doc.body();
        let ul = doc.create_element("ul");
        doc.append_child(body, ul);
        let li = doc.create_element("li");
        doc.class_add(li, "dropdown");
        doc.append_child(ul, li);
        let registry = DropdownRegistry::discover(&mut doc, ul, "dropdown");
        assert!(registry.is_empty());
    }

    #[test]
    fn open_is_mutually_exclusive() {
        let (mut doc, ul, _) = fixture(3);
        let mut registry = DropdownRegistry::discover(&mut doc, ul, "dropdown");
        registry.open(&mut doc, 0);
        assert!(registry.is_open(0));
        registry.open(&mut doc, 2);
        assert!(!registry.is_open(0));
        assert!(registry.is_open(2));
        assert_eq!(registry.open_count(), 1);
    }

    #[test]
    fn open_reflects_into_dom() {
        let (mut doc, ul, triggers) = fixture(2);
        let containers: Vec<NodeId> = triggers.iter().map(|&t| doc.parent(t).unwrap()).collect();
        let mut registry = DropdownRegistry::discover(&mut doc, ul, "dropdown");
        registry.open(&mut doc, 1);
        assert!(doc.class_contains(containers[1], "is-open"));
        assert_eq!(doc.attr(triggers[1], "aria-expanded"), Some("true"));
        registry.close(&mut doc, 1);
        assert!(!doc.class_contains(containers[1], "is-open"));
        assert_eq!(doc.attr(triggers[1], "aria-expanded"), Some("false"));
    }

    #[test]
    fn close_all_except_spares_one() {
        let (mut doc, ul, _) = fixture(3);
        let mut registry = DropdownRegistry::discover(&mut doc, ul, "dropdown");
        registry.open(&mut doc, 1);
        registry.close_all_except(&mut doc, Some(1));
        assert!(registry.is_open(1));
        registry.close_all(&mut doc);
        assert_eq!(registry.open_count(), 0);
    }

    #[test]
    fn group_for_trigger_matches_descendants() {
        let (mut doc, ul, triggers) = fixture(2);
        let span = doc.create_element("span");
        doc.append_child(triggers[1], span);
        let registry = DropdownRegistry::discover(&mut doc, ul, "dropdown");
        assert_eq!(registry.group_for_trigger(&doc, triggers[0]), Some(0));
        assert_eq!(registry.group_for_trigger(&doc, span), Some(1));
        assert_eq!(registry.group_for_trigger(&doc, ul), None);
    }

    #[test]
    fn out_of_range_indices_are_harmless() {
        let (mut doc, ul, _) = fixture(1);
        let mut registry = DropdownRegistry::discover(&mut doc, ul, "dropdown");
        registry.close(&mut doc, 9);
        assert!(!registry.is_open(9));
    }

    proptest! {
        /// For any sequence of open/close/close_all requests, at most one
        /// group is open after each step.
        #[test]
        fn at_most_one_open(ops in proptest::collection::vec((0usize..3, 0usize..4), 1..64)) {
            let (mut doc, ul, _) = fixture(4);
            let mut registry = DropdownRegistry::discover(&mut doc, ul, "dropdown");
            for (op, idx) in ops {
                match op {
                    0 => registry.open(&mut doc, idx),
                    1 => registry.close(&mut doc, idx),
                    _ => registry.close_all(&mut doc),
                }
                prop_assert!(registry.open_count() <= 1);
            }
        }
    }
}
