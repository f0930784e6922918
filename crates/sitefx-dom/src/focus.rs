#![forbid(unsafe_code)]

//! Focusability rules shared by the focus trap and focus restoration.
//!
//! The predicate mirrors the selector the behavior layer traps focus over:
//! `a[href], button:not([disabled]), input:not([disabled]),
//! textarea:not([disabled]), [tabindex]:not([tabindex='-1'])` — plus the
//! requirement that the element is attached to the document.
//!
//! The focusable set is recomputed on every call rather than cached. Menu
//! content is static after bind, but focusability of individual items (a
//! `disabled` attribute appearing, for instance) is live state; recompute-on-
//! demand stays correct if that ever changes.

use crate::document::{Document, NodeId};

/// True when the element can receive focus right now.
#[must_use]
pub fn is_focusable(doc: &Document, id: NodeId) -> bool {
    if !doc.is_attached(id) {
        return false;
    }
    match doc.tag(id) {
        "a" if doc.has_attr(id, "href") => true,
        "button" | "input" | "textarea" if !doc.has_attr(id, "disabled") => true,
        _ => doc.attr(id, "tabindex").is_some_and(|t| t != "-1"),
    }
}

/// Focusable descendants of `root` in document order.
#[must_use]
pub fn focusable_descendants(doc: &Document, root: NodeId) -> Vec<NodeId> {
    doc.descendants(root)
        .into_iter()
        .filter(|&id| is_focusable(doc, id))
        .collect()
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn attached(doc: &mut Document, tag: &str) -> NodeId {
        let id = doc.create_element(tag);
        let body = doc.body();
        doc.append_child(body, id);
        id
    }

    #[test]
    fn anchor_needs_href() {
        let mut doc = Document::new();
        let bare = attached(&mut doc, "a");
        assert!(!is_focusable(&doc, bare));
        doc.set_attr(bare, "href", "about.html");
        assert!(is_focusable(&doc, bare));
    }

    #[test]
    fn anchor_with_href_ignores_negative_tabindex() {
        // The union selector matches `a[href]` regardless of tabindex.
        let mut doc = Document::new();
        let a = attached(&mut doc, "a");
        doc.set_attr(a, "href", "about.html");
        doc.set_attr(a, "tabindex", "-1");
        assert!(is_focusable(&doc, a));
    }

    #[test]
    fn disabled_controls_are_skipped() {
        let mut doc = Document::new();
        for tag in ["button", "input", "textarea"] {
            let el = attached(&mut doc, tag);
            assert!(is_focusable(&doc, el), "{tag} should be focusable");
            doc.set_attr(el, "disabled", "");
            assert!(!is_focusable(&doc, el), "disabled {tag} should be skipped");
        }
    }

    #[test]
    fn tabindex_opts_arbitrary_elements_in() {
        let mut doc = Document::new();
        let div = attached(&mut doc, "div");
        assert!(!is_focusable(&doc, div));
        doc.set_attr(div, "tabindex", "0");
        assert!(is_focusable(&doc, div));
        doc.set_attr(div, "tabindex", "-1");
        assert!(!is_focusable(&doc, div));
    }

    #[test]
    fn detached_elements_never_focusable() {
        let mut doc = Document::new();
        let a = doc.create_element("a");
        doc.set_attr(a, "href", "index.html");
        assert!(!is_focusable(&doc, a));
    }

    #[test]
    fn focusable_descendants_in_document_order() {
        let mut doc = Document::new();
        let ul = attached(&mut doc, "ul");
        let li1 = doc.create_element("li");
        let li2 = doc.create_element("li");
        doc.append_child(ul, li1);
        doc.append_child(ul, li2);
        let a1 = doc.create_element("a");
        doc.set_attr(a1, "href", "one.html");
        doc.append_child(li1, a1);
        let plain = doc.create_element("span");
        doc.append_child(li1, plain);
        let a2 = doc.create_element("a");
        doc.set_attr(a2, "href", "two.html");
        doc.append_child(li2, a2);

        assert_eq!(focusable_descendants(&doc, ul), vec![a1, a2]);
    }

    #[test]
    fn disabling_changes_the_recomputed_set() {
        let mut doc = Document::new();
        let ul = attached(&mut doc, "ul");
        let button = doc.create_element("button");
        doc.append_child(ul, button);
        assert_eq!(focusable_descendants(&doc, ul), vec![button]);
        doc.set_attr(button, "disabled", "");
        assert!(focusable_descendants(&doc, ul).is_empty());
    }

    proptest! {
        /// However focus requests and attribute churn interleave, a focus
        /// request succeeds exactly when its target is focusable at that
        /// moment, and never moves focus otherwise.
        #[test]
        fn focus_requests_respect_focusability(
            ops in proptest::collection::vec((0usize..6, 0u8..4), 1..48),
        ) {
            let mut doc = Document::new();
            let body = doc.body();
            let mut els = Vec::new();
            for i in 0..6 {
                let a = doc.create_element("a");
                if i % 2 == 0 {
                    doc.set_attr(a, "href", "page.html");
                }
                doc.append_child(body, a);
                els.push(a);
            }

            for (pick, op) in ops {
                let el = els[pick];
                match op {
                    0 => {
                        let before = doc.active_element();
                        let can = is_focusable(&doc, el);
                        doc.focus(el);
                        if can {
                            prop_assert_eq!(doc.active_element(), Some(el));
                        } else {
                            prop_assert_eq!(doc.active_element(), before);
                        }
                    }
                    1 => doc.remove_attr(el, "href"),
                    2 => doc.set_attr(el, "href", "other.html"),
                    _ => doc.set_attr(el, "tabindex", "-1"),
                }
                // The recomputed set only ever contains focusable elements.
                for f in focusable_descendants(&doc, body) {
                    prop_assert!(is_focusable(&doc, f));
                }
            }
        }
    }
}
