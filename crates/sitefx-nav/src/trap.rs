#![forbid(unsafe_code)]

//! Tab-key focus containment for the open overlay.
//!
//! The trap only redirects at the two boundary elements; every other Tab
//! press is left to the environment's default focus order, which is
//! sufficient because focus is already inside the link list when the trap
//! engages.

use sitefx_dom::{DefaultAction, Document, NodeId, focusable_descendants};

/// Handle a Tab (or Shift+Tab) press while the overlay is open.
///
/// Recomputes the focusable set on every press; an empty set is a no-op.
/// Wraps backward from the first element and forward from the last.
pub fn wrap_tab(doc: &mut Document, list: NodeId, shift: bool) -> DefaultAction {
    let focusables = focusable_descendants(doc, list);
    let (Some(&first), Some(&last)) = (focusables.first(), focusables.last()) else {
        return DefaultAction::Allowed;
    };
    let active = doc.active_element();
    if shift && active == Some(first) {
        doc.focus(last);
        DefaultAction::Prevented
    } else if !shift && active == Some(last) {
        doc.focus(first);
        DefaultAction::Prevented
    } else {
        DefaultAction::Allowed
    }
}

// =========================================================================
// Tests
// =========================================================================
