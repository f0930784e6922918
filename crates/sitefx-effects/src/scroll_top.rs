#![forbid(unsafe_code)]

//! Scroll-to-top affordance.

use sitefx_dom::{Document, HostCommand, NodeId, Page};

/// Scroll offset past which the control becomes visible.
const VISIBLE_THRESHOLD: u32 = 320;

/// Shows a `.scroll-top` control past a scroll threshold and asks the host
/// to scroll back up when it is activated.
#[derive(Debug)]
pub struct ScrollTop {
    button: NodeId,
}

impl ScrollTop {
    /// Bind to the `.scroll-top` control and apply the current state.
    /// Inert (`None`) when the page has no such control.
    #[must_use]
    pub fn attach(doc: &mut Document, page: &Page) -> Option<Self> {
        let button = doc.first_by_class(doc.root(), "scroll-top")?;
        let fx = Self { button };
        fx.on_scroll(doc, page.scroll_y);
        Some(fx)
    }

    /// Re-evaluate visibility for a new scroll offset.
    pub fn on_scroll(&self, doc: &mut Document, scroll_y: u32) {
        doc.class_set(self.button, "is-visible", scroll_y > VISIBLE_THRESHOLD);
    }

    /// Handle a click; activating the control requests a scroll to the top,
    /// animated unless the user prefers reduced motion.
    pub fn on_click(&self, doc: &Document, page: &Page, target: NodeId) -> Option<HostCommand> {
        if !doc.contains(self.button, target) {
            return None;
        }
        Some(HostCommand::ScrollTo {
            top: 0,
            smooth: !page.prefers_reduced_motion,
        })
    }
}
