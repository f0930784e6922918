#![forbid(unsafe_code)]

//! Scroll-position-driven header styling.

use sitefx_dom::{Document, NodeId, Page};

/// Scroll offset past which the header is styled as scrolled.
const SCROLLED_THRESHOLD: u32 = 12;

/// Toggles `is-scrolled` on the page header as the viewport scrolls.
#[derive(Debug)]
pub struct ScrollHeader {
    header: NodeId,
}

impl ScrollHeader {
    /// Bind to the first `header` element and apply the current state.
    /// Inert (`None`) when the page has no header.
    #[must_use]
    pub fn attach(doc: &mut Document, page: &Page) -> Option<Self> {
        let header = doc.first_by_tag(doc.root(), "header")?;
        let fx = Self { header };
        fx.on_scroll(doc, page.scroll_y);
        Some(fx)
    }

    /// Re-evaluate for a new scroll offset.
    pub fn on_scroll(&self, doc: &mut Document, scroll_y: u32) {
        doc.class_set(self.header, "is-scrolled", scroll_y > SCROLLED_THRESHOLD);
    }
}
