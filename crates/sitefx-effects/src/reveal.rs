#![forbid(unsafe_code)]

//! Scroll-triggered reveal animations.
//!
//! Targets are classified once at attach. Under reduced motion (or when the
//! host cannot observe intersections) everything is revealed immediately;
//! otherwise each target becomes visible the first time the host reports it
//! intersecting, and is not observed again.

use sitefx_dom::{Document, NodeId, Page};

/// Classes that mark reveal targets besides non-hero sections.
const TARGET_CLASSES: [&str; 6] = [
    "service-card",
    "blog-card",
    "footer-item",
    "blog-post",
    "service-detail",
    "contact-form",
];

/// Cards stagger their reveal by sibling position, capped at this index.
const MAX_STAGGER_INDEX: usize = 6;
const STAGGER_STEP_MS: usize = 90;

/// Reveal-on-scroll effect over a fixed target set.
#[derive(Debug, Default)]
pub struct Reveal {
    /// Targets still waiting for their first intersection.
    pending: Vec<NodeId>,
}

impl Reveal {
    /// Classify targets, assign stagger delays, and either reveal everything
    /// immediately (reduced motion / no observer) or start waiting for
    /// intersection events.
    #[must_use]
    pub fn attach(doc: &mut Document, page: &Page) -> Self {
        let targets = collect_targets(doc);

        for &el in &targets {
            doc.class_add(el, "reveal");
            if doc.class_contains(el, "service-card") || doc.class_contains(el, "blog-card") {
                if let Some(parent) = doc.parent(el) {
                    let index = doc.children(parent).iter().position(|&c| c == el);
                    if let Some(index) = index {
                        let delay = index.min(MAX_STAGGER_INDEX) * STAGGER_STEP_MS;
                        doc.style_set(el, "--delay", &format!("{delay}ms"));
                    }
                }
            }
        }

        if page.prefers_reduced_motion || !page.supports_intersection {
            for el in targets {
                doc.class_add(el, "is-visible");
            }
            return Self::default();
        }

        Self { pending: targets }
    }

    /// Targets still being observed.
    #[must_use]
    pub fn pending(&self) -> &[NodeId] {
        &self.pending
    }

    /// Handle an intersection report; first visibility reveals and
    /// unobserves the target.
    pub fn on_intersection(&mut self, doc: &mut Document, target: NodeId, visible: bool) {
        if !visible {
            return;
        }
        if let Some(pos) = self.pending.iter().position(|&t| t == target) {
            self.pending.remove(pos);
            doc.class_add(target, "is-visible");
        }
    }
}

fn collect_targets(doc: &Document) -> Vec<NodeId> {
    let root = doc.root();
    doc.descendants(root)
        .into_iter()
        .filter(|&el| {
            (doc.tag(el) == "section" && !doc.class_contains(el, "hero"))
                || TARGET_CLASSES.iter().any(|c| doc.class_contains(el, c))
        })
        .collect()
}

// =========================================================================
// Tests
// =========================================================================
