#![forbid(unsafe_code)]

//! Exit transitions on same-origin link navigation.
//!
//! Qualifying clicks are intercepted: the body gains `is-exiting` and the
//! host is asked to perform the navigation after the transition window.
//! Modified clicks (new-tab intent), fragment links, `mailto:`/`tel:`,
//! `target="_blank"`, and cross-origin URLs are left to the environment.
//! Disabled entirely under reduced motion.

use sitefx_dom::{DefaultAction, Document, HostCommand, Modifiers, MouseButton, NodeId, Page};
use tracing::trace;

/// Milliseconds the exit animation gets before navigation proceeds.
const EXIT_DELAY_MS: u64 = 180;

/// Same-origin navigation interception with an exit transition.
#[derive(Debug)]
pub struct ExitTransitions {
    enabled: bool,
}

impl ExitTransitions {
    /// Build; permanently disabled when the user prefers reduced motion.
    #[must_use]
    pub fn attach(page: &Page) -> Self {
        Self {
            enabled: !page.prefers_reduced_motion,
        }
    }

    /// Handle a click; returns the default-action outcome and the deferred
    /// navigation to perform, when the click qualifies.
    pub fn on_click(
        &self,
        doc: &mut Document,
        page: &Page,
        target: NodeId,
        button: MouseButton,
        modifiers: Modifiers,
    ) -> (DefaultAction, Option<HostCommand>) {
        if !self.enabled {
            return (DefaultAction::Allowed, None);
        }
        let Some(anchor) = doc.closest(target, |d, n| d.tag(n) == "a") else {
            return (DefaultAction::Allowed, None);
        };
        let Some(href) = doc.attr(anchor, "href").map(str::to_owned) else {
            return (DefaultAction::Allowed, None);
        };
        if href.is_empty()
            || href.starts_with('#')
            || href.starts_with("mailto:")
            || href.starts_with("tel:")
        {
            return (DefaultAction::Allowed, None);
        }
        if doc.attr(anchor, "target") == Some("_blank") {
            return (DefaultAction::Allowed, None);
        }
        if href.starts_with("http") && !href.starts_with(&page.origin) {
            return (DefaultAction::Allowed, None);
        }
        if is_modified_click(button, modifiers) {
            return (DefaultAction::Allowed, None);
        }

        let body = doc.body();
        doc.class_add(body, "is-exiting");
        trace!(%href, "exit transition started");
        (
            DefaultAction::Prevented,
            Some(HostCommand::Navigate {
                href,
                delay_ms: EXIT_DELAY_MS,
            }),
        )
    }

    /// Handle a page-show: a back/forward-cache restore must drop the
    /// exiting state or the page comes back mid-transition.
    pub fn on_pageshow(doc: &mut Document, persisted: bool) {
        if persisted {
            let body = doc.body();
            doc.class_remove(body, "is-exiting");
        }
    }
}

fn is_modified_click(button: MouseButton, modifiers: Modifiers) -> bool {
    button != MouseButton::Left || !modifiers.is_empty()
}

// =========================================================================
// Tests
// =========================================================================
