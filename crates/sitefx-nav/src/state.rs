#![forbid(unsafe_code)]

//! Menu state and the while-open subscription.
//!
//! The overlay has exactly two states. There is no opening/closing transient:
//! transitions run to completion inside a single event callback.
//!
//! The keyboard and outside-click handlers are only live while the menu is
//! open. Rather than attaching and detaching them imperatively, the open
//! transition produces an [`OpenSubscription`] and the close transition
//! consumes it; a handler path that needs the subscription starts by
//! borrowing it, so a closed menu cannot react to those events and repeated
//! open/close cycles cannot accumulate listeners.

use sitefx_dom::NodeId;

/// Observable state of the overlay menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Overlay not presented. Initial state.
    Closed,
    /// Overlay presented; focus trap and outside-click dismissal live.
    Open,
}

impl MenuState {
    /// True in the [`MenuState::Open`] state.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Scoped resource representing one open cycle.
///
/// Holds the element that had focus immediately before opening; the
/// reference is released when the subscription is consumed on close.
#[derive(Debug)]
pub struct OpenSubscription {
    pub(crate) last_focused: Option<NodeId>,
}

impl OpenSubscription {
    /// Capture the pre-open focus.
    #[must_use]
    pub(crate) fn new(last_focused: Option<NodeId>) -> Self {
        Self { last_focused }
    }
}
