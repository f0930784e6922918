#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! The host loop converts whatever it receives from the real environment into
//! these values and feeds them to the behavior layer in dispatch order. All
//! events derive `Clone` and `PartialEq` for use in tests and pattern
//! matching.
//!
//! # Design Notes
//!
//! - There is no listener registry: handlers are methods, and "this listener
//!   is attached" is ordinary state on the controller that owns it.
//! - Default-action suppression (`preventDefault`) is a return value,
//!   [`DefaultAction`], not hidden mutation on the event.
//! - Side effects the behavior layer cannot perform itself (scrolling the
//!   viewport, navigating away) are reported as [`HostCommand`] values.

use bitflags::bitflags;

use crate::document::NodeId;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A pointer click, already hit-tested to a target element.
    Click {
        /// Innermost element under the pointer.
        target: NodeId,
        /// Which button was pressed.
        button: MouseButton,
        /// Modifier keys held during the click.
        modifiers: Modifiers,
    },

    /// A keyboard event delivered to the focused element and then the
    /// document.
    Key(KeyEvent),

    /// Viewport was resized.
    Resize {
        /// New viewport width in logical pixels.
        width: u32,
        /// New viewport height in logical pixels.
        height: u32,
    },

    /// Viewport scrolled to a new vertical offset.
    Scroll {
        /// New scroll offset from the top, in logical pixels.
        y: u32,
    },

    /// A periodic tick from the host (drives the hero slider cadence).
    Tick,

    /// An observed element crossed the visibility threshold.
    Intersection {
        /// The observed element.
        target: NodeId,
        /// True when the element became visible.
        visible: bool,
    },

    /// Page was shown, possibly restored from the back/forward cache.
    PageShow {
        /// True when restored from cache rather than freshly loaded.
        persisted: bool,
    },
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a key event with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
        }
    }

    /// Builder: set modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check if Shift is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Check if Ctrl is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key (Space is `Char(' ')`).
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Escape,
    /// Tab key.
    Tab,
    /// Backspace key.
    Backspace,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

bitflags! {
    /// Modifier keys held during an input event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Control key.
        const CTRL  = 0b0010;
        /// Alt/Option key.
        const ALT   = 0b0100;
        /// Super/Meta/Cmd key.
        const SUPER = 0b1000;
    }
}

/// Whether a handler suppressed the environment's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultAction {
    /// The default action proceeds (e.g. link navigation).
    #[default]
    Allowed,
    /// The default action was consumed by a handler.
    Prevented,
}

impl DefaultAction {
    /// True when the default action was consumed.
    #[must_use]
    pub const fn is_prevented(self) -> bool {
        matches!(self, Self::Prevented)
    }

    /// Combine with another handler's outcome; prevention wins.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        if self.is_prevented() || other.is_prevented() {
            Self::Prevented
        } else {
            Self::Allowed
        }
    }
}

/// A side effect the behavior layer asks the host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Scroll the viewport to a vertical offset.
    ScrollTo {
        /// Target offset from the top.
        top: u32,
        /// Animate the scroll (false under reduced motion).
        smooth: bool,
    },
    /// Navigate to `href` after `delay_ms` (exit-transition window).
    Navigate {
        /// Destination, exactly as written in the anchor.
        href: String,
        /// Milliseconds to wait before navigating.
        delay_ms: u64,
    },
}

// =========================================================================
// Tests
// =========================================================================
