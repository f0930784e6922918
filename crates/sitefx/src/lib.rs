#![forbid(unsafe_code)]

//! sitefx public facade crate.
//!
//! Re-exports the common types from the internal crates and provides
//! [`Behavior`], the page-level wiring that attaches every feature in the
//! order the site expects and routes host events to them.

mod behavior;

pub use behavior::{Behavior, Dispatch};

// =========================================================================
// Substrate re-exports
// =========================================================================

pub use sitefx_dom::{
    DefaultAction, Document, Event, HostCommand, KeyCode, KeyEvent, Modifiers, MouseButton,
    NodeId, Page, focusable_descendants, is_focusable,
};

// =========================================================================
// Navigation re-exports
// =========================================================================

pub use sitefx_nav::{DropdownRegistry, MenuState, NavConfig, NavController};

// =========================================================================
// Effect re-exports
// =========================================================================

pub use sitefx_effects::{ExitTransitions, HeroSlider, Reveal, ScrollHeader, ScrollTop};
pub use sitefx_effects::slider::ROTATION_INTERVAL_MS;
