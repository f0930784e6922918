#![forbid(unsafe_code)]

//! Element substrate: the injectable stand-in for the host page's DOM.
//!
//! # Role in sitefx
//! `sitefx-dom` is the boundary layer. It owns the element arena the behavior
//! controllers mutate, the page environment they query (viewport, scroll
//! position, current path), and the canonical event types the host loop
//! delivers.
//!
//! # Primary responsibilities
//! - **Document**: arena of elements with attribute/class/style mutation,
//!   document-order queries, and focus tracking.
//! - **Event**: canonical input events (clicks, keys, resize, scroll, ticks,
//!   intersection notifications, page restore).
//! - **Page**: environment snapshot (viewport width, scroll offset, location
//!   path, motion preference).
//! - **Focusability**: the shared rules for which elements can receive focus.
//!
//! # How it fits in the system
//! The navigation controller (`sitefx-nav`) and the presentational effects
//! (`sitefx-effects`) consume `Document`/`Page` and react to `Event` values
//! routed by the facade (`sitefx`). Nothing here performs I/O; the host loop
//! is responsible for feeding events in dispatch order.

pub mod document;
pub mod event;
pub mod focus;
pub mod page;

pub use document::{Document, NodeId};
pub use event::{DefaultAction, Event, HostCommand, KeyCode, KeyEvent, Modifiers, MouseButton};
pub use focus::{focusable_descendants, is_focusable};
pub use page::Page;
