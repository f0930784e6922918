#![forbid(unsafe_code)]

//! Responsive navigation menu controller.
//!
//! # Role in sitefx
//! `sitefx-nav` owns the one piece of the behavior layer with real state:
//! the overlay menu. It binds to the page structure once, then reacts to
//! clicks, keys, and resizes routed to it by the facade.
//!
//! # Primary responsibilities
//! - **Structure binder**: locates toggle, nav container, and link list;
//!   establishes accessibility attributes idempotently; inert when any
//!   required element is missing.
//! - **Dropdown registry**: mutually exclusive nested disclosure groups.
//! - **Open/close state machine**: overlay state with enter/exit side
//!   effects; the while-open listeners live inside an [`state::OpenSubscription`]
//!   value so they cannot leak across cycles.
//! - **Focus trap & keyboard handler**: Tab wrapping at the boundary
//!   elements and Escape-to-close, active only while open.
//!
//! # How it fits in the system
//! The controller never listens for anything itself: the facade
//! (`sitefx`) feeds it events in the order the host dispatched them, and it
//! mutates the [`sitefx_dom::Document`] it was bound to. A page without the
//! expected structure simply gets no controller (`NavController::bind`
//! returns `None`); nothing else on the page is affected.

pub mod config;
pub mod controller;
pub mod dropdown;
pub mod links;
pub mod state;
pub mod trap;

pub use config::NavConfig;
pub use controller::NavController;
pub use dropdown::DropdownRegistry;
pub use state::MenuState;
