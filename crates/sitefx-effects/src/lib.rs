#![forbid(unsafe_code)]

//! Simple presentational effects of the behavior layer.
//!
//! Everything here is an idempotent attribute/class mutation with no state
//! machine: header styling on scroll, image loading attributes, scroll-
//! triggered reveals, the hero background rotation, exit transitions on
//! internal links, and the scroll-to-top affordance.
//!
//! Each effect degrades gracefully: when its element is missing it simply
//! stays inert. None of them spawn timers or threads — the host delivers
//! ticks and performs the commands they report.

pub mod header;
pub mod images;
pub mod reveal;
pub mod scroll_top;
pub mod slider;
pub mod transitions;

pub use header::ScrollHeader;
pub use reveal::Reveal;
pub use scroll_top::ScrollTop;
pub use slider::HeroSlider;
pub use transitions::ExitTransitions;
