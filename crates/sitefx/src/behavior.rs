#![forbid(unsafe_code)]

//! Page-level wiring.
//!
//! [`Behavior::attach`] runs the features in the order the site initializes
//! them: ready markers, header styling, navigation, image attributes, hero
//! slider, reveals, transitions, scroll-to-top. [`Behavior::dispatch`] routes
//! each host event through the features in that same order and aggregates
//! their outcomes.
//!
//! Every feature degrades independently: a page missing one structure keeps
//! all the others.

use sitefx_dom::{DefaultAction, Document, Event, HostCommand, Page};
use sitefx_effects::{ExitTransitions, HeroSlider, Reveal, ScrollHeader, ScrollTop, images};
use sitefx_nav::NavController;
use tracing::debug;

/// Aggregated outcome of dispatching one event.
#[derive(Debug, Default)]
pub struct Dispatch {
    /// Whether any handler consumed the default action.
    pub default_action: DefaultAction,
    /// Side effects for the host to perform.
    pub commands: Vec<HostCommand>,
}

/// The attached behavior layer for one page view.
#[derive(Debug)]
pub struct Behavior {
    header: Option<ScrollHeader>,
    nav: Option<NavController>,
    slider: Option<HeroSlider>,
    reveal: Reveal,
    transitions: ExitTransitions,
    scroll_top: Option<ScrollTop>,
}

impl Behavior {
    /// Attach every feature to the document in initialization order.
    #[must_use]
    pub fn attach(doc: &mut Document, page: &Page) -> Self {
        let root = doc.root();
        doc.class_add(root, "has-js");
        let body = doc.body();
        doc.class_add(body, "is-ready");

        let header = ScrollHeader::attach(doc, page);
        let nav = NavController::bind(doc, page);
        images::assign_loading_attributes(doc);
        let slider = HeroSlider::attach(doc, page);
        let reveal = Reveal::attach(doc, page);
        let transitions = ExitTransitions::attach(page);
        let scroll_top = ScrollTop::attach(doc, page);

        debug!(
            nav = nav.is_some(),
            header = header.is_some(),
            slider = slider.is_some(),
            scroll_top = scroll_top.is_some(),
            "behavior attached"
        );

        Self {
            header,
            nav,
            slider,
            reveal,
            transitions,
            scroll_top,
        }
    }

    /// Access the navigation controller, when the page has one.
    #[must_use]
    pub fn nav(&self) -> Option<&NavController> {
        self.nav.as_ref()
    }

    /// Route one host event through the features. Resize and scroll events
    /// also refresh the corresponding [`Page`] fields so later handlers see
    /// a consistent snapshot.
    pub fn dispatch(&mut self, doc: &mut Document, page: &mut Page, event: &Event) -> Dispatch {
        let mut out = Dispatch::default();
        match *event {
            Event::Click {
                target,
                button,
                modifiers,
            } => {
                if let Some(nav) = &mut self.nav {
                    out.default_action = out
                        .default_action
                        .merge(nav.on_click(doc, page, target));
                }
                // A click the menu already consumed (a dropdown opening)
                // must not also start an exit transition.
                if !out.default_action.is_prevented() {
                    let (action, command) =
                        self.transitions.on_click(doc, page, target, button, modifiers);
                    out.default_action = out.default_action.merge(action);
                    out.commands.extend(command);
                }
                if let Some(scroll_top) = &self.scroll_top {
                    out.commands.extend(scroll_top.on_click(doc, page, target));
                }
            }
            Event::Key(key) => {
                if let Some(nav) = &mut self.nav {
                    out.default_action = out.default_action.merge(nav.on_keydown(doc, key));
                }
            }
            Event::Resize { width, height } => {
                page.viewport_width = width;
                page.viewport_height = height;
                if let Some(nav) = &mut self.nav {
                    nav.on_resize(doc, width);
                }
            }
            Event::Scroll { y } => {
                page.scroll_y = y;
                if let Some(header) = &self.header {
                    header.on_scroll(doc, y);
                }
                if let Some(scroll_top) = &self.scroll_top {
                    scroll_top.on_scroll(doc, y);
                }
            }
            Event::Tick => {
                if let Some(slider) = &mut self.slider {
                    slider.on_tick(doc);
                }
            }
            Event::Intersection { target, visible } => {
                self.reveal.on_intersection(doc, target, visible);
            }
            Event::PageShow { persisted } => {
                ExitTransitions::on_pageshow(doc, persisted);
            }
        }
        out
    }
}
