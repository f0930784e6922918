#![forbid(unsafe_code)]

//! The navigation menu controller: binder, open/close state machine, and
//! event entry points.
//!
//! # Invariants
//!
//! 1. `bind` either returns a fully wired controller or touches nothing.
//! 2. The menu is open exactly when the controller holds an
//!    [`OpenSubscription`]; the while-open handlers gate on it.
//! 3. `open_menu` and `close_menu` are idempotent and symmetric: every class
//!    and attribute the open transition sets, the close transition unsets.
//! 4. Closing the menu never leaves a dropdown group open.
//!
//! # Click processing order
//!
//! Within one click event the controller runs its handlers in the order the
//! host page registered them: dropdown trigger toggling, then the toggle
//! control, then the link-list anchors' close request, then the document-wide
//! dropdown dismissal, then (only while open) the outside-click close.

use sitefx_dom::{DefaultAction, Document, KeyCode, KeyEvent, NodeId, Page, is_focusable};
use tracing::debug;

use crate::config::NavConfig;
use crate::dropdown::DropdownRegistry;
use crate::links::mark_active_links;
use crate::state::{MenuState, OpenSubscription};
use crate::trap::wrap_tab;

/// Controller instance bound to one page's menu structure.
#[derive(Debug)]
pub struct NavController {
    config: NavConfig,
    toggle: NodeId,
    nav: NodeId,
    list: NodeId,
    dropdowns: DropdownRegistry,
    subscription: Option<OpenSubscription>,
}

impl NavController {
    /// Bind with the default configuration.
    #[must_use]
    pub fn bind(doc: &mut Document, page: &Page) -> Option<Self> {
        Self::bind_with(doc, page, NavConfig::default())
    }

    /// Locate the menu structure and establish accessibility attributes.
    ///
    /// Returns `None` without mutating anything when the toggle, the nav
    /// container, or the link list is missing; a page without a menu keeps
    /// the rest of its behavior.
    #[must_use]
    pub fn bind_with(doc: &mut Document, page: &Page, config: NavConfig) -> Option<Self> {
        let root = doc.root();
        let toggle = doc.first_by_class(root, &config.toggle_class)?;
        let nav = doc.first_by_tag(root, "nav")?;
        let list = doc.first_by_tag(nav, "ul")?;

        if doc.tag(toggle) != "button" {
            doc.set_attr(toggle, "role", "button");
            doc.set_attr(toggle, "tabindex", "0");
        }

        doc.set_attr(nav, "aria-label", &config.nav_label);

        let list_id = match doc.attr(list, "id") {
            Some(id) => id.to_owned(),
            None => {
                doc.set_attr(list, "id", &config.fallback_list_id);
                config.fallback_list_id.clone()
            }
        };
        doc.set_attr(toggle, "aria-controls", &list_id);
        doc.set_attr(toggle, "aria-expanded", "false");
        if doc.attr(toggle, "aria-label").is_none() {
            doc.set_attr(toggle, "aria-label", &config.toggle_label);
        }

        mark_active_links(doc, list, page);
        let dropdowns = DropdownRegistry::discover(doc, list, &config.dropdown_class);
        debug!(dropdowns = dropdowns.len(), %list_id, "navigation bound");

        Some(Self {
            config,
            toggle,
            nav,
            list,
            dropdowns,
            subscription: None,
        })
    }

    /// Current state of the overlay.
    #[must_use]
    pub fn state(&self) -> MenuState {
        if self.subscription.is_some() {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    /// True while the overlay is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    /// The dropdown registry (read access for hosts and tests).
    #[must_use]
    pub fn dropdowns(&self) -> &DropdownRegistry {
        &self.dropdowns
    }

    /// The link-list element the controller is bound to.
    #[must_use]
    pub fn list(&self) -> NodeId {
        self.list
    }

    /// `Closed → Open`. No-op when already open.
    pub fn open_menu(&mut self, doc: &mut Document) {
        if self.subscription.is_some() {
            return;
        }
        let subscription = OpenSubscription::new(doc.active_element());
        let body = doc.body();
        doc.class_add(self.nav, &self.config.open_class);
        doc.class_add(body, &self.config.body_open_class);
        doc.set_attr(self.toggle, "aria-expanded", "true");
        if let Some(&first) = sitefx_dom::focusable_descendants(doc, self.list).first() {
            doc.focus(first);
        }
        self.subscription = Some(subscription);
        debug!("menu opened");
    }

    /// `Open → Closed`. No-op when already closed.
    pub fn close_menu(&mut self, doc: &mut Document) {
        let Some(subscription) = self.subscription.take() else {
            return;
        };
        let body = doc.body();
        doc.class_remove(self.nav, &self.config.open_class);
        doc.class_remove(body, &self.config.body_open_class);
        doc.set_attr(self.toggle, "aria-expanded", "false");
        self.dropdowns.close_all(doc);
        if let Some(prev) = subscription.last_focused {
            if is_focusable(doc, prev) {
                doc.focus(prev);
            }
        }
        debug!("menu closed");
    }

    /// Close when open, open when closed.
    pub fn toggle_menu(&mut self, doc: &mut Document) {
        if self.subscription.is_some() {
            self.close_menu(doc);
        } else {
            self.open_menu(doc);
        }
    }

    /// Whether dropdown triggers toggle on click instead of navigating:
    /// narrow viewport, or the overlay is currently presented.
    #[must_use]
    pub fn click_toggle_applies(&self, doc: &Document, page: &Page) -> bool {
        page.viewport_width <= self.config.breakpoint
            || doc.class_contains(self.nav, &self.config.open_class)
    }

    /// Handle a click hit-testing to `target`.
    pub fn on_click(&mut self, doc: &mut Document, page: &Page, target: NodeId) -> DefaultAction {
        let mut action = DefaultAction::Allowed;

        // Dropdown triggers toggle instead of navigating when the
        // narrow-viewport interaction model applies. Only the opening click
        // suppresses navigation; a second click closes and navigates.
        if let Some(idx) = self.dropdowns.group_for_trigger(doc, target) {
            if self.click_toggle_applies(doc, page) {
                if self.dropdowns.is_open(idx) {
                    self.dropdowns.close(doc, idx);
                } else {
                    action = DefaultAction::Prevented;
                    self.dropdowns.open(doc, idx);
                }
            }
        }

        if doc.contains(self.toggle, target) {
            self.toggle_menu(doc);
        }

        // Activating any link in the list dismisses the overlay.
        let clicked_anchor_in_list = doc
            .closest(target, |d, n| d.tag(n) == "a")
            .is_some_and(|a| doc.contains(self.list, a));
        if clicked_anchor_in_list {
            self.close_menu(doc);
        }

        // Document-wide: clicks landing outside the list dismiss dropdowns.
        if !doc.contains(self.list, target) {
            self.dropdowns.close_all(doc);
        }

        // While open, clicks outside both the list and the toggle close the
        // overlay. This handler only exists inside the open subscription.
        if self.subscription.is_some()
            && !doc.contains(self.list, target)
            && !doc.contains(self.toggle, target)
        {
            self.close_menu(doc);
        }

        action
    }

    /// Handle a keydown delivered to the focused element, then the document.
    pub fn on_keydown(&mut self, doc: &mut Document, key: KeyEvent) -> DefaultAction {
        // Keyboard activation of the toggle control (live from bind).
        if doc.active_element() == Some(self.toggle)
            && matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
        {
            self.toggle_menu(doc);
            return DefaultAction::Prevented;
        }

        // Everything below lives inside the open subscription.
        if self.subscription.is_none() {
            return DefaultAction::Allowed;
        }
        match key.code {
            KeyCode::Escape => {
                self.close_menu(doc);
                DefaultAction::Prevented
            }
            KeyCode::Tab => wrap_tab(doc, self.list, key.shift()),
            _ => DefaultAction::Allowed,
        }
    }

    /// Handle a viewport resize. Widths past the breakpoint force-close the
    /// overlay and all dropdowns: the overlay paradigm no longer applies.
    pub fn on_resize(&mut self, doc: &mut Document, width: u32) {
        if width > self.config.breakpoint {
            self.close_menu(doc);
            self.dropdowns.close_all(doc);
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
