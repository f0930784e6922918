#![forbid(unsafe_code)]

//! Controller configuration.
//!
//! Defaults are the constants the site's markup and stylesheet agree on;
//! overriding them is only interesting for embedding the controller in a
//! differently-classed page.

/// Configuration for [`crate::NavController`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavConfig {
    /// Narrow-viewport breakpoint in logical pixels. Click-toggling applies
    /// at widths up to and including this value; resizing strictly past it
    /// force-closes the menu.
    pub breakpoint: u32,
    /// Class identifying the toggle control.
    pub toggle_class: String,
    /// Class identifying dropdown group containers inside the link list.
    pub dropdown_class: String,
    /// Class marking the nav container (and dropdown groups) open.
    pub open_class: String,
    /// Class set on `body` while the overlay is open (backdrop/scroll-lock
    /// styling hooks onto this).
    pub body_open_class: String,
    /// Accessible label assigned to the nav landmark.
    pub nav_label: String,
    /// Accessible label assigned to the toggle when it has none.
    pub toggle_label: String,
    /// Id assigned to the link list when it has none.
    pub fallback_list_id: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            breakpoint: 900,
            toggle_class: "menu-toggle".to_owned(),
            dropdown_class: "dropdown".to_owned(),
            open_class: "is-open".to_owned(),
            body_open_class: "nav-open".to_owned(),
            nav_label: "Ana Menu".to_owned(),
            toggle_label: "Menu".to_owned(),
            fallback_list_id: "primary-nav".to_owned(),
        }
    }
}

impl NavConfig {
    /// Builder: set the breakpoint.
    #[must_use]
    pub fn with_breakpoint(mut self, breakpoint: u32) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    /// Builder: set the nav landmark label.
    #[must_use]
    pub fn with_nav_label(mut self, label: impl Into<String>) -> Self {
        self.nav_label = label.into();
        self
    }

    /// Builder: set the fallback link-list id.
    #[must_use]
    pub fn with_fallback_list_id(mut self, id: impl Into<String>) -> Self {
        self.fallback_list_id = id.into();
        self
    }
}
