#![forbid(unsafe_code)]

//! Page environment: the read side of the host environment.
//!
//! A [`Page`] is a plain snapshot of what the browser would expose through
//! `window`: viewport size, scroll offset, the current location, and the
//! reduced-motion preference. The host loop keeps it in sync with resize and
//! scroll events; tests set it up directly.

/// Snapshot of the host page's environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Viewport width in logical pixels.
    pub viewport_width: u32,
    /// Viewport height in logical pixels.
    pub viewport_height: u32,
    /// Vertical scroll offset in logical pixels.
    pub scroll_y: u32,
    /// Current location path (e.g. `/blog/index.html`).
    pub path: String,
    /// Current origin (scheme + host), used to classify external links.
    pub origin: String,
    /// User preference for reduced motion.
    pub prefers_reduced_motion: bool,
    /// Whether the host supports intersection observation.
    pub supports_intersection: bool,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            viewport_width: 1280,
            viewport_height: 800,
            scroll_y: 0,
            path: "/index.html".to_owned(),
            origin: "https://example.com".to_owned(),
            prefers_reduced_motion: false,
            supports_intersection: true,
        }
    }
}

impl Page {
    /// Builder: set the viewport width.
    #[must_use]
    pub fn with_viewport_width(mut self, width: u32) -> Self {
        self.viewport_width = width;
        self
    }

    /// Builder: set the location path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Builder: set the origin.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Builder: set the reduced-motion preference.
    #[must_use]
    pub fn with_reduced_motion(mut self, prefers: bool) -> Self {
        self.prefers_reduced_motion = prefers;
        self
    }

    /// Builder: set intersection-observation support.
    #[must_use]
    pub fn with_intersection_support(mut self, supported: bool) -> Self {
        self.supports_intersection = supported;
        self
    }
}
