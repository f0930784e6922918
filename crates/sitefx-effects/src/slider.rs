#![forbid(unsafe_code)]

//! Background image rotation for the home hero.
//!
//! Two stacked slide elements alternate as front buffer: the hidden one gets
//! the next image, becomes active, and the previously active one is demoted.
//! The host owns the cadence and delivers a tick every rotation interval
//! (8000 ms on the real page).

use sitefx_dom::{Document, NodeId, Page};
use tracing::trace;

/// Rotation image files, in display order.
const HERO_IMAGES: [&str; 4] = [
    "tingey-injury-law-firm-nSpj-Z12lX0-unsplash.jpg",
    "patrick-fore-H5Lf0nGyetk-unsplash.jpg",
    "inaki-del-olmo-NIJuEQw0RKg-unsplash.jpg",
    "giammarco-boscaro-zeH-ljawHtg-unsplash.jpg",
];

/// Milliseconds between rotations on the real page; exposed so the host can
/// schedule its tick source.
pub const ROTATION_INTERVAL_MS: u64 = 8000;

#[derive(Debug)]
struct Rotation {
    slide_a: NodeId,
    slide_b: NodeId,
    /// True when slide A is the active (visible) buffer.
    active_is_a: bool,
    index: usize,
    images: Vec<String>,
}

/// Hero background rotation across every `.hero.hero-home` section.
#[derive(Debug)]
pub struct HeroSlider {
    rotations: Vec<Rotation>,
}

impl HeroSlider {
    /// Build the slide structure inside each home hero. Inert (`None`) on
    /// pages without one.
    #[must_use]
    pub fn attach(doc: &mut Document, page: &Page) -> Option<Self> {
        let root = doc.root();
        let heroes: Vec<NodeId> = doc
            .all_by_class(root, "hero")
            .into_iter()
            .filter(|&h| doc.class_contains(h, "hero-home"))
            .collect();
        if heroes.is_empty() {
            return None;
        }

        // Nested pages resolve the shared image directory one level up.
        let nested = page.path.contains("/blog/") || page.path.contains("/services/");
        let base = if nested { "../images/" } else { "images/" };
        let images: Vec<String> = HERO_IMAGES
            .iter()
            .map(|file| format!("{base}{file}"))
            .collect();

        let mut rotations = Vec::new();
        for hero in heroes {
            doc.style_set(hero, "background-image", "none");

            let slider = doc.create_element("div");
            doc.class_add(slider, "hero-slider");

            let slide_a = doc.create_element("div");
            doc.class_add(slide_a, "hero-slide");
            doc.class_add(slide_a, "is-active");
            doc.style_set(slide_a, "background-image", &bg_url(&images[0]));
            doc.append_child(slider, slide_a);

            if images.len() < 2 {
                doc.prepend_child(hero, slider);
                continue;
            }

            let slide_b = doc.create_element("div");
            doc.class_add(slide_b, "hero-slide");
            doc.style_set(slide_b, "background-image", &bg_url(&images[1]));
            doc.append_child(slider, slide_b);
            doc.prepend_child(hero, slider);

            rotations.push(Rotation {
                slide_a,
                slide_b,
                active_is_a: true,
                index: 0,
                images: images.clone(),
            });
        }
        trace!(heroes = rotations.len(), "hero slider attached");
        Some(Self { rotations })
    }

    /// Advance every hero by one image.
    pub fn on_tick(&mut self, doc: &mut Document) {
        for rot in &mut self.rotations {
            let next_index = (rot.index + 1) % rot.images.len();
            let (active, next) = if rot.active_is_a {
                (rot.slide_a, rot.slide_b)
            } else {
                (rot.slide_b, rot.slide_a)
            };
            doc.style_set(next, "background-image", &bg_url(&rot.images[next_index]));
            doc.class_add(next, "is-active");
            doc.class_remove(active, "is-active");
            rot.active_is_a = !rot.active_is_a;
            rot.index = next_index;
        }
    }
}

fn bg_url(image: &str) -> String {
    format!("url(\"{image}\")")
}

// =========================================================================
// Tests
// =========================================================================
