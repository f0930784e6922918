#![forbid(unsafe_code)]

//! Image loading attribute assignment.
//!
//! Content images get `loading="lazy"` (only when unset, so markup can opt
//! out with `loading="eager"`) and `decoding="async"`. Header images are
//! left alone: the logo must not lazy-load.

use sitefx_dom::Document;

/// Assign loading attributes to every content image. Idempotent.
pub fn assign_loading_attributes(doc: &mut Document) {
    let root = doc.root();
    for img in doc.all_by_tag(root, "img") {
        if doc.closest(img, |d, n| d.tag(n) == "header").is_some() {
            continue;
        }
        if !doc.has_attr(img, "loading") {
            doc.set_attr(img, "loading", "lazy");
        }
        doc.set_attr(img, "decoding", "async");
    }
}
