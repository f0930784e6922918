#![forbid(unsafe_code)]

//! Active-link classification.
//!
//! Runs once at bind time and is never re-evaluated. A link is "active" when
//! the final `/`-segment of its href literally equals the final segment of
//! the current location path — no normalization of trailing slashes or query
//! strings. Empty hrefs and absolute URLs (`http…`) are skipped.

use sitefx_dom::{Document, NodeId, Page};

/// Final `/`-segment of a path or href.
fn last_segment(s: &str) -> &str {
    s.rsplit('/').next().unwrap_or(s)
}

/// Final segment of the current location path, `index.html` when empty.
#[must_use]
pub fn current_segment(path: &str) -> &str {
    let seg = last_segment(path);
    if seg.is_empty() { "index.html" } else { seg }
}

/// Mark anchors under `list` matching the current page.
pub fn mark_active_links(doc: &mut Document, list: NodeId, page: &Page) {
    let current = current_segment(&page.path).to_owned();
    for anchor in doc.all_by_tag(list, "a") {
        let Some(href) = doc.attr(anchor, "href").map(str::to_owned) else {
            continue;
        };
        if href.is_empty() || href.starts_with("http") {
            continue;
        }
        if last_segment(&href) == current && !doc.class_contains(anchor, "active") {
            doc.class_add(anchor, "active");
            doc.set_attr(anchor, "aria-current", "page");
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with_hrefs(hrefs: &[&str]) -> (Document, NodeId, Vec<NodeId>) {
        let mut doc = Document::new();
        let body = doc.body();
        let ul = doc.create_element("ul");
        doc.append_child(body, ul);
        let mut anchors = Vec::new();
        for href in hrefs {
            let li = doc.create_element("li");
            doc.append_child(ul, li);
            let a = doc.create_element("a");
            if !href.is_empty() {
                doc.set_attr(a, "href", href);
            } else {
                doc.set_attr(a, "href", "");
            }
            doc.append_child(li, a);
            anchors.push(a);
        }
        (doc, ul, anchors)
    }

    #[test]
    fn current_segment_falls_back_to_index() {
        assert_eq!(current_segment("/about.html"), "about.html");
        assert_eq!(current_segment("/blog/post.html"), "post.html");
        assert_eq!(current_segment("/"), "index.html");
        assert_eq!(current_segment(""), "index.html");
    }

    #[test]
    fn exactly_one_link_marked() {
        let (mut doc, ul, anchors) =
            list_with_hrefs(&["index.html", "about.html", "blog/index.html"]);
        let page = Page::default().with_path("/site/about.html");
        mark_active_links(&mut doc, ul, &page);

        assert!(!doc.class_contains(anchors[0], "active"));
        assert!(doc.class_contains(anchors[1], "active"));
        assert_eq!(doc.attr(anchors[1], "aria-current"), Some("page"));
        assert!(!doc.class_contains(anchors[2], "active"));
    }

    #[test]
    fn nested_href_matches_on_final_segment() {
        let (mut doc, ul, anchors) = list_with_hrefs(&["blog/index.html"]);
        let page = Page::default().with_path("/blog/index.html");
        mark_active_links(&mut doc, ul, &page);
        assert!(doc.class_contains(anchors[0], "active"));
    }

    #[test]
    fn external_and_empty_hrefs_never_match() {
        let (mut doc, ul, anchors) = list_with_hrefs(&["https://example.com", ""]);
        let page = Page::default().with_path("/example.com");
        mark_active_links(&mut doc, ul, &page);
        assert!(!doc.class_contains(anchors[0], "active"));
        assert!(!doc.class_contains(anchors[1], "active"));
    }

    #[test]
    fn comparison_is_literal() {
        // Query strings and trailing slashes are not normalized away.
        let (mut doc, ul, anchors) = list_with_hrefs(&["about.html?ref=nav"]);
        let page = Page::default().with_path("/about.html");
        mark_active_links(&mut doc, ul, &page);
        assert!(!doc.class_contains(anchors[0], "active"));
    }

    #[test]
    fn already_active_links_keep_their_state() {
        let (mut doc, ul, anchors) = list_with_hrefs(&["about.html"]);
        doc.class_add(anchors[0], "active");
        let page = Page::default().with_path("/about.html");
        mark_active_links(&mut doc, ul, &page);
        // Pre-marked links are left alone: no aria-current is added.
        assert!(doc.class_contains(anchors[0], "active"));
        assert_eq!(doc.attr(anchors[0], "aria-current"), None);
    }
}
