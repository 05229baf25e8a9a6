//! Table of contents for rendered article bodies, plus the scroll-spy math.

use kuchikikiki::{traits::TendrilSink, NodeRef};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One heading of the outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Existing or generated element id.
    pub id: String,
    /// Heading text content.
    pub text: String,
    /// 2 or 3.
    pub level: u8,
}

impl TocEntry {
    /// `h3` entries are shown indented under the preceding `h2`.
    pub fn is_sub(&self) -> bool {
        self.level == 3
    }

    /// Fragment link to the heading.
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Outline of an article body and the body itself with heading ids filled in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Toc {
    /// Headings in document order.
    pub entries: Vec<TocEntry>,
    /// Body markup with every collected heading carrying an id.
    pub html: String,
}

/// Collects `h2`/`h3` headings in document order. Headings without an id get
/// `heading-{n}`, `n` being the heading's index among the collected ones.
pub fn build_toc(content_html: &str) -> Toc {
    let document = kuchikikiki::parse_html().one(content_html);
    let headings: Vec<_> = match document.select("h2, h3") {
        Ok(selection) => selection.collect(),
        Err(()) => Vec::new(),
    };

    let entries: Vec<TocEntry> = headings
        .iter()
        .enumerate()
        .map(|(index, heading)| {
            let mut attributes = heading.attributes.borrow_mut();
            let existing = attributes.get("id").filter(|id| !id.is_empty()).map(str::to_string);
            let id = match existing {
                Some(id) => id,
                None => {
                    let id = format!("heading-{index}");
                    attributes.insert("id", id.clone());
                    id
                },
            };
            let level = if &*heading.name.local == "h3" { 3 } else { 2 };
            TocEntry {
                id,
                text: heading.as_node().text_contents().trim().to_string(),
                level,
            }
        })
        .collect();
    debug!(headings = entries.len(), "table of contents built");

    Toc {
        entries,
        html: body_html(&document),
    }
}

fn body_html(document: &NodeRef) -> String {
    match document.select_first("body") {
        Ok(body) => body.as_node().children().map(|child| child.to_string()).collect(),
        Err(()) => String::new(),
    }
}

/// Index of the last heading whose viewport top is at or above `threshold`.
/// `heading_tops` are in document order; `None` until the first heading has
/// been scrolled past.
pub fn active_heading(heading_tops: &[f64], threshold: f64) -> Option<usize> {
    heading_tops.iter().rposition(|top| *top <= threshold)
}

/// Document scroll position that puts an element `header_offset` pixels
/// below the viewport top. `element_top` is its current viewport top.
pub fn scroll_target(element_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    (element_top + scroll_y - header_offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_ids_and_marks_sub_headings() {
        let toc = build_toc(
            r#"<h2>مقدمه</h2><p>x</p><h3 id="details">جزئیات</h3><h4>skip</h4><h2> پایان </h2>"#,
        );
        assert_eq!(
            toc.entries,
            vec![
                TocEntry { id: "heading-0".into(), text: "مقدمه".into(), level: 2 },
                TocEntry { id: "details".into(), text: "جزئیات".into(), level: 3 },
                TocEntry { id: "heading-2".into(), text: "پایان".into(), level: 2 },
            ]
        );
        assert!(toc.entries[1].is_sub());
        assert_eq!(toc.entries[0].href(), "#heading-0");
        assert!(toc.html.contains(r#"<h2 id="heading-0">مقدمه</h2>"#));
        assert!(toc.html.contains(r#"<h3 id="details">"#));
        assert!(toc.html.contains("<h4>skip</h4>"));
    }

    #[test]
    fn content_without_headings_has_empty_outline() {
        let toc = build_toc("<p>فقط متن</p>");
        assert!(toc.entries.is_empty());
        assert_eq!(toc.html, "<p>فقط متن</p>");
    }

    #[test]
    fn nested_headings_are_found_in_document_order() {
        let toc = build_toc("<section><h3>a</h3></section><div><h2>b</h2></div>");
        let ids: Vec<_> = toc.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["heading-0", "heading-1"]);
        assert_eq!(toc.entries[0].level, 3);
    }

    #[test]
    fn active_heading_is_last_one_crossed() {
        assert_eq!(active_heading(&[350.0, 900.0], 100.0), None);
        assert_eq!(active_heading(&[100.0, 900.0], 100.0), Some(0));
        assert_eq!(active_heading(&[-800.0, -20.0, 60.0, 400.0], 100.0), Some(2));
        assert_eq!(active_heading(&[], 100.0), None);
    }

    #[test]
    fn scroll_target_subtracts_header() {
        assert_eq!(scroll_target(400.0, 1000.0, 100.0), 1300.0);
        assert_eq!(scroll_target(20.0, 0.0, 100.0), 0.0);
    }
}
