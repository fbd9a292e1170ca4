//! Active nav link from scroll position.
//!
//! A probe point sits a fixed distance below the top of the viewport. The
//! section whose vertical span contains the probe owns the `active` class on
//! its `a[href="#id"]` link. Sections are evaluated in document order and the
//! last match wins, so overlapping sections resolve to the later one.

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

use crate::consts::ACTIVE_CLASS;
use crate::dom::{Dom, Selector};

/// Vertical extent of a `section[id]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    /// Half-open containment: `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, probe: f64) -> bool {
        probe >= self.top && probe < self.top + self.height
    }
}

/// Section owning `probe`, last in document order on overlap.
#[must_use]
pub fn section_at(spans: &[SectionSpan], probe: f64) -> Option<&SectionSpan> {
    spans.iter().rev().find(|span| span.contains(probe))
}

/// Measure every `section[id]` in document order.
pub fn sections<D: Dom>(dom: &D) -> Vec<SectionSpan> {
    dom.query_all(&Selector::with_attr("section", "id"))
        .into_iter()
        .filter_map(|node| {
            let id = dom.attribute(&node, "id")?;
            Some(SectionSpan { id, top: dom.offset_top(&node), height: dom.offset_height(&node) })
        })
        .collect()
}

/// Recompute the active link for `scroll_y`. Returns the active section id.
pub fn highlight<D: Dom>(dom: &mut D, scroll_y: f64, offset: f64) -> Option<String> {
    let spans = sections(&*dom);
    let active = section_at(&spans, scroll_y + offset).map(|span| span.id.clone());

    for span in &spans {
        let href = format!("#{}", span.id);
        let Some(link) = dom.query_all(&Selector::attr_equals("a", "href", &href)).into_iter().next() else {
            continue;
        };
        if active.as_deref() == Some(span.id.as_str()) {
            dom.add_class(&link, ACTIVE_CLASS);
        } else {
            dom.remove_class(&link, ACTIVE_CLASS);
        }
    }
    active
}
