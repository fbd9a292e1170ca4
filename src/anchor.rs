//! Smooth scrolling for in-page anchor links.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

use crate::dom::{Dom, Selector};

/// Every link whose `href` is a fragment (`a[href^="#"]`).
#[must_use]
pub fn selector() -> Selector {
    Selector::attr_prefix("a", "href", "#")
}

/// Target id of a fragment `href`. `None` for `"#"` and non-fragment links.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Handle activation of a fragment link.
///
/// The caller always suppresses default navigation. Returns the scroll offset
/// that was requested, or `None` when the link was empty or its target is
/// missing.
pub fn follow<D: Dom>(dom: &mut D, href: &str, header_offset: f64) -> Option<f64> {
    let id = fragment_id(href)?;
    let Some(target) = dom.element_by_id(id) else {
        log::debug!("anchor: no element with id {id:?}");
        return None;
    };
    let top = dom.offset_top(&target) - header_offset;
    dom.scroll_to(top);
    Some(top)
}
