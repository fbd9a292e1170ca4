//! Table-of-contents list repair.
//!
//! Some Markdown renderers emit a nested level as an `<ol>` sitting directly
//! inside the parent `<ol>`, next to the `<li>` it belongs under. Browsers
//! render that as a detached list. The repair moves each such `<ol>` into its
//! preceding `<li>`.

#[cfg(test)]
#[path = "toc_test.rs"]
mod toc_test;

use crate::dom::{Dom, Selector};

/// Class marking a table-of-contents container.
pub const TOC_CLASS: &str = "toc";

/// Re-parent misplaced nested lists in every `.toc`. Returns how many moved.
pub fn repair<D: Dom>(dom: &mut D) -> usize {
    let mut moved = 0;
    for toc in dom.query_all(&Selector::class(TOC_CLASS)) {
        for list in dom.query_within(&toc, &Selector::tag("ol")) {
            let Some(parent) = dom.parent(&list) else {
                continue;
            };
            if dom.tag_name(&parent) != "ol" {
                continue;
            }
            let Some(item) = dom.previous_element_sibling(&list) else {
                continue;
            };
            if dom.tag_name(&item) != "li" {
                continue;
            }
            dom.append_child(&item, &list);
            moved += 1;
        }
    }
    if moved > 0 {
        log::debug!("toc: re-parented {moved} nested list(s)");
    }
    moved
}
