//! Hover lift for post cards and sidebar widgets.

#[cfg(test)]
#[path = "hover_test.rs"]
mod hover_test;

use crate::dom::{Dom, Selector};

const LIFTED: &str = "translateY(-2px)";
const RESTING: &str = "translateY(0)";

/// Elements that lift under the pointer.
#[must_use]
pub fn selector() -> Selector {
    Selector::any_class(&["post-preview", "widget"])
}

/// Pointer entered `node`.
pub fn lift<D: Dom>(dom: &mut D, node: &D::Node) {
    dom.set_style(node, "transform", LIFTED);
}

/// Pointer left `node`.
pub fn settle<D: Dom>(dom: &mut D, node: &D::Node) {
    dom.set_style(node, "transform", RESTING);
}
