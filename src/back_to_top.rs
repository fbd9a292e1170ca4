//! Floating back-to-top button.

#[cfg(test)]
#[path = "back_to_top_test.rs"]
mod back_to_top_test;

use crate::consts::BACK_TO_TOP_CLASS;
use crate::dom::{ButtonSpec, Dom, Glyph};

const BUTTON_CSS: &str = "position: fixed; bottom: 20px; right: 20px; width: 50px; height: 50px; \
    border: none; border-radius: 50%; background-color: var(--primary-color); color: white; \
    font-size: 20px; cursor: pointer; opacity: 0; visibility: hidden; transition: all 0.3s ease; \
    z-index: 999; box-shadow: 0 2px 10px rgba(0, 0, 0, 0.2);";

/// The injected button and whether it is currently shown.
#[derive(Debug, Clone)]
pub struct BackToTop<N> {
    button: N,
    threshold: f64,
    visible: bool,
}

impl<N: Clone + PartialEq> BackToTop<N> {
    /// Create the button (hidden) and append it to the body.
    pub fn install<D: Dom<Node = N>>(dom: &mut D, threshold: f64) -> Option<Self> {
        let spec = ButtonSpec { class: BACK_TO_TOP_CLASS, glyph: Glyph::ArrowUp, css: BUTTON_CSS.to_owned() };
        let button = dom.create_button(&spec)?;
        Some(Self { button, threshold, visible: false })
    }

    #[must_use]
    pub fn button(&self) -> &N {
        &self.button
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the button should show at `scroll_y`. Strictly above the threshold.
    #[must_use]
    pub fn visible_at(&self, scroll_y: f64) -> bool {
        scroll_y > self.threshold
    }

    /// Recompute visibility from the current scroll offset.
    pub fn on_scroll<D: Dom<Node = N>>(&mut self, dom: &mut D, scroll_y: f64) {
        let visible = self.visible_at(scroll_y);
        if visible != self.visible {
            log::debug!("back-to-top {}", if visible { "shown" } else { "hidden" });
        }
        self.visible = visible;
        let (opacity, visibility) = if visible { ("1", "visible") } else { ("0", "hidden") };
        dom.set_style(&self.button, "opacity", opacity);
        dom.set_style(&self.button, "visibility", visibility);
    }

    /// Smooth-scroll to the top of the page.
    pub fn activate<D: Dom<Node = N>>(&self, dom: &mut D) {
        dom.scroll_to(0.0);
    }
}
