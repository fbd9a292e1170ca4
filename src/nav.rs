//! Mobile navigation toggle.
//!
//! The open/closed flag is owned here and written to the container's
//! `mobile-nav-open` class at every transition. The icon inside the menu
//! button follows the flag: bars when closed, a cross when open.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{MENU_BUTTON_ID, MOBILE_NAV_ID, MOBILE_NAV_OPEN_CLASS, MOBILE_NAV_SCOPE_CLASS, NAV_LINK_CLASS};
use crate::dom::{Dom, Glyph, Selector};

/// State of the collapsible mobile menu.
#[derive(Debug, Clone)]
pub struct MobileNav<N> {
    button: Option<N>,
    container: Option<N>,
    open: bool,
}

impl<N: Clone + PartialEq> MobileNav<N> {
    /// Locate the menu button and container. Either may be missing.
    pub fn locate<D: Dom<Node = N>>(dom: &D) -> Self {
        let button = dom.element_by_id(MENU_BUTTON_ID);
        let container = dom.element_by_id(MOBILE_NAV_ID);
        let open = container
            .as_ref()
            .is_some_and(|c| dom.has_class(c, MOBILE_NAV_OPEN_CLASS));
        Self { button, container, open }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn button(&self) -> Option<&N> {
        self.button.as_ref()
    }

    /// Links that close the menu when clicked (`.mobile-nav .nav-link`).
    pub fn links<D: Dom<Node = N>>(dom: &D) -> Vec<N> {
        dom.query_all(&link_selector())
    }

    /// Flip open/closed. No-op unless both button and container exist.
    pub fn toggle<D: Dom<Node = N>>(&mut self, dom: &mut D) {
        if self.button.is_none() || self.container.is_none() {
            return;
        }
        self.set_open(dom, !self.open);
    }

    /// Force closed, whatever the current state.
    pub fn close<D: Dom<Node = N>>(&mut self, dom: &mut D) {
        if self.button.is_none() || self.container.is_none() {
            return;
        }
        self.set_open(dom, false);
    }

    fn set_open<D: Dom<Node = N>>(&mut self, dom: &mut D, open: bool) {
        self.open = open;
        log::debug!("mobile nav {}", if open { "opened" } else { "closed" });

        if let Some(container) = &self.container {
            if open {
                dom.add_class(container, MOBILE_NAV_OPEN_CLASS);
            } else {
                dom.remove_class(container, MOBILE_NAV_OPEN_CLASS);
            }
        }

        let Some(icon) = self.button.as_ref().and_then(|b| dom.first_within(b, &Selector::tag("i"))) else {
            return;
        };
        let (from, to) = if open { (Glyph::Bars, Glyph::Close) } else { (Glyph::Close, Glyph::Bars) };
        dom.remove_class(&icon, from.class_name());
        dom.add_class(&icon, to.class_name());
    }
}

fn link_selector() -> Selector {
    Selector::descendant(Selector::class(MOBILE_NAV_SCOPE_CLASS), Selector::class(NAV_LINK_CLASS))
}
