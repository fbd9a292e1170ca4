//! Page orchestrator: owns every behavior and routes host events to them.
//!
//! Lifecycle mirrors page loading:
//!
//! 1. [`PageBehaviors::install`] runs as soon as the module starts. It finds
//!    the nav, injects the two floating controls, restores the saved theme
//!    and arms reveal targets.
//! 2. [`PageBehaviors::on_ready`] runs once the document is parsed. It syncs
//!    theme variables, repairs TOC lists, starts intercepting anchor clicks
//!    and highlights the current section.
//! 3. [`PageBehaviors::handle`] is called for every event afterwards.
//!
//! Nothing here knows about the browser. The host attaches listeners to the
//! nodes exposed by the accessor methods and forwards them as [`PageEvent`]s.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::anchor;
use crate::back_to_top::BackToTop;
use crate::config::PageConfig;
use crate::dom::Dom;
use crate::highlight;
use crate::hover;
use crate::nav::MobileNav;
use crate::reveal::{Intersection, Reveal};
use crate::storage::PreferenceStore;
use crate::theme::{self, ThemeToggle};
use crate::toc;

/// Host event forwarded to [`PageBehaviors::handle`].
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent<N> {
    /// Click on `#mobileMenuBtn`.
    MenuButtonClicked,
    /// Click on a `.mobile-nav .nav-link`.
    NavLinkClicked,
    /// Click on an `a[href^="#"]`, carrying its `href`.
    AnchorClicked { href: String },
    /// Click on the injected back-to-top button.
    BackToTopClicked,
    /// Click on the injected theme switch.
    ThemeToggleClicked,
    /// Pointer entered a hover target.
    PointerEntered(N),
    /// Pointer left a hover target.
    PointerLeft(N),
    /// Viewport scrolled; the offset is read from the document.
    Scrolled,
    /// Batch from the reveal intersection source.
    Intersected(Vec<Intersection<N>>),
}

/// What the host must do with the originating DOM event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Call `preventDefault()` on the event.
    pub prevent_default: bool,
}

impl Outcome {
    const PASS: Self = Self { prevent_default: false };
    const PREVENT: Self = Self { prevent_default: true };
}

/// Every presentation behavior of the page.
#[derive(Debug, Clone)]
pub struct PageBehaviors<N> {
    config: PageConfig,
    nav: MobileNav<N>,
    back_to_top: Option<BackToTop<N>>,
    theme: Option<ThemeToggle<N>>,
    reveal: Reveal<N>,
    ready: bool,
}

impl<N: Clone + PartialEq> PageBehaviors<N> {
    /// Script-load phase: locate, inject, restore, arm.
    pub fn install<D, S>(dom: &mut D, store: &S, config: PageConfig) -> Self
    where
        D: Dom<Node = N>,
        S: PreferenceStore + ?Sized,
    {
        let nav = MobileNav::locate(&*dom);
        let back_to_top = BackToTop::install(dom, config.back_to_top_threshold_px);
        let theme = ThemeToggle::install(dom, store, &config.storage_key);
        let reveal = Reveal::arm(dom);
        log::info!("page behaviors installed");
        Self { config, nav, back_to_top, theme, reveal, ready: false }
    }

    /// Document-ready phase. Runs once; later calls return `false`.
    pub fn on_ready<D: Dom<Node = N>>(&mut self, dom: &mut D) -> bool {
        if self.ready {
            return false;
        }
        theme::apply_variables(dom, theme::attributed_mode(&*dom));
        toc::repair(dom);
        self.ready = true;
        let scroll_y = dom.scroll_y();
        highlight::highlight(dom, scroll_y, self.config.active_link_offset_px);
        true
    }

    /// Route one host event.
    pub fn handle<D, S>(&mut self, dom: &mut D, store: &mut S, event: PageEvent<N>) -> Outcome
    where
        D: Dom<Node = N>,
        S: PreferenceStore + ?Sized,
    {
        match event {
            PageEvent::MenuButtonClicked => {
                self.nav.toggle(dom);
                Outcome::PASS
            }
            PageEvent::NavLinkClicked => {
                self.nav.close(dom);
                Outcome::PASS
            }
            PageEvent::AnchorClicked { href } => {
                if !self.ready {
                    return Outcome::PASS;
                }
                anchor::follow(dom, &href, self.config.header_offset_px);
                Outcome::PREVENT
            }
            PageEvent::BackToTopClicked => {
                if let Some(control) = &self.back_to_top {
                    control.activate(dom);
                }
                Outcome::PASS
            }
            PageEvent::ThemeToggleClicked => {
                if let Some(toggle) = &mut self.theme {
                    toggle.toggle(dom, store);
                }
                Outcome::PASS
            }
            PageEvent::PointerEntered(node) => {
                hover::lift(dom, &node);
                Outcome::PASS
            }
            PageEvent::PointerLeft(node) => {
                hover::settle(dom, &node);
                Outcome::PASS
            }
            PageEvent::Scrolled => {
                self.on_scroll(dom);
                Outcome::PASS
            }
            PageEvent::Intersected(entries) => {
                self.reveal.on_intersection(dom, &entries);
                Outcome::PASS
            }
        }
    }

    /// Show every armed reveal target. The host calls this when it cannot
    /// create an intersection source.
    pub fn reveal_all<D: Dom<Node = N>>(&mut self, dom: &mut D) -> usize {
        self.reveal.release(dom)
    }

    /// Back-to-top first, then highlighting; both from the same offset.
    fn on_scroll<D: Dom<Node = N>>(&mut self, dom: &mut D) {
        let scroll_y = dom.scroll_y();
        if let Some(control) = &mut self.back_to_top {
            control.on_scroll(dom, scroll_y);
        }
        highlight::highlight(dom, scroll_y, self.config.active_link_offset_px);
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[must_use]
    pub fn nav(&self) -> &MobileNav<N> {
        &self.nav
    }

    #[must_use]
    pub fn back_to_top(&self) -> Option<&BackToTop<N>> {
        self.back_to_top.as_ref()
    }

    #[must_use]
    pub fn theme(&self) -> Option<&ThemeToggle<N>> {
        self.theme.as_ref()
    }

    #[must_use]
    pub fn reveal(&self) -> &Reveal<N> {
        &self.reveal
    }

    // --- Listener targets for the host ---

    /// Links that close the mobile nav.
    pub fn nav_links<D: Dom<Node = N>>(&self, dom: &D) -> Vec<N> {
        MobileNav::links(dom)
    }

    /// Fragment links to intercept once ready.
    pub fn anchor_links<D: Dom<Node = N>>(&self, dom: &D) -> Vec<N> {
        dom.query_all(&anchor::selector())
    }

    /// Cards and widgets that lift on hover.
    pub fn hover_targets<D: Dom<Node = N>>(&self, dom: &D) -> Vec<N> {
        dom.query_all(&hover::selector())
    }
}
