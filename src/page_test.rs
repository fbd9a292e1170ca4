#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{MENU_BUTTON_ID, MOBILE_NAV_ID, MOBILE_NAV_OPEN_CLASS, THEME_ATTRIBUTE};
use crate::dom::Selector;
use crate::memory::{MemoryDom, NodeId};
use crate::storage::MemoryStore;
use crate::theme::{DARK, LIGHT, ThemeMode};

// =============================================================
// Helpers
// =============================================================

/// A post page: header with mobile nav, two sections, a TOC, cards.
struct Fixture {
    dom: MemoryDom,
    store: MemoryStore,
    nav_container: NodeId,
    menu_icon: NodeId,
    link_intro: NodeId,
    link_usage: NodeId,
    card: NodeId,
    toc_outer: NodeId,
}

fn fixture() -> Fixture {
    fixture_with_store(MemoryStore::new())
}

fn fixture_with_store(store: MemoryStore) -> Fixture {
    let mut dom = MemoryDom::new();
    let body = dom.body();

    let header = dom.append(body, "header");
    let button = dom.append(header, "button");
    dom.set_attribute(button, "id", MENU_BUTTON_ID);
    let menu_icon = dom.append(button, "i");
    dom.set_attribute(menu_icon, "class", "fas fa-bars");

    let nav_container = dom.append(header, "nav");
    dom.set_attribute(nav_container, "id", MOBILE_NAV_ID);
    dom.set_attribute(nav_container, "class", "mobile-nav");
    let link_intro = dom.append(nav_container, "a");
    dom.set_attribute(link_intro, "class", "nav-link");
    dom.set_attribute(link_intro, "href", "#intro");
    let link_usage = dom.append(nav_container, "a");
    dom.set_attribute(link_usage, "class", "nav-link");
    dom.set_attribute(link_usage, "href", "#usage");

    let main = dom.append(body, "main");
    for (id, top) in [("intro", 0.0), ("usage", 500.0)] {
        let section = dom.append(main, "section");
        dom.set_attribute(section, "id", id);
        dom.set_geometry(section, top, 500.0);
    }

    let toc = dom.append(main, "nav");
    dom.set_attribute(toc, "class", "toc");
    let toc_outer = dom.append(toc, "ol");
    dom.append(toc_outer, "li");
    let inner = dom.append(toc_outer, "ol");
    dom.append(inner, "li");

    let card = dom.append(main, "article");
    dom.set_attribute(card, "class", "post-preview");

    Fixture { dom, store, nav_container, menu_icon, link_intro, link_usage, card, toc_outer }
}

fn install(fx: &mut Fixture) -> PageBehaviors<NodeId> {
    PageBehaviors::install(&mut fx.dom, &fx.store, PageConfig::default())
}

fn ready(fx: &mut Fixture) -> PageBehaviors<NodeId> {
    let mut page = install(fx);
    assert!(page.on_ready(&mut fx.dom));
    page
}

fn send(page: &mut PageBehaviors<NodeId>, fx: &mut Fixture, event: PageEvent<NodeId>) -> Outcome {
    page.handle(&mut fx.dom, &mut fx.store, event)
}

fn scroll(page: &mut PageBehaviors<NodeId>, fx: &mut Fixture, y: f64) {
    fx.dom.set_scroll_y(y);
    send(page, fx, PageEvent::Scrolled);
}

// =============================================================
// Install / ready
// =============================================================

#[test]
fn install_injects_both_controls() {
    let mut fx = fixture();
    let page = install(&mut fx);
    let body = fx.dom.body();

    let back = page.back_to_top().unwrap();
    let theme = page.theme().unwrap();
    assert_eq!(fx.dom.parent(back.button()), Some(body));
    assert_eq!(fx.dom.parent(theme.button()), Some(body));
    assert_eq!(fx.dom.query_all(&Selector::class("back-to-top")).len(), 1);
    assert_eq!(fx.dom.query_all(&Selector::class("theme-toggle")).len(), 1);
}

#[test]
fn install_arms_reveal_and_leaves_ready_work_pending() {
    let mut fx = fixture();
    let page = install(&mut fx);

    assert!(!page.is_ready());
    assert_eq!(fx.dom.style(fx.card, "opacity"), Some("0"));
    assert_eq!(fx.dom.root_style("--bg-primary"), None);
    assert_eq!(fx.dom.outline(fx.toc_outer), "ol(li,ol(li))");
}

#[test]
fn ready_applies_light_variables_when_unattributed() {
    let mut fx = fixture();
    ready(&mut fx);
    for (name, value) in LIGHT.properties() {
        assert_eq!(fx.dom.root_style(name), Some(value));
    }
}

#[test]
fn ready_applies_dark_variables_for_saved_dark() {
    let mut fx = fixture_with_store(MemoryStore::with("theme", "dark"));
    ready(&mut fx);
    for (name, value) in DARK.properties() {
        assert_eq!(fx.dom.root_style(name), Some(value));
    }
}

#[test]
fn saved_dark_survives_missing_controls() {
    let mut fx = fixture_with_store(MemoryStore::with("theme", "dark"));
    fx.dom.refuse_buttons(true);
    let page = ready(&mut fx);

    assert!(page.theme().is_none());
    assert!(page.back_to_top().is_none());
    assert_eq!(fx.dom.root_attribute(THEME_ATTRIBUTE).as_deref(), Some("dark"));
    for (name, value) in DARK.properties() {
        assert_eq!(fx.dom.root_style(name), Some(value));
    }
}

#[test]
fn reveal_all_unhides_armed_targets() {
    let mut fx = fixture();
    let mut page = install(&mut fx);
    assert_eq!(fx.dom.style(fx.card, "opacity"), Some("0"));

    assert_eq!(page.reveal_all(&mut fx.dom), 1);
    assert_eq!(fx.dom.style(fx.card, "opacity"), Some("1"));
    assert!(page.reveal().is_revealed(&fx.card));
}

#[test]
fn ready_honors_attribute_set_before_load() {
    let mut fx = fixture();
    fx.dom.set_root_attribute(THEME_ATTRIBUTE, "dark");
    ready(&mut fx);
    assert_eq!(fx.dom.root_style("--bg-primary"), Some(DARK.bg_primary));
}

#[test]
fn ready_repairs_toc() {
    let mut fx = fixture();
    ready(&mut fx);
    assert_eq!(fx.dom.outline(fx.toc_outer), "ol(li(ol(li)))");
}

#[test]
fn ready_highlights_restored_scroll_position() {
    let mut fx = fixture();
    fx.dom.set_scroll_y(600.0);
    ready(&mut fx);
    assert!(fx.dom.has_class(&fx.link_usage, "active"));
    assert!(!fx.dom.has_class(&fx.link_intro, "active"));
}

#[test]
fn ready_runs_once() {
    let mut fx = fixture();
    let mut page = ready(&mut fx);
    assert!(!page.on_ready(&mut fx.dom));
}

#[test]
fn listener_targets_are_exposed() {
    let mut fx = fixture();
    let page = install(&mut fx);
    assert_eq!(page.nav_links(&fx.dom), vec![fx.link_intro, fx.link_usage]);
    assert_eq!(page.anchor_links(&fx.dom), vec![fx.link_intro, fx.link_usage]);
    assert_eq!(page.hover_targets(&fx.dom), vec![fx.card]);
    assert_eq!(page.reveal().targets(), &[fx.card]);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn menu_clicks_toggle_nav() {
    let mut fx = fixture();
    let mut page = ready(&mut fx);

    send(&mut page, &mut fx, PageEvent::MenuButtonClicked);
    assert!(fx.dom.has_class(&fx.nav_container, MOBILE_NAV_OPEN_CLASS));
    assert!(fx.dom.has_class(&fx.menu_icon, "fa-times"));

    send(&mut page, &mut fx, PageEvent::MenuButtonClicked);
    assert!(!fx.dom.has_class(&fx.nav_container, MOBILE_NAV_OPEN_CLASS));
    assert!(fx.dom.has_class(&fx.menu_icon, "fa-bars"));
}

#[test]
fn nav_link_click_always_closes() {
    let mut fx = fixture();
    let mut page = ready(&mut fx);

    send(&mut page, &mut fx, PageEvent::MenuButtonClicked);
    send(&mut page, &mut fx, PageEvent::NavLinkClicked);
    assert!(!page.nav().is_open());
    assert!(!fx.dom.has_class(&fx.nav_container, MOBILE_NAV_OPEN_CLASS));

    send(&mut page, &mut fx, PageEvent::NavLinkClicked);
    assert!(!page.nav().is_open());
    assert!(fx.dom.has_class(&fx.menu_icon, "fa-bars"));
}

// =============================================================
// Anchors
// =============================================================

#[test]
fn anchor_click_prevents_default_and_scrolls() {
    let mut fx = fixture();
    let mut page = ready(&mut fx);

    let outcome = send(&mut page, &mut fx, PageEvent::AnchorClicked { href: "#usage".to_owned() });
    assert!(outcome.prevent_default);
    assert_eq!(fx.dom.scroll_calls(), &[420.0]);
}

#[test]
fn anchor_to_missing_id_prevents_default_without_scrolling() {
    let mut fx = fixture();
    let mut page = ready(&mut fx);

    let outcome = send(&mut page, &mut fx, PageEvent::AnchorClicked { href: "#missing".to_owned() });
    assert!(outcome.prevent_default);
    assert!(fx.dom.scroll_calls().is_empty());
}

#[test]
fn bare_hash_prevents_default_without_scrolling() {
    let mut fx = fixture();
    let mut page = ready(&mut fx);

    let outcome = send(&mut page, &mut fx, PageEvent::AnchorClicked { href: "#".to_owned() });
    assert!(outcome.prevent_default);
    assert!(fx.dom.scroll_calls().is_empty());
}

#[test]
fn anchor_before_ready_is_not_intercepted() {
    let mut fx = fixture();
    let mut page = install(&mut fx);

    let outcome = send(&mut page, &mut fx, PageEvent::AnchorClicked { href: "#usage".to_owned() });
    assert!(!outcome.prevent_default);
    assert!(fx.dom.scroll_calls().is_empty());
}

#[test]
fn header_offset_comes_from_config() {
    let mut fx = fixture();
    let config = PageConfig { header_offset_px: 60.0, ..PageConfig::default() };
    let mut page = PageBehaviors::install(&mut fx.dom, &fx.store, config);
    page.on_ready(&mut fx.dom);

    send(&mut page, &mut fx, PageEvent::AnchorClicked { href: "#usage".to_owned() });
    assert_eq!(fx.dom.scroll_calls()[0], 440.0);
}

// =============================================================
// Scroll
// =============================================================

#[test]
fn scroll_updates_back_to_top_at_exclusive_threshold() {
    let mut fx = fixture();
    let mut page = ready(&mut fx);

    for (y, visible) in [(299.0, false), (300.0, false), (301.0, true), (0.0, false)] {
        scroll(&mut page, &mut fx, y);
        assert_eq!(page.back_to_top().unwrap().is_visible(), visible, "scroll_y = {y}");
    }
}

#[test]
fn scroll_updates_active_link() {
    let mut fx = fixture();
    let mut page = ready(&mut fx);

    scroll(&mut page, &mut fx, 350.0);
    assert!(fx.dom.has_class(&fx.link_intro, "active"));
    assert!(!fx.dom.has_class(&fx.link_usage, "active"));

    scroll(&mut page, &mut fx, 400.0);
    assert!(!fx.dom.has_class(&fx.link_intro, "active"));
    assert!(fx.dom.has_class(&fx.link_usage, "active"));
}

#[test]
fn back_to_top_click_scrolls_home() {
    let mut fx = fixture();
    let mut page = ready(&mut fx);
    scroll(&mut page, &mut fx, 900.0);

    send(&mut page, &mut fx, PageEvent::BackToTopClicked);
    assert_eq!(fx.dom.scroll_y(), 0.0);
    assert_eq!(fx.dom.scroll_calls().last(), Some(&0.0));
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_clicks_round_trip_to_light() {
    let mut fx = fixture();
    let mut page = ready(&mut fx);

    send(&mut page, &mut fx, PageEvent::ThemeToggleClicked);
    assert_eq!(page.theme().unwrap().mode(), ThemeMode::Dark);
    assert_eq!(fx.store.get("theme").as_deref(), Some("dark"));

    send(&mut page, &mut fx, PageEvent::ThemeToggleClicked);
    assert_eq!(page.theme().unwrap().mode(), ThemeMode::Light);
    assert_eq!(fx.store.get("theme").as_deref(), Some("light"));
    for (name, value) in LIGHT.properties() {
        assert_eq!(fx.dom.root_style(name), Some(value));
    }
}

// =============================================================
// Hover / reveal
// =============================================================

#[test]
fn pointer_events_lift_and_settle() {
    let mut fx = fixture();
    let mut page = ready(&mut fx);
    let card = fx.card;

    send(&mut page, &mut fx, PageEvent::PointerEntered(card));
    assert_eq!(fx.dom.style(card, "transform"), Some("translateY(-2px)"));
    send(&mut page, &mut fx, PageEvent::PointerLeft(card));
    assert_eq!(fx.dom.style(card, "transform"), Some("translateY(0)"));
}

#[test]
fn reveal_is_one_way() {
    let mut fx = fixture();
    let mut page = ready(&mut fx);
    let card = fx.card;

    send(&mut page, &mut fx, PageEvent::Intersected(vec![Intersection { target: card, is_intersecting: false }]));
    assert_eq!(fx.dom.style(card, "opacity"), Some("0"));

    send(&mut page, &mut fx, PageEvent::Intersected(vec![Intersection { target: card, is_intersecting: true }]));
    assert_eq!(fx.dom.style(card, "opacity"), Some("1"));

    send(&mut page, &mut fx, PageEvent::Intersected(vec![Intersection { target: card, is_intersecting: false }]));
    assert_eq!(fx.dom.style(card, "opacity"), Some("1"));
    assert!(page.reveal().is_revealed(&card));
}

// =============================================================
// Bare document
// =============================================================

#[test]
fn empty_document_tolerates_every_event() {
    let mut dom = MemoryDom::new();
    let mut store = MemoryStore::new();
    let mut page = PageBehaviors::install(&mut dom, &store, PageConfig::default());
    page.on_ready(&mut dom);

    let stray = dom.body();
    let events = [
        PageEvent::MenuButtonClicked,
        PageEvent::NavLinkClicked,
        PageEvent::AnchorClicked { href: "#nothing".to_owned() },
        PageEvent::BackToTopClicked,
        PageEvent::ThemeToggleClicked,
        PageEvent::PointerEntered(stray),
        PageEvent::PointerLeft(stray),
        PageEvent::Scrolled,
        PageEvent::Intersected(Vec::new()),
    ];
    for event in events {
        page.handle(&mut dom, &mut store, event);
    }
    assert!(!page.nav().is_open());
}
