use super::*;
use crate::memory::MemoryDom;

#[test]
fn selector_matches_cards_and_widgets() {
    let mut dom = MemoryDom::new();
    let body = dom.body();
    let card = dom.append(body, "article");
    dom.set_attribute(card, "class", "post-preview");
    let widget = dom.append(body, "aside");
    dom.set_attribute(widget, "class", "widget recent-posts");
    let post = dom.append(body, "article");
    dom.set_attribute(post, "class", "post");

    assert_eq!(dom.query_all(&selector()), vec![card, widget]);
}

#[test]
fn lift_then_settle_restores_baseline() {
    let mut dom = MemoryDom::new();
    let body = dom.body();
    let card = dom.append(body, "article");

    lift(&mut dom, &card);
    assert_eq!(dom.style(card, "transform"), Some("translateY(-2px)"));
    settle(&mut dom, &card);
    assert_eq!(dom.style(card, "transform"), Some("translateY(0)"));
}

#[test]
fn repeated_enter_is_stable() {
    let mut dom = MemoryDom::new();
    let body = dom.body();
    let card = dom.append(body, "article");

    lift(&mut dom, &card);
    lift(&mut dom, &card);
    assert_eq!(dom.style(card, "transform"), Some("translateY(-2px)"));
}
