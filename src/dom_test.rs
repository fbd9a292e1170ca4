use super::*;

// =============================================================
// Selector::to_css
// =============================================================

#[test]
fn simple_selectors_render() {
    assert_eq!(Selector::tag("ol").to_css(), "ol");
    assert_eq!(Selector::class("toc").to_css(), ".toc");
    assert_eq!(Selector::with_attr("section", "id").to_css(), "section[id]");
}

#[test]
fn attribute_selectors_render_quoted() {
    assert_eq!(Selector::attr_prefix("a", "href", "#").to_css(), "a[href^=\"#\"]");
    assert_eq!(Selector::attr_equals("a", "href", "#intro").to_css(), "a[href=\"#intro\"]");
}

#[test]
fn attribute_values_are_escaped() {
    assert_eq!(Selector::attr_equals("a", "href", "#a\"b\\c").to_css(), "a[href=\"#a\\\"b\\\\c\"]");
}

#[test]
fn numeric_ids_are_safe_inside_quotes() {
    assert_eq!(Selector::attr_equals("a", "href", "#1-intro").to_css(), "a[href=\"#1-intro\"]");
}

#[test]
fn compound_selectors_render() {
    let nav_links = Selector::descendant(Selector::class("mobile-nav"), Selector::class("nav-link"));
    assert_eq!(nav_links.to_css(), ".mobile-nav .nav-link");
    assert_eq!(Selector::any_class(&["post", "page"]).to_css(), ".post, .page");
}

#[test]
fn display_matches_css() {
    let selector = Selector::any_class(&["post-preview", "widget"]);
    assert_eq!(selector.to_string(), selector.to_css());
}

// =============================================================
// Glyph
// =============================================================

#[test]
fn glyph_class_names() {
    assert_eq!(Glyph::Bars.class_name(), "fa-bars");
    assert_eq!(Glyph::Close.class_name(), "fa-times");
    assert_eq!(Glyph::ArrowUp.class_name(), "fa-arrow-up");
    assert_eq!(Glyph::Moon.class_name(), "fa-moon");
    assert_eq!(Glyph::Sun.class_name(), "fa-sun");
}

#[test]
fn glyph_html_wraps_icon() {
    assert_eq!(Glyph::Sun.html(), "<i class=\"fas fa-sun\"></i>");
}
