//! Document interface: the narrow read/write surface behaviors depend on.
//!
//! Behaviors never touch a concrete document. They query and mutate through
//! [`Dom`], which is implemented by [`crate::memory::MemoryDom`] for tests and
//! headless hosts and by `crate::browser::WebDom` in the browser.
//!
//! Every operation is infallible from the caller's point of view. Missing
//! nodes are expressed as `None` or an empty `Vec`; implementations swallow
//! and log host failures instead of surfacing them.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::fmt;

/// Structural selector understood by every [`Dom`] implementation.
///
/// Covers exactly the shapes the theme needs. [`Selector::to_css`] renders the
/// equivalent CSS for hosts that delegate to `querySelectorAll`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Element with the given tag name (`ol`).
    Tag(String),
    /// Element carrying the class (`.toc`).
    Class(String),
    /// Element with the tag that has the attribute at all (`section[id]`).
    WithAttr { tag: String, attr: String },
    /// Attribute value starts with the prefix (`a[href^="#"]`).
    AttrPrefix { tag: String, attr: String, prefix: String },
    /// Attribute value equals the value exactly (`a[href="#intro"]`).
    AttrEquals { tag: String, attr: String, value: String },
    /// `inner` elements that have an `outer` ancestor (`.mobile-nav .nav-link`).
    Descendant { outer: Box<Selector>, inner: Box<Selector> },
    /// Union of selectors (`.post, .widget`).
    AnyOf(Vec<Selector>),
}

impl Selector {
    #[must_use]
    pub fn tag(tag: &str) -> Self {
        Self::Tag(tag.to_owned())
    }

    #[must_use]
    pub fn class(class: &str) -> Self {
        Self::Class(class.to_owned())
    }

    #[must_use]
    pub fn any_class(classes: &[&str]) -> Self {
        Self::AnyOf(classes.iter().map(|c| Self::class(c)).collect())
    }

    #[must_use]
    pub fn with_attr(tag: &str, attr: &str) -> Self {
        Self::WithAttr { tag: tag.to_owned(), attr: attr.to_owned() }
    }

    #[must_use]
    pub fn attr_prefix(tag: &str, attr: &str, prefix: &str) -> Self {
        Self::AttrPrefix { tag: tag.to_owned(), attr: attr.to_owned(), prefix: prefix.to_owned() }
    }

    #[must_use]
    pub fn attr_equals(tag: &str, attr: &str, value: &str) -> Self {
        Self::AttrEquals { tag: tag.to_owned(), attr: attr.to_owned(), value: value.to_owned() }
    }

    #[must_use]
    pub fn descendant(outer: Selector, inner: Selector) -> Self {
        Self::Descendant { outer: Box::new(outer), inner: Box::new(inner) }
    }

    /// Render as a CSS selector string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Tag(tag) => tag.clone(),
            Self::Class(class) => format!(".{class}"),
            Self::WithAttr { tag, attr } => format!("{tag}[{attr}]"),
            Self::AttrPrefix { tag, attr, prefix } => format!("{tag}[{attr}^=\"{}\"]", escape_css_string(prefix)),
            Self::AttrEquals { tag, attr, value } => format!("{tag}[{attr}=\"{}\"]", escape_css_string(value)),
            Self::Descendant { outer, inner } => format!("{} {}", outer.to_css(), inner.to_css()),
            Self::AnyOf(parts) => parts.iter().map(Selector::to_css).collect::<Vec<_>>().join(", "),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Escape a value for use inside a double-quoted CSS string.
fn escape_css_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Font Awesome glyph shown inside a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Hamburger icon of a closed menu.
    Bars,
    /// Cross icon of an open menu.
    Close,
    /// Back-to-top arrow.
    ArrowUp,
    /// Shown while the page is light.
    Moon,
    /// Shown while the page is dark.
    Sun,
}

impl Glyph {
    /// Icon class name (`fa-bars`).
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Bars => "fa-bars",
            Self::Close => "fa-times",
            Self::ArrowUp => "fa-arrow-up",
            Self::Moon => "fa-moon",
            Self::Sun => "fa-sun",
        }
    }

    /// Markup for the icon element, as placed inside a button.
    #[must_use]
    pub fn html(self) -> String {
        format!("<i class=\"fas {}\"></i>", self.class_name())
    }
}

/// Description of a floating control injected into `<body>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    /// Class name of the button element.
    pub class: &'static str,
    /// Initial icon.
    pub glyph: Glyph,
    /// Inline `style` text.
    pub css: String,
}

/// Read/write access to a document tree and its viewport.
pub trait Dom {
    /// Handle to an element. Cheap to clone; equality means same element.
    type Node: Clone + PartialEq + fmt::Debug;

    // --- Queries ---

    /// Element with the given `id`, if any.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &Selector) -> Vec<Self::Node>;

    /// Descendants of `scope` matching `selector`, in document order.
    fn query_within(&self, scope: &Self::Node, selector: &Selector) -> Vec<Self::Node>;

    /// First descendant of `scope` matching `selector`.
    fn first_within(&self, scope: &Self::Node, selector: &Selector) -> Option<Self::Node> {
        self.query_within(scope, selector).into_iter().next()
    }

    /// Lowercase tag name.
    fn tag_name(&self, node: &Self::Node) -> String;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Parent element, `None` at the root.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    fn previous_element_sibling(&self, node: &Self::Node) -> Option<Self::Node>;

    // --- Mutations ---

    fn add_class(&mut self, node: &Self::Node, class: &str);

    fn remove_class(&mut self, node: &Self::Node, class: &str);

    /// Set one inline style property (`opacity`, `transform`, ...).
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);

    /// Move `child` to the end of `parent`'s children.
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);

    /// Create a `<button>` from `spec` and append it to `<body>`.
    fn create_button(&mut self, spec: &ButtonSpec) -> Option<Self::Node>;

    /// Replace the icon inside a control.
    fn set_glyph(&mut self, node: &Self::Node, glyph: Glyph);

    // --- Root element ---

    /// Attribute on `<html>`.
    fn root_attribute(&self, name: &str) -> Option<String>;

    fn set_root_attribute(&mut self, name: &str, value: &str);

    /// Set a custom property in `<html>`'s inline style.
    fn set_root_style_property(&mut self, name: &str, value: &str);

    // --- Geometry / viewport ---

    /// Document-relative top offset in CSS pixels.
    fn offset_top(&self, node: &Self::Node) -> f64;

    /// Rendered height in CSS pixels.
    fn offset_height(&self, node: &Self::Node) -> f64;

    /// Current vertical scroll offset of the viewport.
    fn scroll_y(&self) -> f64;

    /// Smooth-scroll the viewport to `top`.
    fn scroll_to(&mut self, top: f64);
}
