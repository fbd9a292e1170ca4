//! In-memory document tree implementing [`Dom`].
//!
//! Nodes live in an arena indexed by [`NodeId`]; detached nodes stay in the
//! arena but are unreachable from the root, so queries never see them.
//! Geometry is whatever the caller assigns with [`MemoryDom::set_geometry`]:
//! there is no layout engine.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::BTreeMap;

use crate::dom::{ButtonSpec, Dom, Glyph, Selector};

/// Arena index of a node in a [`MemoryDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct NodeData {
    tag: String,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
    style: BTreeMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    top: f64,
    height: f64,
}

/// Arena-backed document with an `<html>` root and a `<body>` child.
#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: Vec<NodeData>,
    root: NodeId,
    body: NodeId,
    scroll_y: f64,
    scroll_calls: Vec<f64>,
    refuse_buttons: bool,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// Create a document containing only `<html><body></body></html>`.
    #[must_use]
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: vec![NodeData { tag: "html".to_owned(), ..NodeData::default() }],
            root: NodeId(0),
            body: NodeId(0),
            scroll_y: 0.0,
            scroll_calls: Vec::new(),
            refuse_buttons: false,
        };
        dom.body = dom.append(dom.root, "body");
        dom
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Create an element and append it to `parent`.
    pub fn append(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData { tag: tag.to_ascii_lowercase(), parent: Some(parent), ..NodeData::default() });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Set an attribute. `class` replaces the class list; `style` replaces inline style.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        match name {
            "class" => {
                self.nodes[node.0].classes = value.split_whitespace().map(str::to_owned).collect();
            }
            "style" => {
                self.nodes[node.0].style = parse_css_text(value);
            }
            _ => {
                self.nodes[node.0].attrs.insert(name.to_owned(), value.to_owned());
            }
        }
    }

    /// Assign document-relative geometry.
    pub fn set_geometry(&mut self, node: NodeId, top: f64, height: f64) {
        let data = &mut self.nodes[node.0];
        data.top = top;
        data.height = height;
    }

    /// Move the viewport without recording a scroll call, as the user would.
    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y;
    }

    /// Make [`Dom::create_button`] fail, as a browser does before `<body>` exists.
    pub fn refuse_buttons(&mut self, refuse: bool) {
        self.refuse_buttons = refuse;
    }

    /// Targets of every programmatic scroll so far, oldest first.
    #[must_use]
    pub fn scroll_calls(&self) -> &[f64] {
        &self.scroll_calls
    }

    /// Inline style property of `node`.
    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.nodes[node.0].style.get(property).map(String::as_str)
    }

    /// Inline style property of the `<html>` element.
    #[must_use]
    pub fn root_style(&self, property: &str) -> Option<&str> {
        self.style(self.root, property)
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Compact structural rendering, e.g. `ol(li(ol(li)),li)`.
    #[must_use]
    pub fn outline(&self, node: NodeId) -> String {
        let data = &self.nodes[node.0];
        if data.children.is_empty() {
            return data.tag.clone();
        }
        let inner = data.children.iter().map(|c| self.outline(*c)).collect::<Vec<_>>().join(",");
        format!("{}({inner})", data.tag)
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != node);
        }
    }

    /// Pre-order walk of the subtree below `scope`, excluding `scope` itself.
    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[scope.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    fn attr_value(&self, node: NodeId, name: &str) -> Option<String> {
        let data = &self.nodes[node.0];
        match name {
            "class" if data.classes.is_empty() => None,
            "class" => Some(data.classes.join(" ")),
            _ => data.attrs.get(name).cloned(),
        }
    }

    fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        let data = &self.nodes[node.0];
        match selector {
            Selector::Tag(tag) => data.tag.eq_ignore_ascii_case(tag),
            Selector::Class(class) => data.classes.iter().any(|c| c == class),
            Selector::WithAttr { tag, attr } => {
                data.tag.eq_ignore_ascii_case(tag) && self.attr_value(node, attr).is_some()
            }
            Selector::AttrPrefix { tag, attr, prefix } => {
                data.tag.eq_ignore_ascii_case(tag)
                    && self.attr_value(node, attr).is_some_and(|v| v.starts_with(prefix.as_str()))
            }
            Selector::AttrEquals { tag, attr, value } => {
                data.tag.eq_ignore_ascii_case(tag) && self.attr_value(node, attr).as_deref() == Some(value.as_str())
            }
            Selector::Descendant { outer, inner } => {
                if !self.matches(node, inner) {
                    return false;
                }
                let mut cursor = data.parent;
                while let Some(ancestor) = cursor {
                    if self.matches(ancestor, outer) {
                        return true;
                    }
                    cursor = self.nodes[ancestor.0].parent;
                }
                false
            }
            Selector::AnyOf(parts) => parts.iter().any(|part| self.matches(node, part)),
        }
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .find(|node| self.nodes[node.0].attrs.get("id").is_some_and(|v| v == id))
    }

    fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .filter(|node| self.matches(*node, selector))
            .collect()
    }

    fn query_within(&self, scope: &NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(*scope)
            .into_iter()
            .filter(|node| self.matches(*node, selector))
            .collect()
    }

    fn tag_name(&self, node: &NodeId) -> String {
        self.nodes[node.0].tag.clone()
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.attr_value(*node, name)
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes[node.0].classes.iter().any(|c| c == class)
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    fn previous_element_sibling(&self, node: &NodeId) -> Option<NodeId> {
        let parent = self.nodes[node.0].parent?;
        let siblings = &self.nodes[parent.0].children;
        let index = siblings.iter().position(|c| c == node)?;
        index.checked_sub(1).map(|i| siblings[i])
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.nodes[node.0].classes.push(class.to_owned());
        }
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        self.nodes[node.0].classes.retain(|c| c != class);
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        self.nodes[node.0].style.insert(property.to_owned(), value.to_owned());
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        self.detach(*child);
        self.nodes[child.0].parent = Some(*parent);
        self.nodes[parent.0].children.push(*child);
    }

    fn create_button(&mut self, spec: &ButtonSpec) -> Option<NodeId> {
        if self.refuse_buttons {
            return None;
        }
        let button = self.append(self.body, "button");
        self.set_attribute(button, "class", spec.class);
        self.set_attribute(button, "style", &spec.css);
        self.set_glyph(&button, spec.glyph);
        Some(button)
    }

    fn set_glyph(&mut self, node: &NodeId, glyph: Glyph) {
        for child in self.nodes[node.0].children.clone() {
            self.detach(child);
        }
        let icon = self.append(*node, "i");
        self.set_attribute(icon, "class", &format!("fas {}", glyph.class_name()));
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.attr_value(self.root, name)
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.set_attribute(self.root, name, value);
    }

    fn set_root_style_property(&mut self, name: &str, value: &str) {
        let root = self.root;
        self.set_style(&root, name, value);
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.nodes[node.0].top
    }

    fn offset_height(&self, node: &NodeId) -> f64 {
        self.nodes[node.0].height
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_to(&mut self, top: f64) {
        self.scroll_calls.push(top);
        self.scroll_y = top.max(0.0);
    }
}

/// Split `a: b; c: d` into a property map.
fn parse_css_text(css: &str) -> BTreeMap<String, String> {
    css.split(';')
        .filter_map(|decl| {
            let (name, value) = decl.split_once(':')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_owned(), value.trim().to_owned()))
        })
        .collect()
}
