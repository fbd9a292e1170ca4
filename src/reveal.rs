//! Reveal-on-scroll for posts, pages and widgets.
//!
//! Targets are armed transparent and shifted down with a transition already
//! set, so flipping the two properties animates. Reveal is one-way: once an
//! element has been shown, later intersection reports are ignored.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::dom::{Dom, Selector};

const TRANSITION: &str = "opacity 0.5s ease, transform 0.5s ease";

/// One report from the intersection source.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection<N> {
    pub target: N,
    pub is_intersecting: bool,
}

/// Elements that fade in.
#[must_use]
pub fn selector() -> Selector {
    Selector::any_class(&["post", "post-preview", "page", "widget"])
}

/// Armed and revealed targets.
#[derive(Debug, Clone)]
pub struct Reveal<N> {
    pending: Vec<N>,
    revealed: Vec<N>,
}

impl<N> Default for Reveal<N> {
    fn default() -> Self {
        Self { pending: Vec::new(), revealed: Vec::new() }
    }
}

impl<N: Clone + PartialEq> Reveal<N> {
    /// Hide every target and prime its transition.
    pub fn arm<D: Dom<Node = N>>(dom: &mut D) -> Self {
        let pending = dom.query_all(&selector());
        for node in &pending {
            dom.set_style(node, "opacity", "0");
            dom.set_style(node, "transform", "translateY(20px)");
            dom.set_style(node, "transition", TRANSITION);
        }
        log::debug!("reveal: armed {} element(s)", pending.len());
        Self { pending, revealed: Vec::new() }
    }

    /// Elements the intersection source should observe.
    #[must_use]
    pub fn targets(&self) -> &[N] {
        &self.pending
    }

    #[must_use]
    pub fn is_revealed(&self, node: &N) -> bool {
        self.revealed.contains(node)
    }

    /// Show every pending target at once. Used when no intersection source
    /// can be created, so armed elements never stay hidden.
    pub fn release<D: Dom<Node = N>>(&mut self, dom: &mut D) -> usize {
        let pending = std::mem::take(&mut self.pending);
        let count = pending.len();
        for node in pending {
            show(dom, &node);
            self.revealed.push(node);
        }
        log::debug!("reveal: released {count} element(s)");
        count
    }

    /// Apply a batch of intersection reports. Returns how many were revealed.
    pub fn on_intersection<D: Dom<Node = N>>(&mut self, dom: &mut D, entries: &[Intersection<N>]) -> usize {
        let mut count = 0;
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            let Some(index) = self.pending.iter().position(|n| *n == entry.target) else {
                continue;
            };
            let node = self.pending.swap_remove(index);
            show(dom, &node);
            self.revealed.push(node);
            count += 1;
        }
        count
    }
}

fn show<D: Dom>(dom: &mut D, node: &D::Node) {
    dom.set_style(node, "opacity", "1");
    dom.set_style(node, "transform", "translateY(0)");
}
