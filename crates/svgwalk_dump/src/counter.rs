//! Minimal node-counting consumer.

use svgwalk_dom::{Node, Visitor, walk_tree};

/// Counts every node in a tree.
///
/// The smallest useful consumer: it overrides only the generic fallback,
/// so every default operation (structural begins and leaf visits alike)
/// funnels into one increment.
#[derive(Debug, Default)]
pub struct NodeCounter {
    count: usize,
}

impl NodeCounter {
    /// Creates a new counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the nodes reachable from `root` and returns the total.
    pub fn count_tree(root: &Node<'_>) -> usize {
        let mut counter = Self::new();
        walk_tree(&mut counter, root);
        counter.count
    }

    /// Returns the count accumulated so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<'a> Visitor<'a> for NodeCounter {
    fn visit(&mut self, _node: &Node<'a>) {
        self.count += 1;
    }
}
