//! Visitor pattern for document tree traversal.
//!
//! This module provides the trait and functions for walking a document
//! tree in document order.
//!
//! # Overview
//!
//! - [`Visitor`] - Read-only traversal trait with per-kind operations
//! - [`Descent`] - Signal returned by begin hooks to prune a subtree
//! - [`walk_tree`] - Entry point for traversing from a structural root
//! - [`walk_node`] - Dispatch function for a single node
//! - [`walk_children`] - Traverse all children of a node
//!
//! # Examples
//!
//! ## Counting nodes
//!
//! ```rust
//! use svgwalk_dom::{Arena, Node, NodeData, NodeKind, RectData};
//! use svgwalk_dom::visitor::{Visitor, walk_tree};
//!
//! struct Counter {
//!     count: usize,
//! }
//!
//! impl<'a> Visitor<'a> for Counter {
//!     fn visit(&mut self, _node: &Node<'a>) {
//!         self.count += 1;
//!     }
//! }
//!
//! let arena = Arena::new();
//! let rect = arena.alloc(Node::new_leaf(
//!     NodeKind::Rect,
//!     Some("r1"),
//!     NodeData::rect(RectData::new(0.0, 0.0, 10.0, 10.0)),
//! ));
//! let children = arena.alloc_slice_copy(&[*rect]);
//! let doc = Node::new_container(NodeKind::Document, None, children);
//!
//! let mut counter = Counter { count: 0 };
//! walk_tree(&mut counter, &doc);
//! assert_eq!(counter.count, 2); // Document + Rect
//! ```
//!
//! ## Pruning a subtree
//!
//! ```rust
//! use svgwalk_dom::{Descent, Node, Visitor};
//!
//! struct SkipDefs;
//!
//! impl<'a> Visitor<'a> for SkipDefs {
//!     fn begin_defs(&mut self, _node: &Node<'a>) -> Descent {
//!         Descent::Prune // children and end_defs are skipped
//!     }
//! }
//! ```

mod visit;
mod walk;

pub use visit::{Descent, Visitor};
pub use walk::{walk_children, walk_node, walk_tree};
