//! # svgwalk_dump
//!
//! Diagnostic consumers for svgwalk document trees.
//!
//! This crate exercises the [`svgwalk_dom`] visitor contract with two
//! reference implementations:
//!
//! - [`TreeDumper`] - produces a human-readable, indented trace of a
//!   traversal plus a total visited-node count
//! - [`NodeCounter`] - the minimal consumer: overrides only the generic
//!   fallback and counts every node
//!
//! Both hold transient state scoped to one traversal and perform no I/O
//! of their own; the dumper buffers its trace into a `String`.
//!
//! ## Example
//!
//! ```rust
//! use svgwalk_dom::{Arena, Node, NodeData, NodeKind, RectData};
//! use svgwalk_dump::TreeDumper;
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
//! let mut dumper = TreeDumper::new();
//! let trace = dumper.dump(&doc);
//! assert!(trace.contains("visit Rect r1"));
//! assert_eq!(dumper.visited(), 2);
//! ```

mod counter;
mod dumper;

pub use counter::NodeCounter;
pub use dumper::TreeDumper;
