//! # svgwalk_dom
//!
//! Document tree model and traversal engine for svgwalk.
//!
//! This crate provides the in-memory representation of a parsed SVG-like
//! document (groups, defs, switches, and leaf drawing primitives) together
//! with a visitor-based traversal engine. Parsing is out of scope: the tree
//! is assumed to be already constructed, and the engine only borrows it.
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for arena allocation: all nodes of one document live in
//!   a single [`Arena`] and are freed together
//! - Nodes are `Copy` values; child lists and string payloads are slices
//!   borrowed from the arena
//! - A closed [`NodeKind`] enumeration drives exhaustive dispatch in the
//!   walk functions, so every kind is handled at compile time
//!
//! ## Example
//!
//! ```rust
//! use svgwalk_dom::{Arena, Node, NodeData, NodeKind, RectData};
//!
//! let arena = Arena::new();
//!
//! let rect = arena.alloc(Node::new_leaf(
//!     NodeKind::Rect,
//!     Some("r1"),
//!     NodeData::rect(RectData::new(0.0, 0.0, 10.0, 10.0)),
//! ));
//! let children = arena.alloc_slice_copy(&[*rect]);
//! let doc = Node::new_container(NodeKind::Document, None, children);
//!
//! assert!(doc.kind.is_structural());
//! assert_eq!(doc.children.len(), 1);
//! ```

mod arena;
mod geometry;
mod node;
mod node_kind;
pub mod visitor;

pub use arena::Arena;
pub use geometry::{EllipseData, LineData, PathSegment, Point, RectData};
pub use node::{ImageData, MediaData, Node, NodeData};
pub use node_kind::NodeKind;

// Re-export commonly used visitor items for convenience
pub use visitor::{Descent, Visitor, walk_children, walk_node, walk_tree};
