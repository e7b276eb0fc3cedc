//! Visitor trait for traversing document tree nodes.
//!
//! This module provides the `Visitor` trait for read-only traversal.
//! Every operation has a default implementation, so a concrete visitor
//! overrides only the node kinds it cares about; everything else falls
//! back to the generic [`Visitor::visit`] operation.
//!
//! # Example
//!
//! ```rust
//! use svgwalk_dom::{Arena, Node, NodeData, NodeKind};
//! use svgwalk_dom::visitor::{Visitor, walk_tree};
//!
//! /// Collects the link targets of all `Use` references.
//! struct LinkCollector<'a> {
//!     links: Vec<&'a str>,
//! }
//!
//! impl<'a> Visitor<'a> for LinkCollector<'a> {
//!     fn visit_use(&mut self, node: &Node<'a>) {
//!         if let NodeData::Ref(href) = node.data {
//!             self.links.push(href);
//!         }
//!     }
//! }
//!
//! let arena = Arena::new();
//! let use_node = arena.alloc(Node::new_leaf(
//!     NodeKind::Use,
//!     Some("u1"),
//!     NodeData::reference("r1"),
//! ));
//! let children = arena.alloc_slice_copy(&[*use_node]);
//! let doc = Node::new_container(NodeKind::Document, None, children);
//!
//! let mut collector = LinkCollector { links: Vec::new() };
//! walk_tree(&mut collector, &doc);
//! assert_eq!(collector.links, vec!["r1"]);
//! ```

use tracing::warn;

use crate::Node;

/// Signal returned by begin hooks to control descent into a subtree.
///
/// - [`Descent::Enter`] - visit the children, then the matching end hook
/// - [`Descent::Prune`] - skip the entire subtree, including the end hook
///
/// Pruning is scoped to one subtree: sibling and ancestor traversal
/// continue unaffected. This is deliberately not `ControlFlow`, whose
/// `Break` conventionally stops a whole walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descent {
    /// Descend into the children of this structural node.
    Enter,
    /// Skip this subtree; the matching end hook is not called.
    Prune,
}

impl Descent {
    /// Returns true if the subtree should be skipped.
    #[inline]
    pub const fn is_prune(&self) -> bool {
        matches!(self, Descent::Prune)
    }
}

/// Visitor trait for traversing document tree nodes without modification.
///
/// Structural kinds receive paired `begin_*`/`end_*` hooks; leaf kinds
/// receive a single `visit_*` call. Kinds that share a geometry
/// representation share one operation: `Circle`/`Ellipse` dispatch to
/// [`Visitor::visit_shape`] and `Text`/`TextArea` to
/// [`Visitor::visit_text`].
///
/// Default begin hooks invoke the generic [`Visitor::visit`] fallback and
/// return [`Descent::Enter`]; default end hooks do nothing; default leaf
/// operations invoke the fallback. A visitor that overrides nothing
/// therefore performs a full, non-pruning traversal with `visit` called
/// once per node.
///
/// # Lifetime
///
/// The `'a` lifetime ties visited nodes to their arena allocator.
///
/// # State
///
/// Visitors may hold transient mutable state (counters, buffers,
/// indentation depth) scoped to one traversal. Instances must not be
/// shared across concurrent traversals unless that state is itself
/// thread-safe.
pub trait Visitor<'a>: Sized {
    /// Generic fallback invoked by every default operation.
    ///
    /// Override this alone to observe every node in the tree.
    #[inline]
    fn visit(&mut self, _node: &Node<'a>) {}

    // === Structural begin/end hooks ===

    /// Called before descending into a Document node.
    fn begin_document(&mut self, node: &Node<'a>) -> Descent {
        self.visit(node);
        Descent::Enter
    }

    /// Called after all children of a Document node were processed.
    fn end_document(&mut self, _node: &Node<'a>) {}

    /// Called before descending into a Group node.
    fn begin_group(&mut self, node: &Node<'a>) -> Descent {
        self.visit(node);
        Descent::Enter
    }

    /// Called after all children of a Group node were processed.
    fn end_group(&mut self, _node: &Node<'a>) {}

    /// Called before descending into a Defs node.
    fn begin_defs(&mut self, node: &Node<'a>) -> Descent {
        self.visit(node);
        Descent::Enter
    }

    /// Called after all children of a Defs node were processed.
    fn end_defs(&mut self, _node: &Node<'a>) {}

    /// Called before descending into a Switch node.
    fn begin_switch(&mut self, node: &Node<'a>) -> Descent {
        self.visit(node);
        Descent::Enter
    }

    /// Called after all children of a Switch node were processed.
    fn end_switch(&mut self, _node: &Node<'a>) {}

    // === Leaf visit operations ===

    /// Visit an Animation node.
    fn visit_animation(&mut self, node: &Node<'a>) {
        self.visit(node);
    }

    /// Visit a Circle or Ellipse node (shared geometry representation).
    fn visit_shape(&mut self, node: &Node<'a>) {
        self.visit(node);
    }

    /// Visit an Image node.
    fn visit_image(&mut self, node: &Node<'a>) {
        self.visit(node);
    }

    /// Visit a Line node.
    fn visit_line(&mut self, node: &Node<'a>) {
        self.visit(node);
    }

    /// Visit a Path node.
    fn visit_path(&mut self, node: &Node<'a>) {
        self.visit(node);
    }

    /// Visit a Polygon node.
    fn visit_polygon(&mut self, node: &Node<'a>) {
        self.visit(node);
    }

    /// Visit a Polyline node.
    fn visit_polyline(&mut self, node: &Node<'a>) {
        self.visit(node);
    }

    /// Visit a Rect node.
    fn visit_rect(&mut self, node: &Node<'a>) {
        self.visit(node);
    }

    /// Visit a Text or TextArea node (shared representation).
    ///
    /// The engine does not descend into the node's tspan runs; read
    /// `node.children` here if the runs are needed.
    fn visit_text(&mut self, node: &Node<'a>) {
        self.visit(node);
    }

    /// Visit a Tspan node encountered directly under a container.
    fn visit_tspan(&mut self, node: &Node<'a>) {
        self.visit(node);
    }

    /// Visit a Use reference node.
    fn visit_use(&mut self, node: &Node<'a>) {
        self.visit(node);
    }

    /// Visit a Video node.
    fn visit_video(&mut self, node: &Node<'a>) {
        self.visit(node);
    }

    /// Called for recognized kinds that have no dedicated operation yet
    /// (mask, symbol, marker, pattern, filter, clip path).
    ///
    /// Not an error: the walk continues with the next sibling. The default
    /// reports the node through `tracing` and invokes the generic
    /// fallback so counting visitors still see it.
    fn visit_unhandled(&mut self, node: &Node<'a>) {
        warn!(kind = %node.kind, id = node.id, "unhandled node kind");
        self.visit(node);
    }
}
