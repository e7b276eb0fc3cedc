//! Walk functions for document tree traversal.
//!
//! These functions perform the depth-first, document-order walk and
//! dispatch each node to the matching visitor operation. The match over
//! [`NodeKind`] is exhaustive: adding a kind without deciding its
//! dispatch is a compile error, not a silently skipped node.

use crate::{Node, NodeKind};

use super::visit::Visitor;

/// Traverses a document tree from a structural root.
///
/// This is the traversal engine's entry point. The walk is synchronous,
/// single-threaded, and purely recursive; it assumes the tree is finite
/// and acyclic and never mutates it.
///
/// # Panics
///
/// Panics if `root` is not a structural kind. Handing a leaf to the tree
/// entry point is a contract violation, not a recoverable condition.
pub fn walk_tree<'a, V>(visitor: &mut V, root: &Node<'a>)
where
    V: Visitor<'a>,
{
    assert!(
        root.kind.is_structural(),
        "walk_tree requires a structural root, got {}",
        root.kind
    );
    walk_node(visitor, root);
}

/// Dispatches a single node to the matching visitor operation.
///
/// Structural nodes get their begin hook; unless it prunes, their
/// children are walked in document order and the end hook fires. A pruned
/// subtree skips both children and end hook, and never affects siblings.
/// Leaf nodes get exactly one `visit_*` call; recognized-but-unhandled
/// kinds go through [`Visitor::visit_unhandled`] and the walk continues.
pub fn walk_node<'a, V>(visitor: &mut V, node: &Node<'a>)
where
    V: Visitor<'a>,
{
    match node.kind {
        // Structural containers
        NodeKind::Document => {
            if visitor.begin_document(node).is_prune() {
                return;
            }
            walk_children(visitor, node);
            visitor.end_document(node);
        }
        NodeKind::Group => {
            if visitor.begin_group(node).is_prune() {
                return;
            }
            walk_children(visitor, node);
            visitor.end_group(node);
        }
        NodeKind::Defs => {
            if visitor.begin_defs(node).is_prune() {
                return;
            }
            walk_children(visitor, node);
            visitor.end_defs(node);
        }
        NodeKind::Switch => {
            if visitor.begin_switch(node).is_prune() {
                return;
            }
            walk_children(visitor, node);
            visitor.end_switch(node);
        }

        // Leaf drawing primitives
        NodeKind::Animation => visitor.visit_animation(node),
        NodeKind::Circle | NodeKind::Ellipse => visitor.visit_shape(node),
        NodeKind::Image => visitor.visit_image(node),
        NodeKind::Line => visitor.visit_line(node),
        NodeKind::Path => visitor.visit_path(node),
        NodeKind::Polygon => visitor.visit_polygon(node),
        NodeKind::Polyline => visitor.visit_polyline(node),
        NodeKind::Rect => visitor.visit_rect(node),
        NodeKind::Text | NodeKind::TextArea => visitor.visit_text(node),
        NodeKind::Tspan => visitor.visit_tspan(node),
        NodeKind::Use => visitor.visit_use(node),
        NodeKind::Video => visitor.visit_video(node),

        // Recognized but unhandled kinds; reported, never fatal
        NodeKind::Mask
        | NodeKind::Symbol
        | NodeKind::Marker
        | NodeKind::Pattern
        | NodeKind::Filter
        | NodeKind::ClipPath => visitor.visit_unhandled(node),
    }
}

/// Walks all children of a node in document order.
#[inline]
pub fn walk_children<'a, V>(visitor: &mut V, node: &Node<'a>)
where
    V: Visitor<'a>,
{
    for child in node.children {
        walk_node(visitor, child);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::visitor::Descent;
    use crate::{Arena, EllipseData, NodeData, RectData};

    /// A simple visitor that counts nodes of selected kinds.
    struct KindCounter {
        document_count: usize,
        group_count: usize,
        rect_count: usize,
        total_count: usize,
    }

    impl KindCounter {
        fn new() -> Self {
            Self {
                document_count: 0,
                group_count: 0,
                rect_count: 0,
                total_count: 0,
            }
        }
    }

    impl<'a> Visitor<'a> for KindCounter {
        fn visit(&mut self, _node: &Node<'a>) {
            self.total_count += 1;
        }

        fn begin_document(&mut self, node: &Node<'a>) -> Descent {
            self.document_count += 1;
            self.visit(node);
            Descent::Enter
        }

        fn begin_group(&mut self, node: &Node<'a>) -> Descent {
            self.group_count += 1;
            self.visit(node);
            Descent::Enter
        }

        fn visit_rect(&mut self, node: &Node<'a>) {
            self.rect_count += 1;
            self.visit(node);
        }
    }

    fn sample_rect() -> NodeData<'static> {
        NodeData::rect(RectData::new(0.0, 0.0, 10.0, 10.0))
    }

    #[test]
    fn walk_node_visits_single_leaf() {
        let rect = Node::new_leaf(NodeKind::Rect, Some("r1"), sample_rect());

        let mut counter = KindCounter::new();
        walk_node(&mut counter, &rect);

        assert_eq!(counter.rect_count, 1);
        assert_eq!(counter.total_count, 1);
    }

    #[test]
    fn walk_node_visits_container_and_children() {
        let arena = Arena::new();
        let rect1 = arena.alloc(Node::new_leaf(NodeKind::Rect, Some("a"), sample_rect()));
        let rect2 = arena.alloc(Node::new_leaf(NodeKind::Rect, Some("b"), sample_rect()));
        let children = arena.alloc_slice_copy(&[*rect1, *rect2]);
        let group = Node::new_container(NodeKind::Group, None, children);

        let mut counter = KindCounter::new();
        walk_node(&mut counter, &group);

        assert_eq!(counter.group_count, 1);
        assert_eq!(counter.rect_count, 2);
        assert_eq!(counter.total_count, 3);
    }

    #[test]
    fn walk_tree_visits_nested_structure() {
        let arena = Arena::new();

        // Document -> Group -> [Rect, Circle]
        let rect = arena.alloc(Node::new_leaf(NodeKind::Rect, Some("r1"), sample_rect()));
        let circle = arena.alloc(Node::new_leaf(
            NodeKind::Circle,
            Some("c1"),
            NodeData::ellipse(EllipseData::circle(5.0, 5.0, 2.0)),
        ));
        let group_children = arena.alloc_slice_copy(&[*rect, *circle]);
        let group = arena.alloc(Node::new_container(NodeKind::Group, None, group_children));
        let doc_children = arena.alloc_slice_copy(&[*group]);
        let doc = Node::new_container(NodeKind::Document, None, doc_children);

        let mut counter = KindCounter::new();
        walk_tree(&mut counter, &doc);

        assert_eq!(counter.document_count, 1);
        assert_eq!(counter.group_count, 1);
        assert_eq!(counter.rect_count, 1);
        assert_eq!(counter.total_count, 4);
    }

    #[test]
    #[should_panic(expected = "structural root")]
    fn walk_tree_panics_on_leaf_root() {
        let rect = Node::new_leaf(NodeKind::Rect, None, sample_rect());
        let mut counter = KindCounter::new();
        walk_tree(&mut counter, &rect);
    }

    /// A visitor that prunes every Group subtree.
    struct GroupPruner {
        begins: usize,
        ends: usize,
        leaves: usize,
    }

    impl<'a> Visitor<'a> for GroupPruner {
        fn begin_group(&mut self, _node: &Node<'a>) -> Descent {
            self.begins += 1;
            Descent::Prune
        }

        fn end_group(&mut self, _node: &Node<'a>) {
            self.ends += 1;
        }

        fn visit(&mut self, node: &Node<'a>) {
            if !node.kind.is_structural() {
                self.leaves += 1;
            }
        }
    }

    #[test]
    fn pruning_skips_children_and_end_hook() {
        let arena = Arena::new();
        let rect = arena.alloc(Node::new_leaf(NodeKind::Rect, None, sample_rect()));
        let group_children = arena.alloc_slice_copy(&[*rect]);
        let group = arena.alloc(Node::new_container(NodeKind::Group, None, group_children));
        // Sibling leaf after the pruned group
        let line = arena.alloc(Node::new_leaf(
            NodeKind::Line,
            None,
            NodeData::line(crate::LineData::new(0.0, 0.0, 1.0, 1.0)),
        ));
        let doc_children = arena.alloc_slice_copy(&[*group, *line]);
        let doc = Node::new_container(NodeKind::Document, None, doc_children);

        let mut pruner = GroupPruner {
            begins: 0,
            ends: 0,
            leaves: 0,
        };
        walk_tree(&mut pruner, &doc);

        assert_eq!(pruner.begins, 1);
        assert_eq!(pruner.ends, 0, "end hook must be skipped when pruned");
        assert_eq!(pruner.leaves, 1, "sibling after pruned subtree still visited");
    }

    #[test]
    fn unhandled_kind_does_not_abort_walk() {
        struct UnhandledTracker {
            unhandled: Vec<String>,
            rects: usize,
        }

        impl<'a> Visitor<'a> for UnhandledTracker {
            fn visit_unhandled(&mut self, node: &Node<'a>) {
                self.unhandled.push(node.kind.to_string());
            }

            fn visit_rect(&mut self, _node: &Node<'a>) {
                self.rects += 1;
            }
        }

        let arena = Arena::new();
        let mask = arena.alloc(Node::new_leaf(NodeKind::Mask, Some("m1"), NodeData::None));
        let rect = arena.alloc(Node::new_leaf(NodeKind::Rect, None, sample_rect()));
        let children = arena.alloc_slice_copy(&[*mask, *rect]);
        let doc = Node::new_container(NodeKind::Document, None, children);

        let mut tracker = UnhandledTracker {
            unhandled: Vec::new(),
            rects: 0,
        };
        walk_tree(&mut tracker, &doc);

        assert_eq!(tracker.unhandled, vec!["Mask"]);
        assert_eq!(tracker.rects, 1, "walk continues past the unhandled node");
    }

    #[test]
    fn shape_operation_shared_by_circle_and_ellipse() {
        struct ShapeCounter {
            shapes: usize,
        }

        impl<'a> Visitor<'a> for ShapeCounter {
            fn visit_shape(&mut self, _node: &Node<'a>) {
                self.shapes += 1;
            }
        }

        let arena = Arena::new();
        let circle = arena.alloc(Node::new_leaf(
            NodeKind::Circle,
            None,
            NodeData::ellipse(EllipseData::circle(0.0, 0.0, 1.0)),
        ));
        let ellipse = arena.alloc(Node::new_leaf(
            NodeKind::Ellipse,
            None,
            NodeData::ellipse(EllipseData::new(0.0, 0.0, 2.0, 1.0)),
        ));
        let children = arena.alloc_slice_copy(&[*circle, *ellipse]);
        let doc = Node::new_container(NodeKind::Document, None, children);

        let mut counter = ShapeCounter { shapes: 0 };
        walk_tree(&mut counter, &doc);

        assert_eq!(counter.shapes, 2);
    }

    #[test]
    fn text_runs_are_not_descended_into() {
        struct TspanCounter {
            texts: usize,
            tspans: usize,
        }

        impl<'a> Visitor<'a> for TspanCounter {
            fn visit_text(&mut self, node: &Node<'a>) {
                self.texts += 1;
                assert!(node.has_children());
            }

            fn visit_tspan(&mut self, _node: &Node<'a>) {
                self.tspans += 1;
            }
        }

        let arena = Arena::new();
        let run = arena.alloc(Node::new_tspan(None, Some("hello")));
        let runs = arena.alloc_slice_copy(&[*run]);
        let text = arena.alloc(Node::new_text(NodeKind::Text, Some("t1"), runs));
        let children = arena.alloc_slice_copy(&[*text]);
        let doc = Node::new_container(NodeKind::Document, None, children);

        let mut counter = TspanCounter { texts: 0, tspans: 0 };
        walk_tree(&mut counter, &doc);

        assert_eq!(counter.texts, 1);
        assert_eq!(counter.tspans, 0, "tspan runs belong to the text leaf");
    }

    #[test]
    fn walk_children_empty() {
        let doc = Node::new_container(NodeKind::Document, None, &[]);

        let mut counter = KindCounter::new();
        walk_children(&mut counter, &doc);

        assert_eq!(counter.total_count, 0);
    }

    #[test]
    fn walk_node_calls_begin_and_end_hooks_in_order() {
        struct HookTracker {
            events: Vec<String>,
        }

        impl<'a> Visitor<'a> for HookTracker {
            fn begin_group(&mut self, node: &Node<'a>) -> Descent {
                self.events.push(format!("begin:{}", node.kind));
                Descent::Enter
            }

            fn end_group(&mut self, node: &Node<'a>) {
                self.events.push(format!("end:{}", node.kind));
            }

            fn visit_rect(&mut self, node: &Node<'a>) {
                self.events.push(format!("visit:{}", node.kind));
            }
        }

        let arena = Arena::new();
        let rect = arena.alloc(Node::new_leaf(NodeKind::Rect, None, sample_rect()));
        let children = arena.alloc_slice_copy(&[*rect]);
        let group = Node::new_container(NodeKind::Group, None, children);

        let mut tracker = HookTracker { events: Vec::new() };
        walk_node(&mut tracker, &group);

        assert_eq!(tracker.events, vec!["begin:Group", "visit:Rect", "end:Group"]);
    }

    #[test]
    fn default_visitor_walks_everything() {
        struct Fallback {
            seen: usize,
        }

        impl<'a> Visitor<'a> for Fallback {
            fn visit(&mut self, _node: &Node<'a>) {
                self.seen += 1;
            }
        }

        let arena = Arena::new();
        let rect = arena.alloc(Node::new_leaf(NodeKind::Rect, None, sample_rect()));
        let mask = arena.alloc(Node::new_leaf(NodeKind::Mask, None, NodeData::None));
        let inner_children = arena.alloc_slice_copy(&[*rect, *mask]);
        let group = arena.alloc(Node::new_container(NodeKind::Group, None, inner_children));
        let switch = arena.alloc(Node::new_container(NodeKind::Switch, None, &[]));
        let doc_children = arena.alloc_slice_copy(&[*group, *switch]);
        let doc = Node::new_container(NodeKind::Document, None, doc_children);

        let mut fallback = Fallback { seen: 0 };
        walk_tree(&mut fallback, &doc);

        // Document, Group, Rect, Mask, Switch
        assert_eq!(fallback.seen, 5);
    }
}
