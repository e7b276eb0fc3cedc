//! Builds a small document tree and prints its traversal trace.
//!
//! Run with `cargo run -p svgwalk_dump --example dump_tree`. Unhandled
//! node kinds are reported through `tracing`; set `RUST_LOG=warn` to see
//! them.

use svgwalk_dom::{Arena, EllipseData, LineData, Node, NodeData, NodeKind, RectData};
use svgwalk_dump::{NodeCounter, TreeDumper};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let arena = Arena::new();

    let rect = arena.alloc(Node::new_leaf(
        NodeKind::Rect,
        Some("r1"),
        NodeData::rect(RectData::new(0.0, 0.0, 40.0, 20.0)),
    ));
    let circle = arena.alloc(Node::new_leaf(
        NodeKind::Circle,
        Some("c1"),
        NodeData::ellipse(EllipseData::circle(20.0, 10.0, 8.0)),
    ));
    let group_children = arena.alloc_slice_copy(&[*rect, *circle]);
    let group = arena.alloc(Node::new_container(
        NodeKind::Group,
        Some("shapes"),
        group_children,
    ));

    let run1 = arena.alloc(Node::new_tspan(None, Some("hello")));
    let run2 = arena.alloc(Node::new_tspan(None, None));
    let run3 = arena.alloc(Node::new_tspan(None, Some("world")));
    let runs = arena.alloc_slice_copy(&[*run1, *run2, *run3]);
    let text = arena.alloc(Node::new_text(NodeKind::Text, Some("label"), runs));

    let line = arena.alloc(Node::new_leaf(
        NodeKind::Line,
        None,
        NodeData::line(LineData::new(0.0, 0.0, 40.0, 20.0)),
    ));
    let use_node = arena.alloc(Node::new_leaf(
        NodeKind::Use,
        Some("u1"),
        NodeData::reference("r1"),
    ));
    let mask = arena.alloc(Node::new_leaf(NodeKind::Mask, Some("m1"), NodeData::None));

    let doc_children = arena.alloc_slice_copy(&[*group, *text, *line, *use_node, *mask]);
    let doc = Node::new_container(NodeKind::Document, None, doc_children);

    let mut dumper = TreeDumper::new();
    print!("{}", dumper.dump(&doc));
    println!("visited {} nodes", dumper.visited());

    assert_eq!(dumper.visited(), NodeCounter::count_tree(&doc));
}
