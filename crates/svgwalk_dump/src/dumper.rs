//! Indented trace dumper.

use tracing::warn;

use svgwalk_dom::{Descent, Node, NodeData, Visitor, walk_tree};

/// Produces a human-readable, indented trace of a traversal.
///
/// Structural nodes appear as paired `START`/`END` lines; leaf nodes as
/// one `visit` line with the node's identifier and a short kind-specific
/// summary. Indentation depth grows in begin hooks and shrinks only in
/// end hooks, so a pruned subtree (whose end hook never fires) cannot
/// unbalance it.
///
/// The dumper also counts visited nodes: one increment per structural
/// begin and per leaf visit.
#[derive(Debug, Default)]
pub struct TreeDumper {
    out: String,
    depth: usize,
    visited: usize,
}

impl TreeDumper {
    /// Creates a new dumper with an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Traverses `root` and returns the accumulated trace.
    ///
    /// Running the same dumper over several trees appends to the same
    /// buffer; use a fresh dumper per document for isolated traces.
    pub fn dump<'a>(&mut self, root: &Node<'a>) -> &str {
        walk_tree(self, root);
        &self.out
    }

    /// Returns the trace accumulated so far.
    pub fn output(&self) -> &str {
        &self.out
    }

    /// Returns the number of nodes visited so far.
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Consumes the dumper and returns the trace buffer.
    pub fn into_output(self) -> String {
        self.out
    }

    fn push_line(&mut self, line: &str) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        self.out.push_str(line);
        self.out.push('\n');
    }

    fn begin(&mut self, node: &Node<'_>) -> Descent {
        self.visited += 1;
        self.push_line(&format!("START {}{}", node.kind, id_suffix(node)));
        self.depth += 1;
        Descent::Enter
    }

    fn end(&mut self, node: &Node<'_>) {
        self.depth -= 1;
        self.push_line(&format!("END {}", node.kind));
    }

    fn leaf(&mut self, node: &Node<'_>, summary: Option<String>) {
        self.visited += 1;
        let summary = match summary {
            Some(s) => format!(" ({})", s),
            None => String::new(),
        };
        self.push_line(&format!("visit {}{}{}", node.kind, id_suffix(node), summary));
    }
}

fn id_suffix(node: &Node<'_>) -> String {
    match node.id {
        Some(id) => format!(" {}", id),
        None => String::new(),
    }
}

/// Concatenates the tspan runs of a text node, substituting an explicit
/// `<null>` token for runs without a value.
fn text_runs(node: &Node<'_>) -> String {
    let mut runs = String::new();
    for run in node.children {
        match run.value {
            Some(value) => runs.push_str(value),
            None => runs.push_str("<null>"),
        }
    }
    runs
}

impl<'a> Visitor<'a> for TreeDumper {
    fn begin_document(&mut self, node: &Node<'a>) -> Descent {
        self.begin(node)
    }

    fn end_document(&mut self, node: &Node<'a>) {
        self.end(node);
    }

    fn begin_group(&mut self, node: &Node<'a>) -> Descent {
        self.begin(node)
    }

    fn end_group(&mut self, node: &Node<'a>) {
        self.end(node);
    }

    fn begin_defs(&mut self, node: &Node<'a>) -> Descent {
        self.begin(node)
    }

    fn end_defs(&mut self, node: &Node<'a>) {
        self.end(node);
    }

    fn begin_switch(&mut self, node: &Node<'a>) -> Descent {
        self.begin(node)
    }

    fn end_switch(&mut self, node: &Node<'a>) {
        self.end(node);
    }

    fn visit_animation(&mut self, node: &Node<'a>) {
        let summary = match node.data {
            NodeData::Media(media) => Some(format!("href {}", media.href)),
            _ => None,
        };
        self.leaf(node, summary);
    }

    fn visit_shape(&mut self, node: &Node<'a>) {
        let summary = match node.data {
            NodeData::Ellipse(e) => Some(format!(
                "center {},{} radii {},{}",
                e.cx, e.cy, e.rx, e.ry
            )),
            _ => None,
        };
        self.leaf(node, summary);
    }

    fn visit_image(&mut self, node: &Node<'a>) {
        let summary = match node.data {
            NodeData::Image(image) => Some(format!("href {}", image.href)),
            _ => None,
        };
        self.leaf(node, summary);
    }

    fn visit_line(&mut self, node: &Node<'a>) {
        let summary = match node.data {
            NodeData::Line(l) => Some(format!("{},{} -> {},{}", l.x1, l.y1, l.x2, l.y2)),
            _ => None,
        };
        self.leaf(node, summary);
    }

    fn visit_path(&mut self, node: &Node<'a>) {
        let summary = match node.data {
            NodeData::Path(segments) => Some(format!("{} segments", segments.len())),
            _ => None,
        };
        self.leaf(node, summary);
    }

    fn visit_polygon(&mut self, node: &Node<'a>) {
        let summary = match node.data {
            NodeData::Points(points) => Some(format!("{} points", points.len())),
            _ => None,
        };
        self.leaf(node, summary);
    }

    fn visit_polyline(&mut self, node: &Node<'a>) {
        let summary = match node.data {
            NodeData::Points(points) => Some(format!("{} points", points.len())),
            _ => None,
        };
        self.leaf(node, summary);
    }

    fn visit_rect(&mut self, node: &Node<'a>) {
        let summary = match node.data {
            NodeData::Rect(r) => Some(format!("{},{} {}x{}", r.x, r.y, r.width, r.height)),
            _ => None,
        };
        self.leaf(node, summary);
    }

    fn visit_text(&mut self, node: &Node<'a>) {
        let summary = format!("runs \"{}\"", text_runs(node));
        self.leaf(node, Some(summary));
    }

    fn visit_tspan(&mut self, node: &Node<'a>) {
        let summary = match node.value {
            Some(value) => format!("\"{}\"", value),
            None => "<null>".to_string(),
        };
        self.leaf(node, Some(summary));
    }

    fn visit_use(&mut self, node: &Node<'a>) {
        let summary = match node.data {
            NodeData::Ref(href) => Some(format!("link {}", href)),
            _ => None,
        };
        self.leaf(node, summary);
    }

    fn visit_video(&mut self, node: &Node<'a>) {
        let summary = match node.data {
            NodeData::Media(media) => Some(format!("href {}", media.href)),
            _ => None,
        };
        self.leaf(node, summary);
    }

    fn visit_unhandled(&mut self, node: &Node<'a>) {
        // Keep the default tracing report alongside the trace line
        warn!(kind = %node.kind, id = node.id, "unhandled node kind");
        self.visited += 1;
        self.push_line(&format!("unhandled {}{}", node.kind, id_suffix(node)));
    }
}
