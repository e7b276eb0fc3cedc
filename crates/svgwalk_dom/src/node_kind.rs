//! Node kind definitions for the document tree.
//!
//! The kind set is closed: every node carries exactly one of these
//! discriminants, and the walk functions match on them exhaustively. A
//! kind outside this enumeration is unrepresentable by construction.

use serde::{Deserialize, Serialize};

/// Kinds of nodes in the document tree.
///
/// Structural kinds own an ordered child sequence and receive paired
/// begin/end dispatch during traversal. Leaf kinds receive a single visit.
/// The unhandled kinds at the end are recognized but not traversed into;
/// they are reported through the visitor's unhandled path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum NodeKind {
    // Structural containers
    /// Root document node.
    Document,
    /// Group container (`<g>`).
    Group,
    /// Definitions container; content is referenced, not rendered directly.
    Defs,
    /// Conditional-processing container (`<switch>`).
    Switch,

    // Leaf drawing primitives
    /// Animation element.
    Animation,
    /// Circle shape.
    Circle,
    /// Ellipse shape.
    Ellipse,
    /// Raster image.
    Image,
    /// Line segment.
    Line,
    /// Path with segment data.
    Path,
    /// Closed polygon.
    Polygon,
    /// Open polyline.
    Polyline,
    /// Axis-aligned rectangle.
    Rect,
    /// Text element; its runs are `Tspan` children.
    Text,
    /// Text area element; shares the text representation.
    TextArea,
    /// Text span run inside a text element.
    Tspan,
    /// Reference to another element (`<use>`).
    Use,
    /// Video element.
    Video,

    // Recognized but currently unhandled kinds. Whether these should be
    // traversed into as containers is undecided upstream; until then they
    // are dispatched as opaque leaves through the unhandled path.
    /// Mask element.
    Mask,
    /// Symbol element.
    Symbol,
    /// Marker element.
    Marker,
    /// Pattern element.
    Pattern,
    /// Filter element (stands in for the whole filter-primitive family).
    Filter,
    /// Clip path element.
    ClipPath,
}

impl NodeKind {
    /// Returns true if this kind is a structural container that the
    /// traversal engine descends into.
    #[inline]
    pub const fn is_structural(&self) -> bool {
        matches!(
            self,
            NodeKind::Document | NodeKind::Group | NodeKind::Defs | NodeKind::Switch
        )
    }

    /// Returns true if this kind is recognized but has no dedicated visit
    /// operation yet.
    #[inline]
    pub const fn is_unhandled(&self) -> bool {
        matches!(
            self,
            NodeKind::Mask
                | NodeKind::Symbol
                | NodeKind::Marker
                | NodeKind::Pattern
                | NodeKind::Filter
                | NodeKind::ClipPath
        )
    }

    /// Returns true if this kind carries text runs.
    #[inline]
    pub const fn is_text(&self) -> bool {
        matches!(self, NodeKind::Text | NodeKind::TextArea | NodeKind::Tspan)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Use the same casing as serde serialization
        let name = match self {
            NodeKind::Document => "Document",
            NodeKind::Group => "Group",
            NodeKind::Defs => "Defs",
            NodeKind::Switch => "Switch",
            NodeKind::Animation => "Animation",
            NodeKind::Circle => "Circle",
            NodeKind::Ellipse => "Ellipse",
            NodeKind::Image => "Image",
            NodeKind::Line => "Line",
            NodeKind::Path => "Path",
            NodeKind::Polygon => "Polygon",
            NodeKind::Polyline => "Polyline",
            NodeKind::Rect => "Rect",
            NodeKind::Text => "Text",
            NodeKind::TextArea => "TextArea",
            NodeKind::Tspan => "Tspan",
            NodeKind::Use => "Use",
            NodeKind::Video => "Video",
            NodeKind::Mask => "Mask",
            NodeKind::Symbol => "Symbol",
            NodeKind::Marker => "Marker",
            NodeKind::Pattern => "Pattern",
            NodeKind::Filter => "Filter",
            NodeKind::ClipPath => "ClipPath",
        };
        write!(f, "{}", name)
    }
}
