//! Node definition.
//!
//! The core document tree node type used throughout svgwalk.

use serde::Serialize;

use crate::{EllipseData, LineData, NodeKind, PathSegment, Point, RectData};

/// A node in the document tree.
///
/// Nodes carry a closed [`NodeKind`] discriminant, an optional identifier,
/// and kind-specific payload data. They are designed to be allocated in an
/// arena: child lists and string payloads are slices borrowed from the
/// arena that owns the whole document.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties this node to its arena allocator,
/// ensuring that all child references remain valid.
///
/// # Acyclicity
///
/// A well-formed document is a tree. The traversal engine assumes the
/// child graph is finite and acyclic and does not guard against cycles;
/// builders must not create back-references.
///
/// # Example
///
/// ```rust
/// use svgwalk_dom::{Arena, Node, NodeData, NodeKind, RectData};
///
/// let arena = Arena::new();
///
/// let rect = arena.alloc(Node::new_leaf(
///     NodeKind::Rect,
///     Some("r1"),
///     NodeData::rect(RectData::new(0.0, 0.0, 20.0, 10.0)),
/// ));
/// let children = arena.alloc_slice_copy(&[*rect]);
/// let group = Node::new_container(NodeKind::Group, Some("layer"), children);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    /// The kind of this node.
    pub kind: NodeKind,

    /// Optional element identifier.
    pub id: Option<&'a str>,

    /// Child nodes, in document order.
    ///
    /// Non-empty for structural containers and for `Text`/`TextArea`
    /// nodes, whose runs are `Tspan` children. The engine descends only
    /// into structural kinds; text runs are read by visitors directly.
    pub children: &'a [Node<'a>],

    /// Text value (for `Tspan` runs).
    pub value: Option<&'a str>,

    /// Kind-specific payload data.
    pub data: NodeData<'a>,
}

/// Kind-specific payload carried by a node.
#[derive(Debug, Clone, Copy, Default)]
pub enum NodeData<'a> {
    #[default]
    None,
    /// Rectangle bounds.
    Rect(RectData),
    /// Circle/ellipse geometry.
    Ellipse(EllipseData),
    /// Line endpoints.
    Line(LineData),
    /// Polygon/polyline vertices.
    Points(&'a [Point]),
    /// Path segment data.
    Path(&'a [PathSegment]),
    /// Image payload.
    Image(ImageData<'a>),
    /// Link target of a `Use` reference.
    Ref(&'a str),
    /// Video/animation payload.
    Media(MediaData<'a>),
}

#[derive(Debug, Clone, Copy)]
pub struct ImageData<'a> {
    pub href: &'a str,
    pub bounds: RectData,
}

#[derive(Debug, Clone, Copy)]
pub struct MediaData<'a> {
    pub href: &'a str,
    pub region: Option<RectData>,
}

impl<'a> Node<'a> {
    /// Creates a new structural container node with children.
    #[inline]
    pub const fn new_container(
        kind: NodeKind,
        id: Option<&'a str>,
        children: &'a [Node<'a>],
    ) -> Self {
        Self {
            kind,
            id,
            children,
            value: None,
            data: NodeData::None,
        }
    }

    /// Creates a new leaf node with kind-specific payload.
    #[inline]
    pub const fn new_leaf(kind: NodeKind, id: Option<&'a str>, data: NodeData<'a>) -> Self {
        Self {
            kind,
            id,
            children: &[],
            value: None,
            data,
        }
    }

    /// Creates a new text node whose runs are `Tspan` children.
    #[inline]
    pub const fn new_text(kind: NodeKind, id: Option<&'a str>, runs: &'a [Node<'a>]) -> Self {
        Self {
            kind,
            id,
            children: runs,
            value: None,
            data: NodeData::None,
        }
    }

    /// Creates a new text span run. A `None` value models an empty run.
    #[inline]
    pub const fn new_tspan(id: Option<&'a str>, value: Option<&'a str>) -> Self {
        Self {
            kind: NodeKind::Tspan,
            id,
            children: &[],
            value,
            data: NodeData::None,
        }
    }

    /// Returns true if this node has children.
    #[inline]
    pub const fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

impl<'a> Serialize for Node<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut len = 1; // type
        if self.id.is_some() {
            len += 1;
        }
        if self.kind.is_structural() || !self.children.is_empty() {
            len += 1;
        }
        if self.value.is_some() {
            len += 1;
        }
        len += self.data.present_field_count();

        let mut state = serializer.serialize_struct("Node", len)?;

        state.serialize_field("type", &self.kind)?;

        if let Some(id) = &self.id {
            state.serialize_field("id", id)?;
        }

        if self.kind.is_structural() || !self.children.is_empty() {
            state.serialize_field("children", &self.children)?;
        }

        if let Some(value) = &self.value {
            state.serialize_field("value", value)?;
        }

        self.data.serialize_fields(&mut state)?;

        state.end()
    }
}

impl<'a> NodeData<'a> {
    /// Returns the number of present fields for serialization.
    fn present_field_count(&self) -> usize {
        match self {
            NodeData::None => 0,
            NodeData::Rect(_) => 4,
            NodeData::Ellipse(_) => 4,
            NodeData::Line(_) => 4,
            NodeData::Points(_) => 1,
            NodeData::Path(_) => 1,
            NodeData::Image(_) => 2,
            NodeData::Ref(_) => 1,
            NodeData::Media(media) => {
                if media.region.is_some() {
                    2
                } else {
                    1
                }
            }
        }
    }

    /// Serializes present fields into the given struct serializer state.
    fn serialize_fields<S: serde::ser::SerializeStruct>(
        &self,
        state: &mut S,
    ) -> Result<(), S::Error> {
        match self {
            NodeData::None => {}
            NodeData::Rect(rect) => {
                state.serialize_field("x", &rect.x)?;
                state.serialize_field("y", &rect.y)?;
                state.serialize_field("width", &rect.width)?;
                state.serialize_field("height", &rect.height)?;
            }
            NodeData::Ellipse(ellipse) => {
                state.serialize_field("cx", &ellipse.cx)?;
                state.serialize_field("cy", &ellipse.cy)?;
                state.serialize_field("rx", &ellipse.rx)?;
                state.serialize_field("ry", &ellipse.ry)?;
            }
            NodeData::Line(line) => {
                state.serialize_field("x1", &line.x1)?;
                state.serialize_field("y1", &line.y1)?;
                state.serialize_field("x2", &line.x2)?;
                state.serialize_field("y2", &line.y2)?;
            }
            NodeData::Points(points) => {
                state.serialize_field("points", points)?;
            }
            NodeData::Path(segments) => {
                state.serialize_field("segments", segments)?;
            }
            NodeData::Image(image) => {
                state.serialize_field("href", image.href)?;
                state.serialize_field("bounds", &image.bounds)?;
            }
            NodeData::Ref(href) => {
                state.serialize_field("href", href)?;
            }
            NodeData::Media(media) => {
                state.serialize_field("href", media.href)?;
                if let Some(region) = &media.region {
                    state.serialize_field("region", region)?;
                }
            }
        }
        Ok(())
    }

    /// Creates new empty node data.
    #[inline]
    pub const fn new() -> Self {
        Self::None
    }

    /// Creates payload for a rectangle.
    #[inline]
    pub const fn rect(rect: RectData) -> Self {
        Self::Rect(rect)
    }

    /// Creates payload for a circle or ellipse.
    #[inline]
    pub const fn ellipse(ellipse: EllipseData) -> Self {
        Self::Ellipse(ellipse)
    }

    /// Creates payload for a line.
    #[inline]
    pub const fn line(line: LineData) -> Self {
        Self::Line(line)
    }

    /// Creates payload for a polygon or polyline.
    #[inline]
    pub const fn points(points: &'a [Point]) -> Self {
        Self::Points(points)
    }

    /// Creates payload for a path.
    #[inline]
    pub const fn path(segments: &'a [PathSegment]) -> Self {
        Self::Path(segments)
    }

    /// Creates payload for an image.
    #[inline]
    pub const fn image(href: &'a str, bounds: RectData) -> Self {
        Self::Image(ImageData { href, bounds })
    }

    /// Creates payload for a `Use` reference.
    #[inline]
    pub const fn reference(href: &'a str) -> Self {
        Self::Ref(href)
    }

    /// Creates payload for a video or animation element.
    #[inline]
    pub const fn media(href: &'a str, region: Option<RectData>) -> Self {
        Self::Media(MediaData { href, region })
    }
}
