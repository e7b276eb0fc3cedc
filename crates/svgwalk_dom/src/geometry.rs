//! Geometry value types carried by leaf nodes.
//!
//! These are plain `Copy` values in document user units. They describe the
//! geometry a node was parsed with; resolving transforms or viewports is a
//! renderer concern and out of scope here.

use serde::{Deserialize, Serialize};

/// A point in document user units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rectangle geometry: origin plus extent.
///
/// Used by `Rect` nodes and as the placement region for images and media.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectData {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectData {
    /// Creates a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Ellipse geometry: center plus radii.
///
/// Circles are ellipses with `rx == ry`, which is why `Circle` and
/// `Ellipse` nodes share this representation and one visit operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipseData {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
}

impl EllipseData {
    /// Creates a new ellipse.
    #[inline]
    pub const fn new(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self { cx, cy, rx, ry }
    }

    /// Creates circle geometry (equal radii).
    #[inline]
    pub const fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self {
            cx,
            cy,
            rx: r,
            ry: r,
        }
    }
}

/// Line geometry: an ordered point pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineData {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineData {
    /// Creates a new line.
    #[inline]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// One segment of path data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    /// Start a new subpath at the given point.
    MoveTo(Point),
    /// Straight line to the given point.
    LineTo(Point),
    /// Cubic Bezier curve to `to` with control points `c1` and `c2`.
    CurveTo { c1: Point, c2: Point, to: Point },
    /// Close the current subpath.
    Close,
}
