//! Geometry primitives for collision detection.
//!
//! Five value types (`Point`, `Line`, `Rectangle`, `Circle`, `Polygon`)
//! plus the closed `Shape` union over them. All are immutable once built;
//! the narrow-phase tests in [`crate::collision`] treat them as read-only.
//!
//! `Shape` is a closed union: there is no abstract "base shape" to
//! instantiate, and pair dispatch is an exhaustive `match` rather than
//! runtime type inspection.

use serde::{Deserialize, Serialize};

/// Error type for geometry construction.
///
/// Construction fails fast: a shape that would feed bad values into the
/// narrow-phase math is rejected here, never later.
#[derive(Debug)]
pub enum GeometryError {
    /// A polygon needs at least 3 vertices.
    TooFewVertices(usize),
    /// A coordinate was NaN or infinite.
    NonFinite,
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::TooFewVertices(n) => {
                write!(f, "polygon needs at least 3 vertices, got {}", n)
            }
            GeometryError::NonFinite => write!(f, "coordinate is not finite"),
        }
    }
}

impl std::error::Error for GeometryError {}

// =============================================================================
// Primitives
// =============================================================================

/// A single point in 2D Euclidean space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A line segment with a cached Euclidean length.
///
/// Degenerate (zero-length) lines are allowed; every downstream test guards
/// the divisions that would otherwise blow up on them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
    len: f64,
}

impl Line {
    pub fn new(p1: Point, p2: Point) -> Self {
        Self {
            p1,
            p2,
            len: distance(p1, p2),
        }
    }

    /// Convenience constructor from raw coordinates.
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Cached segment length.
    pub fn len(&self) -> f64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0.0
    }
}

/// An axis-aligned rectangle: corner plus non-negative extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub corner: Point,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            corner: Point::new(x, y),
            width,
            height,
        }
    }

    /// The four corners in edge order (closed: last connects to first).
    pub fn corners(&self) -> [Point; 4] {
        let Point { x, y } = self.corner;
        [
            Point::new(x, y),
            Point::new(x + self.width, y),
            Point::new(x + self.width, y + self.height),
            Point::new(x, y + self.height),
        ]
    }
}

/// A circle: center plus non-negative radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self {
            center: Point::new(cx, cy),
            radius,
        }
    }
}

/// A closed polygon: an ordered sequence of at least 3 finite vertices.
///
/// Edges are implicit consecutive-vertex pairs, last to first included.
/// Collision tests assume convexity; concave input degrades to the convex
/// hull behavior of the separating-axis test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Build a polygon, rejecting fewer than 3 vertices or non-finite
    /// coordinates.
    pub fn new(vertices: Vec<Point>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()));
        }
        if vertices.iter().any(|v| !v.x.is_finite() || !v.y.is_finite()) {
            return Err(GeometryError::NonFinite);
        }
        Ok(Self { vertices })
    }

    /// Convenience constructor from coordinate pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self, GeometryError> {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

// =============================================================================
// Shape - closed union over the five kinds
// =============================================================================

/// Any collidable shape.
///
/// The set of kinds is closed: pair dispatch in [`crate::collision`] is an
/// exhaustive `match`, so adding a kind is a compile error until every pair
/// is handled (or deliberately mapped to `false`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Point(Point),
    Line(Line),
    Rectangle(Rectangle),
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    /// True if this shape intersects `other`. Symmetric in its arguments.
    pub fn collides(&self, other: &Shape) -> bool {
        crate::collision::collides(self, other)
    }
}

impl From<Point> for Shape {
    fn from(p: Point) -> Self {
        Shape::Point(p)
    }
}

impl From<Line> for Shape {
    fn from(l: Line) -> Self {
        Shape::Line(l)
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}

// =============================================================================
// Distance
// =============================================================================

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    (dx * dx + dy * dy).sqrt()
}

/// Euclidean distance between two raw coordinate pairs.
pub fn distance_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    distance(Point::new(x1, y1), Point::new(x2, y2))
}

// =============================================================================
// Tests
// =============================================================================
