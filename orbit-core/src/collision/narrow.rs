//! Narrow-phase intersection tests.
//!
//! Pure functions, one per shape pair, all built on Euclidean distance plus
//! the `POINT_BUFFER` tolerance. Inputs are read-only; nothing here mutates
//! or allocates beyond the SAT vertex scratch.
//!
//! Division hazards are clamped, never propagated: parallel segments short-
//! circuit before the parametric divide, and zero-length segments fall back
//! to their endpoint tests.

use crate::geometry::{distance, Circle, Line, Point, Rectangle};
use crate::types::constants::{EPSILON, POINT_BUFFER};

// =============================================================================
// Point tests
// =============================================================================

/// Two points coincide when they sit within the shared tolerance.
pub fn point_near_point(p1: Point, p2: Point) -> bool {
    distance(p1, p2) <= POINT_BUFFER
}

/// A point lies on a segment when its distances to the two endpoints sum to
/// the segment length, within tolerance.
///
/// Needs no division, so a zero-length line degrades gracefully: the sum is
/// then twice the distance to the shared endpoint.
pub fn point_on_line(p: Point, line: &Line) -> bool {
    let d_sum = distance(p, line.p1) + distance(p, line.p2);
    (d_sum - line.len()).abs() < POINT_BUFFER
}

/// A point is in a circle when it is no farther from the center than the
/// radius (boundary inclusive).
pub fn point_in_circle(p: Point, circle: &Circle) -> bool {
    distance(p, circle.center) <= circle.radius
}

/// Coordinate-wise containment, boundary inclusive.
pub fn point_in_rect(p: Point, rect: &Rectangle) -> bool {
    let c = rect.corner;
    p.x >= c.x && p.x <= c.x + rect.width && p.y >= c.y && p.y <= c.y + rect.height
}

// =============================================================================
// Line tests
// =============================================================================

/// Parametric segment intersection.
///
/// Solves for the intersection parameters `uA`, `uB` of the two infinite
/// lines; the segments meet iff both land in `[0, 1]`. Parallel (and
/// degenerate) segments produce a zero denominator and report no
/// intersection rather than dividing.
pub fn line_intersects_line(a: &Line, b: &Line) -> bool {
    let (x1, y1) = (a.p1.x, a.p1.y);
    let (x2, y2) = (a.p2.x, a.p2.y);
    let (x3, y3) = (b.p1.x, b.p1.y);
    let (x4, y4) = (b.p2.x, b.p2.y);

    let denom = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
    if denom == 0.0 {
        return false;
    }

    let u_a = ((x4 - x3) * (y1 - y3) - (y4 - y3) * (x1 - x3)) / denom;
    let u_b = ((x2 - x1) * (y1 - y3) - (y2 - y1) * (x1 - x3)) / denom;

    (0.0..=1.0).contains(&u_a) && (0.0..=1.0).contains(&u_b)
}

/// A segment hits a rectangle when it crosses any of the four edges.
pub fn line_intersects_rect(line: &Line, rect: &Rectangle) -> bool {
    rect_edges(rect)
        .iter()
        .any(|edge| line_intersects_line(line, edge))
}

/// Segment-circle intersection.
///
/// Either endpoint inside settles it immediately. Otherwise the center is
/// projected onto the segment, the projection parameter clamped to `[0, 1]`
/// so the closest point stays on the segment, and that point tested against
/// the radius. A zero-length segment is fully covered by the endpoint tests.
pub fn line_intersects_circle(line: &Line, circle: &Circle) -> bool {
    if point_in_circle(line.p1, circle) || point_in_circle(line.p2, circle) {
        return true;
    }

    let dx = line.p2.x - line.p1.x;
    let dy = line.p2.y - line.p1.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq < EPSILON {
        return false;
    }

    let t = ((circle.center.x - line.p1.x) * dx + (circle.center.y - line.p1.y) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);
    let closest = Point::new(line.p1.x + t * dx, line.p1.y + t * dy);
    point_in_circle(closest, circle)
}

// =============================================================================
// Rectangle / circle tests
// =============================================================================

/// Axis-aligned overlap: both the x- and y-intervals must overlap,
/// boundary inclusive (touching rectangles collide).
pub fn rect_intersects_rect(a: &Rectangle, b: &Rectangle) -> bool {
    let (ca, cb) = (a.corner, b.corner);
    ca.x <= cb.x + b.width
        && ca.x + a.width >= cb.x
        && ca.y <= cb.y + b.height
        && ca.y + a.height >= cb.y
}

/// Clamp the circle center to the rectangle bounds to find the closest
/// point, then test that point against the radius.
pub fn rect_intersects_circle(rect: &Rectangle, circle: &Circle) -> bool {
    let c = rect.corner;
    let closest = Point::new(
        circle.center.x.clamp(c.x, c.x + rect.width),
        circle.center.y.clamp(c.y, c.y + rect.height),
    );
    point_in_circle(closest, circle)
}

/// Two circles collide when their centers are no farther apart than the sum
/// of their radii.
pub fn circle_intersects_circle(a: &Circle, b: &Circle) -> bool {
    distance(a.center, b.center) <= a.radius + b.radius
}

// =============================================================================
// Separating Axis Theorem
// =============================================================================

/// SAT over two vertex lists.
///
/// For every edge normal of both inputs, both vertex sets are projected onto
/// the normal; one axis with disjoint projection intervals proves the shapes
/// apart, and no such axis after testing every edge means they collide.
///
/// Degenerate inputs are legal: a single vertex contributes no axes (its
/// containment is then decided entirely by the other shape's normals), and
/// zero-length edges are skipped. Correct for convex inputs only.
pub fn polygons_intersect(a: &[Point], b: &[Point]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    for axis in edge_normals(a).into_iter().chain(edge_normals(b)) {
        let (min_a, max_a) = project(a, axis);
        let (min_b, max_b) = project(b, axis);
        if max_a < min_b || max_b < min_a {
            return false; // Found a separating axis
        }
    }
    true
}

/// Point-in-convex-polygon via even-odd ray casting.
///
/// Works for any simple polygon, which keeps the circle test below honest
/// even for slightly concave input.
pub fn point_in_polygon(p: Point, vertices: &[Point]) -> bool {
    let mut inside = false;
    let n = vertices.len();
    for i in 0..n {
        let v1 = vertices[i];
        let v2 = vertices[(i + 1) % n];
        if (v1.y > p.y) != (v2.y > p.y) {
            let x_cross = v1.x + (p.y - v1.y) * (v2.x - v1.x) / (v2.y - v1.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// Circle-polygon intersection by the clamped-point method.
///
/// A circle has no finite edge set, so it cannot ride the SAT path; instead
/// it collides when its center is inside the polygon or any polygon edge
/// passes within the radius.
pub fn circle_intersects_polygon(circle: &Circle, vertices: &[Point]) -> bool {
    if point_in_polygon(circle.center, vertices) {
        return true;
    }
    polygon_edges(vertices)
        .iter()
        .any(|edge| line_intersects_circle(edge, circle))
}

// =============================================================================
// Helpers
// =============================================================================

/// The rectangle's four edges in order.
pub fn rect_edges(rect: &Rectangle) -> [Line; 4] {
    let [a, b, c, d] = rect.corners();
    [
        Line::new(a, b),
        Line::new(b, c),
        Line::new(c, d),
        Line::new(d, a),
    ]
}

/// Closed edge list of a vertex sequence (last vertex connects to first).
pub fn polygon_edges(vertices: &[Point]) -> Vec<Line> {
    let n = vertices.len();
    (0..n)
        .map(|i| Line::new(vertices[i], vertices[(i + 1) % n]))
        .collect()
}

/// Outward edge normals of a vertex list, unnormalized (SAT only compares
/// projections on the same axis, so length does not matter). Vertex lists
/// shorter than 2 have no edges; zero-length edges are dropped.
fn edge_normals(vertices: &[Point]) -> Vec<(f64, f64)> {
    let n = vertices.len();
    if n < 2 {
        return Vec::new();
    }
    let mut normals = Vec::with_capacity(n);
    for i in 0..n {
        let v1 = vertices[i];
        let v2 = vertices[(i + 1) % n];
        let (ex, ey) = (v2.x - v1.x, v2.y - v1.y);
        if ex == 0.0 && ey == 0.0 {
            continue;
        }
        normals.push((-ey, ex));
    }
    normals
}

/// Projection interval of a vertex list onto an axis.
fn project(vertices: &[Point], axis: (f64, f64)) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in vertices {
        let d = v.x * axis.0 + v.y * axis.1;
        min = min.min(d);
        max = max.max(d);
    }
    (min, max)
}

// =============================================================================
// Tests
// =============================================================================
