//! Pair dispatch over the closed shape set.
//!
//! `collides` is total over all 25 ordered pairs of the five kinds and
//! symmetric by construction: each unordered pair is implemented exactly
//! once, and the mirrored arm flips the arguments back. The `match` is
//! exhaustive, so adding a kind to `Shape` is a compile error until every
//! new pair is handled.

use crate::collision::narrow;
use crate::geometry::{Line, Point, Shape};

/// True iff the two shapes intersect.
///
/// Symmetric and deterministic for every pair; never panics on any
/// constructible shape, degenerate or not.
pub fn collides(a: &Shape, b: &Shape) -> bool {
    use Shape::*;

    match (a, b) {
        (Point(p1), Point(p2)) => narrow::point_near_point(*p1, *p2),
        (Point(p), Line(l)) | (Line(l), Point(p)) => narrow::point_on_line(*p, l),
        (Point(p), Circle(c)) | (Circle(c), Point(p)) => narrow::point_in_circle(*p, c),
        (Point(p), Rectangle(r)) | (Rectangle(r), Point(p)) => narrow::point_in_rect(*p, r),
        (Point(p), Polygon(poly)) | (Polygon(poly), Point(p)) => {
            narrow::polygons_intersect(&[*p], poly.vertices())
        }

        (Line(l1), Line(l2)) => narrow::line_intersects_line(l1, l2),
        (Line(l), Rectangle(r)) | (Rectangle(r), Line(l)) => narrow::line_intersects_rect(l, r),
        (Line(l), Circle(c)) | (Circle(c), Line(l)) => narrow::line_intersects_circle(l, c),
        (Line(l), Polygon(poly)) | (Polygon(poly), Line(l)) => {
            narrow::polygons_intersect(&line_vertices(l), poly.vertices())
        }

        (Rectangle(r1), Rectangle(r2)) => narrow::rect_intersects_rect(r1, r2),
        (Rectangle(r), Circle(c)) | (Circle(c), Rectangle(r)) => {
            narrow::rect_intersects_circle(r, c)
        }
        (Rectangle(r), Polygon(poly)) | (Polygon(poly), Rectangle(r)) => {
            narrow::polygons_intersect(&r.corners(), poly.vertices())
        }

        (Circle(c1), Circle(c2)) => narrow::circle_intersects_circle(c1, c2),
        // Circles have no finite edge set, so they bypass SAT entirely
        (Circle(c), Polygon(poly)) | (Polygon(poly), Circle(c)) => {
            narrow::circle_intersects_polygon(c, poly.vertices())
        }

        (Polygon(p1), Polygon(p2)) => narrow::polygons_intersect(p1.vertices(), p2.vertices()),
    }
}

fn line_vertices(line: &Line) -> [Point; 2] {
    [line.p1, line.p2]
}
