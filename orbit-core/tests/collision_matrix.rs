//! Exhaustive pairwise collision checks over a fixed shape sample set.
//!
//! Twelve shapes, every ordered pair tested against a hand-verified truth
//! table. The table doubles as a symmetry check: entry (i, j) must always
//! equal entry (j, i).

use orbit_core::collision::collides;
use orbit_core::geometry::{Circle, Line, Point, Polygon, Rectangle, Shape};

/// Sample set, indexed 0..12:
///
/// | idx | shape                          |
/// |-----|--------------------------------|
/// |  0  | Point (0, 0)                   |
/// |  1  | Point (10, 0)                  |
/// |  2  | Point (10, 10)                 |
/// |  3  | Line (0,0)-(10,0)              |
/// |  4  | Line (10,0)-(10,10)            |
/// |  5  | Line (0,0)-(10,10)             |
/// |  6  | Circle (0,0) r=10              |
/// |  7  | Circle (11,11) r=1             |
/// |  8  | Circle (11,11) r=10            |
/// |  9  | Rect (0,0) 10x10               |
/// | 10  | Rect (0,0) 9x9                 |
/// | 11  | Rect (10,10) 10x10             |
fn samples() -> Vec<Shape> {
    vec![
        Shape::from(Point::new(0.0, 0.0)),
        Shape::from(Point::new(10.0, 0.0)),
        Shape::from(Point::new(10.0, 10.0)),
        Shape::from(Line::from_coords(0.0, 0.0, 10.0, 0.0)),
        Shape::from(Line::from_coords(10.0, 0.0, 10.0, 10.0)),
        Shape::from(Line::from_coords(0.0, 0.0, 10.0, 10.0)),
        Shape::from(Circle::new(0.0, 0.0, 10.0)),
        Shape::from(Circle::new(11.0, 11.0, 1.0)),
        Shape::from(Circle::new(11.0, 11.0, 10.0)),
        Shape::from(Rectangle::new(0.0, 0.0, 10.0, 10.0)),
        Shape::from(Rectangle::new(0.0, 0.0, 9.0, 9.0)),
        Shape::from(Rectangle::new(10.0, 10.0, 10.0, 10.0)),
    ]
}

/// Expected result for every ordered pair; `EXPECTED[i][j]` is
/// `collides(samples[i], samples[j])`.
///
/// Boundary contact counts as a collision throughout: a point on a circle's
/// rim, touching rectangle edges, a circle grazing a corner.
const EXPECTED: [[bool; 12]; 12] = [
    [true, false, false, true, false, true, true, false, false, true, true, false],
    [false, true, false, true, true, false, true, false, false, true, false, false],
    [false, false, true, false, true, true, false, false, true, true, false, true],
    [true, true, false, false, true, true, true, false, false, true, true, false],
    [false, true, true, true, false, true, true, false, true, true, false, true],
    [true, false, true, true, true, false, true, false, true, true, true, true],
    [true, true, false, true, true, true, true, false, true, true, true, false],
    [false, false, false, false, false, false, false, true, true, false, false, true],
    [false, false, true, false, true, true, true, true, true, true, true, true],
    [true, true, true, true, true, true, true, false, true, true, true, true],
    [true, false, false, true, false, true, true, false, true, true, true, false],
    [false, false, true, false, true, true, false, true, true, true, false, true],
];

#[test]
fn pairwise_matrix_matches_expected() {
    let shapes = samples();
    let mut failures = Vec::new();

    for (i, a) in shapes.iter().enumerate() {
        for (j, b) in shapes.iter().enumerate() {
            let got = collides(a, b);
            if got != EXPECTED[i][j] {
                failures.push(format!(
                    "({}, {}): expected {}, got {} for {:?} vs {:?}",
                    i, j, EXPECTED[i][j], got, a, b
                ));
            }
        }
    }

    assert!(failures.is_empty(), "mismatches:\n{}", failures.join("\n"));
}

#[test]
fn expected_table_is_symmetric() {
    for i in 0..12 {
        for j in 0..12 {
            assert_eq!(
                EXPECTED[i][j], EXPECTED[j][i],
                "truth table asymmetric at ({}, {})",
                i, j
            );
        }
    }
}

#[test]
fn dispatch_is_symmetric_on_samples() {
    let shapes = samples();
    for a in &shapes {
        for b in &shapes {
            assert_eq!(
                collides(a, b),
                collides(b, a),
                "asymmetric dispatch for {:?} vs {:?}",
                a,
                b
            );
        }
    }
}

// =============================================================================
// Polygon cross-checks
// =============================================================================

fn triangles() -> Vec<Polygon> {
    vec![
        Polygon::from_coords(&[(0.0, 0.0), (1.0, 8.0), (4.0, 4.0)]).unwrap(),
        Polygon::from_coords(&[(3.0, 4.0), (7.0, 10.0), (9.0, 0.0)]).unwrap(),
        Polygon::from_coords(&[(8.0, 4.0), (12.0, 1.0), (12.0, 5.0), (10.0, 8.0)]).unwrap(),
    ]
}

#[test]
fn polygon_pair_fixtures() {
    let polys = triangles();
    let expected = [
        [true, true, false],
        [true, true, true],
        [false, true, true],
    ];

    for (i, a) in polys.iter().enumerate() {
        for (j, b) in polys.iter().enumerate() {
            let got = collides(&Shape::from(a.clone()), &Shape::from(b.clone()));
            assert_eq!(got, expected[i][j], "polygon pair ({}, {})", i, j);
        }
    }
}

#[test]
fn polygon_vs_other_kinds() {
    let tri = Shape::from(triangles().remove(0));

    // Interior and exterior points
    assert!(collides(&tri, &Shape::from(Point::new(2.0, 4.0))));
    assert!(!collides(&tri, &Shape::from(Point::new(5.0, 5.0))));

    // Crossing and clearing lines
    assert!(collides(&tri, &Shape::from(Line::from_coords(0.0, 5.0, 5.0, 5.0))));
    assert!(!collides(&tri, &Shape::from(Line::from_coords(0.0, 9.0, 5.0, 9.0))));

    // Overlapping and distant rectangles
    assert!(collides(&tri, &Shape::from(Rectangle::new(3.0, 3.0, 2.0, 2.0))));
    assert!(!collides(&tri, &Shape::from(Rectangle::new(10.0, 10.0, 2.0, 2.0))));

    // Circles: clear, overlapping, and fully inside
    assert!(!collides(&tri, &Shape::from(Circle::new(6.0, 6.0, 1.0))));
    assert!(collides(&tri, &Shape::from(Circle::new(6.0, 6.0, 3.0))));
    assert!(collides(&tri, &Shape::from(Circle::new(2.0, 4.0, 0.5))));
}
