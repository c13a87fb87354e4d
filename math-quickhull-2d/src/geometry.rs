//! Geometric utility functions

use crate::types::Point2;
use std::cmp::Ordering;

/// Signed area (times two) of the triangle `p1, p2, p3`.
///
/// - `> 0`: `p3` is strictly left of the directed line `p1 -> p2`
/// - `< 0`: `p3` is strictly right of it
/// - `== 0`: the three points are collinear
pub fn orientation(p1: &Point2, p2: &Point2, p3: &Point2) -> f64 {
    (p1.x * p2.y + p3.x * p1.y + p2.x * p3.y) - (p3.x * p2.y + p2.x * p1.y + p1.x * p3.y)
}

/// Coefficients of the implicit line equation `a*x + b*y + c = 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LineCoefficients {
    /// Perpendicular distance from `point` to the line.
    ///
    /// Returns `0.0` for a degenerate line (both defining points identical).
    pub fn distance(&self, point: &Point2) -> f64 {
        let norm = (self.a * self.a + self.b * self.b).sqrt();
        if norm == 0.0 {
            return 0.0;
        }
        (self.a * point.x + self.b * point.y + self.c).abs() / norm
    }
}

/// Line through `p1` and `p2`
pub fn line_coefficients(p1: &Point2, p2: &Point2) -> LineCoefficients {
    LineCoefficients {
        a: p2.y - p1.y,
        b: p1.x - p2.x,
        c: p2.x * p1.y - p1.x * p2.y,
    }
}

/// Compares two points first by `x`, then by `y`.
///
/// `-0.0` and `0.0` compare equal.
pub fn lexicographic_cmp(a: &Point2, b: &Point2) -> Ordering {
    // Adding +0.0 turns -0.0 into 0.0 and leaves every other value unchanged
    (a.x + 0.0)
        .total_cmp(&(b.x + 0.0))
        .then((a.y + 0.0).total_cmp(&(b.y + 0.0)))
}

/// Signed shoelace area of a closed polygon (negative when clockwise)
pub fn signed_area(polygon: &[Point2]) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| {
            let p = &polygon[i];
            let q = &polygon[(i + 1) % n];
            p.x * q.y - q.x * p.y
        })
        .sum();
    twice / 2.0
}

/// Check whether `point` is on or inside a clockwise convex polygon.
///
/// `epsilon` is relative to the largest coordinate magnitude involved.
/// Degenerate polygons (one or two vertices) contain exactly the points of
/// their vertex or segment.
pub fn convex_polygon_contains(polygon: &[Point2], point: &Point2, epsilon: f64) -> bool {
    let scale = polygon
        .iter()
        .chain(std::iter::once(point))
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(1.0, f64::max);

    match polygon.len() {
        0 => false,
        1 => polygon[0].distance(point) <= epsilon * scale,
        2 => on_segment(&polygon[0], &polygon[1], point, epsilon * scale),
        n => {
            // Orientation is quadratic in the coordinates
            let tolerance = epsilon * scale * scale;
            (0..n).all(|i| {
                let p = &polygon[i];
                let q = &polygon[(i + 1) % n];
                // Clockwise winding: interior points are on the right of each edge
                orientation(p, q, point) <= tolerance
            })
        }
    }
}

fn on_segment(a: &Point2, b: &Point2, point: &Point2, epsilon: f64) -> bool {
    let line = line_coefficients(a, b);
    if line.distance(point) > epsilon {
        return false;
    }
    point.x >= a.x.min(b.x) - epsilon
        && point.x <= a.x.max(b.x) + epsilon
        && point.y >= a.y.min(b.y) - epsilon
        && point.y <= a.y.max(b.y) + epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_sign() {
        let o = Point2::new(0.0, 0.0);
        let t = Point2::new(10.0, 0.0);

        assert!(orientation(&o, &t, &Point2::new(5.0, 10.0)) > 0.0);
        assert!(orientation(&o, &t, &Point2::new(5.0, -10.0)) < 0.0);
        assert_eq!(orientation(&o, &t, &Point2::new(20.0, 0.0)), 0.0);
        // Twice the triangle area
        assert_eq!(orientation(&o, &t, &Point2::new(5.0, 10.0)), 100.0);
    }

    #[test]
    fn test_line_coefficients() {
        let line = line_coefficients(&Point2::new(1.0, 2.0), &Point2::new(4.0, 6.0));
        assert_eq!(line.a, 4.0);
        assert_eq!(line.b, -3.0);
        assert_eq!(line.c, 2.0);

        // Both defining points satisfy the equation
        for p in [Point2::new(1.0, 2.0), Point2::new(4.0, 6.0)] {
            assert_eq!(line.a * p.x + line.b * p.y + line.c, 0.0);
        }
    }

    #[test]
    fn test_distance() {
        let line = line_coefficients(&Point2::new(0.0, 0.0), &Point2::new(10.0, 0.0));
        assert!((line.distance(&Point2::new(3.0, 7.0)) - 7.0).abs() < 1e-12);
        assert!((line.distance(&Point2::new(3.0, -2.0)) - 2.0).abs() < 1e-12);

        let diagonal = line_coefficients(&Point2::new(0.0, 0.0), &Point2::new(1.0, 1.0));
        let d = diagonal.distance(&Point2::new(0.0, 2.0));
        assert!((d - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_line_distance_is_zero() {
        let p = Point2::new(3.0, 3.0);
        let line = line_coefficients(&p, &p);
        let d = line.distance(&Point2::new(100.0, -40.0));
        assert_eq!(d, 0.0);
        assert!(!d.is_nan());
    }

    #[test]
    fn test_lexicographic_cmp() {
        let a = Point2::new(1.0, 5.0);
        let b = Point2::new(1.0, 7.0);
        let c = Point2::new(0.0, 9.0);
        assert_eq!(lexicographic_cmp(&a, &b), Ordering::Less);
        assert_eq!(lexicographic_cmp(&a, &c), Ordering::Greater);
        assert_eq!(lexicographic_cmp(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_lexicographic_cmp_signed_zero() {
        let neg = Point2::new(-0.0, 1.0);
        let pos = Point2::new(0.0, 1.0);
        assert_eq!(lexicographic_cmp(&neg, &pos), Ordering::Equal);
        assert_eq!(
            lexicographic_cmp(&Point2::new(-0.0, 5.0), &Point2::new(0.0, 1.0)),
            Ordering::Greater
        );
        assert_eq!(
            lexicographic_cmp(&Point2::new(1.0, -0.0), &Point2::new(1.0, 0.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_convex_polygon_contains_large_coordinates() {
        // Far from the origin the orientation rounding error is many units
        let offset = 1.0e8;
        let cw = [
            Point2::new(offset + 0.3, offset + 1.0e6 + 0.7),
            Point2::new(offset + 1.0e6 + 0.1, offset + 0.9),
            Point2::new(offset + 0.3, offset + 0.9),
        ];
        for vertex in &cw {
            assert!(convex_polygon_contains(&cw, vertex, 1e-9));
        }
        let midpoint = Point2::new((cw[0].x + cw[1].x) / 2.0, (cw[0].y + cw[1].y) / 2.0);
        assert!(convex_polygon_contains(&cw, &midpoint, 1e-9));
        assert!(convex_polygon_contains(
            &cw,
            &Point2::new(offset + 1000.0, offset + 1000.0),
            1e-9
        ));
        assert!(!convex_polygon_contains(
            &cw,
            &Point2::new(offset + 1.0e6, offset + 1.0e6),
            1e-9
        ));
        assert!(!convex_polygon_contains(
            &cw,
            &Point2::new(offset - 1000.0, offset + 1000.0),
            1e-9
        ));
    }

    #[test]
    fn test_signed_area_winding() {
        let ccw = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        assert_eq!(signed_area(&ccw), 4.0);

        let cw: Vec<Point2> = ccw.iter().rev().copied().collect();
        assert_eq!(signed_area(&cw), -4.0);
        assert_eq!(signed_area(&ccw[..2]), 0.0);
    }

    #[test]
    fn test_convex_polygon_contains() {
        let cw = [
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 0.0),
            Point2::new(0.0, 0.0),
        ];
        assert!(convex_polygon_contains(&cw, &Point2::new(5.0, 5.0), 1e-9));
        assert!(convex_polygon_contains(&cw, &Point2::new(10.0, 5.0), 1e-9));
        assert!(!convex_polygon_contains(&cw, &Point2::new(10.5, 5.0), 1e-9));

        let segment = [Point2::new(3.0, 3.0), Point2::new(0.0, 0.0)];
        assert!(convex_polygon_contains(&segment, &Point2::new(0.0, 0.0), 1e-9));
        assert!(convex_polygon_contains(&segment, &Point2::new(1.0, 1.0), 1e-9));
        assert!(!convex_polygon_contains(&segment, &Point2::new(4.0, 4.0), 1e-9));
    }
}
