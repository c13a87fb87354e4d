//! QuickHull algorithm implementation for 2D convex hulls
//!
//! Based on:
//! - Eddy, W.F., "A new convex hull algorithm for planar sets,"
//!   ACM Trans. on Mathematical Software, 3(4):398-403, 1977.
//! - Barber, C.B., Dobkin, D.P., and Huhdanpaa, H.T., "The Quickhull algorithm
//!   for convex hulls," ACM Trans. on Mathematical Software, 22(4):469-483, 1996.
//!
//! The input is sorted by `(x, y)` and split by the directed line joining the
//! two extreme points. Each side is resolved recursively: the point farthest
//! from the current baseline is a hull vertex, and only points strictly left
//! of the two new edges can still contribute to that side.
//!
//! Recursion depth is O(log n) for random input and O(n) in the worst case
//! (points in convex position where each split removes a single point).

use crate::config::HullConfig;
use crate::geometry::{lexicographic_cmp, line_coefficients, orientation};
use crate::types::{ConvexHull2D, Point2};
use crate::{ConvexHullError, Result};

/// Tracks recursion depth and whether the configured limit was hit
#[derive(Debug)]
struct DepthGuard {
    limit: Option<usize>,
    deepest: usize,
    exceeded: bool,
}

impl DepthGuard {
    fn new(limit: Option<usize>) -> Self {
        Self {
            limit,
            deepest: 0,
            exceeded: false,
        }
    }

    /// Record entering `depth`; returns `false` once the limit is crossed
    #[inline]
    fn enter(&mut self, depth: usize) -> bool {
        self.deepest = self.deepest.max(depth);
        if let Some(limit) = self.limit
            && depth > limit
        {
            self.exceeded = true;
        }
        !self.exceeded
    }
}

/// Get the points strictly left of the directed line `origin -> target`.
///
/// Collinear points and points on the right are dropped. Input order is kept.
pub fn left_points(origin: &Point2, target: &Point2, points: &[Point2]) -> Vec<Point2> {
    points
        .iter()
        .filter(|point| orientation(origin, target, point) > 0.0)
        .copied()
        .collect()
}

/// Find the point farthest from the line through `origin` and `target`.
///
/// Returns `None` if `points` is empty or no point has a positive distance.
/// On exact ties the first point encountered wins.
pub fn farthest_point(origin: &Point2, target: &Point2, points: &[Point2]) -> Option<Point2> {
    let line = line_coefficients(origin, target);
    let mut max_distance = 0.0;
    let mut farthest = None;

    for point in points {
        let distance = line.distance(point);
        if distance > max_distance {
            max_distance = distance;
            farthest = Some(*point);
        }
    }

    farthest
}

/// Compute the hull chain on the left side of `origin -> target`.
///
/// The chain runs from just after `origin` up to and including `target`;
/// `origin` itself is never part of it.
pub fn hull_side(points: &[Point2], origin: &Point2, target: &Point2) -> Vec<Point2> {
    let mut guard = DepthGuard::new(None);
    hull_side_recursive(points, origin, target, 1, &mut guard)
}

fn hull_side_recursive(
    points: &[Point2],
    origin: &Point2,
    target: &Point2,
    depth: usize,
    guard: &mut DepthGuard,
) -> Vec<Point2> {
    if !guard.enter(depth) {
        return vec![*target];
    }

    let candidates = left_points(origin, target, points);

    let Some(pmax) = farthest_point(origin, target, &candidates) else {
        log::trace!("hull vertex {} confirmed at depth {}", target, depth);
        return vec![*target];
    };

    // `pmax` is extreme in this half-plane; resolve both edges of the triangle
    let mut chain = hull_side_recursive(&candidates, origin, &pmax, depth + 1, guard);
    chain.extend(hull_side_recursive(
        &candidates,
        &pmax,
        target,
        depth + 1,
        guard,
    ));
    chain
}

/// Compute the closed hull polygon of points sorted by `(x, y)` ascending.
///
/// The polygon is in clockwise order: the upper chain (ending at the last
/// point) followed by the lower chain (ending at the first point). Collinear
/// input yields exactly the two extreme points.
///
/// # Panics
///
/// Panics if `sorted_points` is empty. Panics with `debug_assertions` enabled
/// if the points are not sorted.
pub fn compute_hull(sorted_points: &[Point2]) -> Vec<Point2> {
    let mut guard = DepthGuard::new(None);
    assemble(sorted_points, &mut guard).0
}

/// Run both hull sides, returning the polygon and the upper chain length
fn assemble(sorted_points: &[Point2], guard: &mut DepthGuard) -> (Vec<Point2>, usize) {
    debug_assert!(
        sorted_points
            .windows(2)
            .all(|w| lexicographic_cmp(&w[0], &w[1]).is_le()),
        "points must be sorted by (x, y)"
    );

    let pmin = sorted_points[0];
    let pmax = sorted_points[sorted_points.len() - 1];

    let mut hull = hull_side_recursive(sorted_points, &pmin, &pmax, 1, guard);
    let upper_len = hull.len();
    hull.extend(hull_side_recursive(sorted_points, &pmax, &pmin, 1, guard));

    (hull, upper_len)
}

/// Build a convex hull, validating the input and honouring `config` limits
pub(crate) fn quickhull_2d(points: &[Point2], config: &HullConfig) -> Result<ConvexHull2D> {
    config.validate()?;

    if points.len() < 2 {
        return Err(ConvexHullError::InsufficientPoints {
            count: points.len(),
        });
    }

    if let Some(limit) = config.max_points
        && points.len() > limit
    {
        log::error!(
            "Refusing to build hull of {} points (limit {})",
            points.len(),
            limit
        );
        return Err(ConvexHullError::TooManyPoints {
            count: points.len(),
            limit,
        });
    }

    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(ConvexHullError::NonFiniteCoordinate { index });
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(lexicographic_cmp);

    let pmin = sorted[0];
    let pmax = sorted[sorted.len() - 1];
    if pmin == pmax {
        return Err(ConvexHullError::CoincidentPoints);
    }

    log::debug!(
        "QuickHull on {} points, extremes {} and {}",
        sorted.len(),
        pmin,
        pmax
    );

    let mut guard = DepthGuard::new(config.max_depth);
    let (vertices, upper_len) = assemble(&sorted, &mut guard);

    if guard.exceeded {
        let limit = config.max_depth.unwrap_or(guard.deepest);
        log::error!(
            "Max recursion depth {} exceeded on {} points",
            limit,
            sorted.len()
        );
        return Err(ConvexHullError::MaxDepthExceeded { limit });
    }

    log::debug!(
        "Hull has {} vertices ({} upper, {} lower), max depth {}",
        vertices.len(),
        upper_len,
        vertices.len() - upper_len,
        guard.deepest
    );

    Ok(ConvexHull2D::new(sorted, vertices, upper_len))
}
