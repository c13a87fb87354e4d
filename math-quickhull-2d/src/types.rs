//! Core data types for 2D convex hull computation

use crate::config::HullConfig;
use crate::geometry::{convex_polygon_contains, signed_area};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance used by [`ConvexHull2D::contains`]
const CONTAINS_EPSILON: f64 = 1e-9;

/// A 2D point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32)> for Point2 {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The result of a convex hull computation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "HullRecord")]
pub struct ConvexHull2D {
    /// Input points, sorted by `(x, y)`
    points: Vec<Point2>,
    /// Hull polygon in clockwise order: upper chain then lower chain
    vertices: Vec<Point2>,
    /// Number of vertices belonging to the upper chain
    upper_len: usize,
}

/// Unchecked serialized form of [`ConvexHull2D`]
#[derive(Deserialize)]
struct HullRecord {
    points: Vec<Point2>,
    vertices: Vec<Point2>,
    upper_len: usize,
}

impl TryFrom<HullRecord> for ConvexHull2D {
    type Error = String;

    fn try_from(record: HullRecord) -> Result<Self, Self::Error> {
        if record.upper_len > record.vertices.len() {
            return Err(format!(
                "upper_len {} exceeds the {} hull vertices",
                record.upper_len,
                record.vertices.len()
            ));
        }
        Ok(Self::new(record.points, record.vertices, record.upper_len))
    }
}

impl ConvexHull2D {
    pub(crate) fn new(points: Vec<Point2>, vertices: Vec<Point2>, upper_len: usize) -> Self {
        Self {
            points,
            vertices,
            upper_len,
        }
    }

    /// Build a convex hull from points using the QuickHull algorithm
    pub fn build(points: &[Point2]) -> crate::Result<Self> {
        Self::build_with_config(points, &HullConfig::default())
    }

    /// Build a convex hull with explicit resource limits
    pub fn build_with_config(points: &[Point2], config: &HullConfig) -> crate::Result<Self> {
        crate::quickhull::quickhull_2d(points, config)
    }

    /// Get the input points (sorted by `x`, then `y`)
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Get the hull vertices in clockwise order
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Consume the hull and return its vertices
    pub fn into_vertices(self) -> Vec<Point2> {
        self.vertices
    }

    /// Hull chain above the line joining the extreme points, ending at the rightmost point
    pub fn upper_chain(&self) -> &[Point2] {
        &self.vertices[..self.upper_len]
    }

    /// Hull chain below the line joining the extreme points, ending at the leftmost point
    pub fn lower_chain(&self) -> &[Point2] {
        &self.vertices[self.upper_len..]
    }

    /// Get the number of hull vertices
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of input points
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// The hull has no interior (all input points are collinear)
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Area enclosed by the hull
    pub fn area(&self) -> f64 {
        signed_area(&self.vertices).abs()
    }

    /// Length of the closed hull boundary
    pub fn perimeter(&self) -> f64 {
        let n = self.vertices.len();
        if n < 2 {
            return 0.0;
        }
        if n == 2 {
            // A segment is walked there and back
            return 2.0 * self.vertices[0].distance(&self.vertices[1]);
        }
        (0..n)
            .map(|i| self.vertices[i].distance(&self.vertices[(i + 1) % n]))
            .sum()
    }

    /// Check if a point lies on or inside the hull
    pub fn contains(&self, point: &Point2) -> bool {
        convex_polygon_contains(&self.vertices, point, CONTAINS_EPSILON)
    }
}
