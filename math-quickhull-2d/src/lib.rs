//! 2D Convex Hull Library
//!
//! This library implements the QuickHull divide-and-conquer algorithm for
//! computing the convex hull of a finite set of points in the plane.
//!
//! The hull is returned as a closed polygon in clockwise order: the upper
//! chain (from the leftmost towards the rightmost point) followed by the
//! lower chain (back to the leftmost point).
//!
//! # 2D Convex Hull Example
//! ```
//! use math_quickhull_2d::{ConvexHull2D, Point2};
//!
//! let points = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(0.0, 10.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(5.0, 5.0),
//! ];
//!
//! let hull = ConvexHull2D::build(&points).unwrap();
//! assert_eq!(hull.num_vertices(), 4);
//! assert!(!hull.vertices().contains(&Point2::new(5.0, 5.0)));
//! ```

mod config;
mod export;
mod geometry;
mod quickhull;
mod report;
mod types;

// Make testdata publicly available for tests and the CLI
pub mod testdata;

pub use config::{HullConfig, HullConfigBuilder};
pub use export::{export_html, export_json, hull_plot};
pub use geometry::{LineCoefficients, lexicographic_cmp, line_coefficients, orientation};
pub use quickhull::{compute_hull, farthest_point, hull_side, left_points};
pub use report::format_point_table;
pub use types::{ConvexHull2D, Point2};

/// Error types for convex hull operations
#[derive(Debug, thiserror::Error)]
pub enum ConvexHullError {
    #[error("Not enough points to form a hull (got {count}, minimum 2 required)")]
    InsufficientPoints { count: usize },

    #[error("All points are coincident, at least 2 distinct points are required")]
    CoincidentPoints,

    #[error("Point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error("Too many points: {count} exceeds the configured limit of {limit}")]
    TooManyPoints { count: usize, limit: usize },

    #[error("Maximum recursion depth {limit} exceeded")]
    MaxDepthExceeded { limit: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConvexHullError>;
