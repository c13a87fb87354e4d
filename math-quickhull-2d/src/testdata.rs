//! Point sets for hull tests and demos
//!
//! Random generators take an optional seed so results can be reproduced.

use crate::ConvexHullError;
use crate::types::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => {
            let mut thread_rng = rand::rng();
            StdRng::from_rng(&mut thread_rng)
        }
    }
}

/// Generate random points with integer coordinates in `[min, max]`
pub fn random_integer_points(n: usize, min: i32, max: i32, seed: Option<u64>) -> Vec<Point2> {
    let mut rng = make_rng(seed);
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };

    (0..n)
        .map(|_| {
            let x = rng.random_range(lo..=hi);
            let y = rng.random_range(lo..=hi);
            Point2::from((x, y))
        })
        .collect()
}

/// Generate random points uniformly distributed in a disk centred on the origin
pub fn random_disk_points(n: usize, radius: f64, seed: Option<u64>) -> Vec<Point2> {
    let mut rng = make_rng(seed);
    let mut points = Vec::with_capacity(n);

    for _ in 0..n {
        let angle = rng.random::<f64>() * 2.0 * std::f64::consts::PI;
        let r = radius * rng.random::<f64>().sqrt();
        points.push(Point2::new(r * angle.cos(), r * angle.sin()));
    }

    points
}

/// Generate `n` points evenly spaced on a circle (all of them are hull vertices)
pub fn circle_points(n: usize, radius: f64) -> Vec<Point2> {
    (0..n)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * (i as f64) / (n as f64);
            Point2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Square corners with one point at the centre
pub fn square_with_center(size: f64) -> Vec<Point2> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(0.0, size),
        Point2::new(size, 0.0),
        Point2::new(size, size),
        Point2::new(size / 2.0, size / 2.0),
    ]
}

/// Points on the diagonal `y = x`
pub fn collinear_points(n: usize) -> Vec<Point2> {
    (0..n).map(|i| Point2::new(i as f64, i as f64)).collect()
}

/// Load points from a CSV file
///
/// Each line holds `x,y` (whitespace around values is ignored). Empty lines,
/// `#` comments and lines that do not parse (such as a header) are skipped.
pub fn load_csv_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point2>, ConvexHullError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut points = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() >= 2
            && let (Ok(x), Ok(y)) = (parts[0].parse::<f64>(), parts[1].parse::<f64>())
        {
            points.push(Point2::new(x, y));
        }
    }

    if points.is_empty() {
        Err(ConvexHullError::InsufficientPoints { count: 0 })
    } else {
        Ok(points)
    }
}
