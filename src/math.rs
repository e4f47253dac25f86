//! Geometric math utilities.

use crate::basics::Point;

// ============================================================================
// Constants
// ============================================================================

/// Coinciding points maximal distance (epsilon).
pub const VERTEX_DIST_EPSILON: f64 = 1e-14;

// ============================================================================
// Distance calculations
// ============================================================================

/// Euclidean distance between two points.
#[inline]
pub fn calc_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Euclidean distance between two `Point`s.
#[inline]
pub fn point_distance(a: Point, b: Point) -> f64 {
    calc_distance(a.x, a.y, b.x, b.y)
}

/// True when two points are closer than [`VERTEX_DIST_EPSILON`].
#[inline]
pub fn points_coincide(a: Point, b: Point) -> bool {
    point_distance(a, b) < VERTEX_DIST_EPSILON
}

/// Linearly spaced samples over `[start, stop]`, endpoints included.
///
/// `num == 1` yields `[start]`, `num == 0` yields nothing.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut out: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
            // Last sample is exactly `stop`.
            out[num - 1] = stop;
            out
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
