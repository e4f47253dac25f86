//! Straight segments with cached slope, intercept and length.

use crate::basics::Point;
use crate::error::{Result, WebError};
use crate::math::point_distance;

/// An ordered, immutable pair of points.
///
/// Slope, intercept and length are computed once on construction. Vertical
/// segments have no slope and cannot be built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    p1: Point,
    p2: Point,
    slope: f64,
    intercept: f64,
    length: f64,
}

impl Segment {
    /// Build a segment from `p1` to `p2`.
    ///
    /// Fails with [`WebError::InvalidGeometry`] when both points share the
    /// same x coordinate.
    pub fn new(p1: Point, p2: Point) -> Result<Self> {
        let dx = p2.x - p1.x;
        if dx == 0.0 {
            return Err(WebError::InvalidGeometry { x: p1.x });
        }
        let slope = (p2.y - p1.y) / dx;
        Ok(Self {
            p1,
            p2,
            slope,
            intercept: p1.y - slope * p1.x,
            length: point_distance(p1, p2),
        })
    }

    #[inline]
    pub fn p1(&self) -> Point {
        self.p1
    }

    #[inline]
    pub fn p2(&self) -> Point {
        self.p2
    }

    #[inline]
    pub fn points(&self) -> (Point, Point) {
        (self.p1, self.p2)
    }

    #[inline]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    #[inline]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn midpoint(&self) -> Point {
        self.p1.midpoint(self.p2)
    }

    /// The same segment with both endpoints passed through `f`.
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Result<Segment> {
        Segment::new(f(self.p1), f(self.p2))
    }

    pub fn to_tuple(&self) -> (f64, f64, f64, f64) {
        (self.p1.x, self.p1.y, self.p2.x, self.p2.y)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_attributes() {
        let s = Segment::new(Point::new(0.0, 1.0), Point::new(3.0, 5.0)).unwrap();
        assert!((s.slope() - 4.0 / 3.0).abs() < 1e-12);
        assert!((s.intercept() - 1.0).abs() < 1e-12);
        assert!((s.length() - 5.0).abs() < 1e-12);
        assert_eq!(s.midpoint(), Point::new(1.5, 3.0));
    }

    #[test]
    fn test_vertical_segment_rejected() {
        let err = Segment::new(Point::new(2.0, 1.0), Point::new(2.0, 9.0)).unwrap_err();
        assert_eq!(err, WebError::InvalidGeometry { x: 2.0 });
    }

    #[test]
    fn test_degenerate_point_segment_rejected() {
        let p = Point::new(4.0, 4.0);
        assert!(Segment::new(p, p).is_err());
    }

    #[test]
    fn test_horizontal_segment_has_zero_slope() {
        let s = Segment::new(Point::new(-1.0, 7.0), Point::new(1.0, 7.0)).unwrap();
        assert_eq!(s.slope(), 0.0);
        assert_eq!(s.intercept(), 7.0);
        assert_eq!(s.length(), 2.0);
    }

    #[test]
    fn test_map_points() {
        let s = Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 2.0)).unwrap();
        let t = s.map_points(|p| p.add(Point::new(10.0, 10.0))).unwrap();
        assert_eq!(t.points(), (Point::new(10.0, 10.0), Point::new(11.0, 12.0)));
        assert!((t.slope() - s.slope()).abs() < 1e-12);
        assert_eq!(t.to_tuple(), (10.0, 10.0, 11.0, 12.0));
    }
}
