//! Translation between the centered frame and canvas coordinates.
//!
//! Web geometry (slopes, radial offsets, which side of the hub a point lies
//! on) is reasoned about with the origin at the canvas center. Drawing
//! surfaces put the origin in the top-left corner. `CenterTransform` maps
//! between the two:
//!
//! ```text
//!   canvas   = centered + (width / 2, height / 2)
//!   centered = canvas   - (width / 2, height / 2)
//! ```

use crate::basics::Point;
use crate::error::Result;
use crate::segment::Segment;

/// Pure translation by half the canvas size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterTransform {
    tx: f64,
    ty: f64,
}

impl CenterTransform {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            tx: width / 2.0,
            ty: height / 2.0,
        }
    }

    /// The canvas center in canvas coordinates.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.tx, self.ty)
    }

    /// Centered frame to canvas frame.
    #[inline]
    pub fn to_canvas(&self, p: Point) -> Point {
        Point::new(p.x + self.tx, p.y + self.ty)
    }

    /// Canvas frame to centered frame.
    #[inline]
    pub fn to_centered(&self, p: Point) -> Point {
        Point::new(p.x - self.tx, p.y - self.ty)
    }

    /// Rebuild a canvas-space segment in the centered frame.
    pub fn segment_to_centered(&self, s: &Segment) -> Result<Segment> {
        s.map_points(|p| self.to_centered(p))
    }
}

// ============================================================================
// Tests
// ============================================================================
