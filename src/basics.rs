//! Points, rounding and the vertex streaming interface.
//!
//! Everything else in the crate depends on the `Point` value type and the
//! `VertexSource` streaming interface defined here.

// ============================================================================
// Rounding
// ============================================================================

/// Nearest integer, halves rounded away from zero.
#[inline]
pub fn iround(v: f64) -> i32 {
    v.round() as i32
}

/// Largest integer not above `v`. Used for pixel spans that may start left
/// of the canvas.
#[inline]
pub fn ifloor(v: f64) -> i32 {
    v.floor() as i32
}

pub const PI: f64 = std::f64::consts::PI;

// ============================================================================
// Path commands
// ============================================================================

pub const PATH_CMD_STOP: u32 = 0;
pub const PATH_CMD_MOVE_TO: u32 = 1;
pub const PATH_CMD_LINE_TO: u32 = 2;

#[inline]
pub fn is_stop(c: u32) -> bool {
    c == PATH_CMD_STOP
}

#[inline]
pub fn is_move_to(c: u32) -> bool {
    c == PATH_CMD_MOVE_TO
}

#[inline]
pub fn is_line_to(c: u32) -> bool {
    c == PATH_CMD_LINE_TO
}

// ============================================================================
// Point
// ============================================================================

/// An immutable 2D point with real coordinates.
///
/// Arithmetic is spelled out as named methods returning new values; nothing
/// mutates a point in place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    pub fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    #[inline]
    pub fn scale(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }

    #[inline]
    pub fn negate(self) -> Point {
        Point::new(-self.x, -self.y)
    }

    /// Affine combination `self * (1 - t) + other * t`.
    ///
    /// Written so that `t == 0` yields `self` and `t == 1` yields `other`
    /// exactly, with no rounding drift at the ends.
    #[inline]
    pub fn lerp(self, other: Point, t: f64) -> Point {
        self.scale(1.0 - t).add(other.scale(t))
    }

    /// Midpoint `(self + other) / 2`.
    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        self.add(other).scale(0.5)
    }

    /// Rotate about the origin by `theta` radians using the matrix
    /// `[[cos, sin], [-sin, cos]]` (clockwise in a y-up frame).
    pub fn rotate(self, theta: f64) -> Point {
        let (s, c) = theta.sin_cos();
        Point::new(self.x * c + self.y * s, -self.x * s + self.y * c)
    }

    pub fn to_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

// ============================================================================
// VertexSource trait
// ============================================================================

/// A resettable stream of path vertices.
///
/// Generators (curves, polylines) implement this so that consumers can pull
/// vertices one at a time without allocating the whole path.
pub trait VertexSource {
    /// Restart the stream. Single-path sources ignore `path_id`.
    fn rewind(&mut self, path_id: u32);

    /// Write the next vertex into `x`, `y` and return its command, or
    /// `PATH_CMD_STOP` once the stream is exhausted.
    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32;
}

impl<T: VertexSource> VertexSource for &mut T {
    fn rewind(&mut self, path_id: u32) {
        (*self).rewind(path_id);
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        (*self).vertex(x, y)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_on_canvas_coordinates() {
        // 1200.5 is the hub column of a 2401 px canvas
        assert_eq!(iround(1200.5), 1201);
        assert_eq!(iround(-3.5), -4);
        assert_eq!(iround(856.49), 856);
        assert_eq!(ifloor(-0.25), -1);
        assert_eq!(ifloor(-16.0), -16);
        assert_eq!(ifloor(15.999), 15);
    }

    #[test]
    fn test_path_command_classification() {
        assert!(is_stop(PATH_CMD_STOP));
        assert!(!is_stop(PATH_CMD_MOVE_TO));
        assert!(is_move_to(PATH_CMD_MOVE_TO));
        assert!(is_line_to(PATH_CMD_LINE_TO));
        assert!(!is_line_to(PATH_CMD_MOVE_TO));
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -4.0);
        assert_eq!(a.add(b), Point::new(4.0, -2.0));
        assert_eq!(a.sub(b), Point::new(-2.0, 6.0));
        assert_eq!(a.scale(2.5), Point::new(2.5, 5.0));
        assert_eq!(a.negate(), Point::new(-1.0, -2.0));
        assert_eq!(a.midpoint(b), Point::new(2.0, -1.0));
    }

    #[test]
    fn test_lerp_endpoints_exact() {
        let a = Point::new(0.1, 1234.567);
        let b = Point::new(-98.7, 0.3);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let m = a.lerp(b, 0.5);
        assert!((m.x - a.midpoint(b).x).abs() < 1e-12);
        assert!((m.y - a.midpoint(b).y).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_is_pure() {
        let p = Point::new(0.0, 10.0);
        let q = p.rotate(PI / 2.0);
        assert_eq!(p, Point::new(0.0, 10.0));
        assert!((q.x - 10.0).abs() < 1e-12);
        assert!(q.y.abs() < 1e-12);
    }

    #[test]
    fn test_rotate_preserves_length() {
        let p = Point::new(3.0, 4.0);
        for i in 0..16 {
            let q = p.rotate(i as f64 * 0.37);
            assert!(((q.x * q.x + q.y * q.y).sqrt() - 5.0).abs() < 1e-12);
        }
    }
}
