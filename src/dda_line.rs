//! Integer line interpolation for raster strokes.
//!
//! Strokes arrive with real coordinates; they are converted to 8-bit
//! subpixel integers and walked with a Bresenham interpolator that spreads
//! rounding error evenly along the dominant axis.

use crate::basics::iround;

/// Subpixel constants for the Bresenham interpolator.
pub const SUBPIXEL_SHIFT: i32 = 8;
pub const SUBPIXEL_SCALE: i32 = 1 << SUBPIXEL_SHIFT;

/// Convert a real coordinate to subpixel integer units.
#[inline]
pub fn subpixel(v: f64) -> i32 {
    iround(v * SUBPIXEL_SCALE as f64)
}

/// Convert from high-resolution (subpixel) to low-resolution (pixel).
#[inline]
pub fn line_lr(v: i32) -> i32 {
    v >> SUBPIXEL_SHIFT
}

// ============================================================================
// DDA2 line interpolator
// ============================================================================

/// Integer DDA that distributes `y2 - y1` over `count` steps with
/// Bresenham-style remainder tracking.
#[derive(Debug, Clone)]
pub struct Dda2LineInterpolator {
    cnt: i32,
    lft: i32,
    rem: i32,
    mod_val: i32,
    y: i32,
}

impl Dda2LineInterpolator {
    /// Forward-adjusted line from y1 to y2 over `count` steps.
    ///
    /// The per-step remainder is kept in `1..=cnt` so `inc` only ever
    /// carries upward.
    pub fn new_forward(y1: i32, y2: i32, count: i32) -> Self {
        let cnt = count.max(1);
        let dy = y2 - y1;
        let (lft, rem) = match (dy.div_euclid(cnt), dy.rem_euclid(cnt)) {
            (q, 0) => (q - 1, cnt),
            (q, r) => (q, r),
        };
        Self {
            cnt,
            lft,
            rem,
            mod_val: rem - cnt,
            y: y1,
        }
    }

    /// Step forward one unit.
    #[inline]
    pub fn inc(&mut self) {
        self.mod_val += self.rem;
        self.y += self.lft;
        if self.mod_val > 0 {
            self.mod_val -= self.cnt;
            self.y += 1;
        }
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }
}

// ============================================================================
// Bresenham line interpolator
// ============================================================================

/// Bresenham walker over subpixel endpoints.
pub struct LineBresenhamInterpolator {
    x1_lr: i32,
    y1_lr: i32,
    ver: bool,
    len: u32,
    inc: i32,
    interpolator: Dda2LineInterpolator,
}

impl LineBresenhamInterpolator {
    /// Endpoints in subpixel units (see [`subpixel`]).
    ///
    /// The dominant axis is stepped one pixel at a time; the other axis is
    /// interpolated at subpixel precision.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let (x1_lr, y1_lr) = (line_lr(x1), line_lr(y1));
        let dx_lr = line_lr(x2) - x1_lr;
        let dy_lr = line_lr(y2) - y1_lr;
        let ver = dx_lr.abs() < dy_lr.abs();

        let (major_lr, major_dir, minor) = if ver {
            (dy_lr, y2 - y1, (x1, x2))
        } else {
            (dx_lr, x2 - x1, (y1, y2))
        };
        let len = major_lr.unsigned_abs();

        Self {
            x1_lr,
            y1_lr,
            ver,
            len,
            inc: if major_dir > 0 { 1 } else { -1 },
            interpolator: Dda2LineInterpolator::new_forward(minor.0, minor.1, len as i32),
        }
    }

    /// True if the line is vertical-major.
    #[inline]
    pub fn is_ver(&self) -> bool {
        self.ver
    }

    /// Number of steps in the dominant axis.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Current pixel, then advance one step along the dominant axis.
    #[inline]
    fn step(&mut self) -> (i32, i32) {
        let secondary = line_lr(self.interpolator.y());
        let pixel = if self.ver {
            (secondary, self.y1_lr)
        } else {
            (self.x1_lr, secondary)
        };
        self.interpolator.inc();
        if self.ver {
            self.y1_lr += self.inc;
        } else {
            self.x1_lr += self.inc;
        }
        pixel
    }

    /// Visit every pixel of the line. With `last` the end pixel is included.
    pub fn walk(mut self, last: bool, mut plot: impl FnMut(i32, i32)) {
        if self.len == 0 {
            if last {
                plot(self.x1_lr, self.y1_lr);
            }
            return;
        }
        let n = if last { self.len + 1 } else { self.len };
        for _ in 0..n {
            let (x, y) = self.step();
            plot(x, y);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pixels(x1: f64, y1: f64, x2: f64, y2: f64) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        LineBresenhamInterpolator::new(subpixel(x1), subpixel(y1), subpixel(x2), subpixel(y2))
            .walk(true, |x, y| out.push((x, y)));
        out
    }

    #[test]
    fn test_subpixel_conversion() {
        assert_eq!(subpixel(1.0), 256);
        assert_eq!(subpixel(0.5), 128);
        assert_eq!(line_lr(subpixel(7.9)), 7);
        assert_eq!(line_lr(subpixel(-0.5)), -1);
    }

    #[test]
    fn test_dda2_even_split() {
        let mut dda = Dda2LineInterpolator::new_forward(0, 10, 5);
        for _ in 0..5 {
            dda.inc();
        }
        assert_eq!(dda.y(), 10);
    }

    #[test]
    fn test_dda2_descending_split() {
        let mut dda = Dda2LineInterpolator::new_forward(10, 0, 5);
        for _ in 0..5 {
            dda.inc();
        }
        assert_eq!(dda.y(), 0);
    }

    #[test]
    fn test_dda2_uneven_steps_land_on_end() {
        for (y1, y2, n) in [(0, -7, 3), (0, 10, 3), (5, 5, 4), (3, -9, 5)] {
            let mut dda = Dda2LineInterpolator::new_forward(y1, y2, n);
            let mut prev = dda.y();
            for _ in 0..n {
                dda.inc();
                assert!((dda.y() - prev).abs() <= (y2 - y1).abs() / n + 1);
                prev = dda.y();
            }
            assert_eq!(dda.y(), y2, "{} -> {} over {}", y1, y2, n);
        }
    }

    #[test]
    fn test_bresenham_horizontal() {
        let li = LineBresenhamInterpolator::new(0, 0, 10 * SUBPIXEL_SCALE, 0);
        assert!(!li.is_ver());
        assert_eq!(li.len(), 10);
        assert_eq!(pixels(0.0, 3.0, 4.0, 3.0), vec![(0, 3), (1, 3), (2, 3), (3, 3), (4, 3)]);
    }

    #[test]
    fn test_bresenham_vertical() {
        let li = LineBresenhamInterpolator::new(0, 0, 0, 10 * SUBPIXEL_SCALE);
        assert!(li.is_ver());
        assert_eq!(li.len(), 10);
        assert_eq!(pixels(2.0, 0.0, 2.0, 3.0), vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_bresenham_diagonal_ends() {
        let px = pixels(0.0, 0.0, 5.0, 5.0);
        assert_eq!(px.len(), 6);
        assert_eq!(px[0], (0, 0));
        assert_eq!(px[5], (5, 5));
    }

    #[test]
    fn test_bresenham_negative_direction() {
        let px = pixels(5.0, 1.0, 1.0, 1.0);
        assert_eq!(px, vec![(5, 1), (4, 1), (3, 1), (2, 1), (1, 1)]);
    }

    #[test]
    fn test_zero_length_plots_once_when_last() {
        assert_eq!(pixels(3.2, 4.7, 3.4, 4.9), vec![(3, 4)]);
        let mut count = 0;
        LineBresenhamInterpolator::new(subpixel(3.2), subpixel(4.7), subpixel(3.4), subpixel(4.9))
            .walk(false, |_, _| count += 1);
        assert_eq!(count, 0);
    }
}
