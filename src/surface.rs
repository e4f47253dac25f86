//! Drawing surfaces.
//!
//! The generator never reads pixels back; it only appends strokes through
//! the narrow [`DrawingSurface`] interface. Two surfaces ship with the
//! crate:
//!
//! - [`RecordingSurface`] keeps the exact call sequence, which is what the
//!   determinism guarantees are stated against.
//! - [`RasterSurface`] owns an RGBA8 pixel buffer and writes strokes with a
//!   subpixel Bresenham walk. Pixels are replaced, not blended.

use crate::basics::{ifloor, Point};
use crate::color::Rgba8;
use crate::config::WebConfig;
use crate::dda_line::{subpixel, LineBresenhamInterpolator, SUBPIXEL_SHIFT};
use crate::error::{Result, WebError};

// ============================================================================
// DrawingSurface trait
// ============================================================================

/// Sink for the strokes a web is made of.
pub trait DrawingSurface {
    /// Draw a straight line from `p1` to `p2` in canvas coordinates.
    fn draw_line(&mut self, p1: Point, p2: Point, color: Rgba8, width: f64);

    /// Fill a disc of `radius` around `center`.
    fn fill_disc(&mut self, center: Point, radius: f64, color: Rgba8);
}

/// Blanket implementation so a pipeline can borrow its surface.
impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn draw_line(&mut self, p1: Point, p2: Point, color: Rgba8, width: f64) {
        (**self).draw_line(p1, p2, color, width);
    }

    fn fill_disc(&mut self, center: Point, radius: f64, color: Rgba8) {
        (**self).fill_disc(center, radius, color);
    }
}

// ============================================================================
// RecordingSurface
// ============================================================================

/// One call made against a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceCall {
    Line {
        p1: Point,
        p2: Point,
        color: Rgba8,
        width: f64,
    },
    Disc {
        center: Point,
        radius: f64,
        color: Rgba8,
    },
}

/// Surface that records every call in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<SurfaceCall> {
        self.calls
    }

    /// Endpoints of every recorded line, in call order.
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.calls.iter().filter_map(|c| match *c {
            SurfaceCall::Line { p1, p2, .. } => Some((p1, p2)),
            SurfaceCall::Disc { .. } => None,
        })
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl DrawingSurface for RecordingSurface {
    fn draw_line(&mut self, p1: Point, p2: Point, color: Rgba8, width: f64) {
        self.calls.push(SurfaceCall::Line {
            p1,
            p2,
            color,
            width,
        });
    }

    fn fill_disc(&mut self, center: Point, radius: f64, color: Rgba8) {
        self.calls.push(SurfaceCall::Disc {
            center,
            radius,
            color,
        });
    }
}

// ============================================================================
// RasterSurface
// ============================================================================

/// Largest canvas side, in pixels, that subpixel line coordinates can address.
pub const MAX_DIMENSION: u32 = (i32::MAX >> SUBPIXEL_SHIFT) as u32;

/// Owned RGBA8 canvas, row-major, top-to-bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterSurface {
    /// A canvas filled with `background`.
    ///
    /// Fails with `InvalidConfiguration` when a side exceeds
    /// [`MAX_DIMENSION`] or the buffer size does not fit in memory.
    pub fn new(width: u32, height: u32, background: Rgba8) -> Result<Self> {
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(WebError::config(format!(
                "raster canvas {width}x{height} exceeds {MAX_DIMENSION} pixels per side"
            )));
        }
        let pixels = (width as usize)
            .checked_mul(height as usize)
            .filter(|n| n.checked_mul(4).is_some())
            .ok_or_else(|| {
                WebError::config(format!("raster canvas {width}x{height} is too large"))
            })?;
        Ok(Self {
            width,
            height,
            data: background.to_array().repeat(pixels),
        })
    }

    /// Canvas sized and cleared the way `config` asks for.
    pub fn for_config(config: &WebConfig) -> Result<Self> {
        config.validate()?;
        Self::new(
            raster_side("width", config.width)?,
            raster_side("height", config.height)?,
            config.background_color,
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes. Length = width * height * 4.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some(Rgba8::from_array([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]))
    }

    /// Number of pixels currently equal to `color`.
    pub fn count_color(&self, color: Rgba8) -> usize {
        let c = color.to_array();
        self.data.chunks_exact(4).filter(|px| *px == c).count()
    }

    pub fn clear(&mut self, color: Rgba8) {
        let c = color.to_array();
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&c);
        }
    }

    /// Write one pixel; coordinates outside the canvas are ignored.
    #[inline]
    pub fn copy_pixel(&mut self, x: i32, y: i32, color: Rgba8) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let i = self.offset(x as u32, y as u32);
        self.data[i..i + 4].copy_from_slice(&color.to_array());
    }

    /// Byte offset of an in-bounds pixel.
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Fill every pixel whose center lies within `radius` of `(cx, cy)`.
    fn solid_disc(&mut self, cx: f64, cy: f64, radius: f64, color: Rgba8) {
        let r2 = radius * radius;
        let y1 = ifloor(cy - radius).max(0);
        let y2 = ifloor(cy + radius).min(self.height as i32 - 1);
        let x1 = ifloor(cx - radius).max(0);
        let x2 = ifloor(cx + radius).min(self.width as i32 - 1);
        for y in y1..=y2 {
            let dy = y as f64 + 0.5 - cy;
            for x in x1..=x2 {
                let dx = x as f64 + 0.5 - cx;
                if dx * dx + dy * dy <= r2 {
                    self.copy_pixel(x, y, color);
                }
            }
        }
    }
}

/// Pixel count covering a configured side, or an error naming the field.
fn raster_side(name: &str, value: f64) -> Result<u32> {
    let side = value.ceil();
    if side > MAX_DIMENSION as f64 {
        return Err(WebError::config(format!(
            "{name} {value} is too large for a raster canvas (max {MAX_DIMENSION})"
        )));
    }
    Ok(side as u32)
}

impl DrawingSurface for RasterSurface {
    fn draw_line(&mut self, p1: Point, p2: Point, color: Rgba8, width: f64) {
        let li = LineBresenhamInterpolator::new(
            subpixel(p1.x),
            subpixel(p1.y),
            subpixel(p2.x),
            subpixel(p2.y),
        );
        if width <= 1.0 {
            li.walk(true, |x, y| self.copy_pixel(x, y, color));
        } else {
            let r = width / 2.0;
            li.walk(true, |x, y| {
                self.solid_disc(x as f64 + 0.5, y as f64 + 0.5, r, color)
            });
        }
    }

    fn fill_disc(&mut self, center: Point, radius: f64, color: Rgba8) {
        self.solid_disc(center.x, center.y, radius, color);
    }
}

// ============================================================================
// Tests
// ============================================================================
