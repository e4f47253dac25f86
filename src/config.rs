//! Construction-time parameters for one web.
//!
//! `WebConfig` is plain data: every field is public, `Default` reproduces the
//! classic 2400×1714 night-sky web, and the whole struct round-trips through
//! serde so hosts can keep it in whatever format they like.

use serde::{Deserialize, Serialize};

use crate::color::Rgba8;
use crate::error::{Result, WebError};

/// Parameters consumed by the render pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub width: f64,
    pub height: f64,
    /// Number of spoke directions. Must be even and at least 2; each
    /// diametric segment accounts for two of them.
    pub num_spokes: usize,
    pub num_rings: usize,
    /// Controls how quickly ring spacing widens toward the edge.
    pub growth_rate: f64,
    /// Width (radians) of the symmetric interval spoke angles are jittered in.
    pub angle_jitter: f64,
    /// Upper bound of the log-space jitter added to each ring.
    pub radius_jitter: f64,
    /// Fraction of a connector's length used as the bow of its curve.
    pub curve_bow: f64,
    /// Divides the bow; larger values give flatter curves.
    pub curve_scale: f64,
    /// Scales the uniform draw added to the bow floor of every curve.
    pub curve_jitter: f64,
    /// Number of sampled points per connector curve.
    pub curve_steps: usize,
    /// Chance, checked before every spoke pair, that the rest of the ring is
    /// abandoned.
    pub miss_probability: f64,
    pub line_color: Rgba8,
    pub background_color: Rgba8,
    pub stroke_width: f64,
    /// Radius of the disc painted over the hub; 0 disables it.
    pub center_erase_radius: f64,
    pub seed: Option<u64>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            width: 2400.0,
            height: 1714.0,
            num_spokes: 8,
            num_rings: 50,
            growth_rate: 1.5,
            angle_jitter: 0.05,
            radius_jitter: 0.05,
            curve_bow: 0.3,
            curve_scale: 160.0,
            curve_jitter: 1.0,
            curve_steps: 20,
            miss_probability: 0.2,
            line_color: Rgba8::SILK,
            background_color: Rgba8::NIGHT,
            stroke_width: 1.0,
            center_erase_radius: 16.0,
            seed: None,
        }
    }
}

impl WebConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_spokes(mut self, num_spokes: usize) -> Self {
        self.num_spokes = num_spokes;
        self
    }

    pub fn with_rings(mut self, num_rings: usize) -> Self {
        self.num_rings = num_rings;
        self
    }

    pub fn with_miss_probability(mut self, p: f64) -> Self {
        self.miss_probability = p;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every field, naming the first one that is out of range.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(WebError::config(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(WebError::config(format!(
                "height must be positive, got {}",
                self.height
            )));
        }
        if self.num_spokes < 2 || self.num_spokes % 2 != 0 {
            return Err(WebError::config(format!(
                "num_spokes must be an even number >= 2, got {}",
                self.num_spokes
            )));
        }
        if self.num_rings == 0 {
            return Err(WebError::config("num_rings must be positive"));
        }
        if !(self.growth_rate.is_finite() && self.growth_rate > 0.0) {
            return Err(WebError::config(format!(
                "growth_rate must be positive, got {}",
                self.growth_rate
            )));
        }
        for (name, v) in [
            ("angle_jitter", self.angle_jitter),
            ("radius_jitter", self.radius_jitter),
            ("curve_bow", self.curve_bow),
            ("curve_jitter", self.curve_jitter),
            ("center_erase_radius", self.center_erase_radius),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(WebError::config(format!(
                    "{name} must be non-negative, got {v}"
                )));
            }
        }
        if !(self.curve_scale.is_finite() && self.curve_scale > 0.0) {
            return Err(WebError::config(format!(
                "curve_scale must be positive, got {}",
                self.curve_scale
            )));
        }
        if self.curve_steps < 2 {
            return Err(WebError::config(format!(
                "curve_steps must be at least 2, got {}",
                self.curve_steps
            )));
        }
        if !(0.0..=1.0).contains(&self.miss_probability) {
            return Err(WebError::config(format!(
                "miss_probability must lie in [0, 1], got {}",
                self.miss_probability
            )));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(WebError::config(format!(
                "stroke_width must be positive, got {}",
                self.stroke_width
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
