//! Ring radii sampled in log space.
//!
//! Radii come from linearly spaced log values pushed back through an
//! exponential, so rings crowd near the hub and spread out toward the edge:
//!
//! ```text
//!   max_log = ln(height * growth_rate * 10)
//!   L_i     = lerp(0, max_log, i / (R - 1)) + jitter_i
//!   r_i     = exp(L_i / growth_rate) * max_log + 10
//! ```
//!
//! Jitter is drawn independently per ring from `[0, radius_jitter)`, so the
//! sequence is only guaranteed to be non-decreasing when the jitter is 0.

use crate::math::linspace;
use crate::random::RandomSource;

/// Constant added to every radius so the innermost ring clears the hub.
pub const RING_BASE_OFFSET: f64 = 10.0;

/// Samples the radius of every ring for one web.
#[derive(Debug, Clone, Copy)]
pub struct RingRadiusSampler {
    num_rings: usize,
    growth_rate: f64,
    radius_jitter: f64,
    max_log: f64,
}

impl RingRadiusSampler {
    pub fn new(num_rings: usize, height: f64, growth_rate: f64, radius_jitter: f64) -> Self {
        Self {
            num_rings,
            growth_rate,
            radius_jitter,
            max_log: (height * growth_rate * 10.0).ln(),
        }
    }

    /// Upper end of the log-space range.
    pub fn max_log(&self) -> f64 {
        self.max_log
    }

    /// Radius for a single log value.
    #[inline]
    pub fn radius_at(&self, log_value: f64) -> f64 {
        (log_value / self.growth_rate).exp() * self.max_log + RING_BASE_OFFSET
    }

    /// Sample every ring radius in ring order.
    ///
    /// Draws exactly `num_rings` values from `rng`, all before returning.
    pub fn sample(&self, rng: &mut RandomSource) -> Vec<f64> {
        let min_log = 1.0_f64.ln();
        let jitter: Vec<f64> = (0..self.num_rings)
            .map(|_| self.radius_jitter * rng.uniform())
            .collect();
        linspace(min_log, self.max_log, self.num_rings)
            .into_iter()
            .zip(jitter)
            .map(|(l, j)| self.radius_at(l + j))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
