//! Radial spokes through the canvas center.
//!
//! Each iteration of the generator produces one diametric segment that
//! covers two opposite spoke directions, so `num_spokes / 2` segments are
//! produced in angular order. Angles are evenly spaced with a small
//! symmetric jitter.

use crate::basics::{Point, PI};
use crate::error::Result;
use crate::random::RandomSource;
use crate::segment::Segment;
use crate::trans_center::CenterTransform;

/// Spoke half-length as a fraction of the canvas half-height.
pub const SPOKE_REACH: f64 = 1.5;

/// A diametric spoke segment in canvas coordinates, tagged with its
/// position in angular order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spoke {
    pub index: usize,
    pub segment: Segment,
}

/// Builds the spoke list for one web.
#[derive(Debug, Clone, Copy)]
pub struct SpokeGenerator {
    num_spokes: usize,
    half_length: f64,
    angle_jitter: f64,
}

impl SpokeGenerator {
    /// `num_spokes` is the number of spoke directions (even, validated by
    /// the config); `angle_jitter` is the width of the jitter interval.
    pub fn new(num_spokes: usize, height: f64, angle_jitter: f64) -> Self {
        Self {
            num_spokes,
            half_length: (SPOKE_REACH * height / 2.0).floor(),
            angle_jitter,
        }
    }

    /// Distance from the center to either end of every spoke.
    pub fn half_length(&self) -> f64 {
        self.half_length
    }

    /// Number of diametric segments this generator produces.
    pub fn segment_count(&self) -> usize {
        self.num_spokes / 2
    }

    /// Nominal angle of segment `i` before jitter.
    pub fn base_angle(&self, i: usize) -> f64 {
        2.0 * PI * (i as f64 / self.num_spokes as f64)
    }

    /// Build every spoke, drawing one jitter value per segment from `rng`.
    ///
    /// Fails with `InvalidGeometry` if a jittered angle lands exactly on
    /// the vertical.
    pub fn generate(
        &self,
        transform: &CenterTransform,
        rng: &mut RandomSource,
    ) -> Result<Vec<Spoke>> {
        let start = Point::new(0.0, self.half_length);
        let end = Point::new(0.0, -self.half_length);

        let mut spokes = Vec::with_capacity(self.segment_count());
        for index in 0..self.segment_count() {
            let theta = self.base_angle(index) + rng.symmetric(self.angle_jitter);
            let segment = Segment::new(
                transform.to_canvas(start.rotate(theta)),
                transform.to_canvas(end.rotate(theta)),
            )?;
            spokes.push(Spoke { index, segment });
        }
        Ok(spokes)
    }
}

/// Cyclically adjacent spoke pairs: `(i, (i + 1) mod n)`.
///
/// A single spoke is paired with itself.
pub fn adjacent_pairs(spokes: &[Spoke]) -> impl Iterator<Item = (&Spoke, &Spoke)> + '_ {
    let n = spokes.len();
    (0..n).map(move |i| (&spokes[i], &spokes[(i + 1) % n]))
}

// ============================================================================
// Tests
// ============================================================================
