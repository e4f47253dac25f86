//! Injectable pseudo-random source.
//!
//! Every stochastic decision in a generation pass (spoke angle jitter, ring
//! radius jitter, missed connections, curve bow) draws from one
//! `RandomSource`, in a fixed order. Same seed plus same call order gives
//! the same web.
//!
//! Seeded sources use `StdRng`; any other `RngCore` can be injected with
//! [`RandomSource::from_rng`], e.g. a `rand::rngs::mock::StepRng` to pin
//! every draw to a known value.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::config::WebConfig;

/// Sequential generator owned by one generation pass.
pub struct RandomSource {
    rng: Box<dyn RngCore + Send>,
}

impl fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomSource").finish_non_exhaustive()
    }
}

impl RandomSource {
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Non-reproducible generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Wrap an arbitrary generator.
    pub fn from_rng<R: RngCore + Send + 'static>(rng: R) -> Self {
        Self { rng: Box::new(rng) }
    }

    /// Seeded from `config.seed` when present, otherwise from entropy.
    pub fn from_config(config: &WebConfig) -> Self {
        match config.seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Uniform draw in `[-width / 2, width / 2)`.
    #[inline]
    pub fn symmetric(&mut self, width: f64) -> f64 {
        (self.uniform() - 0.5) * width
    }

    /// Bernoulli trial: true with probability `p`.
    ///
    /// Always consumes exactly one draw, even for `p` of 0 or 1.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.uniform() < p
    }

    /// Derive an independent child generator from this stream.
    ///
    /// Consumes one draw from the parent, so forking is itself part of the
    /// deterministic call order.
    pub fn fork(&mut self) -> RandomSource {
        RandomSource::from_seed(self.rng.gen::<u64>())
    }
}

// ============================================================================
// Tests
// ============================================================================
