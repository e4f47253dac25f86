//! Web generation pipeline.
//!
//! One `RenderPipeline` runs exactly one pass:
//!
//! ```text
//!   Uninitialized ──build spokes──▶ SpokesBuilt ──draw rings──▶ RingsDrawn ──erase hub──▶ Done
//!         │                              │                          │
//!         └──────────── any error ───────┴──────────────────────────┴──▶ Failed
//! ```
//!
//! Strokes already handed to the surface stay there when a pass fails or is
//! cancelled. Layering several passes on one surface is done by running
//! several pipelines against it (see [`render_layers`]).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, trace};

use crate::basics::{is_move_to, is_stop, Point, VertexSource};
use crate::color::Rgba8;
use crate::config::WebConfig;
use crate::connector::ConnectorGeometry;
use crate::error::{Result, WebError};
use crate::random::RandomSource;
use crate::rings::RingRadiusSampler;
use crate::spokes::{adjacent_pairs, Spoke, SpokeGenerator};
use crate::surface::DrawingSurface;
use crate::trans_center::CenterTransform;
use crate::web_curve::CurveApproximator;

// ============================================================================
// State and bookkeeping
// ============================================================================

/// Where a pipeline is in its single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Uninitialized,
    SpokesBuilt,
    RingsDrawn,
    Done,
    Failed,
}

/// Counters collected over one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Diametric spoke segments drawn.
    pub spokes: usize,
    /// Rings started, including truncated ones.
    pub rings_attempted: usize,
    /// Rings abandoned early by a missed connection.
    pub rings_truncated: usize,
    pub connectors_drawn: usize,
    /// Connectors skipped because both ends coincide.
    pub connectors_degenerate: usize,
    /// Every `draw_line` issued, spokes included.
    pub line_calls: usize,
    /// The pass stopped between rings on request.
    pub cancelled: bool,
}

/// Cooperative stop flag shared with another thread.
///
/// The pipeline looks at it before starting each ring, so a request takes
/// effect once the current ring is finished.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

// ============================================================================
// Stroking
// ============================================================================

/// Feed a vertex source to a surface as straight lines.
///
/// A move_to only repositions; each following vertex draws from the
/// previous one. Returns the number of lines drawn.
pub fn stroke_path<S, V>(surface: &mut S, path: &mut V, color: Rgba8, width: f64) -> usize
where
    S: DrawingSurface + ?Sized,
    V: VertexSource + ?Sized,
{
    let (mut x, mut y) = (0.0, 0.0);
    let mut prev: Option<Point> = None;
    let mut drawn = 0;
    path.rewind(0);
    loop {
        let cmd = path.vertex(&mut x, &mut y);
        if is_stop(cmd) {
            break;
        }
        let p = Point::new(x, y);
        if !is_move_to(cmd) {
            if let Some(from) = prev {
                surface.draw_line(from, p, color, width);
                drawn += 1;
            }
        }
        prev = Some(p);
    }
    drawn
}

// ============================================================================
// RenderPipeline
// ============================================================================

/// Single-use web generator bound to one drawing surface.
pub struct RenderPipeline<S: DrawingSurface> {
    config: WebConfig,
    transform: CenterTransform,
    rng: RandomSource,
    surface: S,
    spokes: Vec<Spoke>,
    state: PipelineState,
    cancel: CancelHandle,
}

impl<S: DrawingSurface> RenderPipeline<S> {
    /// Validate `config` and bind the pipeline to `surface`. Randomness is
    /// seeded from `config.seed`, or from entropy when it is unset.
    pub fn new(config: WebConfig, surface: S) -> Result<Self> {
        let rng = RandomSource::from_config(&config);
        Self::with_random(config, surface, rng)
    }

    /// Like [`RenderPipeline::new`] with an explicitly injected generator.
    pub fn with_random(config: WebConfig, surface: S, rng: RandomSource) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            transform: CenterTransform::new(config.width, config.height),
            config,
            rng,
            surface,
            spokes: Vec::new(),
            state: PipelineState::Uninitialized,
            cancel: CancelHandle::new(),
        })
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn config(&self) -> &WebConfig {
        &self.config
    }

    /// Spokes of this pass; empty until the spokes are built.
    pub fn spokes(&self) -> &[Spoke] {
        &self.spokes
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Run the pass: spokes, every ring, then the hub erase.
    ///
    /// A second call fails with [`WebError::PipelineSpent`].
    pub fn generate(&mut self) -> Result<PassSummary> {
        if self.state != PipelineState::Uninitialized {
            return Err(WebError::PipelineSpent);
        }
        let mut summary = PassSummary::default();
        match self.run(&mut summary) {
            Ok(()) => {
                debug!(
                    "web pass done: {} spokes, {}/{} rings ({} truncated), {} connectors, {} lines",
                    summary.spokes,
                    summary.rings_attempted,
                    self.config.num_rings,
                    summary.rings_truncated,
                    summary.connectors_drawn,
                    summary.line_calls
                );
                Ok(summary)
            }
            Err(e) => {
                debug!("web pass failed in state {:?}: {}", self.state, e);
                self.state = PipelineState::Failed;
                Err(e)
            }
        }
    }

    fn run(&mut self, summary: &mut PassSummary) -> Result<()> {
        self.build_spokes(summary)?;
        self.state = PipelineState::SpokesBuilt;

        self.draw_rings(summary)?;
        self.state = PipelineState::RingsDrawn;

        self.erase_center();
        self.state = PipelineState::Done;
        Ok(())
    }

    fn build_spokes(&mut self, summary: &mut PassSummary) -> Result<()> {
        let generator = SpokeGenerator::new(
            self.config.num_spokes,
            self.config.height,
            self.config.angle_jitter,
        );
        self.spokes = generator.generate(&self.transform, &mut self.rng)?;
        for spoke in &self.spokes {
            let (p1, p2) = spoke.segment.points();
            self.surface
                .draw_line(p1, p2, self.config.line_color, self.config.stroke_width);
        }
        summary.spokes = self.spokes.len();
        summary.line_calls += self.spokes.len();
        debug!(
            "built {} spokes, half-length {}",
            self.spokes.len(),
            generator.half_length()
        );
        Ok(())
    }

    fn draw_rings(&mut self, summary: &mut PassSummary) -> Result<()> {
        let radii = RingRadiusSampler::new(
            self.config.num_rings,
            self.config.height,
            self.config.growth_rate,
            self.config.radius_jitter,
        )
        .sample(&mut self.rng);
        let geometry = ConnectorGeometry::new(self.transform);
        let curves = CurveApproximator::from_config(&self.config);

        for (ring, radius) in radii.into_iter().enumerate() {
            if self.cancel.is_cancelled() {
                debug!("cancelled before ring {}", ring);
                summary.cancelled = true;
                break;
            }
            summary.rings_attempted += 1;
            if self.draw_ring(&geometry, &curves, radius, summary)? {
                trace!("ring {} at radius {:.2} missed a connection", ring, radius);
                summary.rings_truncated += 1;
            }
        }
        Ok(())
    }

    /// Draw one ring. Returns `true` when a missed connection cut it short.
    fn draw_ring(
        &mut self,
        geometry: &ConnectorGeometry,
        curves: &CurveApproximator,
        radius: f64,
        summary: &mut PassSummary,
    ) -> Result<bool> {
        let color = self.config.line_color;
        let width = self.config.stroke_width;
        for (a, b) in adjacent_pairs(&self.spokes) {
            if self.rng.chance(self.config.miss_probability) {
                return Ok(true);
            }
            let pair = geometry.connect(a, b, radius)?;
            for connector in pair.chosen {
                if connector.is_degenerate() {
                    trace!(
                        "spokes {} and {} meet at one point at radius {:.2}",
                        a.index,
                        b.index,
                        radius
                    );
                    summary.connectors_degenerate += 1;
                    continue;
                }
                let segment = connector.to_segment()?;
                let mut curve = curves.approximate(&segment, &mut self.rng);
                summary.line_calls += stroke_path(&mut self.surface, &mut curve, color, width);
                summary.connectors_drawn += 1;
            }
        }
        Ok(false)
    }

    fn erase_center(&mut self) {
        let radius = self.config.center_erase_radius;
        if radius > 0.0 {
            self.surface
                .fill_disc(self.transform.center(), radius, self.config.background_color);
        }
    }
}

// ============================================================================
// Layering
// ============================================================================

/// Draw `passes` independent webs on top of each other.
///
/// Each pass gets its own generator forked from one base generator seeded
/// by `config.seed`, so a seeded config reproduces the whole stack.
pub fn render_layers<S: DrawingSurface>(
    config: &WebConfig,
    surface: &mut S,
    passes: usize,
) -> Result<Vec<PassSummary>> {
    config.validate()?;
    let mut base = RandomSource::from_config(config);
    let mut summaries = Vec::with_capacity(passes);
    for layer in 0..passes {
        let rng = base.fork();
        let mut pipeline = RenderPipeline::with_random(config.clone(), &mut *surface, rng)?;
        summaries.push(pipeline.generate()?);
        trace!("layer {} of {} drawn", layer + 1, passes);
    }
    Ok(summaries)
}

// ============================================================================
// Tests
// ============================================================================
