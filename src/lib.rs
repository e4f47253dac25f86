//! # silkweb
//!
//! Procedural spider-web line drawings.
//!
//! A web is built in one pass from a handful of random draws:
//!
//! - Jittered diametric spokes through the canvas center
//! - Concentric rings at log-spaced, jittered radii
//! - Between each pair of adjacent spokes, two connectors per ring, drawn as
//!   quadratic Bezier curves bowed slightly away from the hub
//! - A randomly missed connection that leaves the rest of a ring unfinished
//!
//! ## Architecture
//!
//! 1. **Geometry**: `Segment`, `CenterTransform`, spokes, ring radii and
//!    connectors, all in plain `f64` coordinates
//! 2. **Curves**: `CurveApproximator` bows each connector into a `WebCurve`,
//!    a `VertexSource` of uniformly sampled points
//! 3. **Surface**: strokes are handed to a `DrawingSurface`; the crate ships
//!    a call recorder and an RGBA8 raster
//! 4. **Pipeline**: `RenderPipeline` sequences one pass and owns its random
//!    source, so a fixed seed reproduces the same surface calls
//!
//! ```no_run
//! use silkweb::{render_layers, RasterSurface, WebConfig};
//!
//! let config = WebConfig::default().with_seed(7);
//! let mut canvas = RasterSurface::for_config(&config)?;
//! render_layers(&config, &mut canvas, 100)?;
//! # Ok::<(), silkweb::WebError>(())
//! ```

// Foundation types & math
pub mod basics;
pub mod color;
pub mod error;
pub mod math;

// Configuration & randomness
pub mod config;
pub mod random;

// Geometry
pub mod connector;
pub mod rings;
pub mod segment;
pub mod spokes;
pub mod trans_center;
pub mod web_curve;

// Rasterization & surfaces
pub mod dda_line;
pub mod surface;

// Generation
pub mod pipeline;

pub use basics::{Point, VertexSource};
pub use color::Rgba8;
pub use config::WebConfig;
pub use error::{Result, WebError};
pub use pipeline::{render_layers, CancelHandle, PassSummary, PipelineState, RenderPipeline};
pub use random::RandomSource;
pub use segment::Segment;
pub use surface::{DrawingSurface, RasterSurface, RecordingSurface, SurfaceCall};
