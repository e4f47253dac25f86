//! Crate-wide error type.

/// Result type for silkweb operations.
pub type Result<T> = std::result::Result<T, WebError>;

/// Errors raised while configuring or generating a web.
///
/// A ring truncated by a missed connection is normal control flow and never
/// shows up here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WebError {
    /// A segment whose endpoints share the same x coordinate has no slope.
    #[error("no slope for a vertical segment at x = {x}")]
    InvalidGeometry { x: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// `generate()` was called on a pipeline that has already run.
    #[error("pipeline has already generated its pass")]
    PipelineSpent,
}

impl WebError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        WebError::InvalidConfiguration(msg.into())
    }
}

// ============================================================================
// Tests
// ============================================================================
