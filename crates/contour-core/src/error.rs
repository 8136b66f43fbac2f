//! Error types for contour tracing.

use thiserror::Error;

use crate::edge::Edge;

/// Errors that can occur while tracing or querying contours.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContourError {
    /// The sample buffer does not match the declared dimensions.
    #[error("grid dimensions {width}x{height} need {expected} samples, got {actual}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    /// The grid has no interior cell to walk.
    #[error("grid {width}x{height} is too small, need at least 2x2 samples")]
    GridTooSmall { width: usize, height: usize },

    /// A contour index beyond the current contour count.
    #[error("index {index} out of range (count {count})")]
    InvalidIndex { index: usize, count: usize },

    /// A caller buffer is shorter than the data to be written.
    #[error("destination buffer holds {available} values, {required} required")]
    BufferTooShort { required: usize, available: usize },

    /// A copy-out asked for more points than the contour has.
    #[error("requested {requested} points from a contour of {available}")]
    LengthExceedsContour { requested: usize, available: usize },

    /// The walk tried to step across the outer boundary of the grid.
    #[error("contour left the grid at cell ({x}, {y}) across the {edge:?} edge")]
    LeftDomain { x: usize, y: usize, edge: Edge },

    /// The walk entered a cell across an edge with no segment leaving it.
    #[error("no segment leaves cell ({x}, {y}) from the {edge:?} edge")]
    DeadEnd { x: usize, y: usize, edge: Edge },

    /// The walk exceeded its step budget without closing.
    #[error("contour starting at cell ({x}, {y}) did not close after {steps} steps")]
    WalkDidNotClose { x: usize, y: usize, steps: usize },

    /// Interpolation produced a non-finite crossing position.
    #[error("degenerate interpolation on cell ({x}, {y}) {edge:?} edge: values {v0} and {v1}")]
    DegenerateInterpolation {
        x: usize,
        y: usize,
        edge: Edge,
        v0: f64,
        v1: f64,
    },

    /// Rejected trace options.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

impl ContourError {
    /// Create an InvalidIndex error.
    pub fn invalid_index(index: usize, count: usize) -> Self {
        Self::InvalidIndex { index, count }
    }

    /// Create a BufferTooShort error.
    pub fn buffer_too_short(required: usize, available: usize) -> Self {
        Self::BufferTooShort {
            required,
            available,
        }
    }

    /// Create an InvalidOptions error.
    pub fn invalid_options(msg: impl Into<String>) -> Self {
        Self::InvalidOptions(msg.into())
    }
}

/// Result type for contour operations.
pub type Result<T> = std::result::Result<T, ContourError>;
