//! Error types for the transform core

use thiserror::Error;

/// Errors reported by matrix builders, the composer and the applier
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// Camera basis cannot be built (up hint parallel to the view direction,
    /// or camera sitting on its target)
    #[error("Degenerate view: {0}")]
    DegenerateView(String),

    /// Homogeneous vertex with w == 0 cannot be mapped back to 3D
    #[error("Cannot dehomogenize vertex with w = 0: ({x}, {y}, {z}, 0)")]
    ZeroW { x: f64, y: f64, z: f64 },

    /// Unrecognized axis label
    #[error("Invalid axis: {0:?} (expected x, y or z)")]
    InvalidAxis(String),

    /// Shear or taper whose source axis is also one of its targets
    #[error("Axis {0} cannot be both source and target")]
    AxisConflict(char),

    /// Demo number outside 1..=10
    #[error("Invalid demo: {0} (expected 1-10)")]
    InvalidDemo(usize),

    /// Face with too few indices, or an index past the vertex list
    #[error("Invalid face: {0}")]
    InvalidFace(String),

    /// Transform chain text could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for transform operations
pub type Result<T> = std::result::Result<T, TransformError>;
