//! Error types for mesh generation
//!
//! Only input validation can fail. Once a [`Layout`](crate::layout::Layout)
//! has been planned every index is derived from it, so an out-of-bounds
//! write during generation is a bug and panics instead of surfacing here.

use thiserror::Error;

use crate::layout::Axis;

/// Errors rejected before any buffer is allocated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// An axis resolution is below 1
    #[error("Invalid resolution: {axis} size must be at least 1, got {value}")]
    InvalidResolution { axis: Axis, value: u32 },

    /// The rounding radius exceeds half of the smallest axis
    #[error("Degenerate roundness: {roundness} exceeds the maximum of {max} for this resolution")]
    DegenerateRoundness { roundness: u32, max: u32 },

    /// The vertex count does not fit a 32-bit index buffer
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: u64, max: u64 },
}
