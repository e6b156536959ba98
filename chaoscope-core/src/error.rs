//! Model error types.

use thiserror::Error;

/// Invariant violations raised while constructing chaos-game model values.
///
/// These always indicate a caller bug; nothing here is recoverable inside
/// the engine, so construction fails immediately instead of deferring the
/// problem to iteration time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChaosGameError {
    #[error("julia transform sign must be +1 or -1, got {0}")]
    InvalidSign(i32),

    #[error("chaos game description needs at least one transform")]
    EmptyTransforms,

    #[error("bounding box is degenerate: min and max coincide on the {0} axis")]
    DegenerateBounds(&'static str),

    #[error("canvas dimensions must be non-zero, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },
}
