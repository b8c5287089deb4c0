//! Error types for glome-topology.

use thiserror::Error;

/// Result type for glome-topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported when a mesh configuration is rejected.
///
/// Construction itself is infallible: once a configuration passes
/// validation, every wiring step is total. Structural anomalies in a
/// finished mesh come back as data from [`validate`](crate::validate),
/// never as errors.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The mesh needs at least one layer.
    #[error("layer count must be positive")]
    ZeroLayerCount,

    /// Theta must subdivide each layer into at least one step.
    #[error("theta count must be positive")]
    ZeroThetaCount,

    /// A ring cannot be empty.
    #[error("points per ring must be positive")]
    ZeroPointsPerRing,

    /// The radius scales vertex placement and must be a positive finite
    /// value.
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
}
