//! Mesh generation parameters.

use crate::error::{Error, Result};

/// Configuration for hypersphere mesh generation.
///
/// The reference mesh uses 6 layers of 7 rings with 8 points each on a
/// unit sphere; all four values are exposed so callers can scale the mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshConfig {
    /// Number of layers (psi subdivisions).
    pub layer_count: usize,
    /// Theta subdivisions; each layer carries `theta_count + 1` rings.
    pub theta_count: usize,
    /// Vertices per ring (phi subdivisions).
    pub points_per_ring: usize,
    /// Sphere radius. Scales vertex placement only, never connectivity.
    pub radius: f64,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            layer_count: 6,
            theta_count: 6,
            points_per_ring: 8,
            radius: 1.0,
        }
    }
}

impl MeshConfig {
    /// Reject malformed parameters before any allocation happens.
    pub fn validate(&self) -> Result<()> {
        if self.layer_count == 0 {
            return Err(Error::ZeroLayerCount);
        }
        if self.theta_count == 0 {
            return Err(Error::ZeroThetaCount);
        }
        if self.points_per_ring == 0 {
            return Err(Error::ZeroPointsPerRing);
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::InvalidRadius(self.radius));
        }
        Ok(())
    }

    /// Rings per layer: one per theta step, inclusive of both boundaries.
    pub const fn rings_per_layer(&self) -> usize {
        self.theta_count + 1
    }

    /// Total vertices the mesh will allocate, poles included.
    pub const fn vertex_count(&self) -> usize {
        2 + self.layer_count * self.rings_per_layer() * self.points_per_ring
    }

    /// Vertical edges each pole accumulates: one per boundary-ring vertex
    /// per layer.
    pub const fn expected_pole_fanout(&self) -> usize {
        self.layer_count * self.points_per_ring
    }
}
