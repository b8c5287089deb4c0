//! Post-build validation: walks the finished graph and reports anomalies
//! as data.
//!
//! Generation always succeeds mechanically; the question a build leaves
//! open is whether the wiring rules produced the intended graph. The
//! validator never mutates and never aborts. Structural gaps come back in
//! the report, not as errors.

use std::collections::BTreeMap;
use std::fmt;

use crate::{ConnectionKind, Hypersphere, VertexId};

/// Structured result of a validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationReport {
    /// Corner-ring vertices whose six adjacency lists are not all
    /// non-empty, with the kinds that are missing. Checked over the first
    /// ring of the first layer and the last ring of the last layer, the
    /// vertices most exposed to construction-order mistakes.
    pub missing_connections: BTreeMap<VertexId, Vec<ConnectionKind>>,
    /// Layers whose boundary rings are missing the expected pole
    /// back-reference, keyed by layer index. Only layers with at least one
    /// gap appear.
    pub missing_pole_connections: BTreeMap<usize, Vec<VertexId>>,
    /// Fan-out of the north pole's `VerticalDown` list.
    pub north_pole_connections: usize,
    /// Fan-out of the south pole's `VerticalUp` list.
    pub south_pole_connections: usize,
}

impl ValidationReport {
    /// True iff no vertex or layer was reported under-connected.
    ///
    /// Pole fan-out counts are informational; callers judge them against
    /// [`MeshConfig::expected_pole_fanout`](crate::MeshConfig::expected_pole_fanout).
    pub fn is_clean(&self) -> bool {
        self.missing_connections.is_empty() && self.missing_pole_connections.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation:")?;
        if self.missing_connections.is_empty() {
            writeln!(f, "  Missing connections: none")?;
        } else {
            writeln!(f, "  Missing connections:")?;
            for (vertex, kinds) in &self.missing_connections {
                let names: Vec<&str> = kinds.iter().map(|kind| kind.name()).collect();
                writeln!(f, "    vertex {}: {}", vertex, names.join(", "))?;
            }
        }
        if self.missing_pole_connections.is_empty() {
            writeln!(f, "  Missing pole connections: none")?;
        } else {
            writeln!(f, "  Missing pole connections:")?;
            for (layer, vertices) in &self.missing_pole_connections {
                let ids: Vec<String> = vertices.iter().map(|v| v.to_string()).collect();
                writeln!(f, "    layer {}: {}", layer, ids.join(", "))?;
            }
        }
        writeln!(f, "  North pole fan-out: {}", self.north_pole_connections)?;
        write!(f, "  South pole fan-out: {}", self.south_pole_connections)
    }
}

/// Inspect a finished mesh and report its structural health.
///
/// Pure and read-only; runs once after construction.
pub fn validate(sphere: &Hypersphere) -> ValidationReport {
    let arena = sphere.arena();
    let layers = sphere.layers();

    // Corner rings first: the first ring of the first layer and the last
    // ring of the last layer.
    let mut missing_connections = BTreeMap::new();
    let first = layers[0].first_ring();
    let last = layers[layers.len() - 1].last_ring();
    for &v in first.vertices().iter().chain(last.vertices()) {
        let vertex = arena.vertex(v);
        if !vertex.is_fully_connected() {
            missing_connections.insert(v, vertex.missing_kinds());
        }
    }

    let mut missing_pole_connections = BTreeMap::new();
    for layer in layers {
        let missing =
            layer.validate_pole_connections(arena, sphere.north_pole(), sphere.south_pole());
        if !missing.is_empty() {
            missing_pole_connections.insert(layer.index(), missing);
        }
    }

    ValidationReport {
        missing_connections,
        missing_pole_connections,
        north_pole_connections: arena
            .vertex(sphere.north_pole())
            .neighbors(ConnectionKind::VerticalDown)
            .len(),
        south_pole_connections: arena
            .vertex(sphere.south_pole())
            .neighbors(ConnectionKind::VerticalUp)
            .len(),
    }
}
