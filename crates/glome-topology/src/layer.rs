//! Layers: the ring stack of one 3D sphere slice, plus its pole and
//! inter-layer wiring.

use crate::{ConnectionKind, Ring, VertexArena, VertexId};

/// An ordered sequence of rings at one psi position.
///
/// Construction only aggregates. Wiring happens in explicit phases driven
/// by the builder, so construction order is visible at the call site.
#[derive(Debug, Clone)]
pub struct Layer {
    index: usize,
    rings: Vec<Ring>,
}

impl Layer {
    /// Create a layer over an ordered, non-empty ring sequence.
    pub fn new(index: usize, rings: Vec<Ring>) -> Self {
        assert!(!rings.is_empty(), "a layer needs at least one ring");
        Self { index, rings }
    }

    /// Position of this layer within the mesh.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The layer's rings in theta order.
    #[inline]
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// The boundary ring facing the north pole.
    pub fn first_ring(&self) -> &Ring {
        &self.rings[0]
    }

    /// The boundary ring facing the south pole.
    pub fn last_ring(&self) -> &Ring {
        &self.rings[self.rings.len() - 1]
    }

    /// Wire both boundary rings to the shared poles.
    ///
    /// Every first-ring vertex gains the north pole under `VerticalUp` and
    /// the pole gains the vertex under `VerticalDown`; the last ring is
    /// wired to the south pole the same way. Each pair is wired from both
    /// ends; the second insert is a no-op once the reciprocal edge exists.
    pub fn wire_poles(&self, arena: &mut VertexArena, north: VertexId, south: VertexId) {
        for &v in self.first_ring().vertices() {
            arena.connect(north, ConnectionKind::VerticalDown, v);
            arena.connect(v, ConnectionKind::VerticalUp, north);
        }
        for &v in self.last_ring().vertices() {
            arena.connect(south, ConnectionKind::VerticalUp, v);
            arena.connect(v, ConnectionKind::VerticalDown, south);
        }
    }

    /// Wire each vertex to the position-matched vertex of `next` under
    /// `LayerNext`.
    ///
    /// Both layers must have the same ring count and matching ring lengths.
    pub fn connect_to_next_layer(&self, arena: &mut VertexArena, next: &Layer) {
        debug_assert_eq!(self.rings.len(), next.rings.len());
        for (ring, next_ring) in self.rings.iter().zip(next.rings.iter()) {
            debug_assert_eq!(ring.len(), next_ring.len());
            for (&v, &w) in ring.vertices().iter().zip(next_ring.vertices()) {
                arena.connect(v, ConnectionKind::LayerNext, w);
            }
        }
    }

    /// Boundary vertices missing their pole back-reference: first-ring
    /// vertices without `north` under `VerticalUp`, then last-ring vertices
    /// without `south` under `VerticalDown`. Pure query.
    pub fn validate_pole_connections(
        &self,
        arena: &VertexArena,
        north: VertexId,
        south: VertexId,
    ) -> Vec<VertexId> {
        let mut missing = Vec::new();
        for &v in self.first_ring().vertices() {
            if !arena.vertex(v).neighbors(ConnectionKind::VerticalUp).contains(&north) {
                missing.push(v);
            }
        }
        for &v in self.last_ring().vertices() {
            if !arena.vertex(v).neighbors(ConnectionKind::VerticalDown).contains(&south) {
                missing.push(v);
            }
        }
        missing
    }
}
