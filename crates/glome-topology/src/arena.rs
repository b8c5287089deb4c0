//! Arena storage for mesh vertices.
//!
//! All vertices live in one flat vector addressed by [`VertexId`]. Rings
//! and layers hold id lists rather than owning references, so shared
//! vertices (the poles) can be referenced from every layer without
//! ownership cycles.

use crate::{ConnectionKind, Point4, Vertex, VertexId};

/// Flat vertex storage with idempotent, auto-reciprocal edge insertion.
#[derive(Debug, Clone, Default)]
pub struct VertexArena {
    vertices: Vec<Vertex>,
}

impl VertexArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a vertex at `position` and return its id.
    ///
    /// Ids are assigned monotonically in allocation order.
    pub fn alloc(&mut self, position: Point4) -> VertexId {
        let id = VertexId::new(self.vertices.len() as u32);
        self.vertices.push(Vertex::new(id, position));
        id
    }

    /// Wire `a -> b` under `kind`, and `b -> a` under its reciprocal.
    ///
    /// Insertion is idempotent: repeating a call leaves both lists
    /// unchanged. The reverse edge is attempted only when the forward edge
    /// was new, and is itself guarded, so no path bypasses the duplicate
    /// check. `a == b` is legal and records a self-loop under both kinds.
    pub fn connect(&mut self, a: VertexId, kind: ConnectionKind, b: VertexId) {
        if self.vertices[a.index()].insert(kind, b) {
            self.vertices[b.index()].insert(kind.reciprocal(), a);
        }
    }

    /// Look up a vertex by id.
    ///
    /// Panics if `id` was not allocated from this arena.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    /// Number of allocated vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True iff nothing has been allocated.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over all vertices in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }
}
