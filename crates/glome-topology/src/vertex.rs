//! Mesh vertices and their six adjacency lists.

use crate::{ConnectionKind, Point4, CONNECTION_KINDS};

/// A stable vertex address within the arena.
///
/// Ids are assigned monotonically at allocation: the poles reserve 0 and 1,
/// mesh vertices start at 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexId(pub u32);

impl VertexId {
    /// Reserved id of the north pole.
    pub const NORTH_POLE: Self = Self(0);

    /// Reserved id of the south pole.
    pub const SOUTH_POLE: Self = Self(1);

    /// Create from a raw id.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for VertexId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<VertexId> for u32 {
    fn from(value: VertexId) -> Self {
        value.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A graph node with one neighbor list per connection kind.
///
/// Neighbor lists hold arena ids, preserve insertion order, and never
/// contain duplicates; insertion is idempotent.
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    position: Point4,
    connections: [Vec<VertexId>; CONNECTION_KINDS],
}

impl Vertex {
    pub(crate) fn new(id: VertexId, position: Point4) -> Self {
        Self {
            id,
            position,
            connections: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// This vertex's arena id.
    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Bookkeeping position on the sphere surface.
    #[inline]
    pub fn position(&self) -> Point4 {
        self.position
    }

    /// Neighbors under one connection kind, in insertion order.
    #[inline]
    pub fn neighbors(&self, kind: ConnectionKind) -> &[VertexId] {
        &self.connections[kind.index()]
    }

    /// True iff all six adjacency lists are non-empty.
    pub fn is_fully_connected(&self) -> bool {
        self.connections.iter().all(|list| !list.is_empty())
    }

    /// Kinds whose adjacency list is empty, in canonical order.
    pub fn missing_kinds(&self) -> Vec<ConnectionKind> {
        ConnectionKind::ALL
            .into_iter()
            .filter(|kind| self.neighbors(*kind).is_empty())
            .collect()
    }

    /// Insert `other` under `kind` if absent. Returns whether the list
    /// changed.
    pub(crate) fn insert(&mut self, kind: ConnectionKind, other: VertexId) -> bool {
        let list = &mut self.connections[kind.index()];
        if list.contains(&other) {
            false
        } else {
            list.push(other);
            true
        }
    }
}
