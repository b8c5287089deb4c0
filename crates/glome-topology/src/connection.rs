//! The six directional connection kinds and their reciprocal pairing.
//!
//! Every adjacency in the mesh is one of six directed relations forming
//! three reciprocal pairs:
//! - `RingNext` / `RingPrevious`: around a ring
//! - `VerticalUp` / `VerticalDown`: between rings within a layer, and
//!   between a boundary ring and its pole
//! - `LayerNext` / `LayerPrevious`: between layers
//!
//! Whenever an edge is inserted under a kind, the reverse edge is stored
//! under its reciprocal, so the pairing below is the single source of edge
//! symmetry in the graph.

use crate::CONNECTION_KINDS;

/// A directional adjacency relation between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConnectionKind {
    /// Forward around a ring.
    RingNext,
    /// Backward around a ring.
    RingPrevious,
    /// Toward the north pole: the previous ring in a layer, or the pole
    /// itself for a first-ring vertex.
    VerticalUp,
    /// Toward the south pole: the next ring in a layer, or the pole itself
    /// for a last-ring vertex.
    VerticalDown,
    /// Forward to the matching vertex of the next layer.
    LayerNext,
    /// Backward to the matching vertex of the previous layer.
    LayerPrevious,
}

impl ConnectionKind {
    /// All six kinds in canonical order.
    pub const ALL: [Self; CONNECTION_KINDS] = [
        Self::RingNext,
        Self::RingPrevious,
        Self::VerticalUp,
        Self::VerticalDown,
        Self::LayerNext,
        Self::LayerPrevious,
    ];

    /// One direction per reciprocal pair, in canonical order.
    ///
    /// Iterating these over every vertex visits each stored edge of the
    /// mesh exactly once in its forward orientation.
    pub const FORWARD: [Self; crate::RECIPROCAL_PAIRS] =
        [Self::RingNext, Self::VerticalDown, Self::LayerNext];

    /// The kind under which the reverse edge is stored.
    pub const fn reciprocal(self) -> Self {
        match self {
            Self::RingNext => Self::RingPrevious,
            Self::RingPrevious => Self::RingNext,
            Self::VerticalUp => Self::VerticalDown,
            Self::VerticalDown => Self::VerticalUp,
            Self::LayerNext => Self::LayerPrevious,
            Self::LayerPrevious => Self::LayerNext,
        }
    }

    /// Position of this kind in [`ConnectionKind::ALL`], used to index
    /// per-vertex adjacency storage.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Snake-case name, as rendered in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RingNext => "ring_next",
            Self::RingPrevious => "ring_previous",
            Self::VerticalUp => "vertical_up",
            Self::VerticalDown => "vertical_down",
            Self::LayerNext => "layer_next",
            Self::LayerPrevious => "layer_previous",
        }
    }
}

impl std::fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
