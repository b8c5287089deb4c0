//! Glome Mesh Topology
//!
//! Procedural construction of the surface topology of a discretized
//! 4-dimensional hypersphere (a glome), with a post-build validation pass
//! that proves the wiring correct.
//!
//! # Mathematical Foundation
//!
//! The glome is decomposed by two nested angular sweeps:
//! - `psi` slices the 4-sphere into layers, each an ordinary 3D sphere
//! - `theta` slices each layer into rings of constant latitude
//! - `phi` places the vertices around each ring
//!
//! Every vertex carries six adjacency lists, one per [`ConnectionKind`],
//! grouped into three reciprocal pairs: around the ring, between rings
//! within a layer, and between layers. Two shared pole vertices absorb the
//! vertical edges of every layer's boundary rings, so each pole accumulates
//! `layer_count * points_per_ring` connections.
//!
//! # Construction Pipeline
//!
//! Building is one-shot. [`Hypersphere::build`] allocates the poles, then
//! generates each layer's rings and wires them: ring closure, pole edges,
//! vertical stitching between adjacent rings, forward stitching between
//! adjacent layers, and the wraparound from the last layer back to the
//! first, which closes the fourth dimension's cycle. [`validate`] then
//! walks the finished graph and reports structural gaps as data.

mod arena;
mod build;
mod config;
mod connection;
mod error;
mod layer;
mod point;
mod ring;
mod validate;
mod vertex;

pub use arena::VertexArena;
pub use build::Hypersphere;
pub use config::MeshConfig;
pub use connection::ConnectionKind;
pub use error::{Error, Result};
pub use layer::Layer;
pub use point::Point4;
pub use ring::Ring;
pub use validate::{validate, ValidationReport};
pub use vertex::{Vertex, VertexId};

/// Number of directional connection kinds per vertex (invariant: always 6)
pub const CONNECTION_KINDS: usize = 6;

/// Reciprocal pairs among the connection kinds
pub const RECIPROCAL_PAIRS: usize = 3;

// Compile-time assertion of the six-kind invariant
const _: () = assert!(CONNECTION_KINDS == 2 * RECIPROCAL_PAIRS);
