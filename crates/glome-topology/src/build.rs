//! Hypersphere construction: the one-shot generate pipeline.
//!
//! Construction is strictly sequential. The inter-layer and wraparound
//! wiring steps require all vertices, rings, and layers from earlier steps
//! to exist with stable ids, so the phases run in a fixed order and no
//! phase revisits a finished one.

use std::f64::consts::PI;

use crate::{
    config::MeshConfig, error::Result, ConnectionKind, Layer, Point4, Ring, VertexArena, VertexId,
};

/// A fully wired hypersphere surface mesh.
///
/// Immutable once built: every wiring phase runs inside
/// [`Hypersphere::build`] and nothing mutates the graph afterwards.
#[derive(Debug, Clone)]
pub struct Hypersphere {
    config: MeshConfig,
    arena: VertexArena,
    north: VertexId,
    south: VertexId,
    layers: Vec<Layer>,
}

impl Hypersphere {
    /// Generate and wire the full mesh for `config`.
    ///
    /// Fails only on a malformed configuration, before any allocation.
    /// Every wiring step afterwards is total.
    pub fn build(config: MeshConfig) -> Result<Self> {
        config.validate()?;

        let mut arena = VertexArena::new();
        let north = arena.alloc(Point4::new(0.0, 0.0, 0.0, config.radius));
        let south = arena.alloc(Point4::new(0.0, 0.0, 0.0, -config.radius));
        debug_assert_eq!(north, VertexId::NORTH_POLE);
        debug_assert_eq!(south, VertexId::SOUTH_POLE);

        // Layer generation: each layer is a 3D sphere slice at fixed psi,
        // its rings close over phi and its boundary rings wire to the
        // poles.
        let mut layers = Vec::with_capacity(config.layer_count);
        for i in 0..config.layer_count {
            let psi = PI * (i + 1) as f64 / (config.layer_count + 1) as f64;
            let mut rings = Vec::with_capacity(config.rings_per_layer());
            for j in 0..config.rings_per_layer() {
                let theta = PI * j as f64 / config.theta_count as f64;
                let vertices = (0..config.points_per_ring)
                    .map(|k| {
                        let phi = 2.0 * PI * k as f64 / config.points_per_ring as f64;
                        arena.alloc(Point4::on_hypersphere(config.radius, psi, theta, phi))
                    })
                    .collect();
                let ring = Ring::new(j, vertices);
                ring.connect(&mut arena);
                rings.push(ring);
            }
            let layer = Layer::new(i, rings);
            layer.wire_poles(&mut arena, north, south);
            layers.push(layer);
        }

        // Vertical stitching between adjacent rings within each layer.
        // Each pair is wired from both ends; the reciprocal insert makes
        // the second call a no-op.
        for layer in &layers {
            for pair in layer.rings().windows(2) {
                let (ring, next_ring) = (&pair[0], &pair[1]);
                for (&v, &w) in ring.vertices().iter().zip(next_ring.vertices()) {
                    arena.connect(v, ConnectionKind::VerticalDown, w);
                    arena.connect(w, ConnectionKind::VerticalUp, v);
                }
            }
        }

        // Forward stitching between adjacent layers.
        for i in 0..config.layer_count - 1 {
            layers[i].connect_to_next_layer(&mut arena, &layers[i + 1]);
        }

        // Wraparound: the last layer wires forward to the first, closing
        // the fourth dimension's cycle. A single layer wires to itself.
        layers[config.layer_count - 1].connect_to_next_layer(&mut arena, &layers[0]);

        Ok(Self {
            config,
            arena,
            north,
            south,
            layers,
        })
    }

    /// The configuration the mesh was generated from.
    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    /// The arena holding every vertex, poles included.
    pub fn arena(&self) -> &VertexArena {
        &self.arena
    }

    /// Id of the north pole (always 0).
    pub fn north_pole(&self) -> VertexId {
        self.north
    }

    /// Id of the south pole (always 1).
    pub fn south_pole(&self) -> VertexId {
        self.south
    }

    /// The layers in psi order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Total number of vertices, poles included.
    pub fn vertex_count(&self) -> usize {
        self.arena.len()
    }

    /// Directed forward edges of the mesh, one `(source, target, kind)`
    /// triple per stored forward adjacency.
    ///
    /// Renderers and exporters consume this as a flat edge list; the
    /// backward kinds mirror these triples and are omitted.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, ConnectionKind)> + '_ {
        self.arena.iter().flat_map(|vertex| {
            ConnectionKind::FORWARD.into_iter().flat_map(move |kind| {
                vertex
                    .neighbors(kind)
                    .iter()
                    .map(move |&neighbor| (vertex.id(), neighbor, kind))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate;

    fn small(layer_count: usize, theta_count: usize, points_per_ring: usize) -> Hypersphere {
        Hypersphere::build(MeshConfig {
            layer_count,
            theta_count,
            points_per_ring,
            radius: 1.0,
        })
        .unwrap()
    }

    #[test]
    fn malformed_config_fails_before_allocation() {
        let config = MeshConfig {
            layer_count: 0,
            ..MeshConfig::default()
        };
        assert!(Hypersphere::build(config).is_err());
    }

    #[test]
    fn default_mesh_counts() {
        let sphere = Hypersphere::build(MeshConfig::default()).unwrap();
        assert_eq!(sphere.vertex_count(), 338);
        assert_eq!(sphere.layers().len(), 6);
        for layer in sphere.layers() {
            assert_eq!(layer.rings().len(), 7);
            for ring in layer.rings() {
                assert_eq!(ring.len(), 8);
            }
        }
    }

    #[test]
    fn poles_take_the_reserved_ids() {
        let sphere = small(2, 2, 3);
        assert_eq!(sphere.north_pole(), VertexId::NORTH_POLE);
        assert_eq!(sphere.south_pole(), VertexId::SOUTH_POLE);
        // Mesh vertices start right after the poles.
        assert_eq!(sphere.layers()[0].rings()[0].vertices()[0], VertexId::new(2));
    }

    #[test]
    fn pole_positions_sit_on_the_w_axis() {
        let config = MeshConfig {
            radius: 3.0,
            ..MeshConfig::default()
        };
        let sphere = Hypersphere::build(config).unwrap();
        let north = sphere.arena().vertex(sphere.north_pole()).position();
        let south = sphere.arena().vertex(sphere.south_pole()).position();
        assert_eq!(north.w, 3.0);
        assert_eq!(south.w, -3.0);
    }

    #[test]
    fn every_generated_vertex_lies_on_the_sphere() {
        let config = MeshConfig {
            radius: 2.0,
            ..MeshConfig::default()
        };
        let sphere = Hypersphere::build(config).unwrap();
        for vertex in sphere.arena().iter() {
            assert!((vertex.position().norm() - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn interior_vertices_have_one_neighbor_per_kind() {
        let sphere = Hypersphere::build(MeshConfig::default()).unwrap();
        for layer in sphere.layers() {
            // Rings away from both boundaries see plain vertical stitching.
            for ring in &layer.rings()[1..layer.rings().len() - 1] {
                for &v in ring.vertices() {
                    let vertex = sphere.arena().vertex(v);
                    for kind in ConnectionKind::ALL {
                        assert_eq!(vertex.neighbors(kind).len(), 1, "{} under {}", v, kind);
                    }
                }
            }
        }
    }

    #[test]
    fn ring_closure_walks_home() {
        let sphere = Hypersphere::build(MeshConfig::default()).unwrap();
        let points = sphere.config().points_per_ring;
        for layer in sphere.layers() {
            for ring in layer.rings() {
                let start = ring.vertices()[0];
                let mut forward = start;
                for _ in 0..points {
                    forward = sphere.arena().vertex(forward).neighbors(ConnectionKind::RingNext)[0];
                }
                assert_eq!(forward, start);

                // RingPrevious is the exact inverse traversal.
                let mut backward = start;
                for _ in 0..points {
                    backward =
                        sphere.arena().vertex(backward).neighbors(ConnectionKind::RingPrevious)[0];
                }
                assert_eq!(backward, start);
            }
        }
    }

    #[test]
    fn wraparound_closure_walks_home() {
        let sphere = small(4, 2, 3);
        for layer in sphere.layers() {
            for ring in layer.rings() {
                for &start in ring.vertices() {
                    let mut current = start;
                    for _ in 0..4 {
                        current =
                            sphere.arena().vertex(current).neighbors(ConnectionKind::LayerNext)[0];
                    }
                    assert_eq!(current, start);
                }
            }
        }
    }

    #[test]
    fn single_layer_wraps_to_itself() {
        let sphere = small(1, 1, 3);
        let layer = &sphere.layers()[0];
        assert_eq!(sphere.layers().len(), 1);
        assert_eq!(layer.rings().len(), 2);

        for ring in layer.rings() {
            assert_eq!(ring.len(), 3);
            for &v in ring.vertices() {
                let vertex = sphere.arena().vertex(v);
                assert_eq!(vertex.neighbors(ConnectionKind::RingNext).len(), 1);
                assert_eq!(vertex.neighbors(ConnectionKind::RingPrevious).len(), 1);
                // The wraparound turns the single layer into a self-loop.
                assert_eq!(vertex.neighbors(ConnectionKind::LayerNext), &[v][..]);
                assert_eq!(vertex.neighbors(ConnectionKind::LayerPrevious), &[v][..]);
            }
        }

        for &v in layer.first_ring().vertices() {
            assert!(sphere
                .arena()
                .vertex(v)
                .neighbors(ConnectionKind::VerticalUp)
                .contains(&sphere.north_pole()));
        }
        for &v in layer.last_ring().vertices() {
            assert!(sphere
                .arena()
                .vertex(v)
                .neighbors(ConnectionKind::VerticalDown)
                .contains(&sphere.south_pole()));
        }

        assert!(validate(&sphere).is_clean());
    }

    #[test]
    fn edge_list_covers_each_forward_adjacency_once() {
        let sphere = Hypersphere::build(MeshConfig::default()).unwrap();

        // 336 mesh vertices contribute one RingNext and one LayerNext edge
        // each; VerticalDown edges are 6 per-ring transitions of 8 vertices
        // per layer, plus the south link per layer, plus the north pole's
        // fan-out.
        let ring_edges = 336;
        let layer_edges = 336;
        let vertical_edges = 6 * (6 * 8 + 8) + 48;
        assert_eq!(sphere.edges().count(), ring_edges + layer_edges + vertical_edges);

        for (source, target, kind) in sphere.edges() {
            assert!(sphere
                .arena()
                .vertex(target)
                .neighbors(kind.reciprocal())
                .contains(&source));
        }
    }
}
