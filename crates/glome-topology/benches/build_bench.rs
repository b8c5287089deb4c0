//! Benchmarks for glome mesh construction and validation.
//!
//! Measures performance of:
//! - Full mesh generation at growing sizes
//! - Validation passes over a finished mesh
//! - Forward edge iteration

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glome_topology::{validate, Hypersphere, MeshConfig};

fn scaled_config(scale: usize) -> MeshConfig {
    MeshConfig {
        layer_count: 6 * scale,
        theta_count: 6 * scale,
        points_per_ring: 8 * scale,
        radius: 1.0,
    }
}

/// Benchmark full mesh generation
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for &scale in &[1usize, 2, 4, 8] {
        let config = scaled_config(scale);
        group.throughput(Throughput::Elements(config.vertex_count() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(config.vertex_count()),
            &config,
            |b, &cfg| b.iter(|| Hypersphere::build(black_box(cfg)).unwrap()),
        );
    }
    group.finish();
}

/// Benchmark validation over a finished mesh
fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for &scale in &[1usize, 2, 4, 8] {
        let config = scaled_config(scale);
        let sphere = Hypersphere::build(config).unwrap();
        group.throughput(Throughput::Elements(config.vertex_count() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(config.vertex_count()),
            &sphere,
            |b, sphere| b.iter(|| validate(black_box(sphere))),
        );
    }
    group.finish();
}

/// Benchmark forward edge iteration
fn bench_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("edges");

    for &scale in &[1usize, 2, 4] {
        let config = scaled_config(scale);
        let sphere = Hypersphere::build(config).unwrap();
        let edge_count = sphere.edges().count() as u64;
        group.throughput(Throughput::Elements(edge_count));
        group.bench_with_input(
            BenchmarkId::from_parameter(edge_count),
            &sphere,
            |b, sphere| b.iter(|| black_box(sphere).edges().count()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_validate, bench_edges);
criterion_main!(benches);
