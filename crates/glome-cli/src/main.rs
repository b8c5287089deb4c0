//! Glome Mesh Generator
//!
//! Generate a discretized hypersphere surface mesh and print its
//! validation report.
//!
//! Usage: `glome-cli [layers] [theta] [points] [radius] [--json]`

use std::env;

use glome_topology::{validate, Hypersphere, MeshConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();
    let json = args.iter().any(|arg| arg == "--json");
    let values: Vec<&String> = args
        .iter()
        .skip(1)
        .filter(|arg| !arg.starts_with("--"))
        .collect();

    let defaults = MeshConfig::default();
    let config = MeshConfig {
        layer_count: values
            .first()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.layer_count),
        theta_count: values
            .get(1)
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.theta_count),
        points_per_ring: values
            .get(2)
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.points_per_ring),
        radius: values
            .get(3)
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.radius),
    };

    tracing::info!(
        "generating mesh: {} layers, {} rings per layer, {} points per ring",
        config.layer_count,
        config.rings_per_layer(),
        config.points_per_ring
    );

    let sphere = Hypersphere::build(config)?;
    let report = validate(&sphere);

    tracing::info!(
        "mesh ready: {} vertices, {} forward edges",
        sphere.vertex_count(),
        sphere.edges().count()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Glome Mesh Generator");
    println!("====================");
    println!();
    println!("Configuration:");
    println!("  Layers:          {}", config.layer_count);
    println!("  Rings per layer: {}", config.rings_per_layer());
    println!("  Points per ring: {}", config.points_per_ring);
    println!("  Radius:          {}", config.radius);
    println!();
    println!("Mesh:");
    println!("  Vertices: {}", sphere.vertex_count());
    println!("  Edges:    {}", sphere.edges().count());
    println!();
    println!("{}", report);
    println!();

    let expected = config.expected_pole_fanout();
    let fully_wired = report.is_clean()
        && report.north_pole_connections == expected
        && report.south_pole_connections == expected;
    if fully_wired {
        println!("Mesh is fully wired (expected pole fan-out {}).", expected);
    } else {
        println!("Mesh has wiring gaps (expected pole fan-out {}).", expected);
    }

    Ok(())
}
