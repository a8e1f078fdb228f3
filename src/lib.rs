#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Terrain
//!
//! Procedural voxel terrain with chunk streaming and face-culled meshing.
//!
//! Terrain is a pure function of a seed: a 2D noise field gives the surface
//! height of every column, and chunks of columns are generated on demand
//! around an observer. Each loaded chunk is turned into a triangle mesh that
//! only contains faces between a solid voxel and empty space, and handed to a
//! host renderer through the [`RenderSink`](engine_state::rendering::RenderSink)
//! trait.
//!
//! ## Key Modules
//!
//! * `config` - Engine configuration and its validation errors
//! * `core` - Shared-ownership primitives
//! * `engine_state` - Voxels, terrain generation, meshing and streaming
//!
//! ## Usage
//!
//! ```rust
//! use voxel_terrain::config::EngineConfig;
//! use voxel_terrain::engine_state::{rendering::MeshRegistry, EngineState};
//!
//! let mut engine = EngineState::new(EngineConfig::default(), MeshRegistry::new()).unwrap();
//! engine.tick(0.0, 0.0);
//! assert!(engine.sink().total_vertices() > 0);
//! ```

use log::info;

use config::{ConfigError, EngineConfig};
use engine_state::{rendering::MeshRegistry, EngineState};

pub mod config;
pub mod core;
pub mod engine_state;

/// Environment variable holding the path of a JSON config file.
pub const CONFIG_PATH_VARIABLE: &str = "VOXEL_TERRAIN_CONFIG";

/// Number of ticks the demo walk runs for.
const DEMO_TICKS: u32 = 16;

/// Runs a headless demo: walks an observer along +X, streaming terrain into a
/// [`MeshRegistry`], and logs what was loaded.
pub fn run() -> Result<(), ConfigError> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = match std::env::var_os(CONFIG_PATH_VARIABLE) {
        Some(path) => {
            info!("Loading config from {}", path.to_string_lossy());
            EngineConfig::from_json_file(path)?
        }
        None => EngineConfig::default(),
    };

    let step = config.chunk_world_size() / 2.0;
    let mut engine = EngineState::new(config, MeshRegistry::new())?;

    for tick in 0..DEMO_TICKS {
        let observer_x = tick as f64 * step;
        let report = engine.tick(observer_x, 0.0);
        info!(
            "Tick {:>2} observer x {:>7.2}: {} chunks meshed, {} disposed",
            tick,
            observer_x,
            report.meshed + report.remeshed,
            report.disposed
        );
    }

    let registry = engine.sink();
    info!(
        "Live meshes: {}, vertices: {}, upload size: {} bytes, meshed events: {}, disposed events: {}",
        registry.len(),
        registry.total_vertices(),
        registry.total_bytes(),
        registry.meshed_events(),
        registry.disposed_events()
    );

    engine.shutdown();
    Ok(())
}
