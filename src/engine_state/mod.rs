//! # Engine State Module
//!
//! Owns everything the terrain engine keeps between ticks.
//!
//! ## Key Components
//!
//! * `EngineState` - The engine context: config, shared world, streamer and render sink
//! * `voxels` - Voxel data, chunks, the world map and terrain generation
//! * `rendering` - Chunk meshing and the render sink boundary
//! * `streaming` - Loading and unloading chunks around the observer
//!
//! ## Architecture
//!
//! The host builds one `EngineState` and calls [`EngineState::tick`] with the
//! observer's position. Everything else, from generation to meshing, happens
//! inside that call. The world is held in an [`MtResource`] so the host can
//! keep a handle and query voxels between ticks.

use web_time::Instant;

use crate::{
    config::{ConfigError, EngineConfig},
    core::MtResource,
};
use rendering::RenderSink;
use streaming::{ChunkStreamer, StreamingReport};
use voxels::world::World;

pub mod rendering;
pub mod streaming;
pub mod voxels;

/// The engine context.
///
/// # Examples
///
/// ```
/// use voxel_terrain::config::EngineConfig;
/// use voxel_terrain::engine_state::{rendering::MeshRegistry, EngineState};
///
/// let config = EngineConfig {
///     load_radius: 1,
///     chunk_size: 8,
///     ..EngineConfig::default()
/// };
/// let mut engine = EngineState::new(config, MeshRegistry::new()).unwrap();
///
/// let report = engine.tick(0.0, 0.0);
/// assert_eq!(report.generated, 9);
/// assert_eq!(engine.sink().len(), 9);
/// ```
pub struct EngineState<S: RenderSink> {
    config: EngineConfig,
    world: MtResource<World>,
    streamer: ChunkStreamer,
    sink: S,
    ticks: u64,
}

impl<S: RenderSink> EngineState<S> {
    /// Validates `config` and builds an engine with an empty world.
    ///
    /// Nothing is generated until the first [`tick`](Self::tick).
    pub fn new(config: EngineConfig, sink: S) -> Result<Self, ConfigError> {
        config.validate()?;

        log::info!(
            "Engine initialized: seed {}, chunk size {}, load radius {}, terrain {:?}",
            config.seed,
            config.chunk_size,
            config.load_radius,
            config.terrain
        );

        Ok(EngineState {
            world: MtResource::new(World::new(config.seed, config.chunk_size)),
            streamer: ChunkStreamer::new(&config),
            config,
            sink,
            ticks: 0,
        })
    }

    /// Streams chunks around the observer's render-space position.
    pub fn tick(&mut self, observer_x: f64, observer_z: f64) -> StreamingReport {
        let start = Instant::now();
        let report = self
            .streamer
            .update(&self.world, observer_x, observer_z, &mut self.sink);
        self.ticks += 1;

        if !report.is_idle() {
            log::debug!(
                "Tick {} at ({:.2}, {:.2}) took {:?}",
                self.ticks,
                observer_x,
                observer_z,
                start.elapsed()
            );
        }
        report
    }

    /// Unloads every chunk, disposing all live meshes.
    pub fn shutdown(&mut self) -> usize {
        let unloaded = self.streamer.unload_all(&self.world, &mut self.sink);
        log::info!("Engine shut down after {} ticks, unloaded {} chunks", self.ticks, unloaded);
        unloaded
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// A shared handle to the world.
    pub fn world(&self) -> MtResource<World> {
        self.world.clone()
    }

    pub fn streamer(&self) -> &ChunkStreamer {
        &self.streamer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
