//! # Chunk Streaming
//!
//! Keeps the loaded set of chunks equal to the window of `load_radius`
//! chunks around an observer. Each update:
//!
//! 1. disposes the mesh and drops the data of every chunk outside the window,
//! 2. generates every window chunk the world does not hold yet,
//! 3. meshes every window chunk without a live mesh, and re-meshes already
//!    meshed edge neighbors of the chunks evicted in step 1 or generated in
//!    step 2.
//!
//! All generation for a window happens before any meshing, so faces on
//! shared chunk boundaries are culled against real neighbor data.

use std::collections::{BTreeSet, HashSet};

use crate::config::EngineConfig;
use crate::core::MtResource;
use crate::engine_state::rendering::{ChunkMesher, RenderSink};
use crate::engine_state::voxels::{chunk::ChunkId, terrain::TerrainGenerator, world::World};

mod chunk_window;

pub use chunk_window::ChunkWindow;

/// What one streaming update changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StreamingReport {
    /// Chunks evicted from the window.
    pub disposed: usize,
    /// Chunks generated into the world.
    pub generated: usize,
    /// Chunks meshed for the first time since they were loaded.
    pub meshed: usize,
    /// Already meshed chunks meshed again because a neighbor appeared or left.
    pub remeshed: usize,
}

impl StreamingReport {
    pub fn is_idle(&self) -> bool {
        *self == StreamingReport::default()
    }
}

/// Loads, meshes and unloads chunks as the observer moves.
pub struct ChunkStreamer {
    generator: TerrainGenerator,
    mesher: ChunkMesher,
    load_radius: i32,
    chunk_size: i32,
    chunk_world_size: f64,
    remesh_neighbors: bool,
    live_meshes: HashSet<ChunkId>,
    window: Option<ChunkWindow>,
}

impl ChunkStreamer {
    /// Builds a streamer from a validated config.
    pub fn new(config: &EngineConfig) -> Self {
        ChunkStreamer {
            generator: TerrainGenerator::new(config),
            mesher: ChunkMesher::from_config(config),
            load_radius: config.load_radius,
            chunk_size: config.chunk_size,
            chunk_world_size: config.chunk_world_size(),
            remesh_neighbors: config.remesh_neighbors,
            live_meshes: HashSet::new(),
            window: None,
        }
    }

    pub fn generator(&self) -> &TerrainGenerator {
        &self.generator
    }

    /// The window computed by the last update.
    pub fn window(&self) -> Option<ChunkWindow> {
        self.window
    }

    pub fn has_live_mesh(&self, id: ChunkId) -> bool {
        self.live_meshes.contains(&id)
    }

    pub fn live_mesh_count(&self) -> usize {
        self.live_meshes.len()
    }

    /// Brings the loaded set in line with the window around the observer.
    ///
    /// Observer coordinates are in render space, the same space as mesh
    /// vertex positions. A non-finite position is ignored. Window chunks whose
    /// voxels would fall outside `i32` coordinates are never loaded.
    ///
    /// Sink callbacks run after the world lock is released.
    pub fn update(
        &mut self,
        world: &MtResource<World>,
        observer_x: f64,
        observer_z: f64,
        sink: &mut dyn RenderSink,
    ) -> StreamingReport {
        let mut report = StreamingReport::default();
        if !(observer_x.is_finite() && observer_z.is_finite()) {
            log::warn!("Ignoring non-finite observer position ({}, {})", observer_x, observer_z);
            return report;
        }

        let window =
            ChunkWindow::around(observer_x, observer_z, self.load_radius, self.chunk_world_size);
        let chunk_size = self.chunk_size;
        let loadable: Vec<ChunkId> = window.ids().filter(|id| id.is_addressable(chunk_size)).collect();
        if loadable.len() < window.len() {
            log::warn!(
                "{} chunks of the window lie outside voxel space and are skipped",
                window.len() - loadable.len()
            );
        }

        let (evicted, disposed, generated) = {
            let mut world = world.get_mut();
            let (evicted, disposed) = self.evict_outside(&mut world, &window);

            let generated: Vec<ChunkId> =
                loadable.iter().copied().filter(|id| !world.contains_chunk(*id)).collect();
            for id in &generated {
                world.insert_chunk(self.generator.generate(*id));
            }
            (evicted, disposed, generated)
        };
        report.disposed = evicted.len();
        report.generated = generated.len();

        for id in disposed {
            sink.on_chunk_disposed(id);
        }

        let meshes = {
            let world = world.get();
            let mut pending: Vec<(ChunkId, bool)> = loadable
                .iter()
                .filter(|id| !self.live_meshes.contains(*id))
                .map(|id| (*id, false))
                .collect();

            if self.remesh_neighbors {
                let stale: BTreeSet<ChunkId> = generated
                    .iter()
                    .chain(&evicted)
                    .flat_map(ChunkId::edge_neighbors)
                    .filter(|neighbor| self.live_meshes.contains(neighbor))
                    .collect();
                pending.extend(stale.into_iter().map(|id| (id, true)));
            }

            let mut meshes = Vec::with_capacity(pending.len());
            for (id, remesh) in pending {
                let Some(chunk) = world.get_chunk(id) else {
                    log::warn!("Chunk {} vanished before meshing", id);
                    continue;
                };
                meshes.push((id, remesh, self.mesher.mesh(chunk, &world)));
            }
            meshes
        };

        for (id, remesh, geometry) in meshes {
            if remesh {
                report.remeshed += 1;
            } else {
                report.meshed += 1;
            }
            self.live_meshes.insert(id);
            sink.on_chunk_meshed(id, geometry);
        }

        if self.window != Some(window) {
            log::debug!(
                "Streaming window x [{}, {}] z [{}, {}]",
                window.min_x,
                window.max_x,
                window.min_z,
                window.max_z
            );
        }
        self.window = Some(window);

        if !report.is_idle() {
            log::info!(
                "Streaming update: disposed {}, generated {}, meshed {}, re-meshed {}",
                report.disposed,
                report.generated,
                report.meshed,
                report.remeshed
            );
        }

        report
    }

    /// Disposes every live mesh and drops every chunk. Returns how many chunks
    /// were unloaded.
    pub fn unload_all(&mut self, world: &MtResource<World>, sink: &mut dyn RenderSink) -> usize {
        let (unloaded, disposed) = {
            let mut world = world.get_mut();
            let mut ids: Vec<ChunkId> =
                world.chunk_ids().chain(self.live_meshes.iter().copied()).collect();
            ids.sort();
            ids.dedup();

            let disposed: Vec<ChunkId> =
                ids.iter().copied().filter(|id| self.unload(&mut world, *id)).collect();
            (ids.len(), disposed)
        };

        for id in disposed {
            sink.on_chunk_disposed(id);
        }
        self.window = None;
        unloaded
    }

    /// Unloads every chunk outside `window`. Returns the evicted ids and, of
    /// those, the ones whose mesh must be disposed.
    fn evict_outside(&mut self, world: &mut World, window: &ChunkWindow) -> (Vec<ChunkId>, Vec<ChunkId>) {
        let mut evicted: Vec<ChunkId> = world
            .chunk_ids()
            .chain(self.live_meshes.iter().copied())
            .filter(|id| !window.contains(*id))
            .collect();
        evicted.sort();
        evicted.dedup();

        let disposed = evicted.iter().copied().filter(|id| self.unload(world, *id)).collect();
        (evicted, disposed)
    }

    /// Drops a chunk's data and live mesh. Returns whether it had a mesh.
    fn unload(&mut self, world: &mut World, id: ChunkId) -> bool {
        world.remove_chunk(id);
        log::trace!("Unloaded chunk {}", id);
        self.live_meshes.remove(&id)
    }
}
