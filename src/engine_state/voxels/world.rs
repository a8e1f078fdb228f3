//! # World Module
//!
//! This module provides the `World` struct which owns every loaded chunk and
//! answers "is there a voxel at (x, y, z)" for the whole engine.
//!
//! ## Architecture
//!
//! The world uses a sparse storage approach where only chunks inside the
//! observer's window are kept in memory. Evicted chunks are dropped, not
//! saved: terrain generation is deterministic, so a chunk that comes back
//! into range is simply generated again.
//!
//! ## Thread Safety
//!
//! The engine shares the world as `MtResource<World>`. The streamer is the
//! only writer (insert on generation, remove on eviction); meshing only reads.

use std::collections::HashMap;

use cgmath::Point3;

use super::chunk::{Chunk, ChunkId};
use super::voxel::Voxel;

/// Represents a voxel world composed of multiple chunks.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use voxel_terrain::engine_state::voxels::{chunk::{Chunk, ChunkId}, world::World};
///
/// let mut world = World::new(0, 32);
/// world.insert_chunk(Chunk::empty(ChunkId::new(0, 0), 32));
///
/// // Lookups inside a loaded but empty chunk and inside a missing chunk are both `None`.
/// assert!(world.get_voxel(Point3::new(1, 1, 1)).is_none());
/// assert!(world.get_voxel(Point3::new(-1, 1, -1)).is_none());
/// ```
pub struct World {
    /// Base seed the world's terrain was generated from.
    seed: i64,
    /// Side length of every chunk in voxels.
    chunk_size: i32,
    /// A mapping from chunk coordinates to chunk data.
    chunks: HashMap<ChunkId, Chunk>,
}

impl World {
    /// Creates a new, empty world.
    ///
    /// # Arguments
    ///
    /// * `seed` - The base generation seed
    /// * `chunk_size` - Side length of every chunk in voxels
    pub fn new(seed: i64, chunk_size: i32) -> Self {
        World {
            seed,
            chunk_size,
            chunks: HashMap::new(),
        }
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn chunk_size(&self) -> i32 {
        self.chunk_size
    }

    /// Adds a chunk if no chunk with its id is loaded yet.
    ///
    /// # Returns
    ///
    /// `false` if a chunk with the same id was already present; the world is
    /// left unchanged in that case.
    pub fn insert_chunk(&mut self, chunk: Chunk) -> bool {
        if self.chunks.contains_key(&chunk.id) {
            log::warn!("Chunk {} is already loaded, ignoring duplicate", chunk.id);
            return false;
        }

        self.chunks.insert(chunk.id, chunk);
        true
    }

    /// Drops a chunk from the world, returning it if it was loaded.
    pub fn remove_chunk(&mut self, id: ChunkId) -> Option<Chunk> {
        self.chunks.remove(&id)
    }

    pub fn contains_chunk(&self, id: ChunkId) -> bool {
        self.chunks.contains_key(&id)
    }

    /// Retrieves the chunk at the specified chunk coordinates.
    pub fn get_chunk(&self, id: ChunkId) -> Option<&Chunk> {
        self.chunks.get(&id)
    }

    /// Ids of every loaded chunk, in no particular order.
    pub fn chunk_ids(&self) -> impl Iterator<Item = ChunkId> + '_ {
        self.chunks.keys().copied()
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Looks up the voxel at a world position.
    ///
    /// A position inside a chunk that is not loaded, or an empty position in a
    /// loaded chunk, both yield `None`.
    pub fn get_voxel(&self, position: Point3<i32>) -> Option<&Voxel> {
        let id = ChunkId::containing(position.x, position.z, self.chunk_size);
        self.chunks.get(&id)?.get_voxel(position)
    }

    pub fn is_occupied(&self, position: Point3<i32>) -> bool {
        self.get_voxel(position).is_some()
    }

    /// Looks up a voxel from a render-space position.
    ///
    /// Render space scales voxel coordinates by `tile_size`; each axis is
    /// mapped back with `ceil(coordinate * tile_size)`.
    pub fn get_voxel_by_absolute_position(
        &self,
        x: f32,
        y: f32,
        z: f32,
        tile_size: f32,
    ) -> Option<&Voxel> {
        let to_voxel = |coordinate: f32| (coordinate * tile_size).ceil() as i32;
        self.get_voxel(Point3::new(to_voxel(x), to_voxel(y), to_voxel(z)))
    }

    /// Snapshot of every voxel in a chunk, in no particular order.
    ///
    /// Empty if the chunk is not loaded.
    pub fn get_all_voxels(&self, id: ChunkId) -> Vec<Voxel> {
        self.chunks
            .get(&id)
            .map(|chunk| chunk.voxels().copied().collect())
            .unwrap_or_default()
    }
}
