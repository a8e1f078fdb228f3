//! # Chunk Module
//!
//! This module provides the `Chunk` struct: a fixed-size square column of the
//! world, `chunk_size` voxels wide along X and Z and unbounded along Y.
//!
//! ## Storage
//!
//! Terrain is sparse along Y (a surface voxel plus a thin fill), so a chunk
//! keeps only the voxels that exist, in a hash map keyed by `VoxelKey`.
//! Anything not in the map is air.
//!
//! ### Performance Characteristics
//! - **Solidity Check**: O(1) expected - one hash lookup
//! - **Iteration**: O(n) in the number of stored voxels
//! - **Memory Usage**: proportional to the number of solid voxels, not the chunk volume

use std::collections::HashMap;

use cgmath::Point3;

use super::voxel::{Voxel, VoxelKey};

mod chunk_id;

pub use chunk_id::ChunkId;

/// The default side length of a chunk in voxels.
pub const CHUNK_DIMENSION: i32 = 32;

/// A square column of voxels.
///
/// Every voxel stored in a chunk has a world X in
/// `[id.x * chunk_size, id.x * chunk_size + chunk_size)`, and likewise for Z.
#[derive(Debug, Clone)]
pub struct Chunk {
    /// The position of this chunk in chunk coordinates (not block coordinates).
    pub id: ChunkId,

    /// Side length of the chunk in voxels.
    chunk_size: i32,

    /// The solid voxels of this chunk, keyed by world coordinates.
    voxels: HashMap<VoxelKey, Voxel>,
}

impl Chunk {
    /// Creates a new, completely empty chunk.
    ///
    /// # Arguments
    /// * `id` - The chunk coordinates of the new chunk
    /// * `chunk_size` - Side length in voxels, must be positive
    pub fn empty(id: ChunkId, chunk_size: i32) -> Self {
        debug_assert!(chunk_size > 0, "chunk size must be positive");
        Chunk {
            id,
            chunk_size,
            voxels: HashMap::new(),
        }
    }

    /// Side length of the chunk in voxels.
    pub fn chunk_size(&self) -> i32 {
        self.chunk_size
    }

    /// World coordinate of the chunk's lowest X and Z column, if the chunk
    /// is addressable (see [`ChunkId::world_origin`]).
    pub fn world_origin(&self) -> Option<(i32, i32)> {
        self.id.world_origin(self.chunk_size)
    }

    /// Whether a world column belongs to this chunk.
    pub fn contains_column(&self, world_x: i32, world_z: i32) -> bool {
        let Some((origin_x, origin_z)) = self.world_origin() else {
            return false;
        };
        (origin_x..origin_x + self.chunk_size).contains(&world_x)
            && (origin_z..origin_z + self.chunk_size).contains(&world_z)
    }

    /// Stores a voxel, replacing any voxel already at that position.
    ///
    /// The voxel must lie within this chunk's column.
    pub fn insert_voxel(&mut self, voxel: Voxel) {
        debug_assert!(
            self.contains_column(voxel.position.x, voxel.position.z),
            "voxel {:?} lies outside chunk {}",
            voxel.position,
            self.id
        );
        self.voxels.insert(voxel.key(), voxel);
    }

    /// Gets the voxel at the given world position, if this chunk holds one.
    pub fn get_voxel(&self, position: Point3<i32>) -> Option<&Voxel> {
        self.voxels.get(&VoxelKey::from(position))
    }

    /// Iterates over the stored voxels in no particular order.
    pub fn voxels(&self) -> impl Iterator<Item = &Voxel> {
        self.voxels.values()
    }

    /// The stored voxels in ascending key order.
    pub fn sorted_voxels(&self) -> Vec<&Voxel> {
        let mut voxels: Vec<&Voxel> = self.voxels.values().collect();
        voxels.sort_unstable_by_key(|voxel| voxel.key());
        voxels
    }

    /// Number of solid voxels in the chunk.
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::voxels::block::block_type::BlockType;

    #[test]
    fn column_bounds_follow_chunk_id() {
        let chunk = Chunk::empty(ChunkId::new(-1, 2), 32);
        assert_eq!(chunk.world_origin(), Some((-32, 64)));
        assert!(chunk.contains_column(-32, 64));
        assert!(chunk.contains_column(-1, 95));
        assert!(!chunk.contains_column(0, 64));
        assert!(!chunk.contains_column(-32, 96));
    }

    #[test]
    fn unaddressable_chunk_contains_nothing() {
        let chunk = Chunk::empty(ChunkId::new(i32::MAX, 0), 32);
        assert_eq!(chunk.world_origin(), None);
        assert!(!chunk.contains_column(i32::MAX, 0));
    }

    #[test]
    fn insert_and_lookup() {
        let mut chunk = Chunk::empty(ChunkId::new(0, 0), 4);
        chunk.insert_voxel(Voxel::new(Point3::new(1, -7, 3), BlockType::GRASS));
        assert_eq!(chunk.len(), 1);
        assert!(chunk.get_voxel(Point3::new(1, -7, 3)).is_some());
        assert!(chunk.get_voxel(Point3::new(1, -6, 3)).is_none());
    }

    #[test]
    fn reinserting_replaces() {
        let mut chunk = Chunk::empty(ChunkId::new(0, 0), 4);
        chunk.insert_voxel(Voxel::new(Point3::new(0, 0, 0), BlockType::GRASS));
        chunk.insert_voxel(Voxel::new(Point3::new(0, 0, 0), BlockType::DIRT));
        assert_eq!(chunk.len(), 1);
        let voxel = chunk.get_voxel(Point3::new(0, 0, 0)).map(|v| v.block.block_type());
        assert_eq!(voxel, Some(Some(BlockType::DIRT)));
    }

    #[test]
    fn sorted_voxels_are_in_key_order() {
        let mut chunk = Chunk::empty(ChunkId::new(0, 0), 4);
        for (x, y, z) in [(3, 0, 0), (0, 2, 1), (0, 2, 0), (1, -1, 3)] {
            chunk.insert_voxel(Voxel::new(Point3::new(x, y, z), BlockType::DIRT));
        }
        let keys: Vec<VoxelKey> = chunk.sorted_voxels().iter().map(|v| v.key()).collect();
        assert_eq!(
            keys,
            vec![
                VoxelKey(0, 2, 0),
                VoxelKey(0, 2, 1),
                VoxelKey(1, -1, 3),
                VoxelKey(3, 0, 0)
            ]
        );
    }
}
