//! # Terrain Generator
//!
//! Fills chunks column by column: one `GRASS` voxel at the surface height and
//! `DIRT` from just below it down to the floor. Generation is a pure function
//! of (seed, chunk id, config), so evicted chunks can be dropped and rebuilt
//! identically later.

use cgmath::Point3;

use crate::config::{EngineConfig, TerrainStrategy};
use crate::engine_state::voxels::{
    block::block_type::BlockType,
    chunk::{Chunk, ChunkId},
    voxel::Voxel,
};

use super::noise_field::NoiseField;

/// Produces chunks of terrain for one world seed.
#[derive(Clone)]
pub struct TerrainGenerator {
    noise: NoiseField,
    strategy: TerrainStrategy,
    chunk_size: i32,
    wavelength: f64,
    max_height: f64,
    floor: i32,
}

impl TerrainGenerator {
    /// Builds a generator from a validated config.
    pub fn new(config: &EngineConfig) -> Self {
        TerrainGenerator {
            noise: NoiseField::new(config.seed),
            strategy: config.terrain,
            chunk_size: config.chunk_size,
            wavelength: config.wavelength,
            max_height: config.max_height,
            floor: config.floor,
        }
    }

    pub fn seed(&self) -> i64 {
        self.noise.seed()
    }

    /// Surface height of a world column.
    pub fn surface_height(&self, world_x: i32, world_z: i32) -> i32 {
        match self.strategy {
            TerrainStrategy::Noise => {
                self.noise
                    .column_height(world_x, world_z, self.wavelength, self.max_height)
            }
            TerrainStrategy::Flat { height } => height,
        }
    }

    /// Generates the chunk at `id`.
    ///
    /// # Returns
    /// A chunk with exactly one surface voxel per column plus its fill, or an
    /// empty chunk if `id` lies outside addressable voxel space.
    pub fn generate(&self, id: ChunkId) -> Chunk {
        let mut chunk = Chunk::empty(id, self.chunk_size);
        let Some((origin_x, origin_z)) = chunk.world_origin() else {
            log::warn!("Chunk {} lies outside voxel space, left empty", id);
            return chunk;
        };

        for lx in 0..self.chunk_size {
            for lz in 0..self.chunk_size {
                let world_x = origin_x + lx;
                let world_z = origin_z + lz;
                let surface = self.surface_height(world_x, world_z);

                chunk.insert_voxel(Voxel::new(
                    Point3::new(world_x, surface, world_z),
                    BlockType::GRASS,
                ));

                // Empty range when the surface sits at or below the floor.
                for y in (self.floor..surface).rev() {
                    chunk.insert_voxel(Voxel::new(Point3::new(world_x, y, world_z), BlockType::DIRT));
                }
            }
        }

        log::trace!("Generated chunk {} with {} voxels", id, chunk.len());
        chunk
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::voxels::voxel::VoxelKey;

    fn sorted_contents(chunk: &Chunk) -> Vec<(VoxelKey, u8)> {
        chunk
            .sorted_voxels()
            .iter()
            .map(|voxel| (voxel.key(), voxel.block.block_type))
            .collect()
    }

    #[test]
    fn generation_is_deterministic() {
        let config = EngineConfig {
            seed: 42,
            ..EngineConfig::default()
        };
        let first = TerrainGenerator::new(&config).generate(ChunkId::new(5, -3));
        let second = TerrainGenerator::new(&config).generate(ChunkId::new(5, -3));
        assert_eq!(sorted_contents(&first), sorted_contents(&second));
    }

    #[test]
    fn voxels_stay_inside_their_chunk() {
        let config = EngineConfig::default();
        let generator = TerrainGenerator::new(&config);
        for id in [ChunkId::new(0, 0), ChunkId::new(-1, 2), ChunkId::new(3, -4)] {
            let chunk = generator.generate(id);
            let size = config.chunk_size;
            for voxel in chunk.voxels() {
                assert!((id.x * size..id.x * size + size).contains(&voxel.position.x));
                assert!((id.z * size..id.z * size + size).contains(&voxel.position.z));
            }
        }
    }

    #[test]
    fn every_column_has_one_surface_and_fill_to_the_floor() {
        let config = EngineConfig::default();
        let generator = TerrainGenerator::new(&config);
        let chunk = generator.generate(ChunkId::new(1, 1));
        let (origin_x, origin_z) = chunk.world_origin().unwrap();

        for lx in 0..config.chunk_size {
            for lz in 0..config.chunk_size {
                let (x, z) = (origin_x + lx, origin_z + lz);
                let surface = generator.surface_height(x, z);
                let top = chunk.get_voxel(Point3::new(x, surface, z));
                assert_eq!(top.and_then(|v| v.block.block_type()), Some(BlockType::GRASS));
                for y in config.floor..surface {
                    let fill = chunk.get_voxel(Point3::new(x, y, z));
                    assert_eq!(fill.and_then(|v| v.block.block_type()), Some(BlockType::DIRT));
                }
                assert!(chunk.get_voxel(Point3::new(x, surface + 1, z)).is_none());
            }
        }
    }

    #[test]
    fn surface_below_floor_gets_no_fill() {
        let config = EngineConfig {
            chunk_size: 4,
            terrain: TerrainStrategy::Flat { height: -6 },
            ..EngineConfig::default()
        };
        let chunk = TerrainGenerator::new(&config).generate(ChunkId::new(0, 0));
        assert_eq!(chunk.len(), 16);
        assert!(chunk.voxels().all(|voxel| voxel.position.y == -6));
    }

    #[test]
    fn flat_terrain_fills_down_to_floor() {
        let config = EngineConfig {
            chunk_size: 2,
            floor: -1,
            terrain: TerrainStrategy::Flat { height: 2 },
            ..EngineConfig::default()
        };
        let chunk = TerrainGenerator::new(&config).generate(ChunkId::new(0, 0));
        // 4 columns, each with y = 2 (surface), 1, 0, -1 (fill).
        assert_eq!(chunk.len(), 16);
        assert!(chunk.get_voxel(Point3::new(1, -1, 1)).is_some());
        assert!(chunk.get_voxel(Point3::new(1, -2, 1)).is_none());
    }

    #[test]
    fn origin_column_height_is_reproducible() {
        let config = EngineConfig::default();
        let chunk = TerrainGenerator::new(&config).generate(ChunkId::new(0, 0));
        let expected = (NoiseField::new(0).height(0.0, 0.0) * 10.0).floor() as i32;
        let top = chunk.get_voxel(Point3::new(0, expected, 0));
        assert_eq!(top.and_then(|v| v.block.block_type()), Some(BlockType::GRASS));
    }

    #[test]
    fn chunk_past_voxel_space_is_left_empty() {
        let generator = TerrainGenerator::new(&EngineConfig::default());
        let chunk = generator.generate(ChunkId::new(75_000_000, 0));
        assert!(chunk.is_empty());
    }
}
