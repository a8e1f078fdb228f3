//! Face-culled meshing for voxel chunks.
//!
//! Every voxel contributes one quad per face whose neighbor is empty, and
//! nothing for faces covered by another voxel. Output therefore scales with
//! the visible surface of the terrain rather than its volume. Faces are never
//! merged: each exposed voxel face is its own quad.

use log::debug;
use web_time::Instant;

use crate::config::EngineConfig;
use crate::engine_state::{
    rendering::texture::{TextureAtlas, UvRotation},
    voxels::{block::block_side::BlockSide, chunk::Chunk, world::World},
};

use super::{face::Face, mesh::GeometryBuffer};

/// Converts chunks into geometry buffers.
#[derive(Clone, Copy, Debug)]
pub struct ChunkMesher {
    atlas: TextureAtlas,
    /// Render-space size of one voxel
    tile_size: f32,
}

impl ChunkMesher {
    pub fn new(atlas: TextureAtlas, tile_size: f32) -> Self {
        ChunkMesher { atlas, tile_size }
    }

    /// Builds a mesher from a validated config.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            TextureAtlas::new(config.texture_tiles_per_row, config.uv_jitter),
            config.tile_size,
        )
    }

    /// Generates the geometry of `chunk`.
    ///
    /// Neighbors inside the chunk are read from the chunk itself; neighbors
    /// across its boundary are read from `world`. A neighbor in a chunk that
    /// is not loaded counts as empty, so its face is emitted.
    ///
    /// Voxels are visited in ascending key order and sides in `BlockSide`
    /// order, so the same inputs always give the same buffer. Neither the
    /// chunk nor the world is modified.
    pub fn mesh(&self, chunk: &Chunk, world: &World) -> GeometryBuffer {
        let start = Instant::now();
        let mut buffer = GeometryBuffer::new();

        for voxel in chunk.sorted_voxels() {
            let rotations = UvRotation::for_voxel(voxel.position);

            for side in BlockSide::all() {
                let neighbor = voxel.position + side.neighbor_offset();
                let occluded = if chunk.contains_column(neighbor.x, neighbor.z) {
                    chunk.get_voxel(neighbor).is_some()
                } else {
                    world.is_occupied(neighbor)
                };
                if occluded {
                    continue;
                }

                let face = Face::new(voxel.position, side);
                let rect = self.atlas.tile_rect(voxel.block.texture_index(side));
                buffer.push_quad(
                    face.scaled_corners(self.tile_size),
                    side.normal().into(),
                    rotations[side as usize].corners(&rect),
                );
            }
        }

        debug!(
            "Meshed chunk {} ({} voxels, {} quads) in {:?}",
            chunk.id,
            chunk.len(),
            buffer.quad_count(),
            start.elapsed()
        );

        buffer
    }
}
