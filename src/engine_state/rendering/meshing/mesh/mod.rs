//! Mesh generation for voxel chunks.
//!
//! This module provides the conversion from chunk voxels to renderable
//! geometry.
//!
//! # Architecture
//! - [`GeometryBuffer`]: The flat position/normal/uv/index streams of one chunk
//! - [`Face`]: A single quad covering one side of one voxel
//! - [`ChunkMesher`]: Face-culled meshing, one quad per exposed voxel face
//!
//! # Usage
//! ```
//! use voxel_terrain::config::EngineConfig;
//! use voxel_terrain::engine_state::rendering::meshing::ChunkMesher;
//! use voxel_terrain::engine_state::voxels::{chunk::ChunkId, terrain::TerrainGenerator, world::World};
//!
//! let config = EngineConfig::default();
//! let chunk = TerrainGenerator::new(&config).generate(ChunkId::new(0, 0));
//! let world = World::new(config.seed, config.chunk_size);
//! let geometry = ChunkMesher::from_config(&config).mesh(&chunk, &world);
//! assert_eq!(geometry.indices.len() % 6, 0);
//! ```

mod culled;
mod face;
mod mesh;

pub use culled::ChunkMesher;
pub use face::Face;
pub use mesh::*;
