//! # Voxel Data
//!
//! This module contains the spatial data model of the engine and the
//! terrain generation that fills it.
//!
//! ## Architecture
//!
//! * **Block**: voxel materials, block faces and their atlas tiles
//! * **Voxel**: a solid unit cube at an integer world coordinate
//! * **Chunk**: a fixed-width column of voxels, the unit of loading and meshing
//! * **World**: the sparse set of loaded chunks and world-space voxel lookup
//! * **Terrain**: seeded noise and the generator that fills chunks from it
//!
//! ## Data Flow
//!
//! 1. The streamer asks the terrain generator for a chunk entering the window
//! 2. The chunk is inserted into the world
//! 3. The mesher reads the chunk and, for boundary faces, its neighbors through the world
//! 4. Chunks leaving the window are removed from the world and forgotten

pub mod block;
pub mod chunk;
pub mod terrain;
pub mod voxel;
pub mod world;
