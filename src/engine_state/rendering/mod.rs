//! Rendering-facing side of the engine.
//!
//! The engine never draws anything itself. It turns chunks into geometry
//! buffers and hands them to a [`RenderSink`], the boundary to whatever
//! renderer the host uses. This module holds that boundary, the mesher, the
//! atlas addressing it relies on and the interleaved vertex format.

use super::voxels::chunk::ChunkId;

pub mod meshing;
pub mod texture;
mod vertex;

// Re-export commonly used types
pub use meshing::{ChunkMesher, GeometryBuffer, MeshRegistry};
pub use vertex::Vertex;

/// Receives chunk geometry from the engine.
///
/// Ids are stable: a chunk keeps the same [`ChunkId`] (textual form
/// `"{x},{z}"`) for as long as it is loaded, and again if it is reloaded.
///
/// Callbacks are made with no lock held on the world, so a sink may read it
/// through a handle from `EngineState::world`. A disposed chunk is already
/// gone from the world; a meshed chunk is present.
pub trait RenderSink {
    /// New or replacement geometry for a chunk. The sink owns it from here on.
    fn on_chunk_meshed(&mut self, id: ChunkId, geometry: GeometryBuffer);

    /// The chunk left the loaded area; its geometry must be released.
    fn on_chunk_disposed(&mut self, id: ChunkId);
}
