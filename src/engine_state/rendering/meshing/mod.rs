//! Mesh generation and bookkeeping of live chunk meshes.
//!
//! # Architecture
//! - `mesh/`: the face-culling algorithm and the geometry it produces
//! - `MeshRegistry`: a [`RenderSink`](super::RenderSink) that keeps every
//!   live chunk mesh, the way a renderer would hold its GPU buffers

mod mesh;
mod mesh_registry;

pub use mesh::*;
pub use mesh_registry::MeshRegistry;
