//! Tracks the geometry of every chunk currently handed to the renderer.

use std::collections::HashMap;

use crate::engine_state::{rendering::RenderSink, voxels::chunk::ChunkId};

use super::GeometryBuffer;

/// Holds live chunk meshes keyed by chunk id.
///
/// A re-meshed chunk replaces its previous geometry; a disposed chunk
/// releases it. Counters record how many times each callback ran.
#[derive(Debug, Default)]
pub struct MeshRegistry {
    meshes: HashMap<ChunkId, GeometryBuffer>,
    meshed_events: usize,
    disposed_events: usize,
}

impl MeshRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ChunkId) -> Option<&GeometryBuffer> {
        self.meshes.get(&id)
    }

    pub fn contains(&self, id: ChunkId) -> bool {
        self.meshes.contains_key(&id)
    }

    /// Ids of every live mesh, sorted.
    pub fn ids(&self) -> Vec<ChunkId> {
        let mut ids: Vec<ChunkId> = self.meshes.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Total vertices across all live meshes.
    pub fn total_vertices(&self) -> usize {
        self.meshes.values().map(GeometryBuffer::vertex_count).sum()
    }

    /// Total upload size across all live meshes, in bytes.
    pub fn total_bytes(&self) -> usize {
        self.meshes.values().map(GeometryBuffer::byte_size).sum()
    }

    pub fn meshed_events(&self) -> usize {
        self.meshed_events
    }

    pub fn disposed_events(&self) -> usize {
        self.disposed_events
    }
}

impl RenderSink for MeshRegistry {
    fn on_chunk_meshed(&mut self, id: ChunkId, geometry: GeometryBuffer) {
        self.meshed_events += 1;
        log::debug!(
            "Mesh {}: {} vertices, {} triangles",
            id.mesh_name(),
            geometry.vertex_count(),
            geometry.triangle_count()
        );
        if self.meshes.insert(id, geometry).is_some() {
            log::debug!("Replaced existing mesh {}", id.mesh_name());
        }
    }

    fn on_chunk_disposed(&mut self, id: ChunkId) {
        self.disposed_events += 1;
        if self.meshes.remove(&id).is_none() {
            log::warn!("Dispose requested for unknown mesh {}", id.mesh_name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_quad() -> GeometryBuffer {
        let mut geometry = GeometryBuffer::new();
        geometry.push_quad(
            [[0.0; 3], [1.0, 0.0, 1.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]],
            [0.0, 1.0, 0.0],
            [[0.0, 1.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]],
        );
        geometry
    }

    #[test]
    fn remesh_replaces_geometry() {
        let mut registry = MeshRegistry::new();
        registry.on_chunk_meshed(ChunkId::new(0, 0), GeometryBuffer::new());
        registry.on_chunk_meshed(ChunkId::new(0, 0), one_quad());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.total_vertices(), 4);
        assert_eq!(registry.meshed_events(), 2);
    }

    #[test]
    fn dispose_releases_geometry() {
        let mut registry = MeshRegistry::new();
        registry.on_chunk_meshed(ChunkId::new(1, -1), one_quad());
        registry.on_chunk_disposed(ChunkId::new(1, -1));
        assert!(registry.is_empty());
        assert_eq!(registry.total_bytes(), 0);
        assert_eq!(registry.disposed_events(), 1);
    }

    #[test]
    fn ids_are_sorted() {
        let mut registry = MeshRegistry::new();
        for id in [ChunkId::new(2, 0), ChunkId::new(-1, 5), ChunkId::new(0, 0)] {
            registry.on_chunk_meshed(id, GeometryBuffer::new());
        }
        assert_eq!(
            registry.ids(),
            vec![ChunkId::new(-1, 5), ChunkId::new(0, 0), ChunkId::new(2, 0)]
        );
    }
}
