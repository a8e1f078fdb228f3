//! Geometry buffers produced by chunk meshing.
//!
//! A `GeometryBuffer` holds four parallel streams (positions, normals, UVs
//! and triangle indices) in the flat layout most renderers accept directly.
//! It is built fresh for every mesh request and owned by the render sink
//! once handed over.

use crate::engine_state::rendering::Vertex;

/// Triangle indices of one quad, relative to its first vertex.
pub const QUAD_INDEX_PATTERN: [u32; 6] = [0, 1, 2, 0, 3, 1];

/// Renderable geometry of one chunk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryBuffer {
    /// Flat xyz triples, one per vertex
    pub positions: Vec<f32>,
    /// Triangle index triples into the vertex streams
    pub indices: Vec<u32>,
    /// Flat xyz triples, one per vertex, uniform across each quad
    pub normals: Vec<f32>,
    /// Flat uv pairs, one per vertex
    pub uvs: Vec<f32>,
}

impl GeometryBuffer {
    /// Creates a new, empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one quad.
    ///
    /// # Arguments
    /// * `corners` - The four vertex positions, v0 and v1 diagonally opposite
    /// * `normal` - The outward normal shared by all four vertices
    /// * `uvs` - Texture coordinates for the four vertices
    pub fn push_quad(&mut self, corners: [[f32; 3]; 4], normal: [f32; 3], uvs: [[f32; 2]; 4]) {
        let base = self.vertex_count() as u32;

        for (corner, uv) in corners.iter().zip(uvs.iter()) {
            self.positions.extend_from_slice(corner);
            self.normals.extend_from_slice(&normal);
            self.uvs.extend_from_slice(uv);
        }

        self.indices
            .extend(QUAD_INDEX_PATTERN.iter().map(|offset| base + offset));
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn quad_count(&self) -> usize {
        self.vertex_count() / 4
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The vertex streams interleaved into `Vertex` records.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .chunks_exact(3)
            .zip(self.normals.chunks_exact(3))
            .zip(self.uvs.chunks_exact(2))
            .map(|((position, normal), uv)| {
                Vertex::new(
                    [position[0], position[1], position[2]],
                    [normal[0], normal[1], normal[2]],
                    [uv[0], uv[1]],
                )
            })
            .collect()
    }

    /// Approximate size of the buffer once uploaded, in bytes.
    pub fn byte_size(&self) -> usize {
        self.vertex_count() * std::mem::size_of::<Vertex>()
            + self.indices.len() * std::mem::size_of::<u32>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT_UVS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]];

    fn square(offset: f32) -> [[f32; 3]; 4] {
        [
            [offset, 0.0, 0.0],
            [offset + 1.0, 0.0, 1.0],
            [offset, 0.0, 1.0],
            [offset + 1.0, 0.0, 0.0],
        ]
    }

    #[test]
    fn indices_advance_by_four_per_quad() {
        let mut buffer = GeometryBuffer::new();
        buffer.push_quad(square(0.0), [0.0, 1.0, 0.0], UNIT_UVS);
        buffer.push_quad(square(1.0), [0.0, 1.0, 0.0], UNIT_UVS);
        assert_eq!(buffer.indices, vec![0, 1, 2, 0, 3, 1, 4, 5, 6, 4, 7, 5]);
        assert_eq!(buffer.vertex_count(), 8);
        assert_eq!(buffer.triangle_count(), 4);
        assert_eq!(buffer.quad_count(), 2);
    }

    #[test]
    fn streams_stay_parallel() {
        let mut buffer = GeometryBuffer::new();
        buffer.push_quad(square(0.0), [0.0, 0.0, -1.0], UNIT_UVS);
        assert_eq!(buffer.positions.len(), 12);
        assert_eq!(buffer.normals.len(), 12);
        assert_eq!(buffer.uvs.len(), 8);
        assert!(buffer.normals.chunks(3).all(|n| n == [0.0, 0.0, -1.0]));
    }

    #[test]
    fn interleaved_view_matches_streams() {
        let mut buffer = GeometryBuffer::new();
        buffer.push_quad(square(2.0), [1.0, 0.0, 0.0], UNIT_UVS);
        let vertices = buffer.vertices();
        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[1].position, [3.0, 0.0, 1.0]);
        assert_eq!(vertices[1].normal, [1.0, 0.0, 0.0]);
        assert_eq!(vertices[1].tex_coords, [1.0, 0.0]);
        assert_eq!(buffer.byte_size(), 4 * 32 + 6 * 4);
    }

    #[test]
    fn new_buffer_is_empty() {
        let buffer = GeometryBuffer::new();
        assert!(buffer.is_empty());
        assert!(buffer.vertices().is_empty());
    }
}
