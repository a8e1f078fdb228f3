//! Interleaved vertex layout for handing chunk geometry to a GPU renderer.

/// A single vertex of chunk geometry.
///
/// # Memory Layout
/// - Position: [f32; 3] (12 bytes)
/// - Normal: [f32; 3] (12 bytes)
/// - Texture Coordinates: [f32; 2] (8 bytes)
///
/// Total size: 32 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position in render space
    pub position: [f32; 3],
    /// Outward face normal
    pub normal: [f32; 3],
    /// UV texture coordinates into the atlas (normalized 0.0-1.0)
    pub tex_coords: [f32; 2],
}

impl Vertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Vertex {
            position,
            normal,
            tex_coords,
        }
    }
}
