use cgmath::{Point3, Vector3};

use crate::engine_state::voxels::block::block_side::BlockSide;

/// Corner offsets of each face of the unit cube, in quad vertex order.
///
/// For every side, v0 is the base corner, v1 the corner diagonally opposite,
/// v2 = base + b and v3 = base + a, where a × b is the inward normal. Both
/// triangles (v0, v1, v2) and (v0, v3, v1) therefore wind the same way on
/// every face. Indexed by `BlockSide`.
const FACE_CORNERS: [[[i32; 3]; 4]; 6] = [
    // TOP (+Y)
    [[0, 1, 0], [1, 1, 1], [0, 1, 1], [1, 1, 0]],
    // BOTTOM (-Y)
    [[0, 0, 0], [1, 0, 1], [1, 0, 0], [0, 0, 1]],
    // LEFT (-X)
    [[0, 0, 0], [0, 1, 1], [0, 0, 1], [0, 1, 0]],
    // RIGHT (+X)
    [[1, 0, 0], [1, 1, 1], [1, 1, 0], [1, 0, 1]],
    // FRONT (-Z)
    [[0, 0, 0], [1, 1, 0], [0, 1, 0], [1, 0, 0]],
    // BACK (+Z)
    [[0, 0, 1], [1, 1, 1], [1, 0, 1], [0, 1, 1]],
];

/// Represents a single quad face of a voxel in the mesh.
///
/// A face is defined by four corner points in voxel coordinates and the side
/// of the voxel it covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Corners in quad vertex order (v0, v1, v2, v3)
    pub corners: [Point3<i32>; 4],
    /// Which side of the block this face represents
    pub block_side: BlockSide,
}

impl Face {
    /// Creates the face covering `block_side` of the voxel at `voxel`.
    pub fn new(voxel: Point3<i32>, block_side: BlockSide) -> Self {
        let offsets = FACE_CORNERS[block_side as usize];
        Face {
            corners: offsets.map(|[x, y, z]| voxel + Vector3::new(x, y, z)),
            block_side,
        }
    }

    /// Corner positions in render space.
    pub fn scaled_corners(&self, tile_size: f32) -> [[f32; 3]; 4] {
        self.corners.map(|corner| {
            [
                corner.x as f32 * tile_size,
                corner.y as f32 * tile_size,
                corner.z as f32 * tile_size,
            ]
        })
    }
}
