//! # Block Side Module
//!
//! This module defines the six faces of a voxel block together with the
//! neighbor offset and outward normal of each face. The mesher walks these in
//! a fixed order, so the order here is also the emission order of quads.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel block.
///
/// The discriminants double as indices into per-side tables
/// (texture indices, UV rotations).
///
/// The order is: [TOP, BOTTOM, LEFT, RIGHT, FRONT, BACK]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The top face (facing positive Y)
    TOP = 0,

    /// The bottom face (facing negative Y)
    BOTTOM = 1,

    /// The left face (facing negative X)
    LEFT = 2,

    /// The right face (facing positive X)
    RIGHT = 3,

    /// The front face (facing negative Z)
    FRONT = 4,

    /// The back face (facing positive Z)
    BACK = 5,
}

impl BlockSide {
    /// Returns an array containing all six block faces in emission order.
    ///
    /// # Returns
    /// An array containing all `BlockSide` variants.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::TOP,
            BlockSide::BOTTOM,
            BlockSide::LEFT,
            BlockSide::RIGHT,
            BlockSide::FRONT,
            BlockSide::BACK,
        ]
    }

    /// Offset from a voxel to the neighbor that can hide this face.
    pub fn neighbor_offset(self) -> Vector3<i32> {
        match self {
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
            BlockSide::FRONT => Vector3::new(0, 0, -1),
            BlockSide::BACK => Vector3::new(0, 0, 1),
        }
    }

    /// Outward unit normal of the face.
    pub fn normal(self) -> Vector3<f32> {
        let offset = self.neighbor_offset();
        Vector3::new(offset.x as f32, offset.y as f32, offset.z as f32)
    }
}
