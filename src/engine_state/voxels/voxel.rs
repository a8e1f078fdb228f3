//! # Voxel Module
//!
//! A voxel is an occupied unit cube at an integer world coordinate. Voxels are
//! keyed by their coordinate triple; two voxels are the same voxel iff their
//! keys are equal.

use cgmath::Point3;

use super::block::{block_type::BlockType, Block};

/// Composite key for a voxel coordinate.
///
/// Ordering is lexicographic on (x, y, z), which is what gives chunk meshing
/// its fixed emission order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VoxelKey(pub i32, pub i32, pub i32);

impl From<Point3<i32>> for VoxelKey {
    fn from(position: Point3<i32>) -> Self {
        VoxelKey(position.x, position.y, position.z)
    }
}

impl From<VoxelKey> for Point3<i32> {
    fn from(key: VoxelKey) -> Self {
        Point3::new(key.0, key.1, key.2)
    }
}

/// A single solid voxel in world space.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Voxel {
    /// World coordinates of the voxel. Fixed for the voxel's lifetime.
    pub position: Point3<i32>,
    /// Material of the voxel.
    pub block: Block,
}

impl Voxel {
    /// Creates a voxel of the given type at a world position.
    pub fn new(position: Point3<i32>, block_type: BlockType) -> Self {
        Voxel {
            position,
            block: Block::new(block_type),
        }
    }

    /// The key this voxel is stored under.
    pub fn key(&self) -> VoxelKey {
        VoxelKey::from(self.position)
    }
}
