//! # Block Type Module
//!
//! The material tags a terrain voxel can carry. Every stored voxel is solid;
//! absence of a voxel is what the rest of the engine treats as air.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use super::BlockTypeSize;

/// Enumerates all voxel materials produced by terrain generation.
///
/// The `FromPrimitive` derive allows conversion back from the compact
/// `BlockTypeSize` stored in each voxel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// The top voxel of every terrain column.
    GRASS = 0,

    /// Fill placed under the surface voxel down to the terrain floor.
    DIRT = 1,
}

impl BlockType {
    /// Converts a `BlockTypeSize` back to a `BlockType`.
    ///
    /// # Returns
    /// `None` if the id does not name a known block type.
    pub fn from_type_id(btype: BlockTypeSize) -> Option<Self> {
        FromPrimitive::from_u8(btype)
    }

    /// The compact id stored inside a voxel.
    pub fn type_id(self) -> BlockTypeSize {
        self as BlockTypeSize
    }
}
