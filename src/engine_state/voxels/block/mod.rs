//! # Block Module
//!
//! Block type definitions, block faces and the atlas lookup that maps a
//! block type and face to a texture tile.

use block_side::BlockSide;
use block_type::BlockType;

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent block types in memory.
pub type BlockTypeSize = u8;

/// Maps each block type to its texture atlas tile for each face.
///
/// The outer array is indexed by `BlockType` as a `usize`.
/// The inner array is indexed by `BlockSide`, in the order:
/// [Top, Bottom, Left, Right, Front, Back]
pub static BLOCK_TYPE_TO_TEXTURE_INDICES: [[u32; 6]; 2] = [
    [0, 1, 1, 1, 1, 1], // GRASS (top: 0, everything else: 1)
    [1, 1, 1, 1, 1, 1], // DIRT (all sides use texture 1)
];

/// Texture used for a block type id that is not in the table.
const FALLBACK_TEXTURE_INDEX: u32 = 0;

/// The material of a single voxel.
///
/// The `#[repr(C)]` attribute keeps the layout stable so voxels can be
/// copied into GPU-side buffers by a renderer as-is.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq, Eq, Hash)]
pub struct Block {
    /// The type of this block, encoded as a `BlockTypeSize` for compact storage.
    pub block_type: BlockTypeSize,
}

impl Block {
    /// Creates a new block of the specified type.
    pub fn new(block_type: BlockType) -> Self {
        Block {
            block_type: block_type.type_id(),
        }
    }

    /// Decodes the stored id, if it names a known type.
    pub fn block_type(&self) -> Option<BlockType> {
        BlockType::from_type_id(self.block_type)
    }

    /// Atlas tile to draw on the given side of this block.
    pub fn texture_index(&self, side: BlockSide) -> u32 {
        BLOCK_TYPE_TO_TEXTURE_INDICES
            .get(self.block_type as usize)
            .map(|indices| indices[side as usize])
            .unwrap_or(FALLBACK_TEXTURE_INDEX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grass_has_distinct_top() {
        let grass = Block::new(BlockType::GRASS);
        assert_eq!(grass.texture_index(BlockSide::TOP), 0);
        assert_eq!(grass.texture_index(BlockSide::BOTTOM), 1);
        assert_eq!(grass.texture_index(BlockSide::FRONT), 1);
    }

    #[test]
    fn dirt_is_uniform() {
        let dirt = Block::new(BlockType::DIRT);
        for side in BlockSide::all() {
            assert_eq!(dirt.texture_index(side), 1);
        }
    }

    #[test]
    fn unknown_type_uses_fallback_tile() {
        let block = Block { block_type: 42 };
        assert_eq!(block.block_type(), None);
        assert_eq!(block.texture_index(BlockSide::TOP), FALLBACK_TEXTURE_INDEX);
    }
}
