//! Texture atlas addressing.
//!
//! Faces sample one square tile of a shared atlas. This module turns a tile
//! index into a UV rectangle and picks one of four 90° rotations of that
//! rectangle per face, so repeated tiles don't line up into a visible grid.

use cgmath::Point3;

/// UV bounds of one atlas tile after the anti-bleed inset.
///
/// `v0` is the top edge of the tile (larger v), `v1` the bottom edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UvRect {
    pub u0: f32,
    pub u1: f32,
    pub v0: f32,
    pub v1: f32,
}

/// A square texture atlas with `tiles_per_row` tiles on each axis.
#[derive(Copy, Clone, Debug)]
pub struct TextureAtlas {
    tiles_per_row: u32,
    /// Inset applied to every tile edge, in UV units, to keep bilinear
    /// filtering from sampling the neighboring tile.
    jitter: f32,
}

impl TextureAtlas {
    pub fn new(tiles_per_row: u32, jitter: f32) -> Self {
        debug_assert!(tiles_per_row > 0);
        TextureAtlas {
            tiles_per_row,
            jitter,
        }
    }

    pub fn tiles_per_row(&self) -> u32 {
        self.tiles_per_row
    }

    /// UV rectangle of a tile. Tiles are numbered row by row from the top
    /// left; indices past the last tile wrap around.
    pub fn tile_rect(&self, tile_index: u32) -> UvRect {
        let per_row = u64::from(self.tiles_per_row);
        let tile_index = u64::from(tile_index) % (per_row * per_row);
        let size = per_row as f32;
        let column = (tile_index % per_row) as f32;
        let row = (tile_index / per_row) as f32;

        UvRect {
            u0: column / size + self.jitter,
            u1: (column + 1.0) / size - self.jitter,
            v0: 1.0 - row / size - self.jitter,
            v1: 1.0 - (row + 1.0) / size + self.jitter,
        }
    }
}

/// One of the four corner assignments of a tile onto a quad.
///
/// Corners are listed in quad vertex order (v0, v1, v2, v3), where v0 and v1
/// are diagonally opposite.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UvRotation {
    R0,
    R1,
    R2,
    R3,
}

impl UvRotation {
    pub const ALL: [UvRotation; 4] = [UvRotation::R0, UvRotation::R1, UvRotation::R2, UvRotation::R3];

    /// Texture coordinates for the four quad vertices.
    pub fn corners(self, rect: &UvRect) -> [[f32; 2]; 4] {
        let UvRect { u0, u1, v0, v1 } = *rect;
        match self {
            UvRotation::R0 => [[u0, v0], [u1, v1], [u1, v0], [u0, v1]],
            UvRotation::R1 => [[u1, v1], [u1, v0], [u0, v1], [u0, v0]],
            UvRotation::R2 => [[u1, v0], [u0, v1], [u0, v0], [u1, v1]],
            UvRotation::R3 => [[u0, v1], [u0, v0], [u1, v1], [u1, v0]],
        }
    }

    /// Rotations for the six faces of the voxel at `position`, in
    /// `BlockSide` order.
    ///
    /// The same position always yields the same rotations.
    pub fn for_voxel(position: Point3<i32>) -> [UvRotation; 6] {
        let mut rng = fastrand::Rng::with_seed(coordinate_seed(position));
        std::array::from_fn(|_| Self::ALL[rng.usize(..Self::ALL.len())])
    }
}

/// Stable 64-bit hash of a voxel coordinate.
///
/// Each axis is multiplied by its own odd constant before mixing, so permuted
/// coordinates such as (1, 2, 3) and (2, 1, 3) get unrelated seeds.
fn coordinate_seed(position: Point3<i32>) -> u64 {
    let mut hash = (position.x as u32 as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    hash ^= (position.y as u32 as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
    hash = hash.rotate_left(31);
    hash ^= (position.z as u32 as u64).wrapping_mul(0x1656_67B1_9E37_79F9);

    // splitmix64 finalizer
    hash ^= hash >> 30;
    hash = hash.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    hash ^= hash >> 27;
    hash = hash.wrapping_mul(0x94D0_49BB_1331_11EB);
    hash ^ (hash >> 31)
}
