//! Chunk coordinates and their textual identifier.

use std::fmt;

/// Position of a chunk in chunk coordinates (not voxel coordinates).
///
/// The `Display` form, `"{x},{z}"`, is the identifier handed to render sinks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkId {
    pub x: i32,
    pub z: i32,
}

impl ChunkId {
    pub fn new(x: i32, z: i32) -> Self {
        ChunkId { x, z }
    }

    /// The chunk containing the voxel column (world_x, world_z).
    ///
    /// Uses floored division so negative coordinates land in the chunk
    /// below/left of the origin.
    pub fn containing(world_x: i32, world_z: i32, chunk_size: i32) -> Self {
        ChunkId {
            x: world_x.div_euclid(chunk_size),
            z: world_z.div_euclid(chunk_size),
        }
    }

    /// World coordinate of the chunk's lowest X and Z column.
    ///
    /// `None` when the chunk's columns, plus the neighboring column on each
    /// side, do not all fit in `i32` voxel coordinates. Such chunks are never
    /// loaded.
    pub fn world_origin(&self, chunk_size: i32) -> Option<(i32, i32)> {
        let axis = |chunk: i32| {
            let origin = chunk.checked_mul(chunk_size)?;
            origin.checked_sub(1)?;
            origin.checked_add(chunk_size)?;
            Some(origin)
        };
        Some((axis(self.x)?, axis(self.z)?))
    }

    pub fn is_addressable(&self, chunk_size: i32) -> bool {
        self.world_origin(chunk_size).is_some()
    }

    /// Name the geometry of this chunk is tagged with.
    pub fn mesh_name(&self) -> String {
        format!("CHUNK_{}", self)
    }

    /// The four chunks sharing an edge with this one.
    pub fn edge_neighbors(&self) -> [ChunkId; 4] {
        [
            ChunkId::new(self.x - 1, self.z),
            ChunkId::new(self.x + 1, self.z),
            ChunkId::new(self.x, self.z - 1),
            ChunkId::new(self.x, self.z + 1),
        ]
    }
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containing_floors_negative_coordinates() {
        assert_eq!(ChunkId::containing(0, 0, 32), ChunkId::new(0, 0));
        assert_eq!(ChunkId::containing(31, 31, 32), ChunkId::new(0, 0));
        assert_eq!(ChunkId::containing(32, 32, 32), ChunkId::new(1, 1));
        assert_eq!(ChunkId::containing(-1, -1, 32), ChunkId::new(-1, -1));
        assert_eq!(ChunkId::containing(-32, -33, 32), ChunkId::new(-1, -2));
    }

    #[test]
    fn origins_stop_at_the_edge_of_voxel_space() {
        assert_eq!(ChunkId::new(-1, 2).world_origin(32), Some((-32, 64)));

        let last = i32::MAX / 32;
        assert_eq!(ChunkId::new(last - 1, 0).world_origin(32), Some((2_147_483_584, 0)));
        assert!(!ChunkId::new(last, 0).is_addressable(32));

        let first = i32::MIN / 32;
        assert!(ChunkId::new(0, first + 1).is_addressable(32));
        assert!(!ChunkId::new(0, first).is_addressable(32));
        assert!(!ChunkId::new(75_000_000, 0).is_addressable(32));
    }

    #[test]
    fn textual_identifiers() {
        let id = ChunkId::new(-3, 7);
        assert_eq!(id.to_string(), "-3,7");
        assert_eq!(id.mesh_name(), "CHUNK_-3,7");
    }
}
