//! The rectangle of chunk coordinates that must be loaded around an observer.

use crate::engine_state::voxels::chunk::ChunkId;

/// Inclusive range of chunk coordinates on both horizontal axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChunkWindow {
    pub min_x: i32,
    pub max_x: i32,
    pub min_z: i32,
    pub max_z: i32,
}

impl ChunkWindow {
    /// The window of `radius` chunks around a render-space observer position.
    ///
    /// `chunk_world_size` is the render-space width of one chunk.
    pub fn around(observer_x: f64, observer_z: f64, radius: i32, chunk_world_size: f64) -> Self {
        let reach = radius as f64 * chunk_world_size;
        let to_chunk = |coordinate: f64| (coordinate / chunk_world_size).floor() as i32;

        ChunkWindow {
            min_x: to_chunk(observer_x - reach),
            max_x: to_chunk(observer_x + reach),
            min_z: to_chunk(observer_z - reach),
            max_z: to_chunk(observer_z + reach),
        }
    }

    pub fn contains(&self, id: ChunkId) -> bool {
        (self.min_x..=self.max_x).contains(&id.x) && (self.min_z..=self.max_z).contains(&id.z)
    }

    /// Every chunk id in the window, X-major.
    pub fn ids(&self) -> impl Iterator<Item = ChunkId> {
        let (min_z, max_z) = (self.min_z, self.max_z);
        (self.min_x..=self.max_x).flat_map(move |x| (min_z..=max_z).map(move |z| ChunkId::new(x, z)))
    }

    pub fn len(&self) -> usize {
        let span = |min: i32, max: i32| (i64::from(max) - i64::from(min) + 1).max(0) as usize;
        span(self.min_x, self.max_x) * span(self.min_z, self.max_z)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
