//! Seeded 2D height noise.

use noise::{NoiseFn, SuperSimplex};

/// Deterministic, smooth 2D noise used for terrain height.
///
/// Two fields built from the same seed return identical values for identical
/// inputs, which is what lets neighboring chunks agree on their shared
/// boundary without talking to each other.
#[derive(Clone)]
pub struct NoiseField {
    seed: i64,
    noise: SuperSimplex,
}

impl NoiseField {
    pub fn new(seed: i64) -> Self {
        NoiseField {
            seed,
            noise: SuperSimplex::new(Self::fold_seed(seed)),
        }
    }

    /// Folds the 64-bit world seed into the 32-bit seed the noise takes.
    fn fold_seed(seed: i64) -> u32 {
        let bits = seed as u64;
        (bits ^ (bits >> 32)) as u32
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Samples the field at (u, v), roughly within [-1, 1].
    ///
    /// `u` and `v` are world coordinates already divided by the terrain
    /// wavelength.
    pub fn height(&self, u: f64, v: f64) -> f64 {
        self.noise.get([u, v])
    }

    /// Integer surface height of a world column.
    pub fn column_height(&self, world_x: i32, world_z: i32, wavelength: f64, max_height: f64) -> i32 {
        let sample = self.height(world_x as f64 / wavelength, world_z as f64 / wavelength);
        (sample * max_height).floor() as i32
    }
}
