//! # Engine Configuration
//!
//! Startup constants for terrain generation, meshing and streaming. A config
//! is either built in code (`EngineConfig::default()` plus field overrides) or
//! read from a JSON file; missing fields fall back to their defaults.
//!
//! Configurations are validated once, when the engine is created. Invalid
//! values are rejected, never clamped.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::engine_state::voxels::chunk::CHUNK_DIMENSION;

/// Largest supported atlas, in tiles per row.
pub const MAX_ATLAS_TILES_PER_ROW: u32 = 4096;

/// Largest terrain amplitude, floor depth or flat surface height, in voxels.
pub const MAX_TERRAIN_HEIGHT: i32 = 1024;

/// Errors raised while loading or validating an [`EngineConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("chunk size must be positive, got {0}")]
    InvalidChunkSize(i32),

    #[error("load radius must be positive, got {0}")]
    InvalidLoadRadius(i32),

    #[error("terrain wavelength must be a positive finite number, got {0}")]
    InvalidWavelength(f64),

    #[error("max height must be finite and at most {limit} in magnitude, got {0}", limit = MAX_TERRAIN_HEIGHT)]
    InvalidMaxHeight(f64),

    #[error("floor must be at most {limit} in magnitude, got {0}", limit = MAX_TERRAIN_HEIGHT)]
    InvalidFloor(i32),

    #[error("flat terrain height must be at most {limit} in magnitude, got {0}", limit = MAX_TERRAIN_HEIGHT)]
    InvalidFlatHeight(i32),

    #[error("tile size must be a positive finite number, got {0}")]
    InvalidTileSize(f32),

    #[error("texture atlas must have 1 to {limit} tiles per row, got {0}", limit = MAX_ATLAS_TILES_PER_ROW)]
    InvalidAtlas(u32),

    #[error("uv jitter {0} must be non-negative and smaller than half an atlas tile")]
    InvalidJitter(f32),

    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How the height of each terrain column is chosen.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TerrainStrategy {
    /// Height follows the seeded noise field.
    #[default]
    Noise,
    /// Every column has its surface at the same height.
    Flat { height: i32 },
}

/// Startup configuration for the engine.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Side length of a chunk in voxels.
    pub chunk_size: i32,
    /// Number of chunks loaded on each side of the observer's chunk.
    pub load_radius: i32,
    /// World seed.
    pub seed: i64,
    /// World distance covered by one unit of noise input.
    pub wavelength: f64,
    /// Scale applied to the noise value to get a surface height in voxels.
    pub max_height: f64,
    /// Lowest Y filled under the surface, inclusive.
    pub floor: i32,
    /// Render-space size of one voxel.
    pub tile_size: f32,
    /// Number of tiles per row (and column) of the texture atlas.
    pub texture_tiles_per_row: u32,
    /// Inward inset applied to every atlas rectangle, in UV units.
    pub uv_jitter: f32,
    pub terrain: TerrainStrategy,
    /// Re-mesh loaded neighbors of freshly generated chunks so their shared
    /// boundary faces get culled.
    pub remesh_neighbors: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            chunk_size: CHUNK_DIMENSION,
            load_radius: 4,
            seed: 0,
            wavelength: 128.0,
            max_height: 10.0,
            floor: -1,
            tile_size: 0.5,
            texture_tiles_per_row: 16,
            uv_jitter: 1.0 / 256.0,
            terrain: TerrainStrategy::Noise,
            remesh_neighbors: true,
        }
    }
}

impl EngineConfig {
    /// Reads a JSON config file. The result still has to be validated.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Checks every value the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size <= 0 {
            return Err(ConfigError::InvalidChunkSize(self.chunk_size));
        }
        if self.load_radius <= 0 {
            return Err(ConfigError::InvalidLoadRadius(self.load_radius));
        }
        if !(self.wavelength.is_finite() && self.wavelength > 0.0) {
            return Err(ConfigError::InvalidWavelength(self.wavelength));
        }
        if !(self.max_height.is_finite() && self.max_height.abs() <= MAX_TERRAIN_HEIGHT as f64) {
            return Err(ConfigError::InvalidMaxHeight(self.max_height));
        }
        if !(-MAX_TERRAIN_HEIGHT..=MAX_TERRAIN_HEIGHT).contains(&self.floor) {
            return Err(ConfigError::InvalidFloor(self.floor));
        }
        if let TerrainStrategy::Flat { height } = self.terrain {
            if !(-MAX_TERRAIN_HEIGHT..=MAX_TERRAIN_HEIGHT).contains(&height) {
                return Err(ConfigError::InvalidFlatHeight(height));
            }
        }
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(ConfigError::InvalidTileSize(self.tile_size));
        }
        if !(1..=MAX_ATLAS_TILES_PER_ROW).contains(&self.texture_tiles_per_row) {
            return Err(ConfigError::InvalidAtlas(self.texture_tiles_per_row));
        }
        let half_tile = 0.5 / self.texture_tiles_per_row as f32;
        if !(self.uv_jitter >= 0.0 && self.uv_jitter < half_tile) {
            return Err(ConfigError::InvalidJitter(self.uv_jitter));
        }
        Ok(())
    }

    /// Render-space width of one chunk.
    pub fn chunk_world_size(&self) -> f64 {
        self.chunk_size as f64 * self.tile_size as f64
    }
}
