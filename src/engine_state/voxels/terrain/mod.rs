//! # Terrain
//!
//! Procedural terrain: a seeded height field and the generator that turns it
//! into chunk voxels.

pub mod generator;
pub mod noise_field;

pub use generator::TerrainGenerator;
pub use noise_field::NoiseField;
