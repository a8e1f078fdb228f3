//! # Core Module
//!
//! Shared-ownership primitives used across the engine.
//!
//! ## Key Components
//! - `MtResource`: Thread-safe reference-counted resource with read-write locking
//!
//! ## Usage
//! ```rust
//! use voxel_terrain::core::MtResource;
//!
//! let shared = MtResource::new(String::from("world"));
//! let reader = shared.clone();
//! assert_eq!(reader.get().as_str(), "world");
//! ```

pub mod mt_resource;

pub use mt_resource::MtResource;
