//! # Voxel Terrain Demo Entry Point
//!
//! Runs the library's headless streaming demo.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release
//! VOXEL_TERRAIN_CONFIG=terrain.json RUST_LOG=debug cargo run
//! ```

fn main() {
    if let Err(error) = voxel_terrain::run() {
        eprintln!("voxel-terrain: {error}");
        std::process::exit(1);
    }
}
