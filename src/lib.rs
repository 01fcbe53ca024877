//! Blocktex - procedural block textures for the voxel renderer
//!
//! Generates a fixed set of 64x64 block textures (grass, dirt, stone, wood,
//! leaves, water, sand, three ores and air) and writes each one as a binary
//! PPM file the renderer loads at startup.

pub mod config;
pub mod constants;
pub mod error;
pub mod generate;
pub mod texture;

// Re-export commonly used types for convenience
pub use config::{Command, GenerateConfig};
pub use error::GenerateError;
pub use generate::{GenerateSummary, ensure_output_dir, run};
pub use texture::{TextureKind, generate_texture, rng_for, write_ppm};
