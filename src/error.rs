//! Errors raised while generating and writing textures

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// Output directory could not be created. Nothing has been written yet.
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A texture file could not be written. Files written before it stay on disk.
    #[error("failed to write texture {}: {source}", .path.display())]
    WriteTexture {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("pixel data has {actual} bytes, expected {expected}")]
    PixelCount { expected: usize, actual: usize },

    #[error("failed to start worker pool: {0}")]
    ThreadPool(String),
}
