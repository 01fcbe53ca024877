//! Texture generation run
//!
//! Creates the output directory, then generates and writes each requested
//! kind in canonical order. A failed write stops the run; files written
//! before it are left in place.

pub mod parallel;

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::config::GenerateConfig;
use crate::error::GenerateError;
use crate::texture::{TextureKind, generate_texture, rng_for, write_ppm};

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub output_dir: PathBuf,
    /// Files in the order they were written
    pub written: Vec<PathBuf>,
    pub seed: Option<u64>,
}

/// Create the output directory (and parents) if missing
pub fn ensure_output_dir(dir: &Path) -> Result<(), GenerateError> {
    fs::create_dir_all(dir).map_err(|source| GenerateError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    log::info!("Output directory ready: {}", dir.display());
    Ok(())
}

/// Generate and write every kind in `config`
pub fn run(config: &GenerateConfig) -> Result<GenerateSummary, GenerateError> {
    if !config.quiet {
        println!("Generating block textures...");
        println!("  Output: {}", config.output_dir.display());
        match config.seed {
            Some(seed) => println!("  Seed: {}", seed),
            None => println!("  Seed: random"),
        }
        println!("  Textures: {}", config.kinds.len());
    }

    ensure_output_dir(&config.output_dir)?;

    let mut written = Vec::with_capacity(config.kinds.len());
    if config.parallel > 0 {
        log::debug!("Generating on {} threads", config.parallel);
        let textures = parallel::generate_parallel(&config.kinds, config.seed, config.parallel)?;
        for (kind, texture) in &textures {
            written.push(write_texture(config, *kind, texture)?);
        }
    } else {
        for &kind in &config.kinds {
            let texture = generate_texture(kind, &mut rng_for(kind, config.seed));
            written.push(write_texture(config, kind, &texture)?);
        }
    }

    if !config.quiet {
        println!(
            "\nGenerated {} textures in {}",
            written.len(),
            config.output_dir.display()
        );
    }

    Ok(GenerateSummary {
        output_dir: config.output_dir.clone(),
        written,
        seed: config.seed,
    })
}

fn write_texture(
    config: &GenerateConfig,
    kind: TextureKind,
    texture: &RgbImage,
) -> Result<PathBuf, GenerateError> {
    let path = config.path_for(kind);
    write_ppm(&path, texture)?;
    log::debug!(
        "{}: {}x{} ({} pixel bytes)",
        kind,
        texture.width(),
        texture.height(),
        texture.as_raw().len()
    );
    if !config.quiet {
        println!("  Created: {}", path.display());
    }
    Ok(path)
}
