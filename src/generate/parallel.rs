//! Parallel texture generation
//!
//! Uses a dedicated Rayon pool so the thread count follows the config rather
//! than the global pool. Each kind draws from its own RNG stream, so seeded
//! output matches a sequential run byte for byte.

use image::RgbImage;
use rayon::prelude::*;

use crate::error::GenerateError;
use crate::texture::{TextureKind, generate_texture, rng_for};

/// Generate every kind on `threads` workers.
///
/// Returns textures in the same order as `kinds`.
pub fn generate_parallel(
    kinds: &[TextureKind],
    seed: Option<u64>,
    threads: usize,
) -> Result<Vec<(TextureKind, RgbImage)>, GenerateError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| GenerateError::ThreadPool(e.to_string()))?;

    Ok(pool.install(|| {
        kinds
            .par_iter()
            .map(|&kind| (kind, generate_texture(kind, &mut rng_for(kind, seed))))
            .collect()
    }))
}
