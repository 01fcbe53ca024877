//! Block texture synthesis
//!
//! One color rule per [`TextureKind`], applied independently to every pixel of
//! a fixed 64x64 canvas, plus the PPM writer the renderer reads.

pub mod kind;
pub mod pixels;
pub mod ppm;

use image::RgbImage;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::constants::{TEXTURE_HEIGHT, TEXTURE_WIDTH};

pub use kind::TextureKind;
pub use pixels::{clamp, pixel_color};
pub use ppm::{encode_ppm, ppm_header, write_ppm};

/// Generate a full texture of the given kind
pub fn generate_texture<R: Rng + ?Sized>(kind: TextureKind, rng: &mut R) -> RgbImage {
    let mut img = RgbImage::new(TEXTURE_WIDTH, TEXTURE_HEIGHT);

    for y in 0..TEXTURE_HEIGHT {
        for x in 0..TEXTURE_WIDTH {
            img.put_pixel(x, y, pixel_color(kind, x, y, rng));
        }
    }

    img
}

/// RNG for one kind: derived from `seed` when given, otherwise fresh entropy.
///
/// Each kind gets its own stream so output does not depend on generation order.
pub fn rng_for(kind: TextureKind, seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(kind.index() as u64)),
        None => StdRng::from_entropy(),
    }
}
