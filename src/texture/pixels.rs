//! Per-pixel color rules for each block texture
//!
//! Every rule samples independent uniform integers within fixed ranges. Some
//! are shifted by coordinate terms (stone cracks, wood bands, water waves).
//! No rule looks at neighboring pixels.

use image::Rgb;
use rand::Rng;

use crate::constants::*;

use super::kind::TextureKind;

/// Clamp an intermediate channel value into `[min, max]` and narrow it to a byte.
///
/// Callers pass bounds inside `0..=255`.
pub fn clamp(value: i32, min: i32, max: i32) -> u8 {
    value.clamp(min, max) as u8
}

/// Uniform integer in `[-spread, spread]`
fn jitter<R: Rng + ?Sized>(rng: &mut R, spread: i32) -> i32 {
    rng.gen_range(-spread..=spread)
}

/// Color of the pixel at `(x, y)` for the given kind
pub fn pixel_color<R: Rng + ?Sized>(kind: TextureKind, x: u32, y: u32, rng: &mut R) -> Rgb<u8> {
    match kind {
        TextureKind::Grass => grass_pixel(rng),
        TextureKind::Dirt => dirt_pixel(rng),
        TextureKind::Stone => stone_pixel(x, y, rng),
        TextureKind::Wood => wood_pixel(y, rng),
        TextureKind::Leaves => leaves_pixel(rng),
        TextureKind::Water => water_pixel(x, rng),
        TextureKind::Sand => sand_pixel(rng),
        TextureKind::CoalOre => ore_pixel(COAL_ORE_COLOR, rng),
        TextureKind::IronOre => ore_pixel(IRON_ORE_COLOR, rng),
        TextureKind::DiamondOre => ore_pixel(DIAMOND_ORE_COLOR, rng),
        TextureKind::Air => Rgb(AIR_COLOR),
    }
}

/// Grass: bright green
fn grass_pixel<R: Rng + ?Sized>(rng: &mut R) -> Rgb<u8> {
    Rgb([
        rng.gen_range(20..=60),
        rng.gen_range(120..=180),
        rng.gen_range(20..=80),
    ])
}

/// Dirt: brown, green and blue follow a shared base
fn dirt_pixel<R: Rng + ?Sized>(rng: &mut R) -> Rgb<u8> {
    let base: i32 = rng.gen_range(80..=140);
    let r = base + jitter(rng, 20);
    let g = base * 6 / 10 + jitter(rng, 15);
    let b = base * 3 / 10 + jitter(rng, 10);
    Rgb([clamp(r, 0, 255), clamp(g, 0, 255), clamp(b, 0, 255)])
}

/// True where the diagonal crack pattern darkens stone
pub fn is_stone_crack(x: u32, y: u32) -> bool {
    (x + y) % STONE_CRACK_PERIOD < STONE_CRACK_WIDTH
}

/// Stone: neutral gray, darker along diagonal cracks
fn stone_pixel<R: Rng + ?Sized>(x: u32, y: u32, rng: &mut R) -> Rgb<u8> {
    let gray: u8 = if is_stone_crack(x, y) {
        rng.gen_range(40..=80)
    } else {
        rng.gen_range(80..=160)
    };
    Rgb([gray, gray, gray])
}

/// Wood: warm brown, brightening every row until the band wraps
fn wood_pixel<R: Rng + ?Sized>(y: u32, rng: &mut R) -> Rgb<u8> {
    let base = 100 + (y % WOOD_BAND_PERIOD) as i32 + jitter(rng, 15);
    let r = base + jitter(rng, 10);
    let g = base * 6 / 10 + jitter(rng, 8);
    let b = base * 3 / 10 + jitter(rng, 5);
    Rgb([clamp(r, 50, 200), clamp(g, 30, 120), clamp(b, 10, 60)])
}

/// Leaves: darker green than grass
fn leaves_pixel<R: Rng + ?Sized>(rng: &mut R) -> Rgb<u8> {
    Rgb([
        rng.gen_range(10..=50),
        rng.gen_range(80..=150),
        rng.gen_range(10..=60),
    ])
}

/// Brightness offset of the water wave at column `x`, in `[0, 20]`.
///
/// Triangle wave with a period of 20 columns, 20 at the edges of each period
/// and 0 in the middle.
pub fn water_wave(x: u32) -> i32 {
    let phase = (x as f64 * 0.1) % 2.0 - 1.0;
    (WATER_WAVE_AMPLITUDE * phase.abs()) as i32
}

/// Water: blue, green and blue lifted by the wave
fn water_pixel<R: Rng + ?Sized>(x: u32, rng: &mut R) -> Rgb<u8> {
    let wave = water_wave(x);
    let r: i32 = rng.gen_range(20..=60);
    let g = rng.gen_range(100..=150) + wave;
    let b = rng.gen_range(180..=240) + wave;
    Rgb([clamp(r, 0, 255), clamp(g, 0, 255), clamp(b, 0, 255)])
}

/// Sand: pale yellow
fn sand_pixel<R: Rng + ?Sized>(rng: &mut R) -> Rgb<u8> {
    let base: i32 = rng.gen_range(200..=240);
    let g = base * 9 / 10 + jitter(rng, 10);
    let b = base * 7 / 10 + jitter(rng, 15);
    Rgb([clamp(base, 180, 255), clamp(g, 160, 255), clamp(b, 120, 200)])
}

/// Ore: stone gray with a chance of an ore spot
fn ore_pixel<R: Rng + ?Sized>(ore_color: [u8; 3], rng: &mut R) -> Rgb<u8> {
    if rng.gen_range(1..=100) <= ORE_SPOT_CHANCE {
        let [r, g, b] = ore_color.map(|c| clamp(c as i32 + jitter(rng, ORE_JITTER), 0, 255));
        return Rgb([r, g, b]);
    }
    let gray: u8 = rng.gen_range(80..=140);
    Rgb([gray, gray, gray])
}
