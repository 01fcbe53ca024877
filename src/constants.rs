//! Fixed values for block texture generation
//!
//! Canvas size and palette are not configurable; everything the generators
//! and the PPM writer agree on lives here.

// =============================================================================
// CANVAS
// =============================================================================

/// Width of every generated texture in pixels
pub const TEXTURE_WIDTH: u32 = 64;
/// Height of every generated texture in pixels
pub const TEXTURE_HEIGHT: u32 = 64;
/// Max channel value written into the PPM header
pub const MAX_CHANNEL: u8 = 255;
/// Bytes per pixel (R, G, B)
pub const CHANNELS: usize = 3;

// =============================================================================
// OUTPUT
// =============================================================================

/// Directory the renderer reads textures from
pub const DEFAULT_OUTPUT_DIR: &str = "assets/textures";
/// File extension of every written texture
pub const TEXTURE_EXTENSION: &str = "ppm";

// =============================================================================
// PALETTE
// =============================================================================

/// Air is a flat light blue
pub const AIR_COLOR: [u8; 3] = [200, 200, 255];

pub const COAL_ORE_COLOR: [u8; 3] = [40, 40, 40]; // Dark coal
pub const IRON_ORE_COLOR: [u8; 3] = [184, 115, 51]; // Brown iron
pub const DIAMOND_ORE_COLOR: [u8; 3] = [185, 242, 255]; // Light blue diamond

/// Percent chance (out of 100) that an ore pixel becomes an ore spot
pub const ORE_SPOT_CHANCE: u32 = 15;
/// Per-channel jitter applied to ore spot colors
pub const ORE_JITTER: i32 = 20;

// Stone cracks: pixels where (x + y) % STONE_CRACK_PERIOD < STONE_CRACK_WIDTH
pub const STONE_CRACK_PERIOD: u32 = 11;
pub const STONE_CRACK_WIDTH: u32 = 2;

/// Rows per wood grain band
pub const WOOD_BAND_PERIOD: u32 = 30;

/// Brightness added at the crest of a water wave
pub const WATER_WAVE_AMPLITUDE: f64 = 20.0;
