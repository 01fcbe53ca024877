//! Texture kind definitions
//!
//! The renderer expects exactly these block textures, each at a fixed file name.

use serde::{Deserialize, Serialize};

use crate::constants::{COAL_ORE_COLOR, DIAMOND_ORE_COLOR, IRON_ORE_COLOR, TEXTURE_EXTENSION};

/// Block texture type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureKind {
    Grass,
    Dirt,
    /// Gray stone with diagonal cracks
    Stone,
    /// Horizontal grain bands
    Wood,
    Leaves,
    /// Blue with a triangle wave along x
    Water,
    Sand,
    CoalOre,
    IronOre,
    DiamondOre,
    /// Flat light blue, no randomness
    Air,
}

impl TextureKind {
    /// Every kind, in the order textures are generated and written
    pub const ALL: [TextureKind; 11] = [
        TextureKind::Grass,
        TextureKind::Dirt,
        TextureKind::Stone,
        TextureKind::Wood,
        TextureKind::Leaves,
        TextureKind::Water,
        TextureKind::Sand,
        TextureKind::CoalOre,
        TextureKind::IronOre,
        TextureKind::DiamondOre,
        TextureKind::Air,
    ];

    /// Parse kind from string (case-insensitive, `-`/`_`/space interchangeable)
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "grass" => Some(TextureKind::Grass),
            "dirt" => Some(TextureKind::Dirt),
            "stone" => Some(TextureKind::Stone),
            "wood" => Some(TextureKind::Wood),
            "leaves" => Some(TextureKind::Leaves),
            "water" => Some(TextureKind::Water),
            "sand" => Some(TextureKind::Sand),
            "coal_ore" | "coal" => Some(TextureKind::CoalOre),
            "iron_ore" | "iron" => Some(TextureKind::IronOre),
            "diamond_ore" | "diamond" => Some(TextureKind::DiamondOre),
            "air" => Some(TextureKind::Air),
            _ => None,
        }
    }

    /// Name used in file names and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            TextureKind::Grass => "grass",
            TextureKind::Dirt => "dirt",
            TextureKind::Stone => "stone",
            TextureKind::Wood => "wood",
            TextureKind::Leaves => "leaves",
            TextureKind::Water => "water",
            TextureKind::Sand => "sand",
            TextureKind::CoalOre => "coal_ore",
            TextureKind::IronOre => "iron_ore",
            TextureKind::DiamondOre => "diamond_ore",
            TextureKind::Air => "air",
        }
    }

    /// Output file name, e.g. `coal_ore.ppm`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name(), TEXTURE_EXTENSION)
    }

    /// Position in [`TextureKind::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Base color of ore spots, `None` for non-ore kinds
    pub fn ore_color(&self) -> Option<[u8; 3]> {
        match self {
            TextureKind::CoalOre => Some(COAL_ORE_COLOR),
            TextureKind::IronOre => Some(IRON_ORE_COLOR),
            TextureKind::DiamondOre => Some(DIAMOND_ORE_COLOR),
            _ => None,
        }
    }

    pub fn is_ore(&self) -> bool {
        self.ore_color().is_some()
    }
}

impl std::fmt::Display for TextureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
