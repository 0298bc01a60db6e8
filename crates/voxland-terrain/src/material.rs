//! Material categories, the voxel classifier, and the renderer palette.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MaterialCategory
// ---------------------------------------------------------------------------

/// Closed set of voxel materials. Every voxel maps to exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialCategory {
    Grass,
    Dirt,
    Stone,
    DeepStone,
    Water,
    Wood,
    Leaves,
    Snow,
}

impl MaterialCategory {
    /// Number of categories.
    pub const COUNT: usize = 8;

    /// Every category, in declaration order.
    pub const ALL: [MaterialCategory; Self::COUNT] = [
        Self::Grass,
        Self::Dirt,
        Self::Stone,
        Self::DeepStone,
        Self::Water,
        Self::Wood,
        Self::Leaves,
        Self::Snow,
    ];

    /// Dense index in `0..COUNT`, matching [`MaterialCategory::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Grass => "grass",
            Self::Dirt => "dirt",
            Self::Stone => "stone",
            Self::DeepStone => "deep_stone",
            Self::Water => "water",
            Self::Wood => "wood",
            Self::Leaves => "leaves",
            Self::Snow => "snow",
        }
    }

    /// How the renderer should draw this category.
    pub fn appearance(self) -> MaterialAppearance {
        match self {
            Self::Grass => MaterialAppearance::opaque(0x4a7c59),
            Self::Dirt => MaterialAppearance::opaque(0x8b6914),
            Self::Stone => MaterialAppearance::opaque(0x666666),
            Self::DeepStone => MaterialAppearance::opaque(0x444444),
            Self::Water => MaterialAppearance {
                color: 0x4a90e2,
                opacity: 0.8,
                transparent: true,
            },
            Self::Wood => MaterialAppearance::opaque(0x8b4513),
            Self::Leaves => MaterialAppearance::opaque(0x228b22),
            Self::Snow => MaterialAppearance::opaque(0xffffff),
        }
    }
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// MaterialAppearance
// ---------------------------------------------------------------------------

/// Renderer-side description of a category's material (diffuse, unlit by PBR).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialAppearance {
    /// sRGB color as `0xRRGGBB`.
    pub color: u32,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Whether the material needs alpha blending.
    pub transparent: bool,
}

impl MaterialAppearance {
    const fn opaque(color: u32) -> Self {
        Self {
            color,
            opacity: 1.0,
            transparent: false,
        }
    }

    /// Color as normalized RGBA, alpha taken from the opacity.
    pub fn rgba(&self) -> [f32; 4] {
        let channel = |shift: u32| ((self.color >> shift) & 0xff) as f32 / 255.0;
        [channel(16), channel(8), channel(0), self.opacity]
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Non-terrain voxel kinds whose material is fixed regardless of height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    /// River water cap.
    Water,
    /// Tree trunk.
    Wood,
    /// Tree canopy.
    Leaves,
}

impl Feature {
    /// The category this feature always classifies as.
    pub fn material(self) -> MaterialCategory {
        match self {
            Self::Water => MaterialCategory::Water,
            Self::Wood => MaterialCategory::Wood,
            Self::Leaves => MaterialCategory::Leaves,
        }
    }
}

/// Depth of the dirt layer under any surface block.
pub const DIRT_DEPTH: i64 = 3;

/// Classify one voxel of a column.
///
/// Rules are tried in order and the first match wins; they overlap, so the
/// order is part of the contract.
pub fn classify(
    y: u32,
    max_height: u32,
    surface_height: u32,
    feature: Option<Feature>,
) -> MaterialCategory {
    if let Some(feature) = feature {
        return feature.material();
    }

    let max = f64::from(max_height);
    let surface = f64::from(surface_height);
    let on_surface = y == surface_height;

    if on_surface && surface > max * 0.8 {
        return MaterialCategory::Snow;
    }
    if on_surface && surface > max * 0.3 && surface <= max * 0.8 {
        return MaterialCategory::Grass;
    }
    if on_surface && surface > max * 0.6 {
        return MaterialCategory::Stone;
    }

    let depth = i64::from(surface_height) - i64::from(y);
    if depth > 0 && depth <= DIRT_DEPTH {
        return MaterialCategory::Dirt;
    }
    if f64::from(y) / max < 0.2 {
        return MaterialCategory::DeepStone;
    }
    MaterialCategory::Stone
}
