//! The fixed table of sprite assets to generate.
//!
//! The table order is the processing order; each entry is independent, so
//! order only affects log output and which asset fails first on error.

/// One named generation target: a short identifier used for the output
/// filename and the asset-specific part of the prompt.
#[derive(Debug, Clone, Copy)]
pub struct AssetSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// Sprite sheets and tiles for the platformer prototype, in generation order.
pub fn sprite_assets() -> Vec<AssetSpec> {
    vec![
        AssetSpec {
            name: "pixel_knight",
            description: "Generate a sprite sheet for a knight character in pixel art style: \
short, stout, very small chibi proportions, wearing simple steel armor with a small red plume, \
side view facing right. Include 4 frames of a walking animation and 3 frames of an idle pose; \
also include frames of taking damage and a death animation. Each frame is 32x32 pixels, clean \
black outlines and a transparent background, organized in a neat grid with equal spacing; \
consistent 16-bit palette.",
        },
        AssetSpec {
            name: "pixel_slime",
            description: "Generate a sprite sheet for a green, slightly menacing slime enemy \
in pixel art style, side view facing right. Include 4 frames of a sliding/walking animation \
and 3 frames of an idle wobble; also include damage and death frames. Each frame is 32x32 \
pixels with clean black outline and a transparent background, organized in a neat grid; \
consistent 16-bit palette.",
        },
        AssetSpec {
            name: "pixel_tileset",
            description: "Create a square 1:1 image containing a compact tileset: a grid of \
small 2D 16-bit pixel blocks (square tiles seen straight-on, not isometric), designed for a \
2D platformer. Include multiple terrains: grass with dirt, stone/brick, sand, snow/ice, wood, \
and metal. Each tile is seamless and perfectly square with high-contrast readable edges, \
consistent limited palette, and clearly separated in a regular grid on a plain or transparent \
background.",
        },
        AssetSpec {
            name: "pixel_platforms",
            description: "Set of platform sprites for a 2D platformer: small tileable platform \
segments with metal and stone variants, clearly separated pieces on a plain or transparent \
background, readable edges for movement, 16-bit palette.",
        },
        AssetSpec {
            name: "pixel_coin",
            description: "Generate a tiny coin sprite sheet in pixel art style. Include 4 \
frames of a spin/rotation animation and 2 frames of an idle state. Each frame is 32x32 pixels \
with a transparent background, bright gold coin with black outline; organized in a neat grid; \
consistent 16-bit palette.",
        },
    ]
}
