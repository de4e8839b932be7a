//! Shared prompt fragments for the sprite generation runs.

/// Themed 16-bit 2D pixel-art style constraints, shared by every asset.
pub const BASE_STYLE: &str = "16-bit 2D pixel art sprite, SNES/Genesis-era aesthetic, \
limited 16-color palette, strong black outline, clean dithering, sharp pixels, \
no anti-aliasing, flat shading, high-contrast readable shapes.";

/// Clause appended after the style to keep models from drifting off-theme.
pub const ENFORCE_THEME: &str = "Do NOT make 3D, photorealistic, painterly, vector, \
or smooth gradients. No text, watermark, UI, borders, or frames.";

/// Negative prompt for the Stability endpoint.
pub const NEGATIVE_PROMPT: &str = "photorealistic, realistic, 3d, rendering, soft gradients, \
blurry, low-contrast, noise, text, watermark, signature, frame, border, background scene, \
detailed scenery";

/// Default prompt for the chat probe binary.
pub const CHAT_PROBE_PROMPT: &str = "Please build a mario 2d platformer. generate mario, \
goomba, coins, and the flag at the end of the level. Make sprites and spritesheets for each. \
Add proper interactions between objects according to standard playstyle of a mario 2D 16-bit \
pixel platformer. Make 16-bit sky and ground backgrounds, green grass, etc.";

/// Compose one generation prompt: style, then enforcement clause, then the
/// asset-specific description, space-joined with no further normalization.
pub fn compose_prompt(style: &str, enforcement: &str, description: &str) -> String {
    format!("{} {} {}", style, enforcement, description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compose_prompt_is_space_joined() {
        assert_eq!(compose_prompt("S", "E", "D"), "S E D");
    }

    #[test]
    fn test_compose_prompt_does_not_trim() {
        // Inner whitespace and trailing punctuation pass through untouched.
        assert_eq!(compose_prompt("a ", " b", "c."), "a   b c.");
    }

    #[test]
    fn test_fragments_are_non_empty() {
        assert!(!BASE_STYLE.is_empty());
        assert!(!ENFORCE_THEME.is_empty());
        assert!(!NEGATIVE_PROMPT.is_empty());
        assert!(!CHAT_PROBE_PROMPT.is_empty());
    }
}
