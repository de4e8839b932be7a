//! Sequential batch runs over the asset table.
//!
//! One outbound call per asset, in table order, writing each decoded result
//! before moving to the next. The first failure aborts the whole run;
//! artifacts written for earlier assets stay on disk.

use crate::ai::{ChatReply, OpenAiImageClient, OpenRouterClient, StabilityClient, TextToImageParams};
use crate::artifact::ArtifactWriter;
use crate::assets::AssetSpec;
use crate::prompts::{compose_prompt, BASE_STYLE, ENFORCE_THEME, NEGATIVE_PROMPT};
use crate::Result;
use tracing::info;

const OUTPUT_FORMAT: &str = "png";

/// Generate every asset through the OpenAI images endpoint, writing
/// `openai_{name}.png` files.
pub async fn run_openai_batch(
    client: &OpenAiImageClient,
    assets: &[AssetSpec],
    writer: &ArtifactWriter,
) -> Result<()> {
    for asset in assets {
        let prompt = compose_prompt(BASE_STYLE, ENFORCE_THEME, asset.description);

        info!("Generating (OpenAI) {}...", asset.name);
        let bytes = client.generate_image(&prompt).await?;

        let name = format!("openai_{}", asset.name);
        let path = writer.write(&name, None, OUTPUT_FORMAT, &bytes)?;
        info!("Saved image: {}", path.display());
    }

    Ok(())
}

/// Generate every asset through the Stability multipart endpoint, writing
/// `{name}[_{seed}].png` files where the suffix is the seed header returned
/// by the API.
pub async fn run_stability_batch(
    client: &StabilityClient,
    assets: &[AssetSpec],
    writer: &ArtifactWriter,
) -> Result<()> {
    for asset in assets {
        let prompt = compose_prompt(BASE_STYLE, ENFORCE_THEME, asset.description);

        let params = TextToImageParams {
            prompt,
            negative_prompt: Some(NEGATIVE_PROMPT.to_string()),
            aspect_ratio: Some("1:1".to_string()),
            // No seed: the API picks a random one and reports it in a header.
            seed: None,
            output_format: Some(OUTPUT_FORMAT.to_string()),
            style_preset: Some("pixel-art".to_string()),
        };

        info!("Generating {}...", asset.name);
        let image = client.generate(&params).await?;

        let path = writer.write(asset.name, image.seed.as_deref(), OUTPUT_FORMAT, &image.bytes)?;
        info!("Saved image: {}", path.display());

        if let Some(reason) = &image.finish_reason {
            info!("finish-reason: {}", reason);
        }
        if let Some(seed) = &image.seed {
            info!("seed: {}", seed);
        }
    }

    Ok(())
}

/// Issue one chat completion and hand the reply back for display.
pub async fn run_chat_probe(client: &OpenRouterClient, prompt: &str) -> Result<ChatReply> {
    info!("Calling OpenRouter with model: {}", client.model());
    client.chat(prompt).await
}
