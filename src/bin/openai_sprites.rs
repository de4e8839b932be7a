use anyhow::Result;
use clap::Parser;
use pixelsmith::ai::{openai::DEFAULT_IMAGE_MODEL, OpenAiImageClient};
use pixelsmith::artifact::ArtifactWriter;
use pixelsmith::assets::sprite_assets;
use pixelsmith::config::OpenAiConfig;
use pixelsmith::runner::run_openai_batch;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "openai-sprites")]
#[command(about = "Generate pixel-art sprite sheets through the OpenAI images endpoint")]
struct CliArgs {
    /// Directory where generated images are written.
    #[arg(long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Image model to use.
    #[arg(long, default_value = DEFAULT_IMAGE_MODEL)]
    model: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixelsmith=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let config = match OpenAiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let client = OpenAiImageClient::new(config.api_key, config.organization, args.model);
    let writer = ArtifactWriter::new(args.output_dir);

    match run_openai_batch(&client, &sprite_assets(), &writer).await {
        Ok(()) => {
            info!("All sprites generated");
            Ok(())
        }
        Err(e) => {
            error!("Generation failed: {}", e);
            std::process::exit(1);
        }
    }
}
