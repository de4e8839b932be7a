use anyhow::Result;
use clap::Parser;
use pixelsmith::ai::StabilityClient;
use pixelsmith::artifact::ArtifactWriter;
use pixelsmith::assets::sprite_assets;
use pixelsmith::config::StabilityConfig;
use pixelsmith::runner::run_stability_batch;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "stability-sprites")]
#[command(about = "Generate pixel-art sprite sheets through the Stability multipart endpoint")]
struct CliArgs {
    /// Directory where generated images are written.
    #[arg(long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,
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

    let config = match StabilityConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let client = StabilityClient::new(config.api_key);
    let writer = ArtifactWriter::new(args.output_dir);

    match run_stability_batch(&client, &sprite_assets(), &writer).await {
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
