use anyhow::Result;
use clap::Parser;
use pixelsmith::ai::{openrouter::DEFAULT_CHAT_MODEL, OpenRouterClient};
use pixelsmith::config::OpenRouterConfig;
use pixelsmith::prompts::CHAT_PROBE_PROMPT;
use pixelsmith::runner::run_chat_probe;
use pixelsmith::think::think_blocks;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "openrouter-chat")]
#[command(about = "Probe a chat model through OpenRouter and show its reasoning blocks")]
struct CliArgs {
    /// Prompt to send; defaults to the platformer asset brief.
    #[arg(value_name = "PROMPT")]
    prompt: Option<String>,

    /// Model identifier understood by OpenRouter.
    #[arg(long, default_value = DEFAULT_CHAT_MODEL)]
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

    let config = match OpenRouterConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let client = OpenRouterClient::new(config.api_key, args.model);
    let prompt = args.prompt.as_deref().unwrap_or(CHAT_PROBE_PROMPT);

    match run_chat_probe(&client, prompt).await {
        Ok(reply) => {
            match reply.content {
                Some(content) => {
                    println!("\n--- Assistant Content (raw) ---\n");
                    println!("{}", content);

                    let blocks: Vec<&str> = think_blocks(&content).collect();
                    if blocks.is_empty() {
                        println!("\n(No <think> blocks found in content)\n");
                    } else {
                        println!("\n--- Extracted <think> blocks (raw) ---\n");
                        for (i, block) in blocks.iter().enumerate() {
                            println!("[Block {}]\n{}\n", i + 1, block);
                        }
                    }
                }
                None => {
                    println!("No choices in response. Full body:\n{}", reply.raw);
                }
            }
            Ok(())
        }
        Err(e) => {
            error!("Chat probe failed: {}", e);
            std::process::exit(1);
        }
    }
}
