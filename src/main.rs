//! mouthsync - command-line front end
//!
//! Reads an audio file, runs the lip-sync pipeline, and writes the viseme
//! timing JSON to stdout or a file.

use anyhow::{Context, Result};
use clap::Parser;
use mouthsync::config::ENV_TOOLS_DIR;
use mouthsync::{LipSyncPipeline, PipelineConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mouthsync", version, about = "Generate viseme timing JSON from an audio file")]
struct Cli {
    /// Audio file to analyze (any encoding ffmpeg accepts)
    audio_file: PathBuf,

    /// Write the JSON result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory holding the Rhubarb Lip Sync distribution
    #[arg(long, env = ENV_TOOLS_DIR)]
    tools_dir: Option<PathBuf>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    info!("mouthsync {}", env!("CARGO_PKG_VERSION"));

    let config = PipelineConfig::resolve(cli.tools_dir.as_deref(), cli.config.as_deref());
    info!(tools_dir = %config.tools_dir.display(), transcoder = %config.transcoder, "Configuration resolved");

    let audio = tokio::fs::read(&cli.audio_file)
        .await
        .with_context(|| format!("failed to read {}", cli.audio_file.display()))?;

    let pipeline = LipSyncPipeline::new(config);
    let json = pipeline.process(&audio).await?;

    match &cli.output {
        Some(path) => {
            tokio::fs::write(path, &json)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(output = %path.display(), "Result written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
