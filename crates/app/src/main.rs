//! Redline - replay a feedback session against a screenshot

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use redline::logging;
use redline::replay::{ReplayOptions, replay};
use redline_config::RedlineConfig;

#[derive(Parser, Debug)]
#[command(name = "redline", version, about = "Screenshot feedback widget")]
struct Args {
    /// Screenshot to annotate
    #[arg(long)]
    screenshot: PathBuf,

    /// JSON array of session events to replay
    #[arg(long)]
    script: PathBuf,

    /// Write the submitted payload here instead of logging it
    #[arg(long)]
    payload: Option<PathBuf>,

    /// Write the final annotated surface as PNG
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = match &args.config {
        Some(path) => RedlineConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?
            .with_overrides(|key| std::env::var(key).ok()),
        None => RedlineConfig::from_env(),
    };

    let options = ReplayOptions {
        screenshot: args.screenshot,
        script: args.script,
        payload: args.payload,
        output: args.output,
    };
    replay(config, &options).await?;
    Ok(())
}
