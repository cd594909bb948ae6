//! ReelScope CLI
//!
//! Extracts metadata from one reel page and emits exactly one JSON record,
//! whether the extraction succeeded, partially succeeded, or aborted.

use anyhow::Context;
use clap::Parser;
use reelscope::browser::{BrowserConfig, BrowserController, NavigationOptions, ReelUrl};
use reelscope::extraction::{ReelExtractor, ReelRecord};
use std::path::PathBuf;

/// Extract metadata from a short-video reel page
#[derive(Parser, Debug)]
#[command(name = "reelscope")]
#[command(version)]
#[command(about = "Extract username, audio, counts and caption from a reel page")]
struct Args {
    /// Reel URL (https://www.<site>.<tld>/reel/<id>)
    url: String,

    /// Path to Chrome/Chromium executable
    #[arg(long)]
    chrome_path: Option<String>,

    /// Run in headless mode
    #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
    headless: bool,

    /// Navigation timeout in milliseconds
    #[arg(long, default_value = "30000")]
    timeout_ms: u64,

    /// Post-load settle delay in milliseconds
    #[arg(long, default_value = "1500")]
    settle_ms: u64,

    /// Also write the record to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let record = run(&args).await;

    let json = serde_json::to_string_pretty(&record).context("serializing record")?;
    if let Some(path) = &args.output {
        std::fs::write(path, &json)
            .with_context(|| format!("writing record to {}", path.display()))?;
    }
    println!("{json}");

    if record.is_failed() {
        std::process::exit(1);
    }
    Ok(())
}

/// Run one extraction. Every outcome becomes a record; the caller never
/// receives silence.
async fn run(args: &Args) -> ReelRecord {
    if let Err(reason) = ReelUrl::validate(&args.url) {
        return ReelRecord::failed(&args.url, format!("invalid target: {reason}"));
    }

    let mut builder = BrowserConfig::builder()
        .headless(args.headless)
        .timeout_ms(args.timeout_ms);
    if let Some(path) = &args.chrome_path {
        builder = builder.chrome_path(path.as_str());
    }

    let controller = match BrowserController::with_config(builder.build()).await {
        Ok(c) => c,
        Err(e) => return ReelRecord::failed(&args.url, e.to_string()),
    };

    let options = NavigationOptions {
        timeout_ms: args.timeout_ms,
        settle_ms: args.settle_ms,
        ..Default::default()
    };

    let record = match controller.navigate(&args.url, Some(options)).await {
        Ok(page) => ReelExtractor::extract_from_page(&args.url, &page).await,
        Err(e) => ReelRecord::failed(&args.url, e.to_string()),
    };

    if let Err(e) = controller.close().await {
        tracing::warn!("Browser close failed: {}", e);
    }

    record
}
