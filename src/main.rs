mod analyzer;
mod config;
mod jobs;
mod model;
mod normalizer;
mod notifier;
mod parser;
mod report;
mod scraper;
mod storage;
mod utils;

use analyzer::AnalyzerImpl;
use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use config::{TwitterCredentials, resolve_config};
use jobs::JobContext;
use notifier::TwitterNotifier;
use scraper::FplClient;
use std::path::PathBuf;
use storage::JsonSnapshotStore;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Command {
    PriceChanges,
    Deadline,
    DailyStats,
    GwResults,
    All,
}

#[derive(Parser, Debug)]
#[command(version, about = "FPL Twitter Bot")]
struct Args {
    /// Which feature to run
    #[arg(value_enum)]
    command: Command,

    /// Print tweets instead of posting
    #[arg(long)]
    dry_run: bool,

    /// Force action (e.g. send deadline reminder regardless of time)
    #[arg(long)]
    force: bool,

    /// Path to config file (defaults to ./config.json when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // A missing .env is fine; credentials may come from the real environment.
    dotenv::dotenv().ok();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        error!("Run failed: {:#}", e);
        return Err(e);
    }
    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let config = resolve_config(args.config.as_deref()).context("loading configuration")?;

    let source = FplClient::new(&config).context("building FPL client")?;
    let publisher = TwitterNotifier::new(&config, TwitterCredentials::from_env(), args.dry_run)
        .context("building Twitter client")?;
    let store = JsonSnapshotStore::new(config.prices_path.clone());
    let analyzer = AnalyzerImpl::new();
    info!("Price snapshot: {}", store.path().display());

    let ctx = JobContext {
        source: &source,
        publisher: &publisher,
        store: &store,
        hold_baseline_on_publish_failure: config.hold_baseline_on_publish_failure,
    };

    match args.command {
        Command::PriceChanges => {
            jobs::price_changes::run(&ctx, &analyzer).await?;
        }
        Command::Deadline => {
            jobs::deadline::run(&ctx, Utc::now(), args.force).await?;
        }
        Command::DailyStats => {
            jobs::daily_stats::run(&ctx).await?;
        }
        Command::GwResults => {
            jobs::gw_results::run(&ctx).await?;
        }
        Command::All => {
            info!("Running all features...");
            info!("--- Price Changes ---");
            jobs::price_changes::run(&ctx, &analyzer).await?;
            info!("--- Deadline Check ---");
            jobs::deadline::run(&ctx, Utc::now(), false).await?;
            info!("--- Daily Stats ---");
            jobs::daily_stats::run(&ctx).await?;
            info!("--- GW Results ---");
            jobs::gw_results::run(&ctx).await?;
        }
    }

    Ok(())
}
