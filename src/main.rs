use anyhow::Result;
use catalog_harvest::{
    config::{Config, parse_categories},
    fetcher::CatalogClient,
    harvest::Harvester,
    sink::{PopulationReport, write_csv},
};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Collect complete product rows from the pharmacy catalog into a CSV file.
///
/// Flags override the matching HARVEST_* environment variables.
#[derive(Parser)]
#[command(name = "catalog-harvest", version)]
struct Cli {
    /// Number of complete products to collect
    #[arg(short = 'n', long)]
    target: Option<usize>,

    /// Comma-separated category slugs (default: all categories)
    #[arg(short, long)]
    categories: Option<String>,

    /// Log every attempt
    #[arg(short, long)]
    verbose: bool,

    /// Output CSV path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pause after each request, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Per-request timeout, in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Attempt budget as a multiple of the target
    #[arg(long)]
    attempts_multiplier: Option<usize>,
}

impl Cli {
    fn apply(self, mut config: Config) -> Config {
        if let Some(target) = self.target {
            config.target = target;
        }
        if let Some(categories) = self.categories {
            config.categories = parse_categories(&categories);
        }
        config.verbose |= self.verbose;
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(ms) = self.delay_ms {
            config.delay = Duration::from_millis(ms);
        }
        if let Some(secs) = self.timeout_secs {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(multiplier) = self.attempts_multiplier {
            config.attempts_multiplier = multiplier;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.apply(Config::from_env()?);
    config.validate()?;

    let default_level = if config.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .init();

    info!(
        wanted = config.target,
        categories = config.categories.len(),
        output = %config.output.display(),
        "harvesting catalog"
    );

    let shutdown = CancellationToken::new();
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if let Err(e) = signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
                return;
            }
            info!("Received shutdown signal, stopping after the current product...");
            shutdown.cancel();
        });
    }

    let client = CatalogClient::from_config(&config)?;
    let output = config.output.clone();
    let mut harvester = Harvester::new(client, config)?.with_shutdown(shutdown);
    let outcome = harvester.run().await;

    let elapsed = outcome.finished_at - outcome.started_at;
    println!(
        "Found {} complete products after {} attempts ({} rejected, {} failed) in {}s",
        outcome.rows.len(),
        outcome.attempts,
        outcome.rejected,
        outcome.failed,
        elapsed.num_seconds()
    );

    if !write_csv(&output, &outcome.rows)? {
        println!("No data to save.");
        return Ok(());
    }

    println!("Saved {} products to {}", outcome.rows.len(), output.display());
    println!();
    print!("{}", PopulationReport::from_rows(&outcome.rows));
    Ok(())
}
