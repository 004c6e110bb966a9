use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use airline_reviews::config::Config;
use airline_reviews::scrapers::{AirlineQualitySource, ReviewCollector};
use airline_reviews::storage::write_csv;

#[derive(Debug, Parser)]
#[command(name = "airline-reviews", version, about = "Scrape airline reviews into a CSV file")]
struct Cli {
    /// Number of listing pages to scrape
    #[arg(short, long)]
    pages: Option<u32>,

    /// Where to write the CSV file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Settings file stem, e.g. `reviews` for reviews.toml
    #[arg(short, long, default_value = "reviews")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("airline_reviews=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load_from(&cli.config).context("Failed to load configuration")?;
    if let Some(pages) = cli.pages {
        config.pages = pages;
    }
    if let Some(output) = cli.output {
        config.output_path = output;
    }
    let config = Arc::new(config);

    let started = Local::now();
    info!(
        "Starting review scrape of {} pages from {} at {}",
        config.pages,
        config.base_url,
        started.format("%Y-%m-%d %H:%M:%S")
    );

    let source =
        AirlineQualitySource::new(config.clone()).context("Failed to build HTTP client")?;
    let delay = Duration::from_secs(config.delay_secs);
    let collector = ReviewCollector::new(Box::new(source), delay);

    let dataset = collector.scrape_all(config.pages).await;

    write_csv(&dataset, &config.output_path)
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;

    let elapsed = Local::now() - started;
    info!(
        "Collected {} reviews in {} seconds",
        dataset.len(),
        elapsed.num_seconds()
    );
    info!("Scraping complete. Data saved to {}", config.output_path.display());

    Ok(())
}
