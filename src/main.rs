//! # inosmi_pairs
//!
//! Builds a parallel corpus from the inosmi.ru news aggregator, which
//! republishes Russian translations of foreign-press articles. For every
//! translated article the crawler locates the link to the original
//! publication (currently Yle, Finland), extracts normalized text and
//! metadata from both sides, and writes each validated pair as two text
//! files plus one row in a delimited metadata index.
//!
//! ## Usage
//!
//! ```sh
//! inosmi_pairs -o ./corpus
//! ```
//!
//! ## Architecture
//!
//! A strictly sequential pipeline:
//! 1. **Listing**: paginate the paper's catalog, collecting article links
//! 2. **Pairing**: extract each translated article and its linked original,
//!    rejecting pairs whose original is not from the configured paper
//! 3. **Output**: write each good pair and its metadata row immediately
//!
//! Failures are isolated per article and per page; the crawl always
//! advances. Only configuration errors and output I/O errors end the run.

use std::error::Error;
use std::path::Path;
use std::time::Duration;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod config;
mod error;
mod fetch;
mod models;
mod normalize;
mod outputs;
mod pipeline;
mod scrapers;

use cli::Cli;
use config::SiteConfig;
use fetch::HttpFetcher;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("inosmi_pairs starting up");

    let args = Cli::parse();
    debug!(?args.paper, ?args.output_dir, args.page_pause_secs, "Parsed CLI arguments");

    let mut config = SiteConfig::inosmi();
    config.page_pause = Duration::from_secs(args.page_pause_secs);

    let fetcher = HttpFetcher::new();

    let summary = match pipeline::run(&fetcher, &config, &args.paper, Path::new(&args.output_dir)).await
    {
        Ok(summary) => summary,
        Err(e) => {
            error!(error = %e, "Crawl aborted");
            return Err(e.into());
        }
    };

    let elapsed = start_time.elapsed();
    info!(
        pages = summary.pages,
        written = summary.written,
        failed = summary.failed,
        ?elapsed,
        "Crawl complete"
    );

    Ok(())
}
