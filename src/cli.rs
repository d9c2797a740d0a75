//! Command-line interface definitions.
//!
//! Defined with `clap` derive. The defaults reproduce a plain
//! `inosmi_pairs` invocation: crawl the Yle catalog and write pairs under
//! the current directory.

use clap::Parser;

/// Command-line arguments for the crawler.
///
/// # Examples
///
/// ```sh
/// # Crawl the default paper into ./corpus
/// inosmi_pairs -o ./corpus
///
/// # Slow the crawl down
/// inosmi_pairs -o ./corpus --page-pause-secs 5
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Paper identifier (the aggregator's catalog slug for the source paper)
    #[arg(short, long, default_value = "yle_fi")]
    pub paper: String,

    /// Root directory for article pair files and the metadata index
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Seconds to pause between catalog pages
    #[arg(long, default_value_t = 2)]
    pub page_pause_secs: u64,
}
