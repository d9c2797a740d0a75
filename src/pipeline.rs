//! Pipeline orchestrator: drives the catalog crawl, pairs every discovered
//! article with its original, and streams validated pairs to the writer.
//!
//! The loop is strictly sequential: one catalog page at a time, one article
//! at a time in document order, with a fixed politeness pause between pages.
//! Good pairs are written as soon as they are validated, so memory stays
//! bounded no matter how long the crawl runs. A bad article or a bad page
//! never stops the crawl; only configuration errors and a failing output
//! sink do.

use std::path::Path;

use tokio::time::sleep;
use tracing::{info, instrument, warn};

use crate::config::{PaperConfig, SiteConfig};
use crate::error::{Result, ScrapeError};
use crate::fetch::Fetcher;
use crate::models::{ArticlePair, ArticleRef};
use crate::outputs::PairWriter;
use crate::scrapers::{inosmi, listing, yle};

/// Counters reported at the end of a run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub pages: usize,
    pub written: usize,
    pub failed: usize,
}

/// Crawl the whole catalog of `paper_id`, writing validated pairs under
/// `out_root`.
///
/// Fails fast on an unknown or unsupported paper identifier and on writer
/// I/O errors; every per-article failure is logged, counted, and skipped.
#[instrument(level = "info", skip(fetcher, config), fields(paper = %paper_id))]
pub async fn run(
    fetcher: &dyn Fetcher,
    config: &SiteConfig,
    paper_id: &str,
    out_root: &Path,
) -> Result<RunSummary> {
    let paper = config
        .paper(paper_id)
        .ok_or_else(|| ScrapeError::UnsupportedPaper(paper_id.to_string()))?;

    let writer = PairWriter::create(config, paper_id, out_root).await?;

    let mut summary = RunSummary::default();
    let mut next_url = Some(format!("{}/{}", config.base_url, paper_id));

    while let Some(page_url) = next_url {
        info!(page = %page_url, "Crawling catalog page");
        let (links, next) = listing::list_articles(fetcher, config, paper_id, &page_url).await;

        let mut written = 0usize;
        let mut bad_links = Vec::new();
        for link in &links {
            match extract_pair(fetcher, config, paper, link).await {
                Ok(pair) => {
                    writer.write_pair(&pair).await?;
                    written += 1;
                }
                // Configuration-level: no later article can succeed either.
                Err(e @ ScrapeError::UnsupportedPaper(_)) => return Err(e),
                Err(e) => {
                    warn!(url = %link.url, error = %e, "Skipping article");
                    bad_links.push(link.url.clone());
                }
            }
        }

        summary.pages += 1;
        summary.written += written;
        summary.failed += bad_links.len();
        info!(
            page = %page_url,
            parsed = written,
            bad = bad_links.len(),
            bad_links = ?bad_links,
            "Catalog page processed"
        );

        next_url = next;
        if next_url.is_some() {
            sleep(config.page_pause).await;
        }
    }

    Ok(summary)
}

/// Extract one translated article and its validated original.
async fn extract_pair(
    fetcher: &dyn Fetcher,
    config: &SiteConfig,
    paper: &PaperConfig,
    link: &ArticleRef,
) -> Result<ArticlePair> {
    let (translated, original_link) = inosmi::extract_translated(fetcher, paper, &link.url).await?;
    let original = yle::extract_original(fetcher, config, &link.paper_id, &original_link).await?;
    Ok(ArticlePair {
        translated,
        original,
    })
}
