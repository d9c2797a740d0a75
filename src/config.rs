//! Process-wide crawl configuration.
//!
//! All knobs for the crawl live here: the aggregator's base URL, the table of
//! supported source papers, the stop phrases that mark trailing
//! related-content lists, and the metadata-file layout. The configuration is
//! built once in `main` from compile-time constants, optionally adjusted from
//! CLI flags, and passed by shared reference into every component that needs
//! it. Nothing mutates it after startup.

use std::time::Duration;

/// Base URL of the aggregator site.
pub const SITE_URL: &str = "https://inosmi.ru";

/// Default pause between catalog pages, to bound request rate.
pub const PAGE_PAUSE: Duration = Duration::from_secs(2);

/// Phrases that open a trailing "related articles" list in Yle articles.
/// Body extraction stops at the first paragraph equal to one of these.
pub const STOP_PHRASES: &[&str] = &[
    "Lue myös:",
    "Lue myös",
    "Lue lisää:",
    "Lisää aiheesta:",
    "Lue lisää aiheesta:",
];

/// Base name of the per-paper metadata index file.
pub const METADATA_FILENAME: &str = "metadata.csv";

/// Field delimiter used in the metadata index.
pub const DELIMITER: char = ';';

/// One supported source paper: how to recognize its article links and how to
/// strip its attribution from translated headlines.
#[derive(Debug, Clone)]
pub struct PaperConfig {
    /// Paper identifier, doubling as the aggregator's catalog slug.
    pub paper_id: String,
    /// URL prefix every original-article link of this paper must carry.
    pub original_link_prefix: String,
    /// Attribution prepended to translated headlines ("Yle (Финляндия): ").
    pub title_prefix: String,
    /// Attribution appended to translated headlines ("(Yle, Финляндия)").
    pub title_suffix: String,
}

/// Immutable crawl configuration, one instance per run.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub base_url: String,
    pub papers: Vec<PaperConfig>,
    pub page_pause: Duration,
    pub stop_phrases: Vec<String>,
    pub metadata_filename: String,
    pub delimiter: char,
}

impl SiteConfig {
    /// Configuration for the inosmi.ru aggregator with the papers supported
    /// today. New papers are added here, not in code paths.
    pub fn inosmi() -> Self {
        SiteConfig {
            base_url: SITE_URL.to_string(),
            papers: vec![PaperConfig {
                paper_id: "yle_fi".to_string(),
                original_link_prefix: "https://yle.fi/".to_string(),
                title_prefix: "Yle (Финляндия): ".to_string(),
                title_suffix: "(Yle, Финляндия)".to_string(),
            }],
            page_pause: PAGE_PAUSE,
            stop_phrases: STOP_PHRASES.iter().map(|s| s.to_string()).collect(),
            metadata_filename: METADATA_FILENAME.to_string(),
            delimiter: DELIMITER,
        }
    }

    /// Look up a paper by identifier.
    pub fn paper(&self, paper_id: &str) -> Option<&PaperConfig> {
        self.papers.iter().find(|p| p.paper_id == paper_id)
    }
}
