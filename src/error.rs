//! Error types shared across the crawl pipeline.
//!
//! Every fallible extraction step returns [`ScrapeError`] instead of raising
//! through ad hoc control flow: the orchestrator inspects the variant to
//! decide whether a failure is fatal ([`ScrapeError::UnsupportedPaper`],
//! [`ScrapeError::Io`]) or confined to one article or catalog page
//! (everything else).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network or HTTP failure while retrieving a URL.
    #[error("fetch failed for {url}: {cause}")]
    Fetch { url: String, cause: String },

    /// An expected element or attribute was missing from a fetched document.
    #[error("missing {what} in {url}")]
    Parse { url: String, what: String },

    /// The linked original article does not belong to the expected paper.
    #[error("original link {link} does not belong to paper {paper}")]
    WrongPaper { link: String, paper: String },

    /// The requested paper identifier is not supported. Configuration-level,
    /// fatal to the run.
    #[error("unsupported paper: {0}")]
    UnsupportedPaper(String),

    /// Output-sink failure. Fatal: continuing would silently drop pairs.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
