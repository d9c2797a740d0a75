//! Data models for discovered links, extracted articles, and validated pairs.
//!
//! - [`ArticleRef`]: a translated-article link discovered on a catalog page
//! - [`ExtractedArticle`]: normalized text and metadata from one document
//! - [`ArticlePair`]: a translated article plus its validated original
//!
//! Extraction failures are carried as `Err(ScrapeError)` rather than flag
//! fields, so every constructed value has fully defined fields and an
//! [`ArticlePair`] exists only when both sides succeeded and the original
//! link passed the paper-prefix check.

/// A translated-article URL discovered on a catalog page, bound to the paper
/// whose original it is expected to link to. Immutable once created.
#[derive(Debug, Clone)]
pub struct ArticleRef {
    pub url: String,
    pub paper_id: String,
}

/// Title, author, date, and body extracted from a single fetched document.
/// Never mutated after construction; lives for one pipeline pass only.
#[derive(Debug, Clone)]
pub struct ExtractedArticle {
    pub title: String,
    pub author: String,
    pub published_date: String,
    pub body: String,
    /// URL the document was fetched from.
    pub url: String,
}

/// A fully validated pair: the translated article and its original.
#[derive(Debug)]
pub struct ArticlePair {
    pub translated: ExtractedArticle,
    pub original: ExtractedArticle,
}
