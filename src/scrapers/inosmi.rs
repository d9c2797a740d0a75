//! Translated-article extractor for the aggregator's article pages.
//!
//! An inosmi.ru article page carries the translated text plus a footer block
//! linking to the original publication. The link is the pairing key: it must
//! exist and must match the configured paper's URL prefix, otherwise the
//! whole pair is rejected (the aggregator sometimes links to sources in
//! other languages).

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::config::PaperConfig;
use crate::error::{Result, ScrapeError};
use crate::fetch::Fetcher;
use crate::models::ExtractedArticle;
use crate::normalize;
use crate::scrapers::{element_text, first_element, first_text, has_ancestor_with_class};

static SOURCE_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.article-footer__source a[href]").unwrap());
static TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1.article-header__title").unwrap());
static AUTHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("address.article-header__author-name.author").unwrap());
static DATE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("time.article-header__date").unwrap());
// The body container class depends on the page's markup generation.
static BODY_INDENTED: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.article-body.article-body_indented").unwrap());
static BODY_PLAIN: Lazy<Selector> = Lazy::new(|| Selector::parse("div.article-body").unwrap());
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());
static ASIDE: Lazy<Selector> = Lazy::new(|| Selector::parse("aside").unwrap());

/// Extract the translated article at `url` together with its validated
/// original-article link.
///
/// Fails if the source footer is missing, if the original link does not
/// carry the paper's URL prefix, or if any of the fixed header fields is
/// absent. Failures reject this article only, never the crawl.
pub async fn extract_translated(
    fetcher: &dyn Fetcher,
    paper: &PaperConfig,
    url: &str,
) -> Result<(ExtractedArticle, String)> {
    let html = fetcher.fetch(url).await?;
    parse_translated(&html, paper, url)
}

fn parse_translated(
    html: &str,
    paper: &PaperConfig,
    url: &str,
) -> Result<(ExtractedArticle, String)> {
    let document = Html::parse_document(html);

    let original_link = document
        .select(&SOURCE_LINK)
        .next()
        .and_then(|el| el.value().attr("href"))
        .ok_or_else(|| missing(url, "original source link"))?
        .to_string();

    if !original_link.starts_with(&paper.original_link_prefix) {
        return Err(ScrapeError::WrongPaper {
            link: original_link,
            paper: paper.paper_id.clone(),
        });
    }

    let raw_title =
        first_text(&document, &[&TITLE]).ok_or_else(|| missing(url, "article title"))?;
    let title = normalize::normalize(&normalize::russian_header(&raw_title, paper));
    let author = first_text(&document, &[&AUTHOR]).ok_or_else(|| missing(url, "author"))?;
    let published_date =
        first_text(&document, &[&DATE]).ok_or_else(|| missing(url, "publication date"))?;

    let container = first_element(&document, &[&BODY_INDENTED, &BODY_PLAIN])
        .ok_or_else(|| missing(url, "article body"))?;
    let mut paragraphs = Vec::new();
    for p in container.select(&PARAGRAPH) {
        // The aggregator embeds its own disclaimer and "context" callouts
        // inside the body container; neither belongs to the article text.
        if has_ancestor_with_class(p, "article-disclaimer") || is_aside_paragraph(p) {
            continue;
        }
        paragraphs.push(element_text(p).trim().to_string());
    }
    let body = normalize::normalize(&paragraphs.join("\r\n"));

    debug!(%url, original = %original_link, paragraphs = paragraphs.len(), "Parsed translated article");

    Ok((
        ExtractedArticle {
            title,
            author,
            published_date,
            body,
            url: url.to_string(),
        },
        original_link,
    ))
}

fn is_aside_paragraph(p: ElementRef<'_>) -> bool {
    p.select(&ASIDE).next().is_some()
        || p.ancestors()
            .filter_map(ElementRef::wrap)
            .any(|ancestor| ancestor.value().name() == "aside")
}

fn missing(url: &str, what: &str) -> ScrapeError {
    ScrapeError::Parse {
        url: url.to_string(),
        what: what.to_string(),
    }
}
