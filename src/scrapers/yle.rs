//! Original-article extractor for yle.fi, the one source paper supported
//! today.
//!
//! Yle has shipped at least two article layouts, so every field is read
//! through a fallback chain: modern heading/date/author classes first, the
//! older `ydd` classes second. Body paragraphs stop at the first "read more"
//! marker phrase, which opens a trailing related-content list that is not
//! part of the article.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::config::SiteConfig;
use crate::error::{Result, ScrapeError};
use crate::fetch::Fetcher;
use crate::models::ExtractedArticle;
use crate::normalize;
use crate::scrapers::{first_text, text_excluding};

/// The single paper this extractor understands. A different identifier is a
/// configuration mistake, not a data error, and fails the run.
const SUPPORTED_PAPER: &str = "yle_fi";

/// Class of the invisible "jump to external resource" markers embedded in
/// paragraph text for screen readers.
const ACCESSIBILITY_CLASS: &str = "yle__accessibilityText";

static TITLE_PRIMARY: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1.yle__article__heading.yle__article__heading--h1").unwrap());
static TITLE_ALT: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1.node-title.ydd-article__title").unwrap());
static AUTHOR_COMBINED: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.yle__article__author__name__text").unwrap());
static AUTHOR_GIVEN: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"span[itemprop="givenName"]"#).unwrap());
static AUTHOR_FAMILY: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"span[itemprop="familyName"]"#).unwrap());
static DATE_PRIMARY: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.yle__article__date--published").unwrap());
static DATE_ALT: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"time[itemprop="datePublished"]"#).unwrap());
static BODY_PARAGRAPH: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p.yle__article__paragraph").unwrap());
static ALT_BODY: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.ydd-article__body").unwrap());
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// Extract the original article at `url`.
///
/// An unsupported `paper_id` fails before any network traffic with
/// [`ScrapeError::UnsupportedPaper`]; every other failure rejects only the
/// pair being built.
pub async fn extract_original(
    fetcher: &dyn Fetcher,
    config: &SiteConfig,
    paper_id: &str,
    url: &str,
) -> Result<ExtractedArticle> {
    if paper_id != SUPPORTED_PAPER {
        return Err(ScrapeError::UnsupportedPaper(paper_id.to_string()));
    }
    let html = fetcher.fetch(url).await?;
    parse_original(&html, config, url)
}

fn parse_original(html: &str, config: &SiteConfig, url: &str) -> Result<ExtractedArticle> {
    let document = Html::parse_document(html);

    let title = first_text(&document, &[&TITLE_PRIMARY, &TITLE_ALT])
        .ok_or_else(|| missing(url, "article title"))?;

    let author = match first_text(&document, &[&AUTHOR_COMBINED]) {
        Some(name) => name,
        // Older layout splits the byline into given and family name.
        None => {
            let given = first_text(&document, &[&AUTHOR_GIVEN])
                .ok_or_else(|| missing(url, "author given name"))?;
            let family = first_text(&document, &[&AUTHOR_FAMILY])
                .ok_or_else(|| missing(url, "author family name"))?;
            format!("{given} {family}")
        }
    };

    let raw_date = first_text(&document, &[&DATE_PRIMARY, &DATE_ALT])
        .ok_or_else(|| missing(url, "publication date"))?;
    let published_date = normalize::original_date(&raw_date);

    let mut body = collect_paragraphs(document.select(&BODY_PARAGRAPH), &config.stop_phrases);
    if body.is_empty() {
        let container = document
            .select(&ALT_BODY)
            .next()
            .ok_or_else(|| missing(url, "article body"))?;
        body = collect_paragraphs(container.select(&PARAGRAPH), &config.stop_phrases);
    }

    debug!(%url, title_len = title.len(), body_len = body.len(), "Parsed original article");

    Ok(ExtractedArticle {
        title,
        author,
        published_date,
        body,
        url: url.to_string(),
    })
}

/// Join paragraph texts with CRLF, minus accessibility markers, stopping at
/// the first paragraph that is exactly a "read more" marker phrase.
fn collect_paragraphs<'a>(
    paragraphs: impl Iterator<Item = ElementRef<'a>>,
    stop_phrases: &[String],
) -> String {
    let mut kept = Vec::new();
    for p in paragraphs {
        let text = text_excluding(p, ACCESSIBILITY_CLASS);
        let text = text.trim();
        if stop_phrases.iter().any(|phrase| phrase == text) {
            break;
        }
        kept.push(text.to_string());
    }
    kept.join("\r\n").trim().to_string()
}

fn missing(url: &str, what: &str) -> ScrapeError {
    ScrapeError::Parse {
        url: url.to_string(),
        what: what.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::testing::StaticFetcher;

    const ORIGINAL_URL: &str = "https://yle.fi/a/3-12345";

    const MODERN_PAGE: &str = r#"
        <html><body>
          <h1 class="yle__article__heading yle__article__heading--h1">Otsikko</h1>
          <span class="yle__article__author__name__text">Matti Virtanen</span>
          <span class="yle__article__date--published">1.3.2022 klo 14:05</span>
          <p class="yle__article__paragraph">Ensimmäinen kappale.</p>
          <p class="yle__article__paragraph">
            Toinen <a href="https://example.fi">kappale<span class="yle__accessibilityText">Siirry toiseen palveluun</span></a>.
          </p>
          <p class="yle__article__paragraph">Lue myös:</p>
          <p class="yle__article__paragraph">Aiheeseen liittyvä juttu.</p>
        </body></html>
    "#;

    const LEGACY_PAGE: &str = r#"
        <html><body>
          <h1 class="node-title ydd-article__title">Vanha otsikko</h1>
          <span itemprop="givenName">Matti</span>
          <span itemprop="familyName">Virtanen</span>
          <time itemprop="datePublished">1.3.2022 14:05</time>
          <div class="ydd-article__body">
            <p>Vanhan pohjan kappale.</p>
            <p>Lisää aiheesta:</p>
            <p>Linkkilista.</p>
          </div>
        </body></html>
    "#;

    #[tokio::test]
    async fn test_modern_layout_with_stop_marker() {
        let fetcher = StaticFetcher::new(&[(ORIGINAL_URL, MODERN_PAGE)]);
        let config = SiteConfig::inosmi();

        let article = extract_original(&fetcher, &config, "yle_fi", ORIGINAL_URL)
            .await
            .unwrap();

        assert_eq!(article.title, "Otsikko");
        assert_eq!(article.author, "Matti Virtanen");
        assert_eq!(article.published_date, "1.3.2022");
        // Accessibility marker stripped, truncated at "Lue myös:".
        assert_eq!(article.body, "Ensimmäinen kappale.\r\nToinen kappale.");
    }

    #[tokio::test]
    async fn test_legacy_layout_fallback() {
        let fetcher = StaticFetcher::new(&[(ORIGINAL_URL, LEGACY_PAGE)]);
        let config = SiteConfig::inosmi();

        let article = extract_original(&fetcher, &config, "yle_fi", ORIGINAL_URL)
            .await
            .unwrap();

        assert_eq!(article.title, "Vanha otsikko");
        assert_eq!(article.author, "Matti Virtanen");
        assert_eq!(article.published_date, "1.3.2022");
        assert_eq!(article.body, "Vanhan pohjan kappale.");
    }

    #[tokio::test]
    async fn test_empty_primary_body_missing_alt_container_fails() {
        let page = r#"
            <html><body>
              <h1 class="yle__article__heading yle__article__heading--h1">Otsikko</h1>
              <span class="yle__article__author__name__text">Matti Virtanen</span>
              <span class="yle__article__date--published">1.3.2022</span>
            </body></html>
        "#;
        let fetcher = StaticFetcher::new(&[(ORIGINAL_URL, page)]);
        let config = SiteConfig::inosmi();

        let err = extract_original(&fetcher, &config, "yle_fi", ORIGINAL_URL)
            .await
            .unwrap_err();
        assert!(matches!(err, ScrapeError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_unsupported_paper_fails_before_fetching() {
        // No pages registered: reaching the network would fail differently.
        let fetcher = StaticFetcher::new(&[]);
        let config = SiteConfig::inosmi();

        let err = extract_original(&fetcher, &config, "hs_fi", ORIGINAL_URL)
            .await
            .unwrap_err();
        assert!(matches!(err, ScrapeError::UnsupportedPaper(_)));
    }
}
