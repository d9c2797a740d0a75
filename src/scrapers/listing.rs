//! Catalog-page crawler for the aggregator's paginated article listings.
//!
//! A catalog page lists translated articles under `h1` title headers and
//! carries a "load more" footer pointing at the next page. Pagination is
//! strictly sequential; the crawl ends at the first page without a usable
//! footer link.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, error, info};
use url::Url;

use crate::config::SiteConfig;
use crate::fetch::Fetcher;
use crate::models::ArticleRef;

static TITLE_LINK: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("h1.rubric-list__article-title.rubric-list__article-title_small a[href]")
        .unwrap()
});
static LOAD_MORE_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("footer.rubric-list__get-more a[href]").unwrap());

/// List the article links on one catalog page, plus the next page's URL.
///
/// Links come back in document order, resolved against the site base URL.
/// Fetch or parse trouble is reported and degrades to an empty listing with
/// no next page; it never unwinds into the caller's crawl loop.
pub async fn list_articles(
    fetcher: &dyn Fetcher,
    config: &SiteConfig,
    paper_id: &str,
    catalog_url: &str,
) -> (Vec<ArticleRef>, Option<String>) {
    let html = match fetcher.fetch(catalog_url).await {
        Ok(html) => html,
        Err(e) => {
            error!(url = %catalog_url, error = %e, "Failed to fetch catalog page");
            return (Vec::new(), None);
        }
    };
    parse_listing(&html, config, paper_id, catalog_url)
}

fn parse_listing(
    html: &str,
    config: &SiteConfig,
    paper_id: &str,
    catalog_url: &str,
) -> (Vec<ArticleRef>, Option<String>) {
    let base_url = match Url::parse(&config.base_url) {
        Ok(base) => base,
        Err(e) => {
            error!(base = %config.base_url, error = %e, "Invalid site base URL");
            return (Vec::new(), None);
        }
    };

    let document = Html::parse_document(html);

    let mut links = Vec::new();
    for element in document.select(&TITLE_LINK) {
        if let Some(href) = element.value().attr("href") {
            if let Ok(resolved) = base_url.join(href) {
                links.push(ArticleRef {
                    url: resolved.to_string(),
                    paper_id: paper_id.to_string(),
                });
            }
        }
    }

    let next_page = document
        .select(&LOAD_MORE_LINK)
        .next()
        .and_then(|el| el.value().attr("href"))
        .filter(|href| !href.is_empty())
        .and_then(|href| base_url.join(href).ok())
        .map(|url| url.to_string());

    info!(
        url = %catalog_url,
        count = links.len(),
        has_next = next_page.is_some(),
        "Indexed catalog page"
    );
    debug!(links = ?links, next = ?next_page, "Catalog page details");

    (links, next_page)
}
