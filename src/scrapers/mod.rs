//! Site scrapers and the DOM helpers they share.
//!
//! One submodule per page kind:
//!
//! | Page | Module | Extracts |
//! |------|--------|----------|
//! | Aggregator catalog page | [`listing`] | article links + next-page link |
//! | Translated article (inosmi.ru) | [`inosmi`] | title/author/date/body + original link |
//! | Original article (yle.fi) | [`yle`] | title/author/date/body, two layout variants |
//!
//! # Common patterns
//!
//! The aggregator and the source paper both ship several coexisting page
//! layouts, so field extraction is expressed as an ordered chain of
//! selectors tried until one yields a non-empty result ([`first_element`],
//! [`first_text`]). Selectors are compiled once into `Lazy` statics inside
//! each submodule. Extraction failures surface as
//! [`ScrapeError`](crate::error::ScrapeError) values, isolated per article
//! by the pipeline.

use scraper::{ElementRef, Html, Node, Selector};

pub mod inosmi;
pub mod listing;
pub mod yle;

/// Try each selector in order, returning the first matching element.
pub(crate) fn first_element<'a>(
    document: &'a Html,
    chain: &[&Selector],
) -> Option<ElementRef<'a>> {
    chain
        .iter()
        .find_map(|selector| document.select(selector).next())
}

/// Try each selector in order, returning the first non-empty trimmed text.
/// The chain makes layout-variant fallback data rather than control flow:
/// supporting a new markup variant means appending a selector.
pub(crate) fn first_text(document: &Html, chain: &[&Selector]) -> Option<String> {
    chain.iter().find_map(|selector| {
        document
            .select(selector)
            .next()
            .map(|el| element_text(el).trim().to_string())
            .filter(|text| !text.is_empty())
    })
}

/// Concatenated text of an element's descendants, as the page renders it.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Like [`element_text`], but subtrees rooted at an element carrying
/// `skip_class` contribute nothing. Used to drop invisible accessibility
/// markers embedded in paragraph text.
pub(crate) fn text_excluding(element: ElementRef<'_>, skip_class: &str) -> String {
    let mut out = String::new();
    collect_text(element, skip_class, &mut out);
    out
}

fn collect_text(element: ElementRef<'_>, skip_class: &str, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                if el.classes().any(|class| class == skip_class) {
                    continue;
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, skip_class, out);
                }
            }
            _ => {}
        }
    }
}

/// Whether any ancestor element carries the given class.
pub(crate) fn has_ancestor_with_class(element: ElementRef<'_>, class: &str) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().classes().any(|c| c == class))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_text_falls_through_empty_matches() {
        let document = Html::parse_document(
            r#"<html><body><h1 class="a"> </h1><h1 class="b">Title</h1></body></html>"#,
        );
        let primary = Selector::parse("h1.a").unwrap();
        let fallback = Selector::parse("h1.b").unwrap();
        assert_eq!(
            first_text(&document, &[&primary, &fallback]),
            Some("Title".to_string())
        );
    }

    #[test]
    fn test_first_text_none_when_nothing_matches() {
        let document = Html::parse_document("<html><body><p>x</p></body></html>");
        let selector = Selector::parse("h1").unwrap();
        assert_eq!(first_text(&document, &[&selector]), None);
    }

    #[test]
    fn test_text_excluding_drops_marked_spans() {
        let document = Html::parse_document(
            r#"<p>Go <span class="hidden-marker">jump elsewhere</span>read <b>this</b></p>"#,
        );
        let p = Selector::parse("p").unwrap();
        let element = document.select(&p).next().unwrap();
        assert_eq!(text_excluding(element, "hidden-marker"), "Go read this");
    }

    #[test]
    fn test_has_ancestor_with_class() {
        let document = Html::parse_document(
            r#"<div class="outer"><div><p>deep</p></div></div><p>shallow</p>"#,
        );
        let p = Selector::parse("p").unwrap();
        let mut paragraphs = document.select(&p);
        let deep = paragraphs.next().unwrap();
        let shallow = paragraphs.next().unwrap();
        assert!(has_ancestor_with_class(deep, "outer"));
        assert!(!has_ancestor_with_class(shallow, "outer"));
    }
}
