//! Text normalization for extracted article content and metadata fields.
//!
//! Four small, pure functions:
//! - [`normalize`]: whitespace trim + Unicode NFKC, applied to translated
//!   titles and bodies
//! - [`field`]: delimiter escaping for metadata rows
//! - [`russian_header`]: strips the aggregator's fixed source-attribution
//!   prefix or suffix from translated headlines
//! - [`original_date`]: drops the time-of-day suffix from original-article
//!   dates

use unicode_normalization::UnicodeNormalization;

use crate::config::PaperConfig;

/// Trim and NFKC-normalize (compatibility decomposition followed by
/// canonical composition). The second trim keeps the function idempotent:
/// some compatibility decompositions (spacing diacritics like U+00A8) start
/// with a plain space, which can surface at the edges of the first pass's
/// output.
pub fn normalize(text: &str) -> String {
    let composed: String = text.trim().nfkc().collect();
    composed.trim().to_string()
}

/// Replace every occurrence of the metadata delimiter with a single space,
/// so a row can never split on embedded delimiters.
pub fn field(text: &str, delimiter: char) -> String {
    text.replace(delimiter, " ")
}

/// Strip the paper's fixed attribution from a translated headline.
///
/// `"Yle (Финляндия): Headline"` becomes `"Headline"`; `"Headline (Yle,
/// Финляндия)"` loses the suffix plus the one separator character before it.
/// A headline carrying neither is returned unchanged.
pub fn russian_header(title: &str, paper: &PaperConfig) -> String {
    if let Some(rest) = title.strip_prefix(&paper.title_prefix) {
        return rest.to_string();
    }
    if let Some(rest) = title.strip_suffix(&paper.title_suffix) {
        let mut chars = rest.chars();
        chars.next_back();
        return chars.as_str().to_string();
    }
    title.to_string()
}

/// Keep only the date token preceding the first space, discarding an
/// embedded publication time ("12.3.2022 klo 14:05" -> "12.3.2022").
pub fn original_date(text: &str) -> String {
    let trimmed = text.trim();
    trimmed.split(' ').next().unwrap_or(trimmed).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yle() -> PaperConfig {
        PaperConfig {
            paper_id: "yle_fi".to_string(),
            original_link_prefix: "https://yle.fi/".to_string(),
            title_prefix: "Yle (Финляндия): ".to_string(),
            title_suffix: "(Yle, Финляндия)".to_string(),
        }
    }

    #[test]
    fn test_normalize_trims_and_composes() {
        assert_eq!(normalize("  привет  "), "привет");
        // U+FB01 LATIN SMALL LIGATURE FI decomposes under NFKC
        assert_eq!(normalize("ﬁn"), "fin");
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = [
            "  plain text ",
            "ﬁnnish\u{a0}",
            "\u{a0}non-breaking edges\u{a0}",
            "already clean",
            "",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_field_removes_delimiter() {
        let escaped = field("a;b;;c", ';');
        assert!(!escaped.contains(';'));
        assert_eq!(escaped, "a b  c");
    }

    #[test]
    fn test_russian_header_prefix() {
        assert_eq!(
            russian_header("Yle (Финляндия): Заголовок", &yle()),
            "Заголовок"
        );
    }

    #[test]
    fn test_russian_header_suffix() {
        assert_eq!(
            russian_header("Заголовок (Yle, Финляндия)", &yle()),
            "Заголовок"
        );
    }

    #[test]
    fn test_russian_header_unchanged() {
        assert_eq!(russian_header("Просто заголовок", &yle()), "Просто заголовок");
    }

    #[test]
    fn test_original_date_drops_time() {
        assert_eq!(original_date("12.3.2022 klo 14:05"), "12.3.2022");
        assert_eq!(original_date("12.3.2022"), "12.3.2022");
        assert_eq!(original_date("  12.3.2022 14:05"), "12.3.2022");
    }
}
