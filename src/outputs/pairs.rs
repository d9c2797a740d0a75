//! Persists article pairs as text files plus a delimited metadata index.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument};

use crate::config::SiteConfig;
use crate::error::Result;
use crate::models::{ArticlePair, ExtractedArticle};
use crate::normalize;

/// Characters of a URL that may not appear in a filename.
static FILENAME_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[/:.]").unwrap());

const METADATA_COLUMNS: [&str; 9] = [
    "original filename",
    "rus filename",
    "original title",
    "rus title",
    "original author",
    "original date",
    "rus date",
    "original link",
    "rus link",
];

/// Derive the pair's filename stem from the translated article's URL: drop
/// the scheme, cut at the page extension, turn path punctuation into
/// underscores.
pub fn filename_stem(url: &str) -> String {
    let rest = url.split("https://").last().unwrap_or(url);
    let rest = rest.split(".html").next().unwrap_or(rest);
    FILENAME_PUNCT.replace_all(rest, "_").into_owned()
}

/// Single-run writer for one paper's pairs. Created once per run; creating
/// it lays down the article directory and the metadata header.
pub struct PairWriter {
    paper_id: String,
    article_dir: PathBuf,
    metadata_path: PathBuf,
    delimiter: char,
}

impl PairWriter {
    /// Prepare the output directory (created only if absent) and start the
    /// metadata file for this run with its header row.
    #[instrument(level = "info", skip(config), fields(paper = %paper_id))]
    pub async fn create(config: &SiteConfig, paper_id: &str, out_root: &Path) -> Result<Self> {
        let article_dir = out_root.join(paper_id);
        fs::create_dir_all(&article_dir).await?;

        let metadata_path =
            out_root.join(format!("{}_{}", paper_id, config.metadata_filename));
        let header = METADATA_COLUMNS.join(&config.delimiter.to_string());
        fs::write(&metadata_path, format!("{header}\r\n")).await?;

        info!(dir = %article_dir.display(), metadata = %metadata_path.display(), "Writer initialized");

        Ok(PairWriter {
            paper_id: paper_id.to_string(),
            article_dir,
            metadata_path,
            delimiter: config.delimiter,
        })
    }

    /// Write the pair's two text files, then append its metadata row. The
    /// row goes in last so the index never points at missing files.
    #[instrument(level = "info", skip_all, fields(url = %pair.translated.url))]
    pub async fn write_pair(&self, pair: &ArticlePair) -> Result<()> {
        let stem = filename_stem(&pair.translated.url);
        let rus_name = format!("{}/{}_rus.txt", self.paper_id, stem);
        let original_name = format!("{}/{}_original.txt", self.paper_id, stem);

        fs::write(
            self.article_dir.join(format!("{stem}_rus.txt")),
            article_file_contents(&pair.translated),
        )
        .await?;
        fs::write(
            self.article_dir.join(format!("{stem}_original.txt")),
            article_file_contents(&pair.original),
        )
        .await?;

        let row = self.metadata_row(pair, &original_name, &rus_name);
        let mut metadata = fs::OpenOptions::new()
            .append(true)
            .open(&self.metadata_path)
            .await?;
        metadata.write_all(row.as_bytes()).await?;

        info!(stem = %stem, "Wrote article pair");
        Ok(())
    }

    fn metadata_row(&self, pair: &ArticlePair, original_name: &str, rus_name: &str) -> String {
        let escape = |text: &str| normalize::field(text, self.delimiter);
        let fields = [
            original_name.to_string(),
            rus_name.to_string(),
            escape(&pair.original.title),
            escape(&pair.translated.title),
            escape(&pair.original.author),
            escape(&pair.original.published_date),
            escape(&pair.translated.published_date),
            escape(&pair.original.url),
            escape(&pair.translated.url),
        ];
        format!("{}\r\n", fields.join(&self.delimiter.to_string()))
    }
}

fn article_file_contents(article: &ExtractedArticle) -> String {
    format!("{}\r\n{}\r\n", article.title, article.body)
}
