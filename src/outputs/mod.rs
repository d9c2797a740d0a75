//! Output writing for validated article pairs.
//!
//! # Output structure
//!
//! ```text
//! out_root/
//! ├── yle_fi_metadata.csv            # delimited index, one row per pair
//! └── yle_fi/
//!     ├── inosmi_ru_20220301_first-article_rus.txt
//!     ├── inosmi_ru_20220301_first-article_original.txt
//!     └── ...
//! ```
//!
//! Each pair becomes two plain-text files (title line + body, CRLF line
//! endings) and one metadata row appended after both files are on disk, so
//! the index never references a partially written pair.

pub mod pairs;

pub use pairs::PairWriter;
