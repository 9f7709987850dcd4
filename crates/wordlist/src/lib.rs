#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Wordlist loading and deduplication for the dictpw
//! password generator.
//!
//! Words are normalized on the way in: surrounding whitespace
//! is trimmed, the word is lowercased and empty tokens are
//! discarded.
mod dedupe;
mod error;
mod wordlist;

pub use dedupe::{output_path, read_unique, write_wordlist, Dedupe, WordSet};
pub use error::Error;
pub use wordlist::{expand_globs, Wordlist};

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Default delimiter between words.
pub const DEFAULT_DELIMITER: &str = "\n";

/// Wordlist bundled with the library.
pub(crate) const BUILTIN_WORDS: &str =
    include_str!("../wordlists/words.txt");

/// Normalize a raw token into a word.
///
/// Returns `None` for tokens that are empty once trimmed.
pub fn normalize_word(token: &str) -> Option<String> {
    let word = token.trim();
    if word.is_empty() {
        None
    } else {
        Some(word.to_lowercase())
    }
}

/// Parse a delimiter given on the command line.
///
/// Supports the `\n`, `\r`, `\t` and `\\` escapes so that
/// delimiters can be passed without shell quoting tricks.
pub fn parse_delimiter(value: &str) -> Result<String> {
    let mut delimiter = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            delimiter.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => delimiter.push('\n'),
            Some('r') => delimiter.push('\r'),
            Some('t') => delimiter.push('\t'),
            Some('\\') => delimiter.push('\\'),
            Some(other) => {
                delimiter.push('\\');
                delimiter.push(other);
            }
            None => delimiter.push('\\'),
        }
    }
    if delimiter.is_empty() {
        return Err(Error::EmptyDelimiter);
    }
    Ok(delimiter)
}
