//! Set of candidate words loaded from one or more sources.
use crate::{normalize_word, Error, Result, BUILTIN_WORDS, DEFAULT_DELIMITER};
use indexmap::IndexSet;
use std::path::{Path, PathBuf};

/// Deduplicated set of lowercase words.
///
/// Insertion order is kept so the words can be indexed
/// when sampling.
#[derive(Debug, Default, Clone)]
pub struct Wordlist {
    words: IndexSet<String>,
}

impl Wordlist {
    /// Create an empty wordlist.
    pub fn new() -> Self {
        Default::default()
    }

    /// Wordlist bundled with the library.
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_WORDS, DEFAULT_DELIMITER)
    }

    /// Parse words from text split on a delimiter.
    pub fn parse(text: &str, delimiter: &str) -> Self {
        let mut wordlist = Self::new();
        wordlist.add_text(text, delimiter);
        wordlist
    }

    /// Add the words in some text split on a delimiter.
    ///
    /// Returns the number of words that were not already
    /// in the list.
    pub fn add_text(&mut self, text: &str, delimiter: &str) -> usize {
        let before = self.words.len();
        self.words
            .extend(text.split(delimiter).filter_map(normalize_word));
        self.words.len() - before
    }

    /// Add the words in a file.
    pub fn add_file(
        &mut self,
        path: impl AsRef<Path>,
        delimiter: &str,
    ) -> Result<usize> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::NotFile(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        let added = self.add_text(&text, delimiter);
        tracing::debug!(
            path = %path.display(),
            added = %added,
            "wordlist::add_file",
        );
        Ok(added)
    }

    /// Load the union of the words in a collection of files.
    pub fn load_files<P: AsRef<Path>>(
        paths: impl IntoIterator<Item = P>,
        delimiter: &str,
    ) -> Result<Self> {
        let mut wordlist = Self::new();
        for path in paths {
            wordlist.add_file(path, delimiter)?;
        }
        Ok(wordlist)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Determine if this wordlist is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Determine if a word is in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate the words.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_str())
    }
}

impl<S: AsRef<str>> FromIterator<S> for Wordlist {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut wordlist = Self::new();
        wordlist.extend(iter);
        wordlist
    }
}

impl<S: AsRef<str>> Extend<S> for Wordlist {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.words.extend(
            iter.into_iter().filter_map(|w| normalize_word(w.as_ref())),
        );
    }
}

/// Expand glob patterns to the files they match.
///
/// Matches that are not files are skipped.
pub fn expand_globs<S: AsRef<str>>(
    patterns: impl IntoIterator<Item = S>,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let mut matched = 0;
        for entry in glob::glob(pattern)? {
            let path = entry?;
            if path.is_file() {
                files.push(path);
                matched += 1;
            }
        }
        if matched == 0 {
            tracing::warn!(pattern = %pattern, "glob matched no files");
        }
    }
    Ok(files)
}
