//! Remove duplicate words across wordlist files and write
//! the results back out.
use crate::{normalize_word, Error, Result};
use std::{
    collections::BTreeSet,
    ffi::OsString,
    fs::OpenOptions,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

/// Read the unique normalized words in some text.
pub fn read_unique(text: &str, delimiter: &str) -> BTreeSet<String> {
    text.split(delimiter).filter_map(normalize_word).collect()
}

/// Words attributed to a source file.
#[derive(Debug, Clone)]
pub struct WordSet {
    /// File the words were read from.
    pub source: PathBuf,
    /// Words first seen in the source file.
    pub words: BTreeSet<String>,
}

/// Deduplicates words across a sequence of sources.
///
/// A word belongs to the first source that contains it,
/// later sources only keep the words not seen before.
#[derive(Debug, Default)]
pub struct Dedupe {
    sets: Vec<WordSet>,
    all: BTreeSet<String>,
}

impl Dedupe {
    /// Create an empty deduplication.
    pub fn new() -> Self {
        Default::default()
    }

    /// Add the words for a source.
    ///
    /// Returns the number of words kept for the source.
    pub fn add(
        &mut self,
        source: impl Into<PathBuf>,
        words: BTreeSet<String>,
    ) -> usize {
        let words: BTreeSet<String> = words
            .into_iter()
            .filter(|word| !self.all.contains(word))
            .collect();
        self.all.extend(words.iter().cloned());
        let kept = words.len();
        self.sets.push(WordSet {
            source: source.into(),
            words,
        });
        kept
    }

    /// Read and add the words in a file.
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
        Ok(self.add(path, read_unique(&text, delimiter)))
    }

    /// Number of unique words across all sources.
    pub fn total(&self) -> usize {
        self.all.len()
    }

    /// Per source word sets in the order they were added.
    pub fn sets(&self) -> &[WordSet] {
        &self.sets
    }

    /// All unique words.
    pub fn combined(&self) -> &BTreeSet<String> {
        &self.all
    }
}

/// Compute the output path for an input file.
///
/// `dir/words.txt` becomes `words.new.txt` in the output directory.
pub fn output_path(
    input: impl AsRef<Path>,
    outdir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let input = input.as_ref();
    let stem = input
        .file_stem()
        .ok_or_else(|| Error::NotFile(input.to_path_buf()))?;
    let mut name = OsString::from(stem);
    name.push(".new");
    if let Some(extension) = input.extension() {
        name.push(".");
        name.push(extension);
    }
    Ok(outdir.as_ref().join(name))
}

/// Write sorted words joined by a delimiter to a new file.
///
/// Fails when the file already exists. The delimiter is written
/// as is without any newline translation.
pub fn write_wordlist<'a>(
    path: impl AsRef<Path>,
    words: impl IntoIterator<Item = &'a String>,
    delimiter: &str,
) -> Result<usize> {
    let path = path.as_ref();
    let mut words: Vec<&String> = words.into_iter().collect();
    words.sort();
    let contents = words
        .iter()
        .map(|w| w.as_str())
        .collect::<Vec<_>>()
        .join(delimiter);

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| {
            if e.kind() == ErrorKind::AlreadyExists {
                Error::FileExists(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(words.len())
}
