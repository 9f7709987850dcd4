use std::path::PathBuf;
use thiserror::Error;

/// Errors generated by the wordlist library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a path is expected to be a file.
    #[error("path {0} is not a file")]
    NotFile(PathBuf),

    /// Error generated when a path is expected to be a directory.
    #[error("output dir {0} is not a valid directory")]
    NotDirectory(PathBuf),

    /// Error generated when an output file would be overwritten.
    #[error("output file {0} already exists")]
    FileExists(PathBuf),

    /// Error generated when a delimiter is empty.
    #[error("word delimiter must not be empty")]
    EmptyDelimiter,

    /// Error generated when no input files are given.
    #[error("at least one input file is required")]
    NoInput,

    /// Errors generated by the io module.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Errors generated parsing a glob pattern.
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),

    /// Errors generated reading a glob match.
    #[error(transparent)]
    Glob(#[from] glob::GlobError),
}
