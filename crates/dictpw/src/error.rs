use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("path {0} is not a file")]
    NotFile(PathBuf),

    #[error("number of passwords should be a valid int > 0, got 0")]
    ZeroPasswords,

    #[error("password to check must not be empty")]
    EmptyPassword,

    #[error(transparent)]
    Password(#[from] dictpw_password::Error),

    #[error(transparent)]
    Wordlist(#[from] dictpw_wordlist::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}
