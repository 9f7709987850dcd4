//! Command line interface for the dictpw password generator.

/// Target for tracing macros.
///
/// Used so that error messages are succinct rather than
/// including the full module path.
pub const TARGET: &str = "dictpw";

pub mod cli;
pub mod commands;
mod config;
mod error;

pub use config::{InputConfig, Settings};
pub use error::Error;

/// Result type for the executable.
pub type Result<T> = std::result::Result<T, error::Error>;
