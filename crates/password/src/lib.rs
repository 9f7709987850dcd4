#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Generate memorable passwords from dictionary words.
//!
//! Generation is a single pass pipeline run once per password:
//!
//! 1. Words are filtered by length and hyphen/space policy.
//! 2. Distinct words are sampled uniformly at random.
//! 3. Characters are substituted and uppercased with some probability.
//! 4. Digits and symbols are inserted according to a [Placement].
//! 5. The words are concatenated.
//!
//! Randomness is always passed in through a [RandomSource] so
//! generation is deterministic under a seeded or scripted source.

mod config;
mod error;
pub mod filter;
pub mod generator;
mod random;
pub mod strength;
pub mod symbols;
pub mod transform;

pub use config::{GeneratorConfig, Placement};
pub use error::Error;
pub use generator::PasswordGenerator;
pub use random::RandomSource;
pub use strength::{CrackTimes, StrengthEstimator, Zxcvbn};
pub use transform::SubstitutionTable;

pub use secrecy;
pub use zxcvbn;

/// Default cryptographically secure RNG.
pub fn csprng() -> impl rand::CryptoRng + rand::Rng {
    rand::rngs::OsRng
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Numerical digits.
pub const DIGITS: &[char] =
    &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Symbols that may be inserted around words.
pub const SYMBOLS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '_', '-', '?', '.', ',', '~', '"',
    '\'', '(', ')', '*', '+', '/', ':', ';', '<', '>', '=', '`', '|',
];
