use thiserror::Error;

/// Errors generated by the password library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a probability is outside of `[0, 1]`.
    #[error("probability {name} should be a valid number from [0, 1], got {value}")]
    InvalidProbability {
        /// Name of the setting.
        name: &'static str,
        /// Value that was given.
        value: f64,
    },

    /// Error generated when the max word length is less than the min.
    #[error("max word length should not be < min word length ({max} < {min})")]
    InvalidLengthBounds {
        /// Minimum word length.
        min: usize,
        /// Maximum word length.
        max: usize,
    },

    /// Error generated when the max word length is zero.
    #[error("max word length should be a valid int > 0, got 0")]
    ZeroMaxLength,

    /// Error generated when zero words are requested.
    #[error("number of words should be a valid int > 0, got 0")]
    ZeroWords,

    /// Error generated when the filtered wordlist cannot
    /// supply enough distinct words.
    #[error("filtered wordlist has {available} unique elements, which is too short for password length {required}")]
    WordlistTooShort {
        /// Number of words that passed the filter.
        available: usize,
        /// Number of words per password.
        required: usize,
    },

    /// Error generated parsing an unknown placement.
    #[error("unknown symbol placement '{0}', expected one of between, beforeafter, everywhere")]
    UnknownPlacement(String),
}
