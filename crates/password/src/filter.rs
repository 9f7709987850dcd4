//! Select the candidate words a generator may use.
use crate::{Error, GeneratorConfig, Result};
use indexmap::IndexSet;

/// Determine if a word satisfies the length and hyphen/space
/// policy of a config.
///
/// Length is measured in characters.
pub fn is_accepted(word: &str, config: &GeneratorConfig) -> bool {
    let len = word.chars().count();
    if len < config.min_word_len {
        return false;
    }
    if let Some(max) = config.max_word_len {
        if len > max {
            return false;
        }
    }
    if !config.allow_space && word.contains(' ') {
        return false;
    }
    if !config.allow_hyphen && word.contains('-') {
        return false;
    }
    true
}

/// Filter words by a config.
///
/// The result is deduplicated and must hold at least as many
/// words as the config requests for each password.
pub fn filter_words<'a>(
    words: impl IntoIterator<Item = &'a str>,
    config: &GeneratorConfig,
) -> Result<Vec<String>> {
    let accepted: IndexSet<&str> = words
        .into_iter()
        .filter(|word| is_accepted(word, config))
        .collect();

    tracing::debug!(accepted = %accepted.len(), "filter_words");

    if accepted.len() < config.num_words {
        return Err(Error::WordlistTooShort {
            available: accepted.len(),
            required: config.num_words,
        });
    }
    Ok(accepted.into_iter().map(|w| w.to_owned()).collect())
}
