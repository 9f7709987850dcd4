//! Insert digits and symbols into words.
use crate::{GeneratorConfig, RandomSource, DIGITS, SYMBOLS};

/// Digits followed by symbols.
pub fn symbol_alphabet() -> Vec<char> {
    DIGITS.iter().chain(SYMBOLS.iter()).copied().collect()
}

/// Insert random characters from `alphabet` into a word.
///
/// Every insertion point selected by the placement policy
/// receives one character with the configured probability.
/// Nothing is inserted when the probability is zero.
pub fn inject_symbols<R: RandomSource>(
    word: &str,
    last: bool,
    config: &GeneratorConfig,
    alphabet: &[char],
    rng: &mut R,
) -> String {
    if config.symbol_probability <= 0.0 || alphabet.is_empty() {
        return word.to_owned();
    }

    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();
    let mut output = String::with_capacity(word.len() * 2);
    for index in 0..=len {
        if config.placement.is_insertion_point(index, len, last)
            && rng.chance(config.symbol_probability)
        {
            if let Some(symbol) = rng.choose(alphabet) {
                output.push(*symbol);
            }
        }
        if let Some(c) = chars.get(index) {
            output.push(*c);
        }
    }
    output
}
