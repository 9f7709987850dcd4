//! Utility for generating passwords from dictionary words.
use crate::{
    filter::filter_words,
    symbols::{inject_symbols, symbol_alphabet},
    transform::transform_word,
    GeneratorConfig, RandomSource, Result, SubstitutionTable,
};
use secrecy::SecretString;

/// Select `count` distinct words uniformly at random.
///
/// Uses a partial Fisher-Yates shuffle over the word indices so
/// no word is selected twice. `count` is clamped to the number
/// of words.
pub fn sample_words<'a, R: RandomSource>(
    words: &'a [String],
    count: usize,
    rng: &mut R,
) -> Vec<&'a str> {
    let count = count.min(words.len());
    let mut indices: Vec<usize> = (0..words.len()).collect();
    for i in 0..count {
        let j = i + rng.uniform(indices.len() - i);
        indices.swap(i, j);
    }
    indices[..count]
        .iter()
        .map(|index| words[*index].as_str())
        .collect()
}

/// Concatenate words into a password without any separator.
pub fn assemble<S: AsRef<str>>(parts: &[S]) -> String {
    parts.iter().map(|p| p.as_ref()).collect()
}

/// Generates passwords from a filtered wordlist.
#[derive(Debug, Clone)]
pub struct PasswordGenerator {
    config: GeneratorConfig,
    words: Vec<String>,
    table: SubstitutionTable,
    alphabet: Vec<char>,
}

impl PasswordGenerator {
    /// Create a password generator.
    ///
    /// The config is validated and the words filtered up front,
    /// so an unusable config or a wordlist with too few
    /// distinct words is an error before any sampling happens.
    pub fn new<'a>(
        config: GeneratorConfig,
        words: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self> {
        config.validate()?;
        let words = filter_words(words, &config)?;
        tracing::debug!(
            words = %words.len(),
            num_words = %config.num_words,
            placement = %config.placement,
            "password_generator::new",
        );
        Ok(Self {
            config,
            words,
            table: Default::default(),
            alphabet: symbol_alphabet(),
        })
    }

    /// Use a different substitution table.
    pub fn with_table(mut self, table: SubstitutionTable) -> Self {
        self.table = table;
        self
    }

    /// Use a different alphabet for inserted characters.
    pub fn with_alphabet(mut self, alphabet: Vec<char>) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Settings for this generator.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Words that passed the filter.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Generate the final form of each word of a password.
    pub fn parts<R: RandomSource>(&self, rng: &mut R) -> Vec<String> {
        let selection = sample_words(&self.words, self.config.num_words, rng);
        let last_index = selection.len().saturating_sub(1);
        selection
            .into_iter()
            .enumerate()
            .map(|(index, word)| {
                let word =
                    transform_word(word, &self.config, &self.table, rng);
                inject_symbols(
                    &word,
                    index == last_index,
                    &self.config,
                    &self.alphabet,
                    rng,
                )
            })
            .collect()
    }

    /// Generate a password.
    pub fn one<R: RandomSource>(&self, rng: &mut R) -> SecretString {
        SecretString::new(assemble(&self.parts(rng)).into())
    }

    /// Generate multiple passwords.
    ///
    /// Each password samples its words independently.
    pub fn many<R: RandomSource>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Vec<SecretString> {
        (0..count).map(|_| self.one(rng)).collect()
    }
}
