//! Settings for password generation.
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Where digits and symbols may be inserted.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// After each word except the last one.
    #[default]
    Between,
    /// Before and after every word.
    BeforeAfter,
    /// At every character boundary including inside words.
    Everywhere,
}

impl Placement {
    /// All placement variants.
    pub const ALL: [Placement; 3] =
        [Placement::Between, Placement::BeforeAfter, Placement::Everywhere];

    /// Determine if `index` is an insertion point for a word
    /// of `len` characters.
    ///
    /// Indices range over `0..=len`; `last` marks the final
    /// word of the password.
    pub fn is_insertion_point(&self, index: usize, len: usize, last: bool) -> bool {
        match self {
            Placement::Between => index == len && !last,
            Placement::BeforeAfter => index == 0 || index == len,
            Placement::Everywhere => true,
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Between => "between",
                Self::BeforeAfter => "beforeafter",
                Self::Everywhere => "everywhere",
            }
        )
    }
}

impl FromStr for Placement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "between" => Ok(Self::Between),
            "beforeafter" => Ok(Self::BeforeAfter),
            "everywhere" => Ok(Self::Everywhere),
            _ => Err(Error::UnknownPlacement(s.to_owned())),
        }
    }
}

/// Options for password generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Minimum word length in characters.
    pub min_word_len: usize,
    /// Maximum word length in characters, unbounded when `None`.
    pub max_word_len: Option<usize>,
    /// Number of words in each password.
    pub num_words: usize,
    /// Allow words that contain a hyphen.
    pub allow_hyphen: bool,
    /// Allow words that contain a space.
    pub allow_space: bool,
    /// Probability a character is replaced from the
    /// substitution table.
    pub substitute_probability: f64,
    /// Probability a character is uppercased.
    pub uppercase_probability: f64,
    /// Always uppercase the first character of each word.
    ///
    /// The first character is then skipped by the other
    /// transformations.
    pub upper_first: bool,
    /// Probability a digit or symbol is inserted at each
    /// insertion point.
    pub symbol_probability: f64,
    /// Where digits and symbols may be inserted.
    pub placement: Placement,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_word_len: 6,
            max_word_len: None,
            num_words: 4,
            allow_hyphen: false,
            allow_space: false,
            substitute_probability: 0.0,
            uppercase_probability: 0.0,
            upper_first: false,
            symbol_probability: 1.0,
            placement: Default::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create a config for a number of words.
    pub fn new(num_words: usize) -> Self {
        Self {
            num_words,
            ..Default::default()
        }
    }

    /// Config that only selects and concatenates words.
    pub fn plain(num_words: usize) -> Self {
        Self::new(num_words).symbols(0.0, Placement::Between)
    }

    /// Set the word length bounds.
    pub fn lengths(mut self, min: usize, max: Option<usize>) -> Self {
        self.min_word_len = min;
        self.max_word_len = max;
        self
    }

    /// Allow words containing hyphens.
    pub fn hyphen(mut self, allow: bool) -> Self {
        self.allow_hyphen = allow;
        self
    }

    /// Allow words containing spaces.
    pub fn space(mut self, allow: bool) -> Self {
        self.allow_space = allow;
        self
    }

    /// Set the substitution probability.
    pub fn substitute(mut self, probability: f64) -> Self {
        self.substitute_probability = probability;
        self
    }

    /// Set the uppercase probability.
    pub fn uppercase(mut self, probability: f64) -> Self {
        self.uppercase_probability = probability;
        self
    }

    /// Force the first character of each word to uppercase.
    pub fn upper_first(mut self, flag: bool) -> Self {
        self.upper_first = flag;
        self
    }

    /// Set the symbol probability and placement.
    pub fn symbols(mut self, probability: f64, placement: Placement) -> Self {
        self.symbol_probability = probability;
        self.placement = placement;
        self
    }

    /// Check the settings are usable.
    pub fn validate(&self) -> Result<()> {
        check_probability("substitute_probability", self.substitute_probability)?;
        check_probability("uppercase_probability", self.uppercase_probability)?;
        check_probability("symbol_probability", self.symbol_probability)?;

        if self.num_words == 0 {
            return Err(Error::ZeroWords);
        }

        if let Some(max) = self.max_word_len {
            if max == 0 {
                return Err(Error::ZeroMaxLength);
            }
            if max < self.min_word_len {
                return Err(Error::InvalidLengthBounds {
                    min: self.min_word_len,
                    max,
                });
            }
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::InvalidProbability { name, value });
    }
    Ok(())
}
