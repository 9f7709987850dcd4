//! Character substitution and casing.
use crate::{GeneratorConfig, RandomSource};
use std::collections::HashMap;

/// Replacements for letters that look alike.
#[derive(Debug, Clone)]
pub struct SubstitutionTable {
    table: HashMap<char, Vec<char>>,
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        let table = [
            ('s', vec!['5', '$']),
            ('a', vec!['@']),
            ('t', vec!['7']),
            ('l', vec!['1']),
            ('o', vec!['0']),
            ('b', vec!['8']),
            ('g', vec!['9']),
            ('e', vec!['3']),
            ('i', vec!['!']),
        ];
        Self {
            table: table.into_iter().collect(),
        }
    }
}

impl SubstitutionTable {
    /// Create an empty table.
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Set the replacements for a letter.
    pub fn insert(&mut self, letter: char, replacements: Vec<char>) {
        self.table.insert(letter, replacements);
    }

    /// Replacements for a letter.
    pub fn get(&self, letter: char) -> Option<&[char]> {
        self.table.get(&letter).map(|r| r.as_slice())
    }

    /// Substitute a character with a random replacement.
    ///
    /// Characters without replacements are returned unchanged.
    pub fn substitute<R: RandomSource>(&self, c: char, rng: &mut R) -> char {
        self.get(c)
            .and_then(|replacements| rng.choose(replacements))
            .copied()
            .unwrap_or(c)
    }
}

/// Transform a word.
///
/// The word is lowercased, then the first character is
/// uppercased when the config forces it. Every other character
/// is substituted and then uppercased, each with its own
/// probability.
pub fn transform_word<R: RandomSource>(
    word: &str,
    config: &GeneratorConfig,
    table: &SubstitutionTable,
    rng: &mut R,
) -> String {
    let word = word.to_lowercase();
    let mut chars = word.chars();
    let mut output = String::with_capacity(word.len());

    if config.upper_first {
        if let Some(first) = chars.next() {
            output.extend(first.to_uppercase());
        }
    }

    for mut c in chars {
        if rng.chance(config.substitute_probability) {
            c = table.substitute(c, rng);
        }
        // may be a no-op after substitution
        if rng.chance(config.uppercase_probability) {
            output.extend(c.to_uppercase());
        } else {
            output.push(c);
        }
    }
    output
}
