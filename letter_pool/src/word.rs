//! Target words and the fixed vocabulary they are drawn from.

use std::fmt;

use rand::Rng;

use crate::error::{PoolError, Result};

// ════════════════════════════════════════════════════════════════════════════
// Word
// ════════════════════════════════════════════════════════════════════════════

/// An immutable, ordered sequence of characters the player must spell.
///
/// Comparison is exact and case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Word(text.into())
    }

    /// Number of characters (not bytes).
    pub fn len(&self) -> usize { self.0.chars().count() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn chars(&self) -> std::str::Chars<'_> { self.0.chars() }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Word {
    fn from(s: &str) -> Self { Word::new(s) }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool { self.0 == other }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool { self.0 == *other }
}

// ════════════════════════════════════════════════════════════════════════════
// Vocabulary
// ════════════════════════════════════════════════════════════════════════════

/// The word list the game ships with: the "augh/ough/al" family that early
/// spellers tend to trip over.
pub const DEFAULT_WORDS: [&str; 12] = [
    "walk", "talk", "author", "autumn", "august", "daughter",
    "caught", "brought", "thought", "cough", "laugh", "enough",
];

/// A fixed list of candidate target words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<Word>,
}

impl Vocabulary {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Vocabulary { words: words.into_iter().map(Word::new).collect() }
    }

    pub fn words(&self) -> &[Word] { &self.words }
    pub fn len(&self) -> usize { self.words.len() }
    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    /// Length of the longest word, or 0 for an empty vocabulary.
    pub fn longest(&self) -> usize {
        self.words.iter().map(Word::len).max().unwrap_or(0)
    }

    /// Pick one word uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Word> {
        if self.words.is_empty() {
            return Err(PoolError::EmptyVocabulary);
        }
        Ok(&self.words[rng.gen_range(0..self.words.len())])
    }
}

impl Default for Vocabulary {
    fn default() -> Self { Vocabulary::new(DEFAULT_WORDS) }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn word_len_counts_chars() {
        assert_eq!(Word::from("talk").len(), 4);
        assert_eq!(Word::from("daughter").len(), 8);
        assert!(Word::from("").is_empty());
    }

    #[test]
    fn word_comparison_is_case_sensitive() {
        assert_eq!(Word::from("talk"), "talk");
        assert_ne!(Word::from("Talk"), Word::from("talk"));
    }

    #[test]
    fn default_vocabulary_fits_the_default_pad() {
        let v = Vocabulary::default();
        assert_eq!(v.len(), 12);
        assert!(v.longest() <= crate::PADDED_LENGTH);
    }

    #[test]
    fn choose_from_empty_vocabulary_fails() {
        let v = Vocabulary::new(Vec::<String>::new());
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(v.choose(&mut rng), Err(PoolError::EmptyVocabulary));
    }

    #[test]
    fn choose_reaches_every_word() {
        let v = Vocabulary::default();
        let mut rng = SmallRng::seed_from_u64(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            seen.insert(v.choose(&mut rng).unwrap().clone());
        }
        assert_eq!(seen.len(), v.len());
    }
}
