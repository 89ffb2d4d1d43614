//! Candidate pools — the target's letters plus filler, shuffled.

use std::collections::HashMap;

use log::debug;
use rand::Rng;

use crate::error::{PoolError, Result};
use crate::shuffle::shuffle;
use crate::word::{Vocabulary, Word};

/// Number of letters always offered for spelling a word.
pub const PADDED_LENGTH: usize = 10;

/// Letters filler is drawn from.
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

// ════════════════════════════════════════════════════════════════════════════
// CandidateLetter / CandidatePool
// ════════════════════════════════════════════════════════════════════════════

/// One letter on offer.  `index` is its fixed slot in the pool (0..N); the
/// letter carries no identity beyond that slot once placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidateLetter {
    pub letter: char,
    pub index:  usize,
}

/// The shuffled, fixed-size set of letters offered for one session.
///
/// Built once at session start and immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidatePool {
    letters: Vec<CandidateLetter>,
}

impl CandidatePool {
    fn from_chars(chars: Vec<char>) -> Self {
        let letters = chars.into_iter()
            .enumerate()
            .map(|(index, letter)| CandidateLetter { letter, index })
            .collect();
        CandidatePool { letters }
    }

    pub fn letters(&self) -> &[CandidateLetter] { &self.letters }
    pub fn len(&self) -> usize { self.letters.len() }
    pub fn is_empty(&self) -> bool { self.letters.is_empty() }
    pub fn get(&self, index: usize) -> Option<&CandidateLetter> { self.letters.get(index) }
    pub fn iter(&self) -> std::slice::Iter<'_, CandidateLetter> { self.letters.iter() }

    /// First slot holding `letter`, if any.
    pub fn find(&self, letter: char) -> Option<&CandidateLetter> {
        self.letters.iter().find(|c| c.letter == letter)
    }

    /// The pool's letters in slot order, as a string.
    pub fn as_string(&self) -> String {
        self.letters.iter().map(|c| c.letter).collect()
    }

    /// True when every character of `word` is present at least as many times
    /// as it occurs in the word.
    pub fn contains_word(&self, word: &Word) -> bool {
        let mut available: HashMap<char, usize> = HashMap::new();
        for c in &self.letters {
            *available.entry(c.letter).or_default() += 1;
        }
        word.chars().all(|ch| match available.get_mut(&ch) {
            Some(n) if *n > 0 => { *n -= 1; true }
            _ => false,
        })
    }
}

impl<'a> IntoIterator for &'a CandidatePool {
    type Item = &'a CandidateLetter;
    type IntoIter = std::slice::Iter<'a, CandidateLetter>;
    fn into_iter(self) -> Self::IntoIter { self.letters.iter() }
}

// ════════════════════════════════════════════════════════════════════════════
// Builders
// ════════════════════════════════════════════════════════════════════════════

/// Choose a target uniformly from `vocabulary` and build its pool.
///
/// Fails with [`PoolError::WordTooLong`] when the chosen word does not fit in
/// `padded_length` slots.
pub fn build_pool<R>(vocabulary: &Vocabulary, padded_length: usize, rng: &mut R)
    -> Result<(Word, CandidatePool)>
where
    R: Rng + ?Sized,
{
    let target = vocabulary.choose(rng)?.clone();
    let pool = pool_for_word(&target, padded_length, rng)?;
    Ok((target, pool))
}

/// Build the pool for an already-chosen `target`.
///
/// The target's letters go in first, in order; `padded_length - len` filler
/// letters follow, each drawn independently from [`ALPHABET`] (duplicates of
/// target letters are allowed and kept); the whole pool is then shuffled.
pub fn pool_for_word<R>(target: &Word, padded_length: usize, rng: &mut R) -> Result<CandidatePool>
where
    R: Rng + ?Sized,
{
    let len = target.len();
    if len == 0 {
        return Err(PoolError::EmptyWord);
    }
    if len > padded_length {
        return Err(PoolError::WordTooLong {
            word: target.to_string(),
            len,
            padded: padded_length,
        });
    }

    let mut chars: Vec<char> = Vec::with_capacity(padded_length);
    chars.extend(target.chars());
    for _ in 0..(padded_length - len) {
        chars.push(ALPHABET[rng.gen_range(0..ALPHABET.len())] as char);
    }
    shuffle(&mut chars, rng);

    let pool = CandidatePool::from_chars(chars);
    debug!("pool for \"{}\": {}", target, pool.as_string());
    Ok(pool)
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> SmallRng { SmallRng::seed_from_u64(seed) }

    #[test]
    fn talk_pool_has_ten_slots_and_the_target() {
        let target = Word::from("talk");
        let pool = pool_for_word(&target, 10, &mut rng(1)).unwrap();
        assert_eq!(pool.len(), 10);
        assert!(pool.contains_word(&target));
        for ch in ['t', 'a', 'l', 'k'] {
            assert!(pool.find(ch).is_some(), "missing {}", ch);
        }
    }

    #[test]
    fn every_vocabulary_word_survives_padding() {
        let vocab = Vocabulary::default();
        for (seed, w) in vocab.words().iter().enumerate() {
            let pool = pool_for_word(w, PADDED_LENGTH, &mut rng(seed as u64)).unwrap();
            assert_eq!(pool.len(), PADDED_LENGTH);
            assert!(pool.contains_word(w), "{} not in {}", w, pool.as_string());
        }
    }

    #[test]
    fn repeated_letters_keep_their_multiplicity() {
        let w = Word::from("aabb");
        let pool = pool_for_word(&w, 4, &mut rng(5)).unwrap();
        let mut got: Vec<char> = pool.iter().map(|c| c.letter).collect();
        got.sort();
        assert_eq!(got, vec!['a', 'a', 'b', 'b']);
    }

    #[test]
    fn exact_fit_adds_no_filler() {
        let w = Word::from("daughter");
        let pool = pool_for_word(&w, 8, &mut rng(9)).unwrap();
        let mut got: Vec<char> = pool.iter().map(|c| c.letter).collect();
        let mut want: Vec<char> = w.chars().collect();
        got.sort();
        want.sort();
        assert_eq!(got, want);
    }

    #[test]
    fn indices_are_slot_positions() {
        let pool = pool_for_word(&Word::from("walk"), 10, &mut rng(2)).unwrap();
        for (i, c) in pool.iter().enumerate() {
            assert_eq!(c.index, i);
        }
    }

    #[test]
    fn filler_is_lowercase_ascii() {
        let pool = pool_for_word(&Word::from("cough"), 10, &mut rng(77)).unwrap();
        assert!(pool.iter().all(|c| c.letter.is_ascii_lowercase()));
    }

    #[test]
    fn word_too_long_is_a_configuration_error() {
        let err = pool_for_word(&Word::from("daughter"), 5, &mut rng(0)).unwrap_err();
        assert_eq!(err, PoolError::WordTooLong { word: "daughter".into(), len: 8, padded: 5 });
        assert!(err.to_string().contains("daughter"));
    }

    #[test]
    fn empty_word_is_rejected() {
        assert_eq!(
            pool_for_word(&Word::from(""), 10, &mut rng(0)),
            Err(PoolError::EmptyWord)
        );
    }

    #[test]
    fn build_pool_picks_from_vocabulary() {
        let vocab = Vocabulary::default();
        let (target, pool) = build_pool(&vocab, PADDED_LENGTH, &mut rng(42)).unwrap();
        assert!(vocab.words().contains(&target));
        assert!(pool.contains_word(&target));
    }

    #[test]
    fn build_pool_surfaces_pad_errors() {
        let vocab = Vocabulary::new(["thoughtfulness"]);
        assert!(matches!(
            build_pool(&vocab, PADDED_LENGTH, &mut rng(1)),
            Err(PoolError::WordTooLong { len: 14, .. })
        ));
    }

    #[test]
    fn same_seed_same_pool() {
        let vocab = Vocabulary::default();
        let a = build_pool(&vocab, 10, &mut rng(123)).unwrap();
        let b = build_pool(&vocab, 10, &mut rng(123)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn contains_word_respects_counts() {
        let pool = pool_for_word(&Word::from("ab"), 2, &mut rng(0)).unwrap();
        assert!(pool.contains_word(&Word::from("ba")));
        assert!(!pool.contains_word(&Word::from("aab")));
    }
}
