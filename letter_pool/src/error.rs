//! Errors raised while building a candidate pool.

use thiserror::Error;

/// Configuration problems that make a pool impossible to build.
///
/// These are fatal to session construction and are surfaced to the caller
/// as-is; retrying with the same inputs cannot succeed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// The target word has more letters than the pool has slots.
    #[error("word \"{word}\" has {len} letters but the pool only has {padded} slots")]
    WordTooLong { word: String, len: usize, padded: usize },

    /// No words to choose a target from.
    #[error("vocabulary is empty")]
    EmptyVocabulary,

    /// A target word with no letters cannot be spelled.
    #[error("target word is empty")]
    EmptyWord,
}

pub type Result<T> = std::result::Result<T, PoolError>;
