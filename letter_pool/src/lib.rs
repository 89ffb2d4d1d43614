//! # letter_pool
//!
//! Builds the letters a player is offered when spelling a word in the air-tap
//! game: one target word drawn from a fixed [`Vocabulary`], seeded into a
//! [`CandidatePool`] together with random filler letters, then shuffled.
//!
//! ## Quick start
//!
//! ```rust
//! use letter_pool::{build_pool, Vocabulary, PADDED_LENGTH};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let vocab   = Vocabulary::default();
//! let (target, pool) = build_pool(&vocab, PADDED_LENGTH, &mut rng).unwrap();
//!
//! assert_eq!(pool.len(), PADDED_LENGTH);
//! assert!(pool.contains_word(&target));
//! ```
//!
//! The random source is always injected, so every operation here is
//! reproducible under a seeded RNG.

pub mod error;
pub mod pool;
pub mod shuffle;
pub mod word;

pub use error::PoolError;
pub use pool::{build_pool, pool_for_word, CandidateLetter, CandidatePool, ALPHABET, PADDED_LENGTH};
pub use shuffle::shuffle;
pub use word::{Vocabulary, Word};
