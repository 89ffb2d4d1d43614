//! In-place Fisher–Yates shuffle.

use rand::Rng;

/// Uniformly permute `items` in place and hand the same slice back for
/// chaining.
///
/// Walks from the last index down to 1, swapping each element with one drawn
/// uniformly from `0..=i`.  Every permutation is equally likely given a
/// uniform `rng`.  Empty and single-element slices are left alone.
///
/// ```rust
/// use letter_pool::shuffle;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let mut v = vec!['t', 'a', 'l', 'k'];
/// let n = shuffle(&mut v, &mut rng).len();
/// assert_eq!(n, 4);
/// ```
pub fn shuffle<'a, T, R>(items: &'a mut [T], rng: &mut R) -> &'a mut [T]
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
    items
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn sorted<T: Ord + Clone>(v: &[T]) -> Vec<T> {
        let mut s = v.to_vec();
        s.sort();
        s
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let original: Vec<u32> = (0..50).chain(0..10).collect();
        for seed in 0..64 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut v = original.clone();
            shuffle(&mut v, &mut rng);
            assert_eq!(v.len(), original.len());
            assert_eq!(sorted(&v), sorted(&original), "seed {}", seed);
        }
    }

    #[test]
    fn empty_and_singleton_are_noops() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut empty: Vec<char> = vec![];
        assert!(shuffle(&mut empty, &mut rng).is_empty());

        let mut one = vec!['z'];
        assert_eq!(shuffle(&mut one, &mut rng), &['z']);
    }

    #[test]
    fn returns_the_same_slice_for_chaining() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut v = vec![1, 2, 3, 4, 5];
        let ptr = v.as_ptr();
        let out = shuffle(&mut v, &mut rng);
        assert_eq!(out.as_ptr(), ptr);
    }

    #[test]
    fn all_permutations_of_three_show_up_evenly() {
        let mut rng = SmallRng::seed_from_u64(2024);
        let mut counts: HashMap<[u8; 3], usize> = HashMap::new();
        let trials = 6000;
        for _ in 0..trials {
            let mut v = [0u8, 1, 2];
            shuffle(&mut v, &mut rng);
            *counts.entry(v).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        for (perm, n) in counts {
            // expected 1000 each; a uniform shuffle stays well inside this band
            assert!((800..1200).contains(&n), "{:?} appeared {} times", perm, n);
        }
    }
}
