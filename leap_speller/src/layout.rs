//! Cube placement — gives every candidate letter a fixed spot in the scene.

use letter_pool::{CandidateLetter, CandidatePool};

use crate::geometry::Vec3;

/// A candidate letter together with where its cube floats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedCube {
    pub candidate: CandidateLetter,
    pub position:  Vec3,
}

impl PlacedCube {
    pub fn letter(&self) -> char { self.candidate.letter }
    pub fn index(&self)  -> usize { self.candidate.index }
}

/// Rows of evenly spaced cubes on a vertical plane facing the player.
///
/// Slot 0 sits at `origin`; slots run left to right, `per_row` to a row,
/// each row `spacing` units below the previous one.
#[derive(Clone, Debug, PartialEq)]
pub struct CubeLayout {
    pub origin:    Vec3,
    pub spacing:   f32,
    pub per_row:   usize,
    /// Cube edge length (rendering only).
    pub cube_size: f32,
}

impl Default for CubeLayout {
    fn default() -> Self {
        CubeLayout {
            origin:    Vec3::new(-150.0, 200.0, 0.0),
            spacing:   75.0,
            per_row:   5,
            cube_size: 60.0,
        }
    }
}

impl CubeLayout {
    /// Scene position of pool slot `index`.
    pub fn position(&self, index: usize) -> Vec3 {
        let per_row = self.per_row.max(1);
        let col = (index % per_row) as f32;
        let row = (index / per_row) as f32;
        self.origin + Vec3::new(col * self.spacing, -row * self.spacing, 0.0)
    }

    /// z of the plane the cubes sit on.
    pub fn plane_z(&self) -> f32 { self.origin.z }

    /// Place every candidate of `pool`, in pool order.
    pub fn place(&self, pool: &CandidatePool) -> Vec<PlacedCube> {
        pool.iter()
            .map(|&candidate| PlacedCube {
                candidate,
                position: self.position(candidate.index),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use letter_pool::{pool_for_word, Word};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn ten_slots_make_two_rows_of_five() {
        let l = CubeLayout::default();
        assert_eq!(l.position(0), Vec3::new(-150.0, 200.0, 0.0));
        assert_eq!(l.position(4), Vec3::new(150.0, 200.0, 0.0));
        assert_eq!(l.position(5), Vec3::new(-150.0, 125.0, 0.0));
        assert_eq!(l.position(9), Vec3::new(150.0, 125.0, 0.0));
    }

    #[test]
    fn place_keeps_pool_order_and_distinct_spots() {
        let mut rng = SmallRng::seed_from_u64(4);
        let pool = pool_for_word(&Word::from("talk"), 10, &mut rng).unwrap();
        let cubes = CubeLayout::default().place(&pool);
        assert_eq!(cubes.len(), 10);
        for (i, c) in cubes.iter().enumerate() {
            assert_eq!(c.index(), i);
            assert_eq!(c.letter(), pool.get(i).unwrap().letter);
        }
        for a in &cubes {
            for b in &cubes {
                if a.index() != b.index() {
                    assert_ne!(a.position, b.position);
                }
            }
        }
    }

    #[test]
    fn zero_per_row_does_not_divide_by_zero() {
        let l = CubeLayout { per_row: 0, ..CubeLayout::default() };
        assert_eq!(l.position(2), Vec3::new(-150.0, 50.0, 0.0));
    }
}
