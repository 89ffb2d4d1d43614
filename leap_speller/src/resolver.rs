//! Tap → letter resolution.
//!
//! A cube is hit when the tap point lies within `tolerance` of the cube's
//! centre on every axis (a box test, not a sphere).  When several cubes
//! qualify the first one in pool order wins; with the default 70-unit
//! tolerance and 75-unit spacing a tap between two neighbours can reach both,
//! and the earlier slot takes it.

use letter_pool::CandidateLetter;
use log::debug;

use crate::geometry::Vec3;
use crate::gesture::TapEvent;
use crate::layout::PlacedCube;

/// Per-axis hit tolerance in scene units.
pub const DEFAULT_TOLERANCE: f32 = 70.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapResolver {
    pub tolerance: f32,
}

impl Default for TapResolver {
    fn default() -> Self { TapResolver { tolerance: DEFAULT_TOLERANCE } }
}

impl TapResolver {
    pub fn new(tolerance: f32) -> Self { TapResolver { tolerance } }

    /// True when `point` is within tolerance of `centre` on all three axes
    /// (boundary inclusive).
    pub fn is_hit(&self, point: Vec3, centre: Vec3) -> bool {
        (point - centre).abs().max_component() <= self.tolerance
    }

    /// The first cube, in pool order, that `tap` hits.
    pub fn resolve(&self, tap: &TapEvent, cubes: &[PlacedCube]) -> Option<CandidateLetter> {
        let mut hits = cubes.iter().filter(|c| self.is_hit(tap.point, c.position));
        let first = hits.next()?;
        let others = hits.count();
        if others > 0 {
            debug!(
                "tap at ({:.0}, {:.0}, {:.0}) reached {} cubes; slot {} '{}' wins",
                tap.point.x, tap.point.y, tap.point.z,
                others + 1, first.index(), first.letter()
            );
        }
        Some(first.candidate)
    }
}
