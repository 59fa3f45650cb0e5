//! Lane geometry
//!
//! The playfield is split into `LANES` equal vertical slices. Player and
//! obstacles share `lane_to_x`, so lane equality implies horizontal overlap.

use crate::consts::*;

/// Left and right edges of a lane slice
#[inline]
pub fn lane_bounds(lane: u8) -> (f32, f32) {
    let left = lane as f32 * LANE_WIDTH;
    (left, left + LANE_WIDTH)
}

/// X positions of the separators between adjacent lanes
pub fn lane_separators() -> impl Iterator<Item = f32> {
    (0..LANES - 1).map(|lane| lane_bounds(lane).1)
}
