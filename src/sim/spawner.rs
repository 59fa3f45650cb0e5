//! Obstacle spawning
//!
//! Lane choice goes through `LaneSource` so spawn sequences can be replayed
//! from a seed or scripted in tests.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Obstacle;
use crate::consts::LANES;

/// Source of lane indices for new obstacles
pub trait LaneSource {
    /// Pick a lane in `[0, lanes)`
    fn next_lane(&mut self, lanes: u8) -> u8;
}

impl LaneSource for Pcg32 {
    fn next_lane(&mut self, lanes: u8) -> u8 {
        self.random_range(0..lanes)
    }
}

/// Seeded production lane source
pub fn seeded_lanes(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Whether enough time has passed since the last spawn
#[inline]
pub fn should_spawn(now_ms: f64, last_spawn_ms: f64, interval_ms: f64) -> bool {
    now_ms - last_spawn_ms > interval_ms
}

/// Create an obstacle just above the top edge of a random lane
pub fn spawn(lanes: &mut impl LaneSource) -> Obstacle {
    let lane = lanes.next_lane(LANES).min(LANES - 1);
    Obstacle::new(lane)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::consts::OBSTACLE_HEIGHT;
    use crate::lane_to_x;
    use std::collections::VecDeque;

    /// Replays a fixed list of lanes, then repeats the last one
    pub(crate) struct ScriptedLanes {
        lanes: VecDeque<u8>,
        last: u8,
    }

    impl ScriptedLanes {
        pub(crate) fn new(lanes: &[u8]) -> Self {
            Self {
                lanes: lanes.iter().copied().collect(),
                last: 0,
            }
        }
    }

    impl LaneSource for ScriptedLanes {
        fn next_lane(&mut self, _lanes: u8) -> u8 {
            if let Some(lane) = self.lanes.pop_front() {
                self.last = lane;
            }
            self.last
        }
    }

    #[test]
    fn test_spawn_position() {
        let mut lanes = ScriptedLanes::new(&[2]);
        let obstacle = spawn(&mut lanes);
        assert_eq!(obstacle.lane, 2);
        assert_eq!(obstacle.x, lane_to_x(2));
        assert_eq!(obstacle.y, -OBSTACLE_HEIGHT);
    }

    #[test]
    fn test_out_of_range_source_clamped() {
        let mut lanes = ScriptedLanes::new(&[9]);
        assert_eq!(spawn(&mut lanes).lane, LANES - 1);
    }

    #[test]
    fn test_should_spawn_is_strict() {
        assert!(!should_spawn(1000.0, 0.0, 1000.0));
        assert!(should_spawn(1000.1, 0.0, 1000.0));
        assert!(!should_spawn(1500.0, 1000.0, 1000.0));
    }

    #[test]
    fn test_seeded_lanes_reproducible() {
        let mut a = seeded_lanes(1234);
        let mut b = seeded_lanes(1234);
        let seq_a: Vec<u8> = (0..32).map(|_| a.next_lane(LANES)).collect();
        let seq_b: Vec<u8> = (0..32).map(|_| b.next_lane(LANES)).collect();
        assert_eq!(seq_a, seq_b);
        assert!(seq_a.iter().all(|&l| l < LANES));
    }

    #[test]
    fn test_seeded_lanes_cover_all_lanes() {
        let mut rng = seeded_lanes(99);
        let mut seen = [false; LANES as usize];
        for _ in 0..300 {
            seen[rng.next_lane(LANES) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
