//! Collision detection between the player and obstacles
//!
//! Axis-aligned rectangle overlap, gated on lane. Touching edges are not a
//! hit: every comparison is strict.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Obstacle, Player};

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Strict overlap on both axes
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

/// Check whether the player is hit by an obstacle
///
/// Only obstacles in the player's lane can collide.
pub fn collides(player: &Player, obstacle: &Obstacle) -> bool {
    if player.lane != obstacle.lane {
        return false;
    }
    player.rect().overlaps(&obstacle.rect())
}

/// Index of the first obstacle (in collection order) hitting the player
pub fn first_collision(player: &Player, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles.iter().position(|o| collides(player, o))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    fn player_at(lane: u8, y: f32) -> Player {
        Player {
            lane,
            y,
            ..Default::default()
        }
    }

    fn obstacle_at(lane: u8, y: f32) -> Obstacle {
        Obstacle {
            y,
            ..Obstacle::new(lane)
        }
    }

    #[test]
    fn test_rect_overlap() {
        let player = Rect::new(10.0, 10.0, 40.0, 60.0);
        let hit = Rect::new(10.0, 40.0, 40.0, 40.0);
        let below = Rect::new(10.0, 70.0, 40.0, 40.0);
        assert!(player.overlaps(&hit));
        assert!(!player.overlaps(&below));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(-10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, -10.0, 10.0, 10.0)));
        assert!(a.overlaps(&Rect::new(9.9, 9.9, 10.0, 10.0)));
    }

    #[test]
    fn test_collides_same_lane() {
        let player = player_at(1, PLAYER_Y);
        // Obstacle bottom edge 1px into the player's head
        assert!(collides(&player, &obstacle_at(1, PLAYER_Y - OBSTACLE_HEIGHT + 1.0)));
        // Bottom edge exactly at the player's top
        assert!(!collides(&player, &obstacle_at(1, PLAYER_Y - OBSTACLE_HEIGHT)));
        // Fully below the player
        assert!(!collides(&player, &obstacle_at(1, PLAYER_Y + PLAYER_HEIGHT)));
    }

    #[test]
    fn test_first_collision_order() {
        let player = player_at(0, PLAYER_Y);
        let obstacles = vec![
            obstacle_at(1, PLAYER_Y),
            obstacle_at(0, PLAYER_Y + 10.0),
            obstacle_at(0, PLAYER_Y),
        ];
        assert_eq!(first_collision(&player, &obstacles), Some(1));
        assert_eq!(first_collision(&player, &obstacles[..1]), None);
    }

    proptest! {
        #[test]
        fn prop_different_lanes_never_collide(
            p_lane in 0..LANES,
            o_lane in 0..LANES,
            p_y in -1000.0f32..1000.0,
            o_y in -1000.0f32..1000.0,
        ) {
            prop_assume!(p_lane != o_lane);
            let mut obstacle = obstacle_at(o_lane, o_y);
            // Even when forced onto the player's coordinates
            obstacle.x = crate::lane_to_x(p_lane);
            prop_assert!(!collides(&player_at(p_lane, p_y), &obstacle));
        }

        #[test]
        fn prop_overlap_symmetric(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0,
            aw in 0.0f32..80.0, ah in 0.0f32..80.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0,
            bw in 0.0f32..80.0, bh in 0.0f32..80.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }
}
