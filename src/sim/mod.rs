//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Timestamps come from the caller
//! - Lane choice comes from a seedable `LaneSource`
//! - Obstacles are kept in spawn order
//! - No rendering or platform dependencies

pub mod collision;
pub mod lane;
pub mod movement;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Rect, collides, first_collision};
pub use lane::{lane_bounds, lane_separators};
pub use movement::advance_and_prune;
pub use spawner::{LaneSource, seeded_lanes, should_spawn, spawn};
pub use state::{GameEvent, GameState, GameStatus, Obstacle, Player};
pub use tick::{TickOutcome, advance, resolve, score_at, tick};
