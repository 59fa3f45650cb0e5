//! Game state and core simulation types

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::lane_to_x;
use crate::tuning::Tuning;

/// Current status of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Ticks advance the simulation
    Running,
    /// Player collided; waiting for restart
    GameOver,
}

/// Notifications produced by a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player hit an obstacle; the run is over
    Collision { final_score: u64 },
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub lane: u8,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            lane: CENTER_LANE,
            y: PLAYER_Y,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
        }
    }
}

impl Player {
    #[inline]
    pub fn x(&self) -> f32 {
        lane_to_x(self.lane)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x(), self.y, self.width, self.height)
    }
}

/// A falling obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub lane: u8,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    /// New obstacle just above the top edge of `lane`
    pub fn new(lane: u8) -> Self {
        Self {
            lane,
            x: lane_to_x(lane),
            y: -OBSTACLE_HEIGHT,
            width: OBSTACLE_WIDTH,
            height: OBSTACLE_HEIGHT,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// True once the obstacle has left the visible area
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.y >= CANVAS_HEIGHT
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub status: GameStatus,
    /// Timestamp of the first tick of this run (ms), latched lazily
    pub start_ms: Option<f64>,
    /// Timestamp of the most recent spawn (ms)
    pub last_spawn_ms: f64,
    /// Timestamp of the previous tick (ms), for per-second movement
    pub last_tick_ms: Option<f64>,
    /// Whole seconds survived
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub tuning: Tuning,
    /// Pending notifications for the host
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new running game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            status: GameStatus::Running,
            start_ms: None,
            last_spawn_ms: 0.0,
            last_tick_ms: None,
            score: 0,
            time_ticks: 0,
            player: Player::default(),
            obstacles: Vec::new(),
            tuning,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Return to a fresh running state, keeping seed and tuning
    pub fn reset(&mut self) {
        *self = Self::with_tuning(self.seed, self.tuning.clone());
    }

    /// Move the player one lane left or right, clamped to the playfield
    ///
    /// Returns true if the lane changed.
    pub fn shift_player(&mut self, delta: i32) -> bool {
        let lane = crate::clamp_lane(self.player.lane as i32 + delta);
        let moved = lane != self.player.lane;
        self.player.lane = lane;
        moved
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
