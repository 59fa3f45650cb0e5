//! Data-driven game balance
//!
//! Defaults mirror `consts`; a JSON blob can override any field.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How obstacle speed relates to elapsed time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MovementMode {
    /// Fixed pixels per tick (speed follows the display refresh rate)
    #[default]
    PerTick,
    /// Speed scaled by frame time against a 60 Hz reference frame
    PerSecond,
}

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Obstacle fall speed (pixels per reference tick)
    pub obstacle_speed: f32,
    /// Minimum time between spawns (ms)
    pub spawn_interval_ms: f64,
    pub movement: MovementMode,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            obstacle_speed: OBSTACLE_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            movement: MovementMode::PerTick,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON, falling back to defaults for missing fields
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut tuning: Tuning = serde_json::from_str(json)?;
        tuning.sanitize();
        Ok(tuning)
    }

    /// Replace non-finite or non-positive values with defaults
    pub fn sanitize(&mut self) {
        let defaults = Self::default();
        if !self.obstacle_speed.is_finite() || self.obstacle_speed <= 0.0 {
            log::warn!(
                "Invalid obstacle_speed {}, using {}",
                self.obstacle_speed,
                defaults.obstacle_speed
            );
            self.obstacle_speed = defaults.obstacle_speed;
        }
        if !self.spawn_interval_ms.is_finite() || self.spawn_interval_ms < 0.0 {
            log::warn!(
                "Invalid spawn_interval_ms {}, using {}",
                self.spawn_interval_ms,
                defaults.spawn_interval_ms
            );
            self.spawn_interval_ms = defaults.spawn_interval_ms;
        }
    }

    /// Distance an obstacle falls over a frame of `frame_ms`
    pub fn fall_distance(&self, frame_ms: Option<f64>) -> f32 {
        match (self.movement, frame_ms) {
            (MovementMode::PerTick, _) | (MovementMode::PerSecond, None) => self.obstacle_speed,
            (MovementMode::PerSecond, Some(ms)) => {
                let scale = ms.clamp(0.0, MAX_FRAME_MS) / REFERENCE_FRAME_MS;
                self.obstacle_speed * scale as f32
            }
        }
    }
}
