//! Lane Dodge - A three-lane obstacle dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, game state)
//! - `session`: Owns a play session and drives the frontend collaborators
//! - `input`: Key press to intent mapping
//! - `renderer`: WebGPU rendering pipeline
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod input;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use input::{InputOutcome, Intent};
pub use session::{Frontend, GameSession, Schedule, SoundCue};
pub use settings::Settings;
pub use tuning::{MovementMode, Tuning};

/// Game configuration constants
pub mod consts {
    /// Number of lanes (0: left, 1: center, 2: right)
    pub const LANES: u8 = 3;
    /// Lane the player starts in and returns to on restart
    pub const CENTER_LANE: u8 = 1;

    /// Logical playfield dimensions (pixels)
    pub const CANVAS_WIDTH: f32 = 300.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;
    pub const LANE_WIDTH: f32 = CANVAS_WIDTH / LANES as f32;

    /// Player defaults - fixed height above the bottom edge
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const PLAYER_Y: f32 = CANVAS_HEIGHT - PLAYER_HEIGHT - 10.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 40.0;
    pub const OBSTACLE_HEIGHT: f32 = 40.0;
    /// Fall speed in pixels per tick
    pub const OBSTACLE_SPEED: f32 = 4.0;
    /// Time between spawns (ms)
    pub const SPAWN_INTERVAL_MS: f64 = 1000.0;

    /// Display refresh rate the per-tick speed was tuned for
    pub const FRAME_RATE_HZ: u32 = 60;
    /// Reference frame duration for per-second movement
    pub const REFERENCE_FRAME_MS: f64 = 1000.0 / FRAME_RATE_HZ as f64;
    /// Largest frame gap honoured by per-second movement (tab switches etc.)
    pub const MAX_FRAME_MS: f64 = 100.0;
}

/// Horizontal offset that centers an entity of `PLAYER_WIDTH` in `lane`
#[inline]
pub fn lane_to_x(lane: u8) -> f32 {
    use consts::{LANE_WIDTH, PLAYER_WIDTH};
    lane as f32 * LANE_WIDTH + (LANE_WIDTH - PLAYER_WIDTH) / 2.0
}

/// Clamp an arbitrary lane index into `[0, LANES)`
#[inline]
pub fn clamp_lane(lane: i32) -> u8 {
    lane.clamp(0, consts::LANES as i32 - 1) as u8
}
