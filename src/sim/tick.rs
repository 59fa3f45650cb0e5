//! Per-frame simulation tick
//!
//! A tick is split in two halves so the host can draw in between:
//! `advance` moves, prunes and spawns; `resolve` checks collisions and
//! updates the score. `tick` runs both back to back.

use super::collision::first_collision;
use super::spawner::{LaneSource, should_spawn, spawn};
use super::movement::advance_and_prune;
use super::state::{GameEvent, GameState, GameStatus};

/// Result of resolving a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game was not running; nothing happened
    Skipped,
    /// No collision, score updated
    Survived,
    /// Player hit the obstacle at this index; game is over
    Collided { obstacle: usize },
}

impl TickOutcome {
    /// Whether the host should request another frame
    #[inline]
    pub fn keeps_running(self) -> bool {
        matches!(self, TickOutcome::Survived)
    }
}

/// Whole seconds elapsed between `start_ms` and `now_ms`
#[inline]
pub fn score_at(start_ms: f64, now_ms: f64) -> u64 {
    ((now_ms - start_ms) / 1000.0).floor().max(0.0) as u64
}

/// First half of a tick: move and prune obstacles, then maybe spawn
///
/// Returns false (and does nothing) if the game is not running.
pub fn advance(state: &mut GameState, lanes: &mut impl LaneSource, now_ms: f64) -> bool {
    if state.start_ms.is_none() {
        state.start_ms = Some(now_ms);
    }
    if state.status != GameStatus::Running {
        return false;
    }

    let frame_ms = state.last_tick_ms.map(|last| now_ms - last);
    state.last_tick_ms = Some(now_ms);
    state.time_ticks += 1;

    let distance = state.tuning.fall_distance(frame_ms);
    advance_and_prune(&mut state.obstacles, distance);

    if should_spawn(now_ms, state.last_spawn_ms, state.tuning.spawn_interval_ms) {
        let obstacle = spawn(lanes);
        log::debug!("Spawned obstacle in lane {} at {:.0}ms", obstacle.lane, now_ms);
        state.obstacles.push(obstacle);
        state.last_spawn_ms = now_ms;
    }

    true
}

/// Second half of a tick: collision check, game over transition, score
pub fn resolve(state: &mut GameState, now_ms: f64) -> TickOutcome {
    if state.status != GameStatus::Running {
        return TickOutcome::Skipped;
    }

    // Only the first hit in spawn order counts
    if let Some(index) = first_collision(&state.player, &state.obstacles) {
        state.status = GameStatus::GameOver;
        state.events.push(GameEvent::Collision {
            final_score: state.score,
        });
        log::info!(
            "Game over: hit obstacle in lane {} after {} ticks, score {}",
            state.player.lane,
            state.time_ticks,
            state.score
        );
        return TickOutcome::Collided { obstacle: index };
    }

    let start = *state.start_ms.get_or_insert(now_ms);
    state.score = state.score.max(score_at(start, now_ms));
    TickOutcome::Survived
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, lanes: &mut impl LaneSource, now_ms: f64) -> TickOutcome {
    advance(state, lanes, now_ms);
    resolve(state, now_ms)
}
