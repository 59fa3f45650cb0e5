//! Play session
//!
//! `GameSession` owns the game state and the lane source, runs one frame at
//! a time, and pushes the results out to a `Frontend` (renderer, audio, HUD).
//! Each frame ends in a single `Schedule` decision.

use rand_pcg::Pcg32;

use crate::input::{self, InputOutcome, Intent};
use crate::sim::{self, GameEvent, GameState, LaneSource, seeded_lanes};
use crate::tuning::Tuning;

/// One-shot sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Player hit an obstacle
    Collision,
}

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Request another animation frame
    NextFrame,
    /// Stop the loop until a restart
    Halt,
}

/// Side-effect collaborators driven by the session
pub trait Frontend {
    /// Redraw the whole playfield
    fn draw(&mut self, state: &GameState);
    /// Fire-and-forget sound cue
    fn play(&mut self, cue: SoundCue);
    /// Current score, shown every running frame
    fn show_score(&mut self, score: u64);
    /// Final score message on game over
    fn show_game_over(&mut self, final_score: u64);
    fn hide_game_over(&mut self);
}

/// Frontend that ignores everything (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullFrontend;

impl Frontend for NullFrontend {
    fn draw(&mut self, _state: &GameState) {}
    fn play(&mut self, _cue: SoundCue) {}
    fn show_score(&mut self, _score: u64) {}
    fn show_game_over(&mut self, _final_score: u64) {}
    fn hide_game_over(&mut self) {}
}

/// A single game session
pub struct GameSession<L = Pcg32> {
    state: GameState,
    lanes: L,
}

impl GameSession<Pcg32> {
    /// New session with lanes drawn from a PCG stream seeded with `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self::with_lanes(GameState::with_tuning(seed, tuning), seeded_lanes(seed))
    }
}

impl<L: LaneSource> GameSession<L> {
    pub fn with_lanes(state: GameState, lanes: L) -> Self {
        Self { state, lanes }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run one frame at `now_ms`
    pub fn frame(&mut self, now_ms: f64, frontend: &mut impl Frontend) -> Schedule {
        if !sim::advance(&mut self.state, &mut self.lanes, now_ms) {
            return Schedule::Halt;
        }

        frontend.draw(&self.state);
        let outcome = sim::resolve(&mut self.state, now_ms);

        for event in self.state.drain_events() {
            if let GameEvent::Collision { final_score } = event {
                frontend.show_game_over(final_score);
                frontend.play(SoundCue::Collision);
            }
        }

        if outcome.keeps_running() {
            frontend.show_score(self.state.score);
            Schedule::NextFrame
        } else {
            Schedule::Halt
        }
    }

    /// Handle a raw key press from the host
    pub fn handle_key(&mut self, key: &str, frontend: &mut impl Frontend) -> InputOutcome {
        match Intent::from_key(key) {
            Some(intent) => self.handle_intent(intent, frontend),
            None => InputOutcome::Ignored,
        }
    }

    pub fn handle_intent(&mut self, intent: Intent, frontend: &mut impl Frontend) -> InputOutcome {
        let outcome = input::apply(&mut self.state, intent);
        if outcome == InputOutcome::Restarted {
            frontend.hide_game_over();
            frontend.show_score(0);
            log::info!("Game restarted (seed {})", self.state.seed);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::spawner::tests::ScriptedLanes;
    use crate::sim::GameStatus;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Records every collaborator call
    #[derive(Debug, Default)]
    struct RecordingFrontend {
        draws: usize,
        obstacles_drawn: Vec<usize>,
        cues: Vec<SoundCue>,
        scores: Vec<u64>,
        game_over: Option<u64>,
        hidden: usize,
    }

    impl Frontend for RecordingFrontend {
        fn draw(&mut self, state: &GameState) {
            self.draws += 1;
            self.obstacles_drawn.push(state.obstacles.len());
        }
        fn play(&mut self, cue: SoundCue) {
            self.cues.push(cue);
        }
        fn show_score(&mut self, score: u64) {
            self.scores.push(score);
        }
        fn show_game_over(&mut self, final_score: u64) {
            self.game_over = Some(final_score);
        }
        fn hide_game_over(&mut self) {
            self.game_over = None;
            self.hidden += 1;
        }
    }

    fn center_lane_session() -> GameSession<ScriptedLanes> {
        GameSession::with_lanes(GameState::new(1), ScriptedLanes::new(&[CENTER_LANE]))
    }

    /// Run frames until the session halts, returning the halt timestamp
    fn run_until_halt(
        session: &mut GameSession<ScriptedLanes>,
        frontend: &mut RecordingFrontend,
        t0: f64,
    ) -> f64 {
        let mut now = t0;
        while session.frame(now, frontend) == Schedule::NextFrame {
            now += FRAME_MS;
            assert!(now < t0 + 60_000.0, "session never ended");
        }
        now
    }

    #[test]
    fn test_frame_draws_after_spawn() {
        let mut session = center_lane_session();
        let mut frontend = RecordingFrontend::default();
        assert_eq!(session.frame(1001.0, &mut frontend), Schedule::NextFrame);
        assert_eq!(frontend.draws, 1);
        // The obstacle spawned this frame is already visible
        assert_eq!(frontend.obstacles_drawn, vec![1]);
        assert_eq!(frontend.scores, vec![0]);
    }

    #[test]
    fn test_collision_plays_sound_once_and_halts() {
        let mut session = center_lane_session();
        let mut frontend = RecordingFrontend::default();
        run_until_halt(&mut session, &mut frontend, 1001.0);

        assert_eq!(session.state().status, GameStatus::GameOver);
        assert_eq!(frontend.cues, vec![SoundCue::Collision]);
        let last_shown = *frontend.scores.last().unwrap();
        assert_eq!(frontend.game_over, Some(last_shown));
        assert_eq!(session.state().score, last_shown);
        // The collision frame is drawn but its score is not shown
        assert_eq!(frontend.draws, frontend.scores.len() + 1);

        // Halted sessions do nothing
        let draws = frontend.draws;
        assert_eq!(session.frame(99_999.0, &mut frontend), Schedule::Halt);
        assert_eq!(frontend.draws, draws);
        assert_eq!(frontend.cues.len(), 1);
    }

    #[test]
    fn test_restart_scenario() {
        let mut session = center_lane_session();
        let mut frontend = RecordingFrontend::default();
        // Survive a few seconds in lane 0 first so the score is nonzero
        session.handle_key("ArrowLeft", &mut frontend);
        let mut now = 1001.0;
        for _ in 0..200 {
            session.frame(now, &mut frontend);
            now += FRAME_MS;
        }
        assert!(session.state().score > 0);
        session.handle_key("ArrowRight", &mut frontend);
        let end = run_until_halt(&mut session, &mut frontend, now);
        assert_eq!(session.state().status, GameStatus::GameOver);
        assert!(session.state().score > 0);
        assert!(!session.state().obstacles.is_empty());

        // Lane keys are ignored while the game is over
        assert_eq!(session.handle_key("ArrowLeft", &mut frontend), InputOutcome::Ignored);

        let outcome = session.handle_key("r", &mut frontend);
        assert_eq!(outcome, InputOutcome::Restarted);
        assert!(outcome.resumes_loop());
        let state = session.state();
        assert_eq!(state.player.lane, 1);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(frontend.game_over, None);
        assert_eq!(frontend.hidden, 1);
        assert_eq!(frontend.scores.last(), Some(&0));

        // Timers restart from the next frame
        let resume = end + 5000.0;
        assert_eq!(session.frame(resume, &mut frontend), Schedule::NextFrame);
        assert_eq!(session.state().start_ms, Some(resume));
        assert_eq!(session.state().obstacles.len(), 1);
        assert_eq!(session.state().score, 0);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut session = center_lane_session();
        let mut frontend = RecordingFrontend::default();
        assert_eq!(session.handle_key("Escape", &mut frontend), InputOutcome::Ignored);
        assert_eq!(session.state().player.lane, CENTER_LANE);
    }

    #[test]
    fn test_dodging_keeps_running() {
        let state = GameState::new(1);
        let mut session = GameSession::with_lanes(state, ScriptedLanes::new(&[CENTER_LANE]));
        let mut frontend = RecordingFrontend::default();
        session.handle_key("ArrowRight", &mut frontend);

        let mut now = 1001.0;
        for _ in 0..(60 * 10) {
            assert_eq!(session.frame(now, &mut frontend), Schedule::NextFrame);
            now += FRAME_MS;
        }
        assert!(frontend.cues.is_empty());
        assert_eq!(session.state().score, 9);
        // Never more than three obstacles alive: 160 ticks to fall, one spawn a second
        assert!(frontend.obstacles_drawn.iter().all(|&n| n <= 3));
    }

    #[test]
    fn test_seeded_sessions_match() {
        let mut a = GameSession::new(2024);
        let mut b = GameSession::new(2024);
        let mut fa = NullFrontend;
        let mut fb = NullFrontend;
        let mut now = 1001.0;
        for _ in 0..600 {
            let sa = a.frame(now, &mut fa);
            let sb = b.frame(now, &mut fb);
            assert_eq!(sa, sb);
            now += FRAME_MS;
        }
        assert_eq!(a.state().obstacles, b.state().obstacles);
        assert_eq!(a.state().status, b.state().status);
    }
}
