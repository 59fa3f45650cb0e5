//! Lane Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, KeyboardEvent};

    use lane_dodge::audio::AudioManager;
    use lane_dodge::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use lane_dodge::renderer::{RenderState, build_scene};
    use lane_dodge::sim::GameState;
    use lane_dodge::{Frontend, GameSession, Schedule, Settings, SoundCue, Tuning};

    /// LocalStorage key for tuning overrides
    const TUNING_KEY: &str = "lane_dodge_tuning";

    /// Renderer, audio and DOM HUD behind the session's `Frontend` trait
    struct WebFrontend {
        render_state: Option<RenderState>,
        audio: AudioManager,
        settings: Settings,
        score_el: Option<Element>,
        game_over_el: Option<Element>,
        final_score_el: Option<Element>,
    }

    impl WebFrontend {
        fn new(settings: Settings) -> Self {
            let document = web_sys::window().and_then(|w| w.document());
            let find = |id: &str| document.as_ref().and_then(|d| d.get_element_by_id(id));
            Self {
                render_state: None,
                audio: AudioManager::new(&settings),
                score_el: find("score"),
                game_over_el: find("game-over"),
                final_score_el: find("final-score"),
                settings,
            }
        }

        fn toggle_mute(&mut self) {
            let muted = self.settings.toggle_mute();
            self.audio.apply_settings(&self.settings);
            self.settings.save();
            log::info!("Audio {}", if muted { "muted" } else { "unmuted" });
        }
    }

    impl Frontend for WebFrontend {
        fn draw(&mut self, state: &GameState) {
            let Some(render_state) = self.render_state.as_mut() else {
                return;
            };
            let vertices = build_scene(state);
            match render_state.render(&vertices) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        fn play(&mut self, cue: SoundCue) {
            self.audio.play(cue);
        }

        fn show_score(&mut self, score: u64) {
            if let Some(el) = &self.score_el {
                el.set_text_content(Some(&format!("Score: {}", score)));
            }
        }

        fn show_game_over(&mut self, final_score: u64) {
            if let Some(el) = &self.final_score_el {
                el.set_text_content(Some(&format!("Score: {}", final_score)));
            }
            if let Some(el) = &self.game_over_el {
                let _ = el.set_attribute("class", "");
            }
        }

        fn hide_game_over(&mut self) {
            if let Some(el) = &self.game_over_el {
                let _ = el.set_attribute("class", "hidden");
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        frontend: WebFrontend,
    }

    /// Load tuning overrides from LocalStorage
    fn load_tuning() -> Tuning {
        let json = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|s| s.get_item(TUNING_KEY).ok())
            .flatten();

        match json.map(|j| Tuning::from_json(&j)) {
            Some(Ok(tuning)) => {
                log::info!("Loaded tuning overrides: {:?}", tuning);
                tuning
            }
            Some(Err(e)) => {
                log::warn!("Ignoring bad tuning overrides: {}", e);
                Tuning::default()
            }
            None => Tuning::default(),
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Lane Dodge starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };

        // Size the backing store to the displayed size
        let dpr = window.device_pixel_ratio();
        let client_w = match canvas.client_width() {
            0 => CANVAS_WIDTH as i32,
            w => w,
        };
        let client_h = match canvas.client_height() {
            0 => CANVAS_HEIGHT as i32,
            h => h,
        };
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game {
            session: GameSession::with_tuning(seed, load_tuning()),
            frontend: WebFrontend::new(settings),
        }));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => {
                let adapter = instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::LowPower,
                        compatible_surface: Some(&surface),
                        force_fallback_adapter: false,
                    })
                    .await;
                match adapter {
                    Ok(adapter) => {
                        log::info!("Using adapter: {:?}", adapter.get_info().name);
                        match RenderState::new(surface, &adapter, width, height).await {
                            Ok(render_state) => {
                                game.borrow_mut().frontend.render_state = Some(render_state)
                            }
                            Err(e) => log::error!("Failed to create device: {}", e),
                        }
                    }
                    Err(e) => log::error!("Failed to get adapter: {}", e),
                }
            }
            Err(e) => log::error!("Failed to create surface: {}", e),
        }

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Lane Dodge running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let handler_game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let key = event.key();
            if matches!(key.as_str(), "ArrowLeft" | "ArrowRight") {
                // Keep arrows from scrolling the page
                event.prevent_default();
            }

            let outcome = {
                let mut g = handler_game.borrow_mut();
                if matches!(key.as_str(), "m" | "M") {
                    g.frontend.toggle_mute();
                    return;
                }
                let Game { session, frontend } = &mut *g;
                session.handle_key(&key, frontend)
            };

            if outcome.resumes_loop() {
                request_animation_frame(handler_game.clone());
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let schedule = {
            let mut g = game.borrow_mut();
            let Game { session, frontend } = &mut *g;
            session.frame(time, frontend)
        };

        match schedule {
            Schedule::NextFrame => request_animation_frame(game),
            Schedule::Halt => log::info!("Frame loop halted, press R to restart"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::{Path, PathBuf};

    use clap::Parser;
    use lane_dodge::consts::{FRAME_RATE_HZ, LANES, PLAYER_Y};
    use lane_dodge::session::NullFrontend;
    use lane_dodge::sim::GameState;
    use lane_dodge::{GameSession, Intent, Schedule, Tuning};

    /// Give up after two minutes of simulated play
    const MAX_FRAMES: u32 = 120 * FRAME_RATE_HZ;
    /// How far above the player an obstacle counts as a threat
    const LOOKAHEAD: f32 = 200.0;

    /// Headless Lane Dodge run driven by a dodge autopilot
    #[derive(Debug, Parser)]
    #[command(name = "lane-dodge", version, about)]
    pub struct Cli {
        /// Seed for the obstacle lane sequence
        #[arg(default_value_t = 42)]
        pub seed: u64,
        /// JSON file with tuning overrides
        pub tuning: Option<PathBuf>,
    }

    /// Load tuning from a JSON file, falling back to defaults
    pub fn load_tuning(path: &Path) -> Tuning {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                return Tuning::default();
            }
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Could not parse {}: {}", path.display(), e);
                Tuning::default()
            }
        }
    }

    fn lane_threatened(state: &GameState, lane: u8) -> bool {
        state
            .obstacles
            .iter()
            .any(|o| o.lane == lane && o.y > PLAYER_Y - LOOKAHEAD && o.y < PLAYER_Y)
    }

    /// Simple autopilot: step toward the nearest lane with no incoming obstacle
    fn autopilot(state: &GameState) -> Option<Intent> {
        let current = state.player.lane;
        if !lane_threatened(state, current) {
            return None;
        }
        let target = (0..LANES)
            .filter(|&lane| !lane_threatened(state, lane))
            .min_by_key(|&lane| (lane as i32 - current as i32).abs())?;
        Some(if target < current { Intent::Left } else { Intent::Right })
    }

    /// Simulate a session at a fixed frame rate with no frontend
    pub fn run(seed: u64, tuning: Tuning) {
        let mut session = GameSession::with_tuning(seed, tuning);
        let mut frontend = NullFrontend;
        let frame_ms = 1000.0 / FRAME_RATE_HZ as f64;
        // Browsers hand out timestamps well past zero
        let t0 = 1000.0;

        let mut frames = 0;
        while frames < MAX_FRAMES {
            if let Some(intent) = autopilot(session.state()) {
                session.handle_intent(intent, &mut frontend);
            }
            let now = t0 + frames as f64 * frame_ms;
            frames += 1;
            if session.frame(now, &mut frontend) == Schedule::Halt {
                break;
            }
        }

        let state = session.state();
        log::info!(
            "Headless run finished: status {:?}, score {}, {} frames, {} obstacles on screen",
            state.status,
            state.score,
            frames,
            state.obstacles.len()
        );
        println!("seed {} -> score {} ({:?})", seed, state.score, state.status);
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_cli_defaults() {
            let cli = Cli::try_parse_from(["lane-dodge"]).unwrap();
            assert_eq!(cli.seed, 42);
            assert!(cli.tuning.is_none());
        }

        #[test]
        fn test_cli_seed_and_tuning() {
            let cli = Cli::try_parse_from(["lane-dodge", "7", "tuning.json"]).unwrap();
            assert_eq!(cli.seed, 7);
            assert_eq!(cli.tuning, Some(PathBuf::from("tuning.json")));
        }

        #[test]
        fn test_cli_rejects_bad_seed() {
            let err = Cli::try_parse_from(["lane-dodge", "notanumber"]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    // Bad arguments exit with a usage error before anything runs
    let cli = headless::Cli::parse();
    env_logger::init();
    log::info!("Lane Dodge (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let tuning = cli
        .tuning
        .as_deref()
        .map(headless::load_tuning)
        .unwrap_or_default();

    headless::run(cli.seed, tuning);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
