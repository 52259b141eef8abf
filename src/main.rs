//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use canvas_pong::consts::*;
    use canvas_pong::renderer::{DrawList, RenderState};
    use canvas_pong::{FrameOutcome, FrameScheduler, Settings};

    /// Frames between FPS log lines
    const FPS_LOG_INTERVAL: u64 = 600;

    /// Game instance holding all state
    struct Game {
        scheduler: FrameScheduler,
        frame: DrawList,
        render_state: RenderState,
    }

    impl Game {
        /// Update, draw and present one display frame
        fn frame(&mut self, time: f64) -> FrameOutcome {
            let fps = self.scheduler.record_frame_time(time);

            self.frame.clear();
            let outcome = self.scheduler.frame(&mut self.frame);
            if outcome != FrameOutcome::Stopped {
                self.present();
            }

            let frame_no = self.scheduler.state().frame;
            if frame_no > 0 && frame_no % FPS_LOG_INTERVAL == 0 {
                log::debug!("frame {}: {} fps", frame_no, fps);
            }
            outcome
        }

        /// Draw the game-over screen
        fn final_render(&mut self) {
            self.frame.clear();
            if self.scheduler.final_render(&mut self.frame) {
                self.present();
            }
        }

        fn present(&mut self) {
            match self.render_state.render(&self.frame) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => self.render_state.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    fn js_error(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let settings = Settings::default();
        let level = settings.level_filter().to_level().unwrap_or(log::Level::Info);
        console_log::init_with_level(level).map_err(js_error)?;

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().ok_or_else(|| js_error("no window"))?;
        let document = window.document().ok_or_else(|| js_error("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .ok_or_else(|| js_error("no #pong canvas"))?
            .dyn_into()
            .map_err(|_| js_error("#pong is not a canvas"))?;

        // Backing store at device resolution; drawing stays in field units
        let dpr = window.device_pixel_ratio();
        let width = (FIELD_WIDTH as f64 * dpr) as u32;
        let height = (FIELD_HEIGHT as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(js_error)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(js_error)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(js_error)?;

        let seed = settings.seed.unwrap_or(js_sys::Date::now() as u64);
        let game = Rc::new(RefCell::new(Game {
            scheduler: FrameScheduler::new(seed),
            frame: DrawList::new(FIELD_WIDTH, FIELD_HEIGHT),
            render_state,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&window, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Canvas Pong running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().scheduler.handle_key(&event.key(), pressed) {
                    // Keep arrow keys from scrolling the page
                    event.prevent_default();
                }
            });
            if let Err(e) =
                window.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
            {
                log::warn!("Failed to add {} listener: {:?}", event_name, e);
            }
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::warn!("requestAnimationFrame failed, game loop stopped: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let outcome = game.borrow_mut().frame(time);

        match outcome {
            FrameOutcome::Continue => request_animation_frame(game),
            FrameOutcome::GameOver { delay } => schedule_final_render(game, delay),
            FrameOutcome::Stopped => {}
        }
    }

    fn schedule_final_render(game: Rc<RefCell<Game>>, delay: Duration) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move || {
            game.borrow_mut().final_render();
            log::info!("Game over screen shown");
        });
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay.as_millis() as i32,
        ) {
            log::warn!("setTimeout failed, game over screen not shown: {:?}", e);
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    let result = wasm_game::run().await;
    if let Err(e) = &result {
        log::error!("Startup failed: {:?}", e);
    }
    result
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::process::ExitCode;
    use std::thread::sleep;

    use serde::Serialize;

    use canvas_pong::consts::*;
    use canvas_pong::renderer::DrawList;
    use canvas_pong::sim::{Score, Side};
    use canvas_pong::{FrameOutcome, FrameScheduler, Settings};

    /// Printed when the headless match ends
    #[derive(Debug, Serialize)]
    struct MatchSummary {
        seed: u64,
        frames: u64,
        winner: Option<Side>,
        score: Score,
        final_screen: Vec<String>,
    }

    /// Headless match: the player paddle stays idle, the opponent plays
    pub fn run() -> ExitCode {
        let settings = match std::env::args_os().nth(1).map(PathBuf::from) {
            Some(path) => match Settings::load(&path) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Failed to load settings from {}: {}", path.display(), e);
                    return ExitCode::FAILURE;
                }
            },
            None => Settings::default(),
        };

        env_logger::Builder::new()
            .filter_level(settings.level_filter())
            .parse_default_env()
            .init();

        log::info!("Canvas Pong (native, headless) starting...");
        log::debug!("Settings: {:?}", settings);

        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Game initialized with seed: {}", seed);

        let mut scheduler = FrameScheduler::new(seed);
        let mut frame = DrawList::new(FIELD_WIDTH, FIELD_HEIGHT);
        let interval = settings.frame_interval();
        let mut frames = 0u64;

        loop {
            if frames >= settings.max_frames {
                log::warn!("Stopping after {} frames without a winner", frames);
                break;
            }

            frame.clear();
            let outcome = scheduler.frame(&mut frame);
            frames += 1;

            match outcome {
                FrameOutcome::Continue => {
                    if let Some(interval) = interval {
                        sleep(interval);
                    }
                }
                FrameOutcome::GameOver { delay } => {
                    if interval.is_some() {
                        sleep(delay);
                    }
                    frame.clear();
                    scheduler.final_render(&mut frame);
                    break;
                }
                FrameOutcome::Stopped => break,
            }
        }

        let state = scheduler.state();
        let summary = MatchSummary {
            seed,
            frames,
            winner: state.winner(),
            score: state.score,
            final_screen: frame.texts().into_iter().map(str::to_string).collect(),
        };

        match serde_json::to_string_pretty(&summary) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("Failed to serialize match summary: {}", e);
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    native::run()
}
