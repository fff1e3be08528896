//! Web Swing entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use glam::Vec2;
    use web_swing::config::GameConfig;
    use web_swing::render::{Frame, RenderPort};
    use web_swing::sim::{GamePhase, GameState, InputSignal};

    /// Canvas2D implementation of the rendering port
    struct Canvas2dRenderer {
        ctx: CanvasRenderingContext2d,
    }

    impl RenderPort for Canvas2dRenderer {
        fn draw(&mut self, frame: &Frame) {
            let ctx = &self.ctx;
            let (w, h) = (frame.width as f64, frame.height as f64);
            ctx.clear_rect(0.0, 0.0, w, h);

            // Sky
            ctx.set_fill_style_str("#87CEEB");
            ctx.fill_rect(0.0, 0.0, w, h);

            // Ceiling band
            ctx.set_fill_style_str("#8B4513");
            ctx.fill_rect(0.0, 0.0, w, frame.ceiling_height as f64);

            // Platforms
            for rect in &frame.obstacles {
                ctx.fill_rect(
                    rect.x as f64,
                    rect.y as f64,
                    rect.width as f64,
                    rect.height as f64,
                );
            }

            // Tether line
            if let Some((start, anchor)) = frame.tether {
                ctx.set_stroke_style_str("#FFFFFF");
                ctx.set_line_width(2.0);
                ctx.begin_path();
                ctx.move_to(start.x as f64, start.y as f64);
                ctx.line_to(anchor.x as f64, anchor.y as f64);
                ctx.stroke();
            }

            // Player
            ctx.set_fill_style_str("#FF0000");
            ctx.begin_path();
            let _ = ctx.arc(
                frame.player_pos.x as f64,
                frame.player_pos.y as f64,
                frame.player_radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.fill();
        }
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Canvas2dRenderer,
        /// Phase seen by the last HUD update, to toggle overlays on change
        last_phase: GamePhase,
    }

    impl Game {
        fn new(seed: u64, config: GameConfig, ctx: CanvasRenderingContext2d) -> Self {
            Self {
                state: GameState::new(seed, config),
                renderer: Canvas2dRenderer { ctx },
                last_phase: GamePhase::NotRunning,
            }
        }

        /// One frame: advance the simulation, draw, refresh the HUD
        fn frame(&mut self) {
            self.state.tick();
            let frame = Frame::from_state(&self.state);
            self.renderer.draw(&frame);
            self.update_hud();
        }

        /// Update score text and start/game-over overlays in the DOM
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }

            if self.state.phase != self.last_phase {
                if let Some(el) = document.get_element_by_id("start-screen") {
                    let visible = self.state.phase == GamePhase::NotRunning;
                    let _ = el.class_list().toggle_with_force("hidden", !visible);
                }
                if let Some(el) = document.get_element_by_id("game-over-screen") {
                    let visible = self.state.phase == GamePhase::GameOver;
                    let _ = el.class_list().toggle_with_force("hidden", !visible);
                }
                if self.state.phase == GamePhase::GameOver {
                    if let Some(el) = document.get_element_by_id("final-score") {
                        el.set_text_content(Some(&format!("Score: {}", self.state.score)));
                    }
                }
                self.last_phase = self.state.phase;
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Web Swing starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = GameConfig::default();
        canvas.set_width(config.width as u32);
        canvas.set_height(config.height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("2d context request failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, config, ctx)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(game.clone());

        request_animation_frame(game);

        log::info!("Web Swing running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Keyboard: Space starts, arrows drive the tether
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "Space" => g.state.request_start(),
                    "ArrowUp" => g.state.set_input(InputSignal::Up, true),
                    "ArrowDown" => g.state.set_input(InputSignal::Down, true),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "ArrowUp" => g.state.set_input(InputSignal::Up, false),
                    "ArrowDown" => g.state.set_input(InputSignal::Down, false),
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse: press attaches the web at the pointer, release lets go
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let point = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                game.borrow_mut().state.request_attach(point);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().state.request_detach();
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("no document");

        if let Some(btn) = document.get_element_by_id("restartButton") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.state.request_reset();
                g.state.request_start();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            game.borrow_mut().frame();
            request_animation_frame(game.clone());
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use web_swing::config::GameConfig;
    use web_swing::sim::{GamePhase, GameState};

    env_logger::init();
    log::info!("Web Swing (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    // Headless smoke run: start, survive a few seconds of quiet ticks
    let mut state = GameState::new(1, GameConfig::default());
    state.request_start();
    for _ in 0..300 {
        state.tick();
        if state.phase != GamePhase::Running {
            break;
        }
    }
    println!("Headless run finished: phase {:?}, score {}", state.phase, state.score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
