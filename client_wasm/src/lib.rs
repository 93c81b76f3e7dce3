//! Browser front end for Pong
//!
//! Owns the platform side of the game: the canvas the frame is drawn on and the
//! JS callbacks that become game events. JS calls `key_down`/`key_up` from its
//! keyboard listeners and `render_frame` from `requestAnimationFrame`; each call
//! is one event, processed to completion before the next.

pub mod input;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod logging;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::ops::ControlFlow;

    use game_core::{GameEvent, GameState};
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use crate::canvas::CanvasSurface;
    use crate::input::scancode_from_code;
    use crate::logging;

    struct App {
        game: GameState,
        surface: CanvasSurface,
    }

    thread_local! {
        static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    }

    /// Start a new match drawing onto `canvas`
    #[wasm_bindgen]
    pub fn init_client(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        logging::init(tracing::Level::INFO);

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("No document available"))?;

        let game = GameState::new(js_sys::Date::now() as u64);
        let config = game.config();
        canvas.set_width(config.field_width as u32);
        canvas.set_height(config.field_height as u32);
        let surface = CanvasSurface::new(document, &canvas)?;

        tracing::info!(
            width = canvas.width(),
            height = canvas.height(),
            "client initialized"
        );
        APP.with(|app| *app.borrow_mut() = Some(App { game, surface }));
        Ok(())
    }

    /// Forward a `keydown` (by `KeyboardEvent.code`). Unknown keys are dropped.
    #[wasm_bindgen]
    pub fn key_down(code: &str) -> Result<bool, JsValue> {
        match scancode_from_code(code) {
            Some(key) => dispatch(GameEvent::KeyDown(key)),
            None => Ok(is_running()),
        }
    }

    #[wasm_bindgen]
    pub fn key_up(code: &str) -> Result<bool, JsValue> {
        match scancode_from_code(code) {
            Some(key) => dispatch(GameEvent::KeyUp(key)),
            None => Ok(is_running()),
        }
    }

    /// Run one tick: fixed-step update, then draw. Returns false once the game has quit.
    #[wasm_bindgen]
    pub fn render_frame() -> Result<bool, JsValue> {
        dispatch(GameEvent::Tick)
    }

    /// End the match. Nothing is kept.
    #[wasm_bindgen]
    pub fn quit() -> Result<bool, JsValue> {
        dispatch(GameEvent::Quit)
    }

    fn is_running() -> bool {
        APP.with(|app| app.borrow().is_some())
    }

    /// Feed one event to the running game. Returns whether the game is still running.
    fn dispatch(event: GameEvent) -> Result<bool, JsValue> {
        APP.with(|cell| {
            let mut slot = cell.borrow_mut();
            let Some(app) = slot.as_mut() else {
                return Ok(false);
            };

            match app.game.handle_event(event, &mut app.surface)? {
                ControlFlow::Continue(()) => Ok(true),
                ControlFlow::Break(()) => {
                    let score = app.game.score();
                    tracing::info!(left = score.left, right = score.right, "game quit");
                    *slot = None;
                    Ok(false)
                }
            }
        })
    }
}
