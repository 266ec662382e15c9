use crate::app::state::AppState;
use crate::app::events::{InputEvent, EngineEffect};
use crate::core::error::CoreError;

pub struct InputHandler;

impl InputHandler {
    pub fn on_mouse_down(app: &mut AppState, x: i32, y: i32) -> Result<(), CoreError> {
        Self::dispatch(app, InputEvent::PointerDown { x, y })
    }

    pub fn on_mouse_move(app: &mut AppState, x: i32, y: i32) -> Result<(), CoreError> {
        Self::dispatch(app, InputEvent::PointerMove { x, y })
    }

    pub fn on_mouse_up(app: &mut AppState) -> Result<(), CoreError> {
        Self::dispatch(app, InputEvent::PointerUp)
    }

    pub fn on_mouse_leave(app: &mut AppState) -> Result<(), CoreError> {
        Self::dispatch(app, InputEvent::PointerLeave)
    }

    fn dispatch(app: &mut AppState, event: InputEvent) -> Result<(), CoreError> {
        let effect = app.engine.handle_input(event);
        let result = match &effect {
            EngineEffect::Error(e) => Err(e.clone()),
            _ => Ok(()),
        };

        Self::handle_engine_effect(app, effect);
        result
    }

    pub fn handle_engine_effect(app: &mut AppState, effect: EngineEffect) {
        match &effect {
            EngineEffect::RedrawCanvas => app.is_dirty = true,
            EngineEffect::Error(e) => {
                log::warn!("engine error: {}", e);
                app.error_message = Some(e.to_string());
            }
            EngineEffect::None | EngineEffect::ColorPicked(_) => {}
        }

        if effect.needs_redraw() {
            app.render();
        }
    }
}
