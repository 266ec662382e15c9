use crate::core::error::CoreError;
use crate::core::store::Cell;

/// Pointer input in grid coordinates. Off-grid coordinates are allowed and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown { x: i32, y: i32 },
    PointerMove { x: i32, y: i32 },
    PointerUp,
    /// Pointer left the canvas; ends a drag exactly like `PointerUp`.
    PointerLeave,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEffect {
    None,
    RedrawCanvas,
    /// The color picker read a cell. The active tool is back to pen.
    ColorPicked(Cell),
    Error(CoreError),
}

impl EngineEffect {
    pub fn needs_redraw(&self) -> bool {
        matches!(self, EngineEffect::RedrawCanvas | EngineEffect::ColorPicked(_))
    }
}
