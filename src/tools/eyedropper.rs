use crate::core::store::PixelStore;
use crate::core::error::CoreError;
use crate::history::patch::ActionPatch;
use super::tool_trait::{DragState, PointerDownOutcome, Tool};

pub struct EyedropperTool;

impl EyedropperTool {
    pub fn new() -> Self { Self }
}

impl Tool for EyedropperTool {
    fn on_pointer_down(&mut self, cell: usize, store: &mut PixelStore) -> Result<PointerDownOutcome, CoreError> {
        Ok(PointerDownOutcome::Picked(store.cell(cell)))
    }

    fn on_pointer_up(&mut self, _drag: &DragState, _store: &mut PixelStore) -> Result<Option<ActionPatch>, CoreError> { Ok(None) }
}
