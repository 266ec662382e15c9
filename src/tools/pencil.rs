use crate::core::store::{Cell, PixelStore};
use crate::core::error::CoreError;
use crate::history::patch::ActionPatch;
use super::tool_trait::{DragState, PointerDownOutcome, Tool};
use super::ToolType;
use std::collections::HashMap;

/// Pen and eraser: paint each entered cell immediately, record one patch per stroke.
pub struct PencilTool {
    pub is_eraser: bool,
    original_cells: HashMap<usize, Cell>,
}

impl PencilTool {
    pub fn new(is_eraser: bool) -> Self {
        Self { is_eraser, original_cells: HashMap::new() }
    }

    fn paint(&mut self, index: usize, store: &mut PixelStore) -> Result<bool, CoreError> {
        let value = if self.is_eraser { None } else { Some(store.primary_color) };
        let current = store.cell(index);
        self.original_cells.entry(index).or_insert(current);
        if current == value {
            return Ok(false);
        }
        store.set_cell(index, value)?;
        Ok(true)
    }
}

impl Tool for PencilTool {
    fn on_pointer_down(&mut self, cell: usize, store: &mut PixelStore) -> Result<PointerDownOutcome, CoreError> {
        self.original_cells.clear();
        self.paint(cell, store)?;
        Ok(PointerDownOutcome::Drag)
    }

    fn on_pointer_move(&mut self, drag: &DragState, store: &mut PixelStore) -> Result<bool, CoreError> {
        self.paint(drag.current, store)
    }

    fn on_pointer_up(&mut self, _drag: &DragState, store: &mut PixelStore) -> Result<Option<ActionPatch>, CoreError> {
        let kind = if self.is_eraser { ToolType::Eraser } else { ToolType::Pen };
        let mut patch = ActionPatch::new(kind);

        let mut touched: Vec<_> = self.original_cells.drain().collect();
        touched.sort_unstable_by_key(|&(index, _)| index);
        for (index, old_value) in touched {
            patch.add_cell_diff(index, old_value, store.cell(index));
        }
        // An unchanged stroke still yields an empty entry.
        Ok(Some(patch))
    }

    fn on_cancel(&mut self) {
        self.original_cells.clear();
    }
}
