use crate::core::color::Color;
use crate::core::error::CoreError;
use crate::core::store::{Cell, PixelStore};
use crate::history::patch::ActionPatch;
use super::ToolType;
use std::collections::BTreeSet;

/// Live pointer-held interval. `tool` is latched at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub tool: ToolType,
    pub start: usize,
    pub current: usize,
}

/// Render-only overlay for an uncommitted shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub cells: BTreeSet<usize>,
    pub color: Color,
}

#[derive(Debug)]
pub enum PointerDownOutcome {
    /// The tool wants the following moves and the release.
    Drag,
    /// One-shot mutation, already complete on press.
    Committed(ActionPatch),
    /// The pressed cell's value, for the color picker.
    Picked(Cell),
    Ignored,
}

pub trait Tool {
    fn on_pointer_down(&mut self, cell: usize, store: &mut PixelStore) -> Result<PointerDownOutcome, CoreError>;
    /// Returns whether anything visible changed.
    fn on_pointer_move(&mut self, _drag: &DragState, _store: &mut PixelStore) -> Result<bool, CoreError> { Ok(false) }
    fn on_pointer_up(&mut self, drag: &DragState, store: &mut PixelStore) -> Result<Option<ActionPatch>, CoreError>;
    fn preview(&self, _drag: &DragState, _store: &PixelStore) -> Option<Preview> { None }
    fn on_cancel(&mut self) {}
}
