use crate::core::store::{Cell, PixelStore};
use crate::core::error::CoreError;
use crate::history::patch::ActionPatch;
use super::tool_trait::{DragState, PointerDownOutcome, Tool};
use super::ToolType;
use std::collections::VecDeque;

/// Cells 4-connected to `start` through cells equal to `target`, in BFS order.
/// Each cell is enqueued at most once.
pub fn fill_region(cells: &[Cell], side: u32, start: usize, target: Cell) -> Vec<usize> {
    let side = side as usize;
    if start >= cells.len() || cells[start] != target {
        return Vec::new();
    }

    let mut visited = vec![false; cells.len()];
    let mut queue = VecDeque::with_capacity(side * 4);
    let mut region = Vec::new();
    visited[start] = true;
    queue.push_back(start);

    while let Some(index) = queue.pop_front() {
        region.push(index);
        let (x, y) = (index % side, index / side);

        let mut neighbors = [None; 4];
        if y > 0 { neighbors[0] = Some(index - side); }
        if y + 1 < side { neighbors[1] = Some(index + side); }
        if x + 1 < side { neighbors[2] = Some(index + 1); }
        if x > 0 { neighbors[3] = Some(index - 1); }

        for n in neighbors.into_iter().flatten() {
            if !visited[n] && cells[n] == target {
                visited[n] = true;
                queue.push_back(n);
            }
        }
    }
    region
}

/// Describes replacing the region under `start` with `replacement`.
/// `None` when the fill would change nothing.
pub fn flood_fill(store: &PixelStore, start: usize, replacement: Cell) -> Option<ActionPatch> {
    if !store.contains_index(start) { return None; }
    let target = store.cell(start);
    if target == replacement { return None; }

    let mut patch = ActionPatch::new(ToolType::Fill);
    for index in fill_region(store.cells(), store.side(), start, target) {
        patch.add_cell_diff(index, target, replacement);
    }
    Some(patch)
}

pub struct BucketTool;

impl BucketTool {
    pub fn new() -> Self { Self }
}

impl Tool for BucketTool {
    fn on_pointer_down(&mut self, cell: usize, store: &mut PixelStore) -> Result<PointerDownOutcome, CoreError> {
        match flood_fill(store, cell, Some(store.primary_color)) {
            Some(patch) => {
                log::debug!("fill from cell {} covers {} cells", cell, patch.len());
                Ok(PointerDownOutcome::Committed(patch))
            }
            None => {
                log::trace!("fill at cell {} skipped, region already {}", cell, store.primary_color);
                Ok(PointerDownOutcome::Ignored)
            }
        }
    }

    fn on_pointer_up(&mut self, _drag: &DragState, _store: &mut PixelStore) -> Result<Option<ActionPatch>, CoreError> { Ok(None) }
}
