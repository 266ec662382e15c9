use crate::core::store::{index_in, PixelStore};
use crate::core::error::CoreError;
use crate::history::patch::ActionPatch;
use super::geometry::Geometry;
use super::tool_trait::{DragState, PointerDownOutcome, Preview, Tool};
use super::ToolType;
use std::collections::BTreeSet;

/// Collects rasterizer output into in-grid cell indices.
struct CellSet {
    side: u32,
    cells: BTreeSet<usize>,
}

impl CellSet {
    fn new(side: u32) -> Self {
        Self { side, cells: BTreeSet::new() }
    }

    fn plot(&mut self, x: i32, y: i32) {
        if let Some(index) = index_in(self.side, x, y) {
            self.cells.insert(index);
        }
    }
}

/// Bresenham cells between two points. Endpoints are ordered first so the
/// result does not depend on drag direction.
pub fn line_cells(x0: i32, y0: i32, x1: i32, y1: i32, side: u32) -> BTreeSet<usize> {
    let ((ax, ay), (bx, by)) = if (x0, y0) <= (x1, y1) { ((x0, y0), (x1, y1)) } else { ((x1, y1), (x0, y0)) };
    let mut set = CellSet::new(side);
    Geometry::bresenham_line(ax, ay, bx, by, |x, y| set.plot(x, y));
    set.cells
}

pub fn rectangle_cells(x0: i32, y0: i32, x1: i32, y1: i32, side: u32) -> BTreeSet<usize> {
    let mut set = CellSet::new(side);
    Geometry::rectangle_outline(x0, y0, x1, y1, |x, y| set.plot(x, y));
    set.cells
}

/// `(x0, y0)` is the center; the radius is the floored distance to `(x1, y1)`.
pub fn circle_cells(x0: i32, y0: i32, x1: i32, y1: i32, side: u32) -> BTreeSet<usize> {
    let radius = Geometry::floor_distance(x1 - x0, y1 - y0);
    let mut set = CellSet::new(side);
    Geometry::midpoint_circle(x0, y0, radius, |x, y| set.plot(x, y));
    set.cells
}

/// Cells a drag from `start` to `end` paints. Only shape tools rasterize a
/// drag; every other tool yields an empty set.
pub fn apply_tool(tool: ToolType, start: (i32, i32), end: (i32, i32), side: u32) -> BTreeSet<usize> {
    let ((x0, y0), (x1, y1)) = (start, end);
    match tool {
        ToolType::Line => line_cells(x0, y0, x1, y1, side),
        ToolType::Rectangle => rectangle_cells(x0, y0, x1, y1, side),
        ToolType::Circle => circle_cells(x0, y0, x1, y1, side),
        ToolType::Pen | ToolType::Eraser | ToolType::Fill | ToolType::ColorPicker => BTreeSet::new(),
    }
}

pub struct ShapeTool {
    kind: ToolType,
}

impl ShapeTool {
    pub fn new(kind: ToolType) -> Self {
        debug_assert!(kind.is_shape(), "{:?} is not a shape tool", kind);
        Self { kind }
    }

    fn cells_for(&self, drag: &DragState, store: &PixelStore) -> BTreeSet<usize> {
        let (sx, sy) = store.coords(drag.start);
        let (cx, cy) = store.coords(drag.current);
        apply_tool(self.kind, (sx as i32, sy as i32), (cx as i32, cy as i32), store.side())
    }
}

impl Tool for ShapeTool {
    fn on_pointer_down(&mut self, _cell: usize, _store: &mut PixelStore) -> Result<PointerDownOutcome, CoreError> {
        Ok(PointerDownOutcome::Drag)
    }

    fn on_pointer_move(&mut self, _drag: &DragState, _store: &mut PixelStore) -> Result<bool, CoreError> {
        Ok(true)
    }

    fn on_pointer_up(&mut self, drag: &DragState, store: &mut PixelStore) -> Result<Option<ActionPatch>, CoreError> {
        let color = Some(store.primary_color);
        let mut patch = ActionPatch::new(self.kind);
        for index in self.cells_for(drag, store) {
            patch.add_cell_diff(index, store.cell(index), color);
        }
        Ok(Some(patch))
    }

    fn preview(&self, drag: &DragState, store: &PixelStore) -> Option<Preview> {
        Some(Preview { cells: self.cells_for(drag, store), color: store.primary_color })
    }
}

#[cfg(test)]
mod tests;
