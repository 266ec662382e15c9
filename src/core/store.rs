use super::color::Color;
use crate::core::error::{CoreError, Result};

/// A grid cell: `None` is an empty (transparent) cell.
pub type Cell = Option<Color>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanvasSize {
    S16,
    S32,
    S48,
    S64,
}

impl CanvasSize {
    pub const ALL: [CanvasSize; 4] = [CanvasSize::S16, CanvasSize::S32, CanvasSize::S48, CanvasSize::S64];

    pub fn side(self) -> u32 {
        match self {
            CanvasSize::S16 => 16,
            CanvasSize::S32 => 32,
            CanvasSize::S48 => 48,
            CanvasSize::S64 => 64,
        }
    }

    pub fn cell_count(self) -> usize {
        (self.side() * self.side()) as usize
    }
}

impl TryFrom<u32> for CanvasSize {
    type Error = CoreError;
    fn try_from(side: u32) -> Result<Self> {
        CanvasSize::ALL
            .into_iter()
            .find(|s| s.side() == side)
            .ok_or(CoreError::UnsupportedSize(side))
    }
}

/// Row-major index of `(x, y)` on a `side` x `side` grid, `None` when off the grid.
pub fn index_in(side: u32, x: i32, y: i32) -> Option<usize> {
    let side = side as i32;
    if x < 0 || y < 0 || x >= side || y >= side {
        return None;
    }
    Some((y * side + x) as usize)
}

pub struct PixelStore {
    size: CanvasSize,
    cells: Vec<Cell>,
    pub primary_color: Color,
}

impl PixelStore {
    pub fn new(size: CanvasSize) -> Self {
        Self {
            size,
            cells: vec![None; size.cell_count()],
            primary_color: Color::black(),
        }
    }

    pub fn size(&self) -> CanvasSize { self.size }
    pub fn side(&self) -> u32 { self.size.side() }
    pub fn cells(&self) -> &[Cell] { &self.cells }

    /// Linear index of `(x, y)`, or `None` outside the grid. Never clamps or wraps.
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        index_in(self.side(), x, y)
    }

    pub fn coords(&self, index: usize) -> (u32, u32) {
        let side = self.side() as usize;
        ((index % side) as u32, (index / side) as u32)
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.cells.len()
    }

    pub fn cell(&self, index: usize) -> Cell {
        self.cells.get(index).copied().flatten()
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Writes `value` and returns what the cell held before.
    pub fn set_cell(&mut self, index: usize, value: Cell) -> Result<Cell> {
        let slot = self.cells.get_mut(index).ok_or(CoreError::IndexOutOfRange(index))?;
        Ok(std::mem::replace(slot, value))
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, value: Cell) -> Result<Cell> {
        let index = self.index(x, y).ok_or(CoreError::OutOfBounds { x, y })?;
        self.set_cell(index, value)
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Drops every cell and reallocates for `size`.
    pub fn reallocate(&mut self, size: CanvasSize) {
        self.size = size;
        self.cells = vec![None; size.cell_count()];
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
    }
}

#[cfg(test)]
mod tests;
