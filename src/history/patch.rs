use crate::core::store::{Cell, PixelStore};
use crate::core::error::{CoreError, Result};
use crate::tools::ToolType;

#[derive(Debug, Clone, PartialEq)]
pub struct CellDiff {
    pub index: usize,
    pub old_value: Cell,
    pub new_value: Cell,
}

/// One user action: the cells it changed and what they held before.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionPatch {
    pub tool: ToolType,
    diffs: Vec<CellDiff>,
}

impl ActionPatch {
    pub fn new(tool: ToolType) -> Self {
        Self { tool, diffs: Vec::new() }
    }

    pub fn is_empty(&self) -> bool { self.diffs.is_empty() }
    pub fn len(&self) -> usize { self.diffs.len() }
    pub fn cell_diffs(&self) -> &[CellDiff] { &self.diffs }

    /// Unchanged cells are not recorded.
    pub fn add_cell_diff(&mut self, index: usize, old_value: Cell, new_value: Cell) {
        if old_value != new_value {
            self.diffs.push(CellDiff { index, old_value, new_value });
        }
    }

    /// Writes new values (`forward`) or restores old ones. Validates every
    /// index before touching the store, so a bad patch leaves it unchanged.
    pub fn apply(&self, store: &mut PixelStore, forward: bool) -> Result<()> {
        if let Some(bad) = self.diffs.iter().find(|d| !store.contains_index(d.index)) {
            return Err(CoreError::IndexOutOfRange(bad.index));
        }

        let iter: Box<dyn Iterator<Item = &CellDiff>> = if forward {
            Box::new(self.diffs.iter())
        } else {
            Box::new(self.diffs.iter().rev())
        };
        for diff in iter {
            let target = if forward { diff.new_value } else { diff.old_value };
            store.set_cell(diff.index, target)?;
        }
        Ok(())
    }
}
