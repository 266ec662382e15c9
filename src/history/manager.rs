use crate::core::store::PixelStore;
use super::patch::ActionPatch;
use crate::core::error::Result;

pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Bounded undo stack. At capacity the oldest entry is evicted.
pub struct HistoryManager {
    undo_stack: Vec<ActionPatch>,
    max_steps: usize,
}

impl HistoryManager {
    pub fn new(max_steps: usize) -> Self {
        Self { undo_stack: Vec::new(), max_steps: max_steps.max(1) }
    }

    pub fn len(&self) -> usize { self.undo_stack.len() }
    pub fn is_empty(&self) -> bool { self.undo_stack.is_empty() }
    pub fn can_undo(&self) -> bool { !self.undo_stack.is_empty() }
    pub fn max_steps(&self) -> usize { self.max_steps }
    pub fn entries(&self) -> &[ActionPatch] { &self.undo_stack }

    /// Applies `patch` and records it. Applying is idempotent for tools that
    /// already painted while dragging.
    pub fn commit(&mut self, patch: ActionPatch, store: &mut PixelStore) -> Result<()> {
        patch.apply(store, true)?;
        log::trace!("history: recorded {:?} touching {} cells", patch.tool, patch.len());
        self.undo_stack.push(patch);
        if self.undo_stack.len() > self.max_steps {
            self.undo_stack.remove(0);
        }
        Ok(())
    }

    /// Returns `false` when there was nothing to undo.
    pub fn undo(&mut self, store: &mut PixelStore) -> Result<bool> {
        let Some(patch) = self.undo_stack.pop() else { return Ok(false) };
        if let Err(e) = patch.apply(store, false) {
            self.undo_stack.push(patch);
            return Err(e);
        }
        log::debug!("history: undid {:?}, {} entries left", patch.tool, self.undo_stack.len());
        Ok(true)
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
    }
}
