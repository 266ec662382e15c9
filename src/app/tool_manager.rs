use std::collections::HashMap;
use crate::tools::ToolType;
use crate::tools::tool_trait::{DragState, PointerDownOutcome, Preview, Tool};
use crate::tools::pencil::PencilTool;
use crate::tools::bucket::BucketTool;
use crate::tools::eyedropper::EyedropperTool;
use crate::tools::shape::ShapeTool;
use crate::core::store::PixelStore;
use crate::history::patch::ActionPatch;
use crate::core::error::CoreError;

/// Idle/Dragging state machine. The tool active at pointer-down owns the
/// whole drag; changing the selection mid-drag only affects the next press.
pub struct ToolManager {
    active_type: ToolType,
    tools: HashMap<ToolType, Box<dyn Tool>>,
    drag: Option<DragState>,
}

impl ToolManager {
    pub fn new() -> Self {
        let tools = ToolType::ALL.into_iter()
            .map(|kind| (kind, Self::build_tool(kind)))
            .collect();

        Self {
            active_type: ToolType::Pen,
            tools,
            drag: None,
        }
    }

    fn build_tool(kind: ToolType) -> Box<dyn Tool> {
        match kind {
            ToolType::Pen => Box::new(PencilTool::new(false)),
            ToolType::Eraser => Box::new(PencilTool::new(true)),
            ToolType::Fill => Box::new(BucketTool::new()),
            ToolType::ColorPicker => Box::new(EyedropperTool::new()),
            shape => Box::new(ShapeTool::new(shape)),
        }
    }

    pub fn active_type(&self) -> ToolType { self.active_type }
    pub fn drag(&self) -> Option<&DragState> { self.drag.as_ref() }
    pub fn is_dragging(&self) -> bool { self.drag.is_some() }

    pub fn set_tool(&mut self, tool_type: ToolType) {
        self.active_type = tool_type;
    }

    pub fn handle_pointer_down(&mut self, cell: usize, store: &mut PixelStore) -> Result<PointerDownOutcome, CoreError> {
        if self.drag.is_some() { return Ok(PointerDownOutcome::Ignored); }

        let tool_type = self.active_type;
        let Some(tool) = self.tools.get_mut(&tool_type) else { return Ok(PointerDownOutcome::Ignored) };
        let outcome = tool.on_pointer_down(cell, store)?;

        match &outcome {
            PointerDownOutcome::Drag => {
                self.drag = Some(DragState { tool: tool_type, start: cell, current: cell });
            }
            PointerDownOutcome::Picked(_) => self.active_type = ToolType::Pen,
            PointerDownOutcome::Committed(_) | PointerDownOutcome::Ignored => {}
        }
        Ok(outcome)
    }

    /// Returns whether the display changed.
    pub fn handle_pointer_move(&mut self, cell: usize, store: &mut PixelStore) -> Result<bool, CoreError> {
        let Some(drag) = self.drag.as_mut() else { return Ok(false) };
        if drag.current == cell { return Ok(false); }
        drag.current = cell;

        let drag = *drag;
        match self.tools.get_mut(&drag.tool) {
            Some(tool) => tool.on_pointer_move(&drag, store),
            None => Ok(false),
        }
    }

    pub fn handle_pointer_up(&mut self, store: &mut PixelStore) -> Result<Option<ActionPatch>, CoreError> {
        let Some(drag) = self.drag.take() else { return Ok(None) };
        match self.tools.get_mut(&drag.tool) {
            Some(tool) => tool.on_pointer_up(&drag, store),
            None => Ok(None),
        }
    }

    pub fn preview(&self, store: &PixelStore) -> Option<Preview> {
        let drag = self.drag.as_ref()?;
        self.tools.get(&drag.tool)?.preview(drag, store)
    }

    /// Drops any in-flight drag without producing a patch.
    pub fn cancel(&mut self) {
        if let Some(drag) = self.drag.take() {
            if let Some(tool) = self.tools.get_mut(&drag.tool) {
                tool.on_cancel();
            }
        }
    }
}

impl Default for ToolManager {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests;
