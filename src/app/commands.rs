use crate::core::color::Color;
use crate::core::store::CanvasSize;
use crate::tools::ToolType;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    SetTool(ToolType),
    SetColor(Color),
    PointerDown(i32, i32),
    PointerMove(i32, i32),
    PointerUp,
    PointerLeave,
    Undo,
    Clear,
    Resize(CanvasSize),
    /// `None` writes a timestamped file into the export directory.
    Export(Option<PathBuf>),
}
