pub mod bucket;
pub mod eyedropper;
pub mod geometry;
pub mod pencil;
pub mod shape;
pub mod tool_trait;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ToolType {
    Pen,
    Eraser,
    Fill,
    ColorPicker,
    Line,
    Rectangle,
    Circle,
}

impl ToolType {
    pub const ALL: [ToolType; 7] = [
        ToolType::Pen, ToolType::Eraser, ToolType::Fill, ToolType::ColorPicker,
        ToolType::Line, ToolType::Rectangle, ToolType::Circle,
    ];

    /// Tools that preview during a drag and commit on release.
    pub fn is_shape(self) -> bool {
        matches!(self, ToolType::Line | ToolType::Rectangle | ToolType::Circle)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "pen" | "pencil" => Some(ToolType::Pen),
            "eraser" => Some(ToolType::Eraser),
            "fill" | "bucket" => Some(ToolType::Fill),
            "picker" | "colorpicker" | "color-picker" | "eyedropper" => Some(ToolType::ColorPicker),
            "line" => Some(ToolType::Line),
            "rect" | "rectangle" => Some(ToolType::Rectangle),
            "circle" => Some(ToolType::Circle),
            _ => None,
        }
    }
}
