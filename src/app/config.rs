use crate::core::color::Color;
use crate::core::store::CanvasSize;
use crate::history::manager::DEFAULT_HISTORY_LIMIT;
use crate::render::compositor::DEFAULT_EXPORT_SCALE;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub size: CanvasSize,
    pub history_limit: usize,
    pub export_scale: u32,
    pub primary_color: Color,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: CanvasSize::S32,
            history_limit: DEFAULT_HISTORY_LIMIT,
            export_scale: DEFAULT_EXPORT_SCALE,
            primary_color: Color::black(),
        }
    }
}
