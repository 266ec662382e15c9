use crate::app::engine::{AutoConfirm, Confirm, PixelEngine};
use crate::app::config::EngineConfig;
use crate::app::input_handler::InputHandler;
use crate::app::io_service::IoService;
use crate::app::error::Result;
use crate::core::error::CoreError;
use crate::core::store::Cell;
use crate::tools::ToolType;
use std::path::{Path, PathBuf};

/// Read-only view handed to the render callback.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub side: u32,
    pub cells: &'a [Cell],
}

pub type RenderCallback = Box<dyn FnMut(Frame<'_>)>;

/// Shell-facing wrapper: routes pointer input into the engine, re-renders
/// after every visible change and keeps the last error for display.
pub struct AppState {
    pub engine: PixelEngine,
    pub is_dirty: bool,
    pub error_message: Option<String>,
    pub export_dir: PathBuf,
    pub exports: Vec<PathBuf>,
    confirmer: Box<dyn Confirm>,
    renderer: Option<RenderCallback>,
}

impl AppState {
    /// Destructive resizes are declined until a confirmer is installed.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: PixelEngine::new(config),
            is_dirty: false,
            error_message: None,
            export_dir: PathBuf::from("."),
            exports: Vec::new(),
            confirmer: Box::new(AutoConfirm(false)),
            renderer: None,
        }
    }

    pub fn with_confirmer(mut self, confirmer: impl Confirm + 'static) -> Self {
        self.confirmer = Box::new(confirmer);
        self
    }

    pub fn with_renderer(mut self, renderer: impl FnMut(Frame<'_>) + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn render(&mut self) {
        let Some(renderer) = self.renderer.as_mut() else { return };
        let cells = self.engine.display();
        renderer(Frame { side: self.engine.store().side(), cells: &cells });
    }

    pub fn set_tool(&mut self, tool: ToolType) {
        self.engine.set_tool(tool);
    }

    pub fn set_color_hex(&mut self, hex: &str) -> std::result::Result<(), CoreError> {
        let res = self.engine.set_primary_color_hex(hex);
        if let Err(e) = &res {
            self.error_message = Some(e.to_string());
        }
        res
    }

    pub fn on_mouse_down(&mut self, x: i32, y: i32) -> std::result::Result<(), CoreError> {
        InputHandler::on_mouse_down(self, x, y)
    }

    pub fn on_mouse_move(&mut self, x: i32, y: i32) -> std::result::Result<(), CoreError> {
        InputHandler::on_mouse_move(self, x, y)
    }

    pub fn on_mouse_up(&mut self) -> std::result::Result<(), CoreError> {
        InputHandler::on_mouse_up(self)
    }

    pub fn on_mouse_leave(&mut self) -> std::result::Result<(), CoreError> {
        InputHandler::on_mouse_leave(self)
    }

    pub fn undo(&mut self) {
        match self.engine.undo() {
            Ok(true) => {
                self.is_dirty = true;
                self.render();
            }
            Ok(false) => {}
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    pub fn clear(&mut self) {
        self.engine.clear();
        self.is_dirty = true;
        self.render();
    }

    /// Returns whether the canvas was reallocated.
    pub fn resize(&mut self, side: u32) -> std::result::Result<bool, CoreError> {
        let resized = self.engine.resize_to_side(side, self.confirmer.as_mut())?;
        if resized {
            self.is_dirty = false;
            self.render();
        }
        Ok(resized)
    }

    pub fn export_png(&mut self, path: Option<&Path>) -> Result<PathBuf> {
        let scale = self.engine.config().export_scale;
        let written = match path {
            Some(p) => {
                IoService::save_png(p, self.engine.store(), scale)?;
                p.to_path_buf()
            }
            None => IoService::export_timestamped(&self.export_dir, self.engine.store(), scale)?,
        };
        self.is_dirty = false;
        self.exports.push(written.clone());
        Ok(written)
    }
}

impl Default for AppState {
    fn default() -> Self { Self::new(EngineConfig::default()) }
}
