use crate::core::store::{CanvasSize, Cell, PixelStore};
use crate::core::color::Color;
use crate::core::error::Result;
use crate::history::manager::HistoryManager;
use crate::app::tool_manager::ToolManager;
use crate::app::config::EngineConfig;
use crate::app::events::{InputEvent, EngineEffect};
use crate::render::compositor::Compositor;
use crate::tools::ToolType;
use crate::tools::tool_trait::{PointerDownOutcome, Preview};
use image::RgbaImage;
use log::{debug, info, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeRequest {
    pub from: CanvasSize,
    pub to: CanvasSize,
    pub painted_cells: usize,
}

/// Asked before a resize would throw away painted cells.
pub trait Confirm {
    fn confirm_resize(&mut self, request: &ResizeRequest) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&ResizeRequest) -> bool,
{
    fn confirm_resize(&mut self, request: &ResizeRequest) -> bool { self(request) }
}

/// Fixed answer, for headless use.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm_resize(&mut self, _request: &ResizeRequest) -> bool { self.0 }
}

pub struct PixelEngine {
    store: PixelStore,
    history: HistoryManager,
    tool_manager: ToolManager,
    config: EngineConfig,
}

impl PixelEngine {
    pub fn new(config: EngineConfig) -> Self {
        let mut store = PixelStore::new(config.size);
        store.primary_color = config.primary_color;

        Self {
            store,
            history: HistoryManager::new(config.history_limit),
            tool_manager: ToolManager::new(),
            config,
        }
    }

    pub fn store(&self) -> &PixelStore { &self.store }
    pub fn history(&self) -> &HistoryManager { &self.history }
    pub fn tool_manager(&self) -> &ToolManager { &self.tool_manager }
    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn active_tool(&self) -> ToolType { self.tool_manager.active_type() }

    pub fn set_tool(&mut self, tool: ToolType) {
        if self.tool_manager.is_dragging() {
            debug!("tool switched to {:?} mid-drag, current drag keeps its tool", tool);
        }
        self.tool_manager.set_tool(tool);
    }

    pub fn primary_color(&self) -> Color { self.store.primary_color }

    pub fn set_primary_color(&mut self, color: Color) {
        self.store.primary_color = color;
    }

    pub fn set_primary_color_hex(&mut self, hex: &str) -> Result<()> {
        self.store.primary_color = Color::from_hex(hex)?;
        Ok(())
    }

    pub fn preview(&self) -> Option<Preview> {
        self.tool_manager.preview(&self.store)
    }

    /// What a renderer should show right now: committed cells plus any live shape preview.
    pub fn display(&self) -> Vec<Cell> {
        Compositor::compose(&self.store, self.preview().as_ref())
    }

    pub fn handle_input(&mut self, event: InputEvent) -> EngineEffect {
        let result = match event {
            InputEvent::PointerDown { x, y } => match self.store.index(x, y) {
                Some(cell) => self.pointer_down(cell),
                None => {
                    trace!("pointer down at ({}, {}) is off the grid", x, y);
                    Ok(EngineEffect::None)
                }
            },
            InputEvent::PointerMove { x, y } => {
                match (self.tool_manager.is_dragging(), self.store.index(x, y)) {
                    (true, Some(cell)) => self.tool_manager
                        .handle_pointer_move(cell, &mut self.store)
                        .map(|changed| if changed { EngineEffect::RedrawCanvas } else { EngineEffect::None }),
                    _ => Ok(EngineEffect::None),
                }
            }
            InputEvent::PointerUp | InputEvent::PointerLeave => self.pointer_up(),
        };

        match result {
            Ok(effect) => effect,
            Err(e) => EngineEffect::Error(e),
        }
    }

    fn pointer_down(&mut self, cell: usize) -> Result<EngineEffect> {
        let tool = self.tool_manager.active_type();
        match self.tool_manager.handle_pointer_down(cell, &mut self.store)? {
            PointerDownOutcome::Drag => {
                debug!("drag started with {:?} at cell {}", tool, cell);
                Ok(EngineEffect::RedrawCanvas)
            }
            PointerDownOutcome::Committed(patch) => {
                self.history.commit(patch, &mut self.store)?;
                Ok(EngineEffect::RedrawCanvas)
            }
            PointerDownOutcome::Picked(value) => {
                if let Some(color) = value {
                    self.store.primary_color = color;
                }
                debug!("picked {:?} at cell {}, back to pen", value, cell);
                Ok(EngineEffect::ColorPicked(value))
            }
            PointerDownOutcome::Ignored => Ok(EngineEffect::None),
        }
    }

    fn pointer_up(&mut self) -> Result<EngineEffect> {
        let Some(drag) = self.tool_manager.drag().copied() else { return Ok(EngineEffect::None) };
        match self.tool_manager.handle_pointer_up(&mut self.store)? {
            Some(patch) => {
                debug!("drag with {:?} ended, {} cells changed", drag.tool, patch.len());
                self.history.commit(patch, &mut self.store)?;
                Ok(EngineEffect::RedrawCanvas)
            }
            None => Ok(EngineEffect::RedrawCanvas),
        }
    }

    /// Reverts the latest action. Ignored while a drag is in flight.
    pub fn undo(&mut self) -> Result<bool> {
        if self.tool_manager.is_dragging() {
            debug!("undo ignored during a drag");
            return Ok(false);
        }
        self.history.undo(&mut self.store)
    }

    /// Empties the bitmap. Not undoable: history is reset too.
    pub fn clear(&mut self) {
        self.tool_manager.cancel();
        self.store.clear();
        self.history.clear();
        info!("canvas cleared");
    }

    /// Reallocates the bitmap. A painted canvas is only discarded when
    /// `confirm` agrees; returns whether the resize happened.
    pub fn resize(&mut self, size: CanvasSize, confirm: &mut dyn Confirm) -> bool {
        let request = ResizeRequest {
            from: self.store.size(),
            to: size,
            painted_cells: self.store.painted_count(),
        };
        if request.painted_cells > 0 && !confirm.confirm_resize(&request) {
            warn!("resize {:?} -> {:?} declined, {} painted cells kept", request.from, request.to, request.painted_cells);
            return false;
        }

        self.tool_manager.cancel();
        self.store.reallocate(size);
        self.history.clear();
        info!("canvas resized to {}x{}", size.side(), size.side());
        true
    }

    pub fn resize_to_side(&mut self, side: u32, confirm: &mut dyn Confirm) -> Result<bool> {
        let size = CanvasSize::try_from(side)?;
        Ok(self.resize(size, confirm))
    }

    pub fn export_image(&self, scale: u32) -> RgbaImage {
        Compositor::rasterize(&self.store, scale)
    }

    pub fn export_default(&self) -> RgbaImage {
        self.export_image(self.config.export_scale)
    }
}

impl Default for PixelEngine {
    fn default() -> Self { Self::new(EngineConfig::default()) }
}
