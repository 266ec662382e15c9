use crate::core::store::{Cell, PixelStore};
use crate::tools::tool_trait::Preview;
use image::RgbaImage;
use rayon::prelude::*;

pub const DEFAULT_EXPORT_SCALE: u32 = 10;
/// Largest export block size; a 64-cell canvas exports at most 4096 px square.
pub const MAX_EXPORT_SCALE: u32 = 64;

const GRID_A: [u8; 4] = [35, 35, 35, 255];
const GRID_B: [u8; 4] = [30, 30, 30, 255];

pub struct Compositor;

impl Compositor {
    /// Committed cells with the shape preview painted on top.
    pub fn compose(store: &PixelStore, preview: Option<&Preview>) -> Vec<Cell> {
        let mut cells = store.cells().to_vec();
        if let Some(p) = preview {
            for &index in &p.cells {
                if let Some(slot) = cells.get_mut(index) {
                    *slot = Some(p.color);
                }
            }
        }
        cells
    }

    /// One RGBA pixel per cell into `frame`; empty cells show a checkerboard.
    /// `frame` must hold `side * side * 4` bytes, extra bytes are untouched.
    pub fn render_rgba(side: u32, cells: &[Cell], frame: &mut [u8]) {
        let side = side as usize;
        let stride = side * 4;
        if side == 0 || cells.len() < side * side { return; }

        frame.par_chunks_exact_mut(stride)
            .take(side)
            .enumerate()
            .for_each(|(y, row)| {
                for x in 0..side {
                    let px = match cells[y * side + x] {
                        Some(color) => color.to_rgba(),
                        None if (x + y) % 2 == 0 => GRID_A,
                        None => GRID_B,
                    };
                    row[x * 4..x * 4 + 4].copy_from_slice(&px);
                }
            });
    }

    /// Upscaled export: a solid `scale`-sized block per painted cell, empty
    /// cells fully transparent. Pure function of the bitmap. `scale` is
    /// clamped to `1..=MAX_EXPORT_SCALE`.
    pub fn rasterize(store: &PixelStore, scale: u32) -> RgbaImage {
        let scale = scale.clamp(1, MAX_EXPORT_SCALE);
        let side = store.side();
        let width = side * scale;
        let mut image = RgbaImage::new(width, width);
        let cells = store.cells();
        let (side, scale) = (side as usize, scale as usize);

        image.par_chunks_exact_mut(width as usize * 4)
            .enumerate()
            .for_each(|(py, row)| {
                let cy = py / scale;
                for cx in 0..side {
                    if let Some(color) = cells[cy * side + cx] {
                        let px = color.to_rgba();
                        for block in row[cx * scale * 4..(cx + 1) * scale * 4].chunks_exact_mut(4) {
                            block.copy_from_slice(&px);
                        }
                    }
                }
            });
        image
    }
}
