use crate::core::store::PixelStore;
use crate::render::compositor::Compositor;
use crate::app::error::Result;
use chrono::{DateTime, Local, TimeZone};
use image::ImageFormat;
use std::path::{Path, PathBuf};

pub struct IoService;

impl IoService {
    pub fn export_file_name<Tz: TimeZone>(stamp: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        format!("pixel-art-{}.png", stamp.format("%Y%m%d-%H%M%S"))
    }

    pub fn save_png(path: &Path, store: &PixelStore, scale: u32) -> Result<()> {
        let image = Compositor::rasterize(store, scale);
        image.save_with_format(path, ImageFormat::Png)?;
        log::info!("exported {}x{} canvas to {}", store.side(), store.side(), path.display());
        Ok(())
    }

    /// Writes `pixel-art-<timestamp>.png` into `dir` and returns its path.
    pub fn export_timestamped(dir: &Path, store: &PixelStore, scale: u32) -> Result<PathBuf> {
        let path = dir.join(Self::export_file_name(&Local::now()));
        Self::save_png(&path, store, scale)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Color;
    use crate::core::store::CanvasSize;
    use chrono::Utc;
    use std::env;

    #[test]
    fn test_export_file_name_uses_timestamp() {
        let stamp = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(IoService::export_file_name(&stamp), "pixel-art-20240309-070501.png");
    }

    #[test]
    fn test_save_png_round_trip() {
        let mut store = PixelStore::new(CanvasSize::S16);
        store.set_pixel(0, 0, Some(Color::new(10, 20, 30))).unwrap();

        let mut path = env::temp_dir();
        path.push(format!("pxa_canvas_export_{}.png", std::process::id()));
        IoService::save_png(&path, &store, 2).expect("export failed");

        let loaded = image::open(&path).expect("reload failed").to_rgba8();
        assert_eq!(loaded.dimensions(), (32, 32));
        assert_eq!(loaded.get_pixel(1, 1).0, [10, 20, 30, 255]);
        assert_eq!(loaded.get_pixel(2, 0).0[3], 0);

        let _ = std::fs::remove_file(path);
    }
}
