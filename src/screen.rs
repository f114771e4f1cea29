use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;

use crate::rectangle::Rect;

/// RGBA8 framebuffer, either a whole surface or one tile of it.
///
/// `rect` places the buffer on the full surface; pixel accessors take
/// coordinates local to the buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSpace {
    pub rect: Rect,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

// Byte offset of pixel (x, y) in a row-major RGBA8 buffer, in usize so large
// surfaces don't wrap
#[inline(always)]
fn pixel_offset(width: u32, x: u32, y: u32) -> usize {
    (y as usize * width as usize + x as usize) * 4
}

impl ScreenSpace {
    pub fn new(width: u32, height: u32) -> Self {
        Self::tile(Rect::full(width, height))
    }
    pub fn tile(rect: Rect) -> Self {
        let size_calc = rect.width() as usize * rect.height() as usize;
        Self {
            rect,
            width: rect.width(),
            height: rect.height(),
            rgba: vec![0; size_calc * 4],
        }
    }
    pub fn is_empty(&self) -> bool {
        self.rgba.is_empty()
    }
    pub fn set_pixel(&mut self, x: u32, y: u32, red: u8, green: u8, blue: u8, alpha: u8) {
        if x >= self.width || y >= self.height { return; }
        let i = pixel_offset(self.width, x, y);
        self.rgba[i] = red;
        self.rgba[i + 1] = green;
        self.rgba[i + 2] = blue;
        self.rgba[i + 3] = alpha;
    }
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        if x >= self.width || y >= self.height { return None }
        let i = pixel_offset(self.width, x, y);
        Some((self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]))
    }
    /// Copy a tile into this buffer at the tile's position, clipped to our bounds
    pub fn merge_tile(&mut self, tile: &ScreenSpace) {
        let rect = tile.rect;
        if rect.min_x >= self.width {
            return;
        }
        let row_len = rect.width().min(self.width - rect.min_x);

        for y in 0..rect.height() {
            let screen_y = rect.min_y + y;
            if screen_y >= self.height {
                continue;
            }

            let screen_row_start = pixel_offset(self.width, rect.min_x, screen_y);
            let tile_row_start = pixel_offset(rect.width(), 0, y);
            let len = row_len as usize * 4;

            self.rgba[screen_row_start..screen_row_start + len]
                .copy_from_slice(&tile.rgba[tile_row_start..tile_row_start + len]);
        }
    }
    pub fn to_image(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.rgba.clone())
    }
    /// Save through `image`; the format follows the file extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let img = self
            .to_image()
            .context("framebuffer size does not match its dimensions")?;
        img.save(path)
            .with_context(|| format!("failed to save frame to {}", path.display()))?;
        Ok(())
    }
}
