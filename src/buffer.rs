//! Raster buffer helpers shared by the engine, history and export path.

use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

use crate::error::{CanvasError, CanvasResult};

/// Opaque white, the color of a freshly cleared canvas.
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// What the eraser leaves behind.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Allocate a white buffer of the given physical size.
pub fn blank_buffer(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, WHITE)
}

/// Make `target` show `snapshot`.
///
/// Same-sized snapshots are copied wholesale. Otherwise `target` keeps its
/// size, is filled white and receives the overlapping top-left region of
/// `snapshot`; pixels are replaced, not blended.
pub fn repaint(target: &mut RgbaImage, snapshot: &RgbaImage) {
    if target.dimensions() == snapshot.dimensions() {
        target.clone_from(snapshot);
        return;
    }

    for pixel in target.pixels_mut() {
        *pixel = WHITE;
    }

    let width = target.width().min(snapshot.width());
    let height = target.height().min(snapshot.height());
    for y in 0..height {
        for x in 0..width {
            target.put_pixel(x, y, *snapshot.get_pixel(x, y));
        }
    }
}

/// Encode the buffer as PNG.
pub fn encode_png(buffer: &RgbaImage) -> CanvasResult<Vec<u8>> {
    if buffer.width() == 0 || buffer.height() == 0 {
        return Err(CanvasError::EmptyCanvas);
    }
    let mut cursor = Cursor::new(Vec::new());
    buffer.write_to(&mut cursor, ImageFormat::Png)?;
    Ok(cursor.into_inner())
}

/// Convert the buffer into an egui image for display.
pub fn to_color_image(buffer: &RgbaImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [buffer.width() as usize, buffer.height() as usize],
        buffer.as_raw(),
    )
}
