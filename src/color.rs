use egui::Color32;
use image::Rgba;

use crate::error::{CanvasError, CanvasResult};

/// The fixed swatches offered next to the custom color entry.
pub const PALETTE: [(&str, Color32); 10] = [
    ("Black", Color32::from_rgb(0, 0, 0)),
    ("White", Color32::from_rgb(255, 255, 255)),
    ("Red", Color32::from_rgb(239, 68, 68)),
    ("Orange", Color32::from_rgb(249, 115, 22)),
    ("Yellow", Color32::from_rgb(234, 179, 8)),
    ("Green", Color32::from_rgb(34, 197, 94)),
    ("Blue", Color32::from_rgb(59, 130, 246)),
    ("Purple", Color32::from_rgb(168, 85, 247)),
    ("Brown", Color32::from_rgb(146, 64, 14)),
    ("Gray", Color32::from_rgb(107, 114, 128)),
];

/// Parse `#rgb` or `#rrggbb` (leading `#` optional, case-insensitive).
pub fn parse_hex_color(text: &str) -> CanvasResult<Color32> {
    let trimmed = text.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let invalid = || CanvasError::InvalidColor(text.to_owned());

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

    match hex.len() {
        3 => {
            // Each digit is doubled: "f80" means "ff8800".
            let r = channel(&hex[0..1])? * 17;
            let g = channel(&hex[1..2])? * 17;
            let b = channel(&hex[2..3])? * 17;
            Ok(Color32::from_rgb(r, g, b))
        }
        6 => Ok(Color32::from_rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => Err(invalid()),
    }
}

/// Format a color as `#rrggbb`.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Opaque buffer pixel for a tool color.
pub fn to_pixel(color: Color32) -> Rgba<u8> {
    Rgba([color.r(), color.g(), color.b(), 255])
}
