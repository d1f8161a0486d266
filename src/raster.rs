//! Hard-edged rasterization of strokes and outlined shapes.
//!
//! No anti-aliasing: every pixel is either fully painted or untouched, which
//! keeps ink lines crisp for the flood fill boundary test.

use egui::{Pos2, Vec2, pos2};
use image::{Rgba, RgbaImage};

use crate::buffer::TRANSPARENT;

/// How covered pixels are changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Normal paint with an opaque color.
    Color(Rgba<u8>),
    /// Clear to full transparency (eraser).
    Clear,
}

impl Paint {
    fn pixel(self) -> Rgba<u8> {
        match self {
            Paint::Color(color) => color,
            Paint::Clear => TRANSPARENT,
        }
    }
}

/// Outlined shapes drawn by dragging from a start to an end point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Ellipse,
    Triangle,
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    let t = if len_sq == 0.0 {
        0.0
    } else {
        ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0)
    };
    (p - (a + ab * t)).length()
}

/// Rasterize a thick segment with round caps.
///
/// A pixel is covered when its center lies within `width / 2` of the
/// segment. Zero-length segments draw nothing.
pub fn stroke_segment(buffer: &mut RgbaImage, a: Pos2, b: Pos2, width: f32, paint: Paint) {
    if a == b || buffer.width() == 0 || buffer.height() == 0 {
        return;
    }
    let radius = (width * 0.5).max(0.5);

    let min_x = (a.x.min(b.x) - radius).floor().max(0.0);
    let min_y = (a.y.min(b.y) - radius).floor().max(0.0);
    let max_x = (a.x.max(b.x) + radius).ceil().min(buffer.width() as f32 - 1.0);
    let max_y = (a.y.max(b.y) + radius).ceil().min(buffer.height() as f32 - 1.0);
    if max_x < min_x || max_y < min_y {
        return;
    }

    let color = paint.pixel();
    for y in min_y as u32..=max_y as u32 {
        for x in min_x as u32..=max_x as u32 {
            let center = pos2(x as f32 + 0.5, y as f32 + 0.5);
            if distance_to_segment(center, a, b) <= radius {
                buffer.put_pixel(x, y, color);
            }
        }
    }
}

/// Stroke a closed outline through `points`.
fn stroke_closed(buffer: &mut RgbaImage, points: &[Pos2], width: f32, paint: Paint) {
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        stroke_segment(buffer, a, b, width, paint);
    }
}

fn ellipse_outline(center: Pos2, radii: Vec2) -> Vec<Pos2> {
    // Ramanujan's perimeter approximation, one vertex every two pixels.
    let (a, b) = (radii.x, radii.y);
    let h = ((a - b) / (a + b)).powi(2);
    let perimeter = std::f32::consts::PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()));
    let segments = ((perimeter / 2.0).ceil() as usize).clamp(16, 720);

    (0..segments)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / segments as f32;
            pos2(center.x + a * angle.cos(), center.y + b * angle.sin())
        })
        .collect()
}

/// Draw an outlined shape spanned by `start` and `end`.
///
/// Boxed shapes use the bounding box of the two points, whichever way the
/// drag went. The triangle's apex sits at the middle of the top edge and its
/// base runs along the bottom edge. Degenerate geometry (zero-length line,
/// zero-area box) draws nothing.
pub fn draw_shape(
    buffer: &mut RgbaImage,
    kind: ShapeKind,
    start: Pos2,
    end: Pos2,
    width: f32,
    paint: Paint,
) {
    let min = start.min(end);
    let max = start.max(end);
    let has_area = max.x > min.x && max.y > min.y;

    match kind {
        ShapeKind::Line => stroke_segment(buffer, start, end, width, paint),
        ShapeKind::Rectangle if has_area => {
            let corners = [min, pos2(max.x, min.y), max, pos2(min.x, max.y)];
            stroke_closed(buffer, &corners, width, paint);
        }
        ShapeKind::Ellipse if has_area => {
            let center = min + (max - min) * 0.5;
            let outline = ellipse_outline(center, (max - min) * 0.5);
            stroke_closed(buffer, &outline, width, paint);
        }
        ShapeKind::Triangle if has_area => {
            let apex = pos2((min.x + max.x) * 0.5, min.y);
            let corners = [apex, pos2(min.x, max.y), max];
            stroke_closed(buffer, &corners, width, paint);
        }
        _ => log::debug!("Skipping degenerate {:?} from {:?} to {:?}", kind, start, end),
    }
}
