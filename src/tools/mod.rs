use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::config::CanvasConfig;
use crate::raster::{Paint, ShapeKind};

pub const MIN_BRUSH_SIZE: u32 = 1;
pub const MAX_BRUSH_SIZE: u32 = 20;

/// The drawing tools. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolType {
    #[default]
    Pencil,
    Eraser,
    Line,
    Rectangle,
    Ellipse,
    Triangle,
    Fill,
}

impl ToolType {
    pub const ALL: [ToolType; 7] = [
        ToolType::Pencil,
        ToolType::Eraser,
        ToolType::Line,
        ToolType::Rectangle,
        ToolType::Ellipse,
        ToolType::Triangle,
        ToolType::Fill,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ToolType::Pencil => "Pencil",
            ToolType::Eraser => "Eraser",
            ToolType::Line => "Line",
            ToolType::Rectangle => "Rectangle",
            ToolType::Ellipse => "Ellipse",
            ToolType::Triangle => "Triangle",
            ToolType::Fill => "Fill",
        }
    }

    /// Button label for the tools panel
    pub fn label(&self) -> &'static str {
        match self {
            ToolType::Pencil => "✏ Pencil",
            ToolType::Eraser => "⌫ Eraser",
            ToolType::Line => "╱ Line",
            ToolType::Rectangle => "◻ Rectangle",
            ToolType::Ellipse => "◯ Ellipse",
            ToolType::Triangle => "△ Triangle",
            ToolType::Fill => "🪣 Fill",
        }
    }

    /// Shape drawn by drag-to-size tools
    pub fn shape(&self) -> Option<ShapeKind> {
        match self {
            ToolType::Line => Some(ShapeKind::Line),
            ToolType::Rectangle => Some(ShapeKind::Rectangle),
            ToolType::Ellipse => Some(ShapeKind::Ellipse),
            ToolType::Triangle => Some(ShapeKind::Triangle),
            _ => None,
        }
    }

    /// Pencil and eraser paint continuously while dragging.
    pub fn is_freehand(&self) -> bool {
        matches!(self, ToolType::Pencil | ToolType::Eraser)
    }
}

/// Brush configuration shared by all tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub tool: ToolType,
    brush_size: u32,
    pub color: Color32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: ToolType::Pencil,
            brush_size: 3,
            color: Color32::BLACK,
        }
    }
}

impl ToolSettings {
    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    /// Set the brush diameter, clamped to the supported range.
    pub fn set_brush_size(&mut self, size: u32) {
        let clamped = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
        if clamped != size {
            log::warn!("Brush size {} out of range, using {}", size, clamped);
        }
        self.brush_size = clamped;
    }

    /// Settings restored from storage may carry an out-of-range size.
    pub fn sanitized(mut self) -> Self {
        self.set_brush_size(self.brush_size);
        self
    }

    /// Line width in buffer pixels. The eraser is wider than the pencil.
    pub fn line_width(&self, config: &CanvasConfig) -> f32 {
        let size = self.brush_size as f32;
        match self.tool {
            ToolType::Eraser => size * config.eraser_scale,
            _ => size,
        }
    }

    /// Paint mode for the active tool. The eraser ignores the color.
    pub fn paint(&self) -> Paint {
        match self.tool {
            ToolType::Eraser => Paint::Clear,
            _ => Paint::Color(crate::color::to_pixel(self.color)),
        }
    }
}
