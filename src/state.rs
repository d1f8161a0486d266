use egui::Pos2;
use image::RgbaImage;

use crate::raster::ShapeKind;

/// Pointer-driven state of the canvas. Fill has no drag phase and never
/// leaves `Idle`.
#[derive(Debug, Default)]
pub enum EditorState {
    #[default]
    Idle,
    /// Pencil or eraser is being dragged; segments land on the buffer live.
    Stroking {
        /// Last rasterized point, in buffer coordinates
        last: Pos2,
    },
    /// A shape tool is being dragged; the buffer shows a preview.
    Shaping {
        shape: ShapeKind,
        start: Pos2,
        /// Buffer contents before the drag started
        pre_shape: RgbaImage,
    },
}

impl EditorState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Stroking { .. } => "stroking",
            Self::Shaping { .. } => "shaping",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
