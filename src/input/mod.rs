use egui::{Pos2, pos2};

mod router;

pub use router::{EventRouter, PointerHandler};

/// Pointer input delivered to the canvas, in layout (point) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed or touch started
    PointerDown { position: Pos2 },
    /// Pointer moved
    PointerMove { position: Pos2 },
    /// Primary button released or touch ended
    PointerUp { position: Pos2 },
    /// Pointer left the canvas surface
    PointerLeave { last_known_position: Pos2 },
}

/// Key for the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEventKind {
    PointerDown,
    PointerMove,
    PointerUp,
    PointerLeave,
}

impl InputEvent {
    pub fn kind(&self) -> InputEventKind {
        match self {
            InputEvent::PointerDown { .. } => InputEventKind::PointerDown,
            InputEvent::PointerMove { .. } => InputEventKind::PointerMove,
            InputEvent::PointerUp { .. } => InputEventKind::PointerUp,
            InputEvent::PointerLeave { .. } => InputEventKind::PointerLeave,
        }
    }

    pub fn position(&self) -> Pos2 {
        match self {
            InputEvent::PointerDown { position }
            | InputEvent::PointerMove { position }
            | InputEvent::PointerUp { position } => *position,
            InputEvent::PointerLeave { last_known_position } => *last_known_position,
        }
    }
}

/// Maps layout coordinates onto buffer pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    /// Top-left corner of the canvas on screen
    pub origin: Pos2,
    /// Physical pixels per layout point
    pub pixels_per_point: f32,
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self {
            origin: Pos2::ZERO,
            pixels_per_point: 1.0,
        }
    }
}

impl CanvasTransform {
    pub fn new(origin: Pos2, pixels_per_point: f32) -> Self {
        Self {
            origin,
            pixels_per_point,
        }
    }

    /// `(position - origin) * pixels_per_point`
    pub fn to_buffer(&self, position: Pos2) -> Pos2 {
        let local = position - self.origin;
        pos2(
            local.x * self.pixels_per_point,
            local.y * self.pixels_per_point,
        )
    }
}
