use egui::Pos2;
use std::collections::HashMap;

use super::InputEventKind;
use crate::canvas::DrawingCanvas;

/// Handler invoked with the pointer position in buffer coordinates.
pub type PointerHandler = fn(&mut DrawingCanvas, Pos2);

/// Dispatch table from input event kind to canvas handler.
#[derive(Debug, Clone)]
pub struct EventRouter {
    handlers: HashMap<InputEventKind, PointerHandler>,
}

impl Default for EventRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl EventRouter {
    /// The standard table: leaving the surface finishes a drag like a release.
    pub fn new() -> Self {
        let mut handlers: HashMap<InputEventKind, PointerHandler> = HashMap::new();
        handlers.insert(InputEventKind::PointerDown, DrawingCanvas::on_pointer_down);
        handlers.insert(InputEventKind::PointerMove, DrawingCanvas::on_pointer_move);
        handlers.insert(InputEventKind::PointerUp, DrawingCanvas::on_pointer_up);
        handlers.insert(InputEventKind::PointerLeave, DrawingCanvas::on_pointer_leave);
        Self { handlers }
    }

    pub fn handler(&self, kind: InputEventKind) -> Option<PointerHandler> {
        self.handlers.get(&kind).copied()
    }

    /// Replace the handler for one event kind.
    pub fn set_handler(&mut self, kind: InputEventKind, handler: PointerHandler) {
        self.handlers.insert(kind, handler);
    }

    /// Stop reacting to one event kind.
    pub fn remove_handler(&mut self, kind: InputEventKind) -> Option<PointerHandler> {
        self.handlers.remove(&kind)
    }
}
