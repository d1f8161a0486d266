mod history;

use egui::Color32;

use crate::tools::ToolType;

pub use history::SnapshotHistory;

/// Actions UI regions can request from the canvas engine.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCommand {
    Undo,
    Redo,
    Clear,
    /// Export the sketch and end the session
    Complete,
    /// End the session without output
    Cancel,
    SelectTool(ToolType),
    SetColor(Color32),
    SetBrushSize(u32),
}

/// Handle passed by `&mut` to panels so they can request engine actions
/// without reaching into shared global state. The app drains it once per
/// frame.
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: Vec<CanvasCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: CanvasCommand) {
        log::debug!("Command queued: {:?}", command);
        self.pending.push(command);
    }

    /// Take all pending commands in submission order.
    pub fn drain(&mut self) -> impl Iterator<Item = CanvasCommand> + '_ {
        self.pending.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
