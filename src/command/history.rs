use image::RgbaImage;

/// Linear undo/redo history of full buffer snapshots.
///
/// The first entry is the blank canvas and is never undone. Recording a new
/// snapshot discards everything on the redo stack.
#[derive(Debug, Default)]
pub struct SnapshotHistory {
    /// Committed states, oldest first. The last one matches the canvas.
    entries: Vec<RgbaImage>,
    /// Undone states; the top of the stack is the next redo.
    redo_stack: Vec<RgbaImage>,
    /// Maximum number of entries, blank base included
    limit: Option<usize>,
}

impl SnapshotHistory {
    /// Creates an empty history
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            entries: Vec::new(),
            redo_stack: Vec::new(),
            limit: limit.map(|l| l.max(2)),
        }
    }

    /// Drop everything and start over from `blank`.
    pub fn reset(&mut self, blank: RgbaImage) {
        self.entries.clear();
        self.redo_stack.clear();
        self.entries.push(blank);
    }

    /// Append a committed state and invalidate redo.
    pub fn record(&mut self, snapshot: RgbaImage) {
        self.entries.push(snapshot);
        self.redo_stack.clear();

        if let Some(limit) = self.limit {
            while self.entries.len() > limit {
                // Keep the blank base, drop the oldest edit.
                self.entries.remove(1);
            }
        }
    }

    /// Step back one state. Returns the state to show, or `None` when only
    /// the blank base remains.
    pub fn undo(&mut self) -> Option<&RgbaImage> {
        if !self.can_undo() {
            return None;
        }
        let undone = self.entries.pop()?;
        self.redo_stack.push(undone);
        self.entries.last()
    }

    /// Re-apply the most recently undone state.
    pub fn redo(&mut self) -> Option<&RgbaImage> {
        let redone = self.redo_stack.pop()?;
        self.entries.push(redone);
        self.entries.last()
    }

    pub fn latest(&self) -> Option<&RgbaImage> {
        self.entries.last()
    }

    pub fn can_undo(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of committed entries, blank base included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }
}
