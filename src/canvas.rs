//! The drawing canvas engine.
//!
//! [`DrawingCanvas`] owns the raster buffer, the snapshot history and the
//! pointer state machine. Hosts feed it layout observations and pointer
//! events and get a PNG back through [`SketchHost`] when the user finishes.
//!
//! Between drags the last history entry always equals the buffer. During a
//! drag the buffer may run ahead of history (live strokes, shape previews)
//! and is reconciled when the drag ends.

use egui::{Color32, Pos2};
use image::{Rgba, RgbaImage};

use crate::buffer;
use crate::command::{CanvasCommand, SnapshotHistory};
use crate::config::CanvasConfig;
use crate::error::{CanvasError, CanvasResult};
use crate::fill::{self, FillOutcome};
use crate::host::{SketchHost, SketchImage};
use crate::input::{CanvasTransform, EventRouter, InputEvent};
use crate::raster;
use crate::resize::{self, ResizeAction, SurfaceLayout};
use crate::state::EditorState;
use crate::tools::{ToolSettings, ToolType};

pub struct DrawingCanvas {
    config: CanvasConfig,
    buffer: RgbaImage,
    history: SnapshotHistory,
    settings: ToolSettings,
    state: EditorState,
    transform: CanvasTransform,
    router: EventRouter,
    /// Bumped on every buffer change so hosts know when to re-upload.
    revision: u64,
    finished: bool,
}

impl std::fmt::Debug for DrawingCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawingCanvas")
            .field("size", &self.buffer.dimensions())
            .field("tool", &self.settings.tool)
            .field("state", &self.state.name())
            .field("history", &self.history.len())
            .field("redo", &self.history.redo_len())
            .field("finished", &self.finished)
            .finish()
    }
}

impl Default for DrawingCanvas {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl DrawingCanvas {
    /// Mount a canvas. The buffer stays empty until the first non-zero
    /// layout is observed.
    pub fn new(config: CanvasConfig) -> Self {
        Self::with_settings(config, ToolSettings::default())
    }

    pub fn with_settings(config: CanvasConfig, settings: ToolSettings) -> Self {
        let config = config.sanitized();
        Self {
            history: SnapshotHistory::new(config.history_limit),
            config,
            buffer: RgbaImage::new(0, 0),
            settings: settings.sanitized(),
            state: EditorState::Idle,
            transform: CanvasTransform::default(),
            router: EventRouter::new(),
            revision: 0,
            finished: false,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn router_mut(&mut self) -> &mut EventRouter {
        &mut self.router
    }

    // --- Tool settings ---

    /// Switch tools. A drag in progress is committed first.
    pub fn select_tool(&mut self, tool: ToolType) {
        if self.settings.tool == tool {
            return;
        }
        self.finish_drag();
        log::debug!("Tool changed: {} -> {}", self.settings.tool.name(), tool.name());
        self.settings.tool = tool;
    }

    pub fn set_color(&mut self, color: Color32) {
        self.settings.color = color;
    }

    pub fn set_brush_size(&mut self, size: u32) {
        self.settings.set_brush_size(size);
    }

    // --- Layout ---

    /// Deliver an observed element layout.
    ///
    /// The coordinate transform always follows the layout. The buffer is only
    /// reallocated when its physical pixel size actually changes.
    pub fn observe_layout(&mut self, layout: SurfaceLayout) -> ResizeAction {
        self.transform = CanvasTransform::new(layout.origin, layout.pixels_per_point);

        let required = layout.physical_size();
        let action = resize::reconcile(self.buffer.dimensions(), required, self.history.is_empty());
        match action {
            ResizeAction::Keep => {}
            ResizeAction::Defer => {
                log::debug!("Deferring resize to zero-sized surface {:?}", required);
            }
            ResizeAction::Reset => {
                self.finish_drag();
                self.buffer = buffer::blank_buffer(required.0, required.1);
                self.history.reset(self.buffer.clone());
                self.touch();
                log::info!("Canvas attached at {}x{}", required.0, required.1);
            }
            ResizeAction::Repaint => {
                self.finish_drag();
                let mut resized = buffer::blank_buffer(required.0, required.1);
                if let Some(latest) = self.history.latest() {
                    buffer::repaint(&mut resized, latest);
                }
                log::info!(
                    "Canvas resized from {:?} to {}x{}",
                    self.buffer.dimensions(),
                    required.0,
                    required.1
                );
                self.buffer = resized;
                self.touch();
            }
        }
        action
    }

    // --- Pointer input ---

    /// Map a layout-space event into buffer space and dispatch it.
    pub fn handle_input(&mut self, event: InputEvent) {
        if self.finished || self.is_unsized() {
            log::debug!("Ignoring {:?} on inactive canvas", event.kind());
            return;
        }
        let Some(handler) = self.router.handler(event.kind()) else {
            return;
        };
        let position = self.transform.to_buffer(event.position());
        handler(self, position);
    }

    /// Pointer pressed at `pos` (buffer coordinates).
    pub fn on_pointer_down(&mut self, pos: Pos2) {
        if !self.state.is_idle() {
            // Release was never delivered; keep what was drawn.
            self.finish_drag();
        }

        let tool = self.settings.tool;
        if tool.is_freehand() {
            self.state = EditorState::Stroking { last: pos };
        } else if let Some(shape) = tool.shape() {
            self.state = EditorState::Shaping {
                shape,
                start: pos,
                pre_shape: self.buffer.clone(),
            };
        } else {
            self.fill_at(pos);
        }
        log::debug!("{} down at {:?}, state {}", tool.name(), pos, self.state.name());
    }

    /// Pointer moved to `pos` (buffer coordinates).
    pub fn on_pointer_move(&mut self, pos: Pos2) {
        let width = self.settings.line_width(&self.config);
        let paint = self.settings.paint();

        match &mut self.state {
            EditorState::Idle => return,
            EditorState::Stroking { last } => {
                raster::stroke_segment(&mut self.buffer, *last, pos, width, paint);
                *last = pos;
            }
            EditorState::Shaping {
                shape,
                start,
                pre_shape,
            } => {
                // Start from the pre-drag image every time so earlier
                // previews leave no trace.
                buffer::repaint(&mut self.buffer, pre_shape);
                raster::draw_shape(&mut self.buffer, *shape, *start, pos, width, paint);
            }
        }
        self.touch();
    }

    /// Pointer released at `pos` (buffer coordinates).
    pub fn on_pointer_up(&mut self, pos: Pos2) {
        if matches!(self.state, EditorState::Shaping { .. }) {
            self.on_pointer_move(pos);
        }
        self.finish_drag();
    }

    /// Pointer left the surface. Commits whatever is currently shown.
    pub fn on_pointer_leave(&mut self, _pos: Pos2) {
        self.finish_drag();
    }

    fn fill_at(&mut self, pos: Pos2) {
        if pos.x < 0.0 || pos.y < 0.0 || !pos.x.is_finite() || !pos.y.is_finite() {
            log::debug!("Fill seed {:?} outside canvas", pos);
            return;
        }
        let seed = (pos.x.floor() as u32, pos.y.floor() as u32);
        let color = crate::color::to_pixel(self.settings.color);

        match fill::flood_fill(&mut self.buffer, seed, color, self.config.boundary_threshold) {
            FillOutcome::Filled { .. } => {
                self.touch();
                self.commit();
            }
            FillOutcome::Skipped(reason) => {
                log::debug!("Fill at {:?} skipped: {:?}", seed, reason);
            }
        }
    }

    /// End an active stroke or shape drag and record the result.
    fn finish_drag(&mut self) {
        if std::mem::take(&mut self.state).is_idle() {
            return;
        }
        self.commit();
    }

    fn commit(&mut self) {
        self.history.record(self.buffer.clone());
        log::debug!("Committed history entry {}", self.history.len());
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    // --- History ---

    /// Step back one committed operation. Returns false at the blank base.
    pub fn undo(&mut self) -> bool {
        self.finish_drag();
        match self.history.undo() {
            Some(snapshot) => {
                buffer::repaint(&mut self.buffer, snapshot);
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Re-apply the last undone operation. Returns false if there is none.
    pub fn redo(&mut self) -> bool {
        self.finish_drag();
        match self.history.redo() {
            Some(snapshot) => {
                buffer::repaint(&mut self.buffer, snapshot);
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Wipe the canvas to white and restart history from it.
    pub fn clear(&mut self) {
        if self.is_unsized() {
            return;
        }
        self.state = EditorState::Idle;
        let (width, height) = self.buffer.dimensions();
        self.buffer = buffer::blank_buffer(width, height);
        self.history.reset(self.buffer.clone());
        self.touch();
        log::info!("Canvas cleared");
    }

    // --- Session ---

    /// Export the sketch as PNG and hand it to the host. Ends the session.
    pub fn complete(&mut self, host: &mut dyn SketchHost) -> CanvasResult<()> {
        if self.finished {
            return Err(CanvasError::SessionFinished);
        }
        self.finish_drag();
        let bytes = buffer::encode_png(&self.buffer)?;
        self.finished = true;
        log::info!("Sketch completed ({} bytes)", bytes.len());
        host.on_complete(SketchImage {
            bytes,
            filename: self.config.export_filename.clone(),
        });
        Ok(())
    }

    /// Abandon the session without output.
    pub fn cancel(&mut self, host: &mut dyn SketchHost) -> CanvasResult<()> {
        if self.finished {
            return Err(CanvasError::SessionFinished);
        }
        self.state = EditorState::Idle;
        self.finished = true;
        host.on_cancel();
        Ok(())
    }

    /// Run a command requested by the UI.
    pub fn apply(&mut self, command: CanvasCommand, host: &mut dyn SketchHost) -> CanvasResult<()> {
        match command {
            CanvasCommand::Undo => {
                self.undo();
            }
            CanvasCommand::Redo => {
                self.redo();
            }
            CanvasCommand::Clear => self.clear(),
            CanvasCommand::Complete => self.complete(host)?,
            CanvasCommand::Cancel => self.cancel(host)?,
            CanvasCommand::SelectTool(tool) => self.select_tool(tool),
            CanvasCommand::SetColor(color) => self.set_color(color),
            CanvasCommand::SetBrushSize(size) => self.set_brush_size(size),
        }
        Ok(())
    }

    // --- Read-only inspection ---

    pub fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.buffer.get_pixel_checked(x, y).copied()
    }

    /// A copy of the current pixels.
    pub fn snapshot(&self) -> RgbaImage {
        self.buffer.clone()
    }

    pub fn to_color_image(&self) -> egui::ColorImage {
        buffer::to_color_image(&self.buffer)
    }

    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_len()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn is_unsized(&self) -> bool {
        self.buffer.width() == 0 || self.buffer.height() == 0
    }
}
