use std::path::PathBuf;

use crate::canvas::DrawingCanvas;
use crate::command::{CanvasCommand, CommandQueue};
use crate::config::CanvasConfig;
use crate::host::{DiskSketchHost, SketchHost};
use crate::panels::{central_panel, tools_panel};
use crate::tools::ToolSettings;

const SETTINGS_KEY: &str = "sketch_canvas_tool_settings";

/// Desktop shell that mounts the canvas engine and saves finished sketches.
pub struct SketchApp {
    pub(crate) canvas: DrawingCanvas,
    pub(crate) host: DiskSketchHost,
    pub(crate) commands: CommandQueue,
    /// Texture showing the buffer, re-uploaded when the canvas revision moves
    pub(crate) texture: Option<egui::TextureHandle>,
    pub(crate) uploaded_revision: Option<u64>,
    /// True between a press on the canvas and its release or leave
    pub(crate) pointer_captured: bool,
    pub(crate) hex_input: String,
    pub(crate) status: Option<String>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: CanvasConfig, output_dir: PathBuf) -> Self {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<ToolSettings>(storage, SETTINGS_KEY))
            .unwrap_or_default();
        log::info!(
            "Restored tool settings: {} size {}",
            settings.tool.name(),
            settings.brush_size()
        );
        Self::with_parts(DrawingCanvas::with_settings(config, settings), output_dir)
    }

    pub fn with_parts(canvas: DrawingCanvas, output_dir: PathBuf) -> Self {
        let hex_input = crate::color::to_hex(canvas.settings().color);
        Self {
            canvas,
            host: DiskSketchHost::new(output_dir),
            commands: CommandQueue::new(),
            texture: None,
            uploaded_revision: None,
            pointer_captured: false,
            hex_input,
            status: None,
        }
    }

    pub fn canvas(&self) -> &DrawingCanvas {
        &self.canvas
    }

    fn queue_shortcuts(&mut self, ctx: &egui::Context) {
        use egui::{Key, Modifiers};

        ctx.input_mut(|i| {
            // Shift+Z first: the plain shortcut also matches with shift held.
            if i.consume_key(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z)
                || i.consume_key(Modifiers::COMMAND, Key::Y)
            {
                self.commands.push(CanvasCommand::Redo);
            } else if i.consume_key(Modifiers::COMMAND, Key::Z) {
                self.commands.push(CanvasCommand::Undo);
            }
        });
    }

    fn run_commands(&mut self) {
        let pending: Vec<_> = self.commands.drain().collect();
        for command in pending {
            // After a failed write the session is over: Done retries the
            // write and Cancel drops the sketch.
            if self.host.has_unsaved() {
                match command {
                    CanvasCommand::Complete => {
                        self.host.retry_save();
                        continue;
                    }
                    CanvasCommand::Cancel => {
                        self.host.on_cancel();
                        continue;
                    }
                    _ => {}
                }
            }
            if let Err(err) = self.canvas.apply(command, &mut self.host) {
                log::warn!("{}", err);
                self.status = Some(err.to_string());
            }
        }

        if let Some(err) = self.host.last_error() {
            self.status = Some(format!("Sketch not saved: {}. Press Done to retry.", err));
        }
    }

    /// Close once the sketch is on disk or the session was cancelled.
    fn should_close(&self) -> bool {
        self.canvas.is_finished() && self.host.is_settled()
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, SETTINGS_KEY, self.canvas.settings());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.queue_shortcuts(ctx);

        // Side panel first so the central panel gets the remaining space.
        tools_panel(self, ctx);
        central_panel(self, ctx);

        self.run_commands();

        if self.should_close() {
            match self.host.last_saved() {
                Some(path) => log::info!("Closing after saving {}", path.display()),
                None => log::info!("Closing after cancel"),
            }
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
