use std::path::{Path, PathBuf};

use crate::error::CanvasResult;

/// The finished sketch handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SketchImage {
    /// PNG-encoded pixels
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// Callbacks the mounting shell provides to receive the session result.
pub trait SketchHost {
    /// Called once with the exported image when the user finishes.
    fn on_complete(&mut self, sketch: SketchImage);

    /// Called once when the user abandons the session.
    fn on_cancel(&mut self);
}

/// Host that stores finished sketches in a directory.
#[derive(Debug)]
pub struct DiskSketchHost {
    output_dir: PathBuf,
    last_saved: Option<PathBuf>,
    /// Sketch whose write failed, kept so the user can retry
    unsaved: Option<SketchImage>,
    last_error: Option<String>,
    cancelled: bool,
}

impl DiskSketchHost {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            last_saved: None,
            unsaved: None,
            last_error: None,
            cancelled: false,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the last successfully written sketch
    pub fn last_saved(&self) -> Option<&Path> {
        self.last_saved.as_deref()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Message of the last failed write, cleared once a save succeeds
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn has_unsaved(&self) -> bool {
        self.unsaved.is_some()
    }

    /// The session produced a result that does not need the window any more.
    pub fn is_settled(&self) -> bool {
        self.cancelled || (self.last_saved.is_some() && self.unsaved.is_none())
    }

    /// Try writing a sketch whose earlier save failed.
    pub fn retry_save(&mut self) {
        if let Some(sketch) = self.unsaved.take() {
            self.store(sketch);
        }
    }

    fn save(&self, sketch: &SketchImage) -> CanvasResult<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(&sketch.filename);
        std::fs::write(&path, &sketch.bytes)?;
        Ok(path)
    }

    fn store(&mut self, sketch: SketchImage) {
        match self.save(&sketch) {
            Ok(path) => {
                log::info!("Saved sketch ({} bytes) to {}", sketch.bytes.len(), path.display());
                self.last_saved = Some(path);
                self.last_error = None;
            }
            Err(err) => {
                log::error!("{}", err);
                self.last_error = Some(err.to_string());
                self.unsaved = Some(sketch);
            }
        }
    }
}

impl SketchHost for DiskSketchHost {
    fn on_complete(&mut self, sketch: SketchImage) {
        self.store(sketch);
    }

    fn on_cancel(&mut self) {
        log::info!("Sketch session cancelled");
        self.cancelled = true;
    }
}
