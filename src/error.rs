use thiserror::Error;

/// Errors surfaced by the canvas engine and its host shell.
///
/// Drawing itself never fails: bad pointer geometry, out-of-bounds seeds and
/// zero-sized surfaces degrade to no-ops. These variants cover the few
/// operations that touch encoding, user-typed values or the filesystem.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Failed to encode sketch: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Canvas has no pixels to export")]
    EmptyCanvas,

    #[error("Invalid hex color: {0}")]
    InvalidColor(String),

    #[error("Sketch session already finished")]
    SessionFinished,

    #[error("Failed to save sketch: {0}")]
    Save(#[from] std::io::Error),

    #[error("Invalid canvas config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for canvas operations
pub type CanvasResult<T> = Result<T, CanvasError>;
