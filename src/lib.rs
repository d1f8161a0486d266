#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod buffer;
pub mod canvas;
pub mod color;
pub mod command;
pub mod config;
pub mod error;
pub mod fill;
pub mod host;
pub mod input;
pub mod panels;
pub mod raster;
pub mod resize;
pub mod state;
pub mod tools;

pub use app::SketchApp;
pub use canvas::DrawingCanvas;
pub use command::{CanvasCommand, CommandQueue, SnapshotHistory};
pub use config::CanvasConfig;
pub use error::{CanvasError, CanvasResult};
pub use fill::{FillOutcome, FillSkip};
pub use host::{DiskSketchHost, SketchHost, SketchImage};
pub use input::{CanvasTransform, EventRouter, InputEvent, InputEventKind};
pub use raster::{Paint, ShapeKind};
pub use resize::{ResizeAction, SurfaceLayout};
pub use state::EditorState;
pub use tools::{ToolSettings, ToolType};
