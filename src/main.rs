#![warn(clippy::all, rust_2018_idioms)]

use std::path::PathBuf;

use sketch_canvas::{CanvasConfig, SketchApp};

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = CanvasConfig::from_env();
    let output_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    log::info!("Sketches will be saved to {}", output_dir.display());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sketch Canvas")
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };
    eframe::run_native(
        "sketch_canvas",
        native_options,
        Box::new(move |cc| Ok(Box::new(SketchApp::new(cc, config, output_dir)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
