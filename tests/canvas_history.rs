use egui::{Color32, Pos2, pos2, vec2};
use image::{Rgba, RgbaImage};
use sketch_canvas::{DrawingCanvas, InputEvent, SurfaceLayout, ToolType};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

// Helper to create a mounted 50x40 canvas at the origin
fn create_test_canvas() -> DrawingCanvas {
    let mut canvas = DrawingCanvas::default();
    canvas.observe_layout(SurfaceLayout::new(Pos2::ZERO, vec2(50.0, 40.0), 1.0));
    canvas
}

fn drag(canvas: &mut DrawingCanvas, from: Pos2, to: Pos2) {
    canvas.handle_input(InputEvent::PointerDown { position: from });
    canvas.handle_input(InputEvent::PointerMove {
        position: from + (to - from) * 0.5,
    });
    canvas.handle_input(InputEvent::PointerMove { position: to });
    canvas.handle_input(InputEvent::PointerUp { position: to });
}

fn click(canvas: &mut DrawingCanvas, at: Pos2) {
    canvas.handle_input(InputEvent::PointerDown { position: at });
    canvas.handle_input(InputEvent::PointerUp { position: at });
}

/// Pencil stroke, rectangle, then a fill. Returns the state after each step,
/// starting with the blank canvas.
fn draw_three_operations(canvas: &mut DrawingCanvas) -> Vec<RgbaImage> {
    let mut states = vec![canvas.snapshot()];

    drag(canvas, pos2(5.0, 5.0), pos2(20.0, 5.0));
    states.push(canvas.snapshot());

    canvas.select_tool(ToolType::Rectangle);
    drag(canvas, pos2(25.0, 10.0), pos2(45.0, 30.0));
    states.push(canvas.snapshot());

    canvas.select_tool(ToolType::Fill);
    canvas.set_color(Color32::from_rgb(255, 0, 0));
    click(canvas, pos2(2.0, 35.0));
    states.push(canvas.snapshot());

    states
}

#[test]
fn test_each_operation_adds_one_entry() {
    let mut canvas = create_test_canvas();
    let states = draw_three_operations(&mut canvas);

    assert_eq!(canvas.history_depth(), 4);
    assert_eq!(canvas.redo_depth(), 0);
    // Every step visibly changed the canvas.
    for pair in states.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn test_undo_redo_inverse() {
    let mut canvas = create_test_canvas();
    let states = draw_three_operations(&mut canvas);

    for expected in states.iter().rev().skip(1) {
        assert!(canvas.undo());
        assert_eq!(&canvas.snapshot(), expected);
    }
    assert!(!canvas.undo());
    assert_eq!(canvas.redo_depth(), 3);

    for expected in states.iter().skip(1) {
        assert!(canvas.redo());
        assert_eq!(&canvas.snapshot(), expected);
    }
    assert!(!canvas.redo());
    assert_eq!(canvas.snapshot(), states[3]);
}

#[test]
fn test_undo_floor() {
    let mut canvas = create_test_canvas();
    let before = canvas.snapshot();

    assert!(!canvas.undo());
    assert!(!canvas.undo());

    assert_eq!(canvas.snapshot(), before);
    assert_eq!(canvas.history_depth(), 1);
    assert!(canvas.snapshot().pixels().all(|p| *p == WHITE));
}

#[test]
fn test_new_operation_invalidates_redo() {
    let mut canvas = create_test_canvas();
    draw_three_operations(&mut canvas);

    canvas.undo();
    canvas.undo();
    assert_eq!(canvas.redo_depth(), 2);

    canvas.select_tool(ToolType::Line);
    drag(&mut canvas, pos2(0.0, 39.0), pos2(49.0, 0.0));
    assert_eq!(canvas.redo_depth(), 0);

    let after_line = canvas.snapshot();
    assert!(!canvas.redo());
    assert_eq!(canvas.snapshot(), after_line);
}

#[test]
fn test_stroke_is_live_before_commit() {
    let mut canvas = create_test_canvas();
    canvas.handle_input(InputEvent::PointerDown {
        position: pos2(5.0, 20.0),
    });
    canvas.handle_input(InputEvent::PointerMove {
        position: pos2(30.0, 20.0),
    });

    assert_eq!(canvas.pixel(15, 20), Some(Rgba([0, 0, 0, 255])));
    assert_eq!(canvas.history_depth(), 1);

    canvas.handle_input(InputEvent::PointerUp {
        position: pos2(30.0, 20.0),
    });
    assert_eq!(canvas.history_depth(), 2);
}

#[test]
fn test_degenerate_operations_still_commit() {
    let mut canvas = create_test_canvas();
    let blank = canvas.snapshot();

    // A tap with the pencil draws nothing.
    click(&mut canvas, pos2(10.0, 10.0));
    canvas.select_tool(ToolType::Ellipse);
    // Zero-height ellipse draws nothing.
    drag(&mut canvas, pos2(10.0, 10.0), pos2(30.0, 10.0));

    assert_eq!(canvas.snapshot(), blank);
    assert_eq!(canvas.history_depth(), 3);
}

#[test]
fn test_eraser_clears_to_transparent() {
    let mut canvas = create_test_canvas();
    canvas.set_brush_size(4);
    drag(&mut canvas, pos2(5.0, 20.0), pos2(45.0, 20.0));
    assert_eq!(canvas.pixel(25, 20), Some(Rgba([0, 0, 0, 255])));

    canvas.select_tool(ToolType::Eraser);
    canvas.set_brush_size(1);
    drag(&mut canvas, pos2(25.0, 0.0), pos2(25.0, 39.0));

    // Eraser width is five times the brush size.
    assert_eq!(canvas.pixel(25, 20), Some(Rgba([0, 0, 0, 0])));
    assert_eq!(canvas.pixel(23, 5), Some(Rgba([0, 0, 0, 0])));
    assert_eq!(canvas.pixel(20, 5), Some(WHITE));
}

#[test]
fn test_history_limit_from_config() {
    let config = sketch_canvas::CanvasConfig {
        history_limit: Some(3),
        ..Default::default()
    };
    let mut canvas = DrawingCanvas::new(config);
    canvas.observe_layout(SurfaceLayout::new(Pos2::ZERO, vec2(50.0, 40.0), 1.0));

    for y in [5.0, 15.0, 25.0, 35.0] {
        drag(&mut canvas, pos2(5.0, y), pos2(45.0, y));
    }
    assert_eq!(canvas.history_depth(), 3);

    assert!(canvas.undo());
    assert!(canvas.undo());
    assert!(!canvas.undo());
    assert!(canvas.snapshot().pixels().all(|p| *p == WHITE));
}
