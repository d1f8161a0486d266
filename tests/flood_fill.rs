use egui::{Color32, Pos2, pos2, vec2};
use image::{Rgba, RgbaImage};
use sketch_canvas::buffer::blank_buffer;
use sketch_canvas::fill::flood_fill;
use sketch_canvas::{DrawingCanvas, FillOutcome, FillSkip, InputEvent, SurfaceLayout, ToolType};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const THRESHOLD: u8 = 64;

/// 30x30 white canvas with a 1px black outline around the 10x10 square
/// spanning 10..20 on both axes.
fn create_outlined_square() -> RgbaImage {
    let mut buffer = blank_buffer(30, 30);
    for i in 9..=20 {
        buffer.put_pixel(i, 9, BLACK);
        buffer.put_pixel(i, 20, BLACK);
        buffer.put_pixel(9, i, BLACK);
        buffer.put_pixel(20, i, BLACK);
    }
    buffer
}

fn is_border(x: u32, y: u32) -> bool {
    ((x == 9 || x == 20) && (9..=20).contains(&y)) || ((y == 9 || y == 20) && (9..=20).contains(&x))
}

fn is_inside(x: u32, y: u32) -> bool {
    (10..20).contains(&x) && (10..20).contains(&y)
}

#[test]
fn test_fill_stays_inside_closed_outline() {
    let mut buffer = create_outlined_square();
    let outcome = flood_fill(&mut buffer, (15, 15), RED, THRESHOLD);
    assert_eq!(outcome, FillOutcome::Filled { pixels: 100 });
    assert!(outcome.changed());

    for (x, y, pixel) in buffer.enumerate_pixels() {
        let expected = if is_border(x, y) {
            BLACK
        } else if is_inside(x, y) {
            RED
        } else {
            WHITE
        };
        assert_eq!(*pixel, expected, "pixel ({x}, {y})");
    }
}

#[test]
fn test_fill_outside_reaches_buffer_edges() {
    let mut buffer = create_outlined_square();
    flood_fill(&mut buffer, (0, 0), RED, THRESHOLD);

    assert_eq!(*buffer.get_pixel(29, 29), RED);
    assert_eq!(*buffer.get_pixel(0, 29), RED);
    assert_eq!(*buffer.get_pixel(15, 15), WHITE);
    assert_eq!(*buffer.get_pixel(9, 9), BLACK);
}

#[test]
fn test_refill_is_idempotent() {
    let mut buffer = create_outlined_square();
    flood_fill(&mut buffer, (15, 15), RED, THRESHOLD);
    let filled = buffer.clone();

    let outcome = flood_fill(&mut buffer, (12, 17), RED, THRESHOLD);
    assert_eq!(outcome, FillOutcome::Skipped(FillSkip::AlreadyFilled));
    assert!(!outcome.changed());
    assert_eq!(buffer, filled);
}

#[test]
fn test_fill_on_boundary_is_noop() {
    let mut buffer = create_outlined_square();
    let before = buffer.clone();

    let outcome = flood_fill(&mut buffer, (9, 15), RED, THRESHOLD);
    assert_eq!(outcome, FillOutcome::Skipped(FillSkip::OnBoundary));
    assert_eq!(buffer, before);
}

#[test]
fn test_same_color_neighbours_keep_their_line() {
    // Two halves separated by a vertical ink line at x = 5.
    let mut buffer = blank_buffer(11, 6);
    for y in 0..6 {
        buffer.put_pixel(5, y, BLACK);
    }

    flood_fill(&mut buffer, (1, 1), RED, THRESHOLD);
    flood_fill(&mut buffer, (9, 1), RED, THRESHOLD);

    for y in 0..6 {
        assert_eq!(*buffer.get_pixel(5, y), BLACK);
        assert_eq!(*buffer.get_pixel(0, y), RED);
        assert_eq!(*buffer.get_pixel(10, y), RED);
    }
}

#[test]
fn test_light_lines_do_not_stop_fill() {
    // Only near-black pixels are walls; a mid-gray line lets the fill through.
    let mut buffer = blank_buffer(11, 6);
    for y in 0..6 {
        buffer.put_pixel(5, y, Rgba([100, 100, 100, 255]));
    }
    flood_fill(&mut buffer, (1, 1), RED, THRESHOLD);
    assert_eq!(*buffer.get_pixel(10, 3), RED);

    let mut buffer = blank_buffer(11, 6);
    for y in 0..6 {
        buffer.put_pixel(5, y, Rgba([50, 60, 40, 255]));
    }
    flood_fill(&mut buffer, (1, 1), RED, THRESHOLD);
    assert_eq!(*buffer.get_pixel(10, 3), WHITE);
}

fn create_fill_canvas() -> DrawingCanvas {
    let mut canvas = DrawingCanvas::default();
    canvas.observe_layout(SurfaceLayout::new(Pos2::ZERO, vec2(40.0, 40.0), 1.0));

    canvas.select_tool(ToolType::Rectangle);
    canvas.set_brush_size(1);
    canvas.handle_input(InputEvent::PointerDown {
        position: pos2(10.0, 10.0),
    });
    canvas.handle_input(InputEvent::PointerUp {
        position: pos2(30.0, 30.0),
    });

    canvas.select_tool(ToolType::Fill);
    canvas.set_color(Color32::from_rgb(255, 0, 0));
    canvas
}

fn click(canvas: &mut DrawingCanvas, at: Pos2) {
    canvas.handle_input(InputEvent::PointerDown { position: at });
    canvas.handle_input(InputEvent::PointerUp { position: at });
}

#[test]
fn test_canvas_fill_is_one_undoable_step() {
    let mut canvas = create_fill_canvas();
    let before = canvas.snapshot();
    assert_eq!(canvas.history_depth(), 2);

    click(&mut canvas, pos2(20.0, 20.0));
    assert_eq!(canvas.history_depth(), 3);
    assert_eq!(canvas.pixel(20, 20), Some(RED));
    assert_eq!(canvas.pixel(2, 2), Some(WHITE));

    assert!(canvas.undo());
    assert_eq!(canvas.snapshot(), before);
}

#[test]
fn test_canvas_noop_fills_do_not_grow_history() {
    let mut canvas = create_fill_canvas();
    click(&mut canvas, pos2(20.0, 20.0));
    let filled = canvas.snapshot();
    let depth = canvas.history_depth();

    // Same region, same color.
    click(&mut canvas, pos2(15.0, 25.0));
    // On the outline.
    click(&mut canvas, pos2(10.2, 20.0));
    // Outside the canvas.
    click(&mut canvas, pos2(-3.0, 20.0));
    click(&mut canvas, pos2(400.0, 20.0));

    assert_eq!(canvas.snapshot(), filled);
    assert_eq!(canvas.history_depth(), depth);
}
