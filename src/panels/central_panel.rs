use egui::{Color32, Rect, Sense, TextureOptions, Vec2, pos2};

use crate::SketchApp;
use crate::input::InputEvent;
use crate::resize::SurfaceLayout;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::drag());
        response.on_hover_cursor(egui::CursorIcon::Crosshair);

        // Layout runs every frame; the engine only reallocates on a real
        // pixel-size change.
        app.canvas
            .observe_layout(SurfaceLayout::new(rect.min, rect.size(), ctx.pixels_per_point()));

        for event in pointer_events(ctx, rect, &mut app.pointer_captured) {
            app.canvas.handle_input(event);
        }

        upload_texture(app, ctx);

        let painter = ui.painter_at(rect);
        // Erased pixels are transparent and show this backdrop.
        painter.rect_filled(rect, 0.0, Color32::from_gray(210));
        if let Some(texture) = &app.texture {
            painter.image(
                texture.id(),
                rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
    });
}

/// Translate this frame's egui pointer state into canvas events.
fn pointer_events(ctx: &egui::Context, rect: Rect, captured: &mut bool) -> Vec<InputEvent> {
    let mut events = Vec::new();

    ctx.input(|i| {
        if i.pointer.primary_pressed() {
            if let Some(position) = i.pointer.interact_pos().filter(|p| rect.contains(*p)) {
                events.push(InputEvent::PointerDown { position });
                *captured = true;
            }
        }

        if !*captured {
            return;
        }

        if let Some(position) = i.pointer.latest_pos() {
            if !rect.contains(position) {
                events.push(InputEvent::PointerLeave {
                    last_known_position: position,
                });
                *captured = false;
                return;
            }
            if i.pointer.delta() != Vec2::ZERO {
                events.push(InputEvent::PointerMove { position });
            }
            if i.pointer.primary_released() {
                events.push(InputEvent::PointerUp { position });
                *captured = false;
            }
        } else {
            // Touch lifted or pointer gone from the window.
            events.push(InputEvent::PointerLeave {
                last_known_position: rect.center(),
            });
            *captured = false;
        }
    });

    events
}

fn upload_texture(app: &mut SketchApp, ctx: &egui::Context) {
    let (width, height) = app.canvas.dimensions();
    if width == 0 || height == 0 {
        return;
    }
    let revision = app.canvas.revision();
    if app.texture.is_some() && app.uploaded_revision == Some(revision) {
        return;
    }

    let image = app.canvas.to_color_image();
    match &mut app.texture {
        Some(texture) => texture.set(image, TextureOptions::NEAREST),
        None => {
            app.texture = Some(ctx.load_texture("sketch_canvas", image, TextureOptions::NEAREST));
        }
    }
    app.uploaded_revision = Some(revision);
}
