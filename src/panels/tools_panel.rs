use egui::{Button, Slider, vec2};

use crate::SketchApp;
use crate::color::{PALETTE, parse_hex_color, to_hex};
use crate::command::CanvasCommand;
use crate::tools::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, ToolType};

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    let settings = app.canvas.settings().clone();

    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            for tool in ToolType::ALL {
                if ui.selectable_label(settings.tool == tool, tool.label()).clicked() {
                    log::info!("Tool selected from UI: {}", tool.name());
                    app.commands.push(CanvasCommand::SelectTool(tool));
                }
            }
            ui.separator();

            ui.label("Color:");
            ui.horizontal_wrapped(|ui| {
                for (name, color) in PALETTE {
                    let swatch = Button::new("").fill(color).min_size(vec2(22.0, 22.0));
                    if ui.add(swatch).on_hover_text(name).clicked() {
                        app.hex_input = to_hex(color);
                        app.commands.push(CanvasCommand::SetColor(color));
                    }
                }
            });

            ui.horizontal(|ui| {
                let mut color = settings.color;
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    app.hex_input = to_hex(color);
                    app.commands.push(CanvasCommand::SetColor(color));
                }

                let hex = ui.add(egui::TextEdit::singleline(&mut app.hex_input).desired_width(80.0));
                let submitted = hex.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if submitted || ui.button("Apply").clicked() {
                    match parse_hex_color(&app.hex_input) {
                        Ok(color) => {
                            app.status = None;
                            app.commands.push(CanvasCommand::SetColor(color));
                        }
                        Err(err) => {
                            log::warn!("{}", err);
                            app.status = Some(err.to_string());
                        }
                    }
                }
            });

            ui.horizontal(|ui| {
                ui.label("Brush:");
                let mut size = settings.brush_size();
                let slider = Slider::new(&mut size, MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).suffix(" px");
                if ui.add(slider).changed() {
                    app.commands.push(CanvasCommand::SetBrushSize(size));
                }
            });
            ui.separator();

            ui.horizontal(|ui| {
                if ui.add_enabled(app.canvas.can_undo(), Button::new("Undo")).clicked() {
                    app.commands.push(CanvasCommand::Undo);
                }
                if ui.add_enabled(app.canvas.can_redo(), Button::new("Redo")).clicked() {
                    app.commands.push(CanvasCommand::Redo);
                }
                if ui.button("Clear").clicked() {
                    app.commands.push(CanvasCommand::Clear);
                }
            });
            ui.label(format!(
                "History: {}  Redo: {}",
                app.canvas.history_depth(),
                app.canvas.redo_depth()
            ));
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("✔ Done").clicked() {
                    app.commands.push(CanvasCommand::Complete);
                }
                if ui.button("✖ Cancel").clicked() {
                    app.commands.push(CanvasCommand::Cancel);
                }
            });

            if let Some(status) = &app.status {
                ui.separator();
                ui.colored_label(ui.visuals().warn_fg_color, status);
            }
        });
}
