use crate::app::SketchbookApp;
use crate::command::Command;
use crate::drawable::Draw;
use crate::tool::ToolMode;

pub fn tools_panel(app: &mut SketchbookApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");
            ui.label(format!("Current: {}", app.sketchbook().tool().mode().name()));

            let mut commands = Vec::new();
            let tool = app.sketchbook().tool();

            if ui.selectable_label(tool.mode().is_pen(), "✏ Pen").clicked() {
                commands.push(Command::SelectPen);
            }

            ui.horizontal_wrapped(|ui| {
                for glyph in tool.glyphs() {
                    let selected = tool.mode() == &ToolMode::Stamp(glyph.clone());
                    if ui.selectable_label(selected, glyph.as_str()).clicked() {
                        commands.push(Command::SelectStamp(glyph.clone()));
                    }
                }
            });

            let mut size = tool.size();
            let max_size = tool.max_size();
            if ui
                .add(egui::Slider::new(&mut size, 1..=max_size).text("Size"))
                .changed()
            {
                commands.push(Command::SetSize(size));
            }

            let history = app.sketchbook().history();
            let (can_undo, can_redo) = (history.can_undo(), history.can_redo());

            for command in commands {
                app.execute(command);
            }

            ui.separator();

            let mut add_custom = false;
            ui.horizontal(|ui| {
                let field = ui.text_edit_singleline(app.custom_glyph_mut());
                let entered = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                add_custom = ui.button("Add stamp").clicked() || entered;
            });
            if add_custom {
                app.submit_custom_glyph();
            }

            ui.separator();

            ui.horizontal(|ui| {
                if ui.add_enabled(can_undo, egui::Button::new("Clear")).clicked() {
                    app.execute(Command::ClearAll);
                }
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.execute(Command::Undo);
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.execute(Command::Redo);
                }
            });

            ui.separator();

            let history = app.sketchbook().history();
            ui.horizontal(|ui| {
                ui.label(format!("Undo stack size: {}", history.undo_stack().len()));
                ui.label(format!("Redo stack size: {}", history.redo_stack().len()));
            });

            egui::Grid::new("history_grid")
                .num_columns(2)
                .spacing([40.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("Undo Stack");
                    ui.strong("Redo Stack");
                    ui.end_row();

                    let undo_stack = history.undo_stack();
                    let redo_stack = history.redo_stack();

                    for i in 0..undo_stack.len().max(redo_stack.len()) {
                        ui.label(undo_stack.get(i).map(|d| d.kind()).unwrap_or(""));
                        ui.label(redo_stack.get(i).map(|d| d.kind()).unwrap_or(""));
                        ui.end_row();
                    }
                });
        });
}
