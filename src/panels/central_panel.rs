use crate::app::{APP_TITLE, SketchbookApp};
use crate::renderer::{EguiSurface, redraw};

pub fn central_panel(app: &mut SketchbookApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(APP_TITLE);

        let (response, painter) = ui.allocate_painter(app.canvas_size(), egui::Sense::drag());
        let canvas_rect = response.rect;

        app.handle_canvas_input(ctx, canvas_rect);

        let mut surface = EguiSurface::new(&painter, canvas_rect);
        redraw(&mut surface, &app.sketchbook().scene());
    });
}
