use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape};

use crate::drawable::Draw;
use crate::event::{EventHandler, Scene, SketchEvent};
use crate::surface::Surface;

/// Clear `surface` and replay `scene`: committed drawables in commit order,
/// then the preview on top.
///
/// Has no state of its own, so replaying the same scene twice issues the
/// same primitives.
pub fn redraw(surface: &mut dyn Surface, scene: &Scene<'_>) {
    surface.clear();
    for drawable in scene.drawables {
        drawable.render(surface);
    }
    scene.preview.render(surface);
}

/// Observer that redraws its surface on every notification
#[derive(Debug)]
pub struct RenderLoop<S: Surface> {
    surface: S,
    redraws: usize,
}

impl<S: Surface> RenderLoop<S> {
    pub fn new(surface: S) -> Self {
        Self { surface, redraws: 0 }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// How many times the surface has been redrawn
    pub fn redraws(&self) -> usize {
        self.redraws
    }
}

impl<S: Surface> EventHandler for RenderLoop<S> {
    fn handle_event(&mut self, event: &SketchEvent, scene: &Scene<'_>) {
        // History and preview changes are treated alike.
        match event {
            SketchEvent::HistoryChanged(_) | SketchEvent::PreviewChanged(_) => {
                redraw(&mut self.surface, scene);
                self.redraws += 1;
            }
        }
    }
}

/// Observer for the egui front end: schedules a frame, which then calls
/// [`redraw`] on an [`EguiSurface`].
#[derive(Debug, Clone)]
pub struct RepaintOnChange {
    ctx: egui::Context,
}

impl RepaintOnChange {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintOnChange {
    fn handle_event(&mut self, _event: &SketchEvent, _scene: &Scene<'_>) {
        self.ctx.request_repaint();
    }
}

/// Draws onto an egui painter inside the canvas rect.
///
/// Surface coordinates are relative to `rect.min`.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
    background: Color32,
    ink: Color32,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self {
            painter,
            rect,
            background: Color32::WHITE,
            ink: Color32::BLACK,
        }
    }

    fn to_screen(&self, point: Pos2) -> Pos2 {
        self.rect.min + point.to_vec2()
    }
}

impl Surface for EguiSurface<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, self.background);
    }

    fn polyline(&mut self, points: &[Pos2], width: f32) {
        match points {
            [] => {}
            [point] => {
                self.painter.circle_filled(self.to_screen(*point), width / 2.0, self.ink);
            }
            _ => {
                let screen_points = points.iter().map(|p| self.to_screen(*p)).collect();
                self.painter.add(Shape::line(
                    screen_points,
                    egui::Stroke::new(width, self.ink),
                ));
            }
        }
    }

    fn text(&mut self, position: Pos2, glyph: &str, size: f32) {
        self.painter.text(
            self.to_screen(position),
            Align2::CENTER_CENTER,
            glyph,
            FontId::proportional(size),
            self.ink,
        );
    }
}
