use egui::Pos2;

use super::Draw;
use crate::surface::Surface;

/// Font size in pixels per unit of stamp size
pub const STAMP_SCALE: f32 = 8.0;

/// A glyph placed on the canvas. Dragging moves it rather than trailing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Stamp {
    position: Pos2,
    glyph: String,
    size: u32,
}

impl Stamp {
    pub fn new(position: Pos2, glyph: impl Into<String>, size: u32) -> Self {
        Self {
            position,
            glyph: glyph.into(),
            size,
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Font size the glyph is drawn at
    pub fn font_size(&self) -> f32 {
        self.size as f32 * STAMP_SCALE
    }
}

impl Draw for Stamp {
    fn kind(&self) -> &'static str {
        "stamp"
    }

    fn extend(&mut self, point: Pos2) {
        self.position = point;
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.text(self.position, &self.glyph, self.font_size());
    }
}
