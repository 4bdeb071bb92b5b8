use egui::Pos2;

use crate::drawable::STAMP_SCALE;
use crate::event::{EventBus, PreviewEvent};
use crate::surface::Surface;
use crate::tool::{ToolMode, ToolState};

/// Glyph shown under the pointer while the pen is selected
pub const PEN_PREVIEW_GLYPH: &str = "○";
/// Font size in pixels per unit of pen thickness for the pen preview
pub const PEN_PREVIEW_SCALE: f32 = 3.0;

/// Ephemeral indicator of what the next action will look like.
///
/// Never part of the history; rendered on top of everything else while the
/// pointer is over the canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preview {
    position: Pos2,
    active: bool,
    mode: ToolMode,
    size: u32,
}

impl Preview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn mode(&self) -> &ToolMode {
        &self.mode
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Move to `point` and snapshot the current tool
    pub fn update(&mut self, point: Pos2, tool: &ToolState, bus: &EventBus) {
        self.position = point;
        self.mode = tool.mode().clone();
        self.size = tool.size();
        self.active = true;
        bus.emit(PreviewEvent::Moved { position: point });
    }

    /// Re-snapshot the tool in place. Does nothing while hidden.
    pub fn refresh(&mut self, tool: &ToolState, bus: &EventBus) {
        if self.active {
            self.update(self.position, tool, bus);
        }
    }

    pub fn deactivate(&mut self, bus: &EventBus) {
        if !self.active {
            return;
        }
        self.active = false;
        bus.emit(PreviewEvent::Hidden);
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        if !self.active {
            return;
        }
        match &self.mode {
            ToolMode::Pen => surface.text(
                self.position,
                PEN_PREVIEW_GLYPH,
                self.size as f32 * PEN_PREVIEW_SCALE,
            ),
            ToolMode::Stamp(glyph) => {
                surface.text(self.position, glyph, self.size as f32 * STAMP_SCALE)
            }
        }
    }
}
