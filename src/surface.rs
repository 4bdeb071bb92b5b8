use std::cell::RefCell;
use std::rc::Rc;

use egui::Pos2;

/// The drawing target that drawables and the preview render onto.
///
/// Coordinates are surface-local. Text is anchored at its centre.
pub trait Surface {
    /// Wipe the whole surface
    fn clear(&mut self);

    /// Draw a connected path through `points` in order
    fn polyline(&mut self, points: &[Pos2], width: f32);

    /// Draw `glyph` centred on `position` with a font size of `size`
    fn text(&mut self, position: Pos2, glyph: &str, size: f32);
}

/// A single drawing primitive issued to a [`Surface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Polyline { points: Vec<Pos2>, width: f32 },
    Text {
        position: Pos2,
        glyph: String,
        size: f32,
    },
}

/// Surface that records primitives instead of drawing them.
///
/// Clones share the same log, so a clone can be handed to a
/// [`RenderLoop`](crate::renderer::RenderLoop) while the original is kept
/// around for inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Rc<RefCell<Vec<DrawOp>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything drawn so far
    pub fn ops(&self) -> Vec<DrawOp> {
        self.ops.borrow().clone()
    }

    /// Take the recorded primitives, leaving the log empty
    pub fn take(&self) -> Vec<DrawOp> {
        std::mem::take(&mut *self.ops.borrow_mut())
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.borrow_mut().push(DrawOp::Clear);
    }

    fn polyline(&mut self, points: &[Pos2], width: f32) {
        self.ops.borrow_mut().push(DrawOp::Polyline {
            points: points.to_vec(),
            width,
        });
    }

    fn text(&mut self, position: Pos2, glyph: &str, size: f32) {
        self.ops.borrow_mut().push(DrawOp::Text {
            position,
            glyph: glyph.to_owned(),
            size,
        });
    }
}
