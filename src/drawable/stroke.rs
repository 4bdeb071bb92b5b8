use egui::Pos2;

use super::Draw;
use crate::surface::Surface;

/// Freehand line through the points the pointer visited
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    thickness: u32,
}

impl Stroke {
    /// Start a stroke at the pointer-down position
    pub fn new(origin: Pos2, thickness: u32) -> Self {
        Self {
            points: vec![origin],
            thickness,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> u32 {
        self.thickness
    }
}

impl Draw for Stroke {
    fn kind(&self) -> &'static str {
        "stroke"
    }

    fn extend(&mut self, point: Pos2) {
        self.points.push(point);
    }

    /// A stroke with a single point is still emitted; surfaces draw it as a dot.
    fn render(&self, surface: &mut dyn Surface) {
        if self.points.is_empty() {
            return;
        }
        surface.polyline(&self.points, self.thickness as f32);
    }
}
