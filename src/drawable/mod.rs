use egui::Pos2;

use crate::surface::Surface;
use crate::tool::ToolParams;

mod stamp;
mod stroke;

pub use stamp::{STAMP_SCALE, Stamp};
pub use stroke::Stroke;

/// Behaviour shared by every recorded action
pub trait Draw {
    /// Short name of the drawable kind
    fn kind(&self) -> &'static str;

    /// Grow the drawable in response to continued pointer motion
    fn extend(&mut self, point: Pos2);

    /// Issue the primitives that reproduce the current visual state
    fn render(&self, surface: &mut dyn Surface);
}

/// A recorded action in the sketch history
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Stroke(Stroke),
    Stamp(Stamp),
}

impl Drawable {
    /// Build a drawable at `origin` from the current tool parameters
    pub fn create(origin: Pos2, params: ToolParams) -> Self {
        match params {
            ToolParams::Pen { thickness } => Drawable::Stroke(Stroke::new(origin, thickness)),
            ToolParams::Stamp { glyph, size } => Drawable::Stamp(Stamp::new(origin, glyph, size)),
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Drawable::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_stamp(&self) -> Option<&Stamp> {
        match self {
            Drawable::Stamp(stamp) => Some(stamp),
            _ => None,
        }
    }
}

impl Draw for Drawable {
    fn kind(&self) -> &'static str {
        match self {
            Drawable::Stroke(s) => s.kind(),
            Drawable::Stamp(s) => s.kind(),
        }
    }

    fn extend(&mut self, point: Pos2) {
        match self {
            Drawable::Stroke(s) => s.extend(point),
            Drawable::Stamp(s) => s.extend(point),
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        match self {
            Drawable::Stroke(s) => s.render(surface),
            Drawable::Stamp(s) => s.render(surface),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_create_from_pen_params() {
        let drawable = Drawable::create(pos2(3.0, 4.0), ToolParams::Pen { thickness: 2 });

        assert_eq!(drawable.kind(), "stroke");
        let stroke = drawable.as_stroke().unwrap();
        assert_eq!(stroke.points(), &[pos2(3.0, 4.0)]);
        assert_eq!(stroke.thickness(), 2);
        assert!(drawable.as_stamp().is_none());
    }

    #[test]
    fn test_create_from_stamp_params() {
        let params = ToolParams::Stamp {
            glyph: "🎈".to_owned(),
            size: 3,
        };
        let drawable = Drawable::create(pos2(7.0, 8.0), params);

        assert_eq!(drawable.kind(), "stamp");
        let stamp = drawable.as_stamp().unwrap();
        assert_eq!(stamp.position(), pos2(7.0, 8.0));
        assert_eq!(stamp.glyph(), "🎈");
        assert_eq!(stamp.size(), 3);
    }

    #[test]
    fn test_extend_dispatches_per_variant() {
        let mut stroke = Drawable::create(pos2(0.0, 0.0), ToolParams::Pen { thickness: 1 });
        let mut stamp = Drawable::create(
            pos2(0.0, 0.0),
            ToolParams::Stamp {
                glyph: "⭐".to_owned(),
                size: 1,
            },
        );

        stroke.extend(pos2(5.0, 5.0));
        stamp.extend(pos2(5.0, 5.0));

        assert_eq!(stroke.as_stroke().unwrap().points().len(), 2);
        assert_eq!(stamp.as_stamp().unwrap().position(), pos2(5.0, 5.0));
    }
}
