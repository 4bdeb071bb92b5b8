mod bus;
mod events;

pub use bus::EventBus;
pub use events::{HistoryEvent, PreviewEvent, SketchEvent};

use crate::drawable::Drawable;
use crate::preview::Preview;

/// Read-only view of everything that is drawn, handed to observers
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    /// Committed drawables in commit order
    pub drawables: &'a [Drawable],
    pub preview: &'a Preview,
}

pub trait EventHandler {
    fn handle_event(&mut self, event: &SketchEvent, scene: &Scene<'_>);
}
