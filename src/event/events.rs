use egui::Pos2;

/// Notifications emitted by sketchbook mutations
#[derive(Debug, Clone, PartialEq)]
pub enum SketchEvent {
    HistoryChanged(HistoryEvent),
    PreviewChanged(PreviewEvent),
}

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryEvent {
    Begun { kind: &'static str },
    Extended,
    Finished,
    Undone,
    Redone,
    Cleared,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PreviewEvent {
    Moved { position: Pos2 },
    Hidden,
}

impl From<HistoryEvent> for SketchEvent {
    fn from(event: HistoryEvent) -> Self {
        SketchEvent::HistoryChanged(event)
    }
}

impl From<PreviewEvent> for SketchEvent {
    fn from(event: PreviewEvent) -> Self {
        SketchEvent::PreviewChanged(event)
    }
}
