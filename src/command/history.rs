use egui::Pos2;

use crate::drawable::{Draw, Drawable};
use crate::event::{EventBus, HistoryEvent};

/// Committed drawables plus the entries undone since the last new action.
///
/// At most one entry is active (still following the pointer), and it is
/// always the last entry of the undo stack.
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Drawables in commit order
    undo_stack: Vec<Drawable>,
    /// Undone drawables; the last one is restored first
    redo_stack: Vec<Drawable>,
    active: bool,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit `drawable` as the new active entry. Finalizes any previous
    /// active entry and discards everything that could be redone.
    pub fn begin(&mut self, drawable: Drawable, bus: &EventBus) {
        if self.active {
            log::debug!("Finalizing entry {} before starting a new one", self.undo_stack.len() - 1);
        }
        let kind = drawable.kind();
        self.undo_stack.push(drawable);
        self.redo_stack.clear();
        self.active = true;
        log::debug!("Began {} (undo: {})", kind, self.undo_stack.len());
        bus.emit(HistoryEvent::Begun { kind });
    }

    /// Extend the active entry to `point`. Ignored when nothing is active.
    pub fn continue_active(&mut self, point: Pos2, bus: &EventBus) {
        if !self.active {
            return;
        }
        let Some(entry) = self.undo_stack.last_mut() else {
            self.active = false;
            return;
        };
        entry.extend(point);
        self.redo_stack.clear();
        bus.emit(HistoryEvent::Extended);
    }

    /// Make the active entry immutable. Ignored when nothing is active.
    pub fn finish(&mut self, bus: &EventBus) {
        if !self.active {
            return;
        }
        self.active = false;
        log::debug!("Finished entry {}", self.undo_stack.len() - 1);
        bus.emit(HistoryEvent::Finished);
    }

    /// Move the most recent entry to the redo stack
    pub fn undo(&mut self, bus: &EventBus) {
        let Some(entry) = self.undo_stack.pop() else {
            return;
        };
        self.active = false;
        self.redo_stack.push(entry);
        log::debug!("Undo (undo: {}, redo: {})", self.undo_stack.len(), self.redo_stack.len());
        bus.emit(HistoryEvent::Undone);
    }

    /// Restore the most recently undone entry
    pub fn redo(&mut self, bus: &EventBus) {
        let Some(entry) = self.redo_stack.pop() else {
            return;
        };
        self.undo_stack.push(entry);
        log::debug!("Redo (undo: {}, redo: {})", self.undo_stack.len(), self.redo_stack.len());
        bus.emit(HistoryEvent::Redone);
    }

    /// Drop every committed entry. Undone entries stay redoable.
    pub fn clear(&mut self, bus: &EventBus) {
        self.undo_stack.clear();
        self.active = false;
        log::debug!("Cleared history (redo: {})", self.redo_stack.len());
        bus.emit(HistoryEvent::Cleared);
    }

    /// Committed drawables in the order they are painted
    pub fn all(&self) -> &[Drawable] {
        &self.undo_stack
    }

    pub fn undo_stack(&self) -> &[Drawable] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Drawable] {
        &self.redo_stack
    }

    /// The entry currently following the pointer, if any
    pub fn active(&self) -> Option<&Drawable> {
        if self.active { self.undo_stack.last() } else { None }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns true if there are drawables that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are drawables that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
