use egui::{Context, InputState, Key, KeyboardShortcut, Modifiers, Pos2, Rect};

use crate::command::Command;

/// Pointer events in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer entered the canvas
    Enter(Pos2),
    /// Pointer moved over the canvas
    Move {
        position: Pos2,
        /// Whether the primary button is held down
        primary_held: bool,
    },
    /// Pointer left the canvas
    Leave,
    /// Primary button pressed over the canvas
    Down(Pos2),
    /// Primary button released, wherever the pointer is
    Up,
}

/// The raw pointer state for one frame, in screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    pub hover_pos: Option<Pos2>,
    pub primary_down: bool,
    pub primary_pressed: bool,
    pub primary_released: bool,
}

/// Turns per-frame egui pointer state into [`PointerEvent`]s for the canvas
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Last canvas-local position while the pointer was over the canvas
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if the window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_local(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Read the pointer state from egui and translate it
    pub fn process_input(&mut self, ctx: &Context) -> Vec<PointerEvent> {
        let snapshot = ctx.input(|input| PointerSnapshot {
            hover_pos: input.pointer.hover_pos(),
            primary_down: input.pointer.primary_down(),
            primary_pressed: input.pointer.primary_pressed(),
            primary_released: input.pointer.primary_released(),
        });
        self.translate(snapshot)
    }

    /// Emits enter/leave/move first, then down, then up, so a press in this
    /// frame is not extended by the motion that led to it.
    ///
    /// A frame that both releases and presses while ending with the button
    /// held is a release followed by a new press: `Up` goes first so the
    /// previous entry is finished before the motion and the new `Down`.
    pub fn translate(&mut self, snapshot: PointerSnapshot) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        let repressed =
            snapshot.primary_pressed && snapshot.primary_released && snapshot.primary_down;
        if repressed {
            events.push(PointerEvent::Up);
        }

        let local = snapshot
            .hover_pos
            .filter(|pos| self.canvas_rect.contains(*pos))
            .map(|pos| self.to_local(pos));

        match (self.last_pointer_pos, local) {
            (None, Some(pos)) => events.push(PointerEvent::Enter(pos)),
            (Some(_), None) => events.push(PointerEvent::Leave),
            (Some(last), Some(pos)) if last != pos => events.push(PointerEvent::Move {
                position: pos,
                primary_held: snapshot.primary_down,
            }),
            _ => {}
        }
        self.last_pointer_pos = local;

        if snapshot.primary_pressed {
            if let Some(pos) = local {
                events.push(PointerEvent::Down(pos));
            }
        }
        if snapshot.primary_released && !repressed {
            events.push(PointerEvent::Up);
        }

        events
    }
}

/// Undo/redo keyboard shortcuts: Cmd/Ctrl+Z and Cmd/Ctrl+Shift+Z.
///
/// Left alone while a text field has keyboard focus, so the field keeps its
/// own undo.
pub fn shortcut(ctx: &Context) -> Option<Command> {
    let text_focused = ctx.wants_keyboard_input();
    ctx.input_mut(|input| history_shortcut(input, text_focused))
}

fn history_shortcut(input: &mut InputState, text_focused: bool) -> Option<Command> {
    if text_focused {
        return None;
    }

    let redo = KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z);
    let undo = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);

    // Redo first: the undo shortcut would also match with shift held.
    if input.consume_shortcut(&redo) {
        Some(Command::Redo)
    } else if input.consume_shortcut(&undo) {
        Some(Command::Undo)
    } else {
        None
    }
}
