use crate::command::{Command, History};
use crate::config::SketchConfig;
use crate::drawable::Drawable;
use crate::error::SketchResult;
use crate::event::{EventBus, EventHandler, Scene};
use crate::input::PointerEvent;
use crate::preview::Preview;
use crate::tool::ToolState;

/// Application root: owns the history, tool state, preview and event bus.
///
/// Every entry point dispatches the notifications it caused before
/// returning, so observers are up to date when control goes back to the
/// input source.
#[derive(Debug)]
pub struct Sketchbook {
    history: History,
    tool: ToolState,
    preview: Preview,
    bus: EventBus,
}

impl Default for Sketchbook {
    fn default() -> Self {
        Self::new(&SketchConfig::default())
    }
}

impl Sketchbook {
    pub fn new(config: &SketchConfig) -> Self {
        Self {
            history: History::new(),
            tool: ToolState::from_config(config),
            preview: Preview::new(),
            bus: EventBus::new(),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn scene(&self) -> Scene<'_> {
        Scene {
            drawables: self.history.all(),
            preview: &self.preview,
        }
    }

    /// Register an observer for history and preview notifications
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.bus.subscribe(handler);
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Enter(pos) => {
                self.preview.update(pos, &self.tool, &self.bus);
            }
            PointerEvent::Move { position, primary_held } => {
                if primary_held {
                    self.history.continue_active(position, &self.bus);
                }
                self.preview.update(position, &self.tool, &self.bus);
            }
            PointerEvent::Leave => {
                self.preview.deactivate(&self.bus);
            }
            PointerEvent::Down(pos) => {
                let drawable = Drawable::create(pos, self.tool.params());
                self.history.begin(drawable, &self.bus);
            }
            PointerEvent::Up => {
                self.history.finish(&self.bus);
            }
        }
        self.dispatch();
    }

    /// Apply a tool or history control. Only tool validation can fail.
    pub fn execute(&mut self, command: Command) -> SketchResult<()> {
        log::info!("Executing {:?}", command);
        let tool_changed = !command.is_history_command();
        let result = match command {
            Command::SelectPen => {
                self.tool.select_pen();
                Ok(())
            }
            Command::SelectStamp(glyph) => {
                self.tool.select_stamp(glyph);
                Ok(())
            }
            Command::SetSize(size) => self.tool.set_size(size),
            Command::AddCustomGlyph(glyph) => self.tool.add_custom_glyph(&glyph),
            Command::ClearAll => {
                self.history.clear(&self.bus);
                Ok(())
            }
            Command::Undo => {
                self.history.undo(&self.bus);
                Ok(())
            }
            Command::Redo => {
                self.history.redo(&self.bus);
                Ok(())
            }
        };

        if tool_changed && result.is_ok() {
            self.preview.refresh(&self.tool, &self.bus);
        }
        self.dispatch();
        result
    }

    fn dispatch(&self) {
        let delivered = self.bus.dispatch(&self.scene());
        if delivered > 0 {
            log::trace!("Dispatched {} notifications", delivered);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SketchError;
    use crate::tool::ToolMode;
    use egui::pos2;

    #[test]
    fn test_down_uses_current_tool() {
        let mut book = Sketchbook::default();
        book.execute(Command::SelectStamp("⭐".to_owned())).unwrap();
        book.execute(Command::SetSize(3)).unwrap();

        book.handle_pointer(PointerEvent::Down(pos2(20.0, 20.0)));
        book.handle_pointer(PointerEvent::Up);

        let stamp = book.history().all()[0].as_stamp().unwrap();
        assert_eq!(stamp.glyph(), "⭐");
        assert_eq!(stamp.size(), 3);
    }

    #[test]
    fn test_move_without_button_only_moves_preview() {
        let mut book = Sketchbook::default();
        book.handle_pointer(PointerEvent::Down(pos2(0.0, 0.0)));
        book.handle_pointer(PointerEvent::Up);

        book.handle_pointer(PointerEvent::Move {
            position: pos2(9.0, 9.0),
            primary_held: false,
        });

        assert_eq!(book.history().all()[0].as_stroke().unwrap().points().len(), 1);
        assert_eq!(book.preview().position(), pos2(9.0, 9.0));
        assert!(book.preview().is_active());
    }

    #[test]
    fn test_tool_change_refreshes_active_preview() {
        let mut book = Sketchbook::default();
        book.handle_pointer(PointerEvent::Enter(pos2(4.0, 4.0)));

        book.execute(Command::SelectStamp("🎈".to_owned())).unwrap();

        assert_eq!(book.preview().mode(), &ToolMode::Stamp("🎈".to_owned()));
    }

    #[test]
    fn test_invalid_commands_leave_state_alone() {
        let mut book = Sketchbook::default();
        let size = book.tool().size();
        let glyphs = book.tool().glyphs().len();

        assert!(matches!(
            book.execute(Command::SetSize(0)),
            Err(SketchError::InvalidSize(0))
        ));
        assert!(matches!(
            book.execute(Command::AddCustomGlyph(String::new())),
            Err(SketchError::EmptyGlyph)
        ));

        assert_eq!(book.tool().size(), size);
        assert_eq!(book.tool().glyphs().len(), glyphs);
    }
}
