use egui::Rect;

use crate::command::Command;
use crate::config::SketchConfig;
use crate::input::{self, InputHandler};
use crate::panels::{central_panel, tools_panel};
use crate::renderer::RepaintOnChange;
use crate::sketchbook::Sketchbook;

pub const APP_TITLE: &str = "Sticker Sketchbook";

pub struct SketchbookApp {
    sketchbook: Sketchbook,
    input: InputHandler,
    canvas_size: egui::Vec2,
    /// Text typed into the custom stamp field
    custom_glyph: String,
}

impl SketchbookApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        let sketchbook = Sketchbook::new(&config);
        sketchbook.subscribe(Box::new(RepaintOnChange::new(cc.egui_ctx.clone())));

        Self {
            sketchbook,
            input: InputHandler::new(Rect::NOTHING),
            canvas_size: config.canvas_size(),
            custom_glyph: String::new(),
        }
    }

    pub fn sketchbook(&self) -> &Sketchbook {
        &self.sketchbook
    }

    pub fn canvas_size(&self) -> egui::Vec2 {
        self.canvas_size
    }

    pub fn custom_glyph_mut(&mut self) -> &mut String {
        &mut self.custom_glyph
    }

    /// Add whatever is in the custom stamp field, clearing it on success
    pub fn submit_custom_glyph(&mut self) {
        let glyph = self.custom_glyph.clone();
        if self.execute(Command::AddCustomGlyph(glyph)) {
            self.custom_glyph.clear();
        }
    }

    /// Run a control command. Returns false if it was rejected.
    pub fn execute(&mut self, command: Command) -> bool {
        match self.sketchbook.execute(command) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Command rejected: {}", err);
                false
            }
        }
    }

    /// Feed this frame's pointer state for the canvas into the sketchbook
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        self.input.set_canvas_rect(canvas_rect);
        for event in self.input.process_input(ctx) {
            self.sketchbook.handle_pointer(event);
        }
    }
}

impl eframe::App for SketchbookApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(command) = input::shortcut(ctx) {
            self.execute(command);
        }

        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
