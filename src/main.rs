#![warn(clippy::all, rust_2018_idioms)]
// hide console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use sticker_sketchbook::app::APP_TITLE;
use sticker_sketchbook::{SketchConfig, SketchbookApp};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = SketchConfig::from_env().unwrap_or_else(|err| {
        log::error!("{}; falling back to default config", err);
        SketchConfig::default()
    });

    let canvas = config.canvas_size();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([canvas.x + 280.0, canvas.y + 120.0])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(|cc| Ok(Box::new(SketchbookApp::new(cc, config)))),
    )
}
