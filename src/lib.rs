#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod drawable;
pub mod error;
pub mod event;
pub mod input;
pub mod panels;
pub mod preview;
pub mod renderer;
pub mod sketchbook;
pub mod surface;
pub mod tool;

pub use app::SketchbookApp;
pub use command::{Command, History};
pub use config::SketchConfig;
pub use drawable::{Draw, Drawable, Stamp, Stroke};
pub use error::{SketchError, SketchResult};
pub use event::{EventBus, EventHandler, Scene, SketchEvent};
pub use input::PointerEvent;
pub use preview::Preview;
pub use renderer::{RenderLoop, redraw};
pub use sketchbook::Sketchbook;
pub use surface::{DrawOp, RecordingSurface, Surface};
pub use tool::{ToolMode, ToolParams, ToolState};
