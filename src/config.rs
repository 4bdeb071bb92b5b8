use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SketchResult;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "STICKER_SKETCHBOOK_CONFIG";

/// Smallest canvas side in pixels
pub const MIN_CANVAS_SIDE: f32 = 16.0;

/// Startup settings for the sketchbook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct SketchConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Initial pen thickness / stamp size
    pub default_size: u32,
    pub max_size: u32,
    /// Stamp glyphs offered before any custom ones are added
    pub stamps: Vec<String>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_width: 256.0,
            canvas_height: 256.0,
            default_size: 4,
            max_size: 10,
            stamps: vec!["🌵".to_owned(), "⭐".to_owned(), "🎈".to_owned()],
        }
    }
}

impl SketchConfig {
    /// Canvas size with each side raised to at least [`MIN_CANVAS_SIDE`].
    /// Non-finite values fall back to the minimum.
    pub fn canvas_size(&self) -> egui::Vec2 {
        let side = |value: f32| {
            if value.is_finite() {
                value.max(MIN_CANVAS_SIDE)
            } else {
                MIN_CANVAS_SIDE
            }
        };
        egui::vec2(side(self.canvas_width), side(self.canvas_height))
    }

    pub fn from_json(json: &str) -> SketchResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> SketchResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], or use defaults when unset
    pub fn from_env() -> SketchResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::info!("Loading config from {}", Path::new(&path).display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }
}
