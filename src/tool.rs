use crate::config::SketchConfig;
use crate::error::{SketchError, SketchResult};

/// The current drawing mode
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ToolMode {
    #[default]
    Pen,
    Stamp(String),
}

impl ToolMode {
    pub fn name(&self) -> &str {
        match self {
            ToolMode::Pen => "Pen",
            ToolMode::Stamp(glyph) => glyph,
        }
    }

    pub fn is_pen(&self) -> bool {
        matches!(self, ToolMode::Pen)
    }
}

/// Mode-specific parameters for building a new drawable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolParams {
    Pen { thickness: u32 },
    Stamp { glyph: String, size: u32 },
}

/// Selected tool, size shared across modes, and the known stamp glyphs
#[derive(Debug, Clone)]
pub struct ToolState {
    mode: ToolMode,
    size: u32,
    max_size: u32,
    glyphs: Vec<String>,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::from_config(&SketchConfig::default())
    }
}

impl ToolState {
    pub fn from_config(config: &SketchConfig) -> Self {
        let max_size = config.max_size.max(1);
        Self {
            mode: ToolMode::Pen,
            size: config.default_size.clamp(1, max_size),
            max_size,
            glyphs: config.stamps.clone(),
        }
    }

    pub fn mode(&self) -> &ToolMode {
        &self.mode
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    /// Known stamp glyphs in the order they were added
    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    pub fn select_pen(&mut self) {
        self.mode = ToolMode::Pen;
    }

    pub fn select_stamp(&mut self, glyph: impl Into<String>) {
        self.mode = ToolMode::Stamp(glyph.into());
    }

    /// Set the shared size. Zero is rejected, values above the maximum are clamped.
    pub fn set_size(&mut self, size: u32) -> SketchResult<()> {
        if size == 0 {
            return Err(SketchError::InvalidSize(size));
        }
        self.size = size.min(self.max_size);
        Ok(())
    }

    /// Append a user-supplied glyph and switch to it. Duplicates are kept.
    pub fn add_custom_glyph(&mut self, glyph: &str) -> SketchResult<()> {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            return Err(SketchError::EmptyGlyph);
        }
        self.glyphs.push(glyph.to_owned());
        self.select_stamp(glyph);
        Ok(())
    }

    pub fn params(&self) -> ToolParams {
        match &self.mode {
            ToolMode::Pen => ToolParams::Pen {
                thickness: self.size,
            },
            ToolMode::Stamp(glyph) => ToolParams::Stamp {
                glyph: glyph.clone(),
                size: self.size,
            },
        }
    }
}
