use thiserror::Error;

/// Errors raised by tool controls and configuration loading.
///
/// Pointer and history operations never fail: stray events are ignored
/// rather than reported.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("Size must be a positive integer, got {0}")]
    InvalidSize(u32),

    #[error("Custom stamp glyph cannot be empty")]
    EmptyGlyph,

    #[error("Failed to parse config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fallible sketchbook operations
pub type SketchResult<T> = Result<T, SketchError>;
