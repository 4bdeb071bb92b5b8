/// Discrete commands delivered by the tool and history controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SelectPen,
    SelectStamp(String),
    /// Set the size shared by pen and stamps
    SetSize(u32),
    /// Add a user-supplied glyph to the stamp set and select it
    AddCustomGlyph(String),
    ClearAll,
    Undo,
    Redo,
}

impl Command {
    /// Returns true if the command acts on the history rather than the tool
    pub fn is_history_command(&self) -> bool {
        matches!(self, Command::ClearAll | Command::Undo | Command::Redo)
    }
}
