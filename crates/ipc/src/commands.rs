//! Annotation command types forwarded from the palette and slider.

use serde::{Deserialize, Serialize};

/// Commands for controlling the annotation surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum AnnotateCommand {
    /// Pick a palette colour by name (leaves eraser mode)
    SetColor { color: String },
    /// Set stroke width in pixels (1-20)
    SetWidth { width: u32 },
    /// Switch to the eraser
    Eraser,
    /// Undo last stroke
    Undo,
    /// Redo last undone stroke
    Redo,
}
