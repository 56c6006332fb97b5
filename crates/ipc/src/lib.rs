//! Message types for Redline
//!
//! Defines the events a host forwards into an open feedback session and the
//! payload handed to submission sinks.

mod commands;
mod error;
mod feedback;
mod input;

pub use commands::AnnotateCommand;
pub use error::IpcError;
pub use feedback::{FeedbackForm, FeedbackPayload};
pub use input::{KeyboardEvent, Modifiers, MouseButton, PointerEvent};

use serde::{Deserialize, Serialize};

/// Displayed rectangle of the annotation surface in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Events delivered to an open feedback session, in the order the user
/// performed them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SessionEvent {
    /// Pointer activity over the annotation surface
    Pointer(PointerEvent),
    /// Key press or release while the session is open
    Key(KeyboardEvent),
    /// Palette, eraser, slider and toolbar actions
    Command(AnnotateCommand),
    /// Surface was laid out at a new position or size
    Layout(LayoutRect),
    /// Form submitted
    Submit(FeedbackForm),
    /// Cancel button pressed
    Cancel,
}

impl SessionEvent {
    pub fn to_json(&self) -> Result<String, IpcError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, IpcError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Parse a JSON array of session events.
pub fn parse_script(json: &str) -> Result<Vec<SessionEvent>, IpcError> {
    let events: Vec<SessionEvent> = serde_json::from_str(json)?;
    if events.is_empty() {
        return Err(IpcError::EmptyScript);
    }
    Ok(events)
}
