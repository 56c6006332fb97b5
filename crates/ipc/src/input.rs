//! Input event types for pointer and keyboard.
//!
//! Positions are client coordinates of the host page or window.

use serde::{Deserialize, Serialize};

/// Pointer input events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    Move { x: f32, y: f32 },
    ButtonDown { button: MouseButton, x: f32, y: f32 },
    ButtonUp { button: MouseButton, x: f32, y: f32 },
    /// Pointer left the annotation surface
    Leave,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

/// Keyboard input event.
///
/// `key` follows web key values: a letter arrives as "z" or "Z"
/// depending on shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardEvent {
    pub key: String,
    #[serde(default = "pressed_default")]
    pub pressed: bool,
    #[serde(default)]
    pub modifiers: Modifiers,
}

fn pressed_default() -> bool {
    true
}

impl KeyboardEvent {
    /// Key press with the given modifiers
    pub fn press(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            pressed: true,
            modifiers,
        }
    }
}

/// Keyboard modifier keys state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}
