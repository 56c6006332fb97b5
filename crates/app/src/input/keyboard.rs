//! Keyboard chord routing for undo/redo
//!
//! - Primary+Z: Undo
//! - Primary+Shift+Z: Redo
//!
//! Primary is Command on macOS and Control elsewhere, fixed when the router
//! is built.

use redline_config::PrimaryModifier;
use redline_ipc::{KeyboardEvent, Modifiers};

/// History command produced by a key chord
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Undo,
    Redo,
}

/// Maps key presses to history commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRouter {
    modifier: PrimaryModifier,
}

impl KeyRouter {
    pub fn new(modifier: PrimaryModifier) -> Self {
        Self { modifier }
    }

    pub fn modifier(&self) -> PrimaryModifier {
        self.modifier
    }

    /// Route a keyboard event
    ///
    /// Returns the command for an undo/redo chord. The host must suppress
    /// the platform default action whenever a command is returned.
    pub fn route(&self, event: &KeyboardEvent) -> Option<KeyCommand> {
        if !event.pressed || !self.primary_held(&event.modifiers) {
            return None;
        }
        if !event.key.eq_ignore_ascii_case("z") {
            return None;
        }

        // Shift decides first so Primary+Shift+Z never undoes
        if event.modifiers.shift {
            Some(KeyCommand::Redo)
        } else {
            Some(KeyCommand::Undo)
        }
    }

    fn primary_held(&self, modifiers: &Modifiers) -> bool {
        match self.modifier {
            PrimaryModifier::Meta => modifiers.meta,
            PrimaryModifier::Control => modifiers.ctrl,
        }
    }
}
