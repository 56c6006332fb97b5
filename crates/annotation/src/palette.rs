//! Fixed colour palette for annotation strokes
//!
//! The palette order is the order colour buttons are offered to the user.
//! The eraser is a [`BlendMode`](crate::types::BlendMode), not a palette entry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named stroke colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    #[default]
    Black,
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
}

impl PaletteColor {
    /// All palette colours in display order
    pub const ALL: [PaletteColor; 7] = [
        PaletteColor::Black,
        PaletteColor::Red,
        PaletteColor::Blue,
        PaletteColor::Green,
        PaletteColor::Yellow,
        PaletteColor::Orange,
        PaletteColor::Purple,
    ];

    /// CSS colour keyword for this entry
    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Black => "black",
            PaletteColor::Red => "red",
            PaletteColor::Blue => "blue",
            PaletteColor::Green => "green",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Orange => "orange",
            PaletteColor::Purple => "purple",
        }
    }

    /// Opaque RGBA8 value matching the CSS keyword
    pub fn rgba(self) -> [u8; 4] {
        match self {
            PaletteColor::Black => [0, 0, 0, 255],
            PaletteColor::Red => [255, 0, 0, 255],
            PaletteColor::Blue => [0, 0, 255, 255],
            PaletteColor::Green => [0, 128, 0, 255],
            PaletteColor::Yellow => [255, 255, 0, 255],
            PaletteColor::Orange => [255, 165, 0, 255],
            PaletteColor::Purple => [128, 0, 128, 255],
        }
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a colour name is not part of the palette
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown palette colour: {0}")]
pub struct UnknownColor(pub String);

impl FromStr for PaletteColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PaletteColor::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}
