use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_STROKE_WIDTH, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
use crate::palette::PaletteColor;

/// Blend modes for stroke segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum BlendMode {
    /// Paint the stroke colour over existing pixels
    #[default]
    Normal = 0,
    /// Clear covered pixels to transparent
    Erase = 1,
}

/// Style applied to the next stroke segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawStyle {
    /// Palette colour used in `Normal` mode
    pub color: PaletteColor,
    /// Stroke diameter in surface pixels
    pub width: u32,
    /// Compositing mode
    pub mode: BlendMode,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            color: PaletteColor::default(),
            width: DEFAULT_STROKE_WIDTH,
            mode: BlendMode::Normal,
        }
    }
}

impl DrawStyle {
    /// Whether strokes currently erase instead of paint
    pub fn is_erasing(&self) -> bool {
        self.mode == BlendMode::Erase
    }
}

/// Clamp a requested stroke width into the slider range
pub fn clamp_stroke_width(width: u32) -> u32 {
    width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
}
