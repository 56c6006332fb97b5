//! Drawing surface for freehand annotation
//!
//! This module connects:
//! - Pointer input in client coordinates (via [`SurfaceLayout`])
//! - The current [`DrawStyle`] (colour, width, erase mode)
//! - Segment rasterization onto the [`CpuSurface`]
//!
//! Segments are painted as soon as they arrive. History is not owned here:
//! [`DrawingSurface::end_stroke`] only reports that a stroke finished, the
//! [`Annotator`](crate::annotator::Annotator) decides what to commit.

mod stroke;
mod surface_ops;

use tracing::debug;

use crate::coords::SurfaceLayout;
use crate::palette::PaletteColor;
use crate::surface::CpuSurface;
use crate::types::{BlendMode, DrawStyle, clamp_stroke_width};

/// Raster surface plus the state needed to draw strokes on it
pub struct DrawingSurface {
    /// CPU surface strokes are painted into
    pub(crate) surface: CpuSurface,
    /// Style used for the next segment
    pub(crate) style: DrawStyle,
    /// Where the surface is displayed, for pointer mapping
    pub(crate) layout: SurfaceLayout,
    /// Last stroke position in surface pixels (None if not drawing)
    pub(crate) last_pos: Option<glam::Vec2>,
}

impl DrawingSurface {
    /// Create a transparent drawing surface displayed at its own resolution
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_surface(CpuSurface::new(width, height))
    }

    /// Wrap an existing surface
    pub fn from_surface(surface: CpuSurface) -> Self {
        let layout = SurfaceLayout::identity(surface.width, surface.height);
        Self {
            surface,
            style: DrawStyle::default(),
            layout,
            last_pos: None,
        }
    }

    /// Get the surface width
    pub fn width(&self) -> u32 {
        self.surface.width
    }

    /// Get the surface height
    pub fn height(&self) -> u32 {
        self.surface.height
    }

    /// Set the stroke colour and leave erase mode
    pub fn set_color(&mut self, color: PaletteColor) {
        debug!("Stroke colour set to {}", color);
        self.style.color = color;
        self.style.mode = BlendMode::Normal;
    }

    /// Switch to erase mode, keeping the current width
    pub fn set_eraser(&mut self) {
        debug!("Eraser enabled");
        self.style.mode = BlendMode::Erase;
    }

    /// Set the stroke width for following segments
    ///
    /// Values outside the slider range are clamped.
    pub fn set_width(&mut self, width: u32) {
        let clamped = clamp_stroke_width(width);
        if clamped != width {
            debug!("Stroke width {} clamped to {}", width, clamped);
        }
        self.style.width = clamped;
    }

    /// Get the current draw style
    pub fn style(&self) -> DrawStyle {
        self.style
    }

    /// Update where the surface is displayed
    pub fn set_layout(&mut self, layout: SurfaceLayout) {
        self.layout = layout;
    }

    /// Get the current display layout
    pub fn layout(&self) -> SurfaceLayout {
        self.layout
    }

    /// Get the underlying surface for direct pixel access
    pub fn surface(&self) -> &CpuSurface {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const CLEAR: [u8; 4] = [0, 0, 0, 0];

    #[test]
    fn test_drawing_surface_creation() {
        let drawing = DrawingSurface::new(256, 128);
        assert_eq!(drawing.width(), 256);
        assert_eq!(drawing.height(), 128);
        assert_eq!(drawing.style(), DrawStyle::default());
        assert!(!drawing.is_stroking());
    }

    #[test]
    fn test_set_color_cancels_eraser() {
        let mut drawing = DrawingSurface::new(8, 8);
        drawing.set_width(9);
        drawing.set_eraser();
        assert!(drawing.style().is_erasing());
        assert_eq!(drawing.style().width, 9);

        drawing.set_color(PaletteColor::Blue);
        assert!(!drawing.style().is_erasing());
        assert_eq!(drawing.style().color, PaletteColor::Blue);
    }

    #[test]
    fn test_set_width_clamps() {
        let mut drawing = DrawingSurface::new(8, 8);
        drawing.set_width(0);
        assert_eq!(drawing.style().width, 1);
        drawing.set_width(40);
        assert_eq!(drawing.style().width, 20);
    }

    #[test]
    fn test_red_stroke_then_erase() {
        let mut drawing = DrawingSurface::new(100, 40);
        drawing.set_color(PaletteColor::Red);
        drawing.set_width(10);

        drawing.begin_stroke(Vec2::new(10.0, 20.0));
        drawing.extend_stroke(Vec2::new(90.0, 20.0));
        assert!(drawing.end_stroke());

        drawing.set_eraser();
        drawing.begin_stroke(Vec2::new(50.0, 0.0));
        drawing.extend_stroke(Vec2::new(50.0, 40.0));
        assert!(drawing.end_stroke());

        let surface = drawing.surface();
        // Red on both sides of the erased band
        assert_eq!(surface.get_pixel(20, 20), Some(RED));
        assert_eq!(surface.get_pixel(80, 20), Some(RED));
        // Cleared inside it
        assert_eq!(surface.get_pixel(50, 20), Some(CLEAR));
        // Never painted
        assert_eq!(surface.get_pixel(20, 2), Some(CLEAR));
    }

    #[test]
    fn test_width_change_is_not_retroactive() {
        let mut drawing = DrawingSurface::new(64, 64);
        drawing.set_color(PaletteColor::Red);
        drawing.set_width(2);

        drawing.begin_stroke(Vec2::new(0.0, 10.0));
        drawing.extend_stroke(Vec2::new(30.0, 10.0));
        drawing.set_width(20);
        drawing.extend_stroke(Vec2::new(60.0, 10.0));
        drawing.end_stroke();

        let surface = drawing.surface();
        // First segment stayed thin
        assert_eq!(surface.get_pixel(10, 15), Some(CLEAR));
        // Second segment is wide
        assert_eq!(surface.get_pixel(45, 15), Some(RED));
    }
}
