//! Stroke handling for the drawing surface

use glam::Vec2;
use tracing::debug;

use super::DrawingSurface;

impl DrawingSurface {
    /// Begin a stroke at a client position
    ///
    /// Nothing is painted until the stroke is extended. Ignored while a
    /// stroke is already active.
    pub fn begin_stroke(&mut self, client: Vec2) {
        if self.last_pos.is_some() {
            debug!("begin_stroke: stroke already active, ignoring");
            return;
        }
        let pos = self.to_surface(client);
        debug!("begin_stroke at ({:.1}, {:.1})", pos.x, pos.y);
        self.last_pos = Some(pos);
    }

    /// Continue the active stroke to a client position
    ///
    /// Paints the segment from the last position immediately using the
    /// current style.
    pub fn extend_stroke(&mut self, client: Vec2) {
        let Some(last) = self.last_pos else {
            return;
        };
        let pos = self.to_surface(client);

        let style = self.style;
        self.surface.apply_segment(
            last,
            pos,
            style.width as f32,
            style.color.rgba(),
            style.mode,
        );
        self.last_pos = Some(pos);
    }

    /// End the active stroke
    ///
    /// Returns true if a stroke was finalized. Returns false when no stroke
    /// was active, so a pointer-up followed by a pointer-leave finishes the
    /// stroke once.
    pub fn end_stroke(&mut self) -> bool {
        if self.last_pos.take().is_none() {
            return false;
        }
        debug!("end_stroke");
        true
    }

    /// Drop the active stroke without reporting it
    ///
    /// Painted segments stay on the surface.
    pub fn cancel_stroke(&mut self) {
        self.last_pos = None;
    }

    /// Check if a stroke is currently in progress
    pub fn is_stroking(&self) -> bool {
        self.last_pos.is_some()
    }

    fn to_surface(&self, client: Vec2) -> Vec2 {
        self.layout
            .to_surface(client, self.surface.width, self.surface.height)
    }
}
