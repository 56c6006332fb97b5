//! Drawing surface and history wired together
//!
//! The annotator is the only owner of both pieces:
//! 1. Strokes go to the [`DrawingSurface`]
//! 2. A finished stroke is encoded and committed to [`History`]
//! 3. Undo/redo pick a snapshot from history and restore it onto the surface
//!
//! Every operation takes `&mut self`, so a restore always completes before
//! the next stroke or history command can run.

use glam::Vec2;
use image::RgbaImage;
use tracing::{debug, info};

use crate::coords::SurfaceLayout;
use crate::drawing::DrawingSurface;
use crate::history::History;
use crate::palette::PaletteColor;
use crate::snapshot::{Snapshot, SnapshotError};
use crate::types::DrawStyle;

/// Annotation canvas with bounded snapshot undo/redo
pub struct Annotator {
    drawing: DrawingSurface,
    history: History,
}

impl Annotator {
    /// Create an annotator over a transparent surface with empty history
    pub fn new(width: u32, height: u32, history_limit: usize) -> Self {
        Self {
            drawing: DrawingSurface::new(width, height),
            history: History::new(history_limit),
        }
    }

    /// Create an annotator showing a captured image
    ///
    /// The captured content becomes the first history entry.
    pub fn from_capture(image: &RgbaImage, history_limit: usize) -> Result<Self, SnapshotError> {
        let mut annotator = Self::new(0, 0, history_limit);
        annotator.load_capture(image)?;
        Ok(annotator)
    }

    /// Replace the surface with a captured image and start history from it
    pub fn load_capture(&mut self, image: &RgbaImage) -> Result<(), SnapshotError> {
        self.drawing.load_image(image);
        let snapshot = self.drawing.current_content_as_image()?;
        self.history = History::new(self.history.limit());
        self.history.commit(snapshot);
        info!(
            "Annotation surface ready: {}x{}",
            self.drawing.width(),
            self.drawing.height()
        );
        Ok(())
    }

    pub fn begin_stroke(&mut self, client: Vec2) {
        self.drawing.begin_stroke(client);
    }

    pub fn extend_stroke(&mut self, client: Vec2) {
        self.drawing.extend_stroke(client);
    }

    /// End the active stroke and commit the resulting surface
    ///
    /// Returns false (and commits nothing) if no stroke was active.
    pub fn end_stroke(&mut self) -> Result<bool, SnapshotError> {
        if !self.drawing.end_stroke() {
            return Ok(false);
        }
        let snapshot = self.drawing.current_content_as_image()?;
        self.history.commit(snapshot);
        debug!("Committed stroke ({} undo entries)", self.history.undo_len());
        Ok(true)
    }

    /// Undo the last committed stroke
    ///
    /// Returns true if the surface was restored. Ignored while a stroke is
    /// in progress. A snapshot that fails to decode leaves both the surface
    /// and the history untouched.
    pub fn undo(&mut self) -> Result<bool, SnapshotError> {
        if self.drawing.is_stroking() {
            debug!("Undo ignored: stroke in progress");
            return Ok(false);
        }
        let Some(snapshot) = self.history.peek_undo().cloned() else {
            return Ok(false);
        };
        // History only moves once the surface shows the target state
        self.drawing.restore(&snapshot)?;
        self.history.undo();
        Ok(true)
    }

    /// Redo the last undone stroke
    ///
    /// Returns true if the surface was restored. Ignored while a stroke is
    /// in progress.
    pub fn redo(&mut self) -> Result<bool, SnapshotError> {
        if self.drawing.is_stroking() {
            debug!("Redo ignored: stroke in progress");
            return Ok(false);
        }
        let Some(snapshot) = self.history.peek_redo().cloned() else {
            return Ok(false);
        };
        self.drawing.restore(&snapshot)?;
        self.history.redo();
        Ok(true)
    }

    pub fn set_color(&mut self, color: PaletteColor) {
        self.drawing.set_color(color);
    }

    pub fn set_eraser(&mut self) {
        self.drawing.set_eraser();
    }

    pub fn set_width(&mut self, width: u32) {
        self.drawing.set_width(width);
    }

    pub fn set_layout(&mut self, layout: SurfaceLayout) {
        self.drawing.set_layout(layout);
    }

    pub fn style(&self) -> DrawStyle {
        self.drawing.style()
    }

    /// Encode the current content for submission
    pub fn current_content_as_image(&self) -> Result<Snapshot, SnapshotError> {
        self.drawing.current_content_as_image()
    }

    pub fn drawing(&self) -> &DrawingSurface {
        &self.drawing
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryState;
    use image::Rgba;

    fn white_capture() -> RgbaImage {
        RgbaImage::from_pixel(64, 64, Rgba([255, 255, 255, 255]))
    }

    fn stroke(annotator: &mut Annotator, from: (f32, f32), to: (f32, f32)) {
        annotator.begin_stroke(Vec2::new(from.0, from.1));
        annotator.extend_stroke(Vec2::new(to.0, to.1));
        annotator.end_stroke().unwrap();
    }

    fn content(annotator: &Annotator) -> Snapshot {
        annotator.current_content_as_image().unwrap()
    }

    #[test]
    fn test_capture_is_first_history_entry() {
        let annotator = Annotator::from_capture(&white_capture(), 30).unwrap();
        assert_eq!(annotator.history().state(), HistoryState::HasHistory);
        assert_eq!(annotator.history().undo_len(), 1);
        assert_eq!(annotator.history().current(), Some(&content(&annotator)));
    }

    #[test]
    fn test_undo_never_clears_capture() {
        let mut annotator = Annotator::from_capture(&white_capture(), 30).unwrap();
        let captured = content(&annotator);

        assert!(!annotator.undo().unwrap());
        assert_eq!(content(&annotator), captured);
    }

    #[test]
    fn test_undo_undo_redo_restores_surface() {
        let mut annotator = Annotator::from_capture(&white_capture(), 30).unwrap();
        let s0 = content(&annotator);
        stroke(&mut annotator, (0.0, 10.0), (64.0, 10.0));
        let s1 = content(&annotator);
        stroke(&mut annotator, (0.0, 30.0), (64.0, 30.0));
        let s2 = content(&annotator);
        stroke(&mut annotator, (0.0, 50.0), (64.0, 50.0));

        assert!(annotator.undo().unwrap());
        assert_eq!(content(&annotator), s2);
        assert!(annotator.undo().unwrap());
        assert_eq!(content(&annotator), s1);
        assert!(annotator.redo().unwrap());
        assert_eq!(content(&annotator), s2);

        assert!(annotator.undo().unwrap());
        assert!(annotator.undo().unwrap());
        assert_eq!(content(&annotator), s0);
    }

    #[test]
    fn test_commit_undo_redo_round_trip() {
        let mut annotator = Annotator::from_capture(&white_capture(), 30).unwrap();
        annotator.set_color(PaletteColor::Green);
        stroke(&mut annotator, (5.0, 5.0), (60.0, 60.0));
        let before_undo = content(&annotator);

        annotator.undo().unwrap();
        assert_ne!(content(&annotator), before_undo);
        annotator.redo().unwrap();
        assert_eq!(content(&annotator), before_undo);
    }

    #[test]
    fn test_new_stroke_clears_redo() {
        let mut annotator = Annotator::from_capture(&white_capture(), 30).unwrap();
        stroke(&mut annotator, (0.0, 10.0), (64.0, 10.0));
        annotator.undo().unwrap();
        assert!(annotator.history().can_redo());

        stroke(&mut annotator, (0.0, 20.0), (64.0, 20.0));
        assert!(!annotator.history().can_redo());
        assert!(!annotator.redo().unwrap());
    }

    #[test]
    fn test_duplicate_end_commits_once() {
        let mut annotator = Annotator::from_capture(&white_capture(), 30).unwrap();
        annotator.begin_stroke(Vec2::new(1.0, 1.0));
        annotator.extend_stroke(Vec2::new(20.0, 1.0));

        assert!(annotator.end_stroke().unwrap());
        assert!(!annotator.end_stroke().unwrap());
        assert_eq!(annotator.history().undo_len(), 2);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut annotator = Annotator::from_capture(&white_capture(), 30).unwrap();
        for i in 0..35 {
            let y = i as f32;
            stroke(&mut annotator, (0.0, y), (64.0, y));
        }
        assert_eq!(annotator.history().undo_len(), 30);
        assert_eq!(annotator.history().current(), Some(&content(&annotator)));
    }

    #[test]
    fn test_undo_ignored_mid_stroke() {
        let mut annotator = Annotator::from_capture(&white_capture(), 30).unwrap();
        stroke(&mut annotator, (0.0, 10.0), (64.0, 10.0));

        annotator.begin_stroke(Vec2::new(0.0, 40.0));
        assert!(!annotator.undo().unwrap());
        assert_eq!(annotator.history().undo_len(), 2);
    }

    #[test]
    fn test_failed_undo_keeps_history() {
        let mut annotator = Annotator::from_capture(&white_capture(), 30).unwrap();
        annotator
            .history
            .commit(Snapshot::from_encoded(vec![0u8, 1, 2, 3]));
        stroke(&mut annotator, (0.0, 10.0), (64.0, 10.0));
        let shown = content(&annotator);

        assert!(annotator.undo().is_err());
        assert_eq!(annotator.history().undo_len(), 3);
        assert_eq!(annotator.history().redo_len(), 0);
        assert_eq!(annotator.history().current(), Some(&shown));
        assert_eq!(content(&annotator), shown);
    }

    #[test]
    fn test_failed_redo_keeps_history() {
        let mut annotator = Annotator::from_capture(&white_capture(), 30).unwrap();
        stroke(&mut annotator, (0.0, 10.0), (64.0, 10.0));
        annotator
            .history
            .commit(Snapshot::from_encoded(vec![0u8, 1, 2, 3]));

        // Undo restores the valid stroke and parks the corrupt entry on redo
        assert!(annotator.undo().unwrap());
        let shown = content(&annotator);

        assert!(annotator.redo().is_err());
        assert_eq!(annotator.history().undo_len(), 2);
        assert_eq!(annotator.history().redo_len(), 1);
        assert_eq!(annotator.history().current(), Some(&shown));
        assert_eq!(content(&annotator), shown);
    }
}
