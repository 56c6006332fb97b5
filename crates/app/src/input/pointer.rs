//! Pointer routing onto annotation strokes
//!
//! Left button down starts a stroke, moves extend it, and button up or
//! leaving the surface ends it. Both up and leave may arrive for a single
//! stroke; the second one is a no-op.

use annotation::{Annotator, SnapshotError};
use glam::Vec2;
use redline_ipc::{MouseButton, PointerEvent};

/// Apply a pointer event to the annotator
///
/// Returns true if the event finished a stroke and committed it to history.
pub fn route_pointer(annotator: &mut Annotator, event: &PointerEvent) -> Result<bool, SnapshotError> {
    match *event {
        PointerEvent::ButtonDown {
            button: MouseButton::Left,
            x,
            y,
        } => {
            annotator.begin_stroke(Vec2::new(x, y));
            Ok(false)
        }
        PointerEvent::Move { x, y } => {
            annotator.extend_stroke(Vec2::new(x, y));
            Ok(false)
        }
        PointerEvent::ButtonUp {
            button: MouseButton::Left,
            ..
        }
        | PointerEvent::Leave => annotator.end_stroke(),
        PointerEvent::ButtonDown { .. } | PointerEvent::ButtonUp { .. } => Ok(false),
    }
}
