use annotation::SnapshotError;
use thiserror::Error;

use crate::capture::CaptureError;
use crate::submit::SubmissionError;

/// Errors surfaced by the feedback widget and its sessions
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Screenshot could not be taken; no session was opened
    #[error("Screen capture failed: {0}")]
    Capture(#[from] CaptureError),

    #[error("Submission failed: {0}")]
    Submission(#[from] SubmissionError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Feedback session is already closed")]
    SessionClosed,
}
