//! Redline - screenshot feedback widget
//!
//! Captures the screen, lets the user draw freehand annotations over the
//! capture with bounded undo/redo, and submits the annotated image together
//! with a short feedback form.
//!
//! - [`capture`]: screen capture backends
//! - [`input`]: pointer and keyboard routing
//! - [`replay`]: drives a session from a scripted event file
//! - [`session`]: an open popup and its event loop
//! - [`submit`]: destinations for finished feedback
//! - [`widget`]: opens sessions on top of a fresh capture

pub mod capture;
pub mod error;
pub mod input;
pub mod logging;
pub mod replay;
pub mod session;
pub mod submit;
pub mod widget;

pub use capture::{CaptureError, CaptureRegion, FileCapture, ScreenCapture, StaticCapture};
pub use error::WidgetError;
pub use input::{KeyCommand, KeyRouter};
pub use replay::{ReplayError, ReplayOptions, replay};
pub use session::{EventOutcome, FeedbackSession, SessionEnd};
pub use submit::{ChannelSink, JsonFileSink, LogSink, SubmissionError, SubmissionSink};
pub use widget::FeedbackWidget;
