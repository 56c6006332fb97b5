//! An open feedback popup: annotation surface plus form submission
//!
//! Events are handled strictly one at a time. A restore triggered by undo
//! or redo finishes inside [`FeedbackSession::handle`] before the next
//! event is looked at, so strokes can never interleave with it.

use annotation::{Annotator, PaletteColor, SurfaceLayout};
use redline_ipc::{AnnotateCommand, FeedbackForm, FeedbackPayload, LayoutRect, SessionEvent};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::error::WidgetError;
use crate::input::{KeyCommand, KeyRouter, route_pointer};
use crate::submit::SubmissionSink;

/// Result of handling one session event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// Session stays open; `prevent_default` asks the host to suppress the
    /// platform action for the event (undo/redo chords)
    Continue { prevent_default: bool },
    /// User submitted the form
    Submit(FeedbackForm),
    /// User cancelled the popup
    Cancel,
}

impl EventOutcome {
    fn handled() -> Self {
        Self::Continue {
            prevent_default: false,
        }
    }
}

/// How [`FeedbackSession::run`] finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Submitted,
    Cancelled,
    /// Event channel closed before submit or cancel
    Disconnected,
}

/// Annotation session opened by [`FeedbackWidget`](crate::FeedbackWidget)
pub struct FeedbackSession {
    annotator: Annotator,
    keys: KeyRouter,
    closed: bool,
}

impl FeedbackSession {
    pub(crate) fn new(annotator: Annotator, keys: KeyRouter) -> Self {
        Self {
            annotator,
            keys,
            closed: false,
        }
    }

    /// Handle a single event
    pub fn handle(&mut self, event: SessionEvent) -> Result<EventOutcome, WidgetError> {
        if self.closed {
            return Err(WidgetError::SessionClosed);
        }

        match event {
            SessionEvent::Pointer(pointer) => {
                route_pointer(&mut self.annotator, &pointer)?;
                Ok(EventOutcome::handled())
            }
            SessionEvent::Key(key) => {
                let Some(command) = self.keys.route(&key) else {
                    return Ok(EventOutcome::handled());
                };
                match command {
                    KeyCommand::Undo => self.annotator.undo()?,
                    KeyCommand::Redo => self.annotator.redo()?,
                };
                Ok(EventOutcome::Continue {
                    prevent_default: true,
                })
            }
            SessionEvent::Command(command) => {
                self.apply_command(&command)?;
                Ok(EventOutcome::handled())
            }
            SessionEvent::Layout(rect) => {
                self.set_layout(rect);
                Ok(EventOutcome::handled())
            }
            SessionEvent::Submit(form) => Ok(EventOutcome::Submit(form)),
            SessionEvent::Cancel => Ok(EventOutcome::Cancel),
        }
    }

    /// Apply a palette, eraser, slider or toolbar command
    pub fn apply_command(&mut self, command: &AnnotateCommand) -> Result<(), WidgetError> {
        match command {
            AnnotateCommand::SetColor { color } => match color.parse::<PaletteColor>() {
                Ok(color) => self.annotator.set_color(color),
                Err(err) => warn!("{}", err),
            },
            AnnotateCommand::SetWidth { width } => self.annotator.set_width(*width),
            AnnotateCommand::Eraser => self.annotator.set_eraser(),
            AnnotateCommand::Undo => {
                self.annotator.undo()?;
            }
            AnnotateCommand::Redo => {
                self.annotator.redo()?;
            }
        }
        Ok(())
    }

    fn set_layout(&mut self, rect: LayoutRect) {
        debug!(
            "Surface laid out at ({:.0}, {:.0}) {}x{}",
            rect.x, rect.y, rect.width, rect.height
        );
        self.annotator
            .set_layout(SurfaceLayout::new(rect.x, rect.y, rect.width, rect.height));
    }

    /// Package the form with the current annotated screenshot
    pub fn build_payload(&self, form: FeedbackForm) -> Result<FeedbackPayload, WidgetError> {
        let screenshot = self.annotator.current_content_as_image()?;
        Ok(FeedbackPayload::new(form, screenshot.to_data_url()))
    }

    /// Submit the form and close the session
    ///
    /// The session is closed whether or not the sink accepts the payload.
    pub async fn submit<S: SubmissionSink>(
        &mut self,
        form: FeedbackForm,
        sink: &mut S,
    ) -> Result<(), WidgetError> {
        if self.closed {
            return Err(WidgetError::SessionClosed);
        }
        let payload = self.build_payload(form)?;
        self.closed = true;
        sink.submit(payload).await?;
        info!("Feedback session submitted");
        Ok(())
    }

    /// Close the session without submitting
    pub fn cancel(&mut self) {
        if !self.closed {
            info!("Feedback session cancelled");
        }
        self.closed = true;
    }

    /// Drain events in order until the form is submitted or cancelled
    pub async fn run<S: SubmissionSink>(
        &mut self,
        mut events: mpsc::Receiver<SessionEvent>,
        sink: &mut S,
    ) -> Result<SessionEnd, WidgetError> {
        while let Some(event) = events.recv().await {
            match self.handle(event)? {
                EventOutcome::Continue { .. } => {}
                EventOutcome::Submit(form) => {
                    self.submit(form, sink).await?;
                    return Ok(SessionEnd::Submitted);
                }
                EventOutcome::Cancel => {
                    self.cancel();
                    return Ok(SessionEnd::Cancelled);
                }
            }
        }
        debug!("Session event channel closed");
        Ok(SessionEnd::Disconnected)
    }

    pub fn annotator(&self) -> &Annotator {
        &self.annotator
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::ChannelSink;
    use annotation::BlendMode;
    use image::{Rgba, RgbaImage};
    use redline_config::PrimaryModifier;
    use redline_ipc::{KeyboardEvent, Modifiers, MouseButton, PointerEvent};

    fn session() -> FeedbackSession {
        let capture = RgbaImage::from_pixel(40, 40, Rgba([255, 255, 255, 255]));
        let annotator = Annotator::from_capture(&capture, 30).unwrap();
        FeedbackSession::new(annotator, KeyRouter::new(PrimaryModifier::Control))
    }

    fn stroke_events(y: f32) -> Vec<SessionEvent> {
        vec![
            SessionEvent::Pointer(PointerEvent::ButtonDown {
                button: MouseButton::Left,
                x: 0.0,
                y,
            }),
            SessionEvent::Pointer(PointerEvent::Move { x: 40.0, y }),
            SessionEvent::Pointer(PointerEvent::ButtonUp {
                button: MouseButton::Left,
                x: 40.0,
                y,
            }),
            SessionEvent::Pointer(PointerEvent::Leave),
        ]
    }

    fn ctrl_z(shift: bool) -> SessionEvent {
        SessionEvent::Key(KeyboardEvent::press(
            if shift { "Z" } else { "z" },
            Modifiers {
                ctrl: true,
                shift,
                ..Default::default()
            },
        ))
    }

    fn form() -> FeedbackForm {
        FeedbackForm {
            first_name: "Alan".to_string(),
            last_name: "Turing".to_string(),
            email: "alan@example.com".to_string(),
            subject: "Button".to_string(),
            description: "Does nothing".to_string(),
        }
    }

    #[test]
    fn test_chords_prevent_default() {
        let mut session = session();
        for event in stroke_events(10.0) {
            session.handle(event).unwrap();
        }

        let outcome = session.handle(ctrl_z(false)).unwrap();
        assert_eq!(outcome, EventOutcome::Continue { prevent_default: true });
        assert_eq!(session.annotator().history().undo_len(), 1);
        assert_eq!(session.annotator().history().redo_len(), 1);

        let outcome = session.handle(ctrl_z(true)).unwrap();
        assert_eq!(outcome, EventOutcome::Continue { prevent_default: true });
        assert_eq!(session.annotator().history().undo_len(), 2);
        assert_eq!(session.annotator().history().redo_len(), 0);
    }

    #[test]
    fn test_plain_key_passes_through() {
        let mut session = session();
        let outcome = session
            .handle(SessionEvent::Key(KeyboardEvent::press("a", Modifiers::default())))
            .unwrap();
        assert_eq!(outcome, EventOutcome::Continue { prevent_default: false });
    }

    #[test]
    fn test_commands_update_style() {
        let mut session = session();
        session
            .apply_command(&AnnotateCommand::SetWidth { width: 12 })
            .unwrap();
        session.apply_command(&AnnotateCommand::Eraser).unwrap();
        assert_eq!(session.annotator().style().mode, BlendMode::Erase);
        assert_eq!(session.annotator().style().width, 12);

        session
            .apply_command(&AnnotateCommand::SetColor {
                color: "orange".to_string(),
            })
            .unwrap();
        assert_eq!(session.annotator().style().color, PaletteColor::Orange);
        assert_eq!(session.annotator().style().mode, BlendMode::Normal);

        // Unknown colours leave the style alone
        session
            .apply_command(&AnnotateCommand::SetColor {
                color: "eraser".to_string(),
            })
            .unwrap();
        assert_eq!(session.annotator().style().color, PaletteColor::Orange);
    }

    #[test]
    fn test_layout_event_rescales_pointer() {
        let mut session = session();
        // 40x40 surface displayed at 20x20 from (100, 100)
        session
            .handle(SessionEvent::Layout(LayoutRect {
                x: 100.0,
                y: 100.0,
                width: 20.0,
                height: 20.0,
            }))
            .unwrap();
        session
            .handle(SessionEvent::Pointer(PointerEvent::ButtonDown {
                button: MouseButton::Left,
                x: 100.0,
                y: 110.0,
            }))
            .unwrap();
        session
            .handle(SessionEvent::Pointer(PointerEvent::Move { x: 120.0, y: 110.0 }))
            .unwrap();

        let surface = session.annotator().drawing().surface();
        assert_eq!(surface.get_pixel(30, 20), Some([0, 0, 0, 255]));
    }

    #[tokio::test]
    async fn test_run_submits_annotated_payload() {
        let mut session = session();
        let (tx, rx) = mpsc::channel(16);
        let (mut sink, mut submitted) = ChannelSink::new();

        for event in stroke_events(20.0) {
            tx.send(event).await.unwrap();
        }
        tx.send(SessionEvent::Submit(form())).await.unwrap();

        let end = session.run(rx, &mut sink).await.unwrap();
        assert_eq!(end, SessionEnd::Submitted);
        assert!(session.is_closed());

        let payload = submitted.recv().await.unwrap();
        assert_eq!(payload.form, form());
        let expected = session.annotator().current_content_as_image().unwrap();
        assert_eq!(payload.screenshot, expected.to_data_url());
    }

    #[tokio::test]
    async fn test_run_cancel_and_closed_session() {
        let mut session = session();
        let (tx, rx) = mpsc::channel(4);
        let (mut sink, mut submitted) = ChannelSink::new();
        tx.send(SessionEvent::Cancel).await.unwrap();

        assert_eq!(session.run(rx, &mut sink).await.unwrap(), SessionEnd::Cancelled);
        assert!(matches!(
            session.handle(ctrl_z(false)),
            Err(WidgetError::SessionClosed)
        ));
        assert!(matches!(
            session.submit(form(), &mut sink).await,
            Err(WidgetError::SessionClosed)
        ));
        drop(sink);
        assert!(submitted.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_run_disconnected() {
        let mut session = session();
        let (tx, rx) = mpsc::channel(4);
        let (mut sink, _submitted) = ChannelSink::new();
        drop(tx);

        let end = session.run(rx, &mut sink).await.unwrap();
        assert_eq!(end, SessionEnd::Disconnected);
        assert!(!session.is_closed());
    }
}
