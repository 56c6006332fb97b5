//! Submission sinks for finished feedback

use std::path::PathBuf;

use redline_ipc::FeedbackPayload;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::info;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Failed to write feedback: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize feedback: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Feedback receiver has gone away")]
    Disconnected,
}

/// Trait for destinations of submitted feedback
#[allow(async_fn_in_trait)]
pub trait SubmissionSink {
    async fn submit(&mut self, payload: FeedbackPayload) -> Result<(), SubmissionError>;
}

/// Logs each submission
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    async fn submit(&mut self, payload: FeedbackPayload) -> Result<(), SubmissionError> {
        info!(
            first_name = %payload.form.first_name,
            last_name = %payload.form.last_name,
            email = %payload.form.email,
            subject = %payload.form.subject,
            description = %payload.form.description,
            screenshot_len = payload.screenshot.len(),
            "Feedback submitted"
        );
        Ok(())
    }
}

/// Writes each submission as pretty-printed JSON, replacing the previous one
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SubmissionSink for JsonFileSink {
    async fn submit(&mut self, payload: FeedbackPayload) -> Result<(), SubmissionError> {
        let json = serde_json::to_vec_pretty(&payload)?;
        tokio::fs::write(&self.path, json).await?;
        info!("Feedback written to {}", self.path.display());
        Ok(())
    }
}

/// Forwards submissions to a receiver owned by the host
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<FeedbackPayload>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<FeedbackPayload>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl SubmissionSink for ChannelSink {
    async fn submit(&mut self, payload: FeedbackPayload) -> Result<(), SubmissionError> {
        self.tx
            .send(payload)
            .map_err(|_| SubmissionError::Disconnected)
    }
}
