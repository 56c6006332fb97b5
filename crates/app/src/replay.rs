//! Scripted session replay against a screenshot file
//!
//! Backs the `redline` binary: the script's events are fed through a
//! channel into [`FeedbackSession::run`](crate::FeedbackSession::run) exactly
//! as a live host would send them.

use std::path::{Path, PathBuf};

use redline_config::RedlineConfig;
use redline_ipc::{FeedbackPayload, IpcError};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::capture::FileCapture;
use crate::error::WidgetError;
use crate::session::SessionEnd;
use crate::submit::{JsonFileSink, LogSink, SubmissionError, SubmissionSink};
use crate::widget::FeedbackWidget;

const EVENT_QUEUE_DEPTH: usize = 64;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid session script: {0}")]
    Script(#[from] IpcError),

    #[error(transparent)]
    Widget(#[from] WidgetError),

    #[error("Event producer failed: {0}")]
    Producer(#[from] tokio::task::JoinError),
}

/// Inputs and outputs of one replay
#[derive(Debug, Clone)]
pub struct ReplayOptions {
    /// Screenshot used as the capture
    pub screenshot: PathBuf,
    /// JSON array of session events
    pub script: PathBuf,
    /// Payload destination; logged when unset
    pub payload: Option<PathBuf>,
    /// Where to write the final surface as PNG
    pub output: Option<PathBuf>,
}

/// Sink chosen by [`ReplayOptions::payload`]
pub enum ReplaySink {
    Log(LogSink),
    File(JsonFileSink),
}

impl ReplaySink {
    pub fn for_path(path: Option<&Path>) -> Self {
        match path {
            Some(path) => ReplaySink::File(JsonFileSink::new(path)),
            None => ReplaySink::Log(LogSink),
        }
    }
}

impl SubmissionSink for ReplaySink {
    async fn submit(&mut self, payload: FeedbackPayload) -> Result<(), SubmissionError> {
        match self {
            ReplaySink::Log(sink) => sink.submit(payload).await,
            ReplaySink::File(sink) => sink.submit(payload).await,
        }
    }
}

/// Open a session over the screenshot and drive it with the script
pub async fn replay(
    config: RedlineConfig,
    options: &ReplayOptions,
) -> Result<SessionEnd, ReplayError> {
    let script = tokio::fs::read_to_string(&options.script)
        .await
        .map_err(|source| ReplayError::Read {
            path: options.script.clone(),
            source,
        })?;
    let events = redline_ipc::parse_script(&script)?;
    info!("Replaying {} events", events.len());

    let mut widget = FeedbackWidget::new(config, FileCapture::new(&options.screenshot));
    let mut session = widget.open().await?;

    let (tx, rx) = mpsc::channel(EVENT_QUEUE_DEPTH);
    let producer = tokio::spawn(async move {
        for event in events {
            if tx.send(event).await.is_err() {
                break;
            }
        }
    });

    let mut sink = ReplaySink::for_path(options.payload.as_deref());
    let end = session.run(rx, &mut sink).await?;
    producer.await?;

    match end {
        SessionEnd::Submitted => info!("Feedback submitted"),
        SessionEnd::Cancelled => info!("Feedback cancelled"),
        SessionEnd::Disconnected => warn!("Script ended without submit or cancel"),
    }

    if let Some(path) = &options.output {
        let snapshot = session
            .annotator()
            .current_content_as_image()
            .map_err(WidgetError::from)?;
        tokio::fs::write(path, snapshot.as_bytes())
            .await
            .map_err(|source| ReplayError::Write {
                path: path.clone(),
                source,
            })?;
        info!("Annotated surface written to {}", path.display());
    }

    Ok(end)
}
