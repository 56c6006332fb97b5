//! Feedback widget entry point

use annotation::{Annotator, PaletteColor};
use redline_config::RedlineConfig;
use tracing::{info, warn};

use crate::capture::{CaptureError, CaptureRegion, ScreenCapture};
use crate::error::WidgetError;
use crate::input::KeyRouter;
use crate::session::FeedbackSession;

/// Opens feedback sessions on top of a fresh screenshot
pub struct FeedbackWidget<C: ScreenCapture> {
    config: RedlineConfig,
    capture: C,
    keys: KeyRouter,
}

impl<C: ScreenCapture> FeedbackWidget<C> {
    pub fn new(config: RedlineConfig, capture: C) -> Self {
        // Platform modifier is resolved once, not per key event
        let keys = KeyRouter::new(config.primary_modifier);
        Self {
            config,
            capture,
            keys,
        }
    }

    /// Capture the screen and open an annotation session over it
    ///
    /// The surface takes the size of whatever was captured. A configured
    /// display limits the capture to that region. No session is opened when
    /// the capture fails.
    pub async fn open(&mut self) -> Result<FeedbackSession, WidgetError> {
        let region = self
            .config
            .display
            .as_ref()
            .map_or(CaptureRegion::Full, CaptureRegion::from_display);
        let image = self.capture.capture(region).await?;
        if image.width() == 0 || image.height() == 0 {
            return Err(CaptureError::Empty {
                width: image.width(),
                height: image.height(),
            }
            .into());
        }

        let settings = &self.config.annotator;
        let mut annotator = Annotator::from_capture(&image, settings.history_limit)?;
        annotator.set_width(settings.default_stroke_width);
        match settings.default_color.parse::<PaletteColor>() {
            Ok(color) => annotator.set_color(color),
            Err(err) => warn!("{}, using {}", err, PaletteColor::default()),
        }

        info!(
            "Opened feedback session on {}x{} capture",
            image.width(),
            image.height()
        );
        Ok(FeedbackSession::new(annotator, self.keys))
    }

    pub fn config(&self) -> &RedlineConfig {
        &self.config
    }
}
