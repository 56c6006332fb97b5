//! Screen capture collaborators
//!
//! Capture is a one-shot async operation that gates opening a feedback
//! session. Backends produce an RGBA image; a failure is returned to the
//! caller instead of showing an empty surface.

use std::path::PathBuf;

use image::RgbaImage;
use image::imageops;
use redline_config::DisplayConfig;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Failed to read capture source: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode captured image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Captured image is empty ({width}x{height})")]
    Empty { width: u32, height: u32 },

    #[error("Capture backend error: {0}")]
    Backend(String),
}

/// Part of the screen to capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureRegion {
    /// Everything the backend can see
    Full,
    /// A rectangle in physical pixels
    Area {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

impl CaptureRegion {
    /// Region covering the configured display in physical pixels
    pub fn from_display(display: &DisplayConfig) -> Self {
        Self::Area {
            x: 0,
            y: 0,
            width: display.scaled_width(),
            height: display.scaled_height(),
        }
    }

    /// Cut this region out of a full capture, clamped to the image bounds
    pub fn crop(&self, image: &RgbaImage) -> RgbaImage {
        match *self {
            CaptureRegion::Full => image.clone(),
            CaptureRegion::Area {
                x,
                y,
                width,
                height,
            } => {
                let x = x.min(image.width());
                let y = y.min(image.height());
                let width = width.min(image.width() - x);
                let height = height.min(image.height() - y);
                imageops::crop_imm(image, x, y, width, height).to_image()
            }
        }
    }
}

/// Trait for screen capture backends
#[allow(async_fn_in_trait)]
pub trait ScreenCapture {
    /// Capture the given region
    async fn capture(&mut self, region: CaptureRegion) -> Result<RgbaImage, CaptureError>;
}

/// Capture backend reading a screenshot file from disk
#[derive(Debug, Clone)]
pub struct FileCapture {
    path: PathBuf,
}

impl FileCapture {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScreenCapture for FileCapture {
    async fn capture(&mut self, region: CaptureRegion) -> Result<RgbaImage, CaptureError> {
        debug!("Capturing {:?} from {}", region, self.path.display());
        let bytes = tokio::fs::read(&self.path).await?;
        let image = image::load_from_memory(&bytes)?.into_rgba8();
        Ok(region.crop(&image))
    }
}

/// Capture backend returning an image the host already captured
#[derive(Debug, Clone)]
pub struct StaticCapture {
    image: RgbaImage,
}

impl StaticCapture {
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }
}

impl ScreenCapture for StaticCapture {
    async fn capture(&mut self, region: CaptureRegion) -> Result<RgbaImage, CaptureError> {
        Ok(region.crop(&self.image))
    }
}
