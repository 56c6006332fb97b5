//! Encoded raster snapshots
//!
//! A [`Snapshot`] is an immutable PNG image of the whole surface. History
//! never looks inside it: snapshots are produced by encoding the surface and
//! consumed by decoding them back over it.

use std::fmt;
use std::io::Cursor;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat, RgbaImage};
use thiserror::Error;

use crate::surface::CpuSurface;

/// MIME type of encoded snapshots
pub const SNAPSHOT_MIME: &str = "image/png";

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to encode {width}x{height} surface: {source}")]
    Encode {
        width: u32,
        height: u32,
        #[source]
        source: image::ImageError,
    },
    #[error("Failed to decode snapshot: {0}")]
    Decode(#[source] image::ImageError),
}

/// Immutable encoded image of the full surface
///
/// Clones share the encoded bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot {
    bytes: Arc<[u8]>,
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl Snapshot {
    /// Encode the surface as PNG
    pub fn encode(surface: &CpuSurface) -> Result<Self, SnapshotError> {
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes)
            .write_image(
                surface.as_bytes(),
                surface.width,
                surface.height,
                ExtendedColorType::Rgba8,
            )
            .map_err(|source| SnapshotError::Encode {
                width: surface.width,
                height: surface.height,
                source,
            })?;
        Ok(Self::from_encoded(bytes))
    }

    /// Wrap already encoded image bytes
    pub fn from_encoded(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Decode back into an RGBA8 image
    pub fn decode(&self) -> Result<RgbaImage, SnapshotError> {
        let image = image::load(Cursor::new(&self.bytes[..]), ImageFormat::Png)
            .map_err(SnapshotError::Decode)?;
        Ok(image.into_rgba8())
    }

    /// Encoded bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `data:image/png;base64,...` form used in submission payloads
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", SNAPSHOT_MIME, STANDARD.encode(&self.bytes))
    }
}
