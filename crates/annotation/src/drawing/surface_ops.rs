//! Surface operations for the drawing surface

use image::RgbaImage;
use tracing::debug;

use crate::coords::SurfaceLayout;
use crate::snapshot::{Snapshot, SnapshotError};
use crate::surface::CpuSurface;

use super::DrawingSurface;

impl DrawingSurface {
    /// Resize the surface to the image and paint it
    ///
    /// Any active stroke is dropped and the layout is reset to identity.
    pub fn load_image(&mut self, image: &RgbaImage) {
        debug!(
            "Loading {}x{} image into drawing surface",
            image.width(),
            image.height()
        );
        self.surface = CpuSurface::from_image(image);
        self.layout = SurfaceLayout::identity(self.surface.width, self.surface.height);
        self.last_pos = None;
    }

    /// Encode the current content for transmission
    pub fn current_content_as_image(&self) -> Result<Snapshot, SnapshotError> {
        Snapshot::encode(&self.surface)
    }

    /// Replace the whole surface with a snapshot
    ///
    /// The snapshot is decoded before anything is touched, so a decode
    /// failure leaves the surface unchanged.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let image = snapshot.decode()?;
        self.surface.replace_with(&image);
        Ok(())
    }
}
