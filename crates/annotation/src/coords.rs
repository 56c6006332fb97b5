//! Client to surface coordinate mapping
//!
//! Pointer positions arrive in client (layout) coordinates. The surface is
//! usually displayed at a different size than its backing resolution, so
//! positions are scaled by `backing_size / layout_size` after subtracting
//! the layout origin.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Where and how large the surface is displayed, in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceLayout {
    /// Top-left corner of the displayed surface
    pub origin: Vec2,
    /// Displayed width and height
    pub size: Vec2,
}

impl SurfaceLayout {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Layout that displays a surface at its backing resolution at the origin
    pub fn identity(backing_width: u32, backing_height: u32) -> Self {
        Self::new(0.0, 0.0, backing_width as f32, backing_height as f32)
    }

    /// Scale factor from client units to surface pixels per axis
    ///
    /// A degenerate layout axis maps 1:1.
    pub fn scale(&self, backing_width: u32, backing_height: u32) -> Vec2 {
        let axis = |backing: u32, displayed: f32| {
            if displayed > 0.0 {
                backing as f32 / displayed
            } else {
                1.0
            }
        };
        Vec2::new(
            axis(backing_width, self.size.x),
            axis(backing_height, self.size.y),
        )
    }

    /// Map a client position to surface pixel coordinates
    pub fn to_surface(&self, client: Vec2, backing_width: u32, backing_height: u32) -> Vec2 {
        (client - self.origin) * self.scale(backing_width, backing_height)
    }
}
