//! CPU surface for annotations - straight-alpha RGBA8 storage

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// An RGBA8 CPU surface for annotating
/// Stores pixels as [u8; 4] with straight (non-premultiplied) alpha
pub struct CpuSurface {
    /// Surface dimensions
    pub width: u32,
    pub height: u32,
    /// Pixel data in row-major order, each pixel is [r, g, b, a]
    pixels: Vec<[u8; 4]>,
}

impl CpuSurface {
    /// Create a new surface with the given dimensions, initialized to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 0]; pixel_count],
        }
    }

    /// Create a surface holding a copy of the given image
    pub fn from_image(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            pixels: image.pixels().map(|p| p.0).collect(),
        }
    }

    /// Clear the surface to a solid color
    pub fn clear(&mut self, color: [u8; 4]) {
        self.pixels.fill(color);
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set a pixel at the given coordinates
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Composite a color over an existing pixel (source-over)
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let dst = self.pixels[i];

        let src_alpha = color[3] as f32 / 255.0;
        if src_alpha >= 1.0 {
            self.pixels[i] = color;
            return;
        }
        let dst_alpha = dst[3] as f32 / 255.0;
        let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
        if out_alpha <= 0.0 {
            self.pixels[i] = [0, 0, 0, 0];
            return;
        }

        let channel = |c: usize| {
            let src = color[c] as f32 * src_alpha;
            let dst = dst[c] as f32 * dst_alpha * (1.0 - src_alpha);
            ((src + dst) / out_alpha).round().clamp(0.0, 255.0) as u8
        };
        self.pixels[i] = [
            channel(0),
            channel(1),
            channel(2),
            (out_alpha * 255.0).round() as u8,
        ];
    }

    /// Erase a pixel (destination-out)
    /// The erase_amount (0-1) determines how much alpha is removed
    #[inline]
    pub fn erase_pixel(&mut self, x: u32, y: u32, erase_amount: f32) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let dst = self.pixels[i];
        let remaining = (1.0 - erase_amount).clamp(0.0, 1.0);
        let alpha = (dst[3] as f32 * remaining).round() as u8;

        // Fully cleared pixels carry no colour
        self.pixels[i] = if alpha == 0 {
            [0, 0, 0, 0]
        } else {
            [dst[0], dst[1], dst[2], alpha]
        };
    }

    /// Replace the whole surface content with an image
    ///
    /// Images of a different size are scaled to the surface dimensions.
    pub fn replace_with(&mut self, image: &RgbaImage) {
        if image.dimensions() == (self.width, self.height) {
            for (dst, src) in self.pixels.iter_mut().zip(image.pixels()) {
                *dst = src.0;
            }
            return;
        }

        let scaled = imageops::resize(image, self.width, self.height, FilterType::Nearest);
        for (dst, src) in self.pixels.iter_mut().zip(scaled.pixels()) {
            *dst = src.0;
        }
    }

    /// Copy the surface into an owned image
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let i = (y as usize) * (self.width as usize) + (x as usize);
            Rgba(self.pixels[i])
        })
    }

    /// Get raw pixel data as RGBA8 bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Get the total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Get direct access to pixel data
    #[inline]
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }
}
