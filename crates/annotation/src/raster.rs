//! Segment rasterization for freehand strokes

use glam::Vec2;
use tracing::trace;

use crate::surface::CpuSurface;
use crate::types::BlendMode;

impl CpuSurface {
    /// Stamp a round-capped line segment onto the surface
    ///
    /// Every pixel whose center lies within `width / 2` of the segment is
    /// covered. `Normal` composites `color` over the pixel, `Erase` clears it
    /// to transparent. A zero-length segment stamps a single dot.
    ///
    /// Returns bounding box of affected region (x, y, width, height), or None
    /// if the segment lies completely outside the surface.
    pub fn apply_segment(
        &mut self,
        from: Vec2,
        to: Vec2,
        width: f32,
        color: [u8; 4],
        blend_mode: BlendMode,
    ) -> Option<(u32, u32, u32, u32)> {
        let radius = width / 2.0;
        if radius <= 0.0 {
            return None;
        }

        let min = from.min(to) - Vec2::splat(radius);
        let max = from.max(to) + Vec2::splat(radius);

        // Clamp to surface bounds
        let x_min = (min.x.floor().max(0.0) as u32).min(self.width);
        let y_min = (min.y.floor().max(0.0) as u32).min(self.height);
        let x_max = (max.x.ceil().max(0.0) as u32).min(self.width);
        let y_max = (max.y.ceil().max(0.0) as u32).min(self.height);

        if x_min >= x_max || y_min >= y_max {
            return None;
        }

        let radius_sq = radius * radius;
        for py in y_min..y_max {
            for px in x_min..x_max {
                let center = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                if distance_sq_to_segment(center, from, to) > radius_sq {
                    continue;
                }
                match blend_mode {
                    BlendMode::Normal => self.blend_pixel(px, py, color),
                    BlendMode::Erase => self.erase_pixel(px, py, 1.0),
                }
            }
        }

        trace!(
            "apply_segment: ({:.1}, {:.1}) -> ({:.1}, {:.1}), width={:.1}, mode={:?}",
            from.x, from.y, to.x, to.y, width, blend_mode
        );

        Some((x_min, y_min, x_max - x_min, y_max - y_min))
    }
}

/// Squared distance from `point` to the closed segment `a`-`b`
#[inline]
pub fn distance_sq_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance_squared(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance_squared(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];

    #[test]
    fn test_distance_to_segment() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);

        assert_eq!(distance_sq_to_segment(Vec2::new(5.0, 3.0), a, b), 9.0);
        // Beyond the end the distance is measured to the endpoint
        assert_eq!(distance_sq_to_segment(Vec2::new(13.0, 4.0), a, b), 25.0);
        // Degenerate segment
        assert_eq!(distance_sq_to_segment(Vec2::new(3.0, 4.0), a, a), 25.0);
    }

    #[test]
    fn test_apply_segment_paints_line() {
        let mut surface = CpuSurface::new(64, 64);
        let result = surface.apply_segment(
            Vec2::new(10.0, 32.0),
            Vec2::new(50.0, 32.0),
            4.0,
            RED,
            BlendMode::Normal,
        );

        assert!(result.is_some());
        assert_eq!(surface.get_pixel(30, 32), Some(RED));
        assert_eq!(surface.get_pixel(30, 31), Some(RED));
        // Well outside the stroke width
        assert_eq!(surface.get_pixel(30, 40), Some([0, 0, 0, 0]));
        // Round cap extends past the endpoint by the radius only
        assert_eq!(surface.get_pixel(51, 32), Some(RED));
        assert_eq!(surface.get_pixel(54, 32), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_apply_segment_erase() {
        let mut surface = CpuSurface::new(32, 32);
        surface.clear(RED);

        surface.apply_segment(
            Vec2::new(16.0, 0.0),
            Vec2::new(16.0, 32.0),
            6.0,
            [0, 0, 0, 255],
            BlendMode::Erase,
        );

        assert_eq!(surface.get_pixel(16, 10), Some([0, 0, 0, 0]));
        assert_eq!(surface.get_pixel(2, 10), Some(RED));
    }

    #[test]
    fn test_apply_segment_outside() {
        let mut surface = CpuSurface::new(16, 16);
        let result = surface.apply_segment(
            Vec2::new(-50.0, -50.0),
            Vec2::new(-40.0, -40.0),
            4.0,
            RED,
            BlendMode::Normal,
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_apply_segment_clipped_bounds() {
        let mut surface = CpuSurface::new(16, 16);
        let (x, y, w, h) = surface
            .apply_segment(
                Vec2::new(-4.0, 8.0),
                Vec2::new(8.0, 8.0),
                2.0,
                RED,
                BlendMode::Normal,
            )
            .unwrap();
        assert_eq!((x, y), (0, 7));
        assert_eq!((w, h), (9, 2));
    }
}
