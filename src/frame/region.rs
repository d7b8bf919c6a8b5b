//! Central sampling region geometry.
//!
//! PPG needs a statistical average over the middle of the frame (where the
//! fingertip sits against the lens), not per-pixel fidelity. The region is a
//! square around the frame center with a radius of 20% of the shorter
//! dimension, walked with a coarse stride.

/// Clamped square sampling region, iterated with a fixed pixel stride.
///
/// Bounds are inclusive and always inside the frame; construction clamps
/// before any indexing happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRegion {
    /// Leftmost sampled column.
    pub x0: u32,
    /// Topmost sampled row.
    pub y0: u32,
    /// Rightmost sampled column (inclusive).
    pub x1: u32,
    /// Bottommost sampled row (inclusive).
    pub y1: u32,
    /// Stride in pixels along both axes.
    pub step: u32,
}

impl SampleRegion {
    /// Build the region centered on a `width` x `height` frame.
    ///
    /// `fraction` is the radius as a share of the shorter dimension (0.20 for
    /// the standard fingertip region). Requires `width > 0 && height > 0`;
    /// callers gate on that before constructing.
    pub fn centered(width: u32, height: u32, fraction: f32, step: u32) -> Self {
        let radius = (fraction.max(0.0) * width.min(height) as f32) as u32;
        let cx = width / 2;
        let cy = height / 2;

        Self {
            x0: cx.saturating_sub(radius),
            y0: cy.saturating_sub(radius),
            x1: (cx + radius).min(width.saturating_sub(1)),
            y1: (cy + radius).min(height.saturating_sub(1)),
            step: step.max(1),
        }
    }

    /// Whether the region contains no sample positions.
    pub fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    /// Iterate sample coordinates `(x, y)` row-major with the region stride.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let step = self.step as usize;
        (self.y0..=self.y1).step_by(step).flat_map(move |y| {
            (self.x0..=self.x1)
                .step_by(step)
                .map(move |x| (x, y))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_geometry() {
        // 640x480: radius = 0.2 * 480 = 96, center (320, 240)
        let region = SampleRegion::centered(640, 480, 0.2, 4);
        assert_eq!(region.x0, 224);
        assert_eq!(region.x1, 416);
        assert_eq!(region.y0, 144);
        assert_eq!(region.y1, 336);
        assert!(!region.is_empty());
    }

    #[test]
    fn test_region_clamped_to_frame() {
        // Radius larger than half the frame clamps to the frame edge
        let region = SampleRegion::centered(10, 10, 0.9, 1);
        assert_eq!(region.x0, 0);
        assert!(region.x1 <= 9);
        assert!(region.y1 <= 9);
    }

    #[test]
    fn test_single_pixel_frame() {
        let region = SampleRegion::centered(1, 1, 0.2, 4);
        assert!(!region.is_empty());
        assert_eq!(region.iter().count(), 1);
    }

    #[test]
    fn test_stride_reduces_samples() {
        let dense = SampleRegion::centered(100, 100, 0.2, 1);
        let coarse = SampleRegion::centered(100, 100, 0.2, 4);
        assert!(coarse.iter().count() < dense.iter().count());
    }

    #[test]
    fn test_iteration_is_deterministic() {
        let region = SampleRegion::centered(320, 240, 0.2, 4);
        let a: Vec<_> = region.iter().collect();
        let b: Vec<_> = region.iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_step_coerced_to_one() {
        let region = SampleRegion::centered(16, 16, 0.2, 0);
        assert_eq!(region.step, 1);
        assert!(region.iter().count() > 0);
    }
}
