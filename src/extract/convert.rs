//! Color-space conversion kernels.
//!
//! Each kernel averages the red channel (or a luma stand-in) over a sampling
//! region. Out-of-range indices are skipped per pixel rather than aborting
//! the kernel; a kernel that collects zero samples returns `None` and the
//! caller falls back to the neutral value.

use crate::frame::SampleRegion;

/// Recover the red channel from one Y/V pair (ITU-R BT.601).
///
/// `R = Y + 1.402 * (V - 128)`, clamped to `[0, 255]` and rounded.
#[inline]
pub fn bt601_red(y: u8, v: u8) -> f32 {
    (y as f32 + 1.402 * (v as f32 - 128.0)).clamp(0.0, 255.0).round()
}

/// Full ITU-R BT.601 YUV to RGB conversion for one pixel.
pub fn bt601_rgb(y: u8, u: u8, v: u8) -> [u8; 3] {
    let y = y as f32;
    let u = u as f32 - 128.0;
    let v = v as f32 - 128.0;

    let r = (y + 1.402 * v).clamp(0.0, 255.0).round() as u8;
    let g = (y - 0.344 * u - 0.714 * v).clamp(0.0, 255.0).round() as u8;
    let b = (y + 1.772 * u).clamp(0.0, 255.0).round() as u8;
    [r, g, b]
}

/// Mean red intensity over a YUV420 planar frame region.
///
/// Chroma is 4:2:0 subsampled: pixel `(x, y)` maps to chroma index
/// `(x/2, y/2)` against a plane of width `width/2`.
pub(crate) fn red_mean_yuv420(
    y_plane: &[u8],
    v_plane: &[u8],
    width: u32,
    region: &SampleRegion,
) -> Option<f32> {
    let chroma_width = (width / 2).max(1) as usize;
    let width = width as usize;

    let mut sum = 0.0f64;
    let mut count = 0u32;

    for (x, y) in region.iter() {
        let y_idx = y as usize * width + x as usize;
        let c_idx = (y as usize / 2) * chroma_width + x as usize / 2;

        let (Some(&luma), Some(&chroma_v)) = (y_plane.get(y_idx), v_plane.get(c_idx)) else {
            continue;
        };

        sum += bt601_red(luma, chroma_v) as f64;
        count += 1;
    }

    (count > 0).then(|| (sum / count as f64) as f32)
}

/// Mean luminance over a Y-plane region.
///
/// Used when no chroma planes are available. Luma is a stand-in for red
/// intensity: with a finger occluding the lens, red reflectance dominates
/// overall brightness, so this is a deliberate approximation rather than an
/// exact red recovery.
pub(crate) fn luma_mean(y_plane: &[u8], width: u32, region: &SampleRegion) -> Option<f32> {
    let width = width as usize;

    let mut sum = 0.0f64;
    let mut count = 0u32;

    for (x, y) in region.iter() {
        let idx = y as usize * width + x as usize;
        let Some(&luma) = y_plane.get(idx) else {
            continue;
        };
        sum += luma as f64;
        count += 1;
    }

    (count > 0).then(|| (sum / count as f64) as f32)
}

/// Mean red over an interleaved RGB888 buffer region (every 3rd byte).
pub(crate) fn red_mean_rgb(buf: &[u8], width: u32, region: &SampleRegion) -> Option<f32> {
    let width = width as usize;

    let mut sum = 0.0f64;
    let mut count = 0u32;

    for (x, y) in region.iter() {
        let idx = (y as usize * width + x as usize) * 3;
        let Some(&red) = buf.get(idx) else {
            continue;
        };
        sum += red as f64;
        count += 1;
    }

    (count > 0).then(|| (sum / count as f64) as f32)
}
