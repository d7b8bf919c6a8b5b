//! Frame intensity extraction.
//!
//! Turns one camera frame into a single scalar: the mean red-channel (or
//! luma-approximated) intensity over a central sampling region. The extractor
//! runs inside the per-frame capture callback, so it never errors, never
//! blocks, and never retains frame memory — every failure path converges to
//! a neutral fallback value that downstream quality checks will reject as
//! "no real signal".

mod convert;

pub use convert::{bt601_red, bt601_rgb};

use log::{debug, trace};

use crate::frame::{resolve_buffer, CameraFrame, FrameBuffer, PixelFormat, PlaneSet, SampleRegion};

/// Which conversion path produced an extracted value.
///
/// Surfaced alongside the scalar so downstream scoring can calibrate
/// thresholds per path: a luma-only value has a different numeric meaning
/// than a true BT.601 red recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMethod {
    /// Full YUV420 conversion, red channel via BT.601.
    Yuv420,
    /// Y-plane only; luminance used as a red stand-in.
    LumaOnly,
    /// Interleaved RGB888, red byte of each triplet.
    PackedRgb,
    /// No usable buffer or zero samples; value is the neutral constant.
    Fallback,
}

/// One extraction result: scalar intensity plus the path that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extraction {
    /// Mean intensity in `[0, 255]`.
    pub value: f32,
    /// Conversion path that fired.
    pub method: ExtractionMethod,
}

/// Extractor configuration.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Sampling radius as a fraction of the shorter frame dimension.
    pub region_fraction: f32,
    /// Pixel stride inside the sampling region.
    pub sample_step: u32,
    /// Value returned when extraction cannot produce a real sample.
    pub neutral: f32,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            region_fraction: 0.20,
            sample_step: 4,
            neutral: 128.0,
        }
    }
}

/// Frame intensity extractor.
///
/// Stateless between calls; safe to invoke at camera frame rate.
#[derive(Debug, Clone, Default)]
pub struct IntensityExtractor {
    config: ExtractorConfig,
}

impl IntensityExtractor {
    /// Create an extractor with the standard fingertip-PPG configuration.
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    /// Create an extractor with a custom configuration.
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Extract mean intensity from one frame, reporting the path taken.
    ///
    /// Never panics and never returns an error: malformed geometry, missing
    /// buffers, and empty sample sets all yield the neutral value tagged
    /// [`ExtractionMethod::Fallback`].
    pub fn extract<F>(&self, frame: &F) -> Extraction
    where
        F: CameraFrame + ?Sized,
    {
        let width = frame.width();
        let height = frame.height();

        if width == 0 || height == 0 {
            debug!("frame has degenerate geometry ({}x{})", width, height);
            return self.fallback();
        }

        let region = SampleRegion::centered(
            width,
            height,
            self.config.region_fraction,
            self.config.sample_step,
        );
        if region.is_empty() {
            return self.fallback();
        }

        let Some(buffer) = resolve_buffer(frame) else {
            debug!("no buffer accessor produced pixels");
            return self.fallback();
        };

        let is_rgb = frame.pixel_format().effective() == PixelFormat::Rgb;
        let sampled = match buffer {
            FrameBuffer::Packed(buf) if is_rgb => convert::red_mean_rgb(buf, width, &region)
                .map(|value| (value, ExtractionMethod::PackedRgb)),
            // RGB declared but only planes surfaced: treat the first plane
            // as the packed buffer, matching what such bindings hand out.
            FrameBuffer::Planar(set) if is_rgb => convert::red_mean_rgb(set.y, width, &region)
                .map(|value| (value, ExtractionMethod::PackedRgb)),
            FrameBuffer::Packed(buf) => sample_packed_yuv(buf, width, height, &region),
            FrameBuffer::Planar(set) => sample_planar_yuv(&set, width, &region),
        };

        match sampled {
            Some((value, method)) => {
                trace!("extracted {:.1} via {:?}", value, method);
                Extraction { value, method }
            }
            None => {
                debug!("sampling region produced no usable pixels");
                self.fallback()
            }
        }
    }

    /// Extract mean intensity as a bare scalar in `[0, 255]`.
    pub fn extract_intensity<F>(&self, frame: &F) -> f32
    where
        F: CameraFrame + ?Sized,
    {
        self.extract(frame).value
    }

    fn fallback(&self) -> Extraction {
        Extraction {
            value: self.config.neutral,
            method: ExtractionMethod::Fallback,
        }
    }
}

/// Extract with the default configuration.
pub fn extract_intensity<F>(frame: &F) -> f32
where
    F: CameraFrame + ?Sized,
{
    IntensityExtractor::new().extract_intensity(frame)
}

fn sample_planar_yuv(
    set: &PlaneSet<'_>,
    width: u32,
    region: &SampleRegion,
) -> Option<(f32, ExtractionMethod)> {
    if let Some(v) = set.v {
        if let Some(value) = convert::red_mean_yuv420(set.y, v, width, region) {
            return Some((value, ExtractionMethod::Yuv420));
        }
    }
    convert::luma_mean(set.y, width, region).map(|value| (value, ExtractionMethod::LumaOnly))
}

/// Interpret a single contiguous buffer as I420: full Y plane followed by
/// two quarter-resolution chroma planes. Buffers holding the Y plane but not
/// full chroma degrade to luma-only.
fn sample_packed_yuv(
    buf: &[u8],
    width: u32,
    height: u32,
    region: &SampleRegion,
) -> Option<(f32, ExtractionMethod)> {
    let y_len = width as usize * height as usize;
    let chroma_len = (width / 2) as usize * (height / 2) as usize;

    if buf.len() >= y_len + 2 * chroma_len {
        let v_plane = &buf[y_len + chroma_len..y_len + 2 * chroma_len];
        if let Some(value) = convert::red_mean_yuv420(&buf[..y_len], v_plane, width, region) {
            return Some((value, ExtractionMethod::Yuv420));
        }
    }

    convert::luma_mean(buf, width, region).map(|value| (value, ExtractionMethod::LumaOnly))
}
