//! Camera frame capability surface.
//!
//! Native camera bindings differ in which buffer accessors they expose: some
//! hand out a single contiguous buffer, some expose per-plane access, some
//! only a legacy array-buffer conversion. `CameraFrame` models every accessor
//! as optional; [`resolve_buffer`] probes them once per frame in a fixed
//! priority order and returns the first usable view.

/// Declared pixel format of a camera frame.
///
/// Bindings that do not report a format use [`PixelFormat::Unknown`], which
/// is dispatched as YUV since that is what cameras predominantly emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelFormat {
    /// YUV420 planar (full-resolution Y, quarter-resolution U/V).
    Yuv,
    /// Packed RGB888 triplets.
    Rgb,
    /// Format not reported by the binding.
    #[default]
    Unknown,
}

impl PixelFormat {
    /// Resolve `Unknown` to the format actually used for dispatch.
    pub fn effective(self) -> PixelFormat {
        match self {
            PixelFormat::Unknown => PixelFormat::Yuv,
            other => other,
        }
    }
}

/// Borrowed Y/U/V plane views for one frame.
///
/// Chroma planes are optional: a binding may only be able to surface the
/// luminance plane, in which case extraction degrades to a luma-only
/// approximation of red intensity.
#[derive(Debug, Clone, Copy)]
pub struct PlaneSet<'a> {
    /// Full-resolution luminance plane.
    pub y: &'a [u8],
    /// Quarter-resolution U (Cb) plane, if available.
    pub u: Option<&'a [u8]>,
    /// Quarter-resolution V (Cr) plane, if available.
    pub v: Option<&'a [u8]>,
}

/// A resolved per-frame pixel buffer view.
#[derive(Debug, Clone, Copy)]
pub enum FrameBuffer<'a> {
    /// Single contiguous buffer: interleaved RGB888, or I420-contiguous YUV
    /// (Y plane followed by the two quarter-resolution chroma planes).
    Packed(&'a [u8]),
    /// Separate plane views.
    Planar(PlaneSet<'a>),
}

/// One camera frame as presented by the capture runtime.
///
/// Only `width`/`height` are mandatory. Every buffer accessor has a default
/// body returning `None`; a binding implements whichever accessors its
/// platform actually supports and signals absence or failure by returning
/// `None`, never by panicking. Returned views borrow from the frame and must
/// not outlive the capture callback that owns it.
pub trait CameraFrame {
    /// Frame width in pixels.
    fn width(&self) -> u32;

    /// Frame height in pixels.
    fn height(&self) -> u32;

    /// Declared pixel format.
    fn pixel_format(&self) -> PixelFormat {
        PixelFormat::Unknown
    }

    /// Direct view of the native pixel buffer.
    fn native_buffer(&self) -> Option<&[u8]> {
        None
    }

    /// Legacy whole-frame buffer conversion.
    fn legacy_buffer(&self) -> Option<&[u8]> {
        None
    }

    /// Per-plane accessor (0 = Y, 1 = U, 2 = V).
    fn plane(&self, _index: usize) -> Option<&[u8]> {
        None
    }

    /// Raw plane-set property, when the binding exposes all planes at once.
    fn planes(&self) -> Option<PlaneSet<'_>> {
        None
    }
}

/// Probe the frame's accessors in priority order and return the first
/// non-empty buffer view.
///
/// Priority: native buffer, legacy buffer, per-plane accessor, plane-set
/// property. A failed or absent accessor silently advances the chain; `None`
/// means no accessor produced pixels at all.
pub fn resolve_buffer<F>(frame: &F) -> Option<FrameBuffer<'_>>
where
    F: CameraFrame + ?Sized,
{
    if let Some(buf) = frame.native_buffer() {
        if !buf.is_empty() {
            return Some(FrameBuffer::Packed(buf));
        }
    }

    if let Some(buf) = frame.legacy_buffer() {
        if !buf.is_empty() {
            return Some(FrameBuffer::Packed(buf));
        }
    }

    if let Some(y) = frame.plane(0) {
        if !y.is_empty() {
            return Some(FrameBuffer::Planar(PlaneSet {
                y,
                u: frame.plane(1),
                v: frame.plane(2),
            }));
        }
    }

    if let Some(set) = frame.planes() {
        if !set.y.is_empty() {
            return Some(FrameBuffer::Planar(set));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubFrame {
        native: Option<Vec<u8>>,
        legacy: Option<Vec<u8>>,
        planes: Option<Vec<Vec<u8>>>,
    }

    impl CameraFrame for StubFrame {
        fn width(&self) -> u32 {
            4
        }
        fn height(&self) -> u32 {
            4
        }
        fn native_buffer(&self) -> Option<&[u8]> {
            self.native.as_deref()
        }
        fn legacy_buffer(&self) -> Option<&[u8]> {
            self.legacy.as_deref()
        }
        fn plane(&self, index: usize) -> Option<&[u8]> {
            self.planes.as_ref()?.get(index).map(|p| p.as_slice())
        }
    }

    #[test]
    fn test_native_buffer_wins() {
        let frame = StubFrame {
            native: Some(vec![1; 16]),
            legacy: Some(vec![2; 16]),
            planes: Some(vec![vec![3; 16]]),
        };

        match resolve_buffer(&frame) {
            Some(FrameBuffer::Packed(buf)) => assert_eq!(buf[0], 1),
            other => panic!("expected packed native buffer, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_native_falls_through_to_legacy() {
        let frame = StubFrame {
            native: Some(vec![]),
            legacy: Some(vec![2; 16]),
            planes: None,
        };

        match resolve_buffer(&frame) {
            Some(FrameBuffer::Packed(buf)) => assert_eq!(buf[0], 2),
            other => panic!("expected packed legacy buffer, got {:?}", other),
        }
    }

    #[test]
    fn test_plane_accessor_resolves_planar() {
        let frame = StubFrame {
            native: None,
            legacy: None,
            planes: Some(vec![vec![10; 16], vec![11; 4], vec![12; 4]]),
        };

        match resolve_buffer(&frame) {
            Some(FrameBuffer::Planar(set)) => {
                assert_eq!(set.y[0], 10);
                assert_eq!(set.u.unwrap()[0], 11);
                assert_eq!(set.v.unwrap()[0], 12);
            }
            other => panic!("expected planar buffer, got {:?}", other),
        }
    }

    #[test]
    fn test_no_accessor_yields_none() {
        let frame = StubFrame {
            native: None,
            legacy: None,
            planes: None,
        };
        assert!(resolve_buffer(&frame).is_none());
    }

    #[test]
    fn test_unknown_format_dispatches_as_yuv() {
        assert_eq!(PixelFormat::Unknown.effective(), PixelFormat::Yuv);
        assert_eq!(PixelFormat::Rgb.effective(), PixelFormat::Rgb);
    }
}
