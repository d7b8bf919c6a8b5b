//! # ppg-signals
//!
//! Camera photoplethysmography: turn raw camera frames into a scalar light
//! intensity signal and judge whether that signal is physiologically
//! plausible.
//!
//! This crate provides:
//! - **Frame extraction**: mean red-channel intensity over a central region,
//!   with format dispatch (YUV420 planar, packed YUV, RGB, luma-only) and a
//!   never-failing fallback chain across camera buffer accessors
//! - **Quality assessment**: per-frame usability gating and windowed [0, 1]
//!   quality scoring
//! - **DSP conditioning**: bandpass preprocessing, normalization, and SNR
//!   estimation for the downstream heart-rate stage
//!
//! ## Example
//!
//! ```ignore
//! use ppg_signals::{IntensityExtractor, SignalHistory, is_frame_usable, score_quality};
//!
//! let extractor = IntensityExtractor::new();
//! let mut history = SignalHistory::new();
//!
//! // Inside the per-frame capture callback:
//! let sample = extractor.extract(&frame);
//! if is_frame_usable(sample.value, &history.to_vec()) {
//!     history.push(sample.value);
//! }
//!
//! let confidence = score_quality(&history.latest(60));
//! ```
//!
//! The extraction path is contractually infallible: it runs inside a
//! latency-sensitive capture callback and degrades to a neutral sentinel on
//! every failure, relying on the quality layer to notice dead signal.

pub mod dsp;
pub mod extract;
pub mod frame;
pub mod quality;

pub use extract::{
    extract_intensity, Extraction, ExtractionMethod, ExtractorConfig, IntensityExtractor,
};
pub use frame::{CameraFrame, FrameBuffer, PixelFormat, PlaneSet, SampleRegion};
pub use quality::{
    is_frame_usable, score_quality, FrameValidator, QualityScorer, ScorerConfig, SignalHistory,
    ValidatorConfig,
};
