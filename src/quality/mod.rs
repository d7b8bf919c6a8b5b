//! Signal quality assessment.
//!
//! - [`FrameValidator`] / [`is_frame_usable`] - per-frame usability gate
//! - [`QualityScorer`] / [`score_quality`] - windowed [0, 1] confidence
//! - [`SignalHistory`] - caller-owned bounded sample ring
//!
//! Extraction never fails outright; it degrades to a neutral sentinel. These
//! checks are the mechanism that notices degraded or implausible signal and
//! lets the session layer report "could not measure" instead of fabricating
//! a reading.

mod history;
mod scorer;
mod validator;

pub use history::{SignalHistory, DEFAULT_HISTORY_CAPACITY};
pub use scorer::{score_quality, QualityScorer, ScorerConfig};
pub use validator::{is_frame_usable, FrameValidator, ValidatorConfig};
