//! Signal conditioning for extracted intensity sequences.
//!
//! - `stats` - windowed statistics, normalization, flatline detection
//! - `filters` - DC removal, bandpass, resampling (`preprocess`)
//! - `snr` - frequency-domain signal-to-noise estimation
//!
//! Unlike the per-frame extraction path, these operate on whole signal
//! windows and are allowed to fail loudly on unusable input.

mod filters;
mod snr;
pub mod stats;

pub use filters::{preprocess, resample_linear, PreprocessConfig, Preprocessed, MIN_SIGNAL_LEN};
pub use snr::{estimate_snr, SnrConfig, SnrEstimator};
pub use stats::{is_flatline, normalize_minmax, normalize_zscore};

use thiserror::Error;

/// Errors from signal conditioning.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SignalError {
    /// Input window is too short to condition meaningfully.
    #[error("signal too short for processing: {0} samples")]
    TooShort(usize),
    /// Sample rate is zero, negative, or non-finite.
    #[error("invalid sample rate: {0}")]
    InvalidSampleRate(f32),
}
