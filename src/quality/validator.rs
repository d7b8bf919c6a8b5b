//! Per-frame usability gate.
//!
//! Decides whether one extracted intensity sample is worth feeding into the
//! measurement window. Two gates, both must pass:
//!
//! - **Brightness**: value strictly inside (50, 250). Below means no finger
//!   on the lens; above means oversaturation.
//! - **Variance**: once enough history exists, the recent window must show
//!   physiological variation - not flat (stuck extractor, static scene) and
//!   not wild (motion artifact, garbage reads). A sustained run of the
//!   extractor's neutral fallback value fails this gate, which is exactly
//!   how extraction failures are meant to surface.

use crate::dsp::stats;

/// Validator configuration.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Exclusive lower brightness bound.
    pub min_brightness: f32,
    /// Exclusive upper brightness bound.
    pub max_brightness: f32,
    /// Minimum standard deviation of the recent window.
    pub min_std: f32,
    /// Maximum standard deviation of the recent window.
    pub max_std: f32,
    /// Recent-window length; the variance gate arms once history exceeds it.
    pub window: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_brightness: 50.0,
            max_brightness: 250.0,
            min_std: 1.0,
            max_std: 50.0,
            window: 10,
        }
    }
}

/// Frame usability validator.
#[derive(Debug, Clone, Default)]
pub struct FrameValidator {
    config: ValidatorConfig,
}

impl FrameValidator {
    /// Create a validator with the standard fingertip-PPG thresholds.
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// Create a validator with custom thresholds.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Whether this sample is usable given the history so far.
    ///
    /// `history` is the caller-owned sequence of previous samples; with at
    /// most `window` entries only the brightness gate applies.
    pub fn is_usable(&self, value: f32, history: &[f32]) -> bool {
        if value <= self.config.min_brightness || value >= self.config.max_brightness {
            return false;
        }

        if history.len() > self.config.window {
            let recent = &history[history.len() - self.config.window..];
            let std = stats::std_dev(recent);
            if std < self.config.min_std || std > self.config.max_std {
                return false;
            }
        }

        true
    }
}

/// Validate with the standard thresholds.
pub fn is_frame_usable(value: f32, history: &[f32]) -> bool {
    FrameValidator::new().is_usable(value, history)
}
