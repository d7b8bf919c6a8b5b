//! Signal preprocessing for downstream heart-rate inference.
//!
//! Conditions a raw intensity sequence the way the inference side expects:
//! DC removal, bandpass to the physiological band, and resampling to the
//! model's sample rate.

use log::debug;
use ndarray::Array1;

use super::SignalError;

/// Minimum input length accepted by [`preprocess`].
pub const MIN_SIGNAL_LEN: usize = 10;

/// Preprocessing configuration.
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    /// Output sample rate in Hz.
    pub target_rate: f32,
    /// Bandpass low cutoff in Hz.
    pub low_cut: f32,
    /// Bandpass high cutoff in Hz.
    pub high_cut: f32,
    /// Subtract the mean before filtering.
    pub remove_dc: bool,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            target_rate: 125.0,
            low_cut: 0.5,
            high_cut: 8.0,
            remove_dc: true,
        }
    }
}

/// A conditioned signal and the rate it ended up sampled at.
#[derive(Debug, Clone)]
pub struct Preprocessed {
    /// Filtered, resampled signal.
    pub signal: Array1<f32>,
    /// Actual output sample rate in Hz.
    pub sample_rate: f32,
}

/// Condition a raw intensity signal: DC removal, one-pole bandpass,
/// resample to the target rate.
///
/// Resampling only happens when input and target rates differ by more than
/// 0.1 Hz.
pub fn preprocess(
    signal: &Array1<f32>,
    sample_rate: f32,
    config: &PreprocessConfig,
) -> Result<Preprocessed, SignalError> {
    if signal.len() < MIN_SIGNAL_LEN {
        return Err(SignalError::TooShort(signal.len()));
    }
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(SignalError::InvalidSampleRate(sample_rate));
    }

    let mut work: Vec<f32> = signal.iter().copied().collect();

    if config.remove_dc {
        let mean = work.iter().sum::<f32>() / work.len() as f32;
        for v in &mut work {
            *v -= mean;
        }
    }

    bandpass_in_place(&mut work, sample_rate, config.low_cut, config.high_cut);

    let (resampled, actual_rate) = if (sample_rate - config.target_rate).abs() > 0.1 {
        let n_out =
            ((work.len() as f32 * config.target_rate / sample_rate).round() as usize).max(1);
        debug!(
            "resampling {} samples at {:.1} Hz to {} at {:.1} Hz",
            work.len(),
            sample_rate,
            n_out,
            config.target_rate
        );
        (resample_linear(&work, n_out), config.target_rate)
    } else {
        (work, sample_rate)
    };

    Ok(Preprocessed {
        signal: Array1::from(resampled),
        sample_rate: actual_rate,
    })
}

/// Cascaded one-pole high-pass then low-pass, coefficients derived from the
/// cutoff frequencies (`alpha = rc / (rc + dt)` for the high-pass stage,
/// `dt / (rc + dt)` for the low-pass stage).
fn bandpass_in_place(signal: &mut [f32], sample_rate: f32, low_cut: f32, high_cut: f32) {
    use std::f32::consts::TAU;

    let dt = 1.0 / sample_rate;

    // High-pass stage removes drift below the physiological band
    if low_cut > 0.0 {
        let rc = 1.0 / (TAU * low_cut);
        let alpha = (rc / (rc + dt)).clamp(0.0, 1.0);

        let mut prev_in = signal[0];
        let mut prev_out = 0.0f32;
        for v in signal.iter_mut() {
            let out = alpha * (prev_out + *v - prev_in);
            prev_in = *v;
            prev_out = out;
            *v = out;
        }
    }

    // Low-pass stage smooths out-of-band noise
    if high_cut > 0.0 && high_cut < sample_rate / 2.0 {
        let rc = 1.0 / (TAU * high_cut);
        let alpha = (dt / (rc + dt)).clamp(0.0, 1.0);

        for i in 1..signal.len() {
            signal[i] = alpha * signal[i] + (1.0 - alpha) * signal[i - 1];
        }
    }
}

/// Linear-interpolation resampling to `n_out` samples.
pub fn resample_linear(signal: &[f32], n_out: usize) -> Vec<f32> {
    if signal.is_empty() || n_out == 0 {
        return Vec::new();
    }
    if signal.len() == 1 {
        return vec![signal[0]; n_out];
    }

    let ratio = (signal.len() - 1) as f32 / (n_out.max(2) - 1) as f32;
    (0..n_out)
        .map(|i| {
            let pos = i as f32 * ratio;
            let idx = (pos as usize).min(signal.len() - 2);
            let frac = pos - idx as f32;
            signal[idx] * (1.0 - frac) + signal[idx + 1] * frac
        })
        .collect()
}
