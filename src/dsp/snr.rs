//! Frequency-domain SNR estimation.
//!
//! Compares mean spectral power in the heart-rate band (0.5-4 Hz, 30-240
//! BPM) against an adjacent noise band (4-8 Hz). A real pulse concentrates
//! power in the signal band; motion artifacts and sensor noise spread it.

use num_complex::Complex32;
use rustfft::FftPlanner;
use std::f32::consts::PI;

/// SNR estimation configuration.
#[derive(Debug, Clone)]
pub struct SnrConfig {
    /// Heart-rate band in Hz.
    pub signal_band: (f32, f32),
    /// Noise band in Hz.
    pub noise_band: (f32, f32),
    /// Minimum number of samples for a meaningful spectrum.
    pub min_samples: usize,
}

impl Default for SnrConfig {
    fn default() -> Self {
        Self {
            signal_band: (0.5, 4.0),
            noise_band: (4.0, 8.0),
            min_samples: 30,
        }
    }
}

/// SNR estimator holding a reusable FFT planner.
pub struct SnrEstimator {
    config: SnrConfig,
    planner: FftPlanner<f32>,
}

impl SnrEstimator {
    /// Create an estimator with the standard PPG bands.
    pub fn new() -> Self {
        Self::with_config(SnrConfig::default())
    }

    /// Create an estimator with custom bands.
    pub fn with_config(config: SnrConfig) -> Self {
        Self {
            config,
            planner: FftPlanner::new(),
        }
    }

    /// Estimate SNR in dB.
    ///
    /// Returns 0.0 for signals too short to resolve the bands or when the
    /// noise band carries no power.
    pub fn estimate(&mut self, signal: &[f32], sample_rate: f32) -> f32 {
        let n = signal.len();
        if n < self.config.min_samples || !sample_rate.is_finite() || sample_rate <= 0.0 {
            return 0.0;
        }

        // Hamming window to limit spectral leakage
        let mut buffer: Vec<Complex32> = signal
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                let window = 0.54 - 0.46 * (2.0 * PI * i as f32 / (n - 1) as f32).cos();
                Complex32::new(s * window, 0.0)
            })
            .collect();

        let fft = self.planner.plan_fft_forward(n);
        fft.process(&mut buffer);

        let half_n = n / 2;
        let bin_res = sample_rate / n as f32;

        let band_power = |band: (f32, f32)| -> Option<f32> {
            let lo = (band.0 / bin_res).ceil() as usize;
            let hi = ((band.1 / bin_res) as usize).min(half_n.saturating_sub(1));
            if lo > hi {
                return None;
            }
            let sum: f32 = buffer[lo..=hi].iter().map(|c| c.norm_sqr()).sum();
            Some(sum / (hi - lo + 1) as f32)
        };

        let (Some(signal_power), Some(noise_power)) = (
            band_power(self.config.signal_band),
            band_power(self.config.noise_band),
        ) else {
            return 0.0;
        };

        if noise_power > 0.0 {
            10.0 * (signal_power / noise_power).log10()
        } else {
            0.0
        }
    }
}

impl Default for SnrEstimator {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot SNR estimate with the standard bands.
pub fn estimate_snr(signal: &[f32], sample_rate: f32) -> f32 {
    SnrEstimator::new().estimate(signal, sample_rate)
}
