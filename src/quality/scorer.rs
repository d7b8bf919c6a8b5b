//! Windowed signal-quality scoring.
//!
//! Produces a [0, 1] confidence that a window of intensity samples carries a
//! real pulse. Three independent penalty axes compose multiplicatively:
//! too-flat variance, excess variance, and poor exposure. The constants are
//! empirically tuned for fingertip PPG, not derived - retune freely, but
//! keep the axes independent.

use crate::dsp::stats;

/// Scorer configuration.
#[derive(Debug, Clone)]
pub struct ScorerConfig {
    /// Minimum window length; shorter windows score 0.
    pub min_samples: usize,
    /// Standard deviation below which the flatness penalty scales in.
    pub low_std: f32,
    /// Standard deviation above which the noise penalty scales in.
    pub high_std: f32,
    /// Additional std beyond `high_std` at which the noise penalty hits 0.
    pub noise_rolloff: f32,
    /// Ideal mean brightness.
    pub ideal_mean: f32,
    /// Acceptable mean band; outside it the exposure penalty applies.
    pub mean_band: (f32, f32),
    /// Mean deviation from ideal at which the exposure penalty hits 0.
    pub mean_rolloff: f32,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            min_samples: 10,
            low_std: 5.0,
            high_std: 30.0,
            noise_rolloff: 50.0,
            ideal_mean: 150.0,
            mean_band: (100.0, 200.0),
            mean_rolloff: 100.0,
        }
    }
}

/// Signal-quality scorer.
#[derive(Debug, Clone, Default)]
pub struct QualityScorer {
    config: ScorerConfig,
}

impl QualityScorer {
    /// Create a scorer with the standard fingertip-PPG tuning.
    pub fn new() -> Self {
        Self::with_config(ScorerConfig::default())
    }

    /// Create a scorer with custom tuning.
    pub fn with_config(config: ScorerConfig) -> Self {
        Self { config }
    }

    /// Score a window of intensity samples, 0 (unusable) to 1 (ideal).
    pub fn score(&self, values: &[f32]) -> f32 {
        if values.len() < self.config.min_samples {
            return 0.0;
        }

        let mean = stats::mean(values);
        let std = stats::std_dev(values);

        let mut quality = 1.0f32;

        if std < self.config.low_std {
            quality *= std / self.config.low_std;
        }

        if std > self.config.high_std {
            quality *= (1.0 - (std - self.config.high_std) / self.config.noise_rolloff).max(0.0);
        }

        if mean < self.config.mean_band.0 || mean > self.config.mean_band.1 {
            quality *=
                (1.0 - (mean - self.config.ideal_mean).abs() / self.config.mean_rolloff).max(0.0);
        }

        quality.clamp(0.0, 1.0)
    }
}

/// Score with the standard tuning.
pub fn score_quality(values: &[f32]) -> f32 {
    QualityScorer::new().score(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Window with exact mean `mean` and population std `std`.
    fn window(mean: f32, std: f32, n: usize) -> Vec<f32> {
        (0..n)
            .map(|i| if i % 2 == 0 { mean - std } else { mean + std })
            .collect()
    }

    #[test]
    fn test_short_window_scores_zero() {
        assert_eq!(score_quality(&[]), 0.0);
        assert_eq!(score_quality(&window(150.0, 15.0, 9)), 0.0);
    }

    #[test]
    fn test_ideal_window_scores_one() {
        // Mean 150, std 15: all three axes in their sweet spot
        let score = score_quality(&window(150.0, 15.0, 20));
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_score_always_in_unit_interval() {
        let cases = [
            window(150.0, 0.0, 20),
            window(150.0, 100.0, 20),
            window(20.0, 15.0, 20),
            window(250.0, 2.0, 20),
            window(150.0, 15.0, 10),
        ];
        for values in &cases {
            let score = score_quality(values);
            assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
        }
    }

    #[test]
    fn test_flat_signal_penalized_proportionally() {
        let score = score_quality(&window(150.0, 2.5, 20));
        assert!((score - 0.5).abs() < 1e-5);

        assert_eq!(score_quality(&window(150.0, 0.0, 20)), 0.0);
    }

    #[test]
    fn test_noise_penalty_monotonic() {
        let mut prev = score_quality(&window(150.0, 30.0, 20));
        for std in [35.0, 45.0, 60.0, 79.0] {
            let score = score_quality(&window(150.0, std, 20));
            assert!(
                score < prev || (score == 0.0 && prev == 0.0),
                "std {} score {} should decrease from {}",
                std,
                score,
                prev
            );
            prev = score;
        }
    }

    #[test]
    fn test_noise_penalty_floors_at_std_80() {
        assert_eq!(score_quality(&window(150.0, 80.0, 20)), 0.0);
        assert_eq!(score_quality(&window(150.0, 120.0, 20)), 0.0);
    }

    #[test]
    fn test_exposure_penalty_monotonic() {
        let mut prev = score_quality(&window(150.0, 15.0, 20));
        for mean in [210.0, 225.0, 240.0] {
            let score = score_quality(&window(mean, 15.0, 20));
            assert!(
                score < prev,
                "mean {} score {} should decrease from {}",
                mean,
                score,
                prev
            );
            prev = score;
        }
    }

    #[test]
    fn test_exposure_band_edges_unpenalized() {
        // Inside [100, 200] the exposure axis contributes no penalty
        let low = score_quality(&window(100.0, 15.0, 20));
        let high = score_quality(&window(200.0, 15.0, 20));
        assert!((low - 1.0).abs() < 1e-6);
        assert!((high - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_penalties_compose_multiplicatively() {
        // Flat AND badly exposed: both axes bite
        let score = score_quality(&window(220.0, 2.5, 20));
        let flat_only = score_quality(&window(150.0, 2.5, 20));
        let exposure_only = score_quality(&window(220.0, 15.0, 20));
        assert!((score - flat_only * exposure_only).abs() < 1e-5);
    }
}
