//! Windowed signal statistics and normalization.

use log::trace;
use ndarray::Array1;

/// Arithmetic mean of a sample window. Empty windows yield 0.
pub fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}

/// Population standard deviation of a sample window. Empty windows yield 0.
pub fn std_dev(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f32>() / values.len() as f32;
    variance.sqrt()
}

/// Min-max normalization to `[0, 1]`.
///
/// Near-constant signals (span below `1e-10`) are only shifted to zero base,
/// never divided, to avoid amplifying numeric dust.
pub fn normalize_minmax(signal: &Array1<f32>) -> Array1<f32> {
    if signal.is_empty() {
        return signal.clone();
    }

    let min = signal.iter().copied().fold(f32::INFINITY, f32::min);
    let max = signal.iter().copied().fold(f32::NEG_INFINITY, f32::max);

    let span = max - min;
    if span > 1e-10 {
        signal.mapv(|v| (v - min) / span)
    } else {
        trace!("minmax normalization on near-constant signal, shifting only");
        signal.mapv(|v| v - min)
    }
}

/// Z-score normalization (zero mean, unit variance).
///
/// Near-constant signals are only mean-centered.
pub fn normalize_zscore(signal: &Array1<f32>) -> Array1<f32> {
    let values: Vec<f32> = signal.iter().copied().collect();
    let m = mean(&values);
    let sd = std_dev(&values);

    if sd > 1e-10 {
        signal.mapv(|v| (v - m) / sd)
    } else {
        signal.mapv(|v| v - m)
    }
}

/// Whether a signal is flatlined (no physiological variation).
///
/// A stuck extractor or a static scene produces an essentially constant
/// intensity sequence; downstream inference on it is meaningless.
pub fn is_flatline(signal: &Array1<f32>, threshold: f32) -> bool {
    let values: Vec<f32> = signal.iter().copied().collect();
    std_dev(&values) < threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_std() {
        let values = [100.0, 200.0, 100.0, 200.0];
        assert!((mean(&values) - 150.0).abs() < 1e-6);
        assert!((std_dev(&values) - 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_window() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(std_dev(&[]), 0.0);
    }

    #[test]
    fn test_minmax_range() {
        let signal = Array1::from(vec![10.0, 20.0, 30.0]);
        let normalized = normalize_minmax(&signal);
        assert!((normalized[0] - 0.0).abs() < 1e-6);
        assert!((normalized[2] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_minmax_constant_signal() {
        let signal = Array1::from(vec![5.0; 10]);
        let normalized = normalize_minmax(&signal);
        assert!(normalized.iter().all(|&v| v.abs() < 1e-6));
    }

    #[test]
    fn test_zscore_properties() {
        let signal = Array1::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let normalized = normalize_zscore(&signal);

        let values: Vec<f32> = normalized.iter().copied().collect();
        assert!(mean(&values).abs() < 1e-5);
        assert!((std_dev(&values) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_flatline_detection() {
        let flat = Array1::from(vec![128.0; 50]);
        assert!(is_flatline(&flat, 0.01));

        let pulsing: Array1<f32> = (0..50).map(|i| 128.0 + (i as f32 * 0.5).sin() * 5.0).collect();
        assert!(!is_flatline(&pulsing, 0.01));
    }
}
