//! Bounded intensity history.
//!
//! The validator and scorer are pure functions over slices; this ring buffer
//! is the caller-owned state they read from. The frame loop pushes one value
//! per captured frame and snapshots a window whenever it wants a score. The
//! extractor itself never touches it.

use std::collections::VecDeque;

/// Default capacity: ten seconds at 30 fps.
pub const DEFAULT_HISTORY_CAPACITY: usize = 300;

/// Bounded ring of past intensity values, oldest first.
#[derive(Debug, Clone)]
pub struct SignalHistory {
    buf: VecDeque<f32>,
    capacity: usize,
}

impl SignalHistory {
    /// Create a history with the default ten-second capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a history bounded to `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buf: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append one sample, evicting the oldest when full.
    pub fn push(&mut self, value: f32) {
        if self.buf.len() == self.capacity {
            self.buf.pop_front();
        }
        self.buf.push_back(value);
    }

    /// Number of stored samples.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the history holds no samples.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Maximum number of stored samples.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Fill ratio in `[0, 1]`, for progress reporting.
    pub fn fill_ratio(&self) -> f32 {
        self.buf.len() as f32 / self.capacity as f32
    }

    /// Snapshot the full history, oldest first.
    pub fn to_vec(&self) -> Vec<f32> {
        self.buf.iter().copied().collect()
    }

    /// Snapshot the most recent `n` samples, oldest first.
    pub fn latest(&self, n: usize) -> Vec<f32> {
        let skip = self.buf.len().saturating_sub(n);
        self.buf.iter().skip(skip).copied().collect()
    }

    /// Drop all samples.
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl Default for SignalHistory {
    fn default() -> Self {
        Self::new()
    }
}
