use serde::{Deserialize, Serialize};

use crate::core::Sample;

/// Aggregated OHLC values for one interval of consecutive samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcSummary {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl OhlcSummary {
    /// Returns `true` when close is greater than or equal to open.
    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close >= self.open
    }
}

/// Number of intervals produced by striding a series of `len` samples
/// in steps of `interval`, i.e. `ceil(len / interval)`.
#[must_use]
pub fn interval_count(len: usize, interval: usize) -> usize {
    len.div_ceil(interval)
}

/// Reduces the interval starting at `start_index` to a single OHLC summary.
///
/// Open, high and low are seeded from the first sample. `interval == 1` is a
/// fast path that returns without scanning. Otherwise high/low are running
/// extrema over the samples actually present; the tail interval may be
/// shorter than `interval`, in which case close comes from the last existing
/// sample, not from `start_index + interval - 1`.
///
/// Callers must guarantee `start_index < samples.len()` and `interval >= 1`;
/// the pass driver validates both before aggregation begins.
#[must_use]
pub fn aggregate_interval(samples: &[Sample], interval: usize, start_index: usize) -> OhlcSummary {
    debug_assert!(interval >= 1);
    debug_assert!(start_index < samples.len());

    let first = samples[start_index];
    let open = first.open;
    let mut high = first.high;
    let mut low = first.low;

    if interval == 1 {
        return OhlcSummary {
            open,
            high,
            low,
            close: first.close,
        };
    }

    let len = samples.len();

    // j is read after the loop: the close value belongs to the last sample
    // actually visited, which for a short tail interval is not
    // `start_index + interval - 1`.
    let mut j = 0;
    while j < interval {
        if start_index + j == len {
            break;
        }
        let sample = samples[start_index + j];
        if sample.high > high {
            high = sample.high;
        }
        if sample.low < low {
            low = sample.low;
        }
        j += 1;
    }

    OhlcSummary {
        open,
        high,
        low,
        close: samples[start_index + j - 1].close,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f64, open: f64, high: f64, low: f64, close: f64) -> Sample {
        Sample::new(x, open, high, low, close).expect("valid sample")
    }

    #[test]
    fn single_sample_interval_passes_through() {
        let samples = vec![sample(0.0, 10.0, 12.0, 9.0, 11.0)];
        let summary = aggregate_interval(&samples, 1, 0);
        assert_eq!(summary.open, 10.0);
        assert_eq!(summary.high, 12.0);
        assert_eq!(summary.low, 9.0);
        assert_eq!(summary.close, 11.0);
    }

    #[test]
    fn extrema_span_the_whole_interval() {
        let samples = vec![
            sample(0.0, 10.0, 12.0, 9.0, 11.0),
            sample(1.0, 11.0, 15.0, 10.0, 14.0),
            sample(2.0, 14.0, 14.5, 6.0, 7.0),
        ];
        let summary = aggregate_interval(&samples, 3, 0);
        assert_eq!(summary.open, 10.0);
        assert_eq!(summary.high, 15.0);
        assert_eq!(summary.low, 6.0);
        assert_eq!(summary.close, 7.0);
    }

    #[test]
    fn short_tail_interval_closes_on_last_existing_sample() {
        let samples = vec![
            sample(0.0, 10.0, 12.0, 9.0, 11.0),
            sample(1.0, 11.0, 13.0, 10.0, 12.0),
            sample(2.0, 12.0, 16.0, 11.0, 15.0),
        ];
        // Interval of 4 starting at index 2: only one sample exists.
        let summary = aggregate_interval(&samples, 4, 2);
        assert_eq!(summary.open, 12.0);
        assert_eq!(summary.high, 16.0);
        assert_eq!(summary.low, 11.0);
        assert_eq!(summary.close, 15.0);
    }

    #[test]
    fn interval_count_rounds_up() {
        assert_eq!(interval_count(0, 2), 0);
        assert_eq!(interval_count(5, 2), 3);
        assert_eq!(interval_count(6, 2), 3);
        assert_eq!(interval_count(6, 4), 2);
        assert_eq!(interval_count(10, 1), 10);
    }
}
