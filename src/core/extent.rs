use serde::{Deserialize, Serialize};

use crate::core::Sample;

/// Data-space extents of an OHLC series, used by the surrounding chart to
/// size its axis scales before a layout pass runs.
///
/// The vertical extent spans low..high, not open..close, so wicks are never
/// clipped by an autoscaled price axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesExtents {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl SeriesExtents {
    /// Fits extents from a sample slice; `None` for an empty series.
    #[must_use]
    pub fn from_samples(samples: &[Sample]) -> Option<Self> {
        let first = samples.first()?;
        let mut extents = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.low,
            max_y: first.high,
        };

        for sample in &samples[1..] {
            extents.min_x = extents.min_x.min(sample.x);
            extents.max_x = extents.max_x.max(sample.x);
            extents.min_y = extents.min_y.min(sample.low);
            extents.max_y = extents.max_y.max(sample.high);
        }

        Some(extents)
    }

    /// Right x limit extended by one data-space unit, so the final column has
    /// room to render instead of ending exactly on the axis edge.
    #[must_use]
    pub fn unit_right(self, unit: f64) -> f64 {
        self.max_x + unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_has_no_extents() {
        assert!(SeriesExtents::from_samples(&[]).is_none());
    }

    #[test]
    fn extents_cover_wicks_not_just_bodies() {
        let samples = vec![
            Sample::new(3.0, 10.0, 12.0, 8.0, 11.0).expect("valid sample"),
            Sample::new(1.0, 11.0, 19.0, 10.5, 12.0).expect("valid sample"),
            Sample::new(2.0, 12.0, 13.0, 2.5, 3.0).expect("valid sample"),
        ];
        let extents = SeriesExtents::from_samples(&samples).expect("extents");
        assert_eq!(extents.min_x, 1.0);
        assert_eq!(extents.max_x, 3.0);
        assert_eq!(extents.min_y, 2.5);
        assert_eq!(extents.max_y, 19.0);
        assert_eq!(extents.unit_right(1.0), 4.0);
    }
}
