use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};

/// Data-to-draw mapping supplied by the axis subsystem.
///
/// Implementations must be pure and monotonic; the layout core never inspects
/// their internals. Arbitrary scale functions plug in through [`FnScale`].
pub trait AxisScale {
    fn to_draw(&self, value: f64) -> f64;
}

/// Adapter letting any pure `Fn(f64) -> f64` closure serve as an axis scale.
#[derive(Debug, Clone, Copy)]
pub struct FnScale<F>(pub F);

impl<F> AxisScale for FnScale<F>
where
    F: Fn(f64) -> f64,
{
    fn to_draw(&self, value: f64) -> f64 {
        (self.0)(value)
    }
}

/// Affine mapping from a data domain onto a pixel range.
///
/// A descending pixel range (`range_start > range_end`) expresses the usual
/// inverted Y axis of a price chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> LayoutResult<Self> {
        if !domain_start.is_finite()
            || !domain_end.is_finite()
            || !range_start.is_finite()
            || !range_end.is_finite()
        {
            return Err(LayoutError::InvalidData(
                "scale domain and range must be finite".to_owned(),
            ));
        }

        if domain_start == domain_end {
            return Err(LayoutError::InvalidData(
                "scale domain must not be degenerate".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Pixel width of one data-space unit; this is the `unit_width` the
    /// width allocator consumes.
    #[must_use]
    pub fn pixels_per_unit(self) -> f64 {
        (self.range_end - self.range_start) / (self.domain_end - self.domain_start)
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

impl AxisScale for LinearScale {
    fn to_draw(&self, value: f64) -> f64 {
        self.domain_to_pixel(value)
    }
}

/// Logarithmic mapping: uniform pixel spacing in natural-log domain units.
///
/// All domain values must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogScale {
    log_linear: LinearScale,
}

impl LogScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> LayoutResult<Self> {
        if domain_start <= 0.0 || domain_end <= 0.0 {
            return Err(LayoutError::InvalidData(
                "log scale domain must be > 0".to_owned(),
            ));
        }

        Ok(Self {
            log_linear: LinearScale::new(
                domain_start.ln(),
                domain_end.ln(),
                range_start,
                range_end,
            )?,
        })
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        self.log_linear.domain_to_pixel(value.ln())
    }
}

impl AxisScale for LogScale {
    fn to_draw(&self, value: f64) -> f64 {
        self.domain_to_pixel(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_domain_is_rejected() {
        assert!(LinearScale::new(5.0, 5.0, 0.0, 100.0).is_err());
        assert!(LinearScale::new(f64::NAN, 1.0, 0.0, 100.0).is_err());
    }

    #[test]
    fn linear_scale_maps_endpoints_and_midpoint() {
        let scale = LinearScale::new(0.0, 10.0, 0.0, 1000.0).expect("valid scale");
        assert_eq!(scale.domain_to_pixel(0.0), 0.0);
        assert_eq!(scale.domain_to_pixel(10.0), 1000.0);
        assert_eq!(scale.domain_to_pixel(5.0), 500.0);
        assert_eq!(scale.pixels_per_unit(), 100.0);
    }

    #[test]
    fn descending_range_inverts_the_axis() {
        let scale = LinearScale::new(0.0, 100.0, 500.0, 0.0).expect("valid scale");
        assert_eq!(scale.domain_to_pixel(0.0), 500.0);
        assert_eq!(scale.domain_to_pixel(100.0), 0.0);
        assert_eq!(scale.domain_to_pixel(25.0), 375.0);
    }

    #[test]
    fn pixel_round_trip_recovers_the_domain_value() {
        let scale = LinearScale::new(3.0, 17.0, 640.0, 0.0).expect("valid scale");
        let px = scale.domain_to_pixel(11.3);
        assert!((scale.pixel_to_domain(px) - 11.3).abs() <= 1e-12);
    }

    #[test]
    fn closures_are_usable_as_scales() {
        let double = FnScale(|v: f64| v * 2.0);
        assert_eq!(double.to_draw(21.0), 42.0);
    }

    #[test]
    fn log_scale_requires_positive_domain() {
        assert!(LogScale::new(0.0, 10.0, 0.0, 100.0).is_err());
        assert!(LogScale::new(-1.0, 10.0, 0.0, 100.0).is_err());

        let scale = LogScale::new(1.0, 100.0, 0.0, 200.0).expect("valid scale");
        assert!((scale.domain_to_pixel(10.0) - 100.0).abs() <= 1e-9);
    }
}
