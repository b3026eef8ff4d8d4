use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};

fn decimal_to_f64(value: Decimal, field_name: &str) -> LayoutResult<f64> {
    value.to_f64().ok_or_else(|| {
        LayoutError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// One time-indexed OHLC observation in data space.
///
/// Samples are owned by the data source and read-only for the layout core.
/// The fields are public so deserialized or externally produced data flows in
/// unchecked; [`Sample::new`] is the validating path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Sample {
    /// Builds a validated sample from raw floating values.
    ///
    /// Invariants:
    /// - all values are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn new(x: f64, open: f64, high: f64, low: f64, close: f64) -> LayoutResult<Self> {
        if !x.is_finite()
            || !open.is_finite()
            || !high.is_finite()
            || !low.is_finite()
            || !close.is_finite()
        {
            return Err(LayoutError::InvalidData(
                "sample values must be finite".to_owned(),
            ));
        }

        if low > high {
            return Err(LayoutError::InvalidData(
                "sample low must be <= high".to_owned(),
            ));
        }

        if open < low || open > high || close < low || close > high {
            return Err(LayoutError::InvalidData(
                "sample open/close must be within low/high range".to_owned(),
            ));
        }

        Ok(Self {
            x,
            open,
            high,
            low,
            close,
        })
    }

    /// Converts strongly-typed temporal/decimal input into a validated sample.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> LayoutResult<Self> {
        Self::new(
            datetime_to_unix_seconds(time),
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }

    /// Returns `true` when close price is greater than or equal to open price.
    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close >= self.open
    }
}

/// A point in draw space, after axis scales have been applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawPoint {
    pub x: f64,
    pub y: f64,
}

impl DrawPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
