use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::aggregate::{OhlcSummary, aggregate_interval, interval_count};
use crate::core::allocate::{COLUMN_PADDING, ColumnBudget, allocate_column};
use crate::core::scale::AxisScale;
use crate::core::types::{DrawPoint, Sample};
use crate::error::{LayoutError, LayoutResult};

/// Shape variant rendered from the shared aggregation/projection pipeline.
///
/// The variants produce identical geometry; they differ only in whether
/// consecutive descriptors are chained for continuous drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SeriesStyle {
    /// Filled candle bodies; each descriptor is handed off together with the
    /// previous interval's descriptor so the surface can animate continuity.
    #[default]
    Candle,
    /// Open-high-low-close bars; every interval draws independently.
    OhlcBars,
}

impl SeriesStyle {
    /// Whether the previous interval's descriptor accompanies each hand-off.
    #[must_use]
    pub fn is_chained(self) -> bool {
        matches!(self, Self::Candle)
    }
}

/// Per-pass layout constants.
///
/// `unit_width` is the pixel width of one data-space unit along the x axis,
/// usually [`LinearScale::pixels_per_unit`](crate::core::LinearScale::pixels_per_unit).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParameters {
    pub unit_width: f64,
    pub interval: usize,
    pub max_column_width: f64,
}

impl LayoutParameters {
    fn validate(self) -> LayoutResult<Self> {
        if self.interval == 0 {
            return Err(LayoutError::InvalidInterval {
                interval: self.interval,
            });
        }

        if !self.unit_width.is_finite() || self.unit_width <= 0.0 {
            return Err(LayoutError::InvalidData(
                "unit width must be finite and > 0".to_owned(),
            ));
        }

        if !self.max_column_width.is_finite() || self.max_column_width <= 0.0 {
            return Err(LayoutError::InvalidData(
                "max column width must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Draw-space geometry for one aggregated interval.
///
/// Vertical values already went through the y scale; `left`/`width` position
/// the shape horizontally inside the interval's slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryDescriptor {
    pub open_y: f64,
    pub close_y: f64,
    pub high_y: f64,
    pub low_y: f64,
    /// Rendered shape width, clamped at zero.
    pub width: f64,
    /// Left edge of the shape inside its slot.
    pub left: f64,
    /// Vertical baseline the shape grows from: the high/low midpoint.
    pub start_reference: f64,
    /// Chart-space anchor for labeling and selection.
    pub anchor: DrawPoint,
}

/// Non-fatal data-quality finding surfaced alongside a pass.
///
/// Inconsistent samples still flow through aggregation unmodified; fixing or
/// dropping them is the caller's decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleWarning {
    pub sample_index: usize,
    pub low: f64,
    pub high: f64,
}

/// Result of one full layout pass, in ascending interval order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPass {
    pub style: SeriesStyle,
    pub slots: Vec<GeometryDescriptor>,
    pub warnings: Vec<SampleWarning>,
}

impl LayoutPass {
    fn empty(style: SeriesStyle) -> Self {
        Self {
            style,
            slots: Vec::new(),
            warnings: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_chained(&self) -> bool {
        self.style.is_chained()
    }

    /// Deterministic JSON snapshot of the pass, for diffing and regression
    /// fixtures.
    pub fn to_json_pretty(&self) -> LayoutResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            LayoutError::InvalidData(format!("failed to serialize layout pass: {e}"))
        })
    }
}

/// Projects one aggregated interval into a draw-space descriptor.
///
/// `interval_first_sample_x` is the data-space x of the interval's first
/// sample; the budget is the pass-wide result of [`allocate_column`].
#[must_use]
pub fn project_interval<X, Y>(
    summary: OhlcSummary,
    interval_first_sample_x: f64,
    budget: ColumnBudget,
    x_scale: &X,
    y_scale: &Y,
) -> GeometryDescriptor
where
    X: AxisScale + ?Sized,
    Y: AxisScale + ?Sized,
{
    let x = x_scale.to_draw(interval_first_sample_x);
    let high_y = y_scale.to_draw(summary.high);
    let low_y = y_scale.to_draw(summary.low);
    let midline = (high_y + low_y) / 2.0;

    GeometryDescriptor {
        open_y: y_scale.to_draw(summary.open),
        close_y: y_scale.to_draw(summary.close),
        high_y,
        low_y,
        width: budget.rendered_width(),
        left: x + budget.exceed / 2.0 + COLUMN_PADDING,
        start_reference: midline,
        anchor: DrawPoint::new(x + budget.exceed / 2.0, midline),
    }
}

/// Runs one full layout pass: width allocation once, then aggregation and
/// projection per interval in ascending order.
///
/// An empty sample slice yields an empty pass. Parameter validation happens
/// before any aggregation; data-quality issues never fail the pass, they are
/// collected as [`SampleWarning`]s.
#[cfg(not(feature = "parallel-projection"))]
pub fn layout_series<X, Y>(
    samples: &[Sample],
    params: LayoutParameters,
    x_scale: &X,
    y_scale: &Y,
    style: SeriesStyle,
) -> LayoutResult<LayoutPass>
where
    X: AxisScale + ?Sized,
    Y: AxisScale + ?Sized,
{
    let Some((params, budget, warnings)) = prepare_pass(samples, params, style)? else {
        return Ok(LayoutPass::empty(style));
    };

    let slots = (0..samples.len())
        .step_by(params.interval)
        .map(|start| {
            let summary = aggregate_interval(samples, params.interval, start);
            project_interval(summary, samples[start].x, budget, x_scale, y_scale)
        })
        .collect();

    Ok(LayoutPass {
        style,
        slots,
        warnings,
    })
}

/// Runs one full layout pass: width allocation once, then aggregation and
/// projection per interval in ascending order.
///
/// An empty sample slice yields an empty pass. Parameter validation happens
/// before any aggregation; data-quality issues never fail the pass, they are
/// collected as [`SampleWarning`]s.
///
/// With `parallel-projection` enabled, intervals are projected in parallel;
/// output order is identical to the sequential pipeline.
#[cfg(feature = "parallel-projection")]
pub fn layout_series<X, Y>(
    samples: &[Sample],
    params: LayoutParameters,
    x_scale: &X,
    y_scale: &Y,
    style: SeriesStyle,
) -> LayoutResult<LayoutPass>
where
    X: AxisScale + Sync + ?Sized,
    Y: AxisScale + Sync + ?Sized,
{
    let Some((params, budget, warnings)) = prepare_pass(samples, params, style)? else {
        return Ok(LayoutPass::empty(style));
    };

    let starts: Vec<usize> = (0..samples.len()).step_by(params.interval).collect();
    let slots = starts
        .par_iter()
        .map(|&start| {
            let summary = aggregate_interval(samples, params.interval, start);
            project_interval(summary, samples[start].x, budget, x_scale, y_scale)
        })
        .collect();

    Ok(LayoutPass {
        style,
        slots,
        warnings,
    })
}

/// Shared pass prologue: validation, column budget, data-quality scan.
///
/// Returns `None` for an empty series so both pipelines short-circuit to an
/// empty pass.
fn prepare_pass(
    samples: &[Sample],
    params: LayoutParameters,
    style: SeriesStyle,
) -> LayoutResult<Option<(LayoutParameters, ColumnBudget, Vec<SampleWarning>)>> {
    let params = params.validate()?;

    if samples.is_empty() {
        debug!(?style, "layout pass over empty series");
        return Ok(None);
    }

    let budget = allocate_column(params.unit_width, params.interval, params.max_column_width);
    debug!(
        ?style,
        interval = params.interval,
        intervals = interval_count(samples.len(), params.interval),
        candle_width = budget.candle_width,
        exceed = budget.exceed,
        "layout pass column budget"
    );

    let mut warnings = Vec::new();
    for (sample_index, sample) in samples.iter().enumerate() {
        if sample.low > sample.high {
            warn!(
                sample_index,
                low = sample.low,
                high = sample.high,
                "sample low exceeds high; laying out as-is"
            );
            warnings.push(SampleWarning {
                sample_index,
                low: sample.low,
                high: sample.high,
            });
        }
    }

    Ok(Some((params, budget, warnings)))
}
