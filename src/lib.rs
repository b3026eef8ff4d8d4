//! ohlc-layout: render-agnostic layout core for financial OHLC series.
//!
//! Given an ordered sequence of open/high/low/close samples, the crate groups
//! them into fixed-size intervals, aggregates each interval into one OHLC
//! summary, allocates the per-interval column width under a maximum-width
//! cap, and projects each interval into a draw-space geometry descriptor.
//! Axis scales and the rendering surface stay behind trait seams.

pub mod core;
pub mod error;
pub mod surface;
pub mod telemetry;

pub use crate::core::{
    GeometryDescriptor, LayoutParameters, LayoutPass, Sample, SeriesStyle, layout_series,
};
pub use error::{LayoutError, LayoutResult};
pub use surface::{DrawSurface, NullSurface, present_pass};
