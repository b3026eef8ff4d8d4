pub mod aggregate;
pub mod allocate;
pub mod extent;
pub mod layout;
pub mod scale;
pub mod types;

pub use aggregate::{OhlcSummary, aggregate_interval, interval_count};
pub use allocate::{COLUMN_PADDING, ColumnBudget, allocate_column};
pub use extent::SeriesExtents;
pub use layout::{
    GeometryDescriptor, LayoutParameters, LayoutPass, SampleWarning, SeriesStyle, layout_series,
    project_interval,
};
pub use scale::{AxisScale, FnScale, LinearScale, LogScale};
pub use types::{DrawPoint, Sample};
