use serde::{Deserialize, Serialize};

/// Fixed spacing reserved around each rendered column, in pixels.
pub const COLUMN_PADDING: f64 = 1.2;

/// Per-pass column width budget, shared by every interval in the pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnBudget {
    /// Rendered column width before padding is subtracted, capped by the
    /// caller-supplied maximum.
    pub candle_width: f64,
    /// Leftover pixel width beyond the cap, split as symmetric padding.
    pub exceed: f64,
}

impl ColumnBudget {
    /// Final rendered shape width, clamped at zero when the budget is
    /// narrower than the padding itself.
    #[must_use]
    pub fn rendered_width(self) -> f64 {
        (self.candle_width - COLUMN_PADDING).max(0.0)
    }
}

/// Splits the pixel space available per interval into a capped column width
/// and the leftover to distribute around it.
///
/// `total_space` is `unit_width * interval - COLUMN_PADDING`: padding is
/// charged once per column, not once per aggregated sample.
#[must_use]
pub fn allocate_column(unit_width: f64, interval: usize, max_column_width: f64) -> ColumnBudget {
    let total_space = unit_width * interval as f64 - COLUMN_PADDING;

    if total_space > max_column_width {
        ColumnBudget {
            candle_width: max_column_width,
            exceed: total_space - max_column_width,
        }
    } else {
        ColumnBudget {
            candle_width: total_space,
            exceed: 0.0,
        }
    }
}
