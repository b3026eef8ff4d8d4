use thiserror::Error;

pub type LayoutResult<T> = Result<T, LayoutError>;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("interval must be >= 1, got {interval}")]
    InvalidInterval { interval: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
