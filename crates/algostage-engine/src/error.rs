//! Error types for algostage-engine.

use thiserror::Error;

/// Result type for stage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while commanding a stage.
#[derive(Debug, Error)]
pub enum Error {
    /// Custom dataset text could not be parsed into integers.
    #[error("invalid dataset input: {0}")]
    InvalidInput(String),

    /// A dataset must hold at least one value.
    #[error("dataset is empty")]
    EmptyDataset,

    /// Requested dataset size falls outside the configured bounds.
    #[error("dataset size {requested} outside 1..={max}")]
    InvalidSize { requested: usize, max: usize },

    /// A custom dataset exceeded the configured maximum size.
    #[error("dataset holds {got} values, maximum is {max}")]
    DatasetTooLarge { got: usize, max: usize },

    /// A search cannot start until a target value is set.
    #[error("no target set for {0}")]
    MissingTarget(&'static str),
}
