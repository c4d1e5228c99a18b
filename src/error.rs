//! Error types for the anofox-changepoint library.

use thiserror::Error;

/// Result type alias for changepoint operations.
pub type Result<T> = std::result::Result<T, ChangepointError>;

/// Errors that can occur during changepoint detection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChangepointError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A NaN or infinite observation was found.
    #[error("non-finite value at index {index}")]
    NonFiniteData { index: usize },
}
