use thiserror::Error;

use crate::core::Shape;

pub type TernaryResult<T> = Result<T, TernaryError>;

#[derive(Debug, Error)]
pub enum TernaryError {
    #[error("at least two of b, l, and r must be specified (got {provided})")]
    Underspecified { provided: usize },

    #[error("b, l, and r must have the same shape when specified: {first} vs {second}")]
    ShapeMismatch { first: Shape, second: Shape },

    #[error(
        "the sum of b, l, and r is {sum}{}, but it must be {total} (relative error {relative_error} exceeds tolerance {tolerance})",
        .index.map(|i| format!(" at index {i}")).unwrap_or_default()
    )]
    ToleranceExceeded {
        index: Option<usize>,
        sum: f64,
        total: f64,
        relative_error: f64,
        tolerance: f64,
    },

    #[error("{operation} is not supported by the ternary axes: {reason}")]
    UnsupportedOperation {
        operation: &'static str,
        reason: &'static str,
    },

    #[error("invalid total: {total} (must be finite and > 0)")]
    InvalidTotal { total: f64 },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("transform is singular and cannot be inverted")]
    SingularTransform,

    #[error("invalid data: {0}")]
    InvalidData(String),
}
