use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TernaryError, TernaryResult};

/// Shape of one ternary component: a single value or a parallel array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Scalar,
    Array(usize),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => f.write_str("scalar"),
            Self::Array(len) => write!(f, "array[{len}]"),
        }
    }
}

/// One of `b`, `l`, or `r`, either a scalar or a parallel array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComponentValue {
    Scalar(f64),
    Array(Vec<f64>),
}

impl ComponentValue {
    #[must_use]
    pub fn shape(&self) -> Shape {
        match self {
            Self::Scalar(_) => Shape::Scalar,
            Self::Array(values) => Shape::Array(values.len()),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Array(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            Self::Array(_) => None,
        }
    }

    /// Element at `index`; a scalar answers for every index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            Self::Array(values) => values.get(index).copied(),
        }
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            Self::Scalar(value) => vec![*value],
            Self::Array(values) => values.clone(),
        }
    }

    /// Scalar value, or an error naming the component when an array was given.
    pub fn expect_scalar(&self, name: &str) -> TernaryResult<f64> {
        self.as_scalar().ok_or_else(|| {
            TernaryError::InvalidData(format!("`{name}` must be a scalar, got {}", self.shape()))
        })
    }

    /// Element-wise combination of two same-shaped values.
    ///
    /// Shapes are expected to be validated by the caller.
    pub(crate) fn zip_with(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Self {
        match (self, other) {
            (Self::Scalar(lhs), Self::Scalar(rhs)) => Self::Scalar(op(*lhs, *rhs)),
            _ => Self::Array(
                (0..self.len().max(other.len()))
                    .map(|index| {
                        op(
                            self.get(index).unwrap_or(f64::NAN),
                            other.get(index).unwrap_or(f64::NAN),
                        )
                    })
                    .collect(),
            ),
        }
    }
}

impl From<f64> for ComponentValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<f64>> for ComponentValue {
    fn from(values: Vec<f64>) -> Self {
        Self::Array(values)
    }
}

impl From<&[f64]> for ComponentValue {
    fn from(values: &[f64]) -> Self {
        Self::Array(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for ComponentValue {
    fn from(values: [f64; N]) -> Self {
        Self::Array(values.to_vec())
    }
}
