use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{ComponentValue, Point2, Shape, TernaryConfig};
use crate::error::{TernaryError, TernaryResult};

/// The two independent plotting coordinates produced by [`Resolver::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedCoordinates {
    pub b: ComponentValue,
    pub l: ComponentValue,
}

impl ResolvedCoordinates {
    /// Number of resolved points (1 for scalars).
    #[must_use]
    pub fn len(&self) -> usize {
        self.b.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.b.is_empty()
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.b.shape()
    }

    /// Resolved `(b, l)` pairs in data space.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        (0..self.len())
            .map(|index| {
                Point2::new(
                    self.b.get(index).unwrap_or(f64::NAN),
                    self.l.get(index).unwrap_or(f64::NAN),
                )
            })
            .collect()
    }

    /// Single `(b, l)` point; fails for array results.
    pub fn point(&self) -> TernaryResult<Point2> {
        Ok(Point2::new(
            self.b.expect_scalar("b")?,
            self.l.expect_scalar("l")?,
        ))
    }
}

/// Resolves an over-determined `(b, l, r)` triple down to `(b, l)`.
///
/// At least two components must be given. A missing `b` or `l` is completed
/// from the total; a full triple is checked against the total within the
/// configured relative tolerance and rescaled onto it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolver {
    config: TernaryConfig,
}

impl Resolver {
    #[must_use]
    pub fn new(config: TernaryConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(self) -> TernaryConfig {
        self.config
    }

    pub fn resolve(
        self,
        b: Option<ComponentValue>,
        l: Option<ComponentValue>,
        r: Option<ComponentValue>,
    ) -> TernaryResult<ResolvedCoordinates> {
        let provided = [&b, &l, &r].iter().filter(|value| value.is_some()).count();
        let total = self.config.total();

        let resolved = match (b, l, r) {
            (None, Some(l), Some(r)) => {
                ensure_same_shape(&l, &r)?;
                let b = complement(total, &l, &r);
                ResolvedCoordinates { b, l }
            }
            (Some(b), None, Some(r)) => {
                ensure_same_shape(&b, &r)?;
                let l = complement(total, &b, &r);
                ResolvedCoordinates { b, l }
            }
            (Some(b), Some(l), None) => {
                ensure_same_shape(&b, &l)?;
                ResolvedCoordinates { b, l }
            }
            (Some(b), Some(l), Some(r)) => {
                ensure_same_shape(&b, &l)?;
                ensure_same_shape(&b, &r)?;
                self.rescale_full_triple(b, l, &r)?
            }
            _ => return Err(TernaryError::Underspecified { provided }),
        };

        trace!(
            provided,
            len = resolved.len(),
            total,
            "resolved ternary coordinates"
        );
        Ok(resolved)
    }

    /// Convenience for the all-scalar case.
    pub fn resolve_point(
        self,
        b: Option<f64>,
        l: Option<f64>,
        r: Option<f64>,
    ) -> TernaryResult<Point2> {
        self.resolve(
            b.map(ComponentValue::Scalar),
            l.map(ComponentValue::Scalar),
            r.map(ComponentValue::Scalar),
        )?
        .point()
    }

    fn rescale_full_triple(
        self,
        b: ComponentValue,
        l: ComponentValue,
        r: &ComponentValue,
    ) -> TernaryResult<ResolvedCoordinates> {
        let total = self.config.total();
        let tolerance = self.config.tolerance();
        let sums = b.zip_with(&l, |b, l| b + l).zip_with(r, |bl, r| bl + r);
        let indexed = matches!(sums, ComponentValue::Array(_));

        let mut factors = Vec::with_capacity(sums.len());
        for index in 0..sums.len() {
            let sum = sums.get(index).unwrap_or(f64::NAN);
            let factor = total / sum;
            let relative_error = (1.0 - factor).abs();
            // NaN must fail, so compare the negated acceptance.
            if !(relative_error <= tolerance) {
                return Err(TernaryError::ToleranceExceeded {
                    index: indexed.then_some(index),
                    sum,
                    total,
                    relative_error,
                    tolerance,
                });
            }
            factors.push(factor);
        }

        let factor = match &sums {
            ComponentValue::Scalar(_) => ComponentValue::Scalar(factors[0]),
            ComponentValue::Array(_) => ComponentValue::Array(factors),
        };
        Ok(ResolvedCoordinates {
            b: b.zip_with(&factor, |value, factor| value * factor),
            l: l.zip_with(&factor, |value, factor| value * factor),
        })
    }
}

fn ensure_same_shape(first: &ComponentValue, second: &ComponentValue) -> TernaryResult<()> {
    if first.shape() != second.shape() {
        return Err(TernaryError::ShapeMismatch {
            first: first.shape(),
            second: second.shape(),
        });
    }
    Ok(())
}

fn complement(total: f64, first: &ComponentValue, second: &ComponentValue) -> ComponentValue {
    first.zip_with(second, |first, second| total - first - second)
}
