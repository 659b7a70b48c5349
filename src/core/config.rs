use serde::{Deserialize, Serialize};

use crate::error::{TernaryError, TernaryResult};

pub const DEFAULT_TOTAL: f64 = 1.0;
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Invariant sum and relative tolerance shared by the resolver and the
/// transform chain of one ternary surface.
///
/// The value is immutable; a surface that needs another total builds a new
/// config and rebuilds everything derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TernaryConfig {
    total: f64,
    tolerance: f64,
}

impl Default for TernaryConfig {
    fn default() -> Self {
        Self {
            total: DEFAULT_TOTAL,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl TernaryConfig {
    pub fn new(total: f64) -> TernaryResult<Self> {
        Self::default().with_total(total)
    }

    /// Returns a copy with another total.
    pub fn with_total(self, total: f64) -> TernaryResult<Self> {
        if !total.is_finite() || total <= 0.0 {
            return Err(TernaryError::InvalidTotal { total });
        }
        Ok(Self { total, ..self })
    }

    /// Returns a copy with another relative tolerance.
    pub fn with_tolerance(self, tolerance: f64) -> TernaryResult<Self> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(TernaryError::InvalidData(
                "tolerance must be finite and >= 0".to_owned(),
            ));
        }
        Ok(Self { tolerance, ..self })
    }

    #[must_use]
    pub fn total(self) -> f64 {
        self.total
    }

    #[must_use]
    pub fn tolerance(self) -> f64 {
        self.tolerance
    }

    /// Re-checks a config that may have been deserialized from outside input.
    pub fn validate(self) -> TernaryResult<Self> {
        Self::default()
            .with_total(self.total)?
            .with_tolerance(self.tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::TernaryConfig;
    use crate::error::TernaryError;

    #[test]
    fn defaults_match_unit_total() {
        let config = TernaryConfig::default();
        assert_eq!(config.total(), 1.0);
        assert_eq!(config.tolerance(), 1e-12);
    }

    #[test]
    fn non_positive_total_is_rejected() {
        for total in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = TernaryConfig::new(total).expect_err("total must be rejected");
            assert!(matches!(err, TernaryError::InvalidTotal { .. }));
        }
    }

    #[test]
    fn negative_tolerance_is_rejected() {
        assert!(TernaryConfig::default().with_tolerance(-1e-3).is_err());
    }
}
