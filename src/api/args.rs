use crate::core::ComponentValue;
use crate::error::{TernaryError, TernaryResult};

/// Third positional value of a drawing call.
///
/// Plotting primitives conventionally take `(x, y, fmt)` or `(x, y, text)`;
/// a `Label` keeps that meaning and bypasses resolution, while a
/// `Coordinate` is the `r` component.
#[derive(Debug, Clone, PartialEq)]
pub enum ThirdArg {
    Coordinate(ComponentValue),
    Label(String),
}

impl From<ComponentValue> for ThirdArg {
    fn from(value: ComponentValue) -> Self {
        Self::Coordinate(value)
    }
}

impl From<f64> for ThirdArg {
    fn from(value: f64) -> Self {
        Self::Coordinate(ComponentValue::Scalar(value))
    }
}

impl From<Vec<f64>> for ThirdArg {
    fn from(values: Vec<f64>) -> Self {
        Self::Coordinate(ComponentValue::Array(values))
    }
}

impl<const N: usize> From<[f64; N]> for ThirdArg {
    fn from(values: [f64; N]) -> Self {
        Self::Coordinate(ComponentValue::from(values))
    }
}

impl From<&str> for ThirdArg {
    fn from(label: &str) -> Self {
        Self::Label(label.to_owned())
    }
}

impl From<String> for ThirdArg {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

/// `(b, l, r)` arguments of a drawing call; any one may be omitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TernaryArgs {
    pub b: Option<ComponentValue>,
    pub l: Option<ComponentValue>,
    pub third: Option<ThirdArg>,
}

/// What a drawing call does with its arguments, decided once at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TernaryCall {
    Resolve {
        b: Option<ComponentValue>,
        l: Option<ComponentValue>,
        r: Option<ComponentValue>,
    },
    Passthrough {
        b: ComponentValue,
        l: ComponentValue,
        label: String,
    },
}

impl TernaryArgs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn blr(
        b: impl Into<ComponentValue>,
        l: impl Into<ComponentValue>,
        r: impl Into<ComponentValue>,
    ) -> Self {
        Self::new().b(b).l(l).r(r)
    }

    #[must_use]
    pub fn bl(b: impl Into<ComponentValue>, l: impl Into<ComponentValue>) -> Self {
        Self::new().b(b).l(l)
    }

    #[must_use]
    pub fn br(b: impl Into<ComponentValue>, r: impl Into<ComponentValue>) -> Self {
        Self::new().b(b).r(r)
    }

    #[must_use]
    pub fn lr(l: impl Into<ComponentValue>, r: impl Into<ComponentValue>) -> Self {
        Self::new().l(l).r(r)
    }

    #[must_use]
    pub fn b(mut self, b: impl Into<ComponentValue>) -> Self {
        self.b = Some(b.into());
        self
    }

    #[must_use]
    pub fn l(mut self, l: impl Into<ComponentValue>) -> Self {
        self.l = Some(l.into());
        self
    }

    #[must_use]
    pub fn r(mut self, r: impl Into<ComponentValue>) -> Self {
        self.third = Some(ThirdArg::Coordinate(r.into()));
        self
    }

    /// Sets the third value as a format string or text label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.third = Some(ThirdArg::Label(label.into()));
        self
    }

    #[must_use]
    pub fn third(mut self, third: impl Into<ThirdArg>) -> Self {
        self.third = Some(third.into());
        self
    }

    pub(crate) fn into_call(self) -> TernaryResult<TernaryCall> {
        match self.third {
            Some(ThirdArg::Label(label)) => {
                let provided = usize::from(self.b.is_some()) + usize::from(self.l.is_some());
                match (self.b, self.l) {
                    (Some(b), Some(l)) => Ok(TernaryCall::Passthrough { b, l, label }),
                    _ => Err(TernaryError::Underspecified { provided }),
                }
            }
            Some(ThirdArg::Coordinate(r)) => Ok(TernaryCall::Resolve {
                b: self.b,
                l: self.l,
                r: Some(r),
            }),
            None => Ok(TernaryCall::Resolve {
                b: self.b,
                l: self.l,
                r: None,
            }),
        }
    }

    /// Arguments that must be numeric coordinates (annotations, arrows).
    pub(crate) fn into_coordinates(
        self,
    ) -> TernaryResult<(
        Option<ComponentValue>,
        Option<ComponentValue>,
        Option<ComponentValue>,
    )> {
        match self.third {
            Some(ThirdArg::Label(label)) => Err(TernaryError::InvalidData(format!(
                "expected a numeric r coordinate, got label `{label}`"
            ))),
            Some(ThirdArg::Coordinate(r)) => Ok((self.b, self.l, Some(r))),
            None => Ok((self.b, self.l, None)),
        }
    }
}

/// Per-component displacement of an arrow, in data units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TernaryDelta {
    pub db: Option<f64>,
    pub dl: Option<f64>,
    pub dr: Option<f64>,
}

impl TernaryDelta {
    #[must_use]
    pub fn new(db: Option<f64>, dl: Option<f64>, dr: Option<f64>) -> Self {
        Self { db, dl, dr }
    }
}
