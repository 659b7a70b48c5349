use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Point2;
use crate::error::{TernaryError, TernaryResult};

/// Pure 2-D coordinate transform.
///
/// Implementations hold no mutable state, so applying them from several
/// threads (see the `parallel-projection` feature) is always safe.
pub trait Transform2D: Send + Sync {
    fn transform_point(&self, point: Point2) -> Point2;

    /// `true` when output x depends only on input x and output y only on input y.
    fn is_separable(&self) -> bool;

    fn transform_points(&self, points: &[Point2]) -> Vec<Point2> {
        #[cfg(feature = "parallel-projection")]
        {
            use rayon::prelude::*;
            points
                .par_iter()
                .map(|point| self.transform_point(*point))
                .collect()
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            points
                .iter()
                .map(|point| self.transform_point(*point))
                .collect()
        }
    }
}

/// Affine map `x' = a·x + c·y + e`, `y' = b·x + d·y + f`.
///
/// Builder methods append a stage, so `Affine2D::identity().scale(..).translate(..)`
/// scales first and translates second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Affine2D {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Affine2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine2D {
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    #[must_use]
    pub const fn from_values(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    #[must_use]
    pub fn scale(self, sx: f64, sy: f64) -> Self {
        self.then(Self::from_values(sx, 0.0, 0.0, sy, 0.0, 0.0))
    }

    #[must_use]
    pub fn translate(self, tx: f64, ty: f64) -> Self {
        self.then(Self::from_values(1.0, 0.0, 0.0, 1.0, tx, ty))
    }

    /// Counter-clockwise rotation in degrees.
    #[must_use]
    pub fn rotate_deg(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.then(Self::from_values(cos, sin, -sin, cos, 0.0, 0.0))
    }

    /// Composition applying `self` first and `next` second.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self {
            a: next.a * self.a + next.c * self.b,
            b: next.b * self.a + next.d * self.b,
            c: next.a * self.c + next.c * self.d,
            d: next.b * self.c + next.d * self.d,
            e: next.a * self.e + next.c * self.f + next.e,
            f: next.b * self.e + next.d * self.f + next.f,
        }
    }

    #[must_use]
    pub fn determinant(self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    pub fn inverted(self) -> TernaryResult<Self> {
        let det = self.determinant();
        if !det.is_finite() || det == 0.0 {
            return Err(TernaryError::SingularTransform);
        }
        let a = self.d / det;
        let b = -self.b / det;
        let c = -self.c / det;
        let d = self.a / det;
        Ok(Self {
            a,
            b,
            c,
            d,
            e: -(a * self.e + c * self.f),
            f: -(b * self.e + d * self.f),
        })
    }
}

impl Transform2D for Affine2D {
    fn transform_point(&self, point: Point2) -> Point2 {
        Point2::new(
            self.a * point.x + self.c * point.y + self.e,
            self.b * point.x + self.d * point.y + self.f,
        )
    }

    fn is_separable(&self) -> bool {
        self.b == 0.0 && self.c == 0.0
    }
}

/// Shear from ternary `(b, l)` data space onto Cartesian `(x, y)`:
/// `x = b + l / 2`, `y = l`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TernaryProjection;

impl TernaryProjection {
    #[must_use]
    pub fn inverted(self) -> InvertedTernaryProjection {
        InvertedTernaryProjection
    }
}

impl Transform2D for TernaryProjection {
    fn transform_point(&self, point: Point2) -> Point2 {
        Point2::new(point.x + point.y / 2.0, point.y)
    }

    fn is_separable(&self) -> bool {
        false
    }
}

/// Exact inverse of [`TernaryProjection`]: `b = x - y / 2`, `l = y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvertedTernaryProjection;

impl InvertedTernaryProjection {
    #[must_use]
    pub fn inverted(self) -> TernaryProjection {
        TernaryProjection
    }
}

impl Transform2D for InvertedTernaryProjection {
    fn transform_point(&self, point: Point2) -> Point2 {
        Point2::new(point.x - point.y / 2.0, point.y)
    }

    fn is_separable(&self) -> bool {
        false
    }
}

/// One stage of a [`TransformChain`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TransformStage {
    Projection,
    InvertedProjection,
    Affine(Affine2D),
}

impl TransformStage {
    fn inverted(self) -> TernaryResult<Self> {
        Ok(match self {
            Self::Projection => Self::InvertedProjection,
            Self::InvertedProjection => Self::Projection,
            Self::Affine(affine) => Self::Affine(affine.inverted()?),
        })
    }
}

impl Transform2D for TransformStage {
    fn transform_point(&self, point: Point2) -> Point2 {
        match self {
            Self::Projection => TernaryProjection.transform_point(point),
            Self::InvertedProjection => InvertedTernaryProjection.transform_point(point),
            Self::Affine(affine) => affine.transform_point(point),
        }
    }

    fn is_separable(&self) -> bool {
        match self {
            Self::Projection | Self::InvertedProjection => false,
            Self::Affine(affine) => affine.is_separable(),
        }
    }
}

/// Ordered composition of transform stages, applied first to last.
///
/// Adjacent affine stages are folded together on construction, so a chain
/// never holds two affines in a row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransformChain {
    stages: SmallVec<[TransformStage; 4]>,
}

impl TransformChain {
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_stage(stage: TransformStage) -> Self {
        Self::identity().then_stage(stage)
    }

    #[must_use]
    pub fn then_stage(mut self, stage: TransformStage) -> Self {
        match (self.stages.last_mut(), stage) {
            (Some(TransformStage::Affine(last)), TransformStage::Affine(next)) => {
                *last = last.then(next);
            }
            (_, stage) => self.stages.push(stage),
        }
        self
    }

    #[must_use]
    pub fn then_affine(self, affine: Affine2D) -> Self {
        self.then_stage(TransformStage::Affine(affine))
    }

    /// Composition applying `self` first and `next` second.
    #[must_use]
    pub fn then(self, next: &Self) -> Self {
        next.stages
            .iter()
            .fold(self, |chain, stage| chain.then_stage(*stage))
    }

    #[must_use]
    pub fn stages(&self) -> &[TransformStage] {
        &self.stages
    }

    pub fn inverted(&self) -> TernaryResult<Self> {
        let mut inverted = Self::identity();
        for stage in self.stages.iter().rev() {
            inverted = inverted.then_stage(stage.inverted()?);
        }
        Ok(inverted)
    }
}

impl Transform2D for TransformChain {
    fn transform_point(&self, point: Point2) -> Point2 {
        self.stages
            .iter()
            .fold(point, |point, stage| stage.transform_point(point))
    }

    fn is_separable(&self) -> bool {
        self.stages.iter().all(Transform2D::is_separable)
    }
}
