use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::layout::{
    AxisTextTransform, BackgroundPatch, SpinePath, SpineSide, TextHAlign, TextVAlign,
    viewport_fit_affine,
};
use crate::core::{Affine2D, Resolver, TernaryConfig, TransformChain, TransformStage};
use crate::error::{TernaryError, TernaryResult};

pub const TERNARY_PROJECTION_NAME: &str = "ternary";

/// Capability interface a host adapter needs from a projection.
///
/// "Axes space" is the unit square the host maps onto its device rectangle;
/// every transform returned here ends in axes space unless it is handed the
/// `axes_to_display` stage explicitly.
pub trait CoordinateSystem: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Data space to axes space.
    fn forward(&self) -> TransformChain;

    /// Axes space to data space.
    fn inverse(&self) -> TernaryResult<TransformChain> {
        self.forward().inverted()
    }

    fn spine_paths(&self) -> IndexMap<SpineSide, SpinePath>;

    fn background_patch(&self) -> BackgroundPatch;

    /// Data space to display space.
    fn data_transform(&self, axes_to_display: Affine2D) -> TransformChain {
        self.forward().then_affine(axes_to_display)
    }

    /// Placement of the first (x) axis tick labels.
    fn xaxis_text_transform(&self, axes_to_display: Affine2D, pad_px: f64)
    -> AxisTextTransform;

    /// Placement of the second (y) axis tick labels.
    fn yaxis_text_transform(&self, axes_to_display: Affine2D, pad_px: f64)
    -> AxisTextTransform;
}

/// Ternary projection: shear `(b, l)` onto an equilateral triangle and fit
/// it into the axes square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TernaryCoordinateSystem {
    config: TernaryConfig,
}

impl TernaryCoordinateSystem {
    #[must_use]
    pub fn new(config: TernaryConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(self) -> TernaryConfig {
        self.config
    }

    #[must_use]
    pub fn resolver(self) -> Resolver {
        Resolver::new(self.config)
    }

    #[must_use]
    pub fn viewport_fit(self) -> Affine2D {
        viewport_fit_affine(self.config.total())
    }
}

impl CoordinateSystem for TernaryCoordinateSystem {
    fn name(&self) -> &str {
        TERNARY_PROJECTION_NAME
    }

    fn forward(&self) -> TransformChain {
        TransformChain::from_stage(TransformStage::Projection).then_affine(self.viewport_fit())
    }

    fn spine_paths(&self) -> IndexMap<SpineSide, SpinePath> {
        SpineSide::ALL
            .into_iter()
            .map(|side| (side, SpinePath::for_side(side)))
            .collect()
    }

    fn background_patch(&self) -> BackgroundPatch {
        BackgroundPatch::triangle()
    }

    fn xaxis_text_transform(
        &self,
        axes_to_display: Affine2D,
        pad_px: f64,
    ) -> AxisTextTransform {
        // Labels hang below the bottom edge; device y grows downwards.
        AxisTextTransform {
            transform: self
                .data_transform(axes_to_display)
                .then_affine(Affine2D::identity().translate(0.0, pad_px)),
            v_align: TextVAlign::Center,
            h_align: TextHAlign::Left,
        }
    }

    fn yaxis_text_transform(
        &self,
        axes_to_display: Affine2D,
        pad_px: f64,
    ) -> AxisTextTransform {
        // (0, l) is swung onto the slanted left edge: (total - l, l).
        let onto_left_edge = Affine2D::identity()
            .scale(1.0, std::f64::consts::SQRT_2)
            .rotate_deg(45.0)
            .translate(self.config.total(), 0.0);
        AxisTextTransform {
            transform: TransformChain::identity()
                .then_affine(onto_left_edge)
                .then(&self.data_transform(axes_to_display))
                .then_affine(Affine2D::identity().translate(-pad_px, 0.0)),
            v_align: TextVAlign::Center,
            h_align: TextHAlign::Right,
        }
    }
}

pub type ProjectionFactory = fn(TernaryConfig) -> Box<dyn CoordinateSystem>;

fn ternary_factory(config: TernaryConfig) -> Box<dyn CoordinateSystem> {
    Box::new(TernaryCoordinateSystem::new(config))
}

/// Name-keyed projection registry used by hosts to instantiate a
/// coordinate system for a drawing surface.
#[derive(Debug, Clone, Default)]
pub struct ProjectionRegistry {
    factories: IndexMap<String, ProjectionFactory>,
}

impl ProjectionRegistry {
    /// Registry with the built-in `"ternary"` projection.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut factories: IndexMap<String, ProjectionFactory> = IndexMap::new();
        factories.insert(TERNARY_PROJECTION_NAME.to_owned(), ternary_factory);
        Self { factories }
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: ProjectionFactory,
    ) -> TernaryResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TernaryError::InvalidData(
                "projection name must not be empty".to_owned(),
            ));
        }
        if self.factories.contains_key(&name) {
            return Err(TernaryError::InvalidData(format!(
                "projection `{name}` is already registered"
            )));
        }
        debug!(projection = %name, "register projection");
        self.factories.insert(name, factory);
        Ok(())
    }

    pub fn create(
        &self,
        name: &str,
        config: TernaryConfig,
    ) -> TernaryResult<Box<dyn CoordinateSystem>> {
        let factory = self.factories.get(name).ok_or_else(|| {
            TernaryError::InvalidData(format!("unknown projection `{name}`"))
        })?;
        Ok(factory(config.validate()?))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}
