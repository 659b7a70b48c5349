use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Affine2D, Point2, TransformChain, Viewport};
use crate::error::{TernaryError, TernaryResult};

pub const SQRT3: f64 = 1.732_050_807_568_877_2;

/// Half-width of the fitted triangle base in axes units.
pub const FIT_HALF_BASE: f64 = 0.9 / SQRT3;
/// Axes-space y of the triangle base.
pub const FIT_BASE_Y: f64 = 0.05;
/// Axes-space y of the apex; the band above it is kept free for the title.
pub const FIT_APEX_Y: f64 = 0.95;

pub const DEFAULT_TICK_LABEL_PAD_PX: f64 = 4.0;

/// Scale-then-translate stage fitting the sheared triangle into the unit
/// axes square.
///
/// `b = total, l = 0` lands on the lower-left corner, `b = 0, l = 0` on the
/// lower-right corner, and `l = total` on the apex.
#[must_use]
pub fn viewport_fit_affine(total: f64) -> Affine2D {
    Affine2D::identity()
        .scale(-1.8 / (SQRT3 * total), 0.9 / total)
        .translate(0.5 + FIT_HALF_BASE, FIT_BASE_Y)
}

/// Placement of the unit axes square inside the viewport, as viewport
/// fractions measured from the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubplotMargins {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Default for SubplotMargins {
    fn default() -> Self {
        Self {
            left: 0.125,
            right: 0.9,
            bottom: 0.11,
            top: 0.88,
        }
    }
}

impl SubplotMargins {
    pub fn validate(self) -> TernaryResult<Self> {
        for (name, value) in [
            ("left", self.left),
            ("right", self.right),
            ("bottom", self.bottom),
            ("top", self.top),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(TernaryError::InvalidData(format!(
                    "subplot margin `{name}` must be finite and in [0, 1]"
                )));
            }
        }
        if self.left >= self.right || self.bottom >= self.top {
            return Err(TernaryError::InvalidData(
                "subplot margins must satisfy left < right and bottom < top".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Maps the unit axes square onto device pixels (origin top-left, y down).
pub fn axes_to_display_affine(
    viewport: Viewport,
    margins: SubplotMargins,
) -> TernaryResult<Affine2D> {
    viewport.validate()?;
    let margins = margins.validate()?;
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);

    Ok(Affine2D::identity()
        .scale(margins.right - margins.left, margins.top - margins.bottom)
        .translate(margins.left, margins.bottom)
        .scale(width, -height)
        .translate(0.0, height))
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextVAlign {
    Top,
    Center,
    Bottom,
}

/// Transform plus alignment used to place one axis' tick labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTextTransform {
    pub transform: TransformChain,
    pub v_align: TextVAlign,
    pub h_align: TextHAlign,
}

impl AxisTextTransform {
    #[must_use]
    pub fn into_parts(self) -> (TransformChain, TextVAlign, TextHAlign) {
        (self.transform, self.v_align, self.h_align)
    }
}

/// Side of the triangle a spine is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpineSide {
    Bottom,
    Left,
    Right,
}

impl SpineSide {
    pub const ALL: [Self; 3] = [Self::Bottom, Self::Left, Self::Right];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for SpineSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for SpineSide {
    type Err = TernaryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(TernaryError::InvalidData(format!(
                "unable to make path for spine `{other}`"
            ))),
        }
    }
}

/// Straight spine segment in data space normalized by the total
/// (`(1, 0)` means `b = total, l = 0`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinePath {
    pub side: SpineSide,
    pub start: Point2,
    pub end: Point2,
}

impl SpinePath {
    #[must_use]
    pub fn for_side(side: SpineSide) -> Self {
        let (start, end) = match side {
            SpineSide::Bottom => (Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)),
            SpineSide::Left => (Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)),
            SpineSide::Right => (Point2::new(0.0, 0.0), Point2::new(0.0, 1.0)),
        };
        Self { side, start, end }
    }

    /// Endpoints scaled into data space for the given total.
    #[must_use]
    pub fn data_endpoints(self, total: f64) -> (Point2, Point2) {
        (
            Point2::new(self.start.x * total, self.start.y * total),
            Point2::new(self.end.x * total, self.end.y * total),
        )
    }
}

/// Closed polygon in axes space behind the plot; drawn content is clipped to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundPatch {
    pub vertices: Vec<Point2>,
}

impl BackgroundPatch {
    #[must_use]
    pub fn triangle() -> Self {
        Self {
            vertices: vec![
                Point2::new(0.5 + FIT_HALF_BASE, FIT_BASE_Y),
                Point2::new(0.5, FIT_APEX_Y),
                Point2::new(0.5 - FIT_HALF_BASE, FIT_BASE_Y),
                Point2::new(0.5 + FIT_HALF_BASE, FIT_BASE_Y),
            ],
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) => self.vertices.len() > 2 && first == last,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BackgroundPatch, SpineSide, SubplotMargins, axes_to_display_affine};
    use crate::core::{Point2, Transform2D, Viewport};

    #[test]
    fn axes_square_maps_into_margins_with_y_down() {
        let affine = axes_to_display_affine(Viewport::new(1000, 500), SubplotMargins::default())
            .expect("valid affine");
        let origin = affine.transform_point(Point2::new(0.0, 0.0));
        let corner = affine.transform_point(Point2::new(1.0, 1.0));
        assert!((origin.x - 125.0).abs() < 1e-9);
        assert!((origin.y - 445.0).abs() < 1e-9);
        assert!((corner.x - 900.0).abs() < 1e-9);
        assert!((corner.y - 60.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_spine_name_is_rejected() {
        assert!("top".parse::<SpineSide>().is_err());
        assert_eq!("left".parse::<SpineSide>().ok(), Some(SpineSide::Left));
    }

    #[test]
    fn background_patch_is_closed() {
        assert!(BackgroundPatch::triangle().is_closed());
    }

    #[test]
    fn inverted_margins_are_rejected() {
        let margins = SubplotMargins {
            left: 0.9,
            right: 0.1,
            ..SubplotMargins::default()
        };
        assert!(margins.validate().is_err());
    }
}
