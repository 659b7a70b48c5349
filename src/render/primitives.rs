use serde::{Deserialize, Serialize};

use crate::core::{Point2, TextHAlign, TextVAlign};
use crate::error::{TernaryError, TernaryResult};
use crate::render::FrameLayer;

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const GRID_GRAY: Self = Self::rgb(0.69, 0.69, 0.69);
    pub const DEFAULT_BLUE: Self = Self::rgb(0.122, 0.467, 0.706);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Single-letter color codes used by plot format strings.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        Some(match code {
            'b' => Self::rgb(0.0, 0.0, 1.0),
            'g' => Self::rgb(0.0, 0.5, 0.0),
            'r' => Self::rgb(1.0, 0.0, 0.0),
            'c' => Self::rgb(0.0, 0.75, 0.75),
            'm' => Self::rgb(0.75, 0.0, 0.75),
            'y' => Self::rgb(0.75, 0.75, 0.0),
            'k' => Self::BLACK,
            'w' => Self::WHITE,
            _ => return None,
        })
    }

    pub fn validate(self) -> TernaryResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(TernaryError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Dash pattern of a stroked line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl LineStrokeStyle {
    /// Dash lengths in pixels for a given stroke width; empty means solid.
    #[must_use]
    pub fn dash_pattern(self, stroke_width: f64) -> Vec<f64> {
        let unit = stroke_width.max(1.0);
        match self {
            Self::Solid => Vec::new(),
            Self::Dashed => vec![3.7 * unit, 1.6 * unit],
            Self::Dotted => vec![unit, 1.65 * unit],
            Self::DashDot => vec![6.4 * unit, 1.6 * unit, unit, 1.6 * unit],
        }
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub stroke_style: LineStrokeStyle,
    pub layer: FrameLayer,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(
        start: Point2,
        end: Point2,
        stroke_width: f64,
        color: Color,
        layer: FrameLayer,
    ) -> Self {
        Self {
            x1: start.x,
            y1: start.y,
            x2: end.x,
            y2: end.y,
            stroke_width,
            color,
            stroke_style: LineStrokeStyle::Solid,
            layer,
        }
    }

    #[must_use]
    pub const fn with_stroke_style(mut self, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }

    pub fn validate(self) -> TernaryResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(TernaryError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(TernaryError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Closed polygon in pixel space, filled and/or stroked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonPrimitive {
    pub vertices: Vec<Point2>,
    pub fill_color: Option<Color>,
    pub stroke_color: Option<Color>,
    pub stroke_width: f64,
    pub layer: FrameLayer,
}

impl PolygonPrimitive {
    pub fn validate(&self) -> TernaryResult<()> {
        if self.vertices.len() < 3 {
            return Err(TernaryError::InvalidData(
                "polygon needs at least three vertices".to_owned(),
            ));
        }
        if self.vertices.iter().any(|vertex| !vertex.is_finite()) {
            return Err(TernaryError::InvalidData(
                "polygon vertices must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(TernaryError::InvalidData(
                "polygon stroke width must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(fill) = self.fill_color {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke_color {
            stroke.validate()?;
        }
        Ok(())
    }
}

/// Marker glyphs understood by plot format strings and scatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarkerShape {
    #[default]
    Circle,
    Point,
    Square,
    TriangleUp,
    TriangleDown,
    Plus,
    Cross,
    Star,
}

impl MarkerShape {
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        Some(match code {
            'o' => Self::Circle,
            '.' => Self::Point,
            's' => Self::Square,
            '^' => Self::TriangleUp,
            'v' => Self::TriangleDown,
            '+' => Self::Plus,
            'x' => Self::Cross,
            '*' => Self::Star,
            _ => return None,
        })
    }
}

/// Draw command for one marker centered on `(x, y)` in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPrimitive {
    pub x: f64,
    pub y: f64,
    pub size_px: f64,
    pub shape: MarkerShape,
    pub color: Color,
    pub layer: FrameLayer,
}

impl MarkerPrimitive {
    pub fn validate(self) -> TernaryResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(TernaryError::InvalidData(
                "marker coordinates must be finite".to_owned(),
            ));
        }
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(TernaryError::InvalidData(
                "marker size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one label in pixel space.
///
/// `rotation_deg` is counter-clockwise as seen on screen, around the anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
    pub rotation_deg: f64,
    pub layer: FrameLayer,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        anchor: Point2,
        font_size_px: f64,
        color: Color,
        layer: FrameLayer,
    ) -> Self {
        Self {
            text: text.into(),
            x: anchor.x,
            y: anchor.y,
            font_size_px,
            color,
            h_align: TextHAlign::Center,
            v_align: TextVAlign::Center,
            rotation_deg: 0.0,
            layer,
        }
    }

    #[must_use]
    pub fn with_alignment(mut self, v_align: TextVAlign, h_align: TextHAlign) -> Self {
        self.v_align = v_align;
        self.h_align = h_align;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    pub fn validate(&self) -> TernaryResult<()> {
        if self.text.is_empty() {
            return Err(TernaryError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(TernaryError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.rotation_deg.is_finite() {
            return Err(TernaryError::InvalidData(
                "text rotation must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(TernaryError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
