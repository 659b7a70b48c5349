use serde::{Deserialize, Serialize};

use crate::core::Point2;
use crate::error::{TernaryError, TernaryResult};
use crate::render::{Color, LineStrokeStyle, MarkerShape};

/// Handle of an artist added to a [`super::TernaryAxes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtistId(pub usize);

/// Stroke and marker style of a plotted line.
///
/// `stroke: None` draws markers only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Color,
    pub stroke: Option<LineStrokeStyle>,
    pub stroke_width: f64,
    pub marker: Option<MarkerShape>,
    pub marker_size_px: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::DEFAULT_BLUE,
            stroke: Some(LineStrokeStyle::Solid),
            stroke_width: 1.5,
            marker: None,
            marker_size_px: 6.0,
        }
    }
}

/// Parts named by a compact format string such as `"ro-"`; `None` where the
/// string says nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FormatSpec {
    pub color: Option<Color>,
    pub marker: Option<MarkerShape>,
    pub stroke: Option<LineStrokeStyle>,
}

impl FormatSpec {
    /// Each of color letter, marker, and line style may appear once.
    pub fn parse(format: &str) -> TernaryResult<Self> {
        let mut spec = Self::default();

        let chars: Vec<char> = format.chars().collect();
        let mut index = 0;
        while index < chars.len() {
            let current = chars[index];
            let next = chars.get(index + 1).copied();
            let (parsed_stroke, consumed) = match (current, next) {
                ('-', Some('-')) => (Some(LineStrokeStyle::Dashed), 2),
                ('-', Some('.')) => (Some(LineStrokeStyle::DashDot), 2),
                ('-', _) => (Some(LineStrokeStyle::Solid), 1),
                (':', _) => (Some(LineStrokeStyle::Dotted), 1),
                _ => (None, 1),
            };

            if let Some(parsed) = parsed_stroke {
                set_once(&mut spec.stroke, parsed, format, "line style")?;
            } else if let Some(parsed) = MarkerShape::from_code(current) {
                set_once(&mut spec.marker, parsed, format, "marker")?;
            } else if let Some(parsed) = Color::from_code(current) {
                set_once(&mut spec.color, parsed, format, "color")?;
            } else {
                return Err(TernaryError::InvalidData(format!(
                    "unrecognized character `{current}` in format string `{format}`"
                )));
            }
            index += consumed;
        }

        Ok(spec)
    }
}

impl LineStyle {
    /// Parses a compact format string such as `"ro-"`, `"k--"`, or `"^"`.
    ///
    /// Unnamed parts keep the default style. A marker without a line style
    /// draws markers only.
    pub fn parse_format(format: &str) -> TernaryResult<Self> {
        let spec = FormatSpec::parse(format)?;
        let defaults = Self::default();
        let stroke = match (spec.stroke, spec.marker) {
            (Some(stroke), _) => Some(stroke),
            (None, Some(_)) => None,
            (None, None) => defaults.stroke,
        };
        Ok(Self {
            color: spec.color.unwrap_or(defaults.color),
            stroke,
            marker: spec.marker,
            ..defaults
        })
    }

    pub fn validate(self) -> TernaryResult<Self> {
        self.color.validate()?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(TernaryError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.marker_size_px.is_finite() || self.marker_size_px <= 0.0 {
            return Err(TernaryError::InvalidData(
                "marker size must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, format: &str, what: &str) -> TernaryResult<()> {
    if slot.is_some() {
        return Err(TernaryError::InvalidData(format!(
            "format string `{format}` specifies {what} more than once"
        )));
    }
    *slot = Some(value);
    Ok(())
}

/// Marker style of a scatter plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterStyle {
    pub color: Color,
    pub marker: MarkerShape,
    pub size_px: f64,
}

impl Default for ScatterStyle {
    fn default() -> Self {
        Self {
            color: Color::DEFAULT_BLUE,
            marker: MarkerShape::Circle,
            size_px: 6.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineArtist {
    pub points: Vec<Point2>,
    pub style: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterArtist {
    pub points: Vec<Point2>,
    pub style: ScatterStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextArtist {
    pub position: Point2,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationArtist {
    pub text: String,
    pub xy: Point2,
    pub xytext: Option<Point2>,
}

/// Arrow from `start` to `start + delta`, both in plotting coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrowArtist {
    pub start: Point2,
    pub delta: Point2,
}

impl ArrowArtist {
    #[must_use]
    pub fn end(self) -> Point2 {
        self.start.offset(self.delta.x, self.delta.y)
    }
}

/// Everything drawn in data space; coordinates are resolved `(b, l)` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Artist {
    Line(LineArtist),
    Scatter(ScatterArtist),
    Text(TextArtist),
    Annotation(AnnotationArtist),
    Arrow(ArrowArtist),
}
