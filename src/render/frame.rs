use crate::core::{Point2, Viewport};
use crate::error::{TernaryError, TernaryResult};
use crate::render::{FrameLayer, LinePrimitive, MarkerPrimitive, PolygonPrimitive, TextPrimitive};

/// Backend-agnostic scene for one ternary draw pass.
///
/// All coordinates are device pixels. Primitives on clipped layers
/// (see [`FrameLayer::is_clipped`]) must be clipped to `clip_polygon`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub clip_polygon: Vec<Point2>,
    pub polygons: Vec<PolygonPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub markers: Vec<MarkerPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            clip_polygon: Vec::new(),
            polygons: Vec::new(),
            lines: Vec::new(),
            markers: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_clip_polygon(mut self, clip_polygon: Vec<Point2>) -> Self {
        self.clip_polygon = clip_polygon;
        self
    }

    #[must_use]
    pub fn with_polygon(mut self, polygon: PolygonPrimitive) -> Self {
        self.polygons.push(polygon);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    pub fn validate(&self) -> TernaryResult<()> {
        self.viewport.validate()?;
        if !self.clip_polygon.is_empty() && self.clip_polygon.len() < 3 {
            return Err(TernaryError::InvalidData(
                "clip polygon needs at least three vertices".to_owned(),
            ));
        }
        if self.clip_polygon.iter().any(|vertex| !vertex.is_finite()) {
            return Err(TernaryError::InvalidData(
                "clip polygon vertices must be finite".to_owned(),
            ));
        }

        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
            && self.lines.is_empty()
            && self.markers.is_empty()
            && self.texts.is_empty()
    }

    pub fn lines_on(&self, layer: FrameLayer) -> impl Iterator<Item = &LinePrimitive> {
        self.lines.iter().filter(move |line| line.layer == layer)
    }

    pub fn texts_on(&self, layer: FrameLayer) -> impl Iterator<Item = &TextPrimitive> {
        self.texts.iter().filter(move |text| text.layer == layer)
    }
}
