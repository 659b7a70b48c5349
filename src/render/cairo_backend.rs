use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::PI;

use crate::core::Point2;
use crate::error::{TernaryError, TernaryResult};
use crate::render::{
    Color, FrameLayer, LinePrimitive, MarkerPrimitive, MarkerShape, PolygonPrimitive,
    RenderFrame, Renderer, TextHAlign, TextPrimitive, TextVAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub polygons_drawn: usize,
    pub lines_drawn: usize,
    pub markers_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> TernaryResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> TernaryResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(TernaryError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> TernaryResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> TernaryResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for layer in FrameLayer::CANONICAL_ORDER {
            context
                .save()
                .map_err(|err| map_backend_error("failed to save context", err))?;
            if layer.is_clipped() && !frame.clip_polygon.is_empty() {
                append_polygon_path(context, &frame.clip_polygon);
                context.clip();
            }

            for polygon in frame.polygons.iter().filter(|item| item.layer == layer) {
                draw_polygon(context, polygon)?;
                stats.polygons_drawn += 1;
            }
            for line in frame.lines.iter().filter(|item| item.layer == layer) {
                draw_line(context, line)?;
                stats.lines_drawn += 1;
            }
            for marker in frame.markers.iter().filter(|item| item.layer == layer) {
                draw_marker(context, marker)?;
                stats.markers_drawn += 1;
            }
            for text in frame.texts.iter().filter(|item| item.layer == layer) {
                draw_text(context, text)?;
                stats.texts_drawn += 1;
            }

            context
                .restore()
                .map_err(|err| map_backend_error("failed to restore context", err))?;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> TernaryResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> TernaryResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_polygon(context: &Context, polygon: &PolygonPrimitive) -> TernaryResult<()> {
    append_polygon_path(context, &polygon.vertices);
    if let Some(fill) = polygon.fill_color {
        apply_color(context, fill);
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill polygon", err))?;
    }
    if let Some(stroke) = polygon.stroke_color.filter(|_| polygon.stroke_width > 0.0) {
        apply_color(context, stroke);
        context.set_line_width(polygon.stroke_width);
        context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke polygon", err))?;
    }
    context.new_path();
    Ok(())
}

fn draw_line(context: &Context, line: &LinePrimitive) -> TernaryResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    context.set_dash(&line.stroke_style.dash_pattern(line.stroke_width), 0.0);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))?;
    context.set_dash(&[], 0.0);
    Ok(())
}

fn draw_marker(context: &Context, marker: &MarkerPrimitive) -> TernaryResult<()> {
    let half = marker.size_px / 2.0;
    let (x, y) = (marker.x, marker.y);
    apply_color(context, marker.color);
    context.set_line_width(1.0);
    match marker.shape {
        MarkerShape::Circle | MarkerShape::Point => {
            let radius = if marker.shape == MarkerShape::Point {
                half / 2.0
            } else {
                half
            };
            context.new_sub_path();
            context.arc(x, y, radius, 0.0, 2.0 * PI);
            fill(context)
        }
        MarkerShape::Square => {
            context.rectangle(x - half, y - half, marker.size_px, marker.size_px);
            fill(context)
        }
        MarkerShape::TriangleUp | MarkerShape::TriangleDown => {
            let tip = if marker.shape == MarkerShape::TriangleUp {
                -half
            } else {
                half
            };
            append_polygon_path(
                context,
                &[
                    Point2::new(x, y + tip),
                    Point2::new(x - half, y - tip),
                    Point2::new(x + half, y - tip),
                ],
            );
            fill(context)
        }
        MarkerShape::Plus => {
            context.move_to(x - half, y);
            context.line_to(x + half, y);
            context.move_to(x, y - half);
            context.line_to(x, y + half);
            stroke(context)
        }
        MarkerShape::Cross | MarkerShape::Star => {
            context.move_to(x - half, y - half);
            context.line_to(x + half, y + half);
            context.move_to(x - half, y + half);
            context.line_to(x + half, y - half);
            if marker.shape == MarkerShape::Star {
                context.move_to(x, y - half);
                context.line_to(x, y + half);
            }
            stroke(context)
        }
    }
}

fn draw_text(context: &Context, text: &TextPrimitive) -> TernaryResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (width, height) = layout.pixel_size();
    let (width, height) = (f64::from(width), f64::from(height));
    let dx = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -width / 2.0,
        TextHAlign::Right => -width,
    };
    let dy = match text.v_align {
        TextVAlign::Top => 0.0,
        TextVAlign::Center => -height / 2.0,
        TextVAlign::Bottom => -height,
    };

    context
        .save()
        .map_err(|err| map_backend_error("failed to save context", err))?;
    apply_color(context, text.color);
    context.translate(text.x, text.y);
    context.rotate(-text.rotation_deg.to_radians());
    context.move_to(dx, dy);
    pangocairo::functions::show_layout(context, &layout);
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore context", err))
}

fn fill(context: &Context) -> TernaryResult<()> {
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill marker", err))
}

fn stroke(context: &Context) -> TernaryResult<()> {
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke marker", err))
}

fn append_polygon_path(context: &Context, vertices: &[Point2]) {
    let mut iter = vertices.iter();
    if let Some(first) = iter.next() {
        context.move_to(first.x, first.y);
        for vertex in iter {
            context.line_to(vertex.x, vertex.y);
        }
        context.close_path();
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> TernaryError {
    TernaryError::InvalidData(format!("{prefix}: {err}"))
}
