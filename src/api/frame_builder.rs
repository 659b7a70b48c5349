use crate::api::artists::{Artist, ArrowArtist, LineArtist};
use crate::api::axes_config::TernaryAxesConfig;
use crate::core::layout::{FIT_BASE_Y, FIT_HALF_BASE};
use crate::core::ticks::format_tick;
use crate::core::{
    CoordinateSystem, Point2, RightAxisGrid, TernaryCoordinateSystem, TernaryTransforms,
    TextHAlign, TextVAlign, Transform2D, TransformChain,
};
use crate::error::TernaryResult;
use crate::render::{
    Color, FrameLayer, LinePrimitive, MarkerPrimitive, PolygonPrimitive, RenderFrame,
    TextPrimitive,
};

const GRID_STROKE_WIDTH: f64 = 0.8;
const SPINE_STROKE_WIDTH: f64 = 1.0;
const ANNOTATION_STROKE_WIDTH: f64 = 0.8;
const BOTTOM_TICK_LABEL_ROTATION_DEG: f64 = -60.0;
const LEFT_AXIS_LABEL_ROTATION_DEG: f64 = 60.0;
const RIGHT_AXIS_LABEL_ROTATION_DEG: f64 = -60.0;
/// `(b, l)` of the right axis label as fractions of the total.
const RIGHT_AXIS_LABEL_POSITION: (f64, f64) = (-0.12, 0.62);
const TITLE_AXES_Y: f64 = 1.02;
const TITLE_FONT_SCALE: f64 = 1.2;
/// Axis label distance from its edge, in multiples of the font size.
const AXIS_LABEL_OFFSET_EM: f64 = 2.5;
const ARROW_HEAD_LENGTH_PX: f64 = 10.0;
const ARROW_HEAD_HALF_ANGLE_DEG: f64 = 25.0;
const MIN_SEGMENT_LENGTH: f64 = 1e-12;

/// Inputs of one frame build, borrowed from the axes.
pub(super) struct FrameContext<'a> {
    pub config: &'a TernaryAxesConfig,
    pub system: &'a TernaryCoordinateSystem,
    pub transforms: &'a TernaryTransforms,
    pub ticks: &'a [f64],
    pub right_axis: &'a RightAxisGrid,
    pub artists: &'a [Artist],
}

/// Materializes background, grid, spines, labels and artists in device pixels.
pub(super) fn build_render_frame(context: &FrameContext<'_>) -> TernaryResult<RenderFrame> {
    let transforms = context.transforms;
    let clip_polygon: Vec<Point2> = context
        .system
        .background_patch()
        .vertices
        .into_iter()
        .map(|vertex| transforms.axes_to_display_point(vertex))
        .collect();

    let mut frame = RenderFrame::new(transforms.viewport())
        .with_clip_polygon(clip_polygon.clone())
        .with_polygon(PolygonPrimitive {
            vertices: clip_polygon,
            fill_color: Some(Color::WHITE),
            stroke_color: None,
            stroke_width: 0.0,
            layer: FrameLayer::Background,
        });

    if context.config.grid_visible {
        append_gridlines(&mut frame, context);
    }
    append_spines(&mut frame, context);
    append_tick_labels(&mut frame, context);
    append_axis_labels(&mut frame, context);
    for artist in context.artists {
        append_artist(&mut frame, context, artist);
    }

    frame.validate()?;
    Ok(frame)
}

fn append_gridlines(frame: &mut RenderFrame, context: &FrameContext<'_>) {
    let total = context.system.config().total();
    let transforms = context.transforms;
    let right = context.right_axis.lines.iter().map(|line| (line.start, line.end));

    // constant b, constant l, then the derived constant r family
    let bottom = context
        .ticks
        .iter()
        .map(|&tick| (Point2::new(tick, 0.0), Point2::new(tick, total - tick)));
    let left = context
        .ticks
        .iter()
        .map(|&tick| (Point2::new(0.0, tick), Point2::new(total - tick, tick)));
    let families: [(&TransformChain, Vec<(Point2, Point2)>); 3] = [
        (transforms.xaxis_grid(), bottom.collect()),
        (transforms.yaxis_grid(), left.collect()),
        (transforms.data(), right.collect()),
    ];

    for (chain, segments) in families {
        for (start, end) in segments {
            if (end.x - start.x).hypot(end.y - start.y) <= MIN_SEGMENT_LENGTH * total {
                continue;
            }
            frame.lines.push(LinePrimitive::new(
                chain.transform_point(start),
                chain.transform_point(end),
                GRID_STROKE_WIDTH,
                Color::GRID_GRAY,
                FrameLayer::Grid,
            ));
        }
    }
}

fn append_spines(frame: &mut RenderFrame, context: &FrameContext<'_>) {
    let total = context.system.config().total();
    for path in context.system.spine_paths().values() {
        let (start, end) = path.data_endpoints(total);
        frame.lines.push(LinePrimitive::new(
            context.transforms.data_to_display(start),
            context.transforms.data_to_display(end),
            SPINE_STROKE_WIDTH,
            Color::BLACK,
            FrameLayer::Spines,
        ));
    }
}

fn append_tick_labels(frame: &mut RenderFrame, context: &FrameContext<'_>) {
    let font_size = context.config.font_size_px;
    let bottom = context.transforms.xaxis_text();
    let left = context.transforms.yaxis_text();

    for &tick in context.ticks {
        let text = format_tick(tick);
        frame.texts.push(
            TextPrimitive::new(
                text.clone(),
                bottom.transform.transform_point(Point2::new(tick, 0.0)),
                font_size,
                Color::BLACK,
                FrameLayer::Labels,
            )
            .with_alignment(bottom.v_align, bottom.h_align)
            .with_rotation(BOTTOM_TICK_LABEL_ROTATION_DEG),
        );
        frame.texts.push(
            TextPrimitive::new(
                text,
                left.transform.transform_point(Point2::new(0.0, tick)),
                font_size,
                Color::BLACK,
                FrameLayer::Labels,
            )
            .with_alignment(left.v_align, left.h_align),
        );
    }

    for label in &context.right_axis.labels {
        frame.texts.push(
            TextPrimitive::new(
                label.text.clone(),
                context.transforms.data_to_display(label.position),
                font_size,
                Color::BLACK,
                FrameLayer::Labels,
            )
            .with_rotation(label.rotation_deg),
        );
    }
}

fn append_axis_labels(frame: &mut RenderFrame, context: &FrameContext<'_>) {
    let config = context.config;
    let transforms = context.transforms;
    let total = context.system.config().total();
    let offset = AXIS_LABEL_OFFSET_EM * config.font_size_px;

    if let Some(blabel) = non_empty(config.blabel.as_deref()) {
        let anchor = transforms
            .axes_to_display_point(Point2::new(0.5, FIT_BASE_Y))
            .offset(0.0, offset);
        frame.texts.push(
            TextPrimitive::new(
                blabel,
                anchor,
                config.font_size_px,
                Color::BLACK,
                FrameLayer::Labels,
            )
                .with_alignment(TextVAlign::Top, TextHAlign::Center),
        );
    }

    if let Some(llabel) = non_empty(config.llabel.as_deref()) {
        // Outward normal of the left edge, y down.
        let (sin, cos) = LEFT_AXIS_LABEL_ROTATION_DEG.to_radians().sin_cos();
        let anchor = transforms
            .axes_to_display_point(Point2::new(0.5 - FIT_HALF_BASE / 2.0, 0.5))
            .offset(-offset * sin, -offset * cos);
        frame.texts.push(
            TextPrimitive::new(
                llabel,
                anchor,
                config.font_size_px,
                Color::BLACK,
                FrameLayer::Labels,
            )
                .with_rotation(LEFT_AXIS_LABEL_ROTATION_DEG),
        );
    }

    if let Some(rlabel) = non_empty(config.rlabel.as_deref()) {
        let (b, l) = RIGHT_AXIS_LABEL_POSITION;
        let anchor = transforms.data_to_display(Point2::new(b * total, l * total));
        frame.texts.push(
            TextPrimitive::new(
                rlabel,
                anchor,
                config.font_size_px,
                Color::BLACK,
                FrameLayer::Labels,
            )
                .with_rotation(RIGHT_AXIS_LABEL_ROTATION_DEG),
        );
    }

    if let Some(title) = non_empty(config.title.as_deref()) {
        let anchor = transforms.axes_to_display_point(Point2::new(0.5, TITLE_AXES_Y));
        frame.texts.push(
            TextPrimitive::new(
                title,
                anchor,
                config.font_size_px * TITLE_FONT_SCALE,
                Color::BLACK,
                FrameLayer::Labels,
            )
            .with_alignment(TextVAlign::Bottom, TextHAlign::Center),
        );
    }
}

fn append_artist(frame: &mut RenderFrame, context: &FrameContext<'_>, artist: &Artist) {
    let transforms = context.transforms;
    match artist {
        Artist::Line(line) => append_line_artist(frame, transforms, line),
        Artist::Scatter(scatter) => {
            for point in &scatter.points {
                let display = transforms.data_to_display(*point);
                if !display.is_finite() {
                    continue;
                }
                frame.markers.push(MarkerPrimitive {
                    x: display.x,
                    y: display.y,
                    size_px: scatter.style.size_px,
                    shape: scatter.style.marker,
                    color: scatter.style.color,
                    layer: FrameLayer::Data,
                });
            }
        }
        Artist::Text(text) => {
            let anchor = transforms.data_to_display(text.position);
            if anchor.is_finite() {
                frame.texts.push(
                    TextPrimitive::new(
                        text.text.clone(),
                        anchor,
                        context.config.font_size_px,
                        Color::BLACK,
                        FrameLayer::Labels,
                    )
                    .with_alignment(TextVAlign::Bottom, TextHAlign::Left),
                );
            }
        }
        Artist::Annotation(annotation) => {
            let target = transforms.data_to_display(annotation.xy);
            let anchor = annotation
                .xytext
                .map_or(target, |xytext| transforms.data_to_display(xytext));
            if !target.is_finite() || !anchor.is_finite() {
                return;
            }
            if annotation.xytext.is_some() && anchor != target {
                frame.lines.push(LinePrimitive::new(
                    anchor,
                    target,
                    ANNOTATION_STROKE_WIDTH,
                    Color::BLACK,
                    FrameLayer::Labels,
                ));
            }
            frame.texts.push(
                TextPrimitive::new(
                    annotation.text.clone(),
                    anchor,
                    context.config.font_size_px,
                    Color::BLACK,
                    FrameLayer::Labels,
                )
                .with_alignment(TextVAlign::Bottom, TextHAlign::Left),
            );
        }
        Artist::Arrow(arrow) => append_arrow(frame, transforms, *arrow),
    }
}

fn append_line_artist(frame: &mut RenderFrame, transforms: &TernaryTransforms, line: &LineArtist) {
    let style = line.style;
    let display = transforms.data().transform_points(&line.points);

    if let Some(stroke) = style.stroke {
        for pair in display.windows(2) {
            if !pair[0].is_finite() || !pair[1].is_finite() {
                continue;
            }
            frame.lines.push(
                LinePrimitive::new(
                    pair[0],
                    pair[1],
                    style.stroke_width,
                    style.color,
                    FrameLayer::Data,
                )
                .with_stroke_style(stroke),
            );
        }
    }
    if let Some(shape) = style.marker {
        for point in display.iter().filter(|point| point.is_finite()) {
            frame.markers.push(MarkerPrimitive {
                x: point.x,
                y: point.y,
                size_px: style.marker_size_px,
                shape,
                color: style.color,
                layer: FrameLayer::Data,
            });
        }
    }
}

fn append_arrow(frame: &mut RenderFrame, transforms: &TernaryTransforms, arrow: ArrowArtist) {
    let start = transforms.data_to_display(arrow.start);
    let end = transforms.data_to_display(arrow.end());
    if !start.is_finite() || !end.is_finite() {
        return;
    }
    let (dx, dy) = (end.x - start.x, end.y - start.y);
    let length = dx.hypot(dy);
    if length <= MIN_SEGMENT_LENGTH {
        return;
    }

    frame.lines.push(LinePrimitive::new(
        start,
        end,
        SPINE_STROKE_WIDTH,
        Color::BLACK,
        FrameLayer::Data,
    ));

    let head = ARROW_HEAD_LENGTH_PX.min(length * 0.3);
    let back = dy.atan2(dx) + std::f64::consts::PI;
    for side in [-1.0, 1.0] {
        let angle = back + side * ARROW_HEAD_HALF_ANGLE_DEG.to_radians();
        frame.lines.push(LinePrimitive::new(
            end,
            end.offset(head * angle.cos(), head * angle.sin()),
            SPINE_STROKE_WIDTH,
            Color::BLACK,
            FrameLayer::Data,
        ));
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.trim().is_empty())
}
