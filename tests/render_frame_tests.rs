use approx::assert_abs_diff_eq;
use ternary_rs::api::{TernaryArgs, TernaryAxes, TernaryAxesConfig, TernaryDelta};
use ternary_rs::core::{Point2, Transform2D, Viewport};
use ternary_rs::render::{
    Color, FrameLayer, LinePrimitive, NullRenderer, RenderFrame, Renderer, TextPrimitive,
};

fn axes(config: TernaryAxesConfig) -> TernaryAxes<NullRenderer> {
    TernaryAxes::new(NullRenderer::default(), config).expect("axes init")
}

fn default_axes() -> TernaryAxes<NullRenderer> {
    axes(TernaryAxesConfig::new(Viewport::new(1000, 800)))
}

#[test]
fn empty_axes_frame_has_grid_spines_and_tick_labels() {
    let frame = default_axes().build_frame().expect("frame");

    assert_eq!(frame.clip_polygon.len(), 4);
    assert_eq!(frame.polygons.len(), 1);
    assert_eq!(frame.polygons[0].layer, FrameLayer::Background);
    // six ticks per family, the zero-length one at the far corner is skipped
    assert_eq!(frame.lines_on(FrameLayer::Grid).count(), 15);
    assert_eq!(frame.lines_on(FrameLayer::Spines).count(), 3);
    assert_eq!(frame.texts_on(FrameLayer::Labels).count(), 18);
    assert!(frame.markers.is_empty());
}

#[test]
fn clip_polygon_follows_the_projected_corners() {
    let axes = default_axes();
    let frame = axes.build_frame().expect("frame");
    let transforms = axes.transforms();

    let r_corner = transforms.data_to_display(Point2::new(0.0, 0.0));
    let apex = transforms.data_to_display(Point2::new(0.0, 1.0));
    let b_corner = transforms.data_to_display(Point2::new(1.0, 0.0));
    for (vertex, corner) in frame.clip_polygon.iter().zip([r_corner, apex, b_corner, r_corner]) {
        assert_abs_diff_eq!(vertex.x, corner.x, epsilon = 1e-9);
        assert_abs_diff_eq!(vertex.y, corner.y, epsilon = 1e-9);
    }
}

#[test]
fn gridlines_run_through_the_axis_grid_chains() {
    let axes = default_axes();
    let frame = axes.build_frame().expect("frame");
    let transforms = axes.transforms();
    let grid: Vec<&LinePrimitive> = frame.lines_on(FrameLayer::Grid).collect();

    // first constant-b line at b = 0, first constant-l line at l = 0
    let b_start = transforms.xaxis_grid().transform_point(Point2::new(0.0, 0.0));
    let b_end = transforms.xaxis_grid().transform_point(Point2::new(0.0, 1.0));
    assert_abs_diff_eq!(grid[0].x1, b_start.x, epsilon = 1e-9);
    assert_abs_diff_eq!(grid[0].y2, b_end.y, epsilon = 1e-9);

    let l_end = transforms.yaxis_grid().transform_point(Point2::new(1.0, 0.0));
    assert_abs_diff_eq!(grid[5].x2, l_end.x, epsilon = 1e-9);
    assert_abs_diff_eq!(grid[5].y2, l_end.y, epsilon = 1e-9);
}

#[test]
fn hidden_grid_emits_no_gridlines() {
    let mut axes = default_axes();
    axes.grid(Some(false));
    let frame = axes.build_frame().expect("frame");
    assert_eq!(frame.lines_on(FrameLayer::Grid).count(), 0);
    assert_eq!(frame.lines_on(FrameLayer::Spines).count(), 3);
}

#[test]
fn tick_labels_use_axis_specific_rotation() {
    let mut axes = default_axes();
    axes.set_ticks(&[0.5]).expect("valid ticks");
    let frame = axes.build_frame().expect("frame");
    let labels: Vec<&TextPrimitive> = frame.texts_on(FrameLayer::Labels).collect();

    assert_eq!(labels.len(), 3);
    assert!(labels.iter().all(|label| label.text == "0.5"));
    assert_eq!(labels[0].rotation_deg, -60.0);
    assert_eq!(labels[1].rotation_deg, 0.0);
    assert_eq!(labels[2].rotation_deg, 60.0);
}

#[test]
fn axis_labels_and_title_are_materialized() {
    let config = TernaryAxesConfig::new(Viewport::new(1000, 800))
        .with_labels("Sand", "Silt", "Clay")
        .with_title("Texture");
    let axes = axes(config);
    let frame = axes.build_frame().expect("frame");

    let find = |text: &str| {
        frame
            .texts
            .iter()
            .find(|primitive| primitive.text == text)
            .cloned()
            .expect("label present")
    };
    assert_eq!(frame.texts.len(), 22);
    assert_eq!(find("Silt").rotation_deg, 60.0);
    assert_eq!(find("Clay").rotation_deg, -60.0);

    let apex = axes.transforms().data_to_display(Point2::new(0.0, 1.0));
    let title = find("Texture");
    assert!(title.y < apex.y);
    let bottom_edge = axes.transforms().data_to_display(Point2::new(0.5, 0.0));
    assert!(find("Sand").y > bottom_edge.y);
}

#[test]
fn line_artists_become_segments_and_markers() {
    let mut axes = default_axes();
    axes.plot(TernaryArgs::blr([0.1, 0.2, 0.3], [0.3, 0.3, 0.3], [0.6, 0.5, 0.4]))
        .expect("line");
    axes.plot(TernaryArgs::bl([0.1, 0.2, 0.3], [0.1, 0.1, 0.1]).label("o"))
        .expect("markers");
    let frame = axes.build_frame().expect("frame");

    assert_eq!(frame.lines_on(FrameLayer::Data).count(), 2);
    assert_eq!(frame.markers.len(), 3);
    assert!(frame
        .markers
        .iter()
        .all(|marker| marker.layer == FrameLayer::Data));
}

#[test]
fn non_finite_points_are_skipped() {
    let mut axes = default_axes();
    axes.plot(TernaryArgs::bl([0.1, f64::NAN, 0.3], [0.1, 0.1, 0.1]).label("-o"))
        .expect("line with gap");
    let frame = axes.build_frame().expect("frame stays valid");
    assert_eq!(frame.lines_on(FrameLayer::Data).count(), 0);
    assert_eq!(frame.markers.len(), 2);
}

#[test]
fn arrows_have_a_shaft_and_two_head_strokes() {
    let mut axes = default_axes();
    axes.arrow(
        TernaryArgs::blr(0.2, 0.3, 0.5),
        TernaryDelta::new(Some(0.2), None, Some(-0.2)),
    )
    .expect("arrow");
    let frame = axes.build_frame().expect("frame");
    let data_lines: Vec<&LinePrimitive> = frame.lines_on(FrameLayer::Data).collect();
    assert_eq!(data_lines.len(), 3);

    let tip = axes
        .transforms()
        .data_to_display(Point2::new(0.4, 0.3));
    assert_abs_diff_eq!(data_lines[0].x2, tip.x, epsilon = 1e-9);
    assert_abs_diff_eq!(data_lines[0].y2, tip.y, epsilon = 1e-9);
    assert!(data_lines[1..]
        .iter()
        .all(|line| (line.x1 - tip.x).abs() < 1e-9 && (line.y1 - tip.y).abs() < 1e-9));
}

#[test]
fn annotations_draw_a_leader_to_the_anchor() {
    let mut axes = default_axes();
    axes.annotate(
        "here",
        TernaryArgs::blr(0.5, 0.25, 0.25),
        Some(TernaryArgs::blr(0.25, 0.5, 0.25)),
    )
    .expect("annotation");
    let frame = axes.build_frame().expect("frame");

    let anchor = axes
        .transforms()
        .data_to_display(Point2::new(0.5, 0.25));
    let leader = frame
        .lines_on(FrameLayer::Labels)
        .next()
        .expect("leader line");
    assert_abs_diff_eq!(leader.x2, anchor.x, epsilon = 1e-9);
    assert_abs_diff_eq!(leader.y2, anchor.y, epsilon = 1e-9);
    assert!(frame.texts.iter().any(|text| text.text == "here"));
}

#[test]
fn render_hands_a_validated_frame_to_the_renderer() {
    let mut axes = default_axes();
    axes.plot(TernaryArgs::bl([0.1, 0.2], [0.2, 0.1])).expect("plot");
    axes.render().expect("render");
    axes.render().expect("render again");

    let renderer = axes.into_renderer();
    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_line_count, 15 + 3 + 1);
    assert_eq!(renderer.last_text_count, 18);
    assert!(renderer.last_frame.is_some());
}

#[test]
fn null_renderer_rejects_invalid_frames() {
    let mut renderer = NullRenderer::default();
    let frame = RenderFrame::new(Viewport::new(100, 100)).with_line(LinePrimitive::new(
        Point2::new(0.0, 0.0),
        Point2::new(f64::NAN, 1.0),
        1.0,
        Color::BLACK,
        FrameLayer::Data,
    ));
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.frames_rendered, 0);

    let empty = RenderFrame::new(Viewport::new(100, 100));
    assert!(empty.is_empty());
    renderer.render(&empty).expect("empty frame is valid");
    assert_eq!(renderer.frames_rendered, 1);
}
