use ternary_rs::TernaryError;
use ternary_rs::api::{
    AxesOperation, AxisKind, AxisScale, LegendLocation, TernaryAxes, TernaryAxesConfig,
};
use ternary_rs::core::Viewport;
use ternary_rs::render::NullRenderer;

fn axes() -> TernaryAxes<NullRenderer> {
    TernaryAxes::new(
        NullRenderer::default(),
        TernaryAxesConfig::new(Viewport::new(800, 800)),
    )
    .expect("axes init")
}

#[test]
fn bar_pie_hist_and_polar_are_unsupported() {
    let axes = axes();
    for operation in [
        AxesOperation::Bar,
        AxesOperation::Pie,
        AxesOperation::Hist,
        AxesOperation::Polar,
    ] {
        match axes.ensure_supported(operation) {
            Err(TernaryError::UnsupportedOperation { operation: name, reason }) => {
                assert_eq!(name, operation.name());
                assert!(!reason.is_empty());
            }
            other => panic!("{} should be unsupported, got {other:?}", operation.name()),
        }
    }
}

#[test]
fn every_disabled_operation_is_rejected_with_its_name() {
    let axes = axes();
    assert_eq!(AxesOperation::DISABLED.len(), 21);
    for operation in AxesOperation::DISABLED {
        let error = axes
            .ensure_supported(operation)
            .expect_err("disabled operation");
        assert!(error.to_string().starts_with(operation.name()));
    }
}

#[test]
fn drawing_operations_are_supported() {
    let axes = axes();
    for operation in [
        AxesOperation::Plot,
        AxesOperation::Scatter,
        AxesOperation::Text,
        AxesOperation::Annotate,
        AxesOperation::Arrow,
        AxesOperation::Grid,
        AxesOperation::Legend,
        AxesOperation::Title,
        AxesOperation::Colorbar,
    ] {
        axes.ensure_supported(operation)
            .expect("supported operation");
    }
}

#[test]
fn only_linear_scales_are_accepted() {
    let mut axes = axes();
    axes.set_scale(AxisKind::Bottom, AxisScale::Linear)
        .expect("linear scale");
    for scale in [AxisScale::Log, AxisScale::SymLog, AxisScale::Logit] {
        assert!(matches!(
            axes.set_scale(AxisKind::Left, scale),
            Err(TernaryError::UnsupportedOperation { operation: "set_scale", .. })
        ));
    }
}

#[test]
fn limits_are_fixed_to_the_total() {
    let mut axes = axes();
    assert!(matches!(
        axes.set_limits(AxisKind::Bottom, 0.0, 0.5),
        Err(TernaryError::UnsupportedOperation { .. })
    ));
    assert_eq!(axes.data_limits(), ((0.0, 1.0), (0.0, 1.0)));

    axes.set_total(100.0).expect("valid total");
    assert_eq!(axes.data_limits(), ((0.0, 100.0), (0.0, 100.0)));
    assert_eq!(axes.data_ratio(), 1.0);
}

#[test]
fn label_positions_cannot_change() {
    let mut axes = axes();
    assert!(matches!(
        axes.set_label_position(AxisKind::Left, "right"),
        Err(TernaryError::UnsupportedOperation {
            operation: "set_label_position",
            ..
        })
    ));
}

#[test]
fn pan_and_zoom_are_disabled() {
    let mut axes = axes();
    assert!(!axes.can_zoom());
    assert!(!axes.can_pan());
    assert!(axes.start_pan(10.0, 10.0).is_err());
    assert!(axes.drag_pan(20.0, 20.0).is_err());
    assert!(axes.end_pan().is_err());
    assert!(axes.zoom(2.0).is_err());
}

#[test]
fn grid_shows_hides_and_toggles() {
    let mut axes = axes();
    assert!(axes.grid_visible());
    assert!(!axes.grid(Some(false)));
    assert!(axes.grid(None));
    assert!(!axes.grid(None));
    assert!(axes.grid(Some(true)));
    assert!(axes.grid(Some(true)));
}

#[test]
fn legend_and_colorbar_defaults_keep_clear_of_the_triangle() {
    let axes = axes();
    let legend = axes.legend_placement();
    assert_eq!(legend.bbox_to_anchor, (1.05, 0.97));
    assert_eq!(legend.location, LegendLocation::UpperLeft);

    let colorbar = axes.colorbar_placement();
    assert_eq!(colorbar.shrink, 0.9);
    assert_eq!(colorbar.pad, 0.1);
}

#[test]
fn axis_labels_are_stored_per_axis() {
    let mut axes = axes();
    axes.set_blabel("Sand");
    axes.set_llabel("Silt");
    axes.set_rlabel("Clay");
    assert_eq!(axes.axis_label(AxisKind::Bottom), Some("Sand"));
    assert_eq!(axes.axis_label(AxisKind::Left), Some("Silt"));
    assert_eq!(axes.axis_label(AxisKind::Right), Some("Clay"));
}
