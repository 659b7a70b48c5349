use ternary_rs::TernaryError;
use ternary_rs::api::{LegendLocation, LegendPlacement, TernaryAxes, TernaryAxesConfig};
use ternary_rs::core::ticks::MAX_TICKS_LIMIT;
use ternary_rs::core::{DEFAULT_TOLERANCE, SubplotMargins, Viewport};
use ternary_rs::render::NullRenderer;

#[test]
fn config_json_roundtrip_keeps_labels_and_placements() {
    let config = TernaryAxesConfig::new(Viewport::new(1024, 768))
        .with_total(100.0)
        .with_tolerance(1e-3)
        .with_labels("Sand", "Silt", "Clay")
        .with_title("USDA texture")
        .with_grid_visible(false)
        .with_legend(LegendPlacement {
            bbox_to_anchor: (1.1, 0.5),
            location: LegendLocation::LowerLeft,
        });

    let json = config.to_json_pretty().expect("serialize config");
    assert!(json.contains("\"blabel\": \"Sand\""));
    let restored = TernaryAxesConfig::from_json_str(&json).expect("parse config");
    assert_eq!(restored, config);
}

#[test]
fn minimal_json_fills_in_defaults() {
    let config = TernaryAxesConfig::from_json_str(r#"{"viewport":{"width":800,"height":600}}"#)
        .expect("parse minimal config");

    assert_eq!(config, TernaryAxesConfig::new(Viewport::new(800, 600)));
    assert_eq!(config.total, 1.0);
    assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
    assert_eq!(config.margins, SubplotMargins::default());
    assert!(config.grid_visible);
    assert!(config.title.is_none());
}

#[test]
fn malformed_json_is_reported_as_invalid_data() {
    let error = TernaryAxesConfig::from_json_str(r#"{"total": 1.0}"#).expect_err("no viewport");
    match error {
        TernaryError::InvalidData(message) => {
            assert!(message.starts_with("failed to parse config"))
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn axes_refuse_invalid_configs() {
    let cases = [
        TernaryAxesConfig::new(Viewport::new(0, 600)),
        TernaryAxesConfig::new(Viewport::new(800, 600)).with_total(0.0),
        TernaryAxesConfig::new(Viewport::new(800, 600)).with_tolerance(-1.0),
        TernaryAxesConfig::new(Viewport::new(800, 600)).with_max_ticks(1),
        TernaryAxesConfig::new(Viewport::new(800, 600)).with_font_size_px(0.0),
        TernaryAxesConfig::new(Viewport::new(800, 600)).with_margins(SubplotMargins {
            left: 0.9,
            right: 0.1,
            bottom: 0.1,
            top: 0.9,
        }),
    ];
    for config in cases {
        assert!(config.validate().is_err(), "{config:?} should be invalid");
        assert!(TernaryAxes::new(NullRenderer::default(), config).is_err());
    }
}

#[test]
fn huge_tick_budget_from_json_is_rejected() {
    let config = TernaryAxesConfig::from_json_str(
        r#"{"viewport":{"width":800,"height":600},"max_ticks":1000000000}"#,
    )
    .expect("parse config");
    assert!(matches!(config.validate(), Err(TernaryError::InvalidData(_))));
    assert!(TernaryAxes::new(NullRenderer::default(), config).is_err());

    let limit = TernaryAxesConfig::new(Viewport::new(800, 600)).with_max_ticks(MAX_TICKS_LIMIT);
    limit.validate().expect("largest budget is accepted");
}

#[test]
fn invalid_total_keeps_its_own_error_kind() {
    let config = TernaryAxesConfig::new(Viewport::new(800, 600)).with_total(f64::NAN);
    assert!(matches!(
        config.validate(),
        Err(TernaryError::InvalidTotal { .. })
    ));
}
