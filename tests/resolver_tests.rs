use approx::{assert_abs_diff_eq, assert_relative_eq};
use ternary_rs::TernaryError;
use ternary_rs::core::{ComponentValue, Resolver, Shape, TernaryConfig};

fn unit_resolver() -> Resolver {
    Resolver::new(TernaryConfig::default())
}

fn scalar(value: f64) -> Option<ComponentValue> {
    Some(ComponentValue::Scalar(value))
}

fn array(values: &[f64]) -> Option<ComponentValue> {
    Some(ComponentValue::from(values))
}

#[test]
fn missing_b_is_the_complement_of_l_and_r() {
    let point = unit_resolver()
        .resolve_point(None, Some(0.3), Some(0.2))
        .expect("b omitted");
    assert_abs_diff_eq!(point.x, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(point.y, 0.3, epsilon = 1e-12);
}

#[test]
fn missing_l_is_the_complement_of_b_and_r() {
    let point = unit_resolver()
        .resolve_point(Some(0.1), None, Some(0.6))
        .expect("l omitted");
    assert_abs_diff_eq!(point.x, 0.1, epsilon = 1e-12);
    assert_abs_diff_eq!(point.y, 0.3, epsilon = 1e-12);
}

#[test]
fn missing_r_passes_b_and_l_through_unchecked() {
    // b + l exceeds the total; without r nothing is validated.
    let point = unit_resolver()
        .resolve_point(Some(0.9), Some(0.8), None)
        .expect("r omitted");
    assert_eq!((point.x, point.y), (0.9, 0.8));
}

#[test]
fn exact_triple_is_returned_unchanged() {
    let point = unit_resolver()
        .resolve_point(Some(0.25), Some(0.25), Some(0.5))
        .expect("exact triple");
    assert_eq!((point.x, point.y), (0.25, 0.25));
}

#[test]
fn deviation_equal_to_tolerance_is_accepted() {
    let config = TernaryConfig::default()
        .with_tolerance(0.5)
        .expect("valid tolerance");
    // sum 2 gives factor 0.5, exactly |1 - factor| == tolerance.
    let point = Resolver::new(config)
        .resolve_point(Some(1.0), Some(0.5), Some(0.5))
        .expect("boundary accepted");
    assert_eq!((point.x, point.y), (0.5, 0.25));
}

#[test]
fn deviation_beyond_tolerance_is_rejected() {
    let config = TernaryConfig::default()
        .with_tolerance(0.5)
        .expect("valid tolerance");
    let error = Resolver::new(config)
        .resolve_point(Some(1.5), Some(0.5), Some(0.5))
        .expect_err("factor 0.4 is outside tolerance");
    match error {
        TernaryError::ToleranceExceeded {
            index,
            sum,
            total,
            tolerance,
            ..
        } => {
            assert_eq!(index, None);
            assert_eq!(sum, 2.5);
            assert_eq!(total, 1.0);
            assert_eq!(tolerance, 0.5);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn default_tolerance_rejects_visible_deviation() {
    let result = unit_resolver().resolve_point(Some(0.5), Some(0.5), Some(0.1));
    assert!(matches!(result, Err(TernaryError::ToleranceExceeded { .. })));
}

#[test]
fn inconsistent_triple_is_scaled_by_a_common_factor() {
    let config = TernaryConfig::new(100.0)
        .and_then(|config| config.with_tolerance(0.1))
        .expect("valid config");
    let point = Resolver::new(config)
        .resolve_point(Some(60.0), Some(30.0), Some(20.0))
        .expect("within loose tolerance");

    assert_relative_eq!(point.x, 6000.0 / 110.0, max_relative = 1e-12);
    assert_relative_eq!(point.y, 3000.0 / 110.0, max_relative = 1e-12);
    assert_relative_eq!(point.x / point.y, 2.0, max_relative = 1e-12);
}

#[test]
fn arrays_resolve_element_wise() {
    let resolved = unit_resolver()
        .resolve(array(&[0.2, 0.4, 0.0]), None, array(&[0.3, 0.1, 1.0]))
        .expect("arrays");
    assert_eq!(resolved.shape(), Shape::Array(3));
    let l = resolved.l.to_vec();
    assert_abs_diff_eq!(l[0], 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(l[1], 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(l[2], 0.0, epsilon = 1e-12);
    assert_eq!(resolved.b.to_vec(), vec![0.2, 0.4, 0.0]);
}

#[test]
fn arrays_without_r_pass_through_unchanged() {
    let resolver = Resolver::new(TernaryConfig::new(100.0).expect("valid total"));
    let resolved = resolver
        .resolve(array(&[10.0, 20.0]), array(&[5.0, 5.0]), None)
        .expect("b and l arrays");
    assert_eq!(resolved.b, ComponentValue::Array(vec![10.0, 20.0]));
    assert_eq!(resolved.l, ComponentValue::Array(vec![5.0, 5.0]));
}

#[test]
fn scalar_inputs_stay_scalar() {
    let resolved = unit_resolver()
        .resolve(scalar(0.2), scalar(0.3), None)
        .expect("scalars");
    assert_eq!(resolved.shape(), Shape::Scalar);
    assert_eq!(resolved.b.as_scalar(), Some(0.2));
}

#[test]
fn failing_array_element_is_reported_by_index() {
    let error = unit_resolver()
        .resolve(
            array(&[0.2, 0.5, 0.1]),
            array(&[0.3, 0.5, 0.1]),
            array(&[0.5, 0.5, 0.8]),
        )
        .expect_err("second element sums to 1.5");
    match error {
        TernaryError::ToleranceExceeded { index, sum, .. } => {
            assert_eq!(index, Some(1));
            assert_eq!(sum, 1.5);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn mixed_scalar_and_array_is_a_shape_mismatch() {
    let result = unit_resolver().resolve(array(&[0.2, 0.3]), scalar(0.5), None);
    assert!(matches!(
        result,
        Err(TernaryError::ShapeMismatch {
            first: Shape::Array(2),
            second: Shape::Scalar,
        })
    ));
}

#[test]
fn arrays_of_different_length_are_a_shape_mismatch() {
    let result = unit_resolver().resolve(None, array(&[0.2, 0.3]), array(&[0.1, 0.2, 0.3]));
    assert!(matches!(result, Err(TernaryError::ShapeMismatch { .. })));
}

#[test]
fn r_shape_is_checked_for_full_triples() {
    let result = unit_resolver().resolve(scalar(0.2), scalar(0.3), array(&[0.5]));
    assert!(matches!(result, Err(TernaryError::ShapeMismatch { .. })));
}

#[test]
fn fewer_than_two_components_is_underspecified() {
    let resolver = unit_resolver();
    assert!(matches!(
        resolver.resolve(scalar(0.2), None, None),
        Err(TernaryError::Underspecified { provided: 1 })
    ));
    assert!(matches!(
        resolver.resolve(None, None, None),
        Err(TernaryError::Underspecified { provided: 0 })
    ));
    assert!(matches!(
        resolver.resolve(None, None, scalar(0.2)),
        Err(TernaryError::Underspecified { provided: 1 })
    ));
}

#[test]
fn invalid_totals_are_rejected() {
    for total in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            TernaryConfig::new(total),
            Err(TernaryError::InvalidTotal { .. })
        ));
    }
}

#[test]
fn error_messages_name_the_failure() {
    let error = unit_resolver()
        .resolve(scalar(0.2), None, None)
        .expect_err("underspecified");
    assert!(error.to_string().contains("at least two"));

    let error = unit_resolver()
        .resolve(array(&[0.2]), array(&[0.2]), array(&[0.2]))
        .expect_err("sum 0.6");
    assert!(error.to_string().contains("at index 0"));
}
