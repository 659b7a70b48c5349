use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{TernaryError, TernaryResult};

/// Upper bound on default ticks along one edge, endpoints included.
pub const DEFAULT_MAX_TICKS: usize = 6;
/// Largest tick budget a config may ask for.
pub const MAX_TICKS_LIMIT: usize = 101;
const TICK_DECIMAL_PLACES: u32 = 10;
const NICE_STEP_MANTISSAS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Evenly spaced ticks over `[0, total]` using a 1-2-2.5-5 step ladder.
///
/// A unit total yields `0, 0.2, 0.4, 0.6, 0.8, 1`.
#[must_use]
pub fn default_ticks(total: f64, max_ticks: usize) -> Vec<f64> {
    if !total.is_finite() || total <= 0.0 {
        return Vec::new();
    }
    if max_ticks < 2 {
        return vec![0.0];
    }

    let max_ticks = max_ticks.min(MAX_TICKS_LIMIT);
    let raw_step = total / (max_ticks - 1) as f64;
    let magnitude = 10_f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let mantissa = NICE_STEP_MANTISSAS
        .into_iter()
        .find(|candidate| *candidate >= normalized - 1e-9)
        .unwrap_or(10.0);
    let step = mantissa * magnitude;

    let count = (total / step + 1e-9).floor() as usize;
    (0..=count)
        .map(|index| clean_tick_value(index as f64 * step))
        .collect()
}

/// Validates explicit tick positions: finite, inside `[0, total]`, sorted,
/// and without duplicates.
pub fn normalize_ticks(ticks: &[f64], total: f64) -> TernaryResult<Vec<f64>> {
    let slack = total.abs() * 1e-12;
    let mut normalized = Vec::with_capacity(ticks.len());
    for tick in ticks {
        if !tick.is_finite() {
            return Err(TernaryError::InvalidData(
                "tick positions must be finite".to_owned(),
            ));
        }
        if *tick < -slack || *tick > total + slack {
            return Err(TernaryError::InvalidData(format!(
                "tick position {tick} lies outside [0, {total}]"
            )));
        }
        normalized.push(OrderedFloat(tick.clamp(0.0, total)));
    }
    normalized.sort_unstable();
    normalized.dedup();
    Ok(normalized.into_iter().map(OrderedFloat::into_inner).collect())
}

/// Tick label text without binary rounding noise (`0.6`, not `0.6000000000000001`).
#[must_use]
pub fn format_tick(value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(decimal) => {
            let rounded = decimal.round_dp(TICK_DECIMAL_PLACES).normalize();
            if rounded.is_zero() {
                "0".to_owned()
            } else {
                rounded.to_string()
            }
        }
        None => format!("{value}"),
    }
}

fn clean_tick_value(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|decimal| decimal.round_dp(TICK_DECIMAL_PLACES))
        .and_then(|decimal| decimal.to_f64())
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_MAX_TICKS, MAX_TICKS_LIMIT, default_ticks, format_tick, normalize_ticks};

    #[test]
    fn unit_total_gives_fifths() {
        assert_eq!(
            default_ticks(1.0, DEFAULT_MAX_TICKS),
            vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]
        );
    }

    #[test]
    fn percent_total_gives_twenties() {
        assert_eq!(
            default_ticks(100.0, DEFAULT_MAX_TICKS),
            vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]
        );
    }

    #[test]
    fn total_two_steps_by_half() {
        assert_eq!(
            default_ticks(2.0, DEFAULT_MAX_TICKS),
            vec![0.0, 0.5, 1.0, 1.5, 2.0]
        );
    }

    #[test]
    fn oversized_tick_budget_is_clamped() {
        let ticks = default_ticks(1.0, 1_000_000_000);
        assert!(ticks.len() <= MAX_TICKS_LIMIT);
        assert_eq!(ticks.first().copied(), Some(0.0));
        assert_eq!(ticks.last().copied(), Some(1.0));
    }

    #[test]
    fn normalize_sorts_and_deduplicates() {
        let ticks = normalize_ticks(&[0.5, 0.0, 0.5, 1.0], 1.0).expect("valid ticks");
        assert_eq!(ticks, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn normalize_rejects_out_of_range() {
        assert!(normalize_ticks(&[1.5], 1.0).is_err());
        assert!(normalize_ticks(&[f64::NAN], 1.0).is_err());
    }

    #[test]
    fn format_strips_rounding_noise() {
        assert_eq!(format_tick(0.1 + 0.2), "0.3");
        assert_eq!(format_tick(20.0), "20");
        assert_eq!(format_tick(-0.0), "0");
    }
}
