use serde::{Deserialize, Serialize};

use crate::core::ticks::format_tick;
use crate::core::{ComponentValue, Point2, Resolver};
use crate::error::TernaryResult;

/// Offset of right-axis tick labels along `b`, as a fraction of the total.
pub const RIGHT_TICK_LABEL_OFFSET: f64 = -0.04;
pub const RIGHT_TICK_LABEL_ROTATION_DEG: f64 = 60.0;

/// Constant-`r` gridline in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RightAxisGridLine {
    pub r: f64,
    pub start: Point2,
    pub end: Point2,
}

/// Right-axis tick label anchored in data space just outside the right edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RightAxisTickLabel {
    pub r: f64,
    pub text: String,
    pub position: Point2,
    pub rotation_deg: f64,
}

/// Gridlines and tick labels of the synthetic right axis.
///
/// The right axis has no tick state of its own: everything here is a
/// function of the bottom-axis ticks, so callers derive it on demand instead
/// of caching it across tick changes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RightAxisGrid {
    pub lines: Vec<RightAxisGridLine>,
    pub labels: Vec<RightAxisTickLabel>,
}

impl RightAxisGrid {
    pub fn derive(resolver: Resolver, bottom_ticks: &[f64]) -> TernaryResult<Self> {
        let total = resolver.config().total();
        let mut lines = Vec::with_capacity(bottom_ticks.len());
        let mut labels = Vec::with_capacity(bottom_ticks.len());

        for &tick in bottom_ticks {
            // l = total - tick on the right edge, l = 0 on the bottom edge.
            let segment = resolver.resolve(
                Some(ComponentValue::Array(vec![0.0, total - tick])),
                None,
                Some(ComponentValue::Array(vec![tick, tick])),
            )?;
            let points = segment.points();
            lines.push(RightAxisGridLine {
                r: tick,
                start: points[0],
                end: points[1],
            });

            let position =
                resolver.resolve_point(Some(RIGHT_TICK_LABEL_OFFSET * total), None, Some(tick))?;
            labels.push(RightAxisTickLabel {
                r: tick,
                text: format_tick(tick),
                position,
                rotation_deg: RIGHT_TICK_LABEL_ROTATION_DEG,
            });
        }

        Ok(Self { lines, labels })
    }

    #[must_use]
    pub fn ticks(&self) -> Vec<f64> {
        self.lines.iter().map(|line| line.r).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::RightAxisGrid;
    use crate::core::{Point2, Resolver, TernaryConfig};

    #[test]
    fn gridline_spans_right_edge_to_bottom_edge() {
        let resolver = Resolver::new(TernaryConfig::new(10.0).expect("valid total"));
        let grid = RightAxisGrid::derive(resolver, &[4.0]).expect("derive grid");
        assert_eq!(grid.lines[0].start, Point2::new(0.0, 6.0));
        assert_eq!(grid.lines[0].end, Point2::new(6.0, 0.0));
    }

    #[test]
    fn no_ticks_means_no_right_axis() {
        let grid = RightAxisGrid::derive(Resolver::new(TernaryConfig::default()), &[])
            .expect("derive grid");
        assert!(grid.is_empty());
    }
}
