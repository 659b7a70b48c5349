use tracing::debug;

use crate::core::layout::{AxisTextTransform, SubplotMargins, axes_to_display_affine};
use crate::core::{
    Affine2D, CoordinateSystem, Point2, TernaryCoordinateSystem, Transform2D, TransformChain,
    Viewport,
};
use crate::error::{TernaryError, TernaryResult};

/// Every transform one ternary surface needs for a given total and viewport.
///
/// Built in one go and never mutated afterwards; a total or viewport change
/// builds a fresh set and swaps it in.
#[derive(Debug, Clone, PartialEq)]
pub struct TernaryTransforms {
    system: TernaryCoordinateSystem,
    viewport: Viewport,
    margins: SubplotMargins,
    axes_to_display: Affine2D,
    data: TransformChain,
    display_to_data: TransformChain,
    xaxis_text: AxisTextTransform,
    yaxis_text: AxisTextTransform,
}

impl TernaryTransforms {
    pub fn build(
        system: TernaryCoordinateSystem,
        viewport: Viewport,
        margins: SubplotMargins,
        tick_label_pad_px: f64,
    ) -> TernaryResult<Self> {
        if !tick_label_pad_px.is_finite() {
            return Err(TernaryError::InvalidData(
                "tick label pad must be finite".to_owned(),
            ));
        }
        let axes_to_display = axes_to_display_affine(viewport, margins)?;
        let data = system.data_transform(axes_to_display);
        let display_to_data = data.inverted()?;
        let xaxis_text = system.xaxis_text_transform(axes_to_display, tick_label_pad_px);
        let yaxis_text = system.yaxis_text_transform(axes_to_display, tick_label_pad_px);

        debug!(
            total = system.config().total(),
            width = viewport.width,
            height = viewport.height,
            stages = data.stages().len(),
            "built ternary transform chain"
        );

        Ok(Self {
            system,
            viewport,
            margins,
            axes_to_display,
            data,
            display_to_data,
            xaxis_text,
            yaxis_text,
        })
    }

    #[must_use]
    pub fn system(&self) -> TernaryCoordinateSystem {
        self.system
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn margins(&self) -> SubplotMargins {
        self.margins
    }

    #[must_use]
    pub fn axes_to_display(&self) -> Affine2D {
        self.axes_to_display
    }

    /// Data (`b`, `l`) to display pixels.
    #[must_use]
    pub fn data(&self) -> &TransformChain {
        &self.data
    }

    #[must_use]
    pub fn display_to_data(&self) -> &TransformChain {
        &self.display_to_data
    }

    /// Bottom-axis gridlines run through the unmodified data chain.
    #[must_use]
    pub fn xaxis_grid(&self) -> &TransformChain {
        &self.data
    }

    #[must_use]
    pub fn yaxis_grid(&self) -> &TransformChain {
        &self.data
    }

    #[must_use]
    pub fn xaxis_text(&self) -> &AxisTextTransform {
        &self.xaxis_text
    }

    #[must_use]
    pub fn yaxis_text(&self) -> &AxisTextTransform {
        &self.yaxis_text
    }

    #[must_use]
    pub fn data_to_display(&self, point: Point2) -> Point2 {
        self.data.transform_point(point)
    }

    #[must_use]
    pub fn display_to_data_point(&self, point: Point2) -> Point2 {
        self.display_to_data.transform_point(point)
    }

    #[must_use]
    pub fn axes_to_display_point(&self, point: Point2) -> Point2 {
        self.axes_to_display.transform_point(point)
    }
}
