use serde::{Deserialize, Serialize};

use crate::core::layout::DEFAULT_TICK_LABEL_PAD_PX;
use crate::core::ticks::{DEFAULT_MAX_TICKS, MAX_TICKS_LIMIT};
use crate::core::{DEFAULT_TOLERANCE, DEFAULT_TOTAL, SubplotMargins, TernaryConfig, Viewport};
use crate::error::{TernaryError, TernaryResult};

/// Corner of the legend box that sits on its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LegendLocation {
    #[default]
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

/// Where a legend is placed, in axes fractions.
///
/// The default anchor sits just right of the triangle apex so the legend
/// never covers the right edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendPlacement {
    pub bbox_to_anchor: (f64, f64),
    pub location: LegendLocation,
}

impl Default for LegendPlacement {
    fn default() -> Self {
        Self {
            bbox_to_anchor: (1.05, 0.97),
            location: LegendLocation::UpperLeft,
        }
    }
}

/// Size and gap of a colorbar attached to the axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorbarPlacement {
    pub shrink: f64,
    pub pad: f64,
}

impl Default for ColorbarPlacement {
    fn default() -> Self {
        Self {
            shrink: 0.9,
            pad: 0.1,
        }
    }
}

/// Public bootstrap configuration of a ternary axes.
///
/// Serializable so hosts can persist a plot setup as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TernaryAxesConfig {
    pub viewport: Viewport,
    #[serde(default = "default_total")]
    pub total: f64,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default)]
    pub margins: SubplotMargins,
    #[serde(default = "default_tick_label_pad_px")]
    pub tick_label_pad_px: f64,
    #[serde(default = "default_max_ticks")]
    pub max_ticks: usize,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub blabel: Option<String>,
    #[serde(default)]
    pub llabel: Option<String>,
    #[serde(default)]
    pub rlabel: Option<String>,
    #[serde(default = "default_grid_visible")]
    pub grid_visible: bool,
    #[serde(default)]
    pub legend: LegendPlacement,
    #[serde(default)]
    pub colorbar: ColorbarPlacement,
}

impl TernaryAxesConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            total: default_total(),
            tolerance: default_tolerance(),
            margins: SubplotMargins::default(),
            tick_label_pad_px: default_tick_label_pad_px(),
            max_ticks: default_max_ticks(),
            font_size_px: default_font_size_px(),
            title: None,
            blabel: None,
            llabel: None,
            rlabel: None,
            grid_visible: default_grid_visible(),
            legend: LegendPlacement::default(),
            colorbar: ColorbarPlacement::default(),
        }
    }

    #[must_use]
    pub fn with_total(mut self, total: f64) -> Self {
        self.total = total;
        self
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: SubplotMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_tick_label_pad_px(mut self, pad_px: f64) -> Self {
        self.tick_label_pad_px = pad_px;
        self
    }

    #[must_use]
    pub fn with_max_ticks(mut self, max_ticks: usize) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    #[must_use]
    pub fn with_font_size_px(mut self, font_size_px: f64) -> Self {
        self.font_size_px = font_size_px;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the bottom, left, and right axis labels at once.
    #[must_use]
    pub fn with_labels(
        mut self,
        blabel: impl Into<String>,
        llabel: impl Into<String>,
        rlabel: impl Into<String>,
    ) -> Self {
        self.blabel = Some(blabel.into());
        self.llabel = Some(llabel.into());
        self.rlabel = Some(rlabel.into());
        self
    }

    #[must_use]
    pub fn with_grid_visible(mut self, visible: bool) -> Self {
        self.grid_visible = visible;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendPlacement) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn with_colorbar(mut self, colorbar: ColorbarPlacement) -> Self {
        self.colorbar = colorbar;
        self
    }

    /// Resolver settings carried by this config, validated.
    pub fn ternary_config(&self) -> TernaryResult<TernaryConfig> {
        TernaryConfig::new(self.total)?.with_tolerance(self.tolerance)
    }

    pub fn validate(&self) -> TernaryResult<()> {
        self.viewport.validate()?;
        self.margins.validate()?;
        self.ternary_config()?;
        if !self.tick_label_pad_px.is_finite() {
            return Err(TernaryError::InvalidData(
                "tick label pad must be finite".to_owned(),
            ));
        }
        if !(2..=MAX_TICKS_LIMIT).contains(&self.max_ticks) {
            return Err(TernaryError::InvalidData(format!(
                "max_ticks must be in [2, {MAX_TICKS_LIMIT}]"
            )));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(TernaryError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.colorbar.shrink.is_finite()
            || self.colorbar.shrink <= 0.0
            || !self.colorbar.pad.is_finite()
        {
            return Err(TernaryError::InvalidData(
                "colorbar shrink must be > 0 and pad must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> TernaryResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TernaryError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> TernaryResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TernaryError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_total() -> f64 {
    DEFAULT_TOTAL
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_tick_label_pad_px() -> f64 {
    DEFAULT_TICK_LABEL_PAD_PX
}

fn default_max_ticks() -> usize {
    DEFAULT_MAX_TICKS
}

fn default_font_size_px() -> f64 {
    12.0
}

fn default_grid_visible() -> bool {
    true
}
