use std::fmt;

use serde::{Deserialize, Serialize};

/// Axis of a ternary surface. `Bottom` carries `b`, `Left` carries `l`, and
/// `Right` is the synthetic `r` axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisKind {
    Bottom,
    Left,
    Right,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisScale {
    #[default]
    Linear,
    Log,
    SymLog,
    Logit,
}

/// Plot types and axes operations a host may dispatch to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxesOperation {
    Plot,
    Scatter,
    Text,
    Annotate,
    Arrow,
    Grid,
    Legend,
    Title,
    Colorbar,
    Acorr,
    Bar,
    Barh,
    Boxplot,
    BrokenBarh,
    Cohere,
    Csd,
    PlotDate,
    Hist,
    Loglog,
    Pie,
    Polar,
    Psd,
    Semilogx,
    Semilogy,
    Stem,
    Xcorr,
    Rgrids,
    Thetagrids,
    Twinx,
    Twiny,
}

impl AxesOperation {
    pub const DISABLED: [Self; 21] = [
        Self::Acorr,
        Self::Bar,
        Self::Barh,
        Self::Boxplot,
        Self::BrokenBarh,
        Self::Cohere,
        Self::Csd,
        Self::PlotDate,
        Self::Hist,
        Self::Loglog,
        Self::Pie,
        Self::Polar,
        Self::Psd,
        Self::Semilogx,
        Self::Semilogy,
        Self::Stem,
        Self::Xcorr,
        Self::Rgrids,
        Self::Thetagrids,
        Self::Twinx,
        Self::Twiny,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Plot => "plot",
            Self::Scatter => "scatter",
            Self::Text => "text",
            Self::Annotate => "annotate",
            Self::Arrow => "arrow",
            Self::Grid => "grid",
            Self::Legend => "legend",
            Self::Title => "title",
            Self::Colorbar => "colorbar",
            Self::Acorr => "acorr",
            Self::Bar => "bar",
            Self::Barh => "barh",
            Self::Boxplot => "boxplot",
            Self::BrokenBarh => "broken_barh",
            Self::Cohere => "cohere",
            Self::Csd => "csd",
            Self::PlotDate => "plot_date",
            Self::Hist => "hist",
            Self::Loglog => "loglog",
            Self::Pie => "pie",
            Self::Polar => "polar",
            Self::Psd => "psd",
            Self::Semilogx => "semilogx",
            Self::Semilogy => "semilogy",
            Self::Stem => "stem",
            Self::Xcorr => "xcorr",
            Self::Rgrids => "rgrids",
            Self::Thetagrids => "thetagrids",
            Self::Twinx => "twinx",
            Self::Twiny => "twiny",
        }
    }

    /// Why the operation cannot run on ternary axes, or `None` if it can.
    #[must_use]
    pub fn disabled_reason(self) -> Option<&'static str> {
        Some(match self {
            Self::Plot
            | Self::Scatter
            | Self::Text
            | Self::Annotate
            | Self::Arrow
            | Self::Grid
            | Self::Legend
            | Self::Title
            | Self::Colorbar => return None,
            Self::Acorr => "autocorrelation plots have no simplex geometry",
            Self::Bar => "bar plots have no simplex geometry",
            Self::Barh => "horizontal bar plots have no simplex geometry",
            Self::Boxplot => "box plots have no simplex geometry",
            Self::BrokenBarh => "broken horizontal bar plots have no simplex geometry",
            Self::Cohere => "coherence plots have no simplex geometry",
            Self::Csd => "cross spectral density plots have no simplex geometry",
            Self::PlotDate => "ternary axes cannot be labeled with dates",
            Self::Hist => "histograms have no simplex geometry",
            Self::Loglog | Self::Semilogx | Self::Semilogy => {
                "logarithmic axes would distort the simplex"
            }
            Self::Pie => "pie charts have no simplex geometry",
            Self::Polar => "polar plots have no simplex geometry",
            Self::Psd => "power spectral density plots have no simplex geometry",
            Self::Stem => "stem plots have no simplex geometry",
            Self::Xcorr => "correlation plots have no simplex geometry",
            Self::Rgrids => "radial grids require polar axes",
            Self::Thetagrids => "theta grids require polar axes",
            Self::Twinx => "secondary y axes are not available",
            Self::Twiny => "secondary x axes are not available",
        })
    }

    #[must_use]
    pub fn is_supported(self) -> bool {
        self.disabled_reason().is_none()
    }
}
