mod args;
mod artists;
mod axes;
mod axes_config;
mod frame_builder;
mod operations;

pub use args::{TernaryArgs, TernaryDelta, ThirdArg};
pub use artists::{
    AnnotationArtist, ArrowArtist, Artist, ArtistId, FormatSpec, LineArtist, LineStyle,
    ScatterArtist, ScatterStyle, TextArtist,
};
pub use axes::TernaryAxes;
pub use axes_config::{ColorbarPlacement, LegendLocation, LegendPlacement, TernaryAxesConfig};
pub use operations::{AxesOperation, AxisKind, AxisScale};
