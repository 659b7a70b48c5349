pub mod config;
pub mod coordinate_system;
pub mod layout;
pub mod resolver;
pub mod right_axis;
pub mod ticks;
pub mod transform;
pub mod transform_set;
pub mod types;
pub mod values;

pub use config::{DEFAULT_TOLERANCE, DEFAULT_TOTAL, TernaryConfig};
pub use coordinate_system::{
    CoordinateSystem, ProjectionFactory, ProjectionRegistry, TERNARY_PROJECTION_NAME,
    TernaryCoordinateSystem,
};
pub use layout::{
    AxisTextTransform, BackgroundPatch, SQRT3, SpinePath, SpineSide, SubplotMargins, TextHAlign,
    TextVAlign, viewport_fit_affine,
};
pub use resolver::{ResolvedCoordinates, Resolver};
pub use right_axis::{RightAxisGrid, RightAxisGridLine, RightAxisTickLabel};
pub use transform::{
    Affine2D, InvertedTernaryProjection, TernaryProjection, Transform2D, TransformChain,
    TransformStage,
};
pub use transform_set::TernaryTransforms;
pub use types::{Point2, Viewport};
pub use values::{ComponentValue, Shape};
