mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;

pub use crate::core::{TextHAlign, TextVAlign};
pub use frame::RenderFrame;
pub use layer_stack::FrameLayer;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, LineStrokeStyle, MarkerPrimitive, MarkerShape, PolygonPrimitive,
    TextPrimitive,
};

use crate::error::TernaryResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, validated-on-demand `RenderFrame`
/// so drawing code stays isolated from resolution and projection logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> TernaryResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
