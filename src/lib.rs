//! ternary-rs: ternary (b, l, r) plot projection engine.
//!
//! Three co-dependent quantities that sum to a fixed total are resolved into
//! two plotting coordinates, sheared onto a triangular layout, and fitted into
//! a drawing surface together with a three-sided grid, ticks, and labels.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{TernaryAxes, TernaryAxesConfig};
pub use error::{TernaryError, TernaryResult};
