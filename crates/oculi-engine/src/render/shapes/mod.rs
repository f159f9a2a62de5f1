//! Shape renderers.

mod common;

pub mod circle;
pub mod line;

pub use circle::CircleRenderer;
pub use line::LineRenderer;
