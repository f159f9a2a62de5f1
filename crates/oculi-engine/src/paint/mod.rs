//! Paint model shared between demo code and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid only; this workload paints flat fills)
//!
//! Geometry types remain in `coords`.

mod color;

pub use color::Color;

/// Paint source for filling geometry.
///
/// Single-variant enum rather than a bare `Color` so renderer dispatch stays
/// stable if gradients or patterns are added later.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
}
