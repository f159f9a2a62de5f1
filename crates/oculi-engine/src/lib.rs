//! Oculi engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by demo binaries:
//! window/event loop, surface management, input translation, frame timing,
//! and the draw-list scene consumed by the shape renderers.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
