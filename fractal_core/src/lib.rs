//! Escape-time evaluation of the Mandelbrot set, plus the per-frame viewport
//! mapping shared with the GPU shader.
//!
//! Everything in here is pure: the same inputs always produce bit-identical
//! colors, so the CPU renderer in [`render`] is the ground truth for the
//! fragment shader in the viewer.

pub mod complex;
pub mod evaluate;
pub mod render;
pub mod viewport;

pub use complex::Complex;
pub use evaluate::{escape_time, evaluate, shade, Color, MAX_ITERATIONS};
pub use render::{render, Frame};
pub use viewport::{Region, ScreenPosition, ViewParams, ViewportMapping, MANDELBROT_REGION};
