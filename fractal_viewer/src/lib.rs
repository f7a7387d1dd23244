//! eframe application around the escape-time evaluator in `fractal_core`.

mod app;
mod cpu_view;
mod gpu_view;

pub use app::FractalApp;
