//! Interactive Mandelbrot set viewer.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> Result<(), eframe::Error> {
    {
        // Silence wgpu log spam (https://github.com/gfx-rs/wgpu/issues/3206)
        let mut rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned());
        for loud_crate in ["naga", "wgpu_core", "wgpu_hal"] {
            if !rust_log.contains(&format!("{loud_crate}=")) {
                rust_log += &format!(",{loud_crate}=warn");
            }
        }
        std::env::set_var("RUST_LOG", rust_log);
    }

    // Log to stdout (if you run with `RUST_LOG=debug`).
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        initial_window_size: Some([800.0, 800.0].into()),

        renderer: eframe::Renderer::Wgpu,

        wgpu_options: egui_wgpu::WgpuConfiguration {
            device_descriptor: wgpu::DeviceDescriptor {
                label: Some("mandelbrot"),
                features: wgpu::Features::empty(),
                limits: wgpu::Limits::default(),
            },
            ..Default::default()
        },

        ..Default::default()
    };
    eframe::run_native(
        "Mandelbrot",
        options,
        Box::new(|cc| Box::new(fractal_viewer::FractalApp::new(cc))),
    )
}
