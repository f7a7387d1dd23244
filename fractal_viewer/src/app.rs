use crate::cpu_view::CpuView;
use crate::gpu_view::GpuView;

/// Which path is presenting the fractal this session.
enum View {
    Gpu(GpuView),
    Cpu(CpuView),
}

/// Top-level eframe application.
pub struct FractalApp {
    view: View,
}

impl FractalApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let view = match GpuView::new(cc) {
            Ok(gpu) => View::Gpu(gpu),
            Err(error) => {
                tracing::error!("renderer unavailable: {error:#}; falling back to CPU rendering");
                View::Cpu(CpuView::default())
            }
        };
        Self { view }
    }

    fn backend_label(&self) -> &'static str {
        match self.view {
            View::Gpu(_) => "wgpu render pipeline",
            View::Cpu(_) => "CPU fallback",
        }
    }
}

impl eframe::App for FractalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("fractal_top_bar").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label("Mandelbrot set");
                ui.separator();
                ui.label(self.backend_label());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::canvas(ui.style()).show(ui, |ui| match &mut self.view {
                View::Gpu(gpu) => gpu.paint(ui),
                View::Cpu(cpu) => cpu.paint(ui),
            });
        });
    }
}
