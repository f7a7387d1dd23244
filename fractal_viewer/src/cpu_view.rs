use fractal_core::{render, ViewportMapping, MANDELBROT_REGION};

/// Fallback presentation path: frames come from the CPU evaluator and are
/// shown through an egui texture, re-rendered only when the panel size
/// changes.
#[derive(Default)]
pub struct CpuView {
    texture: Option<egui::TextureHandle>,
    size_px: [u32; 2],
}

impl CpuView {
    pub fn paint(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let width = (available.x.round() as u32).max(1);
        let height = (available.y.round() as u32).max(1);

        if self.texture.is_none() || self.size_px != [width, height] {
            let mapping = ViewportMapping::new(MANDELBROT_REGION, width, height);
            let frame = render(&mapping);
            let image = egui::ColorImage::from_rgba_unmultiplied(
                [frame.width() as usize, frame.height() as usize],
                &frame.to_rgba_bytes(),
            );
            self.texture = Some(ui.ctx().load_texture(
                "mandelbrot-cpu",
                image,
                egui::TextureOptions::NEAREST,
            ));
            self.size_px = [width, height];
            tracing::debug!(width, height, "re-rendered CPU frame");
        }

        if let Some(texture) = &self.texture {
            ui.image(texture, available);
        }
    }
}
