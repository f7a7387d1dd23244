use std::{num::NonZeroU64, sync::Arc};

use anyhow::Context as _;
use eframe::{
    egui_wgpu::wgpu::util::DeviceExt,
    egui_wgpu::{self, wgpu},
};

use fractal_core::{ViewParams, ViewportMapping, MANDELBROT_REGION};

/// Vertex of the full-viewport quad, the pipeline's only attribute.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 4],
}

const fn vertex(x: f32, y: f32) -> Vertex {
    Vertex {
        position: [x, y, 0.0, 1.0],
    }
}

/// Two triangles covering the whole viewport, in clip space.
const QUAD_VERTICES: [Vertex; 6] = [
    vertex(-1.0, 1.0),
    vertex(1.0, 1.0),
    vertex(-1.0, -1.0),
    vertex(1.0, 1.0),
    vertex(1.0, -1.0),
    vertex(-1.0, -1.0),
];

const SHADER_SOURCE: &str = include_str!("shader.wgsl");

/// GPU presentation path: a render pipeline whose fragment stage runs the
/// escape-time loop against the per-frame `ViewParams` uniform.
pub struct GpuView;

impl GpuView {
    pub fn new(cc: &eframe::CreationContext<'_>) -> anyhow::Result<Self> {
        let render_state = cc
            .wgpu_render_state
            .as_ref()
            .context("eframe was started without a wgpu render state")?;

        let device = &render_state.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mandelbrot"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("mandelbrot"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: NonZeroU64::new(std::mem::size_of::<ViewParams>() as u64),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mandelbrot"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mandelbrot"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x4],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(render_state.target_format.into())],
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mandelbrot quad"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let initial = ViewportMapping::new(MANDELBROT_REGION, 800, 800).params();
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mandelbrot view params"),
            contents: bytemuck::bytes_of(&initial),
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::UNIFORM,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("mandelbrot"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        // The graphics pipeline must have the same lifetime as the egui
        // render pass, so it lives in the `paint_callback_resources` type
        // map rather than in `self`.
        render_state
            .renderer
            .write()
            .paint_callback_resources
            .insert(PipelineResources {
                pipeline,
                bind_group,
                uniform_buffer,
                vertex_buffer,
            });

        tracing::info!(target_format = ?render_state.target_format, "mandelbrot render pipeline ready");

        Ok(GpuView)
    }

    pub fn paint(&mut self, ui: &mut egui::Ui) {
        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());

        let pixels_per_point = ui.ctx().pixels_per_point();
        let width_px = ((rect.width() * pixels_per_point).round() as u32).max(1);
        let height_px = ((rect.height() * pixels_per_point).round() as u32).max(1);

        let mapping = ViewportMapping::new(MANDELBROT_REGION, width_px, height_px);
        // Fragment coordinates are absolute in the framebuffer; fold the
        // panel origin into the record so the shader needs no extra state.
        let params = mapping
            .params_with_origin(rect.min.x * pixels_per_point, rect.min.y * pixels_per_point);

        let cb = egui_wgpu::CallbackFn::new()
            .prepare(move |_device, queue, _encoder, paint_callback_resources| {
                let resources: &PipelineResources = paint_callback_resources.get().unwrap();
                resources.upload(queue, params);
                Vec::new()
            })
            .paint(move |_info, render_pass, paint_callback_resources| {
                let resources: &PipelineResources = paint_callback_resources.get().unwrap();
                resources.draw(render_pass);
            });

        ui.painter().add(egui::PaintCallback {
            rect,
            callback: Arc::new(cb),
        });
    }
}

struct PipelineResources {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    vertex_buffer: wgpu::Buffer,
}

impl PipelineResources {
    fn upload(&self, queue: &wgpu::Queue, params: ViewParams) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&params));
    }

    fn draw<'rp>(&'rp self, render_pass: &mut wgpu::RenderPass<'rp>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..QUAD_VERTICES.len() as u32, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_covers_the_viewport_with_two_triangles() {
        let positions: Vec<[f32; 4]> = QUAD_VERTICES.iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![
                [-1.0, 1.0, 0.0, 1.0],
                [1.0, 1.0, 0.0, 1.0],
                [-1.0, -1.0, 0.0, 1.0],
                [1.0, 1.0, 0.0, 1.0],
                [1.0, -1.0, 0.0, 1.0],
                [-1.0, -1.0, 0.0, 1.0],
            ]
        );
    }

    #[test]
    fn vertex_stride_is_four_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 16);
    }

    #[test]
    fn uniform_binding_matches_the_wire_record() {
        assert_eq!(std::mem::size_of::<ViewParams>(), 16);
    }
}
