use super::{clear_color, Demo};
use crate::app::AppContext;
use crate::config::AppConfig;
use crate::core::GpuContext;
use crate::frame::FrameInfo;

/// Clears the window and nothing else
pub struct HelloWindow {
    clear: wgpu::Color,
}

impl HelloWindow {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            clear: clear_color(config.clear_color),
        }
    }
}

impl Demo for HelloWindow {
    fn update(&mut self, _gpu: &GpuContext, _context: &AppContext, _frame: &FrameInfo) {}

    fn render(&mut self, encoder: &mut wgpu::CommandEncoder, target: &wgpu::TextureView) {
        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Clear Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
    }
}
