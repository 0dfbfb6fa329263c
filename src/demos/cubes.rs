use super::{clear_color, CubeRenderer, Demo, CONTAINER_COLORS, FACE_COLORS};
use crate::app::AppContext;
use crate::config::AppConfig;
use crate::core::{GpuContext, WindowDimensions};
use crate::frame::FrameInfo;
use crate::texture::{DepthTexture, Texture};

/// Ten textured cubes viewed through the camera
pub struct Cubes {
    renderer: CubeRenderer,
    textures: wgpu::BindGroup,
    depth: DepthTexture,
    clear: wgpu::Color,
}

impl Cubes {
    pub fn new(gpu: &GpuContext, config: &AppConfig) -> anyhow::Result<Self> {
        let device = gpu.device();
        let renderer = CubeRenderer::new(gpu, config, gpu.surface_format())?;

        let container = Texture::from_path_or_checkerboard(
            device,
            gpu.queue(),
            config.textures.container.as_deref(),
            CONTAINER_COLORS,
        )?;
        let face = Texture::from_path_or_checkerboard(
            device,
            gpu.queue(),
            config.textures.awesomeface.as_deref(),
            FACE_COLORS,
        )?;
        let textures = renderer.texture_bind_group(device, &container, &face);

        Ok(Self {
            renderer,
            textures,
            depth: DepthTexture::new(device, gpu.dimensions()),
            clear: clear_color(config.clear_color),
        })
    }
}

impl Demo for Cubes {
    fn update(&mut self, gpu: &GpuContext, context: &AppContext, frame: &FrameInfo) {
        let aspect = gpu.dimensions().aspect_ratio();
        self.renderer.update(gpu.queue(), &context.camera, aspect, frame.time);
    }

    fn render(&mut self, encoder: &mut wgpu::CommandEncoder, target: &wgpu::TextureView) {
        self.renderer.draw(encoder, target, &self.depth, self.clear, &self.textures);
    }

    fn resize(&mut self, gpu: &GpuContext, dimensions: WindowDimensions) {
        self.depth = DepthTexture::new(gpu.device(), dimensions);
    }
}
