use super::{clear_color, CubeRenderer, Demo, CONTAINER_COLORS, FACE_COLORS};
use crate::app::AppContext;
use crate::config::AppConfig;
use crate::core::{GpuContext, WindowDimensions};
use crate::frame::FrameInfo;
use crate::texture::{DepthTexture, Texture};

const SCREEN_CLEAR: wgpu::Color = wgpu::Color::WHITE;

/// Render the cube scene off-screen, then draw the cubes again on screen
/// textured with that off-screen image.
pub struct FrameBuffer {
    renderer: CubeRenderer,
    scene_textures: wgpu::BindGroup,
    target: Texture,
    target_depth: DepthTexture,
    target_textures: wgpu::BindGroup,
    screen_depth: DepthTexture,
    clear: wgpu::Color,
}

impl FrameBuffer {
    pub fn new(gpu: &GpuContext, config: &AppConfig) -> anyhow::Result<Self> {
        let device = gpu.device();
        let dimensions = gpu.dimensions();

        // off-screen target shares the surface format so one pipeline serves both passes
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
        let scene_textures = renderer.texture_bind_group(device, &container, &face);

        let target = Texture::render_target(device, dimensions, gpu.surface_format());
        let target_textures = renderer.texture_bind_group(device, &target, &target);

        Ok(Self {
            renderer,
            scene_textures,
            target,
            target_depth: DepthTexture::new(device, dimensions),
            target_textures,
            screen_depth: DepthTexture::new(device, dimensions),
            clear: clear_color(config.clear_color),
        })
    }
}

impl Demo for FrameBuffer {
    fn update(&mut self, gpu: &GpuContext, context: &AppContext, frame: &FrameInfo) {
        let aspect = gpu.dimensions().aspect_ratio();
        self.renderer.update(gpu.queue(), &context.camera, aspect, frame.time);
    }

    fn render(&mut self, encoder: &mut wgpu::CommandEncoder, target: &wgpu::TextureView) {
        self.renderer.draw(
            encoder,
            &self.target.view,
            &self.target_depth,
            self.clear,
            &self.scene_textures,
        );
        self.renderer.draw(
            encoder,
            target,
            &self.screen_depth,
            SCREEN_CLEAR,
            &self.target_textures,
        );
    }

    fn resize(&mut self, gpu: &GpuContext, dimensions: WindowDimensions) {
        let device = gpu.device();
        self.target = Texture::render_target(device, dimensions, gpu.surface_format());
        self.target_textures = self
            .renderer
            .texture_bind_group(device, &self.target, &self.target);
        self.target_depth = DepthTexture::new(device, dimensions);
        self.screen_depth = DepthTexture::new(device, dimensions);
    }
}
