mod cube_scene;
mod cubes;
mod frame_buffer;
mod shader_toy;
mod window;

pub use cube_scene::CubeRenderer;
pub use cubes::Cubes;
pub use frame_buffer::FrameBuffer;
pub use shader_toy::ShaderToy;
pub use window::HelloWindow;

use crate::app::AppContext;
use crate::config::AppConfig;
use crate::core::{GpuContext, WindowDimensions};
use crate::frame::FrameInfo;

/// One of the tutorial programs
pub trait Demo {
    /// Upload per-frame data (uniforms, instance transforms)
    fn update(&mut self, gpu: &GpuContext, context: &AppContext, frame: &FrameInfo);

    /// Record this frame's passes into `encoder`, ending on `target`
    fn render(&mut self, encoder: &mut wgpu::CommandEncoder, target: &wgpu::TextureView);

    /// Recreate size-dependent resources
    fn resize(&mut self, _gpu: &GpuContext, _dimensions: WindowDimensions) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DemoKind {
    /// Empty window cleared to the configured colour
    Window,
    /// Ten textured cubes seen through the first-person camera
    Cubes,
    /// Full-screen fragment shader driven by time and mouse
    ShaderToy,
    /// Cubes rendered off-screen, then used as their own texture
    FrameBuffer,
}

impl DemoKind {
    /// Whether the demo reads pointer motion as camera look input
    pub fn captures_cursor(self) -> bool {
        !matches!(self, DemoKind::Window)
    }

    pub fn title(self) -> &'static str {
        match self {
            DemoKind::Window => "Hello Window",
            DemoKind::Cubes => "Cubes",
            DemoKind::ShaderToy => "Shader Toy",
            DemoKind::FrameBuffer => "Frame Buffer",
        }
    }

    pub fn create(self, gpu: &GpuContext, config: &AppConfig) -> anyhow::Result<Box<dyn Demo>> {
        log::info!("Starting demo: {}", self.title());
        Ok(match self {
            DemoKind::Window => Box::new(HelloWindow::new(config)),
            DemoKind::Cubes => Box::new(Cubes::new(gpu, config)?),
            DemoKind::ShaderToy => Box::new(ShaderToy::new(gpu, config)?),
            DemoKind::FrameBuffer => Box::new(FrameBuffer::new(gpu, config)?),
        })
    }
}

pub(crate) fn clear_color(rgba: [f64; 4]) -> wgpu::Color {
    wgpu::Color {
        r: rgba[0],
        g: rgba[1],
        b: rgba[2],
        a: rgba[3],
    }
}

/// Placeholder palettes used when no texture file is configured
pub(crate) const CONTAINER_COLORS: [[u8; 4]; 2] = [[156, 102, 51, 255], [110, 70, 35, 255]];
pub(crate) const FACE_COLORS: [[u8; 4]; 2] = [[240, 200, 40, 255], [30, 30, 30, 255]];

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn demo_names_are_kebab_case() {
        let names: Vec<_> = DemoKind::value_variants()
            .iter()
            .filter_map(|kind| kind.to_possible_value())
            .map(|value| value.get_name().to_string())
            .collect();
        assert_eq!(names, ["window", "cubes", "shader-toy", "frame-buffer"]);
    }

    #[test]
    fn clear_color_maps_channels() {
        let color = clear_color([0.2, 0.3, 0.3, 1.0]);
        assert_eq!((color.r, color.g, color.b, color.a), (0.2, 0.3, 0.3, 1.0));
    }

    #[test]
    fn only_window_demo_leaves_cursor_free() {
        assert!(!DemoKind::Window.captures_cursor());
        assert!(DemoKind::Cubes.captures_cursor());
        assert!(DemoKind::ShaderToy.captures_cursor());
    }
}
