use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::camera::Camera;
use crate::config::AppConfig;
use crate::core::{Button, Clock, Controller, GpuContext, WindowDimensions, WinitController};
use crate::demos::{Demo, DemoKind};
use crate::frame::FrameInfo;

/// State shared between input handling and rendering
pub struct AppContext {
    pub camera: Camera,
    pub input: WinitController,
    pub clock: Clock,
}

impl AppContext {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            input: WinitController::new(),
            clock: Clock::new(),
        }
    }

    /// Feed one frame of collected input into the camera: held keys first,
    /// then every cursor position in arrival order, then scroll.
    pub fn apply_input(&mut self, elapsed_seconds: f32) {
        for direction in self.input.movement() {
            self.camera.move_toward(direction, elapsed_seconds);
        }

        for (x, y) in self.input.take_cursor_moves() {
            self.camera.look(x, y);
        }

        let scroll = self.input.take_scroll();
        if scroll != 0.0 {
            self.camera.zoom(scroll);
        }
    }

    /// Escape is held
    pub fn wants_exit(&self) -> bool {
        self.input.is_down(Button::Escape)
    }

    /// Advance the clock and apply input for the new frame
    pub fn begin_frame(&mut self) -> FrameInfo {
        let frame = self.clock.tick();
        self.apply_input(frame.delta);
        frame
    }
}

pub struct App {
    config: AppConfig,
    kind: DemoKind,
    context: AppContext,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    demo: Option<Box<dyn Demo>>,
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(kind: DemoKind, config: AppConfig, camera: Camera) -> Self {
        Self {
            config,
            kind,
            context: AppContext::new(camera),
            window: None,
            gpu: None,
            demo: None,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let title = format!("{} - {}", self.config.title, self.kind.title());
        let window = Arc::new(
            event_loop.create_window(
                Window::default_attributes()
                    .with_title(title)
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.config.window.width,
                        self.config.window.height,
                    )),
            )?,
        );

        if self.kind.captures_cursor() {
            self.capture_cursor(&window);
        }

        let gpu = pollster::block_on(GpuContext::new(window.clone()))
            .map_err(|e| anyhow::anyhow!("failed to initialise GPU: {e}"))?;
        let demo = self.kind.create(&gpu, &self.config)?;

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.demo = Some(demo);
        self.context.clock.reset();
        Ok(())
    }

    fn capture_cursor(&mut self, window: &Window) {
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
        if let Err(e) = grabbed {
            log::warn!("Could not grab cursor: {}", e);
        }
        window.set_cursor_visible(false);
        self.context.input.use_virtual_cursor(self.context.camera.last_cursor());
    }

    fn resize(&mut self, dimensions: WindowDimensions) {
        if dimensions.is_empty() {
            return;
        }
        if let (Some(gpu), Some(demo)) = (&mut self.gpu, &mut self.demo) {
            gpu.resize(dimensions);
            demo.resize(gpu, dimensions);
            log::debug!("Resized to {}x{}", dimensions.width, dimensions.height);
        }
    }

    fn redraw(&mut self) {
        let frame = self.context.begin_frame();

        let (Some(gpu), Some(demo)) = (&self.gpu, &mut self.demo) else {
            return;
        };
        if gpu.dimensions().is_empty() {
            return;
        }

        demo.update(gpu, &self.context, &frame);

        let surface_texture = match gpu.surface().get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.reconfigure();
                return;
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Surface timeout, skipping frame {}", frame.number);
                return;
            }
            Err(e) => {
                log::error!("Render error: {}", e);
                return;
            }
        };
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });
        demo.render(&mut encoder, &view);

        gpu.queue().submit(Some(encoder.finish()));
        surface_texture.present();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                log::error!("{:#}", e);
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => self.resize(size.into()),
            WindowEvent::RedrawRequested => self.redraw(),
            other => {
                self.context.input.process_event(&other);
                if self.context.wants_exit() {
                    event_loop.exit();
                }
            }
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        self.context.input.process_device_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Open a window and run `kind` until the window closes
pub fn run(kind: DemoKind, config: AppConfig, camera: Camera) -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(kind, config, camera);

    log::info!("Controls: WASD to move, mouse to look, scroll to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
