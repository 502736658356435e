//! Window management and the demo runner using winit

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowAttributes, WindowId},
};

use crate::core::config::DemoConfig;
use crate::core::error::Error;
use crate::core::input::InputState;
use crate::core::time::FrameTimer;
use crate::core::types::Result;
use crate::render::context::GpuContext;
use crate::render::frame::FrameTarget;

/// A program driven by the runner
///
/// The runner owns the window, GPU context, input and timing. Each frame it
/// calls `update` with the input gathered since the previous frame, then
/// `render` into the surface.
pub trait Demo: Sized {
    /// Create GPU resources and initial state
    fn init(gpu: &GpuContext, config: &DemoConfig) -> Result<Self>;

    /// Whether the mouse should be grabbed for mouse look
    fn captures_mouse(&self) -> bool {
        false
    }

    /// Surface size changed
    fn resize(&mut self, width: u32, height: u32);

    /// Advance state by `dt` seconds
    fn update(&mut self, input: &InputState, dt: f32);

    /// Record the frame's commands
    fn render(&mut self, gpu: &GpuContext, encoder: &mut wgpu::CommandEncoder, target: &FrameTarget<'_>);
}

/// Application handler that manages the window lifecycle
struct App<D: Demo> {
    config: DemoConfig,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    demo: Option<D>,
    input: InputState,
    timer: FrameTimer,
    /// First fatal error; returned from `run` once the loop exits
    error: Option<Error>,
}

impl<D: Demo> App<D> {
    fn new(config: DemoConfig) -> Self {
        Self {
            config,
            window: None,
            gpu: None,
            demo: None,
            input: InputState::new(),
            timer: FrameTimer::new(),
            error: None,
        }
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let settings = &self.config.window;
        let attributes = WindowAttributes::default()
            .with_title(settings.title.clone())
            .with_inner_size(PhysicalSize::new(settings.width, settings.height));

        let window = Arc::new(
            event_loop.create_window(attributes)
                .map_err(|e| Error::Window(format!("Failed to create window: {}", e)))?,
        );

        let gpu = pollster::block_on(GpuContext::new(window.clone()))?;
        let (width, height) = gpu.size();
        log::info!("Window created: {}x{}", width, height);

        let demo = D::init(&gpu, &self.config)?;
        if demo.captures_mouse() {
            self.set_mouse_capture(&window, true);
        }

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.demo = Some(demo);
        self.timer = FrameTimer::new();
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Error) {
        log::error!("{}", error);
        self.error.get_or_insert(error);
        event_loop.exit();
    }

    fn set_mouse_capture(&mut self, window: &Window, captured: bool) {
        if captured {
            window.set_cursor_grab(CursorGrabMode::Confined)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked))
                .ok();
        } else {
            window.set_cursor_grab(CursorGrabMode::None).ok();
        }
        window.set_cursor_visible(!captured);
        self.input.set_mouse_captured(captured);
    }

    fn frame(&mut self) {
        let (Some(gpu), Some(demo)) = (&self.gpu, &mut self.demo) else { return };

        if self.timer.tick() {
            log::debug!("{:.1} FPS", self.timer.fps());
            if let Some(window) = &self.window {
                window.set_title(&format!("{} - {:.1} FPS", self.config.window.title, self.timer.fps()));
            }
        }

        self.input.begin_frame();
        demo.update(&self.input, self.timer.delta_secs());
        self.input.end_frame();

        let output = match gpu.get_current_texture() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Failed to get surface texture: {}", e);
                gpu.reconfigure();
                return;
            }
        };
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = gpu.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("frame_encoder"),
        });

        let target = FrameTarget { color: &view, depth: gpu.depth_view() };
        demo.render(gpu, &mut encoder, &target);

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

impl<D: Demo> ApplicationHandler for App<D> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.start(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.process_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(gpu) = &mut self.gpu {
                        gpu.resize(size.width, size.height);
                    }
                    if let Some(demo) = &mut self.demo {
                        demo.resize(size.width, size.height);
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event: KeyEvent {
                    physical_key: PhysicalKey::Code(KeyCode::Escape),
                    state: ElementState::Pressed,
                    ..
                },
                ..
            } => {
                log::info!("Escape pressed, exiting");
                event_loop.exit();
            }
            WindowEvent::Focused(focused) => {
                let wants_capture = self.demo.as_ref().is_some_and(|d| d.captures_mouse());
                if wants_capture {
                    if let Some(window) = self.window.clone() {
                        self.set_mouse_capture(&window, focused);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame();
            }
            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.input.process_mouse_motion(delta);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Creates an event loop and runs demo `D` until it exits
pub fn run<D: Demo + 'static>(config: DemoConfig) -> Result<()> {
    let event_loop = EventLoop::new()
        .map_err(|e| Error::Window(format!("Failed to create event loop: {}", e)))?;

    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::<D>::new(config);

    event_loop
        .run_app(&mut app)
        .map_err(|e| Error::Window(format!("Event loop error: {}", e)))?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
