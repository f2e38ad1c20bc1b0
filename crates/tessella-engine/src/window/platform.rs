use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::input::InputEvent;
use crate::input::platform::winit::translate_window_event;
use crate::paint::FillMode;
use crate::render::{RenderCtx, RenderTarget, TriangleRenderer};
use crate::scene::{Painter, Platform};

/// Window configuration.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "tessella".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
        }
    }
}

/// The windowed [`Platform`]: a winit event loop pumped synchronously from
/// `Scene::run`, plus the wgpu renderer that presents recorded frames.
///
/// Pumping (rather than handing winit the loop) keeps the scene's
/// drain-events-then-draw cycle in one place. The window and GPU context are
/// created on the first pump, when winit delivers `resumed`; presents before
/// that are no-ops.
pub struct WindowPlatform {
    event_loop: EventLoop<()>,
    host: WindowHost,
    renderer: TriangleRenderer,
}

impl WindowPlatform {
    pub fn new(config: WindowConfig) -> Result<Self> {
        Self::with_gpu_init(config, GpuInit::default())
    }

    pub fn with_gpu_init(config: WindowConfig, gpu_init: GpuInit) -> Result<Self> {
        let event_loop = EventLoop::new().context("failed to create winit event loop")?;

        Ok(Self {
            event_loop,
            host: WindowHost {
                config,
                gpu_init,
                window: None,
                gpu: None,
                pending: Vec::new(),
                init_error: None,
            },
            renderer: TriangleRenderer::new(),
        })
    }
}

impl Platform for WindowPlatform {
    fn pump(&mut self, out: &mut Vec<InputEvent>) -> Result<()> {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.host);

        // Window or GPU creation failure is fatal, not retried.
        if let Some(err) = self.host.init_error.take() {
            return Err(err);
        }

        out.append(&mut self.host.pending);

        if let PumpStatus::Exit(_) = status {
            out.push(InputEvent::Quit);
        }

        Ok(())
    }

    fn present(&mut self, painter: &Painter, fill_mode: FillMode) -> Result<()> {
        let (Some(gpu), Some(window)) = (self.host.gpu.as_mut(), self.host.window.as_ref())
        else {
            // The first pump may not have created the window yet.
            return Ok(());
        };

        let mut frame = match gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                return match gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => {
                        Err(anyhow::anyhow!("surface is out of memory"))
                    }
                    // Reconfigured or transient: skip this frame.
                    _ => Ok(()),
                };
            }
        };

        let ctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format());
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            self.renderer.render(&ctx, &mut target, painter, fill_mode);
        }

        window.pre_present_notify();
        gpu.submit(frame);
        Ok(())
    }
}

/// winit-facing state: translates window events into scene input events and
/// manages the window + GPU lifecycle.
struct WindowHost {
    config: WindowConfig,
    gpu_init: GpuInit,

    window: Option<Arc<Window>>,
    gpu: Option<Gpu>,

    pending: Vec<InputEvent>,
    init_error: Option<anyhow::Error>,
}

impl ApplicationHandler for WindowHost {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.init_error.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                self.init_error = Some(anyhow::Error::new(err).context("failed to create window"));
                return;
            }
        };

        match pollster::block_on(Gpu::new(window.clone(), self.gpu_init.clone())) {
            Ok(gpu) => {
                log::debug!("window and GPU context ready");
                self.window = Some(window);
                self.gpu = Some(gpu);
            }
            Err(err) => self.init_error = Some(err),
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(input) = translate_window_event(&event) {
            self.pending.push(input);
        }

        match event {
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.resize(new_size);
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let (Some(gpu), Some(window)) = (self.gpu.as_mut(), self.window.as_ref()) {
                    gpu.resize(window.inner_size());
                }
            }

            _ => {}
        }
    }
}
