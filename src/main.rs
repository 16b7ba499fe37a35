//! Brick Pinball entry point
//!
//! Opens the window and runs input -> update -> render, paced at 60 Hz.

use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use brick_pinball::consts::*;
use brick_pinball::platform::{FramePacer, InputEvent, Key};
use brick_pinball::renderer::{RenderState, TextRenderer, build_scene};
use brick_pinball::sim::GameEvent;
use brick_pinball::{Game, Tuning};

/// Window plus the GPU state drawing into it
struct Graphics {
    window: Arc<Window>,
    render_state: RenderState,
    text: TextRenderer,
}

impl Graphics {
    fn new(event_loop: &ActiveEventLoop) -> anyhow::Result<Self> {
        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title(WINDOW_TITLE)
                        .with_inner_size(LogicalSize::new(
                            SCREEN_WIDTH as f64,
                            SCREEN_HEIGHT as f64,
                        ))
                        .with_resizable(false),
                )
                .context("Failed to create window")?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("Failed to create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("Failed to get adapter")?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let render_state =
            pollster::block_on(RenderState::new(surface, &adapter, size.width, size.height))?;

        let text =
            TextRenderer::new().map_err(|e| anyhow::anyhow!("Embedded font is invalid: {e}"))?;

        Ok(Self {
            window,
            render_state,
            text,
        })
    }
}

struct App {
    game: Game,
    graphics: Option<Graphics>,
    /// Events collected since the last frame
    pending: Vec<InputEvent>,
    pacer: FramePacer,
    /// Fatal error that stopped the event loop
    error: Option<anyhow::Error>,
}

impl App {
    fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            game: Game::new(seed, tuning),
            graphics: None,
            pending: Vec::new(),
            pacer: FramePacer::new(FPS, Instant::now()),
            error: None,
        }
    }

    /// Handle a redraw. Only a paced frame advances the game; any other
    /// redraw just shows the current state again.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if self.pacer.take_frame() {
            self.step();
            if !self.game.is_running() {
                event_loop.exit();
                return;
            }
        }
        self.draw(event_loop);
    }

    fn step(&mut self) {
        let events = std::mem::take(&mut self.pending);
        for event in self.game.frame(events) {
            if let GameEvent::GameOver {
                bricks_broken,
                paddle_hits,
                rank,
                ..
            } = event
            {
                log::info!(
                    "Run summary: {} bricks, {} paddle hits, rank {:?}",
                    bricks_broken,
                    paddle_hits,
                    rank
                );
            }
        }
    }

    fn draw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(graphics) = self.graphics.as_mut() else {
            return;
        };

        let vertices = build_scene(self.game.state(), self.game.high_scores(), &graphics.text);
        match graphics.render_state.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                graphics.render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                self.error = Some(anyhow::anyhow!("GPU out of memory"));
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }

        match Graphics::new(event_loop) {
            Ok(graphics) => self.graphics = Some(graphics),
            Err(e) => {
                log::error!("Graphics setup failed: {:#}", e);
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.pending.push(InputEvent::Quit),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                let key = Key::from_key_code(code);
                self.pending.push(match state {
                    ElementState::Pressed => InputEvent::KeyDown(key),
                    ElementState::Released => InputEvent::KeyUp(key),
                });
            }
            WindowEvent::Resized(size) => {
                if let Some(graphics) = self.graphics.as_mut() {
                    graphics.render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.pacer.ready(Instant::now()) {
            if let Some(graphics) = &self.graphics {
                graphics.window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.deadline()));
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Brick Pinball starting...");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(seed, Tuning::default());
    event_loop.run_app(&mut app).context("Event loop failed")?;

    if let Some(e) = app.error.take() {
        return Err(e);
    }

    log::info!(
        "Goodbye: best score {} over {} games",
        app.game.high_scores().best(),
        app.game.high_scores().sessions()
    );
    Ok(())
}
