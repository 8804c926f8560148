//! Neon Command - personalized start page
//!
//! A command-center start page: live clock and greeting in the title bar,
//! persisted accent/note settings, and the animated particle field filling
//! the window.

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use neon_page::{ConfigStore, FileStore, PageConfig};
use neon_render::{BlitPipeline, RenderContext};

use neon_command::config::AppConfig;
use neon_command::systems::{FrameSystem, WindowSystem};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render_context: Option<RenderContext>,
    blit_pipeline: Option<BlitPipeline>,
    /// Field simulation + framebuffer, created once the window exists
    frame: Option<FrameSystem>,
    /// Persisted page state (accent + note)
    page_store: ConfigStore<FileStore>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        // Open the persisted page state and apply it
        let page_store = ConfigStore::new(FileStore::new(&config.page.storage_path));
        let page = page_store.load();
        Self::apply_page_config(&page);

        Self {
            config,
            window: None,
            render_context: None,
            blit_pipeline: None,
            frame: None,
            page_store,
        }
    }

    /// Surface the persisted settings. The accent tints nothing in the
    /// field itself (its glow color is fixed); it is reported for the
    /// page chrome.
    fn apply_page_config(page: &PageConfig) {
        let accent = page.accent_color().to_bytes();
        log::info!(
            "Page config: accent {} (rgb {},{},{}), note {} chars",
            page.accent,
            accent[0],
            accent[1],
            accent[2],
            page.note.len()
        );
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(frame)) = (&self.window, &mut self.frame) else {
            return;
        };

        // Clock + greeting into the title, at most once a minute
        if let Some((clock, greeting)) = frame.title_update(&chrono::Local::now()) {
            window.update_title(&clock, greeting);
        }

        // Simulate and rasterize one frame
        let running = frame.render();

        // Present
        if let (Some(ctx), Some(blit)) = (&mut self.render_context, &mut self.blit_pipeline) {
            match blit.present(ctx, frame.framebuffer()) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let size = ctx.size;
                    ctx.resize(size);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of GPU memory, exiting");
                    event_loop.exit();
                    return;
                }
                Err(e) => {
                    log::warn!("Surface error: {:?}", e);
                }
            }
        }

        // Keep the loop alive: one pending redraw at a time
        if running {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        // Bring up the surface; without it the animation never starts
        let render_context = match pollster::block_on(RenderContext::new(
            window.window().clone(),
            self.config.window.vsync,
        )) {
            Ok(ctx) => ctx,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let blit_pipeline = BlitPipeline::new(&render_context.device, render_context.config.format);

        let size = window.window().inner_size();
        let frame = FrameSystem::new(size.width, size.height, self.config.field.seed);

        log::info!("Field running at {}x{}", size.width, size.height);

        window.request_redraw();
        self.window = Some(window);
        self.render_context = Some(render_context);
        self.blit_pipeline = Some(blit_pipeline);
        self.frame = Some(frame);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                if let Some(frame) = &mut self.frame {
                    frame.animator_mut().stop();
                }
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(physical_size);
                }
                if let Some(frame) = &mut self.frame {
                    frame.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if let PhysicalKey::Code(key) = event.physical_key {
                    match key {
                        KeyCode::Escape => {
                            event_loop.exit();
                        }
                        KeyCode::KeyF => {
                            if let Some(window) = &self.window {
                                window.toggle_fullscreen();
                            }
                        }
                        KeyCode::KeyR => {
                            match self.page_store.reset() {
                                Ok(page) => {
                                    log::info!("Page settings reset to defaults");
                                    Self::apply_page_config(&page);
                                }
                                Err(e) => log::warn!("Failed to reset page settings: {}", e),
                            }
                        }
                        _ => {}
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }
}

fn main() {
    // Load configuration before logging so the configured level applies;
    // RUST_LOG still overrides it
    let loaded = AppConfig::load();
    let level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::info!("Starting Neon Command");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
