//! Application
//!
//! winit front end. `App` owns the configuration, the input queue and, once
//! the window exists, a [`Session`] holding the simulation and render
//! contexts. Each loop iteration drains input, asks the pacer whether a tick
//! is due, and either runs Update + Render or waits for the next tick.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use glam::Vec2;
use snafu::ResultExt;
use tracing::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::error::EventLoopError;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Icon, Window, WindowAttributes, WindowId};

use crate::config::{GameConfig, WindowConfig};
use crate::error::{CreateWindowErr, InvalidIconErr, LoadIconErr, WindowError};
use crate::frame_loop::{FramePacer, FrameStep, LoopState};
use crate::game::SimulationContext;
use crate::input::{InputEvent, InputState, KeyBindings, KeyCode};
use crate::render::RenderContext;
use crate::world::ScreenExtents;

/// How the event loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shutdown {
    /// Window closed or quit key pressed.
    Normal,
    /// Window or GPU setup failed.
    SetupFailed,
    /// The GPU ran out of memory while presenting.
    RenderFailed,
}

/// Everything that only exists while the window is open.
pub struct Session {
    pub window: Arc<Window>,
    pub sim: SimulationContext,
    pub render: RenderContext,
    pub pacer: FramePacer,
}

pub struct App {
    config: GameConfig,
    input: InputState,
    loop_state: LoopState,
    session: Option<Session>,
    shutdown: Shutdown,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let bindings = KeyBindings::from(&config.bindings);
        Self {
            config,
            input: InputState::with_bindings(bindings),
            loop_state: LoopState::Running,
            session: None,
            shutdown: Shutdown::Normal,
        }
    }

    pub fn shutdown(&self) -> Shutdown {
        self.shutdown
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, reason: Shutdown) {
        self.shutdown = reason;
        self.loop_state = LoopState::Stopped;
        event_loop.exit();
    }

    fn start_session(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Shutdown> {
        let window = create_window(event_loop, &self.config.window).map_err(|err| {
            error!(%err, "Window creation failed");
            Shutdown::SetupFailed
        })?;
        let window = Arc::new(window);

        let screen = screen_extents(window.inner_size(), &self.config.window);
        let render = RenderContext::new(Arc::clone(&window), &self.config, &screen).map_err(|err| {
            error!(%err, "GPU initialisation failed");
            Shutdown::SetupFailed
        })?;

        let sim = SimulationContext::new(&self.config, screen);
        let pacer = FramePacer::from_config(&self.config.timing, Instant::now());
        info!(
            width = screen.width,
            height = screen.height,
            tick_ms = pacer.tick_interval().as_millis() as u64,
            "Ready"
        );

        self.session = Some(Session {
            window,
            sim,
            render,
            pacer,
        });
        Ok(())
    }

    /// Draw the current state; decides what to do about presentation errors.
    fn present(&mut self, event_loop: &ActiveEventLoop) {
        let result = match self.session.as_mut() {
            Some(session) => session.render.render(&session.sim),
            None => return,
        };

        match result {
            Ok(()) => {}
            Err(err) if err.is_surface_stale() => {
                if let Some(session) = self.session.as_mut() {
                    session.render.recover_surface(session.window.inner_size());
                }
            }
            Err(err) if err.is_fatal() => {
                error!(%err, "Rendering cannot continue");
                self.fail(event_loop, Shutdown::RenderFailed);
            }
            Err(err) => warn!(%err, "Skipping frame"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() {
            return;
        }

        match self.start_session(event_loop) {
            Ok(()) => {
                if let Some(session) = &self.session {
                    event_loop.set_control_flow(ControlFlow::WaitUntil(session.pacer.next_tick()));
                }
            }
            Err(reason) => self.fail(event_loop, reason),
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match window_action(&event) {
            WindowAction::Quit => self.input.queue.push(InputEvent::Quit),
            WindowAction::Key { code, pressed } => self.input.key_event(code, pressed),
            WindowAction::ReleaseAll => self.input.queue.push(InputEvent::ReleaseAll),
            WindowAction::Resize(size) => {
                if let Some(session) = self.session.as_mut() {
                    session.render.resize(size);
                }
            }
            WindowAction::Ignore => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let quit = self.input.pump();
        self.loop_state = self.loop_state.on_quit_signal(quit);
        if !self.loop_state.is_running() {
            event_loop.exit();
            return;
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.pacer.poll(Instant::now()) {
            FrameStep::Tick { elapsed } => {
                let outcome = session.sim.update(&self.input, elapsed);
                if outcome.spawned || outcome.culled {
                    debug!(?outcome, tick = session.sim.ticks(), "Projectile state changed");
                }
                if self.config.render.debug_title {
                    session
                        .window
                        .set_title(&debug_title(&self.config.window.title, session.sim.player.position));
                }
                let next = session.pacer.next_tick();
                self.present(event_loop);
                if self.loop_state.is_running() {
                    event_loop.set_control_flow(ControlFlow::WaitUntil(next));
                }
            }
            FrameStep::Wait { until } => {
                event_loop.set_control_flow(ControlFlow::WaitUntil(until));
            }
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(session) = self.session.take() {
            info!(
                ticks = session.sim.ticks(),
                sim_time_ms = session.sim.sim_time().as_millis() as u64,
                "Cleanup Ok"
            );
        }
    }
}

/// What a window event means to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAction {
    Quit,
    Key { code: KeyCode, pressed: bool },
    ReleaseAll,
    /// The client area changed size; the surface must follow.
    Resize(PhysicalSize<u32>),
    Ignore,
}

/// Classify a window event.
///
/// Redraw requests are ignored: frames are only drawn on pacer ticks, and the
/// next tick repaints within one tick interval. A scale factor change is
/// followed by its own `Resized`.
pub fn window_action(event: &WindowEvent) -> WindowAction {
    match event {
        WindowEvent::CloseRequested => WindowAction::Quit,
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(key),
                    state,
                    ..
                },
            ..
        } => match KeyCode::from_winit(*key) {
            Some(code) => WindowAction::Key {
                code,
                pressed: *state == ElementState::Pressed,
            },
            None => WindowAction::Ignore,
        },
        WindowEvent::Focused(false) => WindowAction::ReleaseAll,
        WindowEvent::Resized(size) => WindowAction::Resize(*size),
        _ => WindowAction::Ignore,
    }
}

/// Run the game until the window closes.
pub fn run(config: GameConfig) -> Result<Shutdown, EventLoopError> {
    let event_loop = EventLoop::new()?;
    // `resumed` switches to `WaitUntil` once the session exists
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(app.shutdown())
}

fn create_window(
    event_loop: &ActiveEventLoop,
    config: &WindowConfig,
) -> Result<Window, WindowError> {
    let mut attrs = WindowAttributes::default()
        .with_title(config.title.clone())
        .with_inner_size(PhysicalSize::new(config.width, config.height))
        .with_resizable(false);

    if let Some(path) = &config.icon_path {
        match load_icon(path) {
            Ok(icon) => attrs = attrs.with_window_icon(Some(icon)),
            Err(err) => warn!(%err, "Window will use the default icon"),
        }
    }

    event_loop.create_window(attrs).context(CreateWindowErr)
}

/// Decode an image file into a window icon.
pub fn load_icon(path: &Path) -> Result<Icon, WindowError> {
    let image = image::open(path).context(LoadIconErr { path })?.to_rgba8();
    let (width, height) = image.dimensions();
    Icon::from_rgba(image.into_raw(), width, height).context(InvalidIconErr { path })
}

/// Screen extents from the window's client area, or the configured size if
/// the platform reports an empty one.
pub fn screen_extents(size: PhysicalSize<u32>, config: &WindowConfig) -> ScreenExtents {
    if size.width == 0 || size.height == 0 {
        ScreenExtents::from_pixels(config.width, config.height)
    } else {
        ScreenExtents::from_pixels(size.width, size.height)
    }
}

/// Window title with the player position appended.
pub fn debug_title(title: &str, position: Vec2) -> String {
    format!("{title} ({:.1},{:.1})", position.x, position.y)
}
