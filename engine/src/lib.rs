//! Sprite Intro Engine Library
//!
//! A small sample game: a window, a wgpu sprite renderer, two textures and a
//! capped-rate game loop that moves a brick around the screen and fires a
//! single ball.
//!
//! # Modules
//!
//! - [`config`] - Window, timing, entity and key binding configuration (JSON)
//! - [`input`] - Key codes, held-key table, event queue and action bindings
//! - [`world`] - Screen extents and boundary helpers
//! - [`game`] - Player, projectile and the simulation update step
//! - [`render`] - GPU context, textures, sprite batch and the render step
//! - [`frame_loop`] - Tick pacing and loop state
//! - [`app`] - winit application tying it all together
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use sprite_intro_engine::config::GameConfig;
//! use sprite_intro_engine::game::SimulationContext;
//! use sprite_intro_engine::input::{InputState, KeyCode};
//! use sprite_intro_engine::world::ScreenExtents;
//!
//! let config = GameConfig::default();
//! let mut sim = SimulationContext::new(&config, ScreenExtents::new(640.0, 480.0));
//! let mut input = InputState::new();
//! input.keys.set(KeyCode::Space, true);
//!
//! sim.update(&input, Duration::from_millis(10));
//! assert!(sim.projectile.exists);
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod frame_loop;
pub mod game;
pub mod input;
pub mod logging;
pub mod render;
pub mod world;

pub use app::{App, Shutdown, run};
pub use config::GameConfig;
pub use frame_loop::{FramePacer, FrameStep, LoopState};
pub use game::{Player, Projectile, SimulationContext, TickOutcome};
pub use input::{GameAction, InputEvent, InputState, KeyBindings, KeyCode, KeyStateTable};
pub use world::ScreenExtents;
