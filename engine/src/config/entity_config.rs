//! Entity Configuration
//!
//! Tuning for the player sprite and its projectile. Speeds and velocities
//! are in pixels per millisecond.

use std::path::PathBuf;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Player-controlled brick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Spawn position in screen coordinates (y grows downward)
    pub start: Vec2,
    /// Step speed per held direction key (px/ms)
    pub speed: f32,
    /// Sprite width and height (px)
    pub size: Vec2,
    /// Texture image path
    pub texture: PathBuf,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start: Vec2::new(8.0, 200.0),
            speed: 0.2,
            size: Vec2::new(16.0, 16.0),
            texture: PathBuf::from("assets/brick.png"),
        }
    }
}

/// The single projectile the player can fire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Launch velocity (px/ms); negative y travels up the screen
    pub velocity: Vec2,
    /// Sprite width and height (px)
    pub size: Vec2,
    /// Texture image path
    pub texture: PathBuf,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            velocity: Vec2::new(0.0, -0.1),
            size: Vec2::new(16.0, 16.0),
            texture: PathBuf::from("assets/ball.png"),
        }
    }
}
