//! Player Entity
//!
//! The brick the player steers around the screen. Its centre is kept at
//! least half a sprite away from every screen edge.

use glam::Vec2;

use crate::config::PlayerConfig;
use crate::world::ScreenExtents;

/// Player-controlled sprite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    /// Sprite centre in screen coordinates (y grows downward)
    pub position: Vec2,
    /// Pixels moved per millisecond per held direction
    pub speed: f32,
    /// Sprite width and height
    pub size: Vec2,
}

impl Player {
    pub fn new(position: Vec2, speed: f32, size: Vec2) -> Self {
        Self {
            position,
            speed,
            size,
        }
    }

    pub fn from_config(config: &PlayerConfig) -> Self {
        Self::new(config.start, config.speed, config.size)
    }

    pub fn half_size(&self) -> Vec2 {
        self.size * 0.5
    }

    /// Move along `direction` (each axis in -1..=1) for `elapsed_ms`, then
    /// clamp back inside the screen margin.
    pub fn step(&mut self, direction: Vec2, elapsed_ms: f32, screen: &ScreenExtents) {
        let displacement = self.speed * elapsed_ms;
        self.position += direction * displacement;
        self.position = screen.clamp_with_margin(self.position, self.half_size());
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::from_config(&PlayerConfig::default())
    }
}
