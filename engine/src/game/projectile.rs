//! Projectile Entity
//!
//! A single ball slot. It is live between a spawn and the first update that
//! finds it outside the screen.

use glam::Vec2;

use crate::config::ProjectileConfig;
use crate::world::ScreenExtents;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    pub position: Vec2,
    /// Pixels per millisecond
    pub velocity: Vec2,
    pub exists: bool,
    /// Sprite width and height
    pub size: Vec2,
}

impl Projectile {
    /// An empty slot for projectiles of the given sprite size.
    pub fn inactive(size: Vec2) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            exists: false,
            size,
        }
    }

    pub fn from_config(config: &ProjectileConfig) -> Self {
        Self::inactive(config.size)
    }

    /// Launch from `position` with `velocity`.
    ///
    /// Returns `false` and changes nothing if a projectile is already live.
    pub fn spawn(&mut self, position: Vec2, velocity: Vec2) -> bool {
        if self.exists {
            return false;
        }
        self.position = position;
        self.velocity = velocity;
        self.exists = true;
        true
    }

    /// Euler step: `position += velocity * elapsed_ms`. No-op when not live.
    pub fn integrate(&mut self, elapsed_ms: f32) {
        if self.exists {
            self.position += self.velocity * elapsed_ms;
        }
    }

    /// Clear the slot if the projectile left the screen. Returns `true` if it was removed.
    pub fn cull(&mut self, screen: &ScreenExtents) -> bool {
        if self.exists && !screen.contains(self.position) {
            self.exists = false;
            return true;
        }
        false
    }
}

impl Default for Projectile {
    fn default() -> Self {
        Self::from_config(&ProjectileConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_once() {
        let mut ball = Projectile::default();
        assert!(ball.spawn(Vec2::new(10.0, 20.0), Vec2::new(0.0, -0.1)));
        assert!(!ball.spawn(Vec2::new(50.0, 50.0), Vec2::new(1.0, 1.0)));
        assert_eq!(ball.position, Vec2::new(10.0, 20.0));
        assert_eq!(ball.velocity, Vec2::new(0.0, -0.1));
    }

    #[test]
    fn test_integrate_inactive_is_noop() {
        let mut ball = Projectile::default();
        ball.velocity = Vec2::new(1.0, 1.0);
        ball.integrate(100.0);
        assert_eq!(ball.position, Vec2::ZERO);
    }

    #[test]
    fn test_integrate_live() {
        let mut ball = Projectile::default();
        ball.spawn(Vec2::new(100.0, 100.0), Vec2::new(0.0, -0.1));
        ball.integrate(100.0);
        assert!((ball.position.y - 90.0).abs() < 1e-4);
        assert_eq!(ball.position.x, 100.0);
    }

    #[test]
    fn test_cull_off_top() {
        let screen = ScreenExtents::new(640.0, 480.0);
        let mut ball = Projectile::default();
        ball.spawn(Vec2::new(300.0, -5.0), Vec2::ZERO);
        assert!(ball.cull(&screen));
        assert!(!ball.exists);
        assert!(!ball.cull(&screen));
    }

    #[test]
    fn test_cull_keeps_onscreen() {
        let screen = ScreenExtents::new(640.0, 480.0);
        let mut ball = Projectile::default();
        ball.spawn(Vec2::new(300.0, 0.0), Vec2::ZERO);
        assert!(!ball.cull(&screen));
        assert!(ball.exists);
    }
}
