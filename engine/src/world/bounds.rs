//! Screen Bounds
//!
//! Screen extents and the two boundary policies used by the game:
//! clamping with a margin (player) and plain containment (projectile).

use glam::Vec2;

/// Size of the drawable area in pixels. Fixed once the window exists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenExtents {
    pub width: f32,
    pub height: f32,
}

impl ScreenExtents {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extents from a surface size in physical pixels.
    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(width as f32, height as f32)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Clamp `pos` so a sprite of `half_size` centred on it stays on screen.
    ///
    /// Range is `[half, extent - half]` on each axis. If the sprite is larger
    /// than the screen the range is empty and the lower bound wins.
    pub fn clamp_with_margin(&self, pos: Vec2, half_size: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(pos.x, half_size.x, self.width - half_size.x),
            clamp_axis(pos.y, half_size.y, self.height - half_size.y),
        )
    }

    /// Whether `pos` lies in `[0, width] × [0, height]`. Edges count as inside.
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }
}

impl Default for ScreenExtents {
    fn default() -> Self {
        Self::new(640.0, 480.0)
    }
}

// f32::clamp panics when min > max; apply the bounds one at a time instead.
fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    let value = if value > max { max } else { value };
    if value < min { min } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_left_edge() {
        let screen = ScreenExtents::new(640.0, 480.0);
        let clamped = screen.clamp_with_margin(Vec2::new(-12.0, 200.0), Vec2::splat(8.0));
        assert_eq!(clamped, Vec2::new(8.0, 200.0));
    }

    #[test]
    fn test_clamp_far_edges() {
        let screen = ScreenExtents::new(640.0, 480.0);
        let clamped = screen.clamp_with_margin(Vec2::new(1000.0, 1000.0), Vec2::splat(8.0));
        assert_eq!(clamped, Vec2::new(632.0, 472.0));
    }

    #[test]
    fn test_clamp_inside_unchanged() {
        let screen = ScreenExtents::new(640.0, 480.0);
        let pos = Vec2::new(320.0, 240.0);
        assert_eq!(screen.clamp_with_margin(pos, Vec2::splat(8.0)), pos);
    }

    #[test]
    fn test_clamp_oversized_sprite_does_not_panic() {
        let screen = ScreenExtents::new(10.0, 10.0);
        let clamped = screen.clamp_with_margin(Vec2::new(3.0, 3.0), Vec2::splat(20.0));
        assert_eq!(clamped, Vec2::splat(20.0));
    }

    #[test]
    fn test_contains_edges_inclusive() {
        let screen = ScreenExtents::new(640.0, 480.0);
        assert!(screen.contains(Vec2::new(0.0, 0.0)));
        assert!(screen.contains(Vec2::new(640.0, 480.0)));
        assert!(!screen.contains(Vec2::new(300.0, -5.0)));
        assert!(!screen.contains(Vec2::new(640.1, 10.0)));
    }
}
