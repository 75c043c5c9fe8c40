//! Sprite Descriptors and Transforms
//!
//! A [`Sprite`] says which texture to draw and how to tint it; a
//! [`SpriteTransform`] says where and how large. The renderer draws a unit
//! quad centred on the origin, so the transform is scale-then-translate.

use glam::{Mat4, Vec2, Vec3};

use crate::world::ScreenExtents;

/// Depth the sprites are drawn at inside the orthographic volume.
pub const SPRITE_DEPTH: f32 = 0.1;

/// Index of a texture owned by the sprite batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

/// What to draw: a texture region and a colour modulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub texture: TextureId,
    /// Top-left corner in UV space
    pub tex_coord: Vec2,
    /// Extent in UV space
    pub tex_size: Vec2,
    /// RGBA multiplier; white draws the texture unchanged
    pub color: [f32; 4],
}

impl Sprite {
    /// The whole texture, untinted.
    pub fn new(texture: TextureId) -> Self {
        Self {
            texture,
            tex_coord: Vec2::ZERO,
            tex_size: Vec2::ONE,
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }

    /// UV rectangle packed as `[u, v, width, height]`.
    pub fn uv_rect(&self) -> [f32; 4] {
        [
            self.tex_coord.x,
            self.tex_coord.y,
            self.tex_size.x,
            self.tex_size.y,
        ]
    }
}

/// The two sprites the game draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteSet {
    pub player: Sprite,
    pub projectile: Sprite,
}

/// Placement of a sprite in render space (y-up, origin bottom-left).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteTransform {
    pub translation: Vec3,
    pub scale: Vec2,
}

impl SpriteTransform {
    /// Transform for an entity centred at `center` in screen coordinates
    /// (y-down). The y axis is flipped to `height - y` for render space.
    pub fn for_entity(center: Vec2, size: Vec2, screen: &ScreenExtents) -> Self {
        Self {
            translation: Vec3::new(center.x, screen.height - center.y, SPRITE_DEPTH),
            scale: size,
        }
    }

    /// World matrix: scale the unit quad, then translate it.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
            * Mat4::from_scale(Vec3::new(self.scale.x, self.scale.y, 1.0))
    }
}

/// Orthographic projection covering the screen, y-up with the origin at the
/// bottom-left corner.
pub fn screen_projection(screen: &ScreenExtents) -> Mat4 {
    Mat4::orthographic_lh(0.0, screen.width, 0.0, screen.height, 0.0, 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_full_texture_sprite() {
        let sprite = Sprite::new(TextureId(3));
        assert_eq!(sprite.uv_rect(), [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(sprite.color, [1.0; 4]);
    }

    #[test]
    fn test_transform_flips_y() {
        let screen = ScreenExtents::new(640.0, 480.0);
        let t = SpriteTransform::for_entity(Vec2::new(8.0, 200.0), Vec2::splat(16.0), &screen);
        assert_eq!(t.translation, Vec3::new(8.0, 280.0, SPRITE_DEPTH));
        assert_eq!(t.scale, Vec2::splat(16.0));
    }

    #[test]
    fn test_matrix_scales_then_translates() {
        let t = SpriteTransform {
            translation: Vec3::new(100.0, 50.0, SPRITE_DEPTH),
            scale: Vec2::new(16.0, 8.0),
        };
        let corner = t.matrix() * Vec4::new(0.5, 0.5, 0.0, 1.0);
        assert_eq!(corner, Vec4::new(108.0, 54.0, SPRITE_DEPTH, 1.0));
    }

    #[test]
    fn test_projection_maps_screen_corners() {
        let screen = ScreenExtents::new(640.0, 480.0);
        let proj = screen_projection(&screen);

        let bottom_left = proj * Vec4::new(0.0, 0.0, SPRITE_DEPTH, 1.0);
        let top_right = proj * Vec4::new(640.0, 480.0, SPRITE_DEPTH, 1.0);

        assert!((bottom_left.x + 1.0).abs() < 1e-5);
        assert!((bottom_left.y + 1.0).abs() < 1e-5);
        assert!((top_right.x - 1.0).abs() < 1e-5);
        assert!((top_right.y - 1.0).abs() < 1e-5);
        assert!(bottom_left.z > 0.0 && bottom_left.z < 1.0);
    }
}
