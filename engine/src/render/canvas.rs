//! Render Step
//!
//! [`SpriteCanvas`] is everything the render step needs from the graphics
//! device. [`render_frame`] draws the current game state onto any canvas
//! without touching the state.

use crate::error::RenderError;
use crate::game::SimulationContext;

use super::sprite::{Sprite, SpriteSet, SpriteTransform};

/// Minimal drawing surface for sprites.
pub trait SpriteCanvas {
    /// Start a frame cleared to `color` (RGBA).
    fn clear(&mut self, color: [f32; 4]);

    /// Queue a textured, positioned, scaled quad.
    fn draw_sprite(&mut self, sprite: &Sprite, transform: &SpriteTransform);

    /// Submit the queued sprites and show the frame.
    fn present(&mut self) -> Result<(), RenderError>;
}

/// Draw the player and, if live, the projectile, then present.
pub fn render_frame<C: SpriteCanvas + ?Sized>(
    sim: &SimulationContext,
    sprites: &SpriteSet,
    background: [f32; 4],
    canvas: &mut C,
) -> Result<(), RenderError> {
    canvas.clear(background);

    let player = SpriteTransform::for_entity(sim.player.position, sim.player.size, &sim.screen);
    canvas.draw_sprite(&sprites.player, &player);

    if sim.projectile.exists {
        let ball =
            SpriteTransform::for_entity(sim.projectile.position, sim.projectile.size, &sim.screen);
        canvas.draw_sprite(&sprites.projectile, &ball);
    }

    canvas.present()
}
