//! Render Module
//!
//! wgpu sprite rendering: GPU context, texture loading, an instanced sprite
//! batch, and the render step that draws the game state through the
//! [`SpriteCanvas`] trait.

pub mod canvas;
pub mod context;
pub mod gpu_context;
pub mod shader_loader;
pub mod sprite;
pub mod sprite_batch;
pub mod texture;

pub use canvas::{SpriteCanvas, render_frame};
pub use context::{RenderContext, load_sprites};
pub use gpu_context::{GpuContext, GpuContextConfig};
pub use shader_loader::{SPRITE_SHADER, ShaderSource, create_shader_module, load_shader_file};
pub use sprite::{Sprite, SpriteSet, SpriteTransform, TextureId, screen_projection};
pub use sprite_batch::{MAX_SPRITES, SPRITE_BLEND, SpriteBatch, SpriteInstance, SpriteUniforms};
pub use texture::{SpriteTexture, load_rgba, placeholder_image};
