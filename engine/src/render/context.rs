//! Render Context
//!
//! Owns every GPU-side resource of the game: device and surface, the
//! sprite batch, and the sprites built from the loaded textures. Texture
//! loading happens once, here, at startup.

use std::path::Path;
use std::sync::Arc;

use image::RgbaImage;
use tracing::{debug, error, info, warn};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::config::{GameConfig, RenderConfig};
use crate::error::{GpuError, RenderError};
use crate::game::SimulationContext;
use crate::world::ScreenExtents;

use super::canvas::{SpriteCanvas, render_frame};
use super::gpu_context::{GpuContext, GpuContextConfig};
use super::shader_loader::{SPRITE_SHADER, ShaderSource, load_shader_file};
use super::sprite::{Sprite, SpriteSet, SpriteTransform};
use super::sprite_batch::SpriteBatch;
use super::texture::{load_rgba, placeholder_image};

pub struct RenderContext {
    pub gpu: GpuContext,
    pub batch: SpriteBatch,
    pub sprites: SpriteSet,
    pub background: [f32; 4],
}

impl RenderContext {
    /// Bring up the GPU for `window` and load the sprite textures.
    ///
    /// Only device/surface failures are errors. A texture that fails to load
    /// is logged and replaced by a placeholder.
    pub fn new(
        window: Arc<Window>,
        config: &GameConfig,
        screen: &ScreenExtents,
    ) -> Result<Self, GpuError> {
        let gpu = GpuContext::new(window, GpuContextConfig::from(&config.render))?;
        let shader = sprite_shader(&config.render);
        let mut batch = SpriteBatch::new(&gpu, screen, &shader);
        let sprites = load_sprites(&gpu, &mut batch, config);

        Ok(Self {
            gpu,
            batch,
            sprites,
            background: config.render.background,
        })
    }

    /// Draw the current state and present it.
    pub fn render(&mut self, sim: &SimulationContext) -> Result<(), RenderError> {
        let sprites = self.sprites;
        let background = self.background;
        render_frame(sim, &sprites, background, self)
    }

    /// Match the surface to the window's current client size. Sprite
    /// positions stay in the fixed screen extents; only the swap chain changes.
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        if self.gpu.dimensions() == (size.width, size.height) {
            return;
        }
        if self.gpu.resize(size.width, size.height) {
            debug!(width = size.width, height = size.height, "Surface resized");
        }
    }

    /// Reconfigure the surface after it was lost or became outdated, using
    /// the window's current size.
    pub fn recover_surface(&mut self, size: PhysicalSize<u32>) {
        warn!(width = size.width, height = size.height, "Surface lost, reconfiguring");
        self.gpu.resize(size.width, size.height);
    }
}

impl SpriteCanvas for RenderContext {
    fn clear(&mut self, color: [f32; 4]) {
        self.batch.begin(color);
    }

    fn draw_sprite(&mut self, sprite: &Sprite, transform: &SpriteTransform) {
        self.batch.push(sprite, transform);
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.batch.flush(&self.gpu)
    }
}

/// Load both textures and build the sprites that reference them.
pub fn load_sprites(gpu: &GpuContext, batch: &mut SpriteBatch, config: &GameConfig) -> SpriteSet {
    let brick = texture_or_placeholder(&config.player.texture);
    let ball = texture_or_placeholder(&config.projectile.texture);

    let player = Sprite::new(batch.add_texture(gpu, "brick", &brick));
    let projectile = Sprite::new(batch.add_texture(gpu, "ball", &ball));

    info!(
        brick = %config.player.texture.display(),
        ball = %config.projectile.texture.display(),
        "Textures loaded"
    );

    SpriteSet { player, projectile }
}

fn texture_or_placeholder(path: &Path) -> RgbaImage {
    match load_rgba(path) {
        Ok(image) => image,
        Err(err) => {
            error!(%err, "Using placeholder texture");
            placeholder_image()
        }
    }
}

fn sprite_shader(config: &RenderConfig) -> ShaderSource {
    let Some(path) = &config.shader_path else {
        return ShaderSource::Embedded(SPRITE_SHADER);
    };

    match load_shader_file(path) {
        Ok(source) => {
            info!(path = %path.display(), "Loaded sprite shader from disk");
            source
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "Falling back to built-in sprite shader");
            ShaderSource::Embedded(SPRITE_SHADER)
        }
    }
}
