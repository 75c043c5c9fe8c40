//! Sprite Textures
//!
//! Decodes image files with the `image` crate and uploads them as 2D
//! textures bound together with their sampler.

use std::path::Path;

use image::{Rgba, RgbaImage};
use snafu::{ResultExt, ensure};

use crate::error::{EmptyErr, OpenErr, TextureError};

/// Colour used for textures that failed to load.
pub const PLACEHOLDER_COLOR: [u8; 4] = [255, 0, 255, 255];

/// Decode an image file to tightly packed RGBA8.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, TextureError> {
    let image = image::open(path).context(OpenErr { path })?.to_rgba8();
    ensure!(image.width() > 0 && image.height() > 0, EmptyErr { path });
    Ok(image)
}

/// 1x1 stand-in for a texture that couldn't be loaded.
pub fn placeholder_image() -> RgbaImage {
    RgbaImage::from_pixel(1, 1, Rgba(PLACEHOLDER_COLOR))
}

/// Layout of bind group 1 in the sprite shader: texture + sampler.
pub fn texture_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Sprite Texture Bind Group Layout"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}

/// A texture uploaded to the GPU, ready to bind for drawing.
pub struct SpriteTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub bind_group: wgpu::BindGroup,
    pub width: u32,
    pub height: u32,
}

impl SpriteTexture {
    /// Upload `image` and build its bind group against `layout`.
    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        label: &str,
        image: &RgbaImage,
    ) -> Self {
        let (width, height) = image.dimensions();
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            image,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(&format!("{label}_sampler")),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            ..Default::default()
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label}_bind_group")),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        Self {
            texture,
            view,
            sampler,
            bind_group,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_rgba(Path::new("assets/no_such_texture.png")).unwrap_err();
        assert!(matches!(err, TextureError::Open { .. }));
        assert!(err.to_string().contains("no_such_texture.png"));
    }

    #[test]
    fn test_decodes_written_png() {
        let path = std::env::temp_dir().join(format!("sprite_intro_tex_{}.png", std::process::id()));
        let source = RgbaImage::from_pixel(4, 2, Rgba([10, 20, 30, 255]));
        source.save(&path).unwrap();

        let loaded = load_rgba(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.dimensions(), (4, 2));
        assert_eq!(loaded.get_pixel(3, 1), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_placeholder_is_single_pixel() {
        let image = placeholder_image();
        assert_eq!(image.dimensions(), (1, 1));
        assert_eq!(image.get_pixel(0, 0).0, PLACEHOLDER_COLOR);
    }
}
