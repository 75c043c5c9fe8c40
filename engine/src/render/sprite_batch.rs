//! Sprite Batch
//!
//! Collects sprites between `clear` and `present`, then draws them as
//! instanced quads in one render pass. Sprites are grouped by texture so
//! each texture is bound once per frame.

use snafu::ResultExt;
use tracing::warn;

use crate::error::{AcquireFrameErr, RenderError};
use crate::world::ScreenExtents;

use super::gpu_context::GpuContext;
use super::shader_loader::{ShaderSource, create_shader_module};
use super::sprite::{Sprite, SpriteTransform, TextureId, screen_projection};
use super::texture::{SpriteTexture, texture_bind_group_layout};

/// Maximum sprites drawn per frame; extra sprites are dropped with a warning.
pub const MAX_SPRITES: usize = 256;

/// Source-over alpha blending for transparent sprite edges.
pub const SPRITE_BLEND: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::Zero,
        operation: wgpu::BlendOperation::Add,
    },
};

/// Corner of the unit quad.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

/// Unit quad centred on the origin. Render space is y-up, so the top edge
/// (y = +0.5) samples v = 0.
pub const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { position: [-0.5, -0.5], uv: [0.0, 1.0] },
    QuadVertex { position: [0.5, -0.5], uv: [1.0, 1.0] },
    QuadVertex { position: [0.5, 0.5], uv: [1.0, 0.0] },
    QuadVertex { position: [-0.5, 0.5], uv: [0.0, 0.0] },
];

pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Per-sprite instance data.
///
/// Layout (96 bytes):
/// - model:   mat4x4<f32> (64 bytes) - scale * translate world matrix
/// - uv_rect: vec4<f32> (16 bytes) - UV offset (xy) and extent (zw)
/// - color:   vec4<f32> (16 bytes) - colour modulation
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub model: [[f32; 4]; 4],
    pub uv_rect: [f32; 4],
    pub color: [f32; 4],
}

static_assertions::assert_eq_size!(SpriteInstance, [u8; 96]);
static_assertions::assert_eq_size!(QuadVertex, [u8; 16]);

impl SpriteInstance {
    pub fn new(sprite: &Sprite, transform: &SpriteTransform) -> Self {
        Self {
            model: transform.matrix().to_cols_array_2d(),
            uv_rect: sprite.uv_rect(),
            color: sprite.color,
        }
    }

    const ATTRIBUTES: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4
    ];

    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

impl QuadVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x2
    ];

    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Uniforms for bind group 0.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteUniforms {
    pub view_proj: [[f32; 4]; 4],
}

impl SpriteUniforms {
    pub fn for_screen(screen: &ScreenExtents) -> Self {
        Self {
            view_proj: screen_projection(screen).to_cols_array_2d(),
        }
    }
}

/// A sprite waiting for `present`.
#[derive(Clone, Copy, Debug)]
struct PendingSprite {
    texture: TextureId,
    instance: SpriteInstance,
}

/// Contiguous run of instances sharing one texture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawRun {
    pub texture: TextureId,
    pub instances: std::ops::Range<u32>,
}

/// Group instances (already sorted by texture) into draw calls.
pub fn draw_runs(textures: &[TextureId]) -> Vec<DrawRun> {
    let mut runs: Vec<DrawRun> = Vec::new();
    for (i, &texture) in textures.iter().enumerate() {
        let i = i as u32;
        match runs.last_mut() {
            Some(run) if run.texture == texture => run.instances.end = i + 1,
            _ => runs.push(DrawRun {
                texture,
                instances: i..i + 1,
            }),
        }
    }
    runs
}

/// Instanced sprite renderer.
pub struct SpriteBatch {
    pipeline: wgpu::RenderPipeline,
    _uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    texture_layout: wgpu::BindGroupLayout,
    textures: Vec<SpriteTexture>,
    quad_vertices: wgpu::Buffer,
    quad_indices: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    pending: Vec<PendingSprite>,
    clear_color: wgpu::Color,
}

impl SpriteBatch {
    pub fn new(gpu: &GpuContext, screen: &ScreenExtents, shader: &ShaderSource) -> Self {
        let device = &gpu.device;
        let shader = create_shader_module(device, "Sprite Shader", shader);

        let uniform_buffer =
            gpu.create_uniform_buffer("Sprite Uniform Buffer", &SpriteUniforms::for_screen(screen));

        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Sprite Uniform Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Sprite Uniform Bind Group"),
            layout: &uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let texture_layout = texture_bind_group_layout(device);

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sprite Pipeline Layout"),
            bind_group_layouts: &[&uniform_layout, &texture_layout],
            push_constant_ranges: &[],
        });

        // No depth testing, alpha blending, draw order = submission order
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sprite Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[QuadVertex::buffer_layout(), SpriteInstance::buffer_layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: gpu.format(),
                    blend: Some(SPRITE_BLEND),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let quad_vertices = gpu.create_vertex_buffer("Sprite Quad Vertices", &QUAD_VERTICES);
        let quad_indices = gpu.create_index_buffer("Sprite Quad Indices", &QUAD_INDICES);
        let instance_buffer = gpu.create_dynamic_vertex_buffer(
            "Sprite Instance Buffer",
            (MAX_SPRITES * std::mem::size_of::<SpriteInstance>()) as u64,
        );

        Self {
            pipeline,
            _uniform_buffer: uniform_buffer,
            uniform_bind_group,
            texture_layout,
            textures: Vec::new(),
            quad_vertices,
            quad_indices,
            instance_buffer,
            pending: Vec::with_capacity(MAX_SPRITES),
            clear_color: wgpu::Color::BLACK,
        }
    }

    /// Upload a texture and return the id sprites use to reference it.
    pub fn add_texture(&mut self, gpu: &GpuContext, label: &str, image: &image::RgbaImage) -> TextureId {
        let texture =
            SpriteTexture::from_image(&gpu.device, &gpu.queue, &self.texture_layout, label, image);
        self.textures.push(texture);
        TextureId(self.textures.len() as u32 - 1)
    }

    pub fn texture(&self, id: TextureId) -> Option<&SpriteTexture> {
        self.textures.get(id.0 as usize)
    }

    /// Begin a frame: forget queued sprites and set the clear colour.
    pub fn begin(&mut self, color: [f32; 4]) {
        self.pending.clear();
        self.clear_color = wgpu::Color {
            r: f64::from(color[0]),
            g: f64::from(color[1]),
            b: f64::from(color[2]),
            a: f64::from(color[3]),
        };
    }

    pub fn push(&mut self, sprite: &Sprite, transform: &SpriteTransform) {
        if self.pending.len() >= MAX_SPRITES {
            warn!(max = MAX_SPRITES, "Sprite batch full, dropping sprite");
            return;
        }
        if self.texture(sprite.texture).is_none() {
            warn!(texture = sprite.texture.0, "Sprite references unknown texture");
            return;
        }
        self.pending.push(PendingSprite {
            texture: sprite.texture,
            instance: SpriteInstance::new(sprite, transform),
        });
    }

    /// Draw everything queued since `begin` and present the frame.
    pub fn flush(&mut self, gpu: &GpuContext) -> Result<(), RenderError> {
        let output = gpu.get_current_texture().context(AcquireFrameErr)?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Stable sort keeps submission order within a texture
        self.pending.sort_by_key(|p| p.texture);
        let instances: Vec<SpriteInstance> = self.pending.iter().map(|p| p.instance).collect();
        let textures: Vec<TextureId> = self.pending.iter().map(|p| p.texture).collect();
        if !instances.is_empty() {
            gpu.write_buffer(&self.instance_buffer, &instances);
        }

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Sprite Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Sprite Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.quad_vertices.slice(..));
            render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            render_pass.set_index_buffer(self.quad_indices.slice(..), wgpu::IndexFormat::Uint16);

            for run in draw_runs(&textures) {
                let Some(texture) = self.texture(run.texture) else {
                    continue;
                };
                render_pass.set_bind_group(1, &texture.bind_group, &[]);
                render_pass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, run.instances);
            }
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        self.pending.clear();
        Ok(())
    }
}
