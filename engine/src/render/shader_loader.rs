//! Shader Loading Utilities
//!
//! WGSL sources for the render pipeline, either embedded at compile time
//! or read from disk at runtime.

use std::path::Path;

/// The sprite shader, embedded at compile time.
pub const SPRITE_SHADER: &str = include_str!("../../../shaders/sprite.wgsl");

/// Shader source that can be either embedded at compile time or loaded at runtime.
pub enum ShaderSource {
    /// Embedded shader source (no file I/O at runtime)
    Embedded(&'static str),
    /// Runtime-loaded shader source
    Runtime(String),
}

impl ShaderSource {
    pub fn as_str(&self) -> &str {
        match self {
            ShaderSource::Embedded(s) => s,
            ShaderSource::Runtime(s) => s.as_str(),
        }
    }
}

/// Load a shader from the filesystem at runtime.
pub fn load_shader_file(path: impl AsRef<Path>) -> Result<ShaderSource, std::io::Error> {
    let source = std::fs::read_to_string(path)?;
    Ok(ShaderSource::Runtime(source))
}

/// Create a wgpu shader module from the given source.
pub fn create_shader_module(
    device: &wgpu::Device,
    label: &str,
    source: &ShaderSource,
) -> wgpu::ShaderModule {
    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.as_str().into()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_source_embedded() {
        let source = ShaderSource::Embedded(SPRITE_SHADER);
        assert!(source.as_str().contains("fn vs_main"));
        assert!(source.as_str().contains("fn fs_main"));
    }

    #[test]
    fn test_shader_source_runtime() {
        let source = ShaderSource::Runtime("fn main() {}".to_string());
        assert_eq!(source.as_str(), "fn main() {}");
    }

    #[test]
    fn test_load_missing_shader_file() {
        assert!(load_shader_file("shaders/does_not_exist.wgsl").is_err());
    }
}
