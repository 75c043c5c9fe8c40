//! Setup Errors
//!
//! One error enum per setup concern. Only startup and frame presentation
//! can fail; the simulation itself has no error paths.

use std::path::PathBuf;

use snafu::Snafu;

/// Failures while bringing up the GPU device and surface.
#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)), visibility(pub(crate)))]
pub enum GpuError {
    #[snafu(display("Unable to create surface: {source}"))]
    CreateSurface { source: wgpu::CreateSurfaceError },

    #[snafu(display("No compatible GPU adapter found: {source}"))]
    RequestAdapter { source: wgpu::RequestAdapterError },

    #[snafu(display("Unable to get device: {source}"))]
    RequestDevice { source: wgpu::RequestDeviceError },

    #[snafu(display("Surface reports no supported texture formats"))]
    NoSurfaceFormat,
}

/// Failures while loading a sprite texture from disk.
#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)), visibility(pub(crate)))]
pub enum TextureError {
    #[snafu(display("Failed to load texture file {}: {source}", path.display()))]
    Open {
        path: PathBuf,
        source: image::ImageError,
    },

    #[snafu(display("Texture {} has zero size", path.display()))]
    Empty { path: PathBuf },
}

/// Failures while reading a configuration file.
#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)), visibility(pub(crate)))]
pub enum ConfigError {
    #[snafu(display("Unable to read config {}: {source}", path.display()))]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Invalid config {}: {source}", path.display()))]
    ParseFile {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[snafu(display("Invalid config: {source}"))]
    Parse { source: serde_json::Error },
}

/// Failures while creating the game window.
#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)), visibility(pub(crate)))]
pub enum WindowError {
    #[snafu(display("CreateWindow failed: {source}"))]
    CreateWindow { source: winit::error::OsError },

    #[snafu(display("Failed to load window icon {}: {source}", path.display()))]
    LoadIcon {
        path: PathBuf,
        source: image::ImageError,
    },

    #[snafu(display("Window icon {} is not usable: {source}", path.display()))]
    InvalidIcon {
        path: PathBuf,
        source: winit::window::BadIcon,
    },
}

/// Failures while presenting a frame.
#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)), visibility(pub(crate)))]
pub enum RenderError {
    #[snafu(display("Unable to acquire surface texture: {source}"))]
    AcquireFrame { source: wgpu::SurfaceError },
}

impl RenderError {
    /// The surface needs reconfiguring before the next frame.
    pub fn is_surface_stale(&self) -> bool {
        matches!(
            self,
            RenderError::AcquireFrame {
                source: wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated
            }
        )
    }

    /// The device ran out of memory; rendering cannot continue.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RenderError::AcquireFrame {
                source: wgpu::SurfaceError::OutOfMemory
            }
        )
    }
}
