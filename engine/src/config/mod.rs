//! Config Module
//!
//! Centralized configuration for the window, pacing, entities and key
//! bindings. Every section has `#[serde(default)]`, so a config file only
//! needs the values it changes.
//!
//! The file is JSON. Its path comes from `SPRITE_INTRO_CONFIG`; without it
//! the built-in defaults are used.

pub mod entity_config;
pub mod window_config;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use tracing::{info, warn};

use crate::error::{ConfigError, ParseErr, ParseFileErr, ReadErr};
use crate::input::BindingsConfig;

pub use entity_config::{PlayerConfig, ProjectileConfig};
pub use window_config::{RenderConfig, TimingConfig, WindowConfig};

/// Environment variable naming the JSON config file.
pub const CONFIG_ENV_VAR: &str = "SPRITE_INTRO_CONFIG";

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub timing: TimingConfig,
    pub player: PlayerConfig,
    pub projectile: ProjectileConfig,
    pub render: RenderConfig,
    pub bindings: BindingsConfig,
}

impl GameConfig {
    /// Parse a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).context(ParseErr)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).context(ReadErr { path })?;
        serde_json::from_str(&text).context(ParseFileErr { path })
    }

    /// Load from `SPRITE_INTRO_CONFIG` if set, falling back to defaults
    /// (with a warning) when the file is missing or invalid.
    pub fn from_env_or_default() -> Self {
        let path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::load_or_default(path.as_deref())
    }

    /// Load `path` if given, otherwise (or on failure) use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => {
                info!(path = %path.display(), "Loaded config");
                config
            }
            Err(err) => {
                warn!(%err, "Falling back to default config");
                Self::default()
            }
        }
    }
}
