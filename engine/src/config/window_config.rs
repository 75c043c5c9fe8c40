//! Window, Timing and Render Configuration

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// OS window settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Client-area width in pixels
    pub width: u32,
    /// Client-area height in pixels
    pub height: u32,
    /// Image used as the window icon; `None` keeps the platform default
    pub icon_path: Option<PathBuf>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "00 - Intro".to_string(),
            width: 640,
            height: 480,
            icon_path: Some(PathBuf::from("assets/brick.png")),
        }
    }
}

/// Frame pacing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Upper bound on update/render ticks per second
    pub max_frame_rate: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { max_frame_rate: 100 }
    }
}

impl TimingConfig {
    /// Minimum wall-clock time between ticks: `1000 / max_frame_rate` whole
    /// milliseconds. A rate of 0 is treated as 1.
    pub fn tick_interval(&self) -> Duration {
        let rate = u64::from(self.max_frame_rate.max(1));
        Duration::from_millis(1000 / rate)
    }
}

/// GPU and presentation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Clear colour, RGBA in 0.0..=1.0
    pub background: [f32; 4],
    /// Use VSync (true = capped to monitor refresh)
    pub vsync: bool,
    /// Prefer the high-performance GPU
    pub high_performance: bool,
    /// Show the player position in the window title every tick
    pub debug_title: bool,
    /// Load the sprite shader from this file instead of the built-in copy
    pub shader_path: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: [0.2, 0.2, 0.2, 0.2],
            vsync: false,
            high_performance: true,
            debug_title: false,
            shader_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tick_interval() {
        assert_eq!(TimingConfig::default().tick_interval(), Duration::from_millis(10));
    }

    #[test]
    fn test_tick_interval_truncates() {
        let timing = TimingConfig { max_frame_rate: 60 };
        assert_eq!(timing.tick_interval(), Duration::from_millis(16));
    }

    #[test]
    fn test_zero_frame_rate() {
        let timing = TimingConfig { max_frame_rate: 0 };
        assert_eq!(timing.tick_interval(), Duration::from_millis(1000));
    }
}
