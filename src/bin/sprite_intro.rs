//! Sprite Intro
//!
//! Run with: `cargo run --bin sprite_intro`
//!
//! Controls:
//! - WASD: Move the brick
//! - Space: Fire a ball (one at a time)
//! - ESC: Exit
//!
//! Set `SPRITE_INTRO_CONFIG` to a JSON file to override defaults,
//! `RUST_LOG` to change log verbosity and `LOG_FORMAT=json` for JSON logs.

use std::process::ExitCode;

use sprite_intro_engine::config::GameConfig;
use sprite_intro_engine::logging::init_tracing;
use sprite_intro_engine::{Shutdown, run};
use tracing::{error, info};

fn main() -> ExitCode {
    init_tracing();

    let config = GameConfig::from_env_or_default();
    info!(title = %config.window.title, "Starting");

    match run(config) {
        Ok(Shutdown::Normal) => ExitCode::SUCCESS,
        Ok(reason) => {
            error!(?reason, "Exited abnormally");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!(%err, "Event loop failed");
            ExitCode::FAILURE
        }
    }
}
