//! Simulation State
//!
//! Everything the update step mutates, gathered in one context object.
//! Update is a pure state advance: no drawing, no I/O.

use std::time::Duration;

use glam::Vec2;
use tracing::{debug, trace};

use super::player::Player;
use super::projectile::Projectile;
use crate::config::GameConfig;
use crate::input::{GameAction, InputState};
use crate::world::ScreenExtents;

/// What changed during one update, for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// A projectile was launched this tick.
    pub spawned: bool,
    /// The live projectile left the screen this tick.
    pub culled: bool,
}

/// Game state advanced by [`SimulationContext::update`].
#[derive(Clone, Debug)]
pub struct SimulationContext {
    pub screen: ScreenExtents,
    pub player: Player,
    pub projectile: Projectile,
    /// Velocity given to newly fired projectiles (px/ms)
    pub launch_velocity: Vec2,
    sim_time: Duration,
    ticks: u64,
}

impl SimulationContext {
    pub fn new(config: &GameConfig, screen: ScreenExtents) -> Self {
        Self {
            screen,
            player: Player::from_config(&config.player),
            projectile: Projectile::from_config(&config.projectile),
            launch_velocity: config.projectile.velocity,
            sim_time: Duration::ZERO,
            ticks: 0,
        }
    }

    /// Total simulated time across all updates.
    pub fn sim_time(&self) -> Duration {
        self.sim_time
    }

    /// Number of updates run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance the world by `elapsed` using the currently held keys.
    ///
    /// Order: move and clamp the player, move the live projectile, drop it if
    /// it left the screen, then fire if requested and the slot is free. A
    /// projectile fired this tick is not moved until the next one.
    pub fn update(&mut self, input: &InputState, elapsed: Duration) -> TickOutcome {
        let elapsed_ms = millis_f32(elapsed);
        let mut outcome = TickOutcome::default();

        self.player
            .step(movement_direction(input), elapsed_ms, &self.screen);

        self.projectile.integrate(elapsed_ms);
        if self.projectile.cull(&self.screen) {
            debug!(position = ?self.projectile.position, "Projectile left the screen");
            outcome.culled = true;
        }

        if input.is_active(GameAction::Fire)
            && self
                .projectile
                .spawn(self.player.position, self.launch_velocity)
        {
            debug!(position = ?self.player.position, "Projectile fired");
            outcome.spawned = true;
        }

        self.sim_time += elapsed;
        self.ticks += 1;

        trace!(
            tick = self.ticks,
            elapsed_ms,
            player = ?self.player.position,
            projectile = self.projectile.exists,
            "Update"
        );

        outcome
    }
}

/// Net direction from the four movement actions. Opposite keys cancel.
fn movement_direction(input: &InputState) -> Vec2 {
    let axis = |negative: GameAction, positive: GameAction| {
        (input.is_active(positive) as i32 - input.is_active(negative) as i32) as f32
    };
    Vec2::new(
        axis(GameAction::MoveLeft, GameAction::MoveRight),
        axis(GameAction::MoveUp, GameAction::MoveDown),
    )
}

/// Duration in milliseconds, exact for whole-microsecond values.
fn millis_f32(elapsed: Duration) -> f32 {
    elapsed.as_micros() as f32 / 1000.0
}
