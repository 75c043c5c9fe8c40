//! Game Module
//!
//! The two entities and the simulation context that advances them.

pub mod player;
pub mod projectile;
pub mod state;

pub use player::Player;
pub use projectile::Projectile;
pub use state::{SimulationContext, TickOutcome};
