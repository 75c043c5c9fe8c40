//! World Module
//!
//! Screen-space extents and boundary helpers shared by the game entities.

pub mod bounds;

pub use bounds::ScreenExtents;
