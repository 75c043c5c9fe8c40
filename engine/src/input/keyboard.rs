//! Keyboard Input Module
//!
//! Generic key codes and the held-key table read by the simulation.
//! Decoupled from winit; `from_winit` is the only place the two meet.

use serde::{Deserialize, Serialize};

/// Key codes the game reacts to, independent of the windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    Space,
    Escape,
    Enter,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl KeyCode {
    /// Number of distinct key codes; size of [`KeyStateTable`].
    pub const COUNT: usize = 11;

    /// Slot of this key in [`KeyStateTable`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Translate a winit physical key code. Keys the game doesn't use map to `None`.
    pub fn from_winit(key: winit::keyboard::KeyCode) -> Option<Self> {
        use winit::keyboard::KeyCode as Wk;

        match key {
            Wk::KeyW => Some(KeyCode::W),
            Wk::KeyA => Some(KeyCode::A),
            Wk::KeyS => Some(KeyCode::S),
            Wk::KeyD => Some(KeyCode::D),
            Wk::Space => Some(KeyCode::Space),
            Wk::Escape => Some(KeyCode::Escape),
            Wk::Enter | Wk::NumpadEnter => Some(KeyCode::Enter),
            Wk::ArrowUp => Some(KeyCode::ArrowUp),
            Wk::ArrowDown => Some(KeyCode::ArrowDown),
            Wk::ArrowLeft => Some(KeyCode::ArrowLeft),
            Wk::ArrowRight => Some(KeyCode::ArrowRight),
            _ => None,
        }
    }
}

/// Held/released state for every [`KeyCode`].
///
/// Written only when the input queue is drained, read by the update step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyStateTable {
    held: [bool; KeyCode::COUNT],
}

impl KeyStateTable {
    /// Create a table with every key released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down (`true`) or key-up (`false`).
    pub fn set(&mut self, key: KeyCode, pressed: bool) {
        self.held[key.index()] = pressed;
    }

    /// Whether the key is currently held.
    #[inline]
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held[key.index()]
    }

    /// Release every key.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
