//! Input Module
//!
//! Platform-agnostic keyboard handling: key codes, the held-key table,
//! the event queue drained by the frame loop, and action bindings.
//!
//! # Example
//!
//! ```rust
//! use sprite_intro_engine::input::{GameAction, InputEvent, InputState, KeyCode};
//!
//! let mut input = InputState::new();
//! input.queue.push(InputEvent::Key { code: KeyCode::Space, pressed: true });
//! let quit = input.pump();
//! assert!(!quit);
//! assert!(input.is_active(GameAction::Fire));
//! ```

pub mod bindings;
pub mod events;
pub mod keyboard;

pub use bindings::{BindingsConfig, GameAction, KeyBindings};
pub use events::{InputEvent, InputQueue};
pub use keyboard::{KeyCode, KeyStateTable};

/// Queue, key table and bindings bundled together.
#[derive(Debug, Default)]
pub struct InputState {
    pub queue: InputQueue,
    pub keys: KeyStateTable,
    pub bindings: KeyBindings,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Self::default()
        }
    }

    /// Queue a key transition coming from the window.
    ///
    /// A press of the key bound to [`GameAction::Quit`] also queues a quit.
    pub fn key_event(&mut self, code: KeyCode, pressed: bool) {
        self.queue.push(InputEvent::Key { code, pressed });
        if pressed && self.bindings.action_for(code) == Some(GameAction::Quit) {
            self.queue.push(InputEvent::Quit);
        }
    }

    /// Apply all queued events. Returns `true` if quit was requested.
    pub fn pump(&mut self) -> bool {
        self.queue.drain_into(&mut self.keys)
    }

    pub fn is_active(&self, action: GameAction) -> bool {
        self.bindings.is_active(action, &self.keys)
    }
}
