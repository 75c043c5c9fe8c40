//! Input Event Queue
//!
//! Window callbacks push events here; the frame loop drains them once per
//! iteration, before the update step runs.

use std::collections::VecDeque;

use super::keyboard::{KeyCode, KeyStateTable};

/// An input event the game cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key went down (`pressed == true`) or up.
    Key { code: KeyCode, pressed: bool },
    /// Every key should be treated as released (e.g. the window lost focus).
    ReleaseAll,
    /// The window was closed or quit was requested.
    Quit,
}

/// FIFO of input events waiting to be applied.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Apply every pending event to `keys` in arrival order.
    ///
    /// Returns `true` if a quit was requested. Events after the quit are still
    /// applied so the table reflects the final key state.
    pub fn drain_into(&mut self, keys: &mut KeyStateTable) -> bool {
        let mut quit = false;
        for event in self.events.drain(..) {
            match event {
                InputEvent::Key { code, pressed } => keys.set(code, pressed),
                InputEvent::ReleaseAll => keys.reset(),
                InputEvent::Quit => quit = true,
            }
        }
        quit
    }
}
