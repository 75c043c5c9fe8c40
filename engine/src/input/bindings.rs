//! Input Bindings Module
//!
//! Maps physical keys to the game's logical actions so the update step
//! never looks at raw key codes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::keyboard::{KeyCode, KeyStateTable};

/// Logical actions the game understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move the player left (default: A)
    MoveLeft,
    /// Move the player right (default: D)
    MoveRight,
    /// Move the player up the screen (default: W)
    MoveUp,
    /// Move the player down the screen (default: S)
    MoveDown,
    /// Fire a projectile (default: Space)
    Fire,
    /// Close the game (default: Escape)
    Quit,
}

impl GameAction {
    pub const ALL: [GameAction; 6] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::MoveUp,
        GameAction::MoveDown,
        GameAction::Fire,
        GameAction::Quit,
    ];
}

/// Serializable binding table, one key per action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingsConfig {
    pub move_left: KeyCode,
    pub move_right: KeyCode,
    pub move_up: KeyCode,
    pub move_down: KeyCode,
    pub fire: KeyCode,
    pub quit: KeyCode,
}

impl Default for BindingsConfig {
    fn default() -> Self {
        Self {
            move_left: KeyCode::A,
            move_right: KeyCode::D,
            move_up: KeyCode::W,
            move_down: KeyCode::S,
            fire: KeyCode::Space,
            quit: KeyCode::Escape,
        }
    }
}

/// Maps physical keys to logical actions, supporting remapping.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    key_to_action: HashMap<KeyCode, GameAction>,
    action_to_key: HashMap<GameAction, KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from(&BindingsConfig::default())
    }
}

impl BindingsConfig {
    /// Key configured for `action`.
    pub fn key(&self, action: GameAction) -> KeyCode {
        match action {
            GameAction::MoveLeft => self.move_left,
            GameAction::MoveRight => self.move_right,
            GameAction::MoveUp => self.move_up,
            GameAction::MoveDown => self.move_down,
            GameAction::Fire => self.fire,
            GameAction::Quit => self.quit,
        }
    }
}

/// Builds the table in [`GameAction::ALL`] order. A key already taken by an
/// earlier action is not stolen: the later action falls back to its default
/// key, or stays unbound if that is taken too.
impl From<&BindingsConfig> for KeyBindings {
    fn from(config: &BindingsConfig) -> Self {
        let defaults = BindingsConfig::default();
        let mut bindings = Self {
            key_to_action: HashMap::new(),
            action_to_key: HashMap::new(),
        };

        for action in GameAction::ALL {
            let key = config.key(action);
            let Some(owner) = bindings.action_for(key) else {
                bindings.bind(key, action);
                continue;
            };

            let fallback = defaults.key(action);
            if bindings.action_for(fallback).is_none() {
                warn!(?key, ?action, ?owner, ?fallback, "Key already bound, using default key");
                bindings.bind(fallback, action);
            } else {
                warn!(?key, ?action, ?owner, "Key already bound, action left unbound");
            }
        }

        bindings
    }
}

impl KeyBindings {
    /// Bind a key to an action.
    ///
    /// Any previous binding of either the key or the action is removed.
    pub fn bind(&mut self, key: KeyCode, action: GameAction) {
        if let Some(old_action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&old_action);
        }
        if let Some(old_key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&old_key);
        }

        self.key_to_action.insert(key, action);
        self.action_to_key.insert(action, key);
    }

    /// Action bound to a key, if any.
    pub fn action_for(&self, key: KeyCode) -> Option<GameAction> {
        self.key_to_action.get(&key).copied()
    }

    /// Key bound to an action, if any.
    pub fn key_for(&self, action: GameAction) -> Option<KeyCode> {
        self.action_to_key.get(&action).copied()
    }

    /// Whether the key bound to `action` is held. Unbound actions are never active.
    pub fn is_active(&self, action: GameAction, keys: &KeyStateTable) -> bool {
        self.key_for(action).is_some_and(|key| keys.is_held(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();

        assert_eq!(bindings.action_for(KeyCode::A), Some(GameAction::MoveLeft));
        assert_eq!(bindings.action_for(KeyCode::D), Some(GameAction::MoveRight));
        assert_eq!(bindings.action_for(KeyCode::W), Some(GameAction::MoveUp));
        assert_eq!(bindings.action_for(KeyCode::S), Some(GameAction::MoveDown));
        assert_eq!(bindings.action_for(KeyCode::Space), Some(GameAction::Fire));
        assert_eq!(bindings.action_for(KeyCode::Escape), Some(GameAction::Quit));
        assert_eq!(bindings.action_for(KeyCode::Enter), None);
    }

    #[test]
    fn test_every_action_bound_by_default() {
        let bindings = KeyBindings::default();
        for action in GameAction::ALL {
            assert!(bindings.key_for(action).is_some(), "{action:?} unbound");
        }
    }

    #[test]
    fn test_rebind_to_arrows() {
        let mut bindings = KeyBindings::default();
        bindings.bind(KeyCode::ArrowLeft, GameAction::MoveLeft);

        assert_eq!(bindings.action_for(KeyCode::A), None);
        assert_eq!(bindings.key_for(GameAction::MoveLeft), Some(KeyCode::ArrowLeft));
    }

    #[test]
    fn test_is_active() {
        let bindings = KeyBindings::default();
        let mut keys = KeyStateTable::new();
        keys.set(KeyCode::Space, true);

        assert!(bindings.is_active(GameAction::Fire, &keys));
        assert!(!bindings.is_active(GameAction::MoveLeft, &keys));
    }

    #[test]
    fn test_unbound_action_never_active() {
        let config = BindingsConfig {
            fire: KeyCode::A,
            ..Default::default()
        };
        let bindings = KeyBindings::from(&config);
        assert_eq!(bindings.key_for(GameAction::Fire), Some(KeyCode::Space));

        let config = BindingsConfig {
            move_right: KeyCode::A,
            move_up: KeyCode::Space,
            fire: KeyCode::D,
            ..Default::default()
        };
        // MoveRight falls back to D and MoveUp holds Space, so Fire has nowhere to go
        let bindings = KeyBindings::from(&config);
        assert_eq!(bindings.key_for(GameAction::MoveRight), Some(KeyCode::D));
        assert_eq!(bindings.key_for(GameAction::Fire), None);

        let mut keys = KeyStateTable::new();
        keys.set(KeyCode::Space, true);
        keys.set(KeyCode::D, true);
        assert!(!bindings.is_active(GameAction::Fire, &keys));
    }

    #[test]
    fn test_duplicate_key_keeps_earlier_action() {
        let config = BindingsConfig {
            fire: KeyCode::A,
            ..Default::default()
        };
        let bindings = KeyBindings::from(&config);

        assert_eq!(bindings.key_for(GameAction::MoveLeft), Some(KeyCode::A));
        assert_eq!(bindings.action_for(KeyCode::A), Some(GameAction::MoveLeft));
        for action in GameAction::ALL {
            assert!(bindings.key_for(action).is_some(), "{action:?} lost its key");
        }
    }

    #[test]
    fn test_config_key_lookup() {
        let config = BindingsConfig::default();
        assert_eq!(config.key(GameAction::Fire), KeyCode::Space);
        assert_eq!(config.key(GameAction::Quit), KeyCode::Escape);
    }

    #[test]
    fn test_config_builds_bindings() {
        let config = BindingsConfig {
            fire: KeyCode::Enter,
            ..Default::default()
        };
        let bindings = KeyBindings::from(&config);
        assert_eq!(bindings.key_for(GameAction::Fire), Some(KeyCode::Enter));
        assert_eq!(bindings.action_for(KeyCode::Space), None);
    }
}
