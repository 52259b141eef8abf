//! Keyboard input tracking
//!
//! Only the latest press/release state matters; OS key repeat just re-sets
//! the same flag.

use serde::{Deserialize, Serialize};

/// Logical paddle action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    MoveUp,
    MoveDown,
}

/// Physical keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    W,
    S,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value; anything else is ignored
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "w" | "W" => Some(Key::W),
            "s" | "S" => Some(Key::S),
            _ => None,
        }
    }

    pub fn action(self) -> Action {
        match self {
            Key::ArrowUp | Key::W => Action::MoveUp,
            Key::ArrowDown | Key::S => Action::MoveDown,
        }
    }
}

/// Held state of the four bound keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up_arrow: bool,
    pub down_arrow: bool,
    pub w: bool,
    pub s: bool,
}

impl InputState {
    pub fn set(&mut self, key: Key, pressed: bool) {
        match key {
            Key::ArrowUp => self.up_arrow = pressed,
            Key::ArrowDown => self.down_arrow = pressed,
            Key::W => self.w = pressed,
            Key::S => self.s = pressed,
        }
    }

    /// Apply a key-down (`pressed`) or key-up event by key name.
    /// Returns false for keys the game does not use.
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> bool {
        match Key::from_key(key) {
            Some(key) => {
                self.set(key, pressed);
                true
            }
            None => false,
        }
    }

    /// Whether either binding of `action` is held
    pub fn is_active(&self, action: Action) -> bool {
        match action {
            Action::MoveUp => self.up_arrow || self.w,
            Action::MoveDown => self.down_arrow || self.s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_key("ArrowUp"), Some(Key::ArrowUp));
        assert_eq!(Key::from_key("ArrowDown"), Some(Key::ArrowDown));
        assert_eq!(Key::from_key("w"), Some(Key::W));
        assert_eq!(Key::from_key("W"), Some(Key::W));
        assert_eq!(Key::from_key("s"), Some(Key::S));
        assert_eq!(Key::from_key("S"), Some(Key::S));
        assert_eq!(Key::from_key("a"), None);
        assert_eq!(Key::from_key("Enter"), None);
        assert_eq!(Key::from_key("ArrowLeft"), None);
    }

    #[test]
    fn test_press_and_release() {
        let mut input = InputState::default();
        assert!(input.handle_key("W", true));
        assert!(input.is_active(Action::MoveUp));
        assert!(!input.is_active(Action::MoveDown));

        // Key repeat is a no-op
        assert!(input.handle_key("w", true));
        assert!(input.w);

        assert!(input.handle_key("w", false));
        assert!(!input.is_active(Action::MoveUp));
    }

    #[test]
    fn test_both_bindings_drive_one_action() {
        let mut input = InputState::default();
        input.handle_key("ArrowDown", true);
        input.handle_key("s", true);
        input.handle_key("ArrowDown", false);
        assert!(input.is_active(Action::MoveDown), "s still held");
        input.handle_key("S", false);
        assert!(!input.is_active(Action::MoveDown));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut input = InputState::default();
        assert!(!input.handle_key("Escape", true));
        assert!(!input.handle_key(" ", true));
        assert_eq!(input, InputState::default());
    }
}
