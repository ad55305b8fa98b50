//! Keyboard input mapping
//!
//! Only the initial key-down edge produces an event. Auto-repeat events and
//! key-downs for keys that are already held are dropped.

use std::collections::HashSet;

use crate::settings::KeyBindings;
use crate::sim::Event;

/// Game action a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
    Reset,
}

impl Action {
    pub fn event(self) -> Event {
        match self {
            Action::Left => Event::LEFT,
            Action::Right => Event::RIGHT,
            Action::Up => Event::UP,
            Action::Down => Event::DOWN,
            Action::Reset => Event::Reset,
        }
    }
}

/// Turns raw key transitions into simulation events
#[derive(Debug, Clone, Default)]
pub struct KeyMapper {
    bindings: KeyBindings,
    held: HashSet<String>,
}

impl KeyMapper {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: HashSet::new(),
        }
    }

    /// Action bound to a key code, if any
    pub fn action_for(&self, code: &str) -> Option<Action> {
        let b = &self.bindings;
        if code == b.left {
            Some(Action::Left)
        } else if code == b.right {
            Some(Action::Right)
        } else if code == b.up {
            Some(Action::Up)
        } else if code == b.down {
            Some(Action::Down)
        } else if code == b.reset {
            Some(Action::Reset)
        } else {
            None
        }
    }

    /// Key pressed. `repeat` is the platform's auto-repeat flag.
    pub fn key_down(&mut self, code: &str, repeat: bool) -> Option<Event> {
        let action = self.action_for(code)?;
        if repeat || !self.held.insert(code.to_string()) {
            return None;
        }
        Some(action.event())
    }

    /// Key released; the next press counts as a fresh edge
    pub fn key_up(&mut self, code: &str) {
        self.held.remove(code);
    }

    /// Forget held keys (e.g. after focus loss, when key-ups never arrive)
    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let mut keys = KeyMapper::default();
        assert_eq!(keys.key_down("ArrowLeft", false), Some(Event::LEFT));
        assert_eq!(keys.key_down("ArrowRight", false), Some(Event::RIGHT));
        assert_eq!(keys.key_down("ArrowUp", false), Some(Event::UP));
        assert_eq!(keys.key_down("ArrowDown", false), Some(Event::DOWN));
        assert_eq!(keys.key_down("Space", false), Some(Event::Reset));
        assert_eq!(keys.key_down("KeyQ", false), None);
    }

    #[test]
    fn test_repeat_suppressed() {
        let mut keys = KeyMapper::default();
        assert!(keys.key_down("ArrowUp", false).is_some());
        assert!(keys.key_down("ArrowUp", true).is_none());
        // held without a release
        assert!(keys.key_down("ArrowUp", false).is_none());
        keys.key_up("ArrowUp");
        assert!(keys.key_down("ArrowUp", false).is_some());
    }

    #[test]
    fn test_release_all() {
        let mut keys = KeyMapper::default();
        assert!(keys.key_down("ArrowLeft", false).is_some());
        keys.release_all();
        assert!(keys.key_down("ArrowLeft", false).is_some());
    }

    #[test]
    fn test_custom_bindings() {
        let bindings = KeyBindings {
            up: "KeyW".to_string(),
            ..KeyBindings::default()
        };
        let mut keys = KeyMapper::new(bindings);
        assert_eq!(keys.key_down("KeyW", false), Some(Event::UP));
        assert_eq!(keys.key_down("ArrowUp", false), None);
    }
}
