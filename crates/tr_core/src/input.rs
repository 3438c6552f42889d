use bevy::prelude::*;
use bitflags::bitflags;

/// Keys the simulation reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Left,
    Right,
    Up,
}

impl Key {
    /// Map a physical key to a simulation key.
    /// Arrow keys and space are primary; `A`/`D`/`W` are aliases.
    pub fn from_key_code(code: KeyCode) -> Option<Key> {
        match code {
            KeyCode::Space => Some(Key::Space),
            KeyCode::ArrowLeft | KeyCode::KeyA => Some(Key::Left),
            KeyCode::ArrowRight | KeyCode::KeyD => Some(Key::Right),
            KeyCode::ArrowUp | KeyCode::KeyW => Some(Key::Up),
            _ => None,
        }
    }

    /// Every physical key that maps to this key.
    pub fn key_codes(self) -> &'static [KeyCode] {
        match self {
            Key::Space => &[KeyCode::Space],
            Key::Left => &[KeyCode::ArrowLeft, KeyCode::KeyA],
            Key::Right => &[KeyCode::ArrowRight, KeyCode::KeyD],
            Key::Up => &[KeyCode::ArrowUp, KeyCode::KeyW],
        }
    }

    /// Get all keys in order.
    pub fn all() -> &'static [Key] {
        &[Key::Space, Key::Left, Key::Right, Key::Up]
    }

    fn flag(self) -> HeldKeys {
        match self {
            Key::Space => HeldKeys::SPACE,
            Key::Left => HeldKeys::LEFT,
            Key::Right => HeldKeys::RIGHT,
            Key::Up => HeldKeys::UP,
        }
    }
}

bitflags! {
    /// Bit set of currently held keys.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HeldKeys: u8 {
        const SPACE = 0b0000_0001;
        const LEFT = 0b0000_0010;
        const RIGHT = 0b0000_0100;
        const UP = 0b0000_1000;
    }
}

/// Keys currently held down, updated by press and release events.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveKeys {
    held: HeldKeys,
}

impl ActiveKeys {
    pub fn press(&mut self, key: Key) {
        self.held.insert(key.flag());
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(key.flag());
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(key.flag())
    }

    /// `key` is held and `other` is not.
    pub fn exclusively(&self, key: Key, other: Key) -> bool {
        self.is_held(key) && !self.is_held(other)
    }

    /// Either jump key is held.
    pub fn jump_held(&self) -> bool {
        self.held.intersects(HeldKeys::UP | HeldKeys::SPACE)
    }

    /// Drop every held key, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.held = HeldKeys::empty();
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release() {
        let mut keys = ActiveKeys::default();
        keys.press(Key::Left);
        assert!(keys.is_held(Key::Left));
        assert!(!keys.is_held(Key::Right));

        keys.release(Key::Left);
        assert!(!keys.is_held(Key::Left));
        assert!(keys.is_empty());
    }

    #[test]
    fn releasing_unheld_key_is_noop() {
        let mut keys = ActiveKeys::default();
        keys.press(Key::Up);
        keys.release(Key::Space);
        assert!(keys.is_held(Key::Up));
    }

    #[test]
    fn exclusive_direction() {
        let mut keys = ActiveKeys::default();
        keys.press(Key::Left);
        assert!(keys.exclusively(Key::Left, Key::Right));

        keys.press(Key::Right);
        assert!(!keys.exclusively(Key::Left, Key::Right));
        assert!(!keys.exclusively(Key::Right, Key::Left));
    }

    #[test]
    fn jump_keys() {
        let mut keys = ActiveKeys::default();
        assert!(!keys.jump_held());
        keys.press(Key::Space);
        assert!(keys.jump_held());
        keys.release(Key::Space);
        keys.press(Key::Up);
        assert!(keys.jump_held());
    }

    #[test]
    fn key_code_mapping() {
        assert_eq!(Key::from_key_code(KeyCode::ArrowLeft), Some(Key::Left));
        assert_eq!(Key::from_key_code(KeyCode::KeyD), Some(Key::Right));
        assert_eq!(Key::from_key_code(KeyCode::Space), Some(Key::Space));
        assert_eq!(Key::from_key_code(KeyCode::ArrowDown), None);
        assert_eq!(Key::from_key_code(KeyCode::Escape), None);
    }

    #[test]
    fn key_codes_map_back_to_their_key() {
        for key in Key::all() {
            for code in key.key_codes() {
                assert_eq!(Key::from_key_code(*code), Some(*key));
            }
        }
    }

    #[test]
    fn key_flags_are_unique() {
        let flags: Vec<_> = Key::all().iter().map(|k| k.flag()).collect();
        let unique: std::collections::HashSet<_> = flags.iter().collect();
        assert_eq!(flags.len(), unique.len());
    }
}
