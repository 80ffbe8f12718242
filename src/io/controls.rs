//! Host-side collaborators of the simulation core
//!
//! The graphical host owns the window, the keyboard and the mouse. The core
//! reads input through [`Controls`] and hands sprites to a [`Canvas`].

use std::collections::HashSet;

use glam::Vec2;

use crate::models::sprite::Sprite;

/// Logical inputs. Hosts map physical keys onto these (WASD or arrows for
/// directions, SPACE for acknowledge, mouse button for activate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Acknowledge,
    Activate,
}

/// Input state for the current frame.
pub trait Controls {
    /// True while the key is down.
    fn is_key_held(&self, key: Key) -> bool;
    /// True only on the frame the key went down.
    fn is_key_pressed(&self, key: Key) -> bool;
    /// Pointer position in field coordinates.
    fn pointer(&self) -> Vec2;
}

/// Something sprites can be drawn onto.
pub trait Canvas {
    fn draw(&mut self, sprite: &Sprite);
}

/// A plain snapshot of one frame's input.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    held: HashSet<Key>,
    pressed: HashSet<Key>,
    pointer: Vec2,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold(mut self, key: Key) -> Self {
        self.held.insert(key);
        self
    }

    pub fn press(mut self, key: Key) -> Self {
        self.pressed.insert(key);
        self
    }

    pub fn point_at(mut self, at: Vec2) -> Self {
        self.pointer = at;
        self
    }

    /// Activate at a pointer position, as a mouse click would.
    pub fn click(self, at: Vec2) -> Self {
        self.point_at(at).press(Key::Activate)
    }

    /// Whether nothing is held or pressed.
    pub fn is_idle(&self) -> bool {
        self.held.is_empty() && self.pressed.is_empty()
    }
}

impl Controls for FrameInput {
    fn is_key_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    fn pointer(&self) -> Vec2 {
        self.pointer
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_and_pressed_are_independent() {
        let input = FrameInput::new().hold(Key::Right).press(Key::Acknowledge);
        assert!(input.is_key_held(Key::Right));
        assert!(!input.is_key_pressed(Key::Right));
        assert!(input.is_key_pressed(Key::Acknowledge));
        assert!(!input.is_key_held(Key::Acknowledge));
    }

    #[test]
    fn click_presses_activate_at_pointer() {
        let input = FrameInput::new().click(Vec2::new(12.0, 34.0));
        assert!(input.is_key_pressed(Key::Activate));
        assert_eq!(input.pointer(), Vec2::new(12.0, 34.0));
        assert!(!input.is_idle());
        assert!(FrameInput::new().is_idle());
    }
}
