use glam::Vec2;

use super::constants::Appearance;
use super::sprite::Sprite;
use super::taxi::Taxi;
use crate::io::{Controls, Key};

/// A fixed beacon. Clicking it sends a fuelled taxi toward it at warp.
pub struct WarpStar {
    sprite: Sprite,
}

impl WarpStar {
    pub fn new(position: Vec2) -> Self {
        WarpStar {
            sprite: Sprite::new(Appearance::WarpStar, position),
        }
    }

    /// Warp stars never move; kept so every entity updates the same way.
    pub fn update(&mut self) {}

    /// Start warp travel when the player clicks this star. Costs no fuel,
    /// but an empty taxi cannot warp.
    pub fn handle_navigation(&self, taxi: &mut Taxi, controls: &dyn Controls) {
        if controls.is_key_pressed(Key::Activate)
            && self.sprite.is_covering_position(controls.pointer())
            && taxi.fuel() > 0.0
        {
            taxi.set_warp(self.sprite.position());
        }
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}
