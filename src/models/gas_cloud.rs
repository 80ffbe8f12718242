use glam::Vec2;
use tracing::debug;

use super::constants::{Appearance, GAS_FUEL_AMOUNT, GAS_ROTATION_RATE};
use super::sprite::Sprite;
use super::taxi::Taxi;

/// A slowly spinning cloud that refuels the taxi once.
pub struct GasCloud {
    sprite: Sprite,
    should_remove: bool,
}

impl GasCloud {
    pub fn new(position: Vec2, heading: f32) -> Self {
        let mut sprite = Sprite::new(Appearance::Gas, position);
        sprite.set_heading(heading);
        GasCloud {
            sprite,
            should_remove: false,
        }
    }

    /// Spin in place.
    pub fn update(&mut self, elapsed_ms: u32) {
        let rotation_speed = -GAS_ROTATION_RATE * elapsed_ms as f32;
        self.sprite.set_heading(self.sprite.heading() - rotation_speed);
    }

    /// Give the taxi fuel on contact and mark this cloud for removal.
    pub fn handle_fueling(&mut self, taxi: &mut Taxi) {
        if self.should_remove {
            return;
        }
        if taxi.check_collision(&self.sprite) {
            taxi.add_fuel(GAS_FUEL_AMOUNT);
            self.should_remove = true;
            debug!(fuel = taxi.fuel(), "taxi refuelled from gas cloud");
        }
    }

    pub fn should_remove(&self) -> bool {
        self.should_remove
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}
