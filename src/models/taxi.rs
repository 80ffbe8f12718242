use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;
use tracing::debug;

use super::constants::{Appearance, INITIAL_FUEL, THRUSTER_SPEED, WARP_SPEED};
use super::field::Field;
use super::sprite::Sprite;
use crate::io::{Controls, Key};

/// Thruster inputs: key, axis of travel, heading the taxi turns to.
const THRUSTERS: [(Key, Vec2, f32); 4] = [
    (Key::Right, Vec2::new(1.0, 0.0), 0.0),
    (Key::Left, Vec2::new(-1.0, 0.0), PI),
    (Key::Up, Vec2::new(0.0, -1.0), FRAC_PI_2),
    (Key::Down, Vec2::new(0.0, 1.0), 3.0 * FRAC_PI_2),
];

/// The player's ship.
pub struct Taxi {
    sprite: Sprite,
    /// Not clamped; goes negative when a thruster burn outlasts the tank.
    fuel: f32,
    travelling_at_warp: bool,
    crashed: bool,
}

impl Taxi {
    pub fn new(position: Vec2) -> Self {
        Taxi {
            sprite: Sprite::new(Appearance::Taxi, position),
            fuel: INITIAL_FUEL,
            travelling_at_warp: false,
            crashed: false,
        }
    }

    /// Advance the taxi by one frame.
    ///
    /// With fuel left, warp travel carries the taxi along its heading and each
    /// held direction fires a thruster, burning fuel and cancelling warp.
    /// Positions are then wrapped into the field. Returns true when the taxi
    /// is out of fuel or crashed and the player pressed acknowledge.
    pub fn update(&mut self, elapsed_ms: u32, controls: &dyn Controls, field: &Field) -> bool {
        let elapsed = elapsed_ms as f32;

        if self.fuel > 0.0 {
            if self.travelling_at_warp {
                let step = self.sprite.direction() * WARP_SPEED * elapsed;
                self.sprite.set_position(self.sprite.position() + step);
            }

            for (key, axis, heading) in THRUSTERS {
                if controls.is_key_held(key) {
                    let burn = THRUSTER_SPEED * elapsed;
                    self.sprite.set_position(self.sprite.position() + axis * burn);
                    self.sprite.set_heading(heading);
                    self.fuel -= burn;
                    self.travelling_at_warp = false;
                }
            }
        }

        self.sprite.set_position(field.wrap(self.sprite.position()));

        self.is_stranded() && controls.is_key_pressed(Key::Acknowledge)
    }

    pub fn fuel(&self) -> f32 {
        self.fuel
    }

    /// No ceiling. A crashed taxi stays empty.
    pub fn add_fuel(&mut self, amount: f32) {
        if self.crashed {
            return;
        }
        self.fuel += amount;
    }

    /// Turn toward `target` and start travelling at warp speed.
    pub fn set_warp(&mut self, target: Vec2) {
        self.sprite.face_toward(target);
        self.travelling_at_warp = true;
        debug!(x = target.x, y = target.y, "taxi engaged warp");
    }

    pub fn is_travelling_at_warp(&self) -> bool {
        self.travelling_at_warp
    }

    pub fn has_crashed(&self) -> bool {
        self.crashed
    }

    pub fn crash(&mut self) {
        if !self.crashed {
            debug!(x = self.sprite.position().x, y = self.sprite.position().y, "taxi crashed");
        }
        self.crashed = true;
        self.fuel = 0.0;
        self.sprite.set_appearance(Appearance::Explosion);
    }

    /// Out of fuel or crashed: the taxi can no longer fly.
    pub fn is_stranded(&self) -> bool {
        self.fuel <= 0.0 || self.crashed
    }

    pub fn check_collision(&self, other: &Sprite) -> bool {
        self.sprite.is_colliding_with(other)
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn position(&self) -> Vec2 {
        self.sprite.position()
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.sprite.set_position(position);
    }
}
