use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use super::constants::{Appearance, MAX_PLACEMENT_ATTEMPTS};
use super::errors::{GameError, GameResult};
use super::field::Field;
use super::sprite::Sprite;
use super::taxi::Taxi;

/// A stop on the delivery route.
///
/// Whether a planet is the current destination is decided by the level,
/// which holds the route index and marks planets through
/// [`Planet::set_destination`].
pub struct Planet {
    sprite: Sprite,
    is_destination: bool,
}

impl Planet {
    pub fn new(position: Vec2) -> Self {
        Planet {
            sprite: Sprite::new(Appearance::Planet, position),
            is_destination: false,
        }
    }

    /// Place a planet at a random spot that overlaps none of `planets`.
    ///
    /// Gives up with [`GameError::PlacementExhausted`] when no free spot turns
    /// up within the attempt ceiling, which only happens on fields too small
    /// for the planets already placed.
    pub fn random(rng: &mut StdRng, planets: &[Planet], field: &Field) -> GameResult<Self> {
        let mut planet = Planet::new(Vec2::ZERO);

        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let x = rng.gen::<f32>() * field.width();
            let y = rng.gen::<f32>() * field.height();
            planet.sprite.set_position(Vec2::new(x, y));

            if !planets.iter().any(|other| planet.overlaps(other)) {
                return Ok(planet);
            }
        }

        Err(GameError::PlacementExhausted {
            placed: planets.len(),
            attempts: MAX_PLACEMENT_ATTEMPTS,
        })
    }

    /// Mark or unmark this planet as the current destination.
    pub fn set_destination(&mut self, is_destination: bool) {
        self.is_destination = is_destination;
        self.sprite.set_appearance(if is_destination {
            Appearance::Destination
        } else {
            Appearance::Planet
        });
    }

    pub fn is_destination(&self) -> bool {
        self.is_destination
    }

    /// Resolve contact with the taxi.
    ///
    /// Returns true for a safe landing: touching the destination below warp
    /// speed. Touching any planet at warp, or a non-destination planet at
    /// all, crashes the taxi.
    pub fn handle_landing(&self, taxi: &mut Taxi) -> bool {
        if !taxi.check_collision(&self.sprite) {
            return false;
        }

        if taxi.is_travelling_at_warp() {
            taxi.crash();
            false
        } else if self.is_destination {
            debug!(x = self.sprite.position().x, y = self.sprite.position().y, "taxi landed");
            true
        } else {
            taxi.crash();
            false
        }
    }

    /// Planets are drawn but never move.
    pub fn update(&mut self, _elapsed_ms: u32) {}

    pub fn overlaps(&self, other: &Planet) -> bool {
        self.sprite.is_colliding_with(&other.sprite)
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}
