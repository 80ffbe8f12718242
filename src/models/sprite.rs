use glam::Vec2;

use super::constants::Appearance;

/// Position, heading and collision circle of one object on the field.
///
/// The host draws sprites; the core only needs their geometry. Headings are
/// radians with 0 pointing along +x and PI/2 pointing up the screen (toward
/// smaller y).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    appearance: Appearance,
    position: Vec2,
    heading: f32,
    radius: f32,
}

impl Sprite {
    /// The collision radius is fixed by the appearance given here and kept
    /// through later appearance changes.
    pub fn new(appearance: Appearance, position: Vec2) -> Self {
        Sprite {
            appearance,
            position,
            heading: 0.0,
            radius: appearance.radius(),
        }
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn set_heading(&mut self, heading: f32) {
        self.heading = heading;
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Point the sprite at `target`. A target on top of the sprite faces +x.
    pub fn face_toward(&mut self, target: Vec2) {
        let delta = target - self.position;
        self.heading = (-delta.y).atan2(delta.x);
    }

    /// Unit vector of the current heading in screen coordinates.
    pub fn direction(&self) -> Vec2 {
        Vec2::new(self.heading.cos(), -self.heading.sin())
    }

    pub fn is_colliding_with(&self, other: &Sprite) -> bool {
        self.position.distance(other.position) < self.radius + other.radius
    }

    pub fn is_covering_position(&self, point: Vec2) -> bool {
        self.position.distance(point) <= self.radius
    }
}
