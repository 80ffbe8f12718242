use glam::Vec2;

use super::constants::{DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH};
use super::errors::{GameError, GameResult};

/// The rectangular playing field. (0,0) is upper-left, x grows right and
/// y grows down, matching the host's screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    width: f32,
    height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Field {
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
        }
    }
}

impl Field {
    pub fn new(width: f32, height: f32) -> GameResult<Self> {
        // Written so NaN is rejected too
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(GameError::InvalidField { width, height });
        }
        Ok(Field { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Bring a position that left the field back in from the opposite edge.
    ///
    /// Past the far edge the extent is subtracted. Below zero the coordinate
    /// becomes `extent - coordinate`, so a taxi at x = -3 reappears at
    /// width + 3 and is pulled back under width on the next frame.
    pub fn wrap(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            wrap_axis(position.x, self.width),
            wrap_axis(position.y, self.height),
        )
    }
}

fn wrap_axis(mut coordinate: f32, extent: f32) -> f32 {
    if coordinate > extent {
        coordinate -= extent;
    }
    if coordinate < 0.0 {
        coordinate = extent - coordinate;
    }
    coordinate
}
