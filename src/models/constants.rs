pub const DEFAULT_FIELD_WIDTH: f32 = 800.0;
pub const DEFAULT_FIELD_HEIGHT: f32 = 600.0;

pub const INITIAL_FUEL: f32 = 30.0;
/// Thruster speed in field units per millisecond. Also the fuel burned per
/// millisecond for each held direction.
pub const THRUSTER_SPEED: f32 = 0.01;
/// Warp speed in field units per millisecond.
pub const WARP_SPEED: f32 = 0.2;

pub const GAS_FUEL_AMOUNT: f32 = 20.0;
/// Radians per millisecond a gas cloud spins.
pub const GAS_ROTATION_RATE: f32 = 0.001;

/// Number of warp stars, gas clouds and planets in a random level.
pub const RANDOM_ENTITY_COUNT: usize = 6;

/// Candidate positions tried per planet before random placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Pause between levels, and before the session ends.
pub const TRANSITION_MS: u32 = 2000;

/// Frame length the terminal host uses when a command names none.
pub const DEFAULT_FRAME_MS: u32 = 16;

pub const NUM_ENTITY_KINDS: usize = 4;

/// Kinds of object a level file can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Taxi = 0,
    Gas = 1,
    Planet = 2,
    WarpStar = 3,
}

impl EntityKind {
    /// Token used for this kind in level files.
    pub fn token(&self) -> &'static str {
        match self {
            EntityKind::Taxi => "TAXI",
            EntityKind::Gas => "GAS",
            EntityKind::Planet => "PLANET",
            EntityKind::WarpStar => "WARP_STAR",
        }
    }

    pub fn from_token(token: &str) -> Option<EntityKind> {
        EntityKind::ALL.into_iter().find(|kind| kind.token() == token)
    }

    pub const ALL: [EntityKind; NUM_ENTITY_KINDS] = [
        EntityKind::Taxi,
        EntityKind::Gas,
        EntityKind::Planet,
        EntityKind::WarpStar,
    ];
}

/// How a sprite looks, which also fixes its collision radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Taxi,
    Explosion,
    Gas,
    WarpStar,
    Planet,
    Destination,
}

impl Appearance {
    pub fn name(&self) -> &'static str {
        match self {
            Appearance::Taxi => "TAXI",
            Appearance::Explosion => "EXPLOSION",
            Appearance::Gas => "GAS",
            Appearance::WarpStar => "WARP_STAR",
            Appearance::Planet => "PLANET",
            Appearance::Destination => "DESTINATION",
        }
    }

    pub fn radius(&self) -> f32 {
        match self {
            Appearance::Taxi | Appearance::Explosion => 12.0,
            Appearance::Gas => 16.0,
            Appearance::WarpStar => 16.0,
            Appearance::Planet | Appearance::Destination => 40.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_tokens_round_trip() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_token(kind.token()), Some(kind));
        }
    }

    #[test]
    fn unknown_and_lowercase_tokens_are_rejected() {
        assert_eq!(EntityKind::from_token("taxi"), None);
        assert_eq!(EntityKind::from_token("ASTEROID"), None);
        assert_eq!(EntityKind::from_token(""), None);
    }

    #[test]
    fn destination_and_plain_planets_share_a_radius() {
        assert_eq!(Appearance::Planet.radius(), Appearance::Destination.radius());
        assert_eq!(Appearance::Taxi.radius(), Appearance::Explosion.radius());
    }
}
