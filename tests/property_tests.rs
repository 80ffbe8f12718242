use glam::Vec2;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use warp_taxi::models::constants::THRUSTER_SPEED;
use warp_taxi::models::field::Field;
use warp_taxi::models::planet::Planet;
use warp_taxi::models::taxi::Taxi;
use warp_taxi::{FrameInput, Key, Level, LevelOutcome};

const DIRECTIONS: [Key; 4] = [Key::Up, Key::Down, Key::Left, Key::Right];

proptest! {
    /// Property: each held direction burns exactly thruster speed * elapsed
    #[test]
    fn fuel_burn_matches_held_directions(
        elapsed in 0u32..500,
        held in prop::collection::vec(any::<bool>(), 4)
    ) {
        let mut taxi = Taxi::new(Vec2::new(400.0, 300.0));
        let mut input = FrameInput::new();
        let mut expected = taxi.fuel();
        for (key, on) in DIRECTIONS.iter().zip(&held) {
            if *on {
                input = input.hold(*key);
                expected -= THRUSTER_SPEED * elapsed as f32;
            }
        }

        taxi.update(elapsed, &input, &Field::default());
        prop_assert!(
            (taxi.fuel() - expected).abs() < 1e-3,
            "fuel {} != expected {}",
            taxi.fuel(),
            expected
        );
    }

    /// Property: an empty tank never burns and never moves
    #[test]
    fn no_burn_without_fuel(
        deficit in 0.0f32..50.0,
        elapsed in 0u32..500,
        held in prop::collection::vec(any::<bool>(), 4)
    ) {
        let mut taxi = Taxi::new(Vec2::new(400.0, 300.0));
        taxi.add_fuel(-30.0 - deficit);
        let before = taxi.fuel();
        let mut input = FrameInput::new();
        for (key, on) in DIRECTIONS.iter().zip(&held) {
            if *on {
                input = input.hold(*key);
            }
        }

        taxi.update(elapsed, &input, &Field::default());
        prop_assert_eq!(taxi.fuel(), before);
        prop_assert_eq!(taxi.position(), Vec2::new(400.0, 300.0));
    }

    /// Property: crashing twice is the same as crashing once
    #[test]
    fn crash_is_idempotent(extra_fuel in -100.0f32..100.0, times in 1usize..5) {
        let mut taxi = Taxi::new(Vec2::ZERO);
        taxi.add_fuel(extra_fuel);
        for _ in 0..times {
            taxi.crash();
        }
        prop_assert!(taxi.has_crashed());
        prop_assert_eq!(taxi.fuel(), 0.0);
    }

    /// Property: random planets never overlap each other
    #[test]
    fn random_planets_never_overlap(seed in any::<u64>(), count in 1usize..10) {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = Field::default();
        let mut planets: Vec<Planet> = Vec::new();
        for _ in 0..count {
            let planet = Planet::random(&mut rng, &planets, &field).unwrap();
            planets.push(planet);
        }

        for (i, a) in planets.iter().enumerate() {
            for b in &planets[i + 1..] {
                prop_assert!(!a.overlaps(b));
            }
        }
    }

    /// Property: landing succeeds only on the destination, below warp
    #[test]
    fn landing_truth_table(
        touching in any::<bool>(),
        at_warp in any::<bool>(),
        is_destination in any::<bool>()
    ) {
        let mut planet = Planet::new(Vec2::new(200.0, 200.0));
        planet.set_destination(is_destination);
        let start = if touching { Vec2::new(210.0, 200.0) } else { Vec2::new(600.0, 500.0) };
        let mut taxi = Taxi::new(start);
        if at_warp {
            taxi.set_warp(Vec2::new(0.0, 0.0));
        }

        let landed = planet.handle_landing(&mut taxi);
        prop_assert_eq!(landed, touching && !at_warp && is_destination);
        prop_assert_eq!(taxi.has_crashed(), touching && !landed);
    }

    /// Property: a seed always produces the same random level
    #[test]
    fn random_levels_are_reproducible(seed in any::<u64>()) {
        let layout = |level: &Level| -> Vec<Vec2> {
            level.planets().iter().map(|p| p.sprite().position())
                .chain(level.gas_clouds().iter().map(|g| g.sprite().position()))
                .chain(level.warp_stars().iter().map(|w| w.sprite().position()))
                .collect()
        };
        let a = Level::random(&mut StdRng::seed_from_u64(seed), Field::default()).unwrap();
        let b = Level::random(&mut StdRng::seed_from_u64(seed), Field::default()).unwrap();

        prop_assert_eq!(layout(&a), layout(&b));
        prop_assert_eq!(a.destination_planet_index(), 0);
        prop_assert_eq!(a.planets().iter().filter(|p| p.is_destination()).count(), 1);
    }

    /// Property: the route index stays within the route on every frame
    #[test]
    fn destination_index_stays_in_bounds(
        seed in any::<u64>(),
        frames in prop::collection::vec((0u32..200, 0usize..4), 1..60)
    ) {
        let mut level = Level::random(&mut StdRng::seed_from_u64(seed), Field::default()).unwrap();
        for (elapsed, direction) in frames {
            let input = FrameInput::new().hold(DIRECTIONS[direction]);
            let outcome = level.update(elapsed, &input);
            prop_assert!(level.destination_planet_index() <= level.planets().len());
            if outcome != LevelOutcome::Continue {
                break;
            }
            prop_assert!(level.destination_planet_index() < level.planets().len());
        }
    }
}
