//! One level of play
//!
//! A level owns the taxi, the gas clouds, the warp stars and the planets of
//! the delivery route, and steps them all once per frame.

use std::path::Path;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{info, warn};

use crate::io::{load_level_file, Canvas, Controls, EntityRecord};
use crate::models::constants::{EntityKind, RANDOM_ENTITY_COUNT};
use crate::models::errors::{GameError, GameResult};
use crate::models::field::Field;
use crate::models::gas_cloud::GasCloud;
use crate::models::planet::Planet;
use crate::models::taxi::Taxi;
use crate::models::warp_star::WarpStar;
use crate::ui::presenters::HudPresenter;

/// What the host should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOutcome {
    Continue,
    Advance,
    Quit,
}

pub struct Level {
    field: Field,
    taxi: Taxi,
    gas_clouds: Vec<GasCloud>,
    warp_stars: Vec<WarpStar>,
    /// Delivery route, in order.
    planets: Vec<Planet>,
    /// Route position of the current destination. Equals `planets.len()`
    /// only on the frame the last fare is delivered.
    destination_planet_index: usize,
}

impl Level {
    /// Build a level from `level_file`, or a random one when no file is
    /// given or the file cannot be used.
    ///
    /// Fails only when a random layout cannot fit its planets on the field.
    pub fn new(rng: &mut StdRng, level_file: Option<&Path>, field: Field) -> GameResult<Self> {
        if let Some(path) = level_file {
            match load_level_file(path).and_then(|records| Level::from_records(&records, field)) {
                Ok(level) => {
                    info!(
                        file = %path.display(),
                        planets = level.planets.len(),
                        gas_clouds = level.gas_clouds.len(),
                        warp_stars = level.warp_stars.len(),
                        "loaded level file"
                    );
                    return Ok(level);
                }
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "level file unusable, using a random level");
                }
            }
        }

        Level::random(rng, field)
    }

    /// A taxi in the middle of the field with six each of warp stars, gas
    /// clouds and non-overlapping planets scattered at random.
    pub fn random(rng: &mut StdRng, field: Field) -> GameResult<Self> {
        let mut warp_stars = Vec::with_capacity(RANDOM_ENTITY_COUNT);
        let mut gas_clouds = Vec::with_capacity(RANDOM_ENTITY_COUNT);
        let mut planets = Vec::with_capacity(RANDOM_ENTITY_COUNT);

        for _ in 0..RANDOM_ENTITY_COUNT {
            warp_stars.push(WarpStar::new(random_position(rng, &field)));
            gas_clouds.push(GasCloud::new(random_position(rng, &field), 0.0));
            let planet = Planet::random(rng, &planets, &field)?;
            planets.push(planet);
        }

        info!(planets = planets.len(), "generated random level");
        Ok(Level::assemble(
            field,
            Taxi::new(field.center()),
            gas_clouds,
            warp_stars,
            planets,
        ))
    }

    /// Build a level from parsed level file records.
    ///
    /// The last taxi listed wins. Planets keep file order as the route.
    pub fn from_records(records: &[EntityRecord], field: Field) -> GameResult<Self> {
        let mut taxi = None;
        let mut gas_clouds = Vec::new();
        let mut warp_stars = Vec::new();
        let mut planets = Vec::new();

        for record in records {
            match record.kind {
                EntityKind::Taxi => taxi = Some(Taxi::new(record.position)),
                EntityKind::Gas => gas_clouds.push(GasCloud::new(record.position, 0.0)),
                EntityKind::Planet => planets.push(Planet::new(record.position)),
                EntityKind::WarpStar => warp_stars.push(WarpStar::new(record.position)),
            }
        }

        let taxi = taxi.ok_or(GameError::IncompleteLevel("taxi"))?;
        if planets.is_empty() {
            return Err(GameError::IncompleteLevel("planet"));
        }

        Ok(Level::assemble(field, taxi, gas_clouds, warp_stars, planets))
    }

    fn assemble(
        field: Field,
        taxi: Taxi,
        gas_clouds: Vec<GasCloud>,
        warp_stars: Vec<WarpStar>,
        mut planets: Vec<Planet>,
    ) -> Self {
        planets[0].set_destination(true);
        Level {
            field,
            taxi,
            gas_clouds,
            warp_stars,
            planets,
            destination_planet_index: 0,
        }
    }

    /// Step every object by one frame and apply the game's rules.
    ///
    /// Order: taxi, gas clouds, warp stars, planets. Returns `Quit` as soon
    /// as a stranded taxi acknowledges, and `Advance` as soon as the last
    /// fare on the route is delivered.
    pub fn update(&mut self, elapsed_ms: u32, controls: &dyn Controls) -> LevelOutcome {
        if self.taxi.update(elapsed_ms, controls, &self.field) {
            info!(fares = self.destination_planet_index, "player ended the game");
            return LevelOutcome::Quit;
        }

        let taxi = &mut self.taxi;
        self.gas_clouds.retain_mut(|cloud| {
            cloud.update(elapsed_ms);
            cloud.handle_fueling(taxi);
            !cloud.should_remove()
        });

        for star in &mut self.warp_stars {
            star.update();
            star.handle_navigation(&mut self.taxi, controls);
        }

        for i in 0..self.planets.len() {
            self.planets[i].update(elapsed_ms);
            if self.planets[i].handle_landing(&mut self.taxi) {
                self.planets[self.destination_planet_index].set_destination(false);
                self.destination_planet_index += 1;
                if self.destination_planet_index == self.planets.len() {
                    info!(fares = self.destination_planet_index, "route complete");
                    return LevelOutcome::Advance;
                }
            }
        }

        self.planets[self.destination_planet_index].set_destination(true);
        LevelOutcome::Continue
    }

    /// Status text: fuel and fares, or how the run ended.
    pub fn hud_message(&self) -> String {
        HudPresenter::status(&self.taxi, self.destination_planet_index, self.planets.len())
    }

    /// Draw the taxi, then gas clouds, warp stars and planets.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw(self.taxi.sprite());
        for cloud in &self.gas_clouds {
            canvas.draw(cloud.sprite());
        }
        for star in &self.warp_stars {
            canvas.draw(star.sprite());
        }
        for planet in &self.planets {
            canvas.draw(planet.sprite());
        }
    }

    // ========== Accessor Methods ==========

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn taxi(&self) -> &Taxi {
        &self.taxi
    }

    pub fn taxi_mut(&mut self) -> &mut Taxi {
        &mut self.taxi
    }

    pub fn gas_clouds(&self) -> &[GasCloud] {
        &self.gas_clouds
    }

    pub fn warp_stars(&self) -> &[WarpStar] {
        &self.warp_stars
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn destination_planet_index(&self) -> usize {
        self.destination_planet_index
    }
}

fn random_position(rng: &mut StdRng, field: &Field) -> Vec2 {
    let x = rng.gen::<f32>() * field.width();
    let y = rng.gen::<f32>() * field.height();
    Vec2::new(x, y)
}
