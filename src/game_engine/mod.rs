//! Game state machine
//!
//! Runs a session of levels: plays the current level, pauses between
//! levels, and decides when the session is over. The GameEngine owns the
//! one random number generator every level is built from, so a seed
//! replays the same sequence of random levels.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::io::{Canvas, Controls};
use crate::models::constants::TRANSITION_MS;
use crate::models::errors::GameResult;
use crate::models::field::Field;
use crate::services::level::{Level, LevelOutcome};
use crate::ui::presenters::HudPresenter;

/// Core game engine that sequences levels
pub struct GameEngine {
    rng: StdRng,
    field: Field,
    level_files: Vec<PathBuf>,
    /// 1-based number of the level being played
    level_number: usize,
    level: Level,
    state: GameState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameState {
    Playing,
    Transition { remaining_ms: u32, kind: TransitionKind },
    Finished(FinishReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    LevelComplete,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    PlayerQuit,
    AllLevelsComplete,
}

impl GameEngine {
    /// Creates a new game engine and its first level
    ///
    /// # Arguments
    ///
    /// * `seed` - Seed for the session's only random number generator
    /// * `field` - Playing field every level is laid out on
    /// * `level_files` - Level files to play in order. When empty, random
    ///   levels are played until the player quits.
    ///
    /// # Returns
    ///
    /// A GameEngine in the Playing state, or an error if a random level
    /// cannot fit on the field
    pub fn new(seed: u64, field: Field, level_files: Vec<PathBuf>) -> GameResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let level = Level::new(&mut rng, level_files.first().map(PathBuf::as_path), field)?;
        info!(seed, files = level_files.len(), "starting game");

        Ok(Self {
            rng,
            field,
            level_files,
            level_number: 1,
            level,
            state: GameState::Playing,
        })
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn level_mut(&mut self) -> &mut Level {
        &mut self.level
    }

    pub fn level_number(&self) -> usize {
        self.level_number
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, GameState::Finished(_))
    }

    /// Advances the session by one frame
    ///
    /// While playing, the level is updated. While paused between levels,
    /// the pause counts down and the level is left alone; when it runs out
    /// the next level is built or the session finishes.
    pub fn frame(&mut self, elapsed_ms: u32, controls: &dyn Controls) -> GameResult<&GameState> {
        match self.state {
            GameState::Playing => {
                let kind = match self.level.update(elapsed_ms, controls) {
                    LevelOutcome::Continue => None,
                    LevelOutcome::Advance => Some(TransitionKind::LevelComplete),
                    LevelOutcome::Quit => Some(TransitionKind::GameOver),
                };
                if let Some(kind) = kind {
                    self.state = GameState::Transition {
                        remaining_ms: TRANSITION_MS,
                        kind,
                    };
                }
            }
            GameState::Transition { remaining_ms, kind } => {
                if elapsed_ms < remaining_ms {
                    self.state = GameState::Transition {
                        remaining_ms: remaining_ms - elapsed_ms,
                        kind,
                    };
                } else {
                    self.finish_transition(kind)?;
                }
            }
            GameState::Finished(_) => {}
        }

        Ok(&self.state)
    }

    fn finish_transition(&mut self, kind: TransitionKind) -> GameResult<()> {
        match kind {
            TransitionKind::GameOver => {
                self.state = GameState::Finished(FinishReason::PlayerQuit);
            }
            TransitionKind::LevelComplete => {
                let next = self.level_number;
                if !self.level_files.is_empty() && next >= self.level_files.len() {
                    info!(levels = self.level_number, "all level files complete");
                    self.state = GameState::Finished(FinishReason::AllLevelsComplete);
                    return Ok(());
                }

                let file = self.level_files.get(next).map(PathBuf::as_path);
                self.level = Level::new(&mut self.rng, file, self.field)?;
                self.level_number += 1;
                self.state = GameState::Playing;
                info!(level = self.level_number, "starting level");
            }
        }
        Ok(())
    }

    /// Text for the upper-left corner of the screen
    pub fn hud_message(&self) -> String {
        match self.state {
            GameState::Playing => self.level.hud_message(),
            GameState::Transition {
                kind: TransitionKind::LevelComplete,
                ..
            } => HudPresenter::level_complete(self.level_number),
            GameState::Transition {
                kind: TransitionKind::GameOver,
                ..
            }
            | GameState::Finished(FinishReason::PlayerQuit) => HudPresenter::game_over(),
            GameState::Finished(FinishReason::AllLevelsComplete) => {
                HudPresenter::all_levels_complete(self.level_number)
            }
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.level.draw(canvas);
    }
}
