//! User interface and presentation
//!
//! This module contains presenters that turn game state into text for the
//! player, separating presentation from the simulation.

pub mod presenters;
