//! Game services
//!
//! This module contains the per-frame level simulation and the terminal
//! host that drives a game session.

pub mod game;
pub mod level;
