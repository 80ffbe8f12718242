//! Domain models
//!
//! This module contains the objects on the playing field and the
//! values they share. Models hold their own rules for a single
//! interaction; the level decides the order interactions happen in.

pub mod constants;
pub mod errors;
pub mod field;
pub mod gas_cloud;
pub mod planet;
pub mod sprite;
pub mod taxi;
pub mod warp_star;
