//! Warp Taxi Game Engine
//!
//! The simulation core of a small arcade game: a taxi ship crosses a 2D
//! field, refuels from gas clouds, jumps between warp stars and must land
//! on each planet of its route in turn without crashing or running dry.
//!
//! # Overview
//!
//! The host calls [`Level::update`](services::level::Level::update) once per
//! frame and shows [`Level::hud_message`](services::level::Level::hud_message).
//! Rendering and input belong to the host and reach the core through the
//! [`io::Controls`] and [`io::Canvas`] traits.
//!
//! # Modules
//!
//! - [`game_engine`] - Session state machine: level sequencing and pauses
//! - [`models`] - Field objects (Taxi, GasCloud, WarpStar, Planet, etc.)
//! - [`services`] - Level simulation and the terminal host
//! - [`io`] - Host collaborator traits, level files, terminal I/O
//! - [`ui`] - HUD text and sprite listings
//! - [`cli`] - Command-line arguments
//!
//! # Example
//!
//! ```rust,no_run
//! use warp_taxi::{FrameInput, GameEngine};
//! use warp_taxi::models::field::Field;
//!
//! let mut engine = GameEngine::new(42, Field::default(), Vec::new()).unwrap();
//! engine.frame(16, &FrameInput::new()).unwrap();
//! println!("{}", engine.hud_message());
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{FinishReason, GameEngine, GameState, TransitionKind};
pub use io::{Canvas, Controls, FrameInput, Key};
pub use services::level::{Level, LevelOutcome};
