//! Command-line arguments

pub mod args;

pub use args::{parse, Args, ParsedArgs};
