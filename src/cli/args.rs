use std::path::PathBuf;

use crate::models::errors::{GameError, GameResult};
use crate::models::field::Field;

pub struct Args {
    pub seed: Option<u64>,
    pub field: Field,
    /// Level files to play in order.
    pub level_files: Vec<PathBuf>,
}

pub enum ParsedArgs {
    Run(Args),
    Help,
}

pub const USAGE: &str = "\
Usage: warp_taxi [OPTIONS] [LEVEL_FILE]...

Options:
  -s, --seed <INT>      Seed for the random number generator
      --width <NUM>     Field width (default 800)
      --height <NUM>    Field height (default 600)
  -h, --help            Print help";

/// Parse the process arguments.
pub fn parse() -> GameResult<ParsedArgs> {
    parse_from(std::env::args().skip(1))
}

pub fn parse_from(args: impl IntoIterator<Item = String>) -> GameResult<ParsedArgs> {
    let mut seed = None;
    let mut width = None;
    let mut height = None;
    let mut level_files = Vec::new();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" | "-s" => seed = Some(value(&mut iter, &arg)?),
            "--width" => width = Some(value(&mut iter, &arg)?),
            "--height" => height = Some(value(&mut iter, &arg)?),
            "--help" | "-h" => return Ok(ParsedArgs::Help),
            other if other.starts_with('-') => {
                return Err(GameError::InvalidInput(format!("unknown argument: {}", other)));
            }
            file => level_files.push(PathBuf::from(file)),
        }
    }

    let default = Field::default();
    let field = Field::new(
        width.unwrap_or(default.width()),
        height.unwrap_or(default.height()),
    )?;

    Ok(ParsedArgs::Run(Args {
        seed,
        field,
        level_files,
    }))
}

fn value<T: std::str::FromStr>(iter: &mut impl Iterator<Item = String>, flag: &str) -> GameResult<T> {
    let raw = iter
        .next()
        .ok_or_else(|| GameError::InvalidInput(format!("{} requires a value", flag)))?;
    raw.parse()
        .map_err(|_| GameError::InvalidInput(format!("invalid value for {}: {}", flag, raw)))
}
