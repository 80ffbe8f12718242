//! Level file loading
//!
//! A level file lists one object per line as `TYPE @ X, Y`, for example
//! `PLANET @ 120.5, 300`. Planets are listed in delivery order.

use std::fs;
use std::path::Path;

use glam::Vec2;

use crate::models::constants::EntityKind;
use crate::models::errors::{GameError, GameResult};

/// One object placed by a level file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityRecord {
    pub kind: EntityKind,
    pub position: Vec2,
}

/// Read and parse a level file.
pub fn load_level_file(path: &Path) -> GameResult<Vec<EntityRecord>> {
    let text = fs::read_to_string(path)?;
    parse_level(&text)
}

/// Parse level file text.
///
/// Lines without an `@` marker or with an unknown type are skipped. A
/// known type with coordinates that do not parse fails the whole file.
pub fn parse_level(text: &str) -> GameResult<Vec<EntityRecord>> {
    let mut records = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let mut tokens = line.split_whitespace();
        let (Some(type_token), Some("@")) = (tokens.next(), tokens.next()) else {
            continue;
        };
        let Some(kind) = EntityKind::from_token(type_token) else {
            continue;
        };

        let coordinates: String = tokens.collect::<Vec<_>>().join(" ");
        let position = parse_coordinates(&coordinates).map_err(|message| GameError::Parse {
            line: line_number,
            message,
        })?;
        records.push(EntityRecord { kind, position });
    }

    Ok(records)
}

fn parse_coordinates(text: &str) -> Result<Vec2, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected `X, Y`, found `{}`", text))?;
    let x: f32 = x
        .trim()
        .parse()
        .map_err(|e| format!("bad X coordinate `{}`: {}", x.trim(), e))?;
    let y: f32 = y
        .trim()
        .parse()
        .map_err(|e| format!("bad Y coordinate `{}`: {}", y.trim(), e))?;
    Ok(Vec2::new(x, y))
}
