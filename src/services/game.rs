//! Terminal host
//!
//! Plays the game one typed line per frame, standing in for a graphical
//! host loop.

use glam::Vec2;

use crate::game_engine::GameEngine;
use crate::io::{FrameInput, InputReader, Key, OutputWriter};
use crate::models::constants::DEFAULT_FRAME_MS;
use crate::models::errors::{GameError, GameResult};
use crate::ui::presenters::TextCanvas;

/// One parsed command line.
#[derive(Debug)]
pub enum Command {
    Frame { input: FrameInput, elapsed_ms: u32 },
    Look,
    Help,
    Quit,
}

/// Parse a command line.
///
/// A frame line is any mix of direction words, `space`, `click X Y` and
/// one number of elapsed milliseconds. An empty line is an idle frame.
pub fn parse_command(line: &str) -> GameResult<Command> {
    let mut tokens = line.split_whitespace().peekable();

    match tokens.peek().map(|t| t.to_ascii_lowercase()) {
        Some(t) if t == "q" || t == "quit" => return Ok(Command::Quit),
        Some(t) if t == "look" => return Ok(Command::Look),
        Some(t) if t == "help" || t == "?" => return Ok(Command::Help),
        _ => {}
    }

    let mut input = FrameInput::new();
    let mut elapsed_ms = None;

    while let Some(token) = tokens.next() {
        input = match token.to_ascii_lowercase().as_str() {
            "w" | "up" => input.hold(Key::Up),
            "s" | "down" => input.hold(Key::Down),
            "a" | "left" => input.hold(Key::Left),
            "d" | "right" => input.hold(Key::Right),
            "space" => input.press(Key::Acknowledge),
            "click" => {
                let x = next_number(&mut tokens, "click X")?;
                let y = next_number(&mut tokens, "click Y")?;
                input.click(Vec2::new(x, y))
            }
            other => match other.parse::<u32>() {
                Ok(ms) if elapsed_ms.is_none() => {
                    elapsed_ms = Some(ms);
                    input
                }
                Ok(_) => {
                    return Err(GameError::InvalidInput(
                        "only one frame length per line".to_string(),
                    ))
                }
                Err(_) => {
                    return Err(GameError::InvalidInput(format!("unknown command `{}`", token)))
                }
            },
        };
    }

    Ok(Command::Frame {
        input,
        elapsed_ms: elapsed_ms.unwrap_or(DEFAULT_FRAME_MS),
    })
}

fn next_number<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> GameResult<f32> {
    let token = tokens
        .next()
        .ok_or_else(|| GameError::InvalidInput(format!("missing {}", what)))?;
    token
        .parse()
        .map_err(|_| GameError::InvalidInput(format!("bad {} `{}`", what, token)))
}

pub struct Game {
    engine: GameEngine,
}

impl Game {
    pub fn new(engine: GameEngine) -> Self {
        Game { engine }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Read commands until the session finishes, the player types quit, or
    /// input runs out.
    pub fn run(
        &mut self,
        io: &mut dyn InputReader,
        output: &mut dyn OutputWriter,
    ) -> GameResult<()> {
        output.writeln(&format!("LEVEL {}", self.engine.level_number()));
        output.writeln(&self.engine.hud_message());

        while !self.engine.is_finished() {
            let Some(line) = io.read_line(">")? else {
                break;
            };

            let result = match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => {
                    Self::print_command_menu(output);
                    Ok(())
                }
                Ok(Command::Look) => {
                    let mut canvas = TextCanvas::new();
                    self.engine.draw(&mut canvas);
                    canvas.flush(output);
                    Ok(())
                }
                Ok(Command::Frame { input, elapsed_ms }) => self.step(&input, elapsed_ms, output),
                Err(e) => Err(e),
            };

            // Bad commands are reported and the game carries on
            if let Err(e) = result {
                output.writeln(&format!("Error: {}", e));
            }
        }
        Ok(())
    }

    fn step(
        &mut self,
        input: &FrameInput,
        elapsed_ms: u32,
        output: &mut dyn OutputWriter,
    ) -> GameResult<()> {
        let level_before = self.engine.level_number();
        self.engine.frame(elapsed_ms, input)?;
        if self.engine.level_number() != level_before {
            output.writeln(&format!("LEVEL {}", self.engine.level_number()));
        }
        output.writeln(&self.engine.hud_message());
        Ok(())
    }

    fn print_command_menu(output: &mut dyn OutputWriter) {
        output.writeln("   w a s d / up down left right = FIRE THRUSTERS");
        output.writeln("   click X Y                    = WARP TO STAR AT X,Y");
        output.writeln("   space                        = ACKNOWLEDGE");
        output.writeln("   <number>                     = FRAME LENGTH IN MS");
        output.writeln("   look                         = LIST EVERYTHING ON THE FIELD");
        output.writeln("   q                            = QUIT");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::{MockInput, MockOutput};
    use crate::io::Controls;
    use crate::models::field::Field;

    fn frame(line: &str) -> (FrameInput, u32) {
        match parse_command(line).unwrap() {
            Command::Frame { input, elapsed_ms } => (input, elapsed_ms),
            other => panic!("expected a frame, got {:?}", other),
        }
    }

    #[test]
    fn empty_line_is_idle_default_frame() {
        let (input, ms) = frame("");
        assert!(input.is_idle());
        assert_eq!(ms, DEFAULT_FRAME_MS);
    }

    #[test]
    fn directions_and_duration() {
        let (input, ms) = frame("d UP 250");
        assert!(input.is_key_held(Key::Right));
        assert!(input.is_key_held(Key::Up));
        assert!(!input.is_key_held(Key::Left));
        assert_eq!(ms, 250);
    }

    #[test]
    fn click_sets_pointer() {
        let (input, _) = frame("click 12.5 40");
        assert!(input.is_key_pressed(Key::Activate));
        assert_eq!(input.pointer(), Vec2::new(12.5, 40.0));
    }

    #[test]
    fn space_presses_acknowledge() {
        let (input, _) = frame("space");
        assert!(input.is_key_pressed(Key::Acknowledge));
    }

    #[test]
    fn rejects_unknown_words_and_bad_clicks() {
        assert!(parse_command("jump").is_err());
        assert!(parse_command("click 1").is_err());
        assert!(parse_command("click x 1").is_err());
        assert!(parse_command("10 20").is_err());
    }

    #[test]
    fn quit_look_help() {
        assert!(matches!(parse_command("Q").unwrap(), Command::Quit));
        assert!(matches!(parse_command("look").unwrap(), Command::Look));
        assert!(matches!(parse_command("?").unwrap(), Command::Help));
    }

    #[test]
    fn run_prints_hud_each_frame_and_stops_at_end_of_input() {
        let engine = GameEngine::new(42, Field::default(), Vec::new()).unwrap();
        let mut game = Game::new(engine);
        let mut io = MockInput::new(vec!["", "look", "bogus", "help"]);
        let mut output = MockOutput::new();

        game.run(&mut io, &mut output).unwrap();
        assert!(output.contains("LEVEL 1"));
        assert!(output.contains("Fuel:"));
        assert!(output.contains("TAXI"));
        assert!(output.contains("Error: Invalid input: unknown command `bogus`"));
        assert!(output.contains("FIRE THRUSTERS"));
    }

    #[test]
    fn run_ends_after_acknowledged_crash() {
        let mut engine = GameEngine::new(42, Field::default(), Vec::new()).unwrap();
        engine.level_mut().taxi_mut().crash();
        let mut game = Game::new(engine);
        let mut io = MockInput::new(vec!["space", "5000", "never read"]);
        let mut output = MockOutput::new();

        game.run(&mut io, &mut output).unwrap();
        assert!(game.engine().is_finished());
        assert!(output.contains("GAME OVER"));
    }
}
