use crate::io::{Canvas, OutputWriter};
use crate::models::sprite::Sprite;
use crate::models::taxi::Taxi;

pub struct HudPresenter;

impl HudPresenter {
    /// Status text for the upper-left corner of the screen.
    pub fn status(taxi: &Taxi, fares_completed: usize, total_fares: usize) -> String {
        if taxi.fuel() <= 0.0 && !taxi.has_crashed() {
            "You've run out of fuel!\nPress the SPACEBAR to end this game.".to_string()
        } else if taxi.has_crashed() {
            "You've crashed into a planet!\nPress the SPACEBAR to end this game.".to_string()
        } else {
            format!(
                "Fuel: {}\nFares: {}/{}",
                taxi.fuel(),
                fares_completed,
                total_fares
            )
        }
    }

    pub fn level_complete(level_number: usize) -> String {
        format!("Level {} complete!\nGet ready for the next route...", level_number)
    }

    pub fn game_over() -> String {
        "GAME OVER".to_string()
    }

    pub fn all_levels_complete(levels: usize) -> String {
        format!("All {} routes delivered. Thanks for flying!", levels)
    }
}

/// Canvas that describes each sprite as a line of text.
#[derive(Default)]
pub struct TextCanvas {
    lines: Vec<String>,
}

impl TextCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flush(&mut self, output: &mut dyn OutputWriter) {
        for line in self.lines.drain(..) {
            output.writeln(&line);
        }
    }
}

impl Canvas for TextCanvas {
    fn draw(&mut self, sprite: &Sprite) {
        let position = sprite.position();
        self.lines.push(format!(
            "{:<12}{:>8.1},{:>8.1}  heading {:.2}",
            sprite.appearance().name(),
            position.x,
            position.y,
            sprite.heading()
        ));
    }
}
