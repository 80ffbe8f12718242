use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use warp_taxi::cli::{self, ParsedArgs};
use warp_taxi::io::TerminalIO;
use warp_taxi::models::errors::GameResult;
use warp_taxi::services::game::Game;
use warp_taxi::GameEngine;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warp_taxi=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> GameResult<()> {
    let args = match cli::parse()? {
        ParsedArgs::Run(args) => args,
        ParsedArgs::Help => {
            println!("{}", cli::args::USAGE);
            return Ok(());
        }
    };

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });

    println!("*** WARP TAXI ***");
    println!("SEED {}", seed);
    println!("TYPE help FOR COMMANDS");
    println!();

    let engine = GameEngine::new(seed, args.field, args.level_files)?;
    let mut game = Game::new(engine);
    let mut terminal = TerminalIO;
    let mut output = TerminalIO;
    game.run(&mut terminal, &mut output)
}
