use thiserror::Error;

/// Game-specific error types
#[derive(Debug, Error)]
pub enum GameError {
    /// I/O error occurred (level file, terminal)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A level file line could not be parsed
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    /// A level file parsed but cannot be played
    #[error("Level has no {0}")]
    IncompleteLevel(&'static str),
    /// Random planet placement found no free spot
    #[error("Could not place planet {placed} without overlap after {attempts} attempts")]
    PlacementExhausted { placed: usize, attempts: u32 },
    /// Field extent is not strictly positive
    #[error("Invalid field size {width}x{height}")]
    InvalidField { width: f32, height: f32 },
    /// Invalid input provided by user
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;
