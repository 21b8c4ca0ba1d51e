/// Errors surfaced by the host side of the game: configuration, sprite
/// loading, logging setup and terminal I/O.  The simulation itself never
/// fails.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    /// Arena dimensions that cannot hold both ships.
    #[error("invalid arena {width}x{height}: need width > 150 and height >= 50")]
    InvalidArena { width: f32, height: f32 },

    #[error("invalid frame rate {0}: must be between 1 and 240")]
    InvalidFrameRate(u32),

    /// A sprite file could not be read.
    #[error("cannot load sprite {}: {source}", path.display())]
    Asset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A sprite file was read but holds no drawable characters.
    #[error("sprite {} is empty", .0.display())]
    EmptySprite(PathBuf),

    #[error("log setup failed: {0}")]
    Logging(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type GameResult<T> = Result<T, GameError>;
