/// Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::entities::{Arena, Difficulty};
use crate::error::{GameError, GameResult};

#[derive(Parser, Debug, Clone)]
#[command(name = "space_duel")]
#[command(about = "Terminal spaceship duel against a simple AI. ↑/↓ move, SPACE fires, ENTER restarts, Q quits.")]
pub struct Config {
    /// AI strength: hard doubles its health and speeds it up
    #[arg(long, value_enum, default_value_t = Difficulty::Easy)]
    pub difficulty: Difficulty,

    /// Arena width in pixels
    #[arg(long, default_value_t = 800.0)]
    pub width: f32,

    /// Arena height in pixels
    #[arg(long, default_value_t = 400.0)]
    pub height: f32,

    /// Ticks per second
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Seed for the AI's random choices; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Text file with character art for the player ship
    #[arg(long)]
    pub player_sprite: Option<PathBuf>,

    /// Text file with character art for the AI ship
    #[arg(long)]
    pub ai_sprite: Option<PathBuf>,

    /// Write logs to this file (filter via RUST_LOG, default info)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// The arena, checked for room to hold both ships.
    pub fn arena(&self) -> GameResult<Arena> {
        let (width, height) = (self.width, self.height);
        if !width.is_finite() || !height.is_finite() || width <= 150.0 || height < 50.0 {
            return Err(GameError::InvalidArena { width, height });
        }
        Ok(Arena { width, height })
    }

    pub fn frame_period(&self) -> GameResult<Duration> {
        if !(1..=240).contains(&self.fps) {
            return Err(GameError::InvalidFrameRate(self.fps));
        }
        Ok(Duration::from_secs(1) / self.fps)
    }
}
