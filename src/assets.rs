/// Ship sprites as character art.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{GameError, GameResult};

/// Nose points right; the AI draws it mirrored.
const SHIP_ART: &str = " |\\  \n=[##>\n |/  ";

/// A drawable image.  The empty image stands in for one that is not loaded
/// and renders as nothing.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Image {
    rows: Vec<String>,
}

impl Image {
    pub fn empty() -> Self {
        Image::default()
    }

    pub fn from_art(art: &str) -> Self {
        Image {
            rows: art.lines().map(|l| l.trim_end().to_string()).collect(),
        }
    }

    pub fn load(path: &Path) -> GameResult<Image> {
        let text = fs::read_to_string(path).map_err(|source| GameError::Asset {
            path: path.to_path_buf(),
            source,
        })?;
        let image = Image::from_art(&text);
        if !image.is_loaded() {
            return Err(GameError::EmptySprite(path.to_path_buf()));
        }
        Ok(image)
    }

    /// True when there is at least one visible character to draw.
    pub fn is_loaded(&self) -> bool {
        self.rows.iter().any(|r| r.chars().any(|c| !c.is_whitespace()))
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Widest row, in characters.
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0)
    }
}

#[derive(Clone, Debug)]
pub struct Assets {
    pub player: Image,
    pub ai: Image,
}

impl Assets {
    /// The same built-in ship for both sides.
    pub fn builtin() -> Self {
        Assets {
            player: Image::from_art(SHIP_ART),
            ai: Image::from_art(SHIP_ART),
        }
    }

    /// Built-in art, with any given sprite files swapped in.  A file that
    /// fails to load leaves its slot empty; the game still runs.
    pub fn load(player: Option<&Path>, ai: Option<&Path>) -> Self {
        let mut assets = Assets::builtin();
        if let Some(path) = player {
            assets.player = load_or_empty(path);
        }
        if let Some(path) = ai {
            assets.ai = load_or_empty(path);
        }
        assets
    }
}

fn load_or_empty(path: &Path) -> Image {
    match Image::load(path) {
        Ok(image) => image,
        Err(err) => {
            warn!(%err, "sprite unavailable, drawing nothing in its place");
            Image::empty()
        }
    }
}
