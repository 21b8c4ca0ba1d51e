/// All game entity types: plain data, no logic beyond small lookups.

use clap::ValueEnum;

/// Ships are square sprites of this many arena pixels per side.
pub const SHIP_SIZE: f32 = 50.0;

/// Every projectile travels this many pixels per tick.
pub const PROJECTILE_SPEED: f32 = 5.0;

/// Health removed by a single registered hit.
pub const HIT_DAMAGE: i32 = 10;

pub const PLAYER_HEALTH: i32 = 100;

// ── Difficulty ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    /// AI starting health for a fresh session.
    pub fn ai_health(&self) -> i32 {
        match self {
            Difficulty::Easy => 100,
            Difficulty::Hard => 200,
        }
    }

    /// AI vertical step per movement or dodge.
    pub fn ai_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 3.567,
            Difficulty::Hard => 5.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }
}

// ── Session outcome ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    None,
    PlayerWin,
    PlayerLose,
}

impl Outcome {
    /// Banner shown on the game-over screen.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::None => "",
            Outcome::PlayerWin => "You Win!",
            Outcome::PlayerLose => "You Lose!",
        }
    }
}

// ── Arena ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    /// Largest y at which a full ship sprite still fits.
    pub fn max_ship_y(&self) -> f32 {
        self.height - SHIP_SIZE
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward the AI (+x).
    Right,
    /// Toward the player (−x).
    Left,
}

impl Direction {
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Right => 1.0,
            Direction::Left => -1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub direction: Direction,
}

impl Projectile {
    pub fn new(x: f32, y: f32, direction: Direction) -> Self {
        Projectile {
            x,
            y,
            speed: PROJECTILE_SPEED,
            direction,
        }
    }
}

// ── Ships ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    /// Fixed per side.
    pub x: f32,
    pub y: f32,
    /// May dip below zero for the remainder of the tick that kills the ship.
    pub health: i32,
}

impl Ship {
    /// Strict point-in-box test against the ship's 50×50 bounds; edges miss.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x > self.x && x < self.x + SHIP_SIZE && y > self.y && y < self.y + SHIP_SIZE
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + SHIP_SIZE / 2.0, self.y + SHIP_SIZE / 2.0)
    }

    pub fn clamp_y(&mut self, arena: &Arena) {
        if self.y < 0.0 {
            self.y = 0.0;
        }
        if self.y + SHIP_SIZE > arena.height {
            self.y = arena.max_ship_y();
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The whole session.  Passed explicitly into every update function; there
/// is no ambient state anywhere in the crate.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Ship,
    pub ai: Ship,
    /// Insertion-ordered; travel rightward.
    pub player_projectiles: Vec<Projectile>,
    /// Insertion-ordered; travel leftward.
    pub ai_projectiles: Vec<Projectile>,
    pub ai_speed: f32,
    pub game_over: bool,
    pub outcome: Outcome,
    /// Latched once the AI's defeat explosion has been drawn.
    pub explosion_shown: bool,
    /// Read by reset, never written by it.
    pub difficulty: Difficulty,
    pub arena: Arena,
}

// ── Explosions ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Player,
    Ai,
}

/// A one-frame explosion produced by the collision pass, drawn centred on
/// the ship that was hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Explosion {
    pub x: f32,
    pub y: f32,
    pub side: Side,
}
