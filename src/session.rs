/// The loop driver: owns the session, feeds it input, and runs one tick per
/// display frame in a fixed order.
///
/// The host calls `frame` once per refresh while `is_scheduled` is true.  A
/// tick that ends the game still asks for one more frame; that frame draws
/// the game-over screen and stops the loop until a restart.

use std::io;
use std::time::Instant;

use rand::Rng;
use tracing::info;

use crate::assets::Assets;
use crate::canvas::Canvas;
use crate::compute::{
    ai_step, clamp_player, init_state, move_player_down, move_player_up, player_fire, reset,
    resolve_collisions, update_projectiles,
};
use crate::entities::{Arena, Difficulty, GameState};
use crate::input::{Action, FireLatch, KeyInput, KeyKind};
use crate::render::{draw_explosion, draw_game_over, draw_scene};

/// What the host should do after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// Run another frame at the next refresh.
    Next,
    /// Stop ticking; only a restart resumes the loop.
    Stop,
}

/// Host-level result of handling a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    None,
    Restarted,
    Quit,
}

pub struct Game {
    pub state: GameState,
    pub fire: FireLatch,
    assets: Assets,
    scheduled: bool,
}

impl Game {
    /// A fresh session, reset and ready to tick.
    pub fn new(difficulty: Difficulty, arena: Arena, assets: Assets, fire: FireLatch) -> Self {
        let state = init_state(difficulty, arena);
        info!(
            difficulty = difficulty.as_str(),
            width = arena.width,
            height = arena.height,
            "session started"
        );
        Game {
            state,
            fire,
            assets,
            scheduled: true,
        }
    }

    /// Wrap an existing state, e.g. one set up by a test.
    pub fn from_state(state: GameState, assets: Assets) -> Self {
        Game {
            state,
            fire: FireLatch::new(),
            assets,
            scheduled: true,
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Apply one key event.  Movement acts on every press and repeat; fire
    /// only flips the latch; restart only works once the game is over.
    pub fn handle_key(&mut self, key: KeyInput, now: Instant) -> Command {
        match (key.action, key.kind) {
            (Action::Quit, KeyKind::Press) => Command::Quit,
            (Action::MoveUp, _) if key.is_down() => {
                move_player_up(&mut self.state);
                Command::None
            }
            (Action::MoveDown, _) if key.is_down() => {
                move_player_down(&mut self.state);
                Command::None
            }
            (Action::Fire, KeyKind::Release) => {
                self.fire.release();
                Command::None
            }
            (Action::Fire, _) => {
                self.fire.press(now);
                Command::None
            }
            (Action::Restart, KeyKind::Press) => {
                if self.restart() {
                    Command::Restarted
                } else {
                    Command::None
                }
            }
            _ => Command::None,
        }
    }

    /// Let go of a fire press the terminal never released.
    pub fn expire_input(&mut self, now: Instant) {
        self.fire.expire(now);
    }

    /// Reset and resume.  Does nothing unless the game is over, so repeated
    /// requests can never leave more than one loop running.
    pub fn restart(&mut self) -> bool {
        if !self.state.game_over {
            return false;
        }
        reset(&mut self.state);
        self.scheduled = true;
        info!(difficulty = self.state.difficulty.as_str(), "session restarted");
        true
    }

    /// Repaint the game-over screen while the loop is stopped, e.g. after
    /// the terminal was resized.  Ticks nothing.
    pub fn redraw_idle<C: Canvas>(&self, canvas: &mut C) -> io::Result<()> {
        if self.scheduled || !self.state.game_over {
            return Ok(());
        }
        draw_game_over(canvas, &self.state)
    }

    /// Run one display frame.
    pub fn frame<C: Canvas>(&mut self, canvas: &mut C, rng: &mut impl Rng) -> io::Result<Schedule> {
        if self.state.game_over {
            draw_game_over(canvas, &self.state)?;
            self.scheduled = false;
            return Ok(Schedule::Stop);
        }

        canvas.clear()?;
        ai_step(&mut self.state, rng);
        update_projectiles(&mut self.state);

        // Drawn before this tick's hits land, so bars trail by one frame.
        draw_scene(canvas, &self.state, &self.assets)?;

        for explosion in resolve_collisions(&mut self.state) {
            draw_explosion(canvas, &explosion)?;
        }
        if self.state.game_over {
            info!(outcome = self.state.outcome.message(), "session over");
        }

        if self.fire.is_held() {
            player_fire(&mut self.state);
        }
        clamp_player(&mut self.state);

        Ok(Schedule::Next)
    }
}
