/// Rendering layer: translates game state into `Canvas` calls.  No game
/// logic is performed here.

use std::io;

use crate::assets::Assets;
use crate::canvas::{Canvas, Color, TextAlign};
use crate::entities::{Explosion, GameState, SHIP_SIZE};

// ── Palette & layout ──────────────────────────────────────────────────────────

const C_PLAYER_SHOT: Color = Color::Yellow;
const C_AI_SHOT: Color = Color::Red;
const C_PLAYER_HEALTH: Color = Color::Green;
const C_AI_HEALTH: Color = Color::Blue;
const C_EXPLOSION: Color = Color::Orange;
const C_BANNER: Color = Color::Red;

const SHOT_W: f32 = 10.0;
const SHOT_H: f32 = 5.0;
const BAR_H: f32 = 10.0;
const EXPLOSION_RADIUS: f32 = 30.0;

pub const RESTART_HINT: &str = "Press Enter to Restart";

// ── Running frame ─────────────────────────────────────────────────────────────

/// Ships, projectiles and health bars.  The caller clears first.
pub fn draw_scene<C: Canvas>(canvas: &mut C, state: &GameState, assets: &Assets) -> io::Result<()> {
    let p = &state.player;
    canvas.draw_image(&assets.player, p.x, p.y, SHIP_SIZE, SHIP_SIZE, false)?;
    let ai = &state.ai;
    canvas.draw_image(&assets.ai, ai.x, ai.y, SHIP_SIZE, SHIP_SIZE, true)?;

    for shot in &state.player_projectiles {
        canvas.fill_rect(shot.x, shot.y, SHOT_W, SHOT_H, C_PLAYER_SHOT)?;
    }
    for shot in &state.ai_projectiles {
        canvas.fill_rect(shot.x, shot.y, SHOT_W, SHOT_H, C_AI_SHOT)?;
    }

    draw_health_bars(canvas, state)
}

/// Bar width in pixels is the health value itself.
fn draw_health_bars<C: Canvas>(canvas: &mut C, state: &GameState) -> io::Result<()> {
    canvas.fill_rect(10.0, 10.0, state.player.health as f32, BAR_H, C_PLAYER_HEALTH)?;
    let ai_bar_x = state.arena.width - 110.0;
    canvas.fill_rect(ai_bar_x, 10.0, state.ai.health as f32, BAR_H, C_AI_HEALTH)
}

pub fn draw_explosion<C: Canvas>(canvas: &mut C, explosion: &Explosion) -> io::Result<()> {
    canvas.fill_circle(explosion.x, explosion.y, EXPLOSION_RADIUS, C_EXPLOSION)
}

// ── Game-over screen ──────────────────────────────────────────────────────────

pub fn draw_game_over<C: Canvas>(canvas: &mut C, state: &GameState) -> io::Result<()> {
    let cx = state.arena.width / 2.0;
    let cy = state.arena.height / 2.0;
    canvas.clear()?;
    canvas.draw_text(state.outcome.message(), cx, cy, 48.0, TextAlign::Center, C_BANNER)?;
    canvas.draw_text(RESTART_HINT, cx, cy + 40.0, 20.0, TextAlign::Center, C_BANNER)
}
