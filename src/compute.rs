/// Game-logic functions.
///
/// Every public function takes the session `GameState` explicitly (and, where
/// needed, an RNG handle).  Nothing here draws or touches the terminal; the
/// collision pass reports explosions instead of drawing them so the loop
/// driver decides when they reach the canvas.

use rand::Rng;
use tracing::debug;

use crate::entities::{
    Arena, Difficulty, Direction, Explosion, GameState, Outcome, Projectile, Ship, Side,
    HIT_DAMAGE, PLAYER_HEALTH, SHIP_SIZE,
};

// ── AI tuning ─────────────────────────────────────────────────────────────────

/// Chance per tick that the AI steps toward the player.
pub const AI_MOVE_CHANCE: f64 = 0.489;

/// Chance per tick that an aligned AI fires.
pub const AI_FIRE_CHANCE: f64 = 0.05;

/// Vertical distance under which the AI counts as aligned with the player.
pub const AI_ALIGN_DISTANCE: f32 = 30.0;

/// Vertical nudge applied per move-up/move-down key event.
pub const PLAYER_NUDGE: f32 = 4.0;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh session with both ships vertically centred.
pub fn init_state(difficulty: Difficulty, arena: Arena) -> GameState {
    let mid_y = arena.height / 2.0 - SHIP_SIZE / 2.0;
    let mut state = GameState {
        player: Ship {
            x: 50.0,
            y: mid_y,
            health: PLAYER_HEALTH,
        },
        ai: Ship {
            x: arena.width - 100.0,
            y: mid_y,
            health: difficulty.ai_health(),
        },
        player_projectiles: Vec::new(),
        ai_projectiles: Vec::new(),
        ai_speed: difficulty.ai_speed(),
        game_over: false,
        outcome: Outcome::None,
        explosion_shown: false,
        difficulty,
        arena,
    };
    reset(&mut state);
    state
}

/// Put the session back to its starting values.  Ship positions and the
/// difficulty carry over unchanged.
pub fn reset(state: &mut GameState) {
    state.player.health = PLAYER_HEALTH;
    state.ai.health = state.difficulty.ai_health();
    state.explosion_shown = false;
    state.player_projectiles.clear();
    state.ai_projectiles.clear();
    state.outcome = Outcome::None;
    state.game_over = false;
    state.ai_speed = state.difficulty.ai_speed();
}

// ── Input-driven transitions ─────────────────────────────────────────────────

/// One-shot nudge per key event.  Not clamped here; the end of the next tick
/// pulls the ship back inside the arena.
pub fn move_player_up(state: &mut GameState) {
    state.player.y -= PLAYER_NUDGE;
}

pub fn move_player_down(state: &mut GameState) {
    state.player.y += PLAYER_NUDGE;
}

/// Spawn a projectile from the player's nose, heading right.
pub fn player_fire(state: &mut GameState) {
    let p = &state.player;
    let shot = Projectile::new(p.x + SHIP_SIZE, p.y + SHIP_SIZE / 2.0, Direction::Right);
    state.player_projectiles.push(shot);
}

pub fn clamp_player(state: &mut GameState) {
    let arena = state.arena;
    state.player.clamp_y(&arena);
}

// ── AI controller ────────────────────────────────────────────────────────────

/// Run the AI heuristic for one tick.  All randomness comes through `rng`
/// so callers control determinism.
pub fn ai_step(state: &mut GameState, rng: &mut impl Rng) {
    if state.game_over {
        return;
    }

    // 1. Full step toward the player, no easing.
    if rng.gen_bool(AI_MOVE_CHANCE) {
        if state.ai.y > state.player.y {
            state.ai.y -= state.ai_speed;
        } else {
            state.ai.y += state.ai_speed;
        }
    }

    // 2. Keep the sprite on screen.
    let arena = state.arena;
    state.ai.clamp_y(&arena);

    // 3. Fire when roughly aligned.
    if (state.player.y - state.ai.y).abs() < AI_ALIGN_DISTANCE && rng.gen_bool(AI_FIRE_CHANCE) {
        let shot = Projectile::new(state.ai.x, state.ai.y + SHIP_SIZE / 2.0, Direction::Left);
        state.ai_projectiles.push(shot);
    }

    // 4. Dodge.  Each overlapping projectile nudges independently; the ship
    //    moves as it goes, so later tests see the updated position.
    for shot in &state.player_projectiles {
        if state.ai.contains(shot.x, shot.y) {
            if shot.y < state.ai.y + SHIP_SIZE / 2.0 {
                state.ai.y += state.ai_speed;
            } else {
                state.ai.y -= state.ai_speed;
            }
        }
    }
}

// ── Projectile updater ───────────────────────────────────────────────────────

/// Advance every projectile and drop the ones that left the arena.
pub fn update_projectiles(state: &mut GameState) {
    let width = state.arena.width;

    for shot in state.player_projectiles.iter_mut() {
        shot.x += shot.speed * shot.direction.sign();
    }
    state.player_projectiles.retain(|shot| shot.x <= width);

    for shot in state.ai_projectiles.iter_mut() {
        shot.x += shot.speed * shot.direction.sign();
    }
    state.ai_projectiles.retain(|shot| shot.x >= 0.0);
}

// ── Collision & outcome resolver ─────────────────────────────────────────────

/// Apply projectile hits, then settle the outcome.
///
/// Returns the explosions to draw, in the order they happened.  Every hit on
/// the player explodes; the AI only explodes once, the first time its health
/// reaches zero in a session.  When both ships die on the same tick the
/// player-loss check runs last and wins.
pub fn resolve_collisions(state: &mut GameState) -> Vec<Explosion> {
    let mut explosions = Vec::new();

    let mut kept = Vec::with_capacity(state.player_projectiles.len());
    for shot in state.player_projectiles.drain(..) {
        if !state.ai.contains(shot.x, shot.y) {
            kept.push(shot);
            continue;
        }
        state.ai.health -= HIT_DAMAGE;
        if state.ai.health <= 0 && !state.explosion_shown {
            state.explosion_shown = true;
            let (x, y) = state.ai.center();
            debug!(x, y, "ai destroyed");
            explosions.push(Explosion { x, y, side: Side::Ai });
        }
    }
    state.player_projectiles = kept;

    let mut kept = Vec::with_capacity(state.ai_projectiles.len());
    for shot in state.ai_projectiles.drain(..) {
        if !state.player.contains(shot.x, shot.y) {
            kept.push(shot);
            continue;
        }
        let (x, y) = state.player.center();
        explosions.push(Explosion { x, y, side: Side::Player });
        state.player.health -= HIT_DAMAGE;
        debug!(health = state.player.health, "player hit");
    }
    state.ai_projectiles = kept;

    if state.ai.health <= 0 {
        state.outcome = Outcome::PlayerWin;
        state.game_over = true;
    }
    if state.player.health <= 0 {
        state.outcome = Outcome::PlayerLose;
        state.game_over = true;
    }

    explosions
}
