mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    style, terminal, ExecutableCommand, QueueableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use display::TerminalCanvas;
use space_duel::assets::Assets;
use space_duel::config::Config;
use space_duel::error::{GameError, GameResult};
use space_duel::input::{FireLatch, KeyInput};
use space_duel::session::{Command, Game};

/// How long to idle between input polls while the loop is stopped.
const IDLE_POLL: Duration = Duration::from_millis(50);

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is ours while playing, so logs only go to a file.
fn init_logging(config: &Config) -> GameResult<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| GameError::Logging(e.to_string()))
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Drain input, then tick once per frame period while the session is
/// scheduled.  Returns when the player quits.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
    frame_period: Duration,
) -> GameResult<()> {
    let mut needs_redraw = false;
    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let key = match ev {
                Event::Key(key) => key,
                Event::Resize(..) => {
                    needs_redraw = true;
                    continue;
                }
                _ => continue,
            };
            let Some(input) = KeyInput::from_event(&key) else { continue };
            match game.handle_key(input, frame_start) {
                Command::Quit => return Ok(()),
                // The next tick repaints everything.
                Command::Restarted => needs_redraw = false,
                Command::None => {}
            }
        }
        game.expire_input(frame_start);

        if game.is_scheduled() || needs_redraw {
            let (cols, rows) = terminal::size()?;
            let arena = game.state.arena;
            let mut canvas = TerminalCanvas::new(out, cols, rows, arena);
            if game.is_scheduled() {
                game.frame(&mut canvas, rng)?;
            } else {
                game.redraw_idle(&mut canvas)?;
            }
            needs_redraw = false;
            out.queue(style::ResetColor)?;
            out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
            out.flush()?;
        }

        let budget = if game.is_scheduled() { frame_period } else { IDLE_POLL };
        let elapsed = frame_start.elapsed();
        if elapsed < budget {
            thread::sleep(budget - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> GameResult<()> {
    let config = Config::parse();
    let arena = config.arena()?;
    let frame_period = config.frame_period()?;
    init_logging(&config)?;

    let assets = Assets::load(config.player_sprite.as_deref(), config.ai_sprite.as_deref());
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Key releases let the fire latch drop the moment Space comes up.
    // Terminals without the keyboard protocol fall back to hold windows.
    let keyboard_enhanced = matches!(terminal::supports_keyboard_enhancement(), Ok(true))
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    info!(keyboard_enhanced, "terminal ready");
    let fire = if keyboard_enhanced {
        FireLatch::new()
    } else {
        FireLatch::without_releases()
    };

    // Blocking reads live on their own thread so the loop never waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let mut game = Game::new(config.difficulty, arena, assets, fire);
    let result = game_loop(&mut out, &mut game, &mut rng, &rx, frame_period);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(style::ResetColor);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("exiting");
    result
}
