/// Input sampling: raw key events in, movement nudges and a fire latch out.
///
/// Two channels are kept apart.  Movement and restart are edge-triggered and
/// act once per event; firing is level-triggered and is read every tick.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// How long the first fire press stays live on terminals that never report
/// key releases.  Covers the OS delay before a held key starts repeating,
/// which runs up to about 600 ms.
pub const FIRE_FIRST_HOLD: Duration = Duration::from_millis(650);

/// How long each auto-repeat keeps the latch live once repeats are
/// arriving.  OS key-repeat runs at ≥ 15 Hz, so a held key refreshes it well
/// inside this window.
pub const FIRE_HOLD_WINDOW: Duration = Duration::from_millis(150);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    Fire,
    Restart,
    /// Leaves the program; the simulation never sees it.
    Quit,
}

impl Action {
    /// Map a terminal key to a logical action.  Unknown keys map to `None`.
    pub fn from_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        match code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Action::MoveUp),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::MoveDown),
            KeyCode::Char(' ') => Some(Action::Fire),
            KeyCode::Enter => Some(Action::Restart),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    Press,
    /// OS auto-repeat while the key is held.
    Repeat,
    Release,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyInput {
    pub action: Action,
    pub kind: KeyKind,
}

impl KeyInput {
    pub fn press(action: Action) -> Self {
        KeyInput { action, kind: KeyKind::Press }
    }

    pub fn release(action: Action) -> Self {
        KeyInput { action, kind: KeyKind::Release }
    }

    /// Translate a crossterm key event; keys with no action yield `None`.
    pub fn from_event(event: &KeyEvent) -> Option<KeyInput> {
        let action = Action::from_key(event.code, event.modifiers)?;
        let kind = match event.kind {
            KeyEventKind::Press => KeyKind::Press,
            KeyEventKind::Repeat => KeyKind::Repeat,
            KeyEventKind::Release => KeyKind::Release,
        };
        Some(KeyInput { action, kind })
    }

    /// Press and Repeat both count as the key going (or staying) down.
    pub fn is_down(&self) -> bool {
        matches!(self.kind, KeyKind::Press | KeyKind::Repeat)
    }
}

/// Level-triggered fire state.
#[derive(Clone, Debug)]
pub struct FireLatch {
    held: bool,
    /// A second press arrived while held, i.e. OS auto-repeat is running.
    repeating: bool,
    last_seen: Option<Instant>,
    /// `(first, repeat)` windows; `None` when the terminal reports releases
    /// and the latch never expires.
    hold_windows: Option<(Duration, Duration)>,
}

impl FireLatch {
    /// Latch for a terminal that reports key releases.
    pub fn new() -> Self {
        FireLatch {
            held: false,
            repeating: false,
            last_seen: None,
            hold_windows: None,
        }
    }

    /// Latch for a terminal that only reports presses, using the default
    /// windows.
    pub fn without_releases() -> Self {
        FireLatch::with_hold_windows(FIRE_FIRST_HOLD, FIRE_HOLD_WINDOW)
    }

    /// The latch lets go on its own once `first` passes after the initial
    /// press with no repeat, or `repeat` passes after the latest repeat.
    pub fn with_hold_windows(first: Duration, repeat: Duration) -> Self {
        FireLatch {
            hold_windows: Some((first, repeat)),
            ..FireLatch::new()
        }
    }

    /// Press or auto-repeat.  Terminals without the keyboard protocol send
    /// repeats as plain presses, so any press while held counts as one.
    pub fn press(&mut self, now: Instant) {
        self.repeating = self.held;
        self.held = true;
        self.last_seen = Some(now);
    }

    pub fn release(&mut self) {
        self.held = false;
        self.repeating = false;
        self.last_seen = None;
    }

    /// Drop a stale press.  No-op when releases are reported.
    pub fn expire(&mut self, now: Instant) {
        let (Some((first, repeat)), Some(seen)) = (self.hold_windows, self.last_seen) else {
            return;
        };
        let window = if self.repeating { repeat } else { first };
        if now.saturating_duration_since(seen) > window {
            self.release();
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

impl Default for FireLatch {
    fn default() -> Self {
        FireLatch::new()
    }
}
