use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use space_duel::input::*;

fn action(code: KeyCode) -> Option<Action> {
    Action::from_key(code, KeyModifiers::NONE)
}

// ── Key mapping ───────────────────────────────────────────────────────────────

#[test]
fn arrows_space_and_enter_map_to_actions() {
    assert_eq!(action(KeyCode::Up), Some(Action::MoveUp));
    assert_eq!(action(KeyCode::Down), Some(Action::MoveDown));
    assert_eq!(action(KeyCode::Char(' ')), Some(Action::Fire));
    assert_eq!(action(KeyCode::Enter), Some(Action::Restart));
}

#[test]
fn letter_aliases_map_to_movement() {
    assert_eq!(action(KeyCode::Char('w')), Some(Action::MoveUp));
    assert_eq!(action(KeyCode::Char('S')), Some(Action::MoveDown));
}

#[test]
fn quit_keys() {
    assert_eq!(action(KeyCode::Char('q')), Some(Action::Quit));
    assert_eq!(action(KeyCode::Esc), Some(Action::Quit));
    assert_eq!(
        Action::from_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
        Some(Action::Quit)
    );
    // Plain 'c' is not bound
    assert_eq!(action(KeyCode::Char('c')), None);
}

#[test]
fn unknown_keys_are_ignored() {
    assert_eq!(action(KeyCode::Left), None);
    assert_eq!(action(KeyCode::Char('x')), None);
    assert_eq!(action(KeyCode::Tab), None);
}

#[test]
fn from_event_keeps_event_kind() {
    let ev = KeyEvent::new_with_kind(KeyCode::Char(' '), KeyModifiers::NONE, KeyEventKind::Release);
    let input = KeyInput::from_event(&ev).unwrap();
    assert_eq!(input, KeyInput::release(Action::Fire));
    assert!(!input.is_down());

    let ev = KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Repeat);
    let input = KeyInput::from_event(&ev).unwrap();
    assert_eq!(input.kind, KeyKind::Repeat);
    assert!(input.is_down());

    let ev = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
    assert_eq!(KeyInput::from_event(&ev), None);
}

// ── Fire latch ────────────────────────────────────────────────────────────────

#[test]
fn latch_follows_press_and_release() {
    let mut latch = FireLatch::new();
    assert!(!latch.is_held());
    latch.press(Instant::now());
    assert!(latch.is_held());
    latch.release();
    assert!(!latch.is_held());
}

#[test]
fn latch_with_releases_never_expires() {
    let mut latch = FireLatch::new();
    let t0 = Instant::now();
    latch.press(t0);
    latch.expire(t0 + Duration::from_secs(10));
    assert!(latch.is_held());
}

#[test]
fn first_press_outlasts_initial_repeat_delay() {
    let mut latch = FireLatch::without_releases();
    let t0 = Instant::now();
    latch.press(t0);
    // OS repeat has not started yet
    latch.expire(t0 + Duration::from_millis(300));
    assert!(latch.is_held());
    latch.press(t0 + Duration::from_millis(500));
    latch.expire(t0 + Duration::from_millis(600));
    assert!(latch.is_held());
}

#[test]
fn lone_press_expires_after_first_window() {
    let mut latch = FireLatch::without_releases();
    let t0 = Instant::now();
    latch.press(t0);
    latch.expire(t0 + FIRE_FIRST_HOLD);
    assert!(latch.is_held());
    latch.expire(t0 + FIRE_FIRST_HOLD + Duration::from_millis(1));
    assert!(!latch.is_held());
}

#[test]
fn repeats_use_short_window() {
    let mut latch = FireLatch::with_hold_windows(Duration::from_millis(600), Duration::from_millis(100));
    let t0 = Instant::now();
    latch.press(t0);
    latch.press(t0 + Duration::from_millis(80));
    latch.expire(t0 + Duration::from_millis(150));
    assert!(latch.is_held());
    latch.expire(t0 + Duration::from_millis(181));
    assert!(!latch.is_held());
}

#[test]
fn press_after_expiry_starts_a_fresh_hold() {
    let mut latch = FireLatch::with_hold_windows(Duration::from_millis(600), Duration::from_millis(100));
    let t0 = Instant::now();
    latch.press(t0);
    latch.press(t0 + Duration::from_millis(50));
    latch.expire(t0 + Duration::from_millis(200));
    assert!(!latch.is_held());

    // A new tap gets the long window again, not the repeat one
    let t1 = t0 + Duration::from_millis(300);
    latch.press(t1);
    latch.expire(t1 + Duration::from_millis(400));
    assert!(latch.is_held());
}

#[test]
fn held_fire_never_drops_while_repeating() {
    let mut latch = FireLatch::without_releases();
    let t0 = Instant::now();
    latch.press(t0);
    let mut gaps = 0;
    for frame in 0..60u64 {
        let now = t0 + Duration::from_millis(frame * 16);
        // Repeats start after 500 ms, every 32 ms
        if frame * 16 >= 500 && frame % 2 == 0 {
            latch.press(now);
        }
        latch.expire(now);
        if !latch.is_held() {
            gaps += 1;
        }
    }
    assert_eq!(gaps, 0);
}
