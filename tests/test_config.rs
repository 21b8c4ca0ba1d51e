use std::time::Duration;

use clap::Parser;
use space_duel::config::Config;
use space_duel::entities::{Arena, Difficulty};
use space_duel::error::GameError;

fn parse(args: &[&str]) -> Config {
    let mut argv = vec!["space_duel"];
    argv.extend_from_slice(args);
    Config::try_parse_from(argv).unwrap()
}

#[test]
fn defaults() {
    let c = parse(&[]);
    assert_eq!(c.difficulty, Difficulty::Easy);
    assert_eq!(c.arena().unwrap(), Arena { width: 800.0, height: 400.0 });
    assert_eq!(c.fps, 60);
    assert!(c.seed.is_none());
    assert!(c.log_file.is_none());
}

#[test]
fn difficulty_flag() {
    let c = parse(&["--difficulty", "hard"]);
    assert_eq!(c.difficulty, Difficulty::Hard);
}

#[test]
fn unknown_difficulty_rejected() {
    assert!(Config::try_parse_from(["space_duel", "--difficulty", "medium"]).is_err());
}

#[test]
fn custom_arena() {
    let c = parse(&["--width", "640", "--height", "320", "--seed", "9"]);
    assert_eq!(c.arena().unwrap(), Arena { width: 640.0, height: 320.0 });
    assert_eq!(c.seed, Some(9));
}

#[test]
fn arena_too_small_rejected() {
    let c = parse(&["--width", "150"]);
    assert!(matches!(c.arena(), Err(GameError::InvalidArena { .. })));
    let c = parse(&["--height", "49"]);
    assert!(matches!(c.arena(), Err(GameError::InvalidArena { .. })));
}

#[test]
fn frame_period_from_fps() {
    let c = parse(&["--fps", "50"]);
    assert_eq!(c.frame_period().unwrap(), Duration::from_millis(20));
}

#[test]
fn frame_rate_bounds() {
    let c = parse(&["--fps", "0"]);
    assert!(matches!(c.frame_period(), Err(GameError::InvalidFrameRate(0))));
    let c = parse(&["--fps", "241"]);
    assert!(matches!(c.frame_period(), Err(GameError::InvalidFrameRate(241))));
}
