//! Driver + key map: the host loop without a terminal

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use ferris_blocks::core::{Board, GameConfig, GameState};
use ferris_blocks::driver::{Driver, DriverConfig, LoopControl};
use ferris_blocks::input::{handle_key_event, should_quit};
use ferris_blocks::types::PieceKind;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn press(driver: &mut Driver, code: KeyCode, now: Instant) -> bool {
    match handle_key_event(KeyEvent::from(code)) {
        Some(action) => driver.apply(action, now),
        None => false,
    }
}

fn dot_driver(rows: &[&str]) -> Driver {
    let board = Board::from_rows(rows).unwrap();
    let game =
        GameState::with_board(GameConfig::default().with_pieces(&[PieceKind::Dot]), board).unwrap();
    Driver::with_game(game, DriverConfig::default())
}

#[test]
fn test_keys_drive_the_piece() {
    let mut driver = dot_driver(&["....", "....", "....", "...."]);
    let t0 = Instant::now();
    driver.start(t0);

    assert!(press(&mut driver, KeyCode::Left, t0));
    assert!(press(&mut driver, KeyCode::Left, t0));
    assert!(!press(&mut driver, KeyCode::Left, t0));
    assert_eq!(driver.game().active().unwrap().x, 0);

    assert!(press(&mut driver, KeyCode::Down, t0));
    assert_eq!(driver.game().active().unwrap().y, 1);

    // Space rotates; a dot has nothing to rotate.
    assert!(!press(&mut driver, KeyCode::Char(' '), t0));

    // Up hard-drops.
    assert!(press(&mut driver, KeyCode::Up, t0));
    assert_eq!(driver.game().board().get(0, 3), Some(Some(PieceKind::Dot)));
}

#[test]
fn test_simulated_loop_runs_until_game_over() {
    let mut driver = dot_driver(&["...", "...", "..."]);
    let t0 = Instant::now();
    driver.start(t0);

    let mut now = t0;
    let mut frames = 0;
    loop {
        now += ms(100);
        frames += 1;
        if driver.frame(now) == LoopControl::Stop {
            break;
        }
        assert!(frames < 1000, "loop should stop once the column fills");
    }

    assert!(driver.game().game_over());
    // Three dots stacked in the middle column.
    assert_eq!(driver.game().pieces_locked(), 3);
}

#[test]
fn test_key_presses_delay_gravity() {
    let mut driver = dot_driver(&["....", "....", "....", "...."]);
    let t0 = Instant::now();
    driver.start(t0);

    // A key every 300ms keeps resetting the timer.
    for i in 1..=5 {
        let now = t0 + ms(300 * i);
        driver.frame(now);
        press(&mut driver, KeyCode::Right, now);
        press(&mut driver, KeyCode::Left, now);
    }
    assert_eq!(driver.game().active().unwrap().y, 0);
}

#[test]
fn test_quit_is_not_an_action() {
    let q = KeyEvent::from(KeyCode::Char('q'));
    assert!(should_quit(q));
    assert_eq!(handle_key_event(q), None);
}
