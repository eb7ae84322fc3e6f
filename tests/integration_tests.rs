//! Command-surface integration tests: lifecycle, pause, reset, input repeats.

use blockfall::core::Session;
use blockfall::input::InputHandler;
use blockfall::types::{GameCommand, Status, BASE_DROP_MS};

#[test]
fn command_driven_lifecycle() {
    let mut session = Session::new(12345);
    assert_eq!(session.status(), Status::Idle);

    // Commands before start are no-ops.
    assert_eq!(session.apply(GameCommand::MoveLeft), Status::Idle);
    assert_eq!(session.apply(GameCommand::HardDrop), Status::Idle);
    assert!(session.active().is_none());

    assert_eq!(session.apply(GameCommand::Start), Status::Running);
    assert!(session.active().is_some());
    assert!(session.next_piece().is_some());

    assert_eq!(session.apply(GameCommand::Pause), Status::Paused);
    assert_eq!(session.apply(GameCommand::Resume), Status::Running);
    assert_eq!(session.apply(GameCommand::Reset), Status::Idle);
}

#[test]
fn paused_session_ignores_gameplay_commands() {
    let mut session = Session::new(12345);
    session.apply(GameCommand::Start);
    session.apply(GameCommand::Pause);

    let snapshot_before = session.snapshot();
    session.apply(GameCommand::MoveLeft);
    session.apply(GameCommand::MoveRight);
    session.apply(GameCommand::Rotate);
    session.apply(GameCommand::SoftDrop);
    session.apply(GameCommand::HardDrop);
    session.tick(10 * BASE_DROP_MS as u64);

    assert_eq!(session.snapshot(), snapshot_before);
}

#[test]
fn moves_update_the_active_piece() {
    let mut session = Session::new(12345);
    session.apply(GameCommand::Start);

    let x0 = session.active().unwrap().x;
    if session.move_left() {
        assert_eq!(session.active().unwrap().x, x0 - 1);
    }

    let y0 = session.active().unwrap().y;
    assert!(session.soft_drop());
    assert_eq!(session.active().unwrap().y, y0 + 1);
}

#[test]
fn reset_starts_a_fresh_game() {
    let mut session = Session::new(12345);
    session.apply(GameCommand::Start);
    session.apply(GameCommand::HardDrop);
    assert!(session.score() > 0);

    session.apply(GameCommand::Reset);
    assert_eq!(session.score(), 0);
    assert_eq!(session.lines(), 0);
    assert_eq!(session.level(), 1);
    assert!(session.grid().cells().iter().all(|c| c.is_none()));

    // A fresh start is accepted again from Idle.
    assert_eq!(session.apply(GameCommand::Start), Status::Running);
}

#[test]
fn input_handler_repeats_drive_the_session() {
    use crossterm::event::KeyCode;

    let mut session = Session::new(12345);
    session.apply(GameCommand::Start);

    // Long auto-release timeout: the simulated hold outlives real time.
    let mut input = InputHandler::new().with_key_release_timeout_ms(10_000);

    // Initial press moves once.
    let first = input.handle_key_press(KeyCode::Left);
    assert_eq!(first, Some(GameCommand::MoveLeft));
    session.apply(GameCommand::MoveLeft);

    // Held past DAS: updates emit repeats that the session consumes.
    let mut total = 0;
    for _ in 0..20 {
        for command in input.update(16) {
            session.apply(command);
            total += 1;
        }
    }
    assert!(total >= 2, "expected DAS/ARR repeats, got {}", total);

    // The piece cannot have left the board no matter how many repeats.
    let piece = session.active().unwrap();
    for (cx, _) in piece.cells() {
        assert!(piece.x + cx >= 0);
    }
}
