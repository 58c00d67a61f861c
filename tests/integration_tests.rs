//! Integration tests - full sessions through the facade crate

use brickfall::core::{Board, BoardConfig, BrickQueue, Grid, RandomizerKind};
use brickfall::engine::{apply_place, best_placement, PlaceError, Session};
use brickfall::types::{
    BrickKind, EventSource, EventType, GameAction, GameMode, MoveEvent, BOARD_HEIGHT, BOARD_WIDTH,
};

fn session_with(kinds: &[BrickKind]) -> Session {
    let board =
        Board::with_queue(BoardConfig::default(), BrickQueue::with_preset(kinds, 1)).unwrap();
    Session::from_board(GameMode::Classic, board)
}

#[test]
fn test_full_game_is_deterministic() {
    let mut a = Session::new(GameMode::Classic, 777);
    let mut b = Session::new(GameMode::Classic, 777);

    let script = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::SoftDrop,
        GameAction::MoveRight,
        GameAction::HardDrop,
        GameAction::Hold,
        GameAction::HardDrop,
    ];
    for _ in 0..40 {
        for action in script {
            assert_eq!(a.apply_action(action), b.apply_action(action));
        }
    }
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.score(), b.score());
    assert_eq!(a.stats(), b.stats());
    assert_eq!(a.game_over(), b.game_over());
}

#[test]
fn test_stacking_in_the_middle_ends_the_game() {
    let mut session = Session::new(GameMode::Classic, 5);
    let mut drops = 0;
    while !session.game_over() {
        let data = session.hard_drop(EventSource::Thread);
        assert!(data.landed);
        drops += 1;
        assert!(drops < 200, "stack should reach the spawn area");
    }
    assert!(session.apply_action(GameAction::NewGame));
    assert!(!session.game_over());
    assert!(session.grid().is_clear());
    assert_eq!(session.score(), 0);
}

#[test]
fn test_line_clear_adds_bonus_to_score() {
    let mut session = session_with(&[BrickKind::I, BrickKind::I, BrickKind::O]);

    // Two flat I bricks side by side leave a two-wide gap on the right
    apply_place(&mut session, 0, 0, false).unwrap();
    apply_place(&mut session, 4, 0, false).unwrap();
    assert_eq!(session.score(), 0);

    // O fills columns 8 and 9 of the bottom two rows; only the bottom row is full
    let data = apply_place(&mut session, 7, 0, false).unwrap();
    let clear = data.clear_row.unwrap();
    assert_eq!(clear.lines_removed, 1);
    assert_eq!(clear.score_bonus, 50);
    assert_eq!(session.score(), 50);
    assert_eq!(session.stats().lines_cleared, 1);

    // The O's top half fell into the bottom row
    let grid = session.grid();
    assert_eq!(grid.get(8, 24), Some(BrickKind::O.id()));
    assert_eq!(grid.get(0, 24), Some(0));
}

#[test]
fn test_double_clear_scores_two_hundred() {
    let mut session = session_with(&[BrickKind::O]);
    let mut rows = vec![vec![0u8; BOARD_WIDTH]; BOARD_HEIGHT];
    for row in rows.iter_mut().skip(BOARD_HEIGHT - 2) {
        for (x, cell) in row.iter_mut().enumerate() {
            if x != 4 && x != 5 {
                *cell = BrickKind::J.id();
            }
        }
    }
    let mut board = session.board().clone();
    board.load_grid(Grid::from_rows(rows).unwrap()).unwrap();
    session = Session::from_board(GameMode::Classic, board);

    let data = apply_place(&mut session, 3, 0, false).unwrap();
    assert_eq!(data.clear_row.map(|c| c.lines_removed), Some(2));
    assert_eq!(session.score(), 200);
    assert!(session.grid().is_clear());
}

#[test]
fn test_events_report_views() {
    let mut session = session_with(&[BrickKind::T]);
    let view = session.on_left_event(MoveEvent::user(EventType::Left));
    assert_eq!(view.x, 3);
    let view = session.on_right_event(MoveEvent::user(EventType::Right));
    assert_eq!(view.x, 4);
    let view = session.on_rotate_event(MoveEvent::user(EventType::Rotate));
    assert_eq!(view.brick, brickfall::core::brick(BrickKind::T).shape(1));
    let view = session.on_move_event(MoveEvent::gravity());
    assert_eq!(view.y, 1);
    assert_eq!(view.ghost_y, 22);
}

#[test]
fn test_gravity_and_user_steps_are_counted_apart() {
    let mut session = session_with(&[BrickKind::L]);
    session.on_down_event(MoveEvent::gravity());
    session.on_down_event(MoveEvent::gravity());
    session.on_down_event(MoveEvent::user(EventType::Down));
    let stats = session.stats();
    assert_eq!(stats.gravity_down_steps, 2);
    assert_eq!(stats.user_down_steps, 1);
}

#[test]
fn test_place_errors_leave_session_untouched() {
    let mut session = session_with(&[BrickKind::T]);
    let before = session.view();

    assert_eq!(apply_place(&mut session, 100, 0, false), Err(PlaceError::XOutOfBounds));
    assert_eq!(apply_place(&mut session, 4, 9, false), Err(PlaceError::RotationOutOfRange));
    assert_eq!(session.view(), before);
    assert_eq!(session.stats().pieces_locked, 0);
}

#[test]
fn test_autoplay_clears_lines() {
    let config = BoardConfig {
        randomizer: RandomizerKind::SevenBag,
        ..BoardConfig::default()
    };
    let mut session = Session::with_config(GameMode::Classic, config, 2024).unwrap();
    for _ in 0..200 {
        if session.game_over() {
            break;
        }
        let placement = best_placement(session.board()).unwrap();
        apply_place(&mut session, placement.x, placement.rotation, false).unwrap();
    }
    assert!(session.stats().lines_cleared > 0);
    assert!(session.score() > 0);
}

#[test]
fn test_timed_mode_restarts_countdown() {
    let mut session = Session::new(GameMode::TwoMinutes, 1);
    for _ in 0..30 {
        session.tick_second();
    }
    assert_eq!(session.remaining_secs(), Some(90));
    session.create_new_game();
    assert_eq!(session.remaining_secs(), Some(120));
}
