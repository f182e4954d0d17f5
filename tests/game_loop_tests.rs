//! End-to-end rules scenarios driven through the game loop

use blockdrop::core::{GameLoop, GameSnapshot, ManualScheduler, Piece, Scheduler, Shape};
use blockdrop::types::{GameAction, GamePhase, PieceKind, StepOutcome, BOARD_HEIGHT, BOARD_WIDTH};

fn started() -> GameLoop<ManualScheduler> {
    let mut game = GameLoop::new(12345, 500, ManualScheduler::new());
    game.start();
    game
}

fn place(game: &mut GameLoop<ManualScheduler>, kind: PieceKind, x: i8, y: i8) {
    game.state_mut().set_active(Piece {
        kind,
        shape: blockdrop::core::template(kind).shape,
        x,
        y,
    });
}

fn no_notify(_: &GameSnapshot) {}

#[test]
fn test_piece_lands_on_bottom_row() {
    let mut game = started();
    place(&mut game, PieceKind::I, 3, BOARD_HEIGHT as i8 - 1);

    let outcome = game.move_down(&mut no_notify);
    assert_eq!(outcome, StepOutcome::Landed { lines_cleared: 0 });

    let board = game.state().board();
    for x in 3..7 {
        assert_eq!(board.get(x, 19), Some(Some(PieceKind::I)));
    }
    assert_eq!(board.filled_count(), 4);
    assert_eq!(game.state().active().y, 0);
    assert_eq!(game.state().phase(), GamePhase::Running);
}

#[test]
fn test_single_line_clear_scenario() {
    let mut game = started();
    for x in 2..BOARD_WIDTH as i8 {
        game.state_mut().board_mut().set(x, 19, Some(PieceKind::Z));
    }
    place(&mut game, PieceKind::O, 0, 17);

    assert_eq!(game.move_down(&mut no_notify), StepOutcome::Applied);
    assert_eq!(
        game.move_down(&mut no_notify),
        StepOutcome::Landed { lines_cleared: 1 }
    );

    // The O's top half dropped into the cleared bottom row.
    let board = game.state().board();
    assert_eq!(board.filled_count(), 2);
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::O)));
    assert_eq!(board.get(1, 19), Some(Some(PieceKind::O)));
    assert_eq!(board.get(2, 19), Some(None));
    assert_eq!(board.get(0, 18), Some(None));
}

#[test]
fn test_game_over_notifies_then_resets() {
    let mut game = started();
    for x in 3..=6 {
        game.state_mut().board_mut().set(x, 0, Some(PieceKind::Z));
    }
    place(&mut game, PieceKind::O, 0, 18);
    let epoch_before = game.epoch();

    let mut seen: Vec<GameSnapshot> = Vec::new();
    let mut notify = |snap: &GameSnapshot| seen.push(*snap);
    let outcome = game.move_down(&mut notify);

    assert_eq!(outcome, StepOutcome::GameOver { lines_cleared: 0 });
    assert_eq!(seen.len(), 1);
    let last = &seen[0];
    assert!(last.game_over);
    assert_eq!(last.board[0][3], PieceKind::Z.color_index());
    assert_eq!(last.board[19][0], PieceKind::O.color_index());
    assert_eq!(last.board[18][1], PieceKind::O.color_index());

    assert_eq!(game.state().phase(), GamePhase::Running);
    assert_eq!(game.state().board().filled_count(), 0);
    assert_eq!(game.state().episode_id(), 1);
    assert_eq!(game.epoch(), epoch_before + 1);
    assert_eq!(game.scheduler().starts(), 2);
    assert!(game.scheduler().is_active());
}

#[test]
fn test_tick_landing_into_blocked_spawn_resets() {
    let mut game = started();
    for x in 3..=6 {
        game.state_mut().board_mut().set(x, 0, Some(PieceKind::Z));
    }
    place(&mut game, PieceKind::O, 0, 18);

    let mut notified = 0;
    let mut notify = |snap: &GameSnapshot| {
        assert!(snap.game_over);
        notified += 1;
    };
    let epoch = game.epoch();
    let outcome = game.on_tick(epoch, &mut notify);

    assert_eq!(outcome, StepOutcome::GameOver { lines_cleared: 0 });
    assert_eq!(notified, 1);
    assert_eq!(game.state().board().filled_count(), 0);
    assert_eq!(game.state().phase(), GamePhase::Running);
    assert_eq!(game.epoch(), epoch + 1);
}

#[test]
fn test_resume_restarts_at_same_interval() {
    let mut game = started();
    assert_eq!(game.pause(), StepOutcome::Applied);
    assert_eq!(game.resume(), StepOutcome::Applied);

    assert_eq!(game.scheduler().interval_ms(), 500);
    assert_eq!(game.scheduler().starts(), 2);
    assert_eq!(game.scheduler_mut().advance(500), 1);
}

#[test]
fn test_ticks_follow_elapsed_time() {
    let mut game = started();
    let y = game.state().active().y;

    let due = game.scheduler_mut().advance(1250);
    assert_eq!(due, 2);
    for _ in 0..due {
        let epoch = game.epoch();
        assert_eq!(game.on_tick(epoch, &mut no_notify), StepOutcome::Applied);
    }
    assert_eq!(game.state().active().y, y + 2);

    // The leftover 250ms counts toward the next tick.
    assert_eq!(game.scheduler_mut().advance(250), 1);
}

#[test]
fn test_tick_queued_before_reset_is_dropped() {
    let mut game = started();
    let queued = game.epoch();
    game.move_down(&mut no_notify);

    game.apply_action(GameAction::Reset, &mut no_notify);
    let y = game.state().active().y;
    assert_eq!(game.on_tick(queued, &mut no_notify), StepOutcome::Ignored);
    assert_eq!(game.state().active().y, y);
}

#[test]
fn test_pause_freezes_ticks_but_not_moves() {
    let mut game = started();
    place(&mut game, PieceKind::O, 4, 5);

    assert_eq!(
        game.apply_action(GameAction::TogglePause, &mut no_notify),
        StepOutcome::Applied
    );
    assert!(!game.is_ticking());
    assert_eq!(game.scheduler_mut().advance(5000), 0);

    assert_eq!(game.move_left(), StepOutcome::Applied);
    assert_eq!(game.state().active().x, 3);
    assert!(game.snapshot().paused);

    game.apply_action(GameAction::TogglePause, &mut no_notify);
    assert!(game.is_ticking());
    assert_eq!(game.state().phase(), GamePhase::Running);
}

#[test]
fn test_rotate_is_rejected_against_wall() {
    let mut game = started();
    let shape = Shape::from_rows([[1, 0, 0], [1, 1, 1], [0, 0, 0]]);
    game.state_mut().set_active(Piece {
        kind: PieceKind::J,
        shape,
        x: BOARD_WIDTH as i8 - 3,
        y: BOARD_HEIGHT as i8 - 2,
    });

    // Rotated footprint reaches row 20.
    assert_eq!(game.rotate(), StepOutcome::Rejected);
    assert_eq!(game.state().active().shape, shape);
}

#[test]
fn test_actions_never_overlap_settled_cells() {
    let mut game = started();
    let actions = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::MoveDown,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::MoveDown,
        GameAction::Rotate,
        GameAction::MoveDown,
    ];

    for step in 0..2000 {
        let action = actions[step % actions.len()];
        game.apply_action(action, &mut no_notify);

        let state = game.state();
        for (x, y) in state.active().cells() {
            assert!(
                state.board().is_free(x, y),
                "step {}: active cell ({}, {}) overlaps",
                step,
                x,
                y
            );
        }
    }
}
