use blockdrop::core::{GameSnapshot, GameState};
use blockdrop::term::{block_color, for_each_block, GameView, Viewport, PALETTE};
use blockdrop::types::PieceKind;

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 10x2 by 20x1 board cells plus the border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[19][0] = PieceKind::J.color_index();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    let (x0, y0) = (1, 1 + 19);
    for x in [x0, x0 + 1] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, PALETTE[2]);
    }
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, ' ');
}

#[test]
fn term_view_draws_active_piece_over_board() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    let color = block_color(snap.active.color()).unwrap();
    for (x, y) in snap.active.cells() {
        let cell = fb.get(1 + x as u16 * 2, 1 + y as u16).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, color);
    }
}

#[test]
fn term_view_overlays_paused() {
    let mut snap = GameState::new(1).snapshot();
    snap.paused = true;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(fb.row_text(11).contains("PAUSED"));
}

#[test]
fn term_view_banner_overrides_snapshot_overlay() {
    let mut snap = GameState::new(1).snapshot();
    snap.paused = true;

    let view = GameView::default();
    let mut fb = view.render(&snap, Viewport::new(22, 22));
    view.render_into_with_banner(&snap, Some("GAME OVER"), Viewport::new(22, 22), &mut fb);

    let row = fb.row_text(11);
    assert!(row.contains("GAME OVER"));
    assert!(!row.contains("PAUSED"));
}

#[test]
fn term_view_shows_side_panel_when_wide() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(60, 24));

    let text: String = (0..24).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n");
    assert!(text.contains("BLOCKDROP"));
    assert!(text.contains("game 1"));
    assert!(text.contains("pause"));
}

#[test]
fn blocks_are_canvas_squares() {
    let mut snap = GameSnapshot::default();
    snap.board[2][3] = 5;

    let mut blocks = Vec::new();
    for_each_block(&snap, |b| blocks.push(b));

    // One settled cell plus the four cells of the default piece.
    assert_eq!(blocks.len(), 5);
    assert_eq!((blocks[0].x, blocks[0].y, blocks[0].size), (90, 60, 30));
    assert_eq!(blocks[0].color, 5);
}
