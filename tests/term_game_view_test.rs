//! GameView rendering tests against session snapshots.

use blockfall::core::Session;
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{GameCommand, Status};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut out = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            out.push(fb.get(x, y).unwrap().ch);
        }
        out.push('\n');
    }
    out
}

#[test]
fn idle_view_shows_the_start_hint() {
    let session = Session::new(1);
    let view = GameView::default();

    let fb = view.render(&session.snapshot(), Viewport::new(80, 30));
    let text = screen_text(&fb);

    assert!(text.contains("PRESS ENTER"));
    assert!(text.contains("SCORE"));
    assert!(text.contains("LEVEL"));
    assert!(text.contains("LINES"));
}

#[test]
fn running_view_draws_the_active_piece_and_next_preview() {
    let mut session = Session::new(1);
    session.start();
    let view = GameView::default();

    let fb = view.render(&session.snapshot(), Viewport::new(80, 30));
    let text = screen_text(&fb);

    assert!(text.contains('█'), "expected piece blocks on screen");
    assert!(text.contains("NEXT"));
    assert!(!text.contains("PRESS ENTER"));
    assert!(!text.contains("GAME OVER"));
}

#[test]
fn paused_and_game_over_overlays() {
    let mut session = Session::new(1);
    session.start();
    session.pause();
    let view = GameView::default();

    let fb = view.render(&session.snapshot(), Viewport::new(80, 30));
    assert!(screen_text(&fb).contains("PAUSED"));

    let mut snap = session.snapshot();
    snap.status = Status::GameOver;
    let fb = view.render(&snap, Viewport::new(80, 30));
    assert!(screen_text(&fb).contains("GAME OVER"));
}

#[test]
fn locked_cells_are_rendered() {
    let mut session = Session::new(1);
    session.start();
    session.apply(GameCommand::HardDrop);

    let view = GameView::default();
    let fb = view.render(&session.snapshot(), Viewport::new(80, 30));
    let blocks = screen_text(&fb).matches('█').count();

    // Locked piece + active piece + next preview: at least three
    // tetrominoes' worth of doubled cells.
    assert!(blocks >= 3 * 4 * 2, "got {} block glyphs", blocks);
}

#[test]
fn small_viewports_do_not_panic() {
    let mut session = Session::new(1);
    session.start();
    let view = GameView::default();

    let mut fb = FrameBuffer::new(0, 0);
    for (w, h) in [(0, 0), (1, 1), (10, 5), (24, 10), (300, 2)] {
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}

#[test]
fn view_reuses_a_framebuffer_across_frames() {
    let mut session = Session::new(1);
    session.start();
    let view = GameView::default();

    let mut fb = FrameBuffer::new(80, 30);
    view.render_into(&session.snapshot(), Viewport::new(80, 30), &mut fb);
    let first = screen_text(&fb);

    session.apply(GameCommand::HardDrop);
    view.render_into(&session.snapshot(), Viewport::new(80, 30), &mut fb);
    let second = screen_text(&fb);

    assert_ne!(first, second);
}
