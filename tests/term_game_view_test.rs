use blockfall::core::{GameState, Piece};
use blockfall::term::{AnchorY, FrameBuffer, GameView, Rgb, Viewport};
use blockfall::types::{Button, Color, GameAction, PieceKind, Variant, GAME_OVER_MESSAGE};

fn text(fb: &FrameBuffer) -> String {
    fb.to_text()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(Variant::Keyboard, 1).snapshot();
    let view = GameView::default();

    // 14 cells * 2 columns + border = 30 wide, 30 rows + border = 32 tall.
    let fb = view.render(&snap, Viewport::new(30, 32));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(29, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 31).unwrap().ch, '└');
    assert_eq!(fb.get(29, 31).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_solid_cell_two_columns_wide_in_palette_color() {
    let mut snap = GameState::new(Variant::Keyboard, 1).snapshot();
    snap.board[29 * 14] = Color::Orange.code();
    snap.active = None;

    let fb = GameView::default().render(&snap, Viewport::new(30, 32));

    let left = fb.get(1, 30).unwrap();
    let right = fb.get(2, 30).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(right.ch, '█');
    assert_eq!(left.style.fg, Rgb::new(255, 165, 0));
}

#[test]
fn term_view_draws_fading_rows_dimmer() {
    let mut state = GameState::new(Variant::Keyboard, 1);
    for x in 0..14 {
        if x != 6 && x != 7 {
            state.board_mut().set(x, 29, Some(Color::Yellow));
        }
    }
    assert!(state.set_piece(Piece::new(PieceKind::O, Color::Yellow, (6, 28))));
    state.apply_action(GameAction::SoftDrop);

    let snap = state.snapshot();
    assert_eq!(snap.fading_rows.as_slice(), &[29]);
    let fb = GameView::default().render(&snap, Viewport::new(30, 32));

    let fading = fb.get(1, 30).unwrap().style.fg;
    let solid = fb.get(13, 29).unwrap().style.fg;
    assert_eq!(solid, Rgb::new(255, 255, 0));
    assert!(fading.r < solid.r);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::new(Variant::Keyboard, 1).snapshot();
    snap.score = 1234;

    let fb = GameView::default().render(&snap, Viewport::new(60, 32));
    let all = text(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = GameState::new(Variant::Keyboard, 1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    let fb = view.render(&snap, Viewport::new(30, 40));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_shows_press_start_before_controls_game_starts() {
    let snap = GameState::new(Variant::Controls, 1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(60, 40));
    assert!(text(&fb).contains("PRESS START"));
}

#[test]
fn term_view_draws_every_button_label() {
    let snap = GameState::new(Variant::Controls, 1).snapshot();
    let view = GameView::default();
    let vp = Viewport::new(60, 40);
    let fb = view.render(&snap, vp);

    for (button, rect) in view.button_layout(&snap, vp) {
        assert_eq!(fb.get(rect.x, rect.y).unwrap().ch, '[');
        let label: String = (1..rect.width - 1)
            .map(|dx| fb.get(rect.x + dx, rect.y).unwrap().ch)
            .collect();
        assert_eq!(label, button.label());
    }
    assert!(text(&fb).contains("[Restart]"));
}

#[test]
fn term_view_button_layout_hits_the_drawn_button() {
    let snap = GameState::new(Variant::Controls, 1).snapshot();
    let view = GameView::default();
    let vp = Viewport::new(60, 40);
    let layout = view.button_layout(&snap, vp);

    let (_, start) = layout
        .iter()
        .find(|(b, _)| *b == Button::Start)
        .copied()
        .unwrap();
    let hit = layout
        .iter()
        .find(|(_, r)| r.contains(start.x + 1, start.y))
        .map(|(b, _)| *b);
    assert_eq!(hit, Some(Button::Start));
}

#[test]
fn term_view_shows_alert_then_game_over() {
    let mut state = GameState::new(Variant::Keyboard, 1);
    for y in 0..4 {
        for x in 0..13 {
            state.board_mut().set(x, y, Some(Color::Red));
        }
    }
    state.solidify();
    assert!(state.game_over());

    let view = GameView::default();
    let vp = Viewport::new(60, 32);
    let fb = view.render(&state.snapshot(), vp);
    assert!(text(&fb).contains(GAME_OVER_MESSAGE));

    state.dismiss_alert();
    let fb = view.render(&state.snapshot(), vp);
    let all = text(&fb);
    assert!(!all.contains(GAME_OVER_MESSAGE));
    assert!(all.contains("GAME OVER"));
    assert!(!all.contains('█'));
}
