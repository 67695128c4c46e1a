use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameSnapshot, GameState, Piece};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{Color, GameAction, PieceKind, Variant, TICK_MS};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(Variant::Keyboard, 12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(TICK_MS));
            if state.game_over() {
                state.dismiss_alert();
                state.restart();
            }
        })
    });
}

fn bench_row_removal(c: &mut Criterion) {
    c.bench_function("remove_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new(14, 30);
            for y in 26..30 {
                for x in 0..14 {
                    board.set(x, y, Some(Color::Cyan));
                }
            }
            for y in board.full_rows() {
                board.remove_row(y as usize);
            }
            black_box(board.filled_count())
        })
    });
}

fn bench_collision(c: &mut Criterion) {
    let state = GameState::new(Variant::Keyboard, 12345);
    let piece = Piece::new(PieceKind::T, Color::Red, (5, 10));

    c.bench_function("collides", |b| {
        b.iter(|| black_box(piece).collides(state.board()))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(Variant::Keyboard, 12345);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.apply_action(GameAction::Rotate);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(Variant::Controls, 12345);
    let view = GameView::default();
    let viewport = Viewport::new(80, 40);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 40);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
            black_box(fb.width())
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_row_removal,
    bench_collision,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
