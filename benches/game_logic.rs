use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{clear_full_rows, Board, GameConfig, GameSession, GameState, NullSink};
use blockfall::term::{GameView, Viewport};
use blockfall::types::{Command, PieceKind};

fn bench_advance(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::default().with_seed(12345)).unwrap();

    c.bench_function("advance_16ms", |b| {
        b.iter(|| {
            state.advance(black_box(16));
            if state.status().is_running() {
                state.take_events();
            } else {
                state.restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::standard();
            for row in 16..20 {
                board.fill_row(row, PieceKind::I, None);
            }
            black_box(clear_full_rows(&mut board));
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::default().with_seed(12345)).unwrap();
    let mut dx = 1;

    c.bench_function("try_move", |b| {
        b.iter(|| {
            if !state.try_move(dx, 0) {
                dx = -dx;
            }
            state.take_events();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::default().with_seed(12345)).unwrap();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.rotate();
            state.take_events();
        })
    });
}

fn bench_session_command(c: &mut Criterion) {
    let state = GameState::new(GameConfig::default().with_seed(12345)).unwrap();
    let mut session = GameSession::new(state, NullSink);

    c.bench_function("session_rotate_with_snapshot", |b| {
        b.iter(|| {
            black_box(session.command(Command::Rotate));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let snap = GameState::new(GameConfig::default().with_seed(12345))
        .unwrap()
        .snapshot();
    let view = GameView::default();
    let mut fb = blockfall::term::FrameBuffer::new(80, 24);

    c.bench_function("render_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_line_clear,
    bench_try_move,
    bench_rotate,
    bench_session_command,
    bench_render
);
criterion_main!(benches);
