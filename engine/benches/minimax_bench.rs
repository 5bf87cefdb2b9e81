use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_engine::Logger;
use tictactoe_engine::tictactoe::{
    Board, GameState, Mark, MinimaxSettings, MinimaxStrategy, Player, Players, Seat,
};

fn bots() -> Arc<Players> {
    let players = Players::new(
        Player::new("max", Mark::X, true).expect("valid player"),
        Player::new("min", Mark::O, true).expect("valid player"),
    )
    .expect("distinct marks");
    Arc::new(players)
}

fn state(layout: &str, to_move: Seat) -> GameState {
    let board: Board = layout.parse().expect("valid board");
    GameState::from_board(board, bots(), to_move)
}

fn full_search() -> MinimaxStrategy {
    MinimaxStrategy::new(
        MinimaxSettings {
            center_opening: false,
            ..MinimaxSettings::default()
        },
        Logger::silent(),
    )
}

fn bench_minimax_empty_board(c: &mut Criterion) {
    let strategy = full_search();
    let empty = state(".../.../...", Seat::First);
    c.bench_function("minimax_3x3_empty_board_full_search", |b| {
        b.iter(|| strategy.search(black_box(&empty)))
    });
}

fn bench_minimax_mid_game(c: &mut Criterion) {
    let strategy = full_search();
    let mid_game = state("X../.O./..X", Seat::Second);
    c.bench_function("minimax_3x3_mid_game", |b| {
        b.iter(|| strategy.search(black_box(&mid_game)))
    });
}

fn bench_minimax_single_move(c: &mut Criterion) {
    let strategy = full_search();
    let last_cell = state("XOX/XOO/OX.", Seat::First);
    c.bench_function("minimax_3x3_single_move", |b| {
        b.iter(|| strategy.search(black_box(&last_cell)))
    });
}

criterion_group!(
    benches,
    bench_minimax_empty_board,
    bench_minimax_mid_game,
    bench_minimax_single_move
);
criterion_main!(benches);
