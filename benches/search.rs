use criterion::{criterion_group, criterion_main, Criterion};
use domineering::search::{evaluate_position, perft, AlphaBetaSearcher, SearchConfig};
use domineering::moves::random_move_with;
use domineering::{Board, Orientation};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

fn corpus() -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut boards = Vec::new();
    let mut board = Board::new(6, 6).unwrap();
    boards.push(board.clone());
    // Posições de densidade crescente, determinísticas
    let mut to_move = Orientation::Vertical;
    for _ in 0..8 {
        let Ok(mv) = random_move_with(&mut rng, &board, to_move) else { break };
        board.perform_move(mv.row, mv.col, mv.orientation).unwrap();
        boards.push(board.clone());
        to_move = !to_move;
    }
    boards
}

fn bench_movegen(c: &mut Criterion) {
    let boards = corpus();
    c.bench_function("movegen/legal_moves", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for board in &boards {
                acc += board.legal_moves(Orientation::Vertical).count();
                acc += board.legal_moves(Orientation::Horizontal).count();
            }
            black_box(acc)
        })
    });
    c.bench_function("eval/mobility", |b| {
        b.iter(|| {
            let mut acc = 0i32;
            for board in &boards {
                acc += evaluate_position(board, Orientation::Vertical);
            }
            black_box(acc)
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let board = Board::new(5, 5).unwrap();
    for pruning in [true, false] {
        let searcher = AlphaBetaSearcher::with_config(SearchConfig {
            pruning,
            ..SearchConfig::default()
        });
        let name = if pruning { "search/5x5_d3_pruned" } else { "search/5x5_d3_full" };
        c.bench_function(name, |b| {
            b.iter(|| black_box(searcher.search_depth(&board, Orientation::Vertical, 3).unwrap()))
        });
    }
    c.bench_function("perft/5x5_d3", |b| {
        b.iter(|| black_box(perft(&board, Orientation::Vertical, 3, 1).unwrap()))
    });
}

criterion_group!(benches, bench_movegen, bench_search);
criterion_main!(benches);
