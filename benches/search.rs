use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::hint::black_box;

use crab_puzzle::board::{Board, Player};
use crab_puzzle::eval::{evaluate_hard, evaluate_normal};
use crab_puzzle::rules::{legal_moves, winner};
use crab_puzzle::{AIEngine, Difficulty};

/// Positions reached by random play from the opening
fn corpus() -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(1337);
    let mut boards = vec![Board::initial()];
    let mut board = Board::initial();
    let mut player = Player::A;
    for _ in 0..24 {
        let moves = legal_moves(&board, player);
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        let next = board.with_move(mv, player);
        if winner(&next).is_some() {
            continue;
        }
        board = next;
        boards.push(board);
        player = player.opponent();
    }
    boards
}

fn bench_movegen(c: &mut Criterion) {
    let boards = corpus();
    c.bench_function("movegen/legal_moves", |b| {
        b.iter(|| {
            let mut total = 0;
            for bd in &boards {
                total += legal_moves(bd, Player::A).len() + legal_moves(bd, Player::B).len();
            }
            black_box(total)
        })
    });
}

fn bench_eval(c: &mut Criterion) {
    let boards = corpus();
    c.bench_function("eval/normal", |b| {
        b.iter(|| boards.iter().map(|bd| evaluate_normal(bd, Player::A)).sum::<i32>())
    });
    c.bench_function("eval/hard", |b| {
        b.iter(|| boards.iter().map(|bd| evaluate_hard(bd, Player::A)).sum::<i32>())
    });
}

fn bench_search(c: &mut Criterion) {
    let engine = AIEngine::new();
    let board = Board::initial();
    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    group.bench_function("normal/opening", |b| {
        b.iter(|| engine.get_move(black_box(&board), Player::A, Difficulty::Normal))
    });
    group.bench_function("hard/opening", |b| {
        b.iter(|| engine.get_move(black_box(&board), Player::A, Difficulty::Hard))
    });
    group.finish();
}

criterion_group!(benches, bench_movegen, bench_eval, bench_search);
criterion_main!(benches);
