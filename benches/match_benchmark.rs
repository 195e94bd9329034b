use criterion::{criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng, thread_rng};
use banco::{Banco, Board, Options, STRATEGY_ARRAY};

fn run_match() {
    let rng = rand_chacha::ChaCha8Rng::seed_from_u64(thread_rng().next_u64());
    banco::play_match(rng).expect("a finished match");
}

fn run_random_board_match() {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(thread_rng().next_u64());
    let board = Board::random(&mut rng);
    let mut game = Banco::new(rng, board, &STRATEGY_ARRAY, &Options::default()).expect("a valid match");

    game.run().expect("a finished match");
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("reference board match", |b| b.iter(run_match));
    c.bench_function("random board match", |b| b.iter(run_random_board_match));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
