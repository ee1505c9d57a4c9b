#[macro_use]
extern crate criterion;

use criterion::{Benchmark, Criterion};

use npuzzle_solver::{LoadLevel, Solve};

fn bench_easy_3(c: &mut Criterion) {
    // 4 moves
    bench_puzzle(c, "puzzles/easy-3.txt", 100);
}

fn bench_hard_3(c: &mut Criterion) {
    // 31 moves - close to the worst case for a 3x3 board
    bench_puzzle(c, "puzzles/hard-3.txt", 20);
}

fn bench_puzzle(c: &mut Criterion, path: &'static str, samples: usize) {
    let level = path.load_level().unwrap();

    c.bench(
        "solve",
        Benchmark::new(path, move |b| {
            b.iter(|| criterion::black_box(level.solve(criterion::black_box(false))))
        }).sample_size(samples),
    );
}

criterion_group!(benches, bench_easy_3, bench_hard_3);
criterion_main!(benches);
