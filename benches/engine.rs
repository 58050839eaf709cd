use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tile_crush::core::{BoardShape, MatchEngine};

fn bench_populate(c: &mut Criterion) {
    let mut engine = MatchEngine::with_seed(BoardShape::full(9, 9), 12345);

    c.bench_function("populate_9x9", |b| {
        b.iter(|| {
            engine.populate().unwrap();
        })
    });
}

fn bench_detect_swaps(c: &mut Criterion) {
    let mut engine = MatchEngine::with_seed(BoardShape::full(9, 9), 12345);
    engine.populate().unwrap();

    c.bench_function("detect_possible_swaps_9x9", |b| {
        b.iter(|| {
            black_box(engine.detect_possible_swaps().len());
        })
    });
}

fn bench_cascade(c: &mut Criterion) {
    let mut dealt = MatchEngine::with_seed(BoardShape::full(9, 9), 12345);
    dealt.populate().unwrap();
    let swap = dealt.possible_swaps()[0];

    c.bench_function("swap_and_cascade_9x9", |b| {
        b.iter(|| {
            let mut engine = dealt.clone();
            engine.perform_swap(black_box(&swap));
            black_box(engine.resolve_cascade().len());
        })
    });
}

criterion_group!(benches, bench_populate, bench_detect_swaps, bench_cascade);
criterion_main!(benches);
