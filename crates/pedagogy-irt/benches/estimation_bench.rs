use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pedagogy_core::ResponseRecord;
use pedagogy_irt::{probability_correct, AbilityEstimator};

/// A 100-item history alternating difficulty and outcome.
fn build_history(len: usize) -> Vec<ResponseRecord> {
    (0..len)
        .map(|i| {
            let difficulty = -2.0 + 4.0 * (i % 9) as f64 / 8.0;
            ResponseRecord::new(i % 3 != 0, difficulty, 0.8 + (i % 4) as f64 * 0.3, 0.2)
        })
        .collect()
}

fn bench_probability(c: &mut Criterion) {
    c.bench_function("probability_correct", |b| {
        b.iter(|| probability_correct(black_box(0.3), black_box(-0.4), 1.2, 0.25))
    });
}

fn bench_estimate_100(c: &mut Criterion) {
    let history = build_history(100);
    let estimator = AbilityEstimator::new();
    c.bench_function("estimate_ability_100", |b| {
        b.iter(|| estimator.estimate(black_box(&history)))
    });
}

fn bench_batch_1k_students(c: &mut Criterion) {
    let histories: Vec<_> = (0..1000).map(|i| build_history(20 + i % 30)).collect();
    let estimator = AbilityEstimator::new();
    c.bench_function("estimate_batch_1k", |b| {
        b.iter(|| estimator.estimate_batch(black_box(&histories)))
    });
}

criterion_group!(
    benches,
    bench_probability,
    bench_estimate_100,
    bench_batch_1k_students
);
criterion_main!(benches);
