//! Benchmarks for both normalizers and catalog construction.
//!
//! The naive normalizer is measured on the corpus input as well, to track
//! the gap to the oracle.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tgpc::{NaiveNormalizer, Normalizer, RuleCatalog};

/// `(2^len, 1^(len-1) 2)`: one correction per step.
fn constant_input(len: usize) -> (String, String) {
    let delta = "2".repeat(len);
    let theta = format!("{}2", "1".repeat(len.saturating_sub(1)));
    (delta, theta)
}

/// Rewrite engine on a 7-step input from the reference corpus.
fn bench_engine_corpus(c: &mut Criterion) {
    let normalizer = Normalizer::new();
    c.bench_function("engine_corpus_0121202", |b| {
        b.iter(|| {
            let result = normalizer
                .normalize(black_box("0121202"), black_box("021R200"))
                .unwrap();
            assert!(!result.unchanged);
        });
    });
}

/// Rewrite engine on a 64-step input needing 64 corrections.
fn bench_engine_constant_64(c: &mut Criterion) {
    let normalizer = Normalizer::new();
    let (delta, theta) = constant_input(64);
    c.bench_function("engine_constant_64", |b| {
        b.iter(|| normalizer.normalize(black_box(&delta), black_box(&theta)).unwrap());
    });
}

/// Naive normalizer on the same 7-step input.
fn bench_naive_corpus(c: &mut Criterion) {
    let normalizer = NaiveNormalizer::new();
    c.bench_function("naive_corpus_0121202", |b| {
        b.iter(|| {
            normalizer
                .normalize(black_box("0121202"), black_box("021R200"))
                .unwrap()
        });
    });
}

/// Building the 192-rule catalog from scratch, fingerprint included.
fn bench_catalog_build(c: &mut Criterion) {
    c.bench_function("catalog_build", |b| {
        b.iter(|| black_box(RuleCatalog::build()).len());
    });
}

criterion_group!(
    benches,
    bench_engine_corpus,
    bench_engine_constant_64,
    bench_naive_corpus,
    bench_catalog_build
);
criterion_main!(benches);
