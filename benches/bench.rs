//! Criterion benchmarks for the autocomplete index.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rand::rngs::StdRng;
use suggestree::autocomplete::AutocompleteIndex;

/// Generate `count` lowercase words drawn from a vocabulary a quarter that
/// size, with low vocabulary positions picked far more often than high ones.
/// Frequent words repeat, so inserts exercise both node creation and count
/// merging.
fn generate_words(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let alphabet: Vec<char> = ('a'..='z').collect();

    let vocabulary: Vec<String> = (0..(count / 4).max(1))
        .map(|_| {
            let len = rng.random_range(3..10);
            (0..len)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                .collect()
        })
        .collect();

    (0..count)
        .map(|_| {
            let skew = rng.random::<f64>().powi(3);
            let position = ((skew * vocabulary.len() as f64) as usize).min(vocabulary.len() - 1);
            vocabulary[position].clone()
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [1_000usize, 10_000, 100_000] {
        let words = generate_words(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &words, |b, words| {
            b.iter(|| {
                let mut index = AutocompleteIndex::new();
                index.insert_all(black_box(words));
                index
            })
        });
    }

    group.finish();
}

fn bench_suggest(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest");
    let index: AutocompleteIndex = generate_words(100_000, 7).into_iter().collect();

    for prefix in ["", "a", "ab", "abc", "zzzz"] {
        group.bench_with_input(BenchmarkId::from_parameter(prefix), prefix, |b, prefix| {
            b.iter(|| index.suggest(black_box(prefix)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_suggest);
criterion_main!(benches);
