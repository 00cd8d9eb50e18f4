//! Criterion micro-benchmarks for sequence growth, shifting, copy and iteration.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use seqbuf::Sequence;
use seqbuf_bench::{random_workload, replay};
use seqbuf_test_utils::fixtures;

/// Build a sequence holding `0..n`.
fn make_sequence(n: u64) -> Sequence<u64> {
    let mut seq = Sequence::new().unwrap();
    seq.try_extend(0..n).unwrap();
    seq
}

/// Benchmark: push 10K u64 values from the default capacity (trivial relocation path).
fn bench_push_10k(c: &mut Criterion) {
    c.bench_function("push_10k", |b| {
        b.iter(|| {
            let seq = make_sequence(10_000);
            black_box(seq.len());
        });
    });
}

/// Benchmark: push 10K owned strings (element-by-element relocation path).
fn bench_push_strings_10k(c: &mut Criterion) {
    c.bench_function("push_strings_10k", |b| {
        b.iter(|| {
            let mut seq = Sequence::new().unwrap();
            for i in 0..10_000u32 {
                seq.push(i.to_string()).unwrap();
            }
            black_box(seq.len());
        });
    });
}

/// Benchmark: insert and remove at the front of a 1K-element sequence.
fn bench_front_insert_remove_1k(c: &mut Criterion) {
    let mut seq = make_sequence(1_000);
    c.bench_function("front_insert_remove_1k", |b| {
        b.iter(|| {
            seq.insert(0, black_box(7)).unwrap();
            black_box(seq.remove(0));
        });
    });
}

/// Benchmark: replay a seeded 5K-step mixed workload.
fn bench_mixed_workload_5k(c: &mut Criterion) {
    let script = random_workload(5_000, 42);
    c.bench_function("mixed_workload_5k", |b| {
        b.iter(|| {
            let mut seq = Sequence::new().unwrap();
            black_box(replay(&mut seq, &script).unwrap());
        });
    });
}

/// Benchmark: deep copy of a 10K-string sequence.
fn bench_clone_strings_10k(c: &mut Criterion) {
    let words: Vec<String> = (0..10_000).map(|i| format!("w{i}")).collect();
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();
    let source = fixtures::words(&refs);
    c.bench_function("clone_strings_10k", |b| {
        b.iter(|| black_box(source.try_clone().unwrap()));
    });
}

/// Benchmark: forward and reverse cursor sums over 10K values.
fn bench_cursor_sum_10k(c: &mut Criterion) {
    let seq = make_sequence(10_000);
    c.bench_function("cursor_sum_10k", |b| {
        b.iter(|| {
            let forward: u64 = seq.cursor().sum();
            let reverse: u64 = seq.reverse_cursor().sum();
            black_box(forward + reverse);
        });
    });
}

criterion_group!(
    benches,
    bench_push_10k,
    bench_push_strings_10k,
    bench_front_insert_remove_1k,
    bench_mixed_workload_5k,
    bench_clone_strings_10k,
    bench_cursor_sum_10k
);
criterion_main!(benches);
